use leptos::prelude::*;

use crate::profile::{EMAIL, LOCATION, SOCIALS};

use super::section::SectionHeading;

#[component]
pub fn Contact() -> impl IntoView {
    let copy_email = format!(
        "navigator.clipboard.writeText('{EMAIL}').then(() => alert('📋 Email copied: {EMAIL}'))"
    );

    view! {
        <section id="contact" class="py-20 bg-muted/30">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12">
                    <SectionHeading badge="Contact" title="Get In Touch" />
                    <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                        "Whether you want to talk about a project, an opportunity, or just say hello, my inbox is open."
                    </p>
                </div>
                <div class="max-w-2xl mx-auto rounded-lg border border-muted/30 bg-background p-8">
                    <div class="space-y-4">
                        <div class="flex items-center gap-3">
                            <i class="extra-email text-primary"></i>
                            <a href=format!("mailto:{EMAIL}") class="hover:underline">
                                {EMAIL}
                            </a>
                        </div>
                        <div class="flex items-center gap-3">
                            <i class="extra-location text-primary"></i>
                            <span>{LOCATION}</span>
                        </div>
                    </div>
                    <div class="flex flex-col sm:flex-row items-center justify-between gap-4 mt-8">
                        <button
                            type="button"
                            class="rounded-md bg-primary px-6 py-3 font-medium text-primary-foreground"
                            onclick=copy_email
                        >
                            "📧 Copy email"
                        </button>
                        <div class="flex gap-3">
                            {SOCIALS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-2xl hover:text-primary"
                                            aria-label=link.label
                                        >
                                            <i class=link.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
