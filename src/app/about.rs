use leptos::prelude::*;

use crate::profile::{ABOUT_PARAGRAPHS, HIGHLIGHTS};

use super::section::SectionHeading;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12">
                    <SectionHeading badge="About Me" title="Who I Am" />
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-12 items-start">
                    <div class="lg:col-span-2 space-y-4">
                        {ABOUT_PARAGRAPHS
                            .iter()
                            .map(|p| {
                                view! { <p class="text-lg text-muted-foreground leading-relaxed">{*p}</p> }
                            })
                            .collect_view()}
                    </div>
                    <div class="grid grid-cols-3 lg:grid-cols-1 gap-4">
                        {HIGHLIGHTS
                            .iter()
                            .map(|h| {
                                view! {
                                    <div class="rounded-lg border border-muted/30 p-6 text-center">
                                        <div class="text-3xl font-bold text-primary">{h.value}</div>
                                        <div class="text-sm text-muted-foreground mt-1">{h.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
