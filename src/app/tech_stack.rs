use leptos::prelude::*;

use crate::profile::TECH_STACK;

use super::section::SectionHeading;

#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <section id="tech-stack" class="py-20 bg-muted/30">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12">
                    <SectionHeading badge="Skills" title="Tech Stack" />
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {TECH_STACK
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="rounded-lg border border-muted/30 bg-background p-6">
                                    <h3 class="text-lg font-semibold mb-4">{group.title}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <span class="rounded-md bg-secondary px-2 py-1 text-sm">
                                                        {*item}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
