use chrono::DateTime;
use leptos::prelude::*;

use crate::profile::{NAV_SECTIONS, OWNER};

const BUILD_TIME: &str = env!("BUILD_TIME");
const BUILD_YEAR: &str = env!("BUILD_YEAR");

fn build_date(build_time: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|d| d.format("%b %e, %Y").to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-muted/30 py-8">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm text-muted-foreground">
                    {format!("© {BUILD_YEAR} {OWNER}. All rights reserved.")}
                </p>
                <nav class="flex flex-wrap gap-4 text-sm">
                    {NAV_SECTIONS
                        .iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=format!("#{}", section.id)
                                    class="text-muted-foreground hover:text-foreground"
                                >
                                    {section.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                {build_date(BUILD_TIME)
                    .map(|date| {
                        view! {
                            <p class="text-xs text-muted-foreground">"Built with Leptos · " {date}</p>
                        }
                    })}
            </div>
        </footer>
    }
}
