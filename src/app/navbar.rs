use leptos::{either::Either, prelude::*};

use crate::profile::{FIRST_NAME, NAV_SECTIONS, OWNER};

use super::theme::{use_theme, Theme};

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let (menu_open, set_menu_open) = signal(false);

    let links = move |mobile: bool| {
        NAV_SECTIONS
            .iter()
            .map(|section| {
                let class = if mobile {
                    "block px-4 py-2 rounded-md hover:bg-muted"
                } else {
                    "text-sm font-medium text-muted-foreground hover:text-foreground transition-colors"
                };
                view! {
                    <a href=format!("#{}", section.id) class=class on:click=move |_| set_menu_open(false)>
                        {section.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-40 border-b border-muted/30 bg-background/80 backdrop-blur">
            <nav class="container mx-auto px-4 h-16 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold" aria-label=OWNER>
                    <span class="text-primary">{FIRST_NAME}</span>
                    ".dev"
                </a>
                <div class="hidden md:flex items-center gap-6">{links(false)}</div>
                <div class="flex items-center gap-2">
                    <button
                        type="button"
                        class="rounded-full p-2 hover:bg-muted"
                        aria-label=move || theme.get().toggle_label()
                        on:click=move |_| theme.toggle()
                    >
                        {move || match theme.get() {
                            Theme::Dark => Either::Left(view! { <i class="extra-sun"></i> }),
                            Theme::Light => Either::Right(view! { <i class="extra-moon"></i> }),
                        }}
                    </button>
                    <button
                        type="button"
                        class="md:hidden rounded-md p-2 hover:bg-muted"
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <i class=move || if menu_open.get() { "extra-close" } else { "extra-menu" }></i>
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="md:hidden border-t border-muted/30 px-4 py-2">{links(true)}</div>
            </Show>
        </header>
    }
}
