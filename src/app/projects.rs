use leptos::{ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::projects::{catalog, CategoryTab, GalleryEvent, ProjectGallery, ProjectRecord};

use super::section::SectionHeading;

const CARD_TAG_LIMIT: usize = 2;
const SCROLL_LOCK_CLASS: &str = "overflow-hidden";

#[component]
pub fn Projects() -> impl IntoView {
    let gallery = RwSignal::new(ProjectGallery::new(catalog()));
    let dispatch = move |event: GalleryEvent<'static>| {
        log::debug!("gallery: {event:?}");
        gallery.update(|g| g.handle(event));
    };
    let on_details = Callback::new(move |record: &'static ProjectRecord| {
        dispatch(GalleryEvent::RecordSelected(record))
    });
    let on_close = Callback::new(move |_: ()| dispatch(GalleryEvent::DetailDismissed));

    view! {
        <section id="projects" class="py-20 bg-muted/30">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12">
                    <SectionHeading badge="Portfolio" title="Featured Projects" />
                    <div
                        role="tablist"
                        class="grid grid-cols-4 w-full max-w-md mx-auto mb-8 rounded-md bg-muted p-1"
                    >
                        {CategoryTab::ALL
                            .into_iter()
                            .map(|tab| {
                                let is_active = move || gallery.with(|g| g.active_tab() == tab);
                                view! {
                                    <button
                                        type="button"
                                        role="tab"
                                        aria-selected=move || is_active().to_string()
                                        class=move || {
                                            if is_active() {
                                                "rounded-sm px-3 py-1.5 text-sm font-medium bg-background shadow-sm"
                                            } else {
                                                "rounded-sm px-3 py-1.5 text-sm font-medium text-muted-foreground"
                                            }
                                        }
                                        on:click=move |_| dispatch(GalleryEvent::TabActivated(tab))
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Show
                    when=move || gallery.with(|g| !g.visible().is_empty())
                    fallback=|| {
                        view! {
                            <p class="text-center text-muted-foreground">
                                "No projects in this category yet."
                            </p>
                        }
                    }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || gallery.with(|g| g.visible())
                            key=|record| record.id
                            let:record
                        >
                            <ProjectCard record on_details />
                        </For>
                    </div>
                </Show>
            </div>

            {move || {
                gallery
                    .with(|g| g.selected())
                    .map(|record| view! { <ProjectDialog record on_close /> })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(
    record: &'static ProjectRecord,
    on_details: Callback<&'static ProjectRecord>,
) -> impl IntoView {
    let tags = record.tag_summary(CARD_TAG_LIMIT);

    view! {
        <div class="h-full overflow-hidden rounded-lg border border-muted/30 bg-background hover:shadow-md transition-all duration-300 flex flex-col">
            <div class="aspect-video bg-muted overflow-hidden">
                <img
                    src=record.image_src()
                    alt=record.title
                    class="object-cover w-full h-full transition-transform duration-300 hover:scale-105"
                />
            </div>
            <div class="p-4">
                <div class="flex items-center justify-between">
                    <span class="mb-2 rounded-full border px-2.5 py-0.5 text-xs font-semibold">
                        {record.category.slug()}
                    </span>
                    <div class="flex gap-1">
                        {tags
                            .shown
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="rounded-full bg-secondary px-2.5 py-0.5 text-xs">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                        {(tags.hidden > 0)
                            .then(|| {
                                view! {
                                    <span class="rounded-full bg-secondary px-2.5 py-0.5 text-xs">
                                        {format!("+{}", tags.hidden)}
                                    </span>
                                }
                            })}
                    </div>
                </div>
                <h3 class="text-xl font-semibold">{record.title}</h3>
                <p class="text-sm text-muted-foreground line-clamp-2">{record.short_description}</p>
            </div>
            <div class="px-4 flex-grow">
                <p class="text-sm text-muted-foreground line-clamp-3">{record.description}</p>
            </div>
            <div class="p-4 flex justify-between items-center">
                <div class="flex gap-2">
                    <a
                        href=record.github_href()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center h-8 px-2 rounded-md border text-sm"
                    >
                        <i class="devicon-github-plain mr-1"></i>
                        <span class="sr-only md:not-sr-only md:inline-block">"Code"</span>
                    </a>
                    <a
                        href=record.demo_href()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center h-8 px-2 rounded-md bg-primary text-primary-foreground text-sm"
                    >
                        <i class="extra-external-link mr-1"></i>
                        <span class="sr-only md:not-sr-only md:inline-block">"Demo"</span>
                    </a>
                </div>
                <button
                    type="button"
                    class="h-8 px-3 rounded-md text-sm hover:bg-muted"
                    on:click=move |_| on_details.run(record)
                >
                    "Details"
                </button>
            </div>
        </div>
    }
}

/// Adds or removes the scroll lock class, leaving the other classes alone.
fn body_class(current: &str, locked: bool) -> String {
    let mut classes = current
        .split_whitespace()
        .filter(|c| *c != SCROLL_LOCK_CLASS)
        .collect::<Vec<_>>();
    if locked {
        classes.push(SCROLL_LOCK_CLASS);
    }
    classes.join(" ")
}

fn set_scroll_lock(locked: bool) {
    if let Some(body) = use_document().body() {
        body.set_class_name(&body_class(&body.class_name(), locked));
    }
}

/// Modal view of a single record. Closes on the close button, a click on the
/// backdrop, or Escape.
///
/// While open, the close button has focus and the page behind it does not
/// scroll.
#[component]
fn ProjectDialog(record: &'static ProjectRecord, on_close: Callback<()>) -> impl IntoView {
    let close_ref = NodeRef::<html::Button>::new();

    Effect::new(move |_| {
        if let Some(button) = close_ref.get() {
            let _ = button.focus();
            set_scroll_lock(true);
            on_cleanup(|| set_scroll_lock(false));
        }
    });

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4"
            on:click=move |_| on_close.run(())
        >
            <div
                role="dialog"
                aria-modal="true"
                aria-labelledby="project-dialog-title"
                class="relative w-full max-w-3xl rounded-lg border border-muted/30 bg-background p-6 shadow-lg"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    type="button"
                    node_ref=close_ref
                    class="absolute right-4 top-4 rounded-sm opacity-70 hover:opacity-100"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    <i class="extra-close"></i>
                </button>
                <div class="flex items-center gap-2 mb-1">
                    <span class="rounded-full border px-2.5 py-0.5 text-xs font-semibold">
                        {record.category.slug()}
                    </span>
                    <i class=record.icon().css_class()></i>
                </div>
                <h2 id="project-dialog-title" class="text-2xl font-semibold">
                    {record.title}
                </h2>
                <div class="flex flex-wrap gap-2 mt-2">
                    {record
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="rounded-full bg-secondary px-2.5 py-0.5 text-xs">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="aspect-video bg-muted rounded-md overflow-hidden mt-4">
                    <img src=record.image_src() alt=record.title class="object-cover w-full h-full" />
                </div>
                <div class="max-h-[200px] overflow-y-auto mt-4 p-1">
                    {record
                        .full_description
                        .iter()
                        .map(|p| view! { <p class="text-muted-foreground mb-2">{*p}</p> })
                        .collect_view()}
                    <hr class="my-4 border-muted/30" />
                    <h4 class="font-semibold mb-2">"Key Features:"</h4>
                    <ul class="space-y-2">
                        {record
                            .features
                            .iter()
                            .map(|feature| {
                                view! {
                                    <li class="flex items-start gap-2">
                                        <div class="rounded-full bg-primary/10 p-1 mt-0.5">
                                            <div class="h-1.5 w-1.5 rounded-full bg-primary"></div>
                                        </div>
                                        <span class="text-muted-foreground">{*feature}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="flex justify-end gap-4 mt-4">
                    <a
                        href=record.github_href()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center rounded-md border px-4 py-2"
                    >
                        <i class="devicon-github-plain mr-2"></i>
                        "View Code"
                    </a>
                    <a
                        href=record.demo_href()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center rounded-md bg-primary px-4 py-2 text-primary-foreground"
                    >
                        <i class="extra-external-link mr-2"></i>
                        "Live Demo"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_class_lock() {
        assert_eq!(body_class("", true), "overflow-hidden");
        assert_eq!(body_class("font-sans dark", true), "font-sans dark overflow-hidden");
        assert_eq!(
            body_class("font-sans overflow-hidden", true),
            "font-sans overflow-hidden"
        );
    }

    #[test]
    fn test_body_class_unlock() {
        assert_eq!(body_class("font-sans overflow-hidden dark", false), "font-sans dark");
        assert_eq!(body_class("overflow-hidden-x", false), "overflow-hidden-x");
        assert_eq!(body_class("", false), "");
    }
}
