use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::profile::{FIRST_NAME, HERO_PHRASES, OWNER, PORTRAIT, SOCIALS, TAGLINE};
use crate::typewriter::{Typewriter, TYPE_DELAY_MS};

#[component]
pub fn Hero() -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(HERO_PHRASES));
    let delay = RwSignal::new(TYPE_DELAY_MS as f64);

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            if let Some(next) = typewriter.try_update(|tw| tw.tick()) {
                delay.set(next as f64);
            }
        },
        delay,
    );

    // every change to the typewriter schedules the next tick
    Effect::new(move |_| {
        typewriter.track();
        start(());
    });

    view! {
        <section id="home" class="relative pt-32 pb-20 md:pt-40 md:pb-32">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
                    <div class="animate-fade-in">
                        <h1 class="text-4xl md:text-6xl font-bold mb-4">
                            "Hi, I'm " <span class="text-primary">{FIRST_NAME}</span>
                        </h1>
                        <h2 class="text-2xl md:text-3xl font-medium text-muted-foreground mb-6">
                            <span class="text-foreground">
                                {move || typewriter.with(|tw| tw.text())}
                            </span>
                            <span class="animate-blink">"|"</span>
                        </h2>
                        <p class="text-lg text-muted-foreground mb-8 max-w-lg">{TAGLINE}</p>

                        <div class="flex flex-col sm:flex-row gap-4">
                            <a
                                href="#projects"
                                class="group inline-flex items-center justify-center rounded-md bg-primary px-8 py-3 font-medium text-primary-foreground"
                            >
                                "View My Work"
                                <i class="extra-arrow-right ml-2 transition-transform group-hover:translate-x-1"></i>
                            </a>
                            <a
                                href="#contact"
                                class="inline-flex items-center justify-center rounded-md border px-8 py-3 font-medium hover:bg-muted"
                            >
                                "Contact Me"
                            </a>
                        </div>

                        <div class="flex gap-4 mt-8">
                            {SOCIALS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="rounded-full p-2 text-xl hover:bg-muted"
                                            aria-label=link.label
                                        >
                                            <i class=link.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="relative aspect-square w-full max-w-md mx-auto animate-fade-in">
                        <div class="absolute inset-0 bg-gradient-to-br from-primary/20 to-primary/5 rounded-full"></div>
                        <div class="absolute inset-4 bg-muted rounded-full overflow-hidden">
                            <img src=PORTRAIT alt=OWNER class="w-full h-full object-cover" />
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 hidden md:block">
                <a href="#about" class="animate-bounce block" aria-label="Scroll to about">
                    <i class="extra-arrow-down text-2xl"></i>
                </a>
            </div>
        </section>
    }
}
