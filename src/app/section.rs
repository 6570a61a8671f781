use leptos::prelude::*;

#[component]
pub fn SectionHeading(badge: &'static str, #[prop(into)] title: String) -> impl IntoView {
    view! {
        <span class="inline-block mb-4 rounded-full border px-3 py-0.5 text-xs font-semibold">
            {badge}
        </span>
        <h2 class="text-3xl md:text-4xl font-bold mb-4">{title}</h2>
        <div class="w-20 h-1 bg-primary mx-auto mb-8"></div>
    }
}
