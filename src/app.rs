mod about;
mod blog;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod section;
mod tech_stack;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::profile::{SITE_DESCRIPTION, SITE_TITLE};

use about::About;
use blog::BlogSection;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use tech_stack::TechStack;
use theme::provide_theme;

/// Served from `public/`.
const FAVICON: &str = "/favicon.svg";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="color-scheme" content=move || theme.get().color_scheme() />

        <Router>
            <div class=move || {
                format!("{} min-h-screen bg-background text-foreground", theme.get().class())
            }>
                <Navbar />
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <TechStack />
        <Projects />
        <BlogSection />
        <Contact />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Not Found" />
        <section class="container mx-auto px-4 pt-40 pb-20 text-center">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-muted-foreground mb-8">"Page not found."</p>
            <A href="/" attr:class="text-primary underline-offset-4 hover:underline">
                "Back home"
            </A>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::PLACEHOLDER_IMAGE;
    use std::path::Path;

    #[test]
    fn test_linked_assets_exist() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in [FAVICON, PLACEHOLDER_IMAGE] {
            let file = public.join(asset.trim_start_matches('/'));
            assert!(file.is_file(), "{} is missing", file.display());
        }
    }
}
