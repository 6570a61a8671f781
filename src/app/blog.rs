use leptos::{either::EitherOf3, prelude::*, server_fn::codec::GetUrl};

#[cfg(feature = "ssr")]
use crate::blog::get_meta;
use crate::blog::PostMeta;

use super::section::SectionHeading;

#[server(input = GetUrl)]
pub async fn get_blog_meta() -> Result<Vec<PostMeta>, ServerFnError> {
    get_meta().map_err(|e| {
        tracing::warn!("couldn't list blog posts: {e}");
        ServerFnError::new(e)
    })
}

#[derive(Debug, Clone, PartialEq)]
enum BlogListing {
    Posts(Vec<PostMeta>),
    ComingSoon,
    Unavailable,
}

impl From<Result<Vec<PostMeta>, ServerFnError>> for BlogListing {
    fn from(res: Result<Vec<PostMeta>, ServerFnError>) -> Self {
        match res {
            Ok(posts) if posts.is_empty() => Self::ComingSoon,
            Ok(posts) => Self::Posts(posts),
            Err(e) => {
                log::warn!("couldn't load blog posts: {e}");
                Self::Unavailable
            }
        }
    }
}

#[component]
pub fn BlogSection() -> impl IntoView {
    let posts = Resource::new(|| (), |_| get_blog_meta());

    view! {
        <section id="blog" class="py-20">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <SectionHeading badge="Blog" title="Creed's Byte Blog" />
                    <Transition fallback=move || {
                        view! {
                            <div class="max-w-2xl mx-auto space-y-4">
                                <div class="loading-skeleton h-8 rounded"></div>
                                <div class="loading-skeleton h-6 rounded w-3/4"></div>
                            </div>
                        }
                    }>
                        {move || Suspend::new(async move {
                            match BlogListing::from(posts.await) {
                                BlogListing::Posts(posts) => {
                                    EitherOf3::A(view! { <PostList posts /> })
                                }
                                BlogListing::ComingSoon => {
                                    EitherOf3::B(
                                        view! {
                                            <p class="text-muted-foreground text-lg">"Coming soon..."</p>
                                        },
                                    )
                                }
                                BlogListing::Unavailable => {
                                    EitherOf3::C(
                                        view! {
                                            <p class="text-muted-foreground text-lg">
                                                "Posts couldn't be loaded right now."
                                            </p>
                                        },
                                    )
                                }
                            }
                        })}
                    </Transition>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PostList(posts: Vec<PostMeta>) -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto grid gap-4 text-left">
            {posts
                .into_iter()
                .map(|post| {
                    view! {
                        <article class="rounded-lg border border-muted/30 bg-background p-6">
                            <div class="flex flex-wrap items-center gap-3 text-sm text-muted-foreground">
                                <span>{post.date.format("%b %e, %Y").to_string()}</span>
                                <span>{post.author}</span>
                            </div>
                            <h3 class="text-xl font-semibold mt-2">{post.title}</h3>
                            <p class="text-muted-foreground mt-2">{post.description}</p>
                            <div class="mt-3 flex flex-wrap gap-2">
                                {post
                                    .tags
                                    .into_iter()
                                    .map(|tag| {
                                        view! {
                                            <span class="rounded-full bg-secondary px-2.5 py-0.5 text-xs">
                                                {tag}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}
