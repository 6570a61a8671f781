use chrono::{DateTime, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use dashmap::DashMap;
#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

#[cfg(feature = "ssr")]
pub static GLOBAL_META_CACHE: LazyLock<DashMap<String, PostMeta>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "blog"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    description: String,
    author: String,
    date: DateTime<Utc>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub name: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlogError {
    #[error("Blog post not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse blog post {0}")]
    ParseError(String),
}

/// Embedded markdown post names, without the `.md` extension.
pub fn post_names() -> Vec<String> {
    Assets::iter()
        .filter_map(|s| s.strip_suffix(".md").map(str::to_string))
        .collect()
}

#[cfg(feature = "ssr")]
pub fn parse_meta(file_name: &str, content: &str) -> Result<PostMeta, BlogError> {
    let name = file_name.strip_suffix(".md").unwrap_or(file_name);
    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| BlogError::ParseError(name.to_string()))?;
    Ok(PostMeta {
        name: name.to_string(),
        title: fm.data.title,
        description: fm.data.description,
        author: fm.data.author,
        date: fm.data.date,
        tags: fm.data.tags,
    })
}

#[cfg(feature = "ssr")]
fn newest_first(mut posts: Vec<PostMeta>) -> Vec<PostMeta> {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

#[cfg(feature = "ssr")]
fn decode(name: &str, data: Vec<u8>) -> Result<String, BlogError> {
    String::from_utf8(data).map_err(|_| BlogError::ParseError(name.to_string()))
}

#[cfg(feature = "ssr")]
fn load_post(name: &str) -> Result<PostMeta, BlogError> {
    let file_name = format!("{name}.md");
    let file = Assets::get(&file_name).ok_or_else(|| BlogError::NotFound(name.to_string()))?;
    let content = decode(name, file.data.into())?;
    parse_meta(&file_name, &content)
}

/// Failed loads are not cached.
#[cfg(feature = "ssr")]
fn cached_meta<F>(
    cache: &DashMap<String, PostMeta>,
    name: &str,
    load: F,
) -> Result<PostMeta, BlogError>
where
    F: FnOnce(&str) -> Result<PostMeta, BlogError>,
{
    let meta = cache
        .entry(name.to_string())
        .or_try_insert_with(|| load(name))?;
    Ok(meta.clone())
}

/// All embedded posts, newest first.
#[cfg(feature = "ssr")]
pub fn get_meta() -> Result<Vec<PostMeta>, BlogError> {
    let cache = &*GLOBAL_META_CACHE;
    let posts = post_names()
        .iter()
        .map(|name| cached_meta(cache, name, load_post))
        .collect::<Result<Vec<PostMeta>, BlogError>>()?;
    Ok(newest_first(posts))
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    const POST: &str = r#"---
title: Writing a Tiny Compiler
description: Notes from building a toy language on LLVM.
author: Creed Warf
date: 2025-03-01T12:00:00Z
tags:
  - compilers
  - llvm
---

# Hello
"#;

    #[test]
    fn test_parse_meta() {
        let meta = parse_meta("tiny-compiler.md", POST).expect("front matter should parse");
        assert_eq!(meta.name, "tiny-compiler");
        assert_eq!(meta.title, "Writing a Tiny Compiler");
        assert_eq!(meta.author, "Creed Warf");
        assert_eq!(meta.tags, vec!["compilers", "llvm"]);
        assert_eq!(meta.date.to_rfc3339(), "2025-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_parse_meta_without_front_matter() {
        let err = parse_meta("draft.md", "# just a heading\n").unwrap_err();
        assert_eq!(err, BlogError::ParseError("draft".to_string()));
    }

    fn post(title: &str, date: &str) -> String {
        format!(
            "---\ntitle: {title}\ndescription: d\nauthor: Creed Warf\ndate: {date}\n---\n\nbody\n"
        )
    }

    #[test]
    fn test_newest_first() {
        let files = [
            ("older.md", post("Older", "2024-01-10T00:00:00Z")),
            ("newer.md", post("Newer", "2025-02-20T00:00:00Z")),
            ("middle.md", post("Middle", "2024-08-01T00:00:00Z")),
        ];
        let posts = files
            .iter()
            .map(|(file_name, content)| parse_meta(file_name, content))
            .collect::<Result<Vec<_>, _>>()
            .expect("posts should parse");

        let names = newest_first(posts)
            .into_iter()
            .map(|p| p.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["newer", "middle", "older"]);
    }

    #[test]
    fn test_malformed_post_fails_listing() {
        let cache = DashMap::new();
        let good = post("Good", "2024-01-10T00:00:00Z");
        let posts = ["good", "broken"]
            .iter()
            .map(|name| {
                cached_meta(&cache, name, |name| match name {
                    "good" => parse_meta("good.md", &good),
                    _ => parse_meta("broken.md", "no front matter"),
                })
            })
            .collect::<Result<Vec<_>, _>>();
        assert_eq!(posts, Err(BlogError::ParseError("broken".to_string())));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_load_missing_post() {
        assert_eq!(
            load_post("does-not-exist"),
            Err(BlogError::NotFound("does-not-exist".to_string()))
        );
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert_eq!(
            decode("binary", vec![0xff, 0xfe]),
            Err(BlogError::ParseError("binary".to_string()))
        );
        assert_eq!(decode("text", b"ok".to_vec()).as_deref(), Ok("ok"));
    }

    #[test]
    fn test_cached_meta_loads_once() {
        let cache = DashMap::new();
        let first = cached_meta(&cache, "tiny-compiler", |name| {
            parse_meta(&format!("{name}.md"), POST)
        })
        .expect("first load should parse");
        assert_eq!(first.title, "Writing a Tiny Compiler");

        let second = cached_meta(&cache, "tiny-compiler", |name| {
            Err(BlogError::NotFound(name.to_string()))
        })
        .expect("second load should come from the cache");
        assert_eq!(second, first);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cached_meta_skips_failures() {
        let cache = DashMap::new();
        let err = cached_meta(&cache, "draft", |name| {
            Err(BlogError::ParseError(name.to_string()))
        })
        .unwrap_err();
        assert_eq!(err, BlogError::ParseError("draft".to_string()));
        assert!(cache.is_empty());

        let meta = cached_meta(&cache, "draft", |_| parse_meta("draft.md", POST))
            .expect("retry should load");
        assert_eq!(meta.name, "draft");
    }
}
