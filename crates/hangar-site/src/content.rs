//! Page metadata, navigation entries and blog entries.

use hangar_config::RuntimeConfig;
use serde::Serialize;

/// Site title, also used as the meta description.
pub const SITE_TITLE: &str = "ИгроЦех - сервер игр на Godot";

/// Thumbnail used by the placeholder blog entries.
pub const GODOT_ICON_URL: &str =
    "https://raw.githubusercontent.com/godotengine/godot/refs/heads/master/icon.svg";

/// Number of placeholder blog entries.
const PLACEHOLDER_BLOG_COUNT: usize = 9;

/// Document-level metadata shared by every page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// `<title>` text.
    pub title: String,
    /// `<meta name="description">` content.
    pub description: String,
    /// `<html lang>` attribute.
    pub lang: String,
    /// `<link>` elements in `<head>`, in order.
    pub links: Vec<HeadLink>,
}

/// A `<link>` element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadLink {
    pub rel: String,
    pub href: String,
    /// `crossorigin` attribute; `Some("")` renders as a bare attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossorigin: Option<String>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: SITE_TITLE.to_owned(),
            description: SITE_TITLE.to_owned(),
            lang: "ru".to_owned(),
            links: vec![
                HeadLink {
                    rel: "preconnect".to_owned(),
                    href: "https://fonts.googleapis.com".to_owned(),
                    crossorigin: None,
                },
                HeadLink {
                    rel: "preconnect".to_owned(),
                    href: "https://fonts.gstatic.com".to_owned(),
                    crossorigin: Some(String::new()),
                },
            ],
        }
    }
}

/// Entry of the top navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub name: String,
    pub link: String,
}

impl NavEntry {
    fn new(name: &str, link: &str) -> Self {
        Self {
            name: name.to_owned(),
            link: link.to_owned(),
        }
    }
}

/// Build the navigation bar: games, new game, docs, forum, about.
///
/// The docs and forum links come from the runtime config.
#[must_use]
pub fn navigation(runtime: &RuntimeConfig) -> Vec<NavEntry> {
    vec![
        NavEntry::new("games", "/games"),
        NavEntry::new("new game", "/new"),
        NavEntry::new("docs", &runtime.docs_url),
        NavEntry::new("forum", &runtime.forum_url),
        NavEntry::new("about", "/about"),
    ]
}

/// A blog post teaser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlogEntry {
    pub title: String,
    pub text: String,
    /// Thumbnail image URL.
    pub thumb: String,
}

/// Provides the ordered blog entries shown on the site.
///
/// Pages only see this trait, so the placeholder data can be replaced by a
/// real content source without touching callers.
pub trait BlogSource: Send + Sync {
    /// Blog entries, newest first.
    fn entries(&self) -> Vec<BlogEntry>;
}

/// Fixed demo data used until a real blog backend exists.
#[derive(Debug)]
pub struct PlaceholderBlogs {
    entries: Vec<BlogEntry>,
}

impl Default for PlaceholderBlogs {
    fn default() -> Self {
        let entry = BlogEntry {
            title: "Cool Blog".to_owned(),
            text: "I love bugs".to_owned(),
            thumb: GODOT_ICON_URL.to_owned(),
        };
        Self {
            entries: vec![entry; PLACEHOLDER_BLOG_COUNT],
        }
    }
}

impl BlogSource for PlaceholderBlogs {
    fn entries(&self) -> Vec<BlogEntry> {
        self.entries.clone()
    }
}
