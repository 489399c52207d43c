//! HTML page shell.
//!
//! Server-rendered pages carry the navigation bar and, when given, the blog
//! list in the markup. Client-rendered pages (game player, game editor) get
//! the same `<head>` and an empty mount point; the frontend bundle builds the
//! page in the browser. Both embed the public runtime config as JSON.

use std::fmt::Write;

use hangar_config::RuntimeConfig;

use crate::content::{BlogEntry, NavEntry, PageMeta};

/// Frontend bundle entry point.
const ENTRY_SCRIPT: &str = "/assets/app.js";
/// Frontend stylesheet.
const STYLESHEET: &str = "/assets/main.css";
/// Id of the `<script>` element holding the runtime config.
pub const CONFIG_ELEMENT_ID: &str = "hangar-config";

/// How the page body is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Markup rendered here.
    Server,
    /// Empty mount point, rendered by the browser.
    Client,
}

/// Data needed to render a page.
pub struct PageData<'a> {
    pub meta: &'a PageMeta,
    pub runtime: &'a RuntimeConfig,
    pub navigation: &'a [NavEntry],
    /// Blog list to render server-side, if the page shows one.
    pub blogs: Option<&'a [BlogEntry]>,
    /// Request path, used to mark the active navigation entry.
    pub path: &'a str,
    pub mode: RenderMode,
}

/// Render a complete HTML document.
pub fn render_page(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(4096);

    let _ = writeln!(html, "<!DOCTYPE html>\n<html lang=\"{}\">", escape(&page.meta.lang));
    render_head(&mut html, page);

    html.push_str("<body>\n");
    match page.mode {
        RenderMode::Server => {
            html.push_str("<div id=\"app\" data-server-rendered=\"true\">\n");
            render_nav(&mut html, page.navigation, page.path);
            html.push_str("<main>\n");
            if let Some(blogs) = page.blogs {
                render_blogs(&mut html, blogs);
            }
            html.push_str("</main>\n</div>\n");
        }
        RenderMode::Client => html.push_str("<div id=\"app\"></div>\n"),
    }
    let _ = writeln!(
        html,
        "<script type=\"application/json\" id=\"{CONFIG_ELEMENT_ID}\">{}</script>",
        config_json(page.runtime)
    );
    let _ = writeln!(html, "<script type=\"module\" src=\"{ENTRY_SCRIPT}\"></script>");
    html.push_str("</body>\n</html>\n");
    html
}

fn render_head(html: &mut String, page: &PageData<'_>) {
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(&page.meta.title));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape(&page.meta.description)
    );
    for link in &page.meta.links {
        let _ = write!(
            html,
            "<link rel=\"{}\" href=\"{}\"",
            escape(&link.rel),
            escape(&link.href)
        );
        match link.crossorigin.as_deref() {
            Some("") => html.push_str(" crossorigin"),
            Some(value) => {
                let _ = write!(html, " crossorigin=\"{}\"", escape(value));
            }
            None => {}
        }
        html.push_str(">\n");
    }
    let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{STYLESHEET}\">");
    html.push_str("</head>\n");
}

fn render_nav(html: &mut String, entries: &[NavEntry], path: &str) {
    html.push_str("<header>\n<nav>\n<ul>\n");
    for entry in entries {
        let active = entry.link == path;
        let _ = writeln!(
            html,
            "<li><a href=\"{}\"{}>{}</a></li>",
            escape(&entry.link),
            if active { " aria-current=\"page\"" } else { "" },
            escape(&entry.name)
        );
    }
    html.push_str("</ul>\n</nav>\n</header>\n");
}

fn render_blogs(html: &mut String, blogs: &[BlogEntry]) {
    html.push_str("<section class=\"blogs\">\n");
    for blog in blogs {
        html.push_str("<article class=\"blog\">\n");
        let _ = writeln!(
            html,
            "<img src=\"{}\" alt=\"\" loading=\"lazy\">",
            escape(&blog.thumb)
        );
        let _ = writeln!(html, "<h2>{}</h2>", escape(&blog.title));
        let _ = writeln!(html, "<p>{}</p>", escape(&blog.text));
        html.push_str("</article>\n");
    }
    html.push_str("</section>\n");
}

/// Runtime config as JSON safe to embed in a `<script>` element.
fn config_json(runtime: &RuntimeConfig) -> String {
    serde_json::to_string(runtime)
        .unwrap_or_else(|_| "{}".to_owned())
        .replace("</", "<\\/")
}

fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
