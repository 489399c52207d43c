//! Page handler.
//!
//! Every request no other route claims lands here. The route rule resolved by
//! the policy middleware decides between a server-rendered page and the client
//! shell; the blog list is rendered server-side on the pages that show it.

use std::sync::Arc;

use axum::Extension;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::Html;
use hangar_site::{PageData, RenderMode, RouteRule, render_page};

use crate::error::ServerError;
use crate::state::AppState;
use crate::static_files::ASSETS_PREFIX;

/// Pages that list blog entries.
const BLOG_PAGES: [&str; 2] = ["/", "/blog"];

/// Handle any unclaimed path.
pub(crate) async fn get_page(
    State(state): State<Arc<AppState>>,
    Extension(rule): Extension<RouteRule>,
    method: Method,
    uri: Uri,
) -> Result<Html<String>, ServerError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(ServerError::MethodNotAllowed(method.to_string()));
    }

    let path = normalize(uri.path());
    if !is_page_path(path) {
        return Err(ServerError::NotFound(uri.path().to_owned()));
    }

    let site = &state.site;
    let mode = if rule.renders_on_server() {
        RenderMode::Server
    } else {
        RenderMode::Client
    };
    let blogs = (mode == RenderMode::Server && BLOG_PAGES.contains(&path)).then(|| site.blogs());

    Ok(Html(render_page(&PageData {
        meta: site.page_meta(),
        runtime: site.runtime(),
        navigation: site.navigation(),
        blogs: blogs.as_deref(),
        path,
        mode,
    })))
}

/// Strip the trailing slash, keeping `/` for the root.
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Whether `path` can name a page: not under `/api` or the frontend bundle
/// prefix, and no file extension.
fn is_page_path(path: &str) -> bool {
    if is_under(path, "/api") || is_under(path, ASSETS_PREFIX) {
        return false;
    }
    let last = path.rsplit('/').next().unwrap_or_default();
    !last.contains('.')
}

/// Whether `path` is `prefix` itself or below it.
fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
