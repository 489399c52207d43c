//! Content API endpoints: navigation, blog entries and page metadata.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use hangar_site::{BlogEntry, NavEntry, PageMeta};
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    items: Vec<NavEntry>,
}

/// Response for GET /api/blogs.
#[derive(Serialize)]
pub(crate) struct BlogsResponse {
    items: Vec<BlogEntry>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(State(state): State<Arc<AppState>>) -> Json<NavigationResponse> {
    Json(NavigationResponse {
        items: state.site.navigation().to_vec(),
    })
}

/// Handle GET /api/blogs.
pub(crate) async fn get_blogs(State(state): State<Arc<AppState>>) -> Json<BlogsResponse> {
    Json(BlogsResponse {
        items: state.site.blogs(),
    })
}

/// Handle GET /api/meta.
pub(crate) async fn get_meta(State(state): State<Arc<AppState>>) -> Json<PageMeta> {
    Json(state.site.page_meta().clone())
}
