//! Static file serving.
//!
//! Frontend bundle files live under `<public_dir>/assets`, the game engine
//! runtime under `<public_dir>/<enginePath>`. Only directories that exist at
//! startup are mounted; everything else falls through to the page handler.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// URL prefix of the frontend bundle.
pub(crate) const ASSETS_PREFIX: &str = "/assets";

/// Create router for static file serving.
pub(crate) fn static_router(public_dir: &Path, engine_path: &str) -> Router<Arc<AppState>> {
    let mut router = Router::new();

    let assets_dir = public_dir.join(ASSETS_PREFIX.trim_start_matches('/'));
    if assets_dir.is_dir() {
        router = router.nest_service(ASSETS_PREFIX, ServeDir::new(assets_dir));
    }

    if let Some(prefix) = engine_mount(engine_path) {
        let engine_dir = public_dir.join(prefix.trim_start_matches('/'));
        if engine_dir.is_dir() {
            tracing::info!(prefix, dir = %engine_dir.display(), "Serving engine assets");
            router = router.nest_service(prefix, ServeDir::new(engine_dir));
        } else {
            tracing::warn!(
                dir = %engine_dir.display(),
                "Engine asset directory not found, game pages will not load the runtime"
            );
        }
    }

    let favicon_path = public_dir.join("favicon.ico");
    if favicon_path.is_file() {
        router = router.route_service("/favicon.ico", ServeFile::new(favicon_path));
    }

    router
}

/// Mount point for the engine directory, or `None` when it cannot be mounted
/// separately (root path or inside the assets prefix).
fn engine_mount(engine_path: &str) -> Option<&str> {
    let prefix = engine_path.trim_end_matches('/');
    let inside_assets =
        prefix == ASSETS_PREFIX || prefix.starts_with(&format!("{ASSETS_PREFIX}/"));
    (!prefix.is_empty() && !inside_assets).then_some(prefix)
}
