//! Application state.

use std::path::PathBuf;
use std::sync::Arc;

use hangar_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Read-only site configuration and content.
    pub(crate) site: Arc<Site>,
    /// Directory with frontend and engine static files.
    pub(crate) public_dir: PathBuf,
}
