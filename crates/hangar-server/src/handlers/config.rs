//! Configuration API endpoint.
//!
//! Returns the public runtime configuration for the frontend.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use hangar_config::RuntimeConfig;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/config.
#[derive(Serialize)]
pub(crate) struct ConfigResponse {
    /// Values page code reads (`docsUrl`, `apiRoot`, ...).
    public: RuntimeConfig,
    /// Full URL of the demos collection.
    #[serde(rename = "demosUrl")]
    demos_url: String,
}

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    let runtime = state.site.runtime();
    Json(ConfigResponse {
        public: runtime.clone(),
        demos_url: runtime.demos_url(),
    })
}
