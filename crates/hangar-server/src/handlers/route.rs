//! Route policy inspection endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use hangar_site::HeaderList;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Query for GET /api/route.
#[derive(Deserialize)]
pub(crate) struct RouteQuery {
    path: Option<String>,
}

/// Response for GET /api/route.
#[derive(Serialize)]
pub(crate) struct RouteResponse {
    path: String,
    /// Whether the page is rendered on the server.
    ssr: bool,
    cors: bool,
    /// Headers the response for `path` carries.
    headers: HeaderList,
}

/// Handle GET /api/route?path=/games/x.
pub(crate) async fn get_route(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, ServerError> {
    let path = query
        .path
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ServerError::BadRequest("missing query parameter: path".to_owned()))?;

    let rule = state.site.resolve_route(&path);
    Ok(Json(RouteResponse {
        ssr: rule.renders_on_server(),
        cors: rule.cors_enabled(),
        headers: rule.response_headers(),
        path,
    }))
}
