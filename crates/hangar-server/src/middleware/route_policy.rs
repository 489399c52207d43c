//! Route policy middleware.
//!
//! Resolves the route rule for every request, hands it to handlers as a
//! request extension and writes the rule's headers onto the response,
//! replacing same-named headers set by handlers. Static files, API responses
//! and errors all pass through here, so cross-origin isolation covers the
//! engine assets too.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use hangar_site::RouteRule;

use crate::state::AppState;

/// Resolve the route rule and apply its headers.
pub(crate) async fn apply(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let rule = state.site.resolve_route(request.uri().path());
    request.extensions_mut().insert(rule.clone());

    let mut response = next.run(request).await;
    write_headers(response.headers_mut(), &rule);
    response
}

fn write_headers(headers: &mut HeaderMap, rule: &RouteRule) {
    for (name, value) in rule.response_headers().iter() {
        match (
            HeaderName::try_from(name),
            HeaderValue::try_from(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!(header = name, "Skipping route header that is not valid HTTP"),
        }
    }
}
