//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::route_policy;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/config", get(handlers::config::get_config))
        .route("/api/navigation", get(handlers::content::get_navigation))
        .route("/api/blogs", get(handlers::content::get_blogs))
        .route("/api/meta", get(handlers::content::get_meta))
        .route("/api/route", get(handlers::route::get_route));

    let static_routes =
        static_files::static_router(&state.public_dir, &state.site.runtime().engine_path);

    Router::new()
        .merge(api_routes)
        .merge(static_routes)
        .fallback(handlers::pages::get_page)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(
                    Arc::clone(&state),
                    route_policy::apply,
                )),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use hangar_config::{RouteRuleConfig, RuntimeConfig};
    use hangar_site::{RouteTable, Site};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    fn runtime() -> RuntimeConfig {
        RuntimeConfig {
            docs_url: "/docs".to_owned(),
            forum_url: "/forum".to_owned(),
            api_root: "https://gw.example.net/game-hangar".to_owned(),
            api_demos_prefix: "/v1/demos".to_owned(),
            engine_path: "/thirdparty/godot/".to_owned(),
        }
    }

    fn router_with(public_dir: &Path, extra: &[RouteRuleConfig]) -> Router {
        let site = Site::new(runtime(), RouteTable::with_builtin(extra).unwrap());
        create_router(Arc::new(AppState {
            site: Arc::new(site),
            public_dir: public_dir.to_path_buf(),
        }))
    }

    fn router() -> Router {
        router_with(Path::new("/nonexistent-hangar-public"), &[])
    }

    async fn send(router: Router, method: &str, uri: &str) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn get(router: Router, uri: &str) -> Response {
        send(router, "GET", uri).await
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn assert_isolated(response: &Response) {
        let headers = response.headers();
        assert_eq!(headers["cross-origin-opener-policy"], "same-origin");
        assert_eq!(headers["cross-origin-embedder-policy"], "require-corp");
    }

    #[tokio::test]
    async fn test_game_page_is_client_shell() {
        let response = get(router(), "/games/space-shooter").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_isolated(&response);

        let html = body_string(response).await;
        assert!(html.contains("<div id=\"app\"></div>"));
        assert!(!html.contains("data-server-rendered"));
    }

    #[tokio::test]
    async fn test_new_page_is_client_shell() {
        let html = body_string(get(router(), "/new").await).await;
        assert!(html.contains("<div id=\"app\"></div>"));
    }

    #[tokio::test]
    async fn test_about_page_is_server_rendered() {
        let response = get(router(), "/about").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_isolated(&response);

        let html = body_string(response).await;
        assert!(html.contains("data-server-rendered=\"true\""));
        assert!(html.contains("<a href=\"/about\" aria-current=\"page\">about</a>"));
        assert!(!html.contains("<section class=\"blogs\">"));
    }

    #[tokio::test]
    async fn test_home_page_lists_blogs() {
        let html = body_string(get(router(), "/").await).await;
        assert_eq!(html.matches("<h2>Cool Blog</h2>").count(), 9);
    }

    #[tokio::test]
    async fn test_api_config() {
        let response = get(router(), "/api/config").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_isolated(&response);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["public"]["docsUrl"], "/docs");
        assert_eq!(json["public"]["apiDemosPrefix"], "/v1/demos");
        assert_eq!(
            json["demosUrl"],
            "https://gw.example.net/game-hangar/v1/demos"
        );
    }

    #[tokio::test]
    async fn test_api_navigation() {
        let json: serde_json::Value =
            serde_json::from_str(&body_string(get(router(), "/api/navigation").await).await)
                .unwrap();
        let names: Vec<&str> = json["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["games", "new game", "docs", "forum", "about"]);
    }

    #[tokio::test]
    async fn test_api_blogs_and_meta() {
        let blogs: serde_json::Value =
            serde_json::from_str(&body_string(get(router(), "/api/blogs").await).await).unwrap();
        assert_eq!(blogs["items"].as_array().unwrap().len(), 9);

        let meta: serde_json::Value =
            serde_json::from_str(&body_string(get(router(), "/api/meta").await).await).unwrap();
        assert_eq!(meta["lang"], "ru");
        assert_eq!(meta["title"], "ИгроЦех - сервер игр на Godot");
    }

    #[tokio::test]
    async fn test_api_route() {
        let response = get(router(), "/api/route?path=/games/x").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["ssr"], false);
        assert_eq!(json["cors"], false);
        assert_eq!(json["headers"]["Cross-Origin-Embedder-Policy"], "require-corp");
    }

    #[tokio::test]
    async fn test_api_route_requires_path() {
        let response = get(router(), "/api/route").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_isolated(&response);
    }

    #[tokio::test]
    async fn test_unknown_api_and_missing_file_are_isolated_404s() {
        for uri in ["/api/unknown", "/thirdparty/godot/missing.wasm"] {
            let response = get(router(), uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            assert_isolated(&response);
        }
    }

    #[tokio::test]
    async fn test_extensionless_asset_path_is_404_not_shell() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();

        for router in [router(), router_with(dir.path(), &[])] {
            let response = get(router, "/assets/app").await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_isolated(&response);
            assert!(!body_string(response).await.contains("<html"));
        }
    }

    #[tokio::test]
    async fn test_post_to_page_not_allowed() {
        let response = send(router(), "POST", "/about").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_engine_assets_served_with_isolation_headers() {
        let dir = tempfile::tempdir().unwrap();
        let engine_dir = dir.path().join("thirdparty/godot");
        std::fs::create_dir_all(&engine_dir).unwrap();
        std::fs::write(engine_dir.join("godot.js"), "// engine").unwrap();

        let response = get(router_with(dir.path(), &[]), "/thirdparty/godot/godot.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_isolated(&response);
        assert_eq!(body_string(response).await, "// engine");
    }

    #[tokio::test]
    async fn test_configured_rule_overrides_header_and_adds_cors() {
        let extra = [RouteRuleConfig {
            pattern: "/games/*".to_owned(),
            cors: Some(true),
            headers: [(
                "Cross-Origin-Embedder-Policy".to_owned(),
                "credentialless".to_owned(),
            )]
            .into_iter()
            .collect(),
            ..RouteRuleConfig::default()
        }];
        let router = router_with(Path::new("/nonexistent-hangar-public"), &extra);

        let response = get(router, "/games/x").await;
        let headers = response.headers();
        assert_eq!(headers["cross-origin-embedder-policy"], "credentialless");
        assert_eq!(headers["cross-origin-opener-policy"], "same-origin");
        assert_eq!(headers["access-control-allow-origin"], "*");
    }
}
