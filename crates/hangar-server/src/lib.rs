//! HTTP server for the Game Hangar site front.
//!
//! This crate provides an axum server that:
//! - applies the route policy (cross-origin isolation, CORS, explicit headers)
//!   to every response
//! - renders pages server-side or as a client shell, per route
//! - exposes the public runtime config and site content as JSON
//! - serves static frontend and engine assets from the public directory
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use hangar_config::Config;
//! use hangar_server::{run_server, server_config_from_config};
//! use hangar_site::Site;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load(None, None).unwrap();
//!     let site = Arc::new(Site::from_config(&config).unwrap());
//!     run_server(server_config_from_config(&config), site).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (hangar-server)
//!                        │
//!                        ├─► route policy middleware ──► Site::resolve_route
//!                        │
//!                        ├─► API routes (/api/config, /api/navigation, ...)
//!                        │
//!                        ├─► Static files (tower-http ServeDir)
//!                        │
//!                        └─► Page fallback (SSR page or client shell)
//! ```
//!
//! The backend API at `apiRoot` is never called from here; its URL is only
//! handed to the browser.

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::path::PathBuf;
use std::sync::Arc;

use hangar_site::Site;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory with frontend and engine static files.
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            public_dir: PathBuf::from("public"),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails to start.
pub async fn run_server(
    config: ServerConfig,
    site: Arc<Site>,
) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = site.runtime();
    tracing::info!(
        api_root = %runtime.api_root,
        engine_path = %runtime.engine_path,
        routes = site.routes().len(),
        "Site configuration loaded"
    );

    let state = Arc::new(AppState {
        site,
        public_dir: config.public_dir,
    });
    let app = app::create_router(state);

    let listener = bind_listener(&config.host, config.port).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Bind a listener to `host:port`.
///
/// `host` may be an IPv4 or IPv6 literal (without brackets) or a hostname,
/// which is resolved.
async fn bind_listener(host: &str, port: u16) -> std::io::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((host, port)).await
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl-C");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from loaded configuration.
#[must_use]
pub fn server_config_from_config(config: &hangar_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        public_dir: config.public_dir.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_listener_ipv4_literal() {
        let listener = bind_listener("127.0.0.1", 0).await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn test_bind_listener_resolves_hostname() {
        let listener = bind_listener("localhost", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_listener_accepts_unbracketed_ipv6() {
        // Hosts without an IPv6 stack fail at bind, not at address parsing.
        match bind_listener("::1", 0).await {
            Ok(listener) => assert!(listener.local_addr().unwrap().is_ipv6()),
            Err(err) => assert_ne!(err.kind(), std::io::ErrorKind::InvalidInput),
        }
    }
}
