//! `hangar serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use hangar_config::{CliSettings, Config};
use hangar_server::{run_server, server_config_from_config};
use hangar_site::Site;

use crate::error::CliError;
use crate::output::{Output, Tone};

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover hangar.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory with frontend and engine static files (overrides config).
    #[arg(long)]
    public_dir: Option<PathBuf>,

    /// Backend API root URL (overrides config and HANGAR_PUBLIC_API_ROOT).
    #[arg(long)]
    api_root: Option<String>,

    /// Enable verbose output (info-level logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::stderr();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            public_dir: self.public_dir,
            api_root: self.api_root,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(
            config_path = ?config.config_path,
            custom_routes = config.routes.len(),
            "Configuration loaded"
        );
        let site = Arc::new(Site::from_config(&config)?);

        let runtime = site.runtime();
        output.line(
            Tone::Heading,
            &format!("Starting server on {}:{}", config.server.host, config.server.port),
        );
        output.field(1, "API root", &runtime.api_root);
        output.field(1, "Demos", &runtime.demos_url());
        output.field(1, "Engine path", &runtime.engine_path);
        output.field(1, "Public directory", &config.public_dir.display().to_string());
        if !config.public_dir.is_dir() {
            output.line(
                Tone::Warning,
                "Public directory not found, static assets will return 404",
            );
        }
        if !config.routes.is_empty() {
            output.field(1, "Custom route rules", &config.routes.len().to_string());
        }

        run_server(server_config_from_config(&config), site)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        output.line(Tone::Success, "Server stopped");
        Ok(())
    }
}
