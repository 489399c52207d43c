//! `hangar routes` command implementation.
//!
//! Prints the effective rendering mode and headers for request paths, or the
//! declared rule table with `--table`.

use std::path::PathBuf;

use clap::Args;
use hangar_config::{CliSettings, Config};
use hangar_site::{RouteRule, RouteTable};

use crate::error::CliError;
use crate::output::{Output, Tone, format_field};

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Path to configuration file (default: auto-discover hangar.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend API root URL, when none is configured.
    #[arg(long, env = "HANGAR_PUBLIC_API_ROOT")]
    api_root: Option<String>,

    /// List declared rules (built-in first) instead of resolving paths.
    #[arg(long)]
    table: bool,

    /// Request paths to resolve.
    #[arg(required_unless_present = "table")]
    paths: Vec<String>,
}

impl RoutesArgs {
    /// Execute the routes command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or a configured route rule is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            api_root: self.api_root,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let table = RouteTable::with_builtin(&config.routes)?;
        tracing::debug!(rules = table.len(), "Route table built");

        let output = Output::stdout();
        if self.table {
            for line in describe_table(&table) {
                output.line(Tone::Plain, &line);
            }
            return Ok(());
        }
        for path in &self.paths {
            output.line(Tone::Heading, path);
            for line in describe(&table.resolve(path)) {
                output.line(Tone::Plain, &line);
            }
        }
        Ok(())
    }
}

/// Field lines summarizing a rule at the given depth.
fn rule_fields(rule: &RouteRule, depth: usize) -> Vec<String> {
    let render = if rule.renders_on_server() {
        "server"
    } else {
        "client"
    };
    let mut lines = vec![
        format_field(depth, "render", render),
        format_field(depth, "cors", &rule.cors_enabled().to_string()),
    ];
    let headers = rule.response_headers();
    if headers.is_empty() {
        lines.push(format_field(depth, "headers", "none"));
    } else {
        lines.push(format_field(depth, "headers", ""));
        lines.extend(
            headers
                .iter()
                .map(|(name, value)| format_field(depth + 1, name, value)),
        );
    }
    lines
}

/// Human-readable summary of a resolved rule.
fn describe(rule: &RouteRule) -> Vec<String> {
    rule_fields(rule, 1)
}

/// Every declared pattern with its own (unmerged) rule.
fn describe_table(table: &RouteTable) -> Vec<String> {
    table
        .iter()
        .flat_map(|(pattern, rule)| {
            std::iter::once(pattern.as_str().to_owned()).chain(rule_fields(rule, 1))
        })
        .collect()
}
