//! Configuration management for the Game Hangar site front.
//!
//! Parses `hangar.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Values are layered in increasing precedence:
//!
//! 1. Built-in defaults
//! 2. `hangar.toml`
//! 3. `HANGAR_PUBLIC_*` environment variables (deploy-time substitution)
//! 4. CLI settings via [`CliSettings`]
//!
//! The result is an immutable [`RuntimeConfig`] exposed read-only to page
//! code. `public.api_root` has no default: a missing or malformed value fails
//! the load instead of starting with a broken API link.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields: `server.host`, every `public.*` field and route header values.

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override static files directory.
    pub public_dir: Option<PathBuf>,
    /// Override backend API root URL.
    pub api_root: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "hangar.toml";

/// Prefix of environment variables overriding `[public]` values.
pub const ENV_PREFIX: &str = "HANGAR_PUBLIC_";

const DEFAULT_DOCS_URL: &str = "/docs";
const DEFAULT_FORUM_URL: &str = "/forum";
const DEFAULT_API_DEMOS_PREFIX: &str = "/v1/demos";
const DEFAULT_ENGINE_PATH: &str = "/thirdparty/godot/";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Public runtime values as parsed from TOML.
    public: PublicConfigRaw,
    /// Extra route rules, applied after the built-in ones.
    pub routes: Vec<RouteRuleConfig>,

    /// Resolved public runtime configuration (set after loading).
    #[serde(skip)]
    pub runtime: RuntimeConfig,
    /// Resolved static files directory (set after loading).
    #[serde(skip)]
    pub public_dir: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Static files directory, relative to the config file.
    public_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            public_dir: None,
        }
    }
}

/// Raw `[public]` table. Every key is optional here; defaults and the
/// `api_root` requirement are applied during resolution.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PublicConfigRaw {
    docs_url: Option<String>,
    forum_url: Option<String>,
    api_root: Option<String>,
    api_demos_prefix: Option<String>,
    engine_path: Option<String>,
}

/// Public runtime configuration injected into every page.
///
/// Serializes with the camelCase keys page code reads
/// (`docsUrl`, `forumUrl`, `apiRoot`, `apiDemosPrefix`, `enginePath`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Documentation link (path or absolute URL).
    pub docs_url: String,
    /// Forum link (path or absolute URL).
    pub forum_url: String,
    /// Absolute URL of the backend API.
    pub api_root: String,
    /// Path of the demos collection under `api_root`.
    pub api_demos_prefix: String,
    /// Path the game engine runtime assets are served from.
    pub engine_path: String,
}

impl RuntimeConfig {
    /// Full URL of the demos collection (`api_root` + `api_demos_prefix`).
    #[must_use]
    pub fn demos_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_root.trim_end_matches('/'),
            self.api_demos_prefix.trim_start_matches('/')
        )
    }
}

/// A `[[routes]]` entry: rendering and header policy for a path pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RouteRuleConfig {
    /// Path pattern (`/new`, `/games/*`, `/**`).
    pub pattern: String,
    /// Whether matching pages are rendered on the server.
    pub ssr: Option<bool>,
    /// Whether permissive CORS headers are added.
    pub cors: Option<bool>,
    /// Response headers.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Required value absent from every source.
    #[error("Missing required configuration value: {0}")]
    Missing(String),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`public.api_root`").
        field: String,
        /// Error message (e.g., "${`API_ROOT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require an absolute http:// or https:// URL with a host.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            ConfigError::Validation(format!("{field} must start with http:// or https://"))
        })?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() || url.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{field} must be an absolute URL with a host"
        )));
    }
    Ok(())
}

/// Require an absolute path (`/...`) without whitespace.
fn require_absolute_path(path: &str, field: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') || path.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{field} must be an absolute path starting with /"
        )));
    }
    Ok(())
}

/// Require an absolute path or an absolute http(s) URL.
fn require_link(link: &str, field: &str) -> Result<(), ConfigError> {
    if link.starts_with("http://") || link.starts_with("https://") {
        require_http_url(link, field)
    } else {
        require_absolute_path(link, field)
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `hangar.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// `HANGAR_PUBLIC_*` environment variables and then CLI settings are applied
    /// on top of the file before the runtime config is resolved and validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// `public.api_root` is missing, or any value is malformed.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.resolve_runtime()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply `HANGAR_PUBLIC_*` overrides resolved through `lookup`.
    ///
    /// Empty values are ignored so an exported-but-blank variable never wipes
    /// a configured value.
    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let public = &mut self.public;
        let slots: [(&str, &mut Option<String>); 5] = [
            ("DOCS_URL", &mut public.docs_url),
            ("FORUM_URL", &mut public.forum_url),
            ("API_ROOT", &mut public.api_root),
            ("API_DEMOS_PREFIX", &mut public.api_demos_prefix),
            ("ENGINE_PATH", &mut public.engine_path),
        ];
        for (suffix, slot) in slots {
            if let Some(value) = lookup(&format!("{ENV_PREFIX}{suffix}")).filter(|v| !v.is_empty())
            {
                *slot = Some(value);
            }
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(public_dir) = &settings.public_dir {
            self.public_dir.clone_from(public_dir);
        }
        if let Some(api_root) = &settings.api_root {
            self.public.api_root = Some(api_root.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            public: PublicConfigRaw::default(),
            routes: Vec::new(),
            runtime: RuntimeConfig::default(),
            public_dir: base.join("public"),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Build the [`RuntimeConfig`] from the layered raw values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if `public.api_root` was never set.
    fn resolve_runtime(&mut self) -> Result<(), ConfigError> {
        let public = &self.public;
        let api_root = public
            .api_root
            .clone()
            .ok_or_else(|| ConfigError::Missing("public.api_root".to_owned()))?;
        let or_default = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_owned())
        };

        self.runtime = RuntimeConfig {
            docs_url: or_default(&public.docs_url, DEFAULT_DOCS_URL),
            forum_url: or_default(&public.forum_url, DEFAULT_FORUM_URL),
            api_root,
            api_demos_prefix: or_default(&public.api_demos_prefix, DEFAULT_API_DEMOS_PREFIX),
            engine_path: or_default(&public.engine_path, DEFAULT_ENGINE_PATH),
        };
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Checks the server settings and the resolved runtime config. Called
    /// automatically by [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_runtime()?;
        self.validate_routes()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate resolved public runtime values.
    fn validate_runtime(&self) -> Result<(), ConfigError> {
        let runtime = &self.runtime;
        require_non_empty(&runtime.api_root, "public.api_root")?;
        require_http_url(&runtime.api_root, "public.api_root")?;
        require_non_empty(&runtime.docs_url, "public.docs_url")?;
        require_link(&runtime.docs_url, "public.docs_url")?;
        require_non_empty(&runtime.forum_url, "public.forum_url")?;
        require_link(&runtime.forum_url, "public.forum_url")?;
        require_non_empty(&runtime.api_demos_prefix, "public.api_demos_prefix")?;
        require_absolute_path(&runtime.api_demos_prefix, "public.api_demos_prefix")?;
        require_non_empty(&runtime.engine_path, "public.engine_path")?;
        require_absolute_path(&runtime.engine_path, "public.engine_path")?;
        Ok(())
    }

    /// Validate that every `[[routes]]` entry names a pattern.
    ///
    /// Pattern syntax itself is checked when the route table is built.
    fn validate_routes(&self) -> Result<(), ConfigError> {
        for (index, rule) in self.routes.iter().enumerate() {
            require_non_empty(&rule.pattern, &format!("routes[{index}].pattern"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        let public = &mut self.public;
        let fields: [(&str, &mut Option<String>); 5] = [
            ("public.docs_url", &mut public.docs_url),
            ("public.forum_url", &mut public.forum_url),
            ("public.api_root", &mut public.api_root),
            ("public.api_demos_prefix", &mut public.api_demos_prefix),
            ("public.engine_path", &mut public.engine_path),
        ];
        for (field, slot) in fields {
            if let Some(value) = slot.as_deref() {
                *slot = Some(expand::expand_env(value, field)?);
            }
        }

        for rule in &mut self.routes {
            for (name, value) in &mut rule.headers {
                let field = format!("routes.\"{}\".headers.{name}", rule.pattern);
                *value = expand::expand_env(value, &field)?;
            }
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.public_dir = config_dir.join(self.server.public_dir.as_deref().unwrap_or("public"));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    const API_ROOT: &str = "https://gw.example.net/game-hangar";

    /// Parse TOML and resolve it the way `load` does, without touching the
    /// process environment.
    fn resolve_toml(toml: &str, env: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        let mut config: Config = toml::from_str(toml)?;
        config.apply_env_overrides(|key| env.get(key).cloned());
        config.resolve_runtime()?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/site"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.public_dir, PathBuf::from("/site/public"));
        assert!(config.routes.is_empty());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_public_defaults_apply_when_only_api_root_set() {
        let config = resolve_toml(&format!("[public]\napi_root = \"{API_ROOT}\"\n"), &[]).unwrap();

        assert_eq!(
            config.runtime,
            RuntimeConfig {
                docs_url: "/docs".to_owned(),
                forum_url: "/forum".to_owned(),
                api_root: API_ROOT.to_owned(),
                api_demos_prefix: "/v1/demos".to_owned(),
                engine_path: "/thirdparty/godot/".to_owned(),
            }
        );
    }

    #[test]
    fn test_missing_api_root_fails_fast() {
        let err = resolve_toml("[public]\ndocs_url = \"/docs\"\n", &[]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)), "got {err:?}");
        assert!(err.to_string().contains("public.api_root"));
    }

    #[test]
    fn test_api_root_must_be_absolute_url() {
        for bad in ["/game-hangar", "ftp://host/x", "https://", "https:///path"] {
            let err = resolve_toml(&format!("[public]\napi_root = \"{bad}\"\n"), &[]).unwrap_err();
            assert!(
                matches!(err, ConfigError::Validation(_)),
                "{bad}: expected validation error, got {err:?}"
            );
            assert!(err.to_string().contains("public.api_root"));
        }
    }

    #[test]
    fn test_engine_path_must_be_absolute() {
        let toml = format!("[public]\napi_root = \"{API_ROOT}\"\nengine_path = \"thirdparty/godot\"\n");
        let err = resolve_toml(&toml, &[]).unwrap_err();
        assert!(err.to_string().contains("public.engine_path"));
    }

    #[test]
    fn test_docs_url_accepts_external_url() {
        let toml = format!(
            "[public]\napi_root = \"{API_ROOT}\"\ndocs_url = \"https://docs.example.net\"\n"
        );
        let config = resolve_toml(&toml, &[]).unwrap();
        assert_eq!(config.runtime.docs_url, "https://docs.example.net");
    }

    #[test]
    fn test_env_overrides_win_over_file() {
        let toml = "[public]\napi_root = \"https://file.example.net\"\nforum_url = \"/forum\"\n";
        let config = resolve_toml(
            toml,
            &[
                ("HANGAR_PUBLIC_API_ROOT", API_ROOT),
                ("HANGAR_PUBLIC_FORUM_URL", "https://forum.example.net"),
            ],
        )
        .unwrap();

        assert_eq!(config.runtime.api_root, API_ROOT);
        assert_eq!(config.runtime.forum_url, "https://forum.example.net");
        assert_eq!(config.runtime.docs_url, "/docs");
    }

    #[test]
    fn test_blank_env_override_is_ignored() {
        let toml = format!("[public]\napi_root = \"{API_ROOT}\"\n");
        let config = resolve_toml(&toml, &[("HANGAR_PUBLIC_ENGINE_PATH", "")]).unwrap();
        assert_eq!(config.runtime.engine_path, "/thirdparty/godot/");
    }

    #[test]
    fn test_api_root_from_env_alone() {
        let config = resolve_toml("", &[("HANGAR_PUBLIC_API_ROOT", API_ROOT)]).unwrap();
        assert_eq!(config.runtime.api_root, API_ROOT);
    }

    #[test]
    fn test_cli_settings_win_over_env() {
        let mut config: Config = toml::from_str("").unwrap();
        config.apply_env_overrides(|key| {
            (key == "HANGAR_PUBLIC_API_ROOT").then(|| "https://env.example.net".to_owned())
        });
        config.apply_cli_settings(&CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(8080),
            public_dir: Some(PathBuf::from("/srv/public")),
            api_root: Some(API_ROOT.to_owned()),
        });
        config.resolve_runtime().unwrap();

        assert_eq!(config.runtime.api_root, API_ROOT);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.public_dir, PathBuf::from("/srv/public"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.public_dir, PathBuf::from("/site/public"));
    }

    #[test]
    fn test_demos_url_joins_without_double_slash() {
        let runtime = RuntimeConfig {
            api_root: format!("{API_ROOT}/"),
            api_demos_prefix: "/v1/demos".to_owned(),
            ..RuntimeConfig::default()
        };
        assert_eq!(runtime.demos_url(), format!("{API_ROOT}/v1/demos"));
    }

    #[test]
    fn test_runtime_config_serializes_camel_case() {
        let config = resolve_toml(&format!("[public]\napi_root = \"{API_ROOT}\"\n"), &[]).unwrap();
        let json = serde_json::to_value(&config.runtime).unwrap();

        assert_eq!(json["docsUrl"], "/docs");
        assert_eq!(json["forumUrl"], "/forum");
        assert_eq!(json["apiRoot"], API_ROOT);
        assert_eq!(json["apiDemosPrefix"], "/v1/demos");
        assert_eq!(json["enginePath"], "/thirdparty/godot/");
    }

    #[test]
    fn test_parse_routes() {
        let toml = format!(
            r#"
[public]
api_root = "{API_ROOT}"

[[routes]]
pattern = "/games/*"
cors = true

[routes.headers]
"Cross-Origin-Embedder-Policy" = "credentialless"

[[routes]]
pattern = "/blog"
ssr = true
"#
        );
        let config = resolve_toml(&toml, &[]).unwrap();

        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].pattern, "/games/*");
        assert_eq!(config.routes[0].cors, Some(true));
        assert_eq!(config.routes[0].ssr, None);
        assert_eq!(
            config.routes[0].headers.get("Cross-Origin-Embedder-Policy"),
            Some(&"credentialless".to_owned())
        );
        assert_eq!(config.routes[1].ssr, Some(true));
        assert!(config.routes[1].headers.is_empty());
    }

    #[test]
    fn test_empty_route_pattern_rejected() {
        let toml = format!("[public]\napi_root = \"{API_ROOT}\"\n\n[[routes]]\npattern = \"\"\n");
        let err = resolve_toml(&toml, &[]).unwrap_err();
        assert!(err.to_string().contains("routes[0].pattern"));
    }

    #[test]
    fn test_server_port_zero_rejected() {
        let toml = format!("[server]\nport = 0\n\n[public]\napi_root = \"{API_ROOT}\"\n");
        let err = resolve_toml(&toml, &[]).unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_expand_env_vars_in_route_headers() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("HANGAR_TEST_COEP", "credentialless");
        }
        let toml = r#"
[[routes]]
pattern = "/games/*"
headers = { "Cross-Origin-Embedder-Policy" = "${HANGAR_TEST_COEP}" }
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        assert_eq!(
            config.routes[0].headers["Cross-Origin-Embedder-Policy"],
            "credentialless"
        );
        unsafe {
            std::env::remove_var("HANGAR_TEST_COEP");
        }
    }

    #[test]
    fn test_load_from_file_resolves_public_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hangar.toml");
        std::fs::write(
            &path,
            format!("[server]\npublic_dir = \"dist\"\n\n[public]\napi_root = \"{API_ROOT}\"\n"),
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.public_dir, dir.path().join("dist"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hangar.toml");
        std::fs::write(
            &path,
            format!("[public]\napi_root = \"{API_ROOT}\"\nengine_path = \"/engine/\"\n"),
        )
        .unwrap();
        let settings = CliSettings {
            api_root: Some(API_ROOT.to_owned()),
            ..CliSettings::default()
        };

        let first = Config::load(Some(&path), Some(&settings)).unwrap();
        let second = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(first.runtime, second.runtime);
        assert_eq!(first.routes, second.routes);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
