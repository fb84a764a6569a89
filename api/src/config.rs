//! Configuration

use std::net::SocketAddr;

use config::Config;
use serde::Deserialize;

/// Default upstream API root (sandbox instance)
pub const DEFAULT_API_ROOT: &str = "https://your-backend-sandbox.example.com/api";

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Server config
    #[serde(default)]
    pub server: ServerConfig,
    /// Trace configuration
    #[serde(default)]
    pub trace: TraceConfig,
    /// Sandbox demo configuration
    ///
    /// Read from its own published variables, not from the `APP_` tree.
    #[serde(skip)]
    pub sandbox: SandboxConfig,
}

/// Application configuration error
#[derive(Debug, thiserror::Error)]
pub enum AppConfigError {
    /// Invalid server host configuration
    #[error("invalid server address")]
    InvalidServerHost(#[from] std::net::AddrParseError),
}

impl AppConfig {
    /// Loads the configuration from the environment
    ///
    /// Server and trace settings live under the `APP_` prefix
    /// (`APP_SERVER_HOST`, `APP_TRACE_FILTER`, ...). The sandbox settings
    /// are read by [SandboxConfig::from_env].
    pub fn load() -> Self {
        let config = Config::builder()
            .add_source(
                config::Environment::with_prefix("APP")
                    .try_parsing(false)
                    .separator("_")
                    .list_separator(" "),
            )
            .build()
            .unwrap();

        let mut cfg = config.try_deserialize::<AppConfig>().unwrap();
        cfg.sandbox = SandboxConfig::from_env();
        cfg
    }
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Host
    pub host: String,
    /// Port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Returns the server [SocketAddr]
    pub fn addr(&self) -> Result<SocketAddr, AppConfigError> {
        let addr_str = self.host.to_string() + ":" + self.port.to_string().as_str();
        addr_str.parse::<SocketAddr>().map_err(|err| err.into())
    }
}

/// Trace configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TraceConfig {
    /// Export traces to stdout
    pub stdout: bool,
    /// Trace filter
    pub filter: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            stdout: true,
            filter: "info".to_string(),
        }
    }
}

/// Sandbox demo configuration
///
/// The raw string values are kept as read so the page footer can echo them.
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    /// Upstream API base URL
    pub api_root: String,
    /// Live mode flag, `"true"` requests production endpoints
    pub live_mode: String,
    /// Production approval flag, must be `"yes"` for live actions
    pub production_approved: String,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            live_mode: "false".to_string(),
            production_approved: "no".to_string(),
        }
    }
}

impl SandboxConfig {
    /// Reads the sandbox configuration from its published variables
    ///
    /// `API_ROOT`, `LIVE_MODE` and `PRODUCTION_APPROVED` are read by their
    /// exact names; unset or empty values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_root: env_or("API_ROOT", defaults.api_root),
            live_mode: env_or("LIVE_MODE", defaults.live_mode),
            production_approved: env_or("PRODUCTION_APPROVED", defaults.production_approved),
        }
    }

    /// Whether live mode is requested
    pub fn is_live(&self) -> bool {
        self.live_mode.to_lowercase() == "true"
    }

    /// Whether production use is approved
    pub fn is_approved(&self) -> bool {
        self.production_approved.to_lowercase() == "yes"
    }

    /// Whether the demo actions are disabled
    ///
    /// Live mode requested without production approval turns every action
    /// into a no-op.
    pub fn actions_disabled(&self) -> bool {
        self.is_live() && !self.is_approved()
    }
}

// Reads an env variable, treating unset and empty values as absent
fn env_or(key: &str, default: String) -> String {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default,
    }
}
