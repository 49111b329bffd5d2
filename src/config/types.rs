use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without the `/articles` suffix
    /// (e.g., "https://api.realworld.io/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Window during which a settled cache entry is reused without
    /// revalidating (default: 2000).
    #[serde(default = "default_dedupe_interval_ms")]
    pub dedupe_interval_ms: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds; also drives the spinner (default: 120).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Layout units per terminal column, used for viewport breakpoints (default: 8).
    #[serde(default = "default_cell_width")]
    pub cell_width: u16,
}

/// File logging settings. Stdout belongs to the TUI, so logs only go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. `CONDUIT_FEED_LOG` takes precedence.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_base_url() -> String {
    "https://api.realworld.io/api".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_dedupe_interval_ms() -> u64 {
    2000
}

fn default_tick_ms() -> u64 {
    120
}

fn default_cell_width() -> u16 {
    8
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            dedupe_interval_ms: default_dedupe_interval_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            cell_width: default_cell_width(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
