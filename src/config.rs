//! Service configuration: optional TOML file with env overrides.
//!
//! Lookup order for each knob: `config/analyzer.toml` (or the file named by
//! `YORUM_CONFIG_PATH`), then environment variables, then built-in defaults.
//! A missing config file is not an error.

use serde::Deserialize;
use tracing::warn;

use crate::keywords::DEFAULT_TOP_N;

pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.toml";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

pub const ENV_CONFIG_PATH: &str = "YORUM_CONFIG_PATH";
pub const ENV_TOP_N: &str = "YORUM_TOP_N";
pub const ENV_BIND_ADDR: &str = "YORUM_BIND";

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigRoot {
    #[serde(default)]
    analyzer: Option<AnalyzerConfig>,
}

impl AnalyzerConfig {
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let root: ConfigRoot = toml::from_str(raw)?;
        Ok(root.analyzer.unwrap_or_default())
    }

    /// Load from disk and environment. Never fails: unreadable or invalid
    /// config falls back to defaults with a warning.
    pub fn load() -> Self {
        let path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(raw) => Self::from_toml_str(&raw).unwrap_or_else(|e| {
                warn!(error = ?e, %path, "invalid analyzer config, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        };

        if let Ok(raw) = std::env::var(ENV_TOP_N) {
            match raw.trim().parse::<usize>() {
                Ok(n) => cfg.top_n = n,
                Err(_) => warn!(%raw, "ignoring unparsable {ENV_TOP_N}"),
            }
        }
        if let Ok(addr) = std::env::var(ENV_BIND_ADDR) {
            cfg.bind_addr = addr;
        }

        cfg
    }
}
