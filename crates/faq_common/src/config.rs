//! FAQ assistant configuration.
//!
//! Lives in `$XDG_CONFIG_HOME/faqctl/config.toml` unless `$FAQCTL_CONFIG`
//! or an explicit path says otherwise. A missing file means defaults; a
//! file that exists but does not parse is an error.

use crate::error::{FaqError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Env override for the config file location
pub const CONFIG_ENV: &str = "FAQCTL_CONFIG";
const CONFIG_DIR: &str = "faqctl";
const CONFIG_FILE: &str = "config.toml";

/// Where the knowledge base comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// `.toml` or `.json` knowledge file; builtin when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Chat rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_color")]
    pub color: bool,

    /// Answer wrap width in columns (valid: 40-200)
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_color() -> bool {
    true
}

fn default_wrap_width() -> usize {
    80
}

impl ChatConfig {
    pub fn effective_wrap_width(&self) -> usize {
        self.wrap_width.clamp(40, 200)
    }

    pub fn wrap_width_was_clamped(&self) -> bool {
        self.wrap_width != self.effective_wrap_width()
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            wrap_width: default_wrap_width(),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqConfig {
    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub chat: ChatConfig,
}

impl FaqConfig {
    /// Load from `explicit`, else the default location. Missing file means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(FaqError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| FaqError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| FaqError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FaqError::Config(e.to_string()))
    }
}

/// `$FAQCTL_CONFIG`, else `<config dir>/faqctl/config.toml`
pub fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        if !p.is_empty() {
            return Some(PathBuf::from(p));
        }
    }
    dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILE))
}
