// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from gitgrade.toml.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// The main configuration structure for gitgrade.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GradeConfig {
    /// GitHub API configuration.
    pub github: GitHubConfig,

    /// Snapshot cache configuration.
    pub cache: CacheConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl GradeConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_COMMIT_COUNT).contains(&self.github.commit_count) {
            return Err(ConfigError::InvalidValue {
                key: "github.commit_count".to_string(),
                message: format!("must be between 1 and {}", MAX_COMMIT_COUNT),
            }
            .into());
        }

        if self.github.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "github.timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            }
            .into());
        }

        if !(self.github.api_url.starts_with("http://")
            || self.github.api_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                key: "github.api_url".to_string(),
                message: format!("'{}' is not an http(s) URL", self.github.api_url),
            }
            .into());
        }

        Ok(())
    }
}

/// GitHub caps `per_page` at this value.
pub const MAX_COMMIT_COUNT: u32 = 100;

/// GitHub API configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GitHubConfig {
    /// Base URL of the REST API.
    pub api_url: String,

    /// Value of the identifying `User-Agent` header.
    pub user_agent: String,

    /// Number of recent commits to inspect.
    pub commit_count: u32,

    /// Transport timeout per request, in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            user_agent: format!("gitgrade/{}", env!("CARGO_PKG_VERSION")),
            commit_count: 30,
            timeout_secs: 30,
        }
    }
}

/// Snapshot cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether fetched snapshots are reused within a session.
    pub enabled: bool,

    /// How long a cached snapshot stays valid, in seconds.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: 15 * 60,
        }
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,

    /// Whether to show hints after a report.
    pub hints: bool,

    /// Default report format.
    pub format: OutputFormat,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            hints: true,
            format: OutputFormat::Text,
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Styled terminal report (default)
    Text,
    /// JSON for machine parsing
    Json,
    /// Markdown document
    Markdown,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}
