use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use mavenpub_util::errors::PublishError;

/// Global user configuration loaded from `~/.mavenpub/config.toml`.
///
/// This file lives outside any project and doubles as the user's credential
/// store for repositories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub publish: PublishSettings,

    #[serde(default)]
    pub credentials: BTreeMap<String, CredentialEntry>,

    #[serde(default)]
    pub toolchain: ToolchainGlobalConfig,
}

/// Transfer settings from `[publish]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishSettings {
    /// Attempts per request for transient failures (5xx, timeouts, refused connections).
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_retry_delay", rename = "retry-delay-secs")]
    pub retry_delay_secs: u64,
    #[serde(default = "default_timeout", rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            retry_delay_secs: default_retry_delay(),
            timeout_secs: default_timeout(),
        }
    }
}

impl PublishSettings {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_retries() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    2
}

fn default_timeout() -> u64 {
    120
}

/// Credential entry for a named repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialEntry {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Global toolchain settings from `[toolchain]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolchainGlobalConfig {
    /// Explicit JDK home searched before `JAVA_HOME`.
    #[serde(default)]
    pub jdk: Option<String>,
}

impl GlobalConfig {
    /// Load the global configuration from `~/.mavenpub/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the global configuration from an explicit path, or return defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| PublishError::Generic {
            message: format!("Failed to read global config: {e}"),
        })?;
        toml::from_str(&content).map_err(|e| {
            PublishError::Generic {
                message: format!("Failed to parse global config {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the mavenpub data directory (`~/.mavenpub/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".mavenpub")
}
