use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AerofastError, Result};
use crate::types::{SortDirection, SortField};

/// Top-level configuration for the Aerofast site services.
///
/// Loaded from `~/.aerofast/config.toml` by default. Every section is
/// optional and falls back to the values the public site ships with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AerofastConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub concierge: ConciergeConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

impl AerofastConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AerofastConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AerofastError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    /// Requests per second allowed on the interactive routes.
    pub rate_limit_per_sec: u64,
    /// Maximum number of concurrently open visits.
    pub max_visits: usize,
    /// Seconds without a request (and with no open event stream) after
    /// which a visit is closed. 0 keeps visits until they are deleted.
    pub visit_idle_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3040,
            rate_limit_per_sec: 50,
            max_visits: 1000,
            visit_idle_timeout_secs: 1800,
        }
    }
}

impl ServerConfig {
    pub fn visit_idle_timeout(&self) -> Option<Duration> {
        (self.visit_idle_timeout_secs > 0).then(|| Duration::from_secs(self.visit_idle_timeout_secs))
    }
}

/// Catalog view defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub default_sort_field: SortField,
    pub default_sort_direction: SortDirection,
}

/// Concierge chatbot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConciergeConfig {
    /// Simulated "typing" latency before a reply is appended.
    pub reply_delay_ms: u64,
    /// Longest accepted utterance, in characters.
    pub max_message_length: usize,
    /// First bot message of every session.
    pub greeting: String,
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1200,
            max_message_length: 2000,
            greeting: "Good day. I am the Aerospace Fasteners concierge. How may I assist you with your procurement today?".to_string(),
        }
    }
}

impl ConciergeConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

/// Contact form acknowledgment timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Time spent in the submitting state.
    pub submit_delay_ms: u64,
    /// Time the sent acknowledgment stays up before the form resets.
    pub sent_display_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            sent_display_ms: 3000,
        }
    }
}

impl ContactConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn sent_display(&self) -> Duration {
        Duration::from_millis(self.sent_display_ms)
    }
}
