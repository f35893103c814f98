//! CLI argument definitions for the Aerofast application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Aerofast - catalog, concierge and RFQ desk for the Aerospace Fasteners site.
#[derive(Parser, Debug)]
#[command(name = "aerofast", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// API server port.
    #[arg(short = 'p', long = "port", global = true)]
    pub port: Option<u16>,

    /// Address the API server binds to.
    #[arg(short = 'b', long = "bind", global = true)]
    pub bind: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Print `search` and `ask` results as JSON.
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the API server (default).
    Serve,
    /// Print catalog rows matching a query.
    Search {
        /// Free-text query; empty lists the whole catalog.
        #[arg(default_value = "")]
        query: String,
        /// Column to sort by (id, name, description, standard, stock_level).
        #[arg(short = 's', long = "sort")]
        sort: Option<String>,
        /// Sort descending.
        #[arg(long = "desc")]
        desc: bool,
    },
    /// Print the concierge reply to one utterance.
    Ask {
        /// What the visitor typed.
        text: String,
    },
}

impl CliArgs {
    /// The subcommand to run, `serve` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }

    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > AEROFAST_CONFIG env var > platform default (~/.aerofast/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("AEROFAST_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > AEROFAST_PORT env var > config file value > 3040.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("AEROFAST_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        if config_port != 0 {
            return config_port;
        }
        3040
    }

    /// Resolve the bind address. Priority: --bind flag > config file value.
    pub fn resolve_bind(&self, config_bind: &str) -> String {
        self.bind
            .clone()
            .unwrap_or_else(|| config_bind.to_string())
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".aerofast").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".aerofast").join("config.toml");
    }
    PathBuf::from("config.toml")
}
