//! Inspection settings and environment variable handling

use std::env;
use std::path::PathBuf;
use tracing::warn;
use crate::types::Network;

pub const DEFAULT_EXPORT_DIR: &str = "output/snapshots";
pub const LOG_DIR: &str = "output/logs";

#[derive(Debug, Clone)]
pub struct Config {
    pub networks: Vec<Network>,
    pub enable_validation: bool,
    pub enable_export: bool,
    pub export_dir: PathBuf,
    pub show_explorer_links: bool,
    pub json_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            networks: Network::ALL.to_vec(),
            enable_validation: true,
            enable_export: false,
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            show_explorer_links: false,
            json_logs: false,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source shaped like the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            networks: lookup("ADDRESS_BOOK_NETWORKS")
                .map(|raw| parse_networks(&raw))
                .unwrap_or(defaults.networks),
            enable_validation: flag(&lookup, "ENABLE_VALIDATION", defaults.enable_validation),
            enable_export: flag(&lookup, "ENABLE_EXPORT", defaults.enable_export),
            export_dir: lookup("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            show_explorer_links: flag(&lookup, "SHOW_EXPLORER_LINKS", defaults.show_explorer_links),
            json_logs: lookup("LOG_FORMAT")
                .map(|format| format.trim().eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.json_logs),
        }
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring unparseable {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

/// Comma separated network names; unknown names are skipped, an empty
/// result falls back to every network.
pub fn parse_networks(raw: &str) -> Vec<Network> {
    let mut networks = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        match name.parse::<Network>() {
            Ok(network) if !networks.contains(&network) => networks.push(network),
            Ok(_) => {}
            Err(e) => warn!("Ignoring network from ADDRESS_BOOK_NETWORKS: {}", e),
        }
    }
    if networks.is_empty() {
        Network::ALL.to_vec()
    } else {
        networks
    }
}
