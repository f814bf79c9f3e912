use std::net::SocketAddr;
use std::path::PathBuf;

use visus_risk::ThresholdTable;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Service settings, read once from the environment at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    /// JSON threshold table. `None` runs with the built-in defaults.
    pub thresholds_path: Option<PathBuf>,
}

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let raw_addr = lookup("VISUS_BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid VISUS_BIND_ADDR {raw_addr:?}: {e}"))?;

        let thresholds_path = lookup("VISUS_THRESHOLDS")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            thresholds_path,
        })
    }

    /// Load and validate the configured threshold table.
    pub fn load_thresholds(&self) -> eyre::Result<ThresholdTable> {
        match &self.thresholds_path {
            Some(path) => {
                let table = ThresholdTable::load(path)?;
                tracing::info!(
                    path = %path.display(),
                    protocol = %table.protocol_name,
                    "loaded threshold table"
                );
                Ok(table)
            }
            None => {
                tracing::info!("using default threshold table");
                Ok(ThresholdTable::default())
            }
        }
    }
}
