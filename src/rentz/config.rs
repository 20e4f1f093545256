use crate::error::{RentzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ITEMS_PER_PAGE: usize = 4;

/// Configuration for rentz, read from config.json in the config dir.
/// Display preferences only; the catalog itself is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RentzConfig {
    /// Listings shown per page
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// ANSI color output (NO_COLOR wins either way)
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_color() -> bool {
    true
}

impl Default for RentzConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            color: true,
        }
    }
}

impl RentzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RentzError::Io)?;
        let config: RentzConfig =
            serde_json::from_str(&content).map_err(RentzError::Serialization)?;
        Ok(config)
    }

    /// A page size of zero would make every view empty; fall back to
    /// the default instead of honoring it.
    pub fn effective_items_per_page(&self) -> usize {
        if self.items_per_page == 0 {
            DEFAULT_ITEMS_PER_PAGE
        } else {
            self.items_per_page
        }
    }
}
