use crate::error::{DocsetError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "tldr-docset.json";
const DEFAULT_SOURCE_URL: &str = "https://github.com/tldr-pages/tldr/archive/master.zip";
const DEFAULT_REMOTE_PREFIX: &str = "tldr-master/pages";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 60;

/// Configuration for the generator, read from tldr-docset.json in the
/// working directory. Every field has a default, so the file is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocsetConfig {
    /// URL of the packaged pages archive fetched in remote mode
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Directory inside the remote archive that holds the page files
    #[serde(default = "default_remote_prefix")]
    pub remote_prefix: String,

    /// Bound on the remote fetch, in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_remote_prefix() -> String {
    DEFAULT_REMOTE_PREFIX.to_string()
}

fn default_fetch_timeout() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

impl Default for DocsetConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            remote_prefix: default_remote_prefix(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

impl DocsetConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DocsetError::Io)?;
        let config: DocsetConfig =
            serde_json::from_str(&content).map_err(DocsetError::Config)?;
        Ok(config)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
