//! On-disk configuration for the Nomi chat client.
//!
//! `FileConfig` is the shape of `{data_dir}/config.toml`. Every field is
//! optional; environment variables take precedence over the file when the
//! infra layer resolves the final client configuration.

use serde::{Deserialize, Serialize};

/// Contents of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Base endpoint of the service (e.g., "https://api.nomi.ai/v1").
    #[serde(default)]
    pub base_url: Option<String>,

    /// API key. Prefer `NOMI_API_KEY` over storing it on disk.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
