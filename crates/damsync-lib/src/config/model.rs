use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the content repository; manifest paths and asset paths
    /// are resolved relative to it unless the caller overrides it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of assets downloaded concurrently per batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Pause between consecutive batches.
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Root directory the mirrored `dam/` tree is written under.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Also mirror every asset into a flat, id-keyed alias tree.
    #[serde(default)]
    pub alias_tree: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_batch_size() -> usize {
    10
}

fn default_batch_delay_ms() -> u64 {
    1000
}

fn default_output_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            batch_size: default_batch_size(),
            batch_delay_ms: default_batch_delay_ms(),
            output: OutputConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            alias_tree: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}
