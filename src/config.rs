//! Configuration types for ukcovid-dl

use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// Runtime configuration for the dataset fetcher and output writer
///
/// Defaults reproduce the dashboard API's documented v1 endpoint, a
/// 10-second per-request timeout, and a `stats.csv` output file in the
/// working directory. All fields can be overridden via serde.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the dataset endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout (default: 10 seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Path the concatenated CSV is written to (default: "stats.csv")
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
            output_path: default_output_path(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.coronavirus.data.gov.uk/v1/data".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_user_agent() -> String {
    concat!("ukcovid-dl/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("stats.csv")
}
