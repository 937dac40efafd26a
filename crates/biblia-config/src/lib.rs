use std::env;

use serde::{Deserialize, Serialize};

use self::analysis::AnalysisConfig;
use self::cloud::CloudConfig;
use self::corpus::CorpusConfig;
use self::stats::StatsConfig;

pub mod analysis;
pub mod cloud;
pub mod corpus;
pub mod stats;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub analysis: AnalysisConfig,
    pub cloud: CloudConfig,
    pub stats: StatsConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            corpus: CorpusConfig::new(),
            analysis: AnalysisConfig::new(),
            cloud: CloudConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

/// Read and parse an env var, ignoring unset or unparsable values
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}
