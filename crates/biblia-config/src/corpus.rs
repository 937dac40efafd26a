use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "nvi.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// JSON corpus file: `[{abbrev, chapters: [[verse]]}]`
    #[serde(default = "default_path")]
    pub path: String,
}

impl CorpusConfig {
    pub fn new() -> Self {
        let path = env::var("BIBLIA_CORPUS_PATH").unwrap_or_else(|_| default_path());

        Self { path }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
