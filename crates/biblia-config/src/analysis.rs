use std::env;

use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_language() -> String {
    "pt".to_string()
}

fn default_top_n() -> usize {
    20
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Language code selecting the built-in stop-word list
    #[serde(default = "default_language")]
    pub language: String,
    /// Added on top of the language list
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
    /// Optional external list, one word per line
    #[serde(default)]
    pub stop_words_path: Option<String>,
    /// Bars shown in frequency charts
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        let language = env::var("BIBLIA_LANGUAGE").unwrap_or_else(|_| default_language());
        let stop_words_path = env::var("BIBLIA_STOP_WORDS_PATH").ok();
        let top_n = env_parse("BIBLIA_TOP_N").unwrap_or_else(default_top_n);

        Self {
            language,
            extra_stop_words: vec![],
            stop_words_path,
            top_n,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            extra_stop_words: vec![],
            stop_words_path: None,
            top_n: default_top_n(),
        }
    }
}
