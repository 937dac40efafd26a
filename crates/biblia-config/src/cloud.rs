use serde::{Deserialize, Serialize};

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    400
}

fn default_background() -> String {
    "white".to_string()
}

fn default_max_words() -> usize {
    200
}

/// Passed through to the word-cloud renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            max_words: default_max_words(),
        }
    }
}
