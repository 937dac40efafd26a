use serde::{Deserialize, Serialize};

fn default_histogram_bins() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            histogram_bins: default_histogram_bins(),
        }
    }
}
