use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use biblia_config::Config;
use serde_json::Value;

/// Picked up from the working directory when no `--config` is given
const DEFAULT_CONFIG_FILE: &str = "biblia.json";

/// Environment defaults, overlaid with the config file if there is one
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let base = Config::new();

    match path {
        Some(path) => overlay_file(base, path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            overlay_file(base, Path::new(DEFAULT_CONFIG_FILE))
        }
        None => {
            tracing::debug!("No config file, using environment defaults");
            Ok(base)
        }
    }
}

fn overlay_file(base: Config, path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path)
        .with_context(|| format!("failed to open config file {}", path.display()))?;
    let overrides: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid JSON in config file {}", path.display()))?;

    let mut merged = serde_json::to_value(base)?;
    merge(&mut merged, overrides);
    let config = serde_json::from_value(merged)
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(config)
}

// Objects merge key by key, everything else replaces
fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    #[test]
    fn merge_keeps_unset_fields() {
        let mut base = json!({"cloud": {"width": 800, "height": 400}, "stats": {"histogram_bins": 10}});
        merge(&mut base, json!({"cloud": {"width": 1200}}));

        assert_eq!(
            base,
            json!({"cloud": {"width": 1200, "height": 400}, "stats": {"histogram_bins": 10}})
        );
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"analysis": {{"top_n": 7, "extra_stop_words": ["senhor"]}}, "corpus": {{"path": "acf.json"}}}}"#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.analysis.top_n, 7);
        assert_eq!(config.analysis.extra_stop_words, vec!["senhor"]);
        assert_eq!(config.corpus.path, "acf.json");
        assert_eq!(config.cloud.max_words, 200);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope.json"))).is_err());
    }

    #[test]
    fn wrong_types_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"analysis": {{"top_n": "many"}}}}"#).unwrap();

        assert!(load_config(Some(file.path())).is_err());
    }
}
