use std::path::Path;

use anyhow::Context;
use biblia_config::Config;
use biblia_config::analysis::AnalysisConfig;
use biblia_core::corpus::{self, Corpus};
use biblia_core::{AnalysisOptions, Language, StopWords};
use biblia_lang_portuguese::PortugueseLanguage;

/// Everything a command needs, resolved once per process
pub struct AppState<'c> {
    pub config: Config,
    pub corpus: &'c Corpus,
    pub language: Box<dyn Language>,
    pub stop_words: StopWords,
}

impl AppState<'static> {
    /// Load the process-wide corpus and resolve language data
    pub fn init(config: Config) -> anyhow::Result<Self> {
        let corpus = corpus::shared(Path::new(&config.corpus.path))
            .with_context(|| format!("failed to load corpus from {}", config.corpus.path))?;

        AppState::with_corpus(config, corpus)
    }
}

impl<'c> AppState<'c> {
    pub fn with_corpus(config: Config, corpus: &'c Corpus) -> anyhow::Result<Self> {
        let language = language_for(&config.analysis.language)?;
        let stop_words = build_stop_words(language.as_ref(), &config.analysis)?;
        tracing::debug!(
            "Language '{}' with {} stop words",
            language.language_code(),
            stop_words.len()
        );

        Ok(Self {
            config,
            corpus,
            language,
            stop_words,
        })
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            top_n: self.config.analysis.top_n,
            cloud_words: self.config.cloud.max_words,
            histogram_bins: self.config.stats.histogram_bins,
        }
    }

    pub fn display_name(&self, abbrev: &str) -> String {
        self.language.display_name(abbrev)
    }
}

fn language_for(code: &str) -> anyhow::Result<Box<dyn Language>> {
    match code.to_lowercase().as_str() {
        "pt" | "pt-br" | "portuguese" => Ok(Box::new(PortugueseLanguage::new())),
        other => anyhow::bail!("unsupported language '{other}' (available: pt)"),
    }
}

/// Language list, then configured extras, then the external file
fn build_stop_words(language: &dyn Language, analysis: &AnalysisConfig) -> anyhow::Result<StopWords> {
    let mut stop_words = language.stop_words();
    stop_words.extend(&analysis.extra_stop_words);

    if let Some(path) = &analysis.stop_words_path {
        let external = StopWords::load_from_file(Path::new(path))
            .with_context(|| format!("failed to read stop words from {path}"))?;
        stop_words.extend(external.iter());
    }

    Ok(stop_words)
}
