use biblia_config::Config;
use biblia_core::Corpus;
use biblia_core::error::SelectionError;
use biblia_types::{Pick, Selection};
use serde_json::Value;

use crate::cli::{Command, SelectionArgs};
use crate::commands::handle_command;
use crate::output::OutputFormat;
use crate::state::AppState;

const CORPUS_JSON: &str = r#"[
  {"abbrev": "gn", "chapters": [
    ["No princípio Deus criou os céus e a terra.", "Disse Deus: \"Haja luz\", e houve luz."],
    ["Assim foram concluídos os céus e a terra."]
  ]},
  {"abbrev": "rt", "chapters": [["Naqueles dias houve fome na terra."]]}
]"#;

fn corpus() -> Corpus {
    Corpus::from_json(CORPUS_JSON).unwrap()
}

fn run(corpus: &Corpus, command: Command, format: OutputFormat) -> anyhow::Result<String> {
    let state = AppState::with_corpus(Config::default(), corpus)?;
    let mut out = Vec::new();
    handle_command(&state, &command, format, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn args(book: &str, chapter: Pick, verse: Pick) -> SelectionArgs {
    SelectionArgs {
        book: book.to_string(),
        chapter,
        verse,
    }
}

#[test]
fn books_lists_full_names() {
    let corpus = corpus();
    let text = run(&corpus, Command::Books, OutputFormat::Text).unwrap();

    assert!(text.contains("Gênesis"));
    assert!(text.contains("Rute"));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn read_chapter_prints_numbered_verses() {
    let corpus = corpus();
    let text = run(
        &corpus,
        Command::Read(args("gn", Pick::Index(1), Pick::All)),
        OutputFormat::Text,
    )
    .unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "### Gênesis 1");
    assert_eq!(lines[1], "*1* No princípio Deus criou os céus e a terra.");
    assert_eq!(lines.len(), 3);
}

#[test]
fn read_whole_book_groups_by_chapter() {
    let corpus = corpus();
    let text = run(
        &corpus,
        Command::Read(args("gn", Pick::All, Pick::All)),
        OutputFormat::Text,
    )
    .unwrap();

    assert!(text.contains("### Gênesis 2"));
    assert!(text.contains("2 chapters, 3 verses"));
}

#[test]
fn read_json_keeps_verse_numbers() {
    let corpus = corpus();
    let json = run(
        &corpus,
        Command::Read(args("gn", Pick::Index(1), Pick::Index(2))),
        OutputFormat::Json,
    )
    .unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["verses"][0]["verse"], 2);
    assert_eq!(value["selection"]["chapter"]["index"], 1);
}

#[test]
fn words_drop_portuguese_stop_words() {
    let corpus = corpus();
    let json = run(
        &corpus,
        Command::Words {
            selection: args("gn", Pick::Index(1), Pick::All),
            top: Some(3),
            stop_words: vec![],
        },
        OutputFormat::Json,
    )
    .unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    let top = value["top_words"].as_array().unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0]["word"], "deus");
    assert_eq!(top[0]["count"], 2);
    assert_eq!(value["cloud_config"]["width"], 800);
    assert!(
        value["cloud"]
            .as_array()
            .unwrap()
            .iter()
            .all(|w| w["word"] != "e" && w["word"] != "a")
    );
}

#[test]
fn words_accept_extra_stop_words() {
    let corpus = corpus();
    let json = run(
        &corpus,
        Command::Words {
            selection: args("gn", Pick::Index(1), Pick::All),
            top: None,
            stop_words: vec!["Deus".to_string(), "luz".to_string()],
        },
        OutputFormat::Json,
    )
    .unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    let words: Vec<&str> = value["top_words"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|w| w["word"].as_str())
        .collect();
    assert_eq!(
        words,
        vec!["no", "princípio", "criou", "céus", "terra", "disse", "haja", "houve"]
    );
}

#[test]
fn stats_text_reports_share() {
    let corpus = corpus();
    let text = run(
        &corpus,
        Command::Stats(args("rt", Pick::All, Pick::All)),
        OutputFormat::Text,
    )
    .unwrap();

    assert!(text.contains("### Statistics: Rute (all chapters)"));
    assert!(text.contains("1 verses, 6..6 words per verse"));
    assert!(text.contains("% of the corpus"));
}

#[test]
fn shares_sum_to_one_hundred() {
    let corpus = corpus();
    let json = run(&corpus, Command::Shares, OutputFormat::Json).unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    let total: f64 = value
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["percent"].as_f64().unwrap())
        .sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert_eq!(value[0]["name"], "Gênesis");
}

#[test]
fn unknown_book_is_a_selection_error() {
    let corpus = corpus();
    let err = run(
        &corpus,
        Command::Read(args("zz", Pick::All, Pick::All)),
        OutputFormat::Text,
    )
    .unwrap_err();

    assert_eq!(
        err.downcast_ref::<SelectionError>(),
        Some(&SelectionError::BookNotFound("zz".to_string()))
    );
}

#[test]
fn unsupported_language_fails_state_setup() {
    let corpus = corpus();
    let mut config = Config::default();
    config.analysis.language = "xx".to_string();

    assert!(AppState::with_corpus(config, &corpus).is_err());
}

#[test]
fn selection_round_trips_through_args() {
    assert_eq!(
        args("gn", Pick::Index(1), Pick::Index(3)).to_selection(),
        Selection::verse("gn", 1, 3)
    );
}

#[test]
fn headers_use_the_resolved_book_name() {
    let corpus = corpus();
    let stats = run(
        &corpus,
        Command::Stats(args(" GN ", Pick::Index(1), Pick::All)),
        OutputFormat::Text,
    )
    .unwrap();
    let words = run(
        &corpus,
        Command::Words {
            selection: args("Gn", Pick::Index(1), Pick::All),
            top: None,
            stop_words: vec![],
        },
        OutputFormat::Text,
    )
    .unwrap();

    assert!(stats.starts_with("### Statistics: Gênesis 1"));
    assert!(words.starts_with("### Most frequent words: Gênesis 1"));
}
