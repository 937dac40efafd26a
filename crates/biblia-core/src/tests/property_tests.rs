//! Properties checked over every book of the sample corpus

use super::fixture::{sample_corpus, sample_stop_words};
use crate::frequency::frequency_table;
use crate::pipeline::{extract_text, tokenize};
use crate::stats::{book_shares, book_word_count, corpus_share};

#[test]
fn extraction_is_non_empty_iff_book_is_non_empty() {
    let corpus = sample_corpus();

    for book in corpus.books() {
        let verses = extract_text(book, None, None).unwrap();
        assert_eq!(verses.is_empty(), book.is_empty(), "book {}", book.abbrev());
    }
}

#[test]
fn all_chapters_equals_each_chapter_concatenated() {
    let corpus = sample_corpus();

    for book in corpus.books() {
        let whole = extract_text(book, None, None).unwrap();
        let mut pieces = Vec::new();
        for chapter in 1..=book.chapter_count() {
            pieces.extend(extract_text(book, Some(chapter), None).unwrap());
        }
        assert_eq!(whole, pieces, "book {}", book.abbrev());
    }
}

#[test]
fn tokens_never_contain_stop_words() {
    let corpus = sample_corpus();
    let stop_words = sample_stop_words();

    for book in corpus.books() {
        for verse in extract_text(book, None, None).unwrap() {
            for token in tokenize(verse, &stop_words) {
                assert!(!stop_words.contains(&token), "{token} leaked from {verse:?}");
                assert!(!token.is_empty());
            }
        }
    }
}

#[test]
fn counts_sum_to_token_count() {
    let corpus = sample_corpus();
    let stop_words = sample_stop_words();

    for book in corpus.books() {
        let tokens: Vec<String> = extract_text(book, None, None)
            .unwrap()
            .into_iter()
            .flat_map(|verse| tokenize(verse, &stop_words))
            .collect();
        let table = frequency_table(&tokens);

        assert_eq!(table.iter().map(|(_, count)| count).sum::<usize>(), tokens.len());
        assert_eq!(table.total(), tokens.len());
    }
}

#[test]
fn book_shares_sum_to_one_hundred() {
    let corpus = sample_corpus();
    let shares = book_shares(&corpus).unwrap();

    assert_eq!(shares.len(), corpus.len());
    let sum: f64 = shares.iter().map(|s| s.percent).sum();
    assert!((sum - 100.0).abs() < 1e-9);

    let gn = corpus.find_book("gn").unwrap();
    assert_eq!(
        shares[0].percent,
        corpus_share(book_word_count(gn), corpus.word_count()).unwrap()
    );
}
