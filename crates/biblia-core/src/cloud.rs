use biblia_types::CloudWord;

use crate::frequency::FrequencyTable;

/// Weighted words handed to the word-cloud renderer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CloudInput {
    words: Vec<CloudWord>,
}

impl CloudInput {
    /// Top `max_words` entries, weighted against the most frequent one.
    /// An empty table yields an empty input.
    pub fn from_table(table: &FrequencyTable, max_words: usize) -> Self {
        let top = table.top(max_words);
        let Some(&(_, max_count)) = top.first() else {
            return Self::default();
        };

        let words = top
            .into_iter()
            .map(|(word, count)| CloudWord {
                word: word.to_string(),
                count,
                weight: count as f64 / max_count as f64,
            })
            .collect();

        Self { words }
    }

    pub fn words(&self) -> &[CloudWord] {
        &self.words
    }

    pub fn into_words(self) -> Vec<CloudWord> {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::frequency_table;

    #[test]
    fn weights_are_relative_to_the_top_word() {
        let table = frequency_table(["luz", "luz", "luz", "luz", "deus", "deus", "terra"]);
        let cloud = CloudInput::from_table(&table, 10);

        let weights: Vec<(&str, f64)> = cloud
            .words()
            .iter()
            .map(|w| (w.word.as_str(), w.weight))
            .collect();
        assert_eq!(weights, vec![("luz", 1.0), ("deus", 0.5), ("terra", 0.25)]);
    }

    #[test]
    fn respects_max_words() {
        let table = frequency_table(["a", "b", "c"]);
        assert_eq!(CloudInput::from_table(&table, 2).len(), 2);
    }

    #[test]
    fn empty_table_is_not_an_error() {
        let cloud = CloudInput::from_table(&FrequencyTable::new(), 200);
        assert!(cloud.is_empty());
        assert!(cloud.into_words().is_empty());
    }
}
