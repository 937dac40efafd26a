use std::collections::HashMap;

use biblia_types::WordCount;

/// Token counts that remember first-seen order, so ties sort stably
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: &str) {
        self.total += 1;
        match self.index.get(token) {
            Some(&idx) => self.entries[idx].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map_or(0, |&idx| self.entries[idx].1)
    }

    /// Sum of all counts, i.e. the number of tokens added
    pub fn total(&self) -> usize {
        self.total
    }

    /// Distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// The `n` most frequent tokens, ties in first-seen order
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    pub fn top_word_counts(&self, n: usize) -> Vec<WordCount> {
        self.top(n)
            .into_iter()
            .map(|(word, count)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for token in iter {
            table.add(token.as_ref());
        }
        table
    }
}

/// Exact token counts
pub fn frequency_table<I, S>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().collect()
}
