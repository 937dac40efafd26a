use unicode_normalization::UnicodeNormalization;

/// Characters that join two words and are read as a space
const CONNECTORS: [char; 5] = ['-', '\u{2010}', '\u{2013}', '\u{2014}', '/'];

/// Canonical normalization applied to both text and stop words:
/// NFC, lowercase, connectors to spaces, any other non-alphanumeric character dropped.
pub fn normalize(text: &str) -> String {
    text.nfc()
        .flat_map(char::to_lowercase)
        .filter_map(|c| {
            if c.is_whitespace() || CONNECTORS.contains(&c) {
                Some(' ')
            } else if c.is_alphanumeric() {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}

/// Normalized form of a single word, `None` if nothing is left
pub fn normalize_word(word: &str) -> Option<String> {
    let normalized = normalize(word);
    let trimmed = normalized.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
