//! Word-by-word text reveal.
//!
//! Splits a heading into words and tags each with its position so the
//! stylesheet can stagger the entrance (`--word-index`).

#[cfg(test)]
#[path = "text_reveal_test.rs"]
mod text_reveal_test;

/// One word of a revealed heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealWord<'a> {
    pub index: usize,
    pub word: &'a str,
}

impl RevealWord<'_> {
    /// Inline style carrying the stagger position.
    pub fn style(&self) -> String {
        format!("--word-index: {}", self.index)
    }
}

/// Split `text` on whitespace into indexed words.
pub fn reveal_words(text: &str) -> Vec<RevealWord<'_>> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, word)| RevealWord { index, word })
        .collect()
}
