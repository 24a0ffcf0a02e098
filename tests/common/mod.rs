#![allow(dead_code)]

use ratatui::backend::TestBackend;
use typesphere::{Word, WordColor};

/// One unit per character, so widths are easy to reason about.
pub fn char_width(word: &str) -> f64 {
    word.chars().count() as f64
}

/// Uncoloured words measured by character count.
pub fn words(text: &str) -> Vec<Word> {
    text.split_whitespace()
        .map(|w| Word::new(w, char_width(w), WordColor::Default))
        .collect()
}

/// Rows of a test backend buffer as plain strings.
pub fn buffer_rows(backend: &TestBackend) -> Vec<String> {
    let buffer = backend.buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}
