use crate::model::{Line, Word};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Word {word:?} measured {width}, widths must be finite and positive")]
    InvalidMeasurement { word: String, width: f64 },
    #[error("Target line width must be a number")]
    InvalidTarget,
    #[error("Word spacing must be finite and non-negative, got {0}")]
    InvalidSpacing(f64),
}

/// Greedy word wrap over already measured words.
///
/// Packs words onto the current line until adding the next one (plus
/// `spacing` when the line is non-empty) would exceed `target`, then starts a
/// new line with that word. A word wider than `target` gets a line of its
/// own; words are never split. A zero or negative `target` puts every word on
/// its own line and an infinite one keeps the paragraph on a single line.
pub fn wrap_words<I>(words: I, target: f64, spacing: f64) -> Result<Vec<Line>, LayoutError>
where
    I: IntoIterator<Item = Word>,
{
    if target.is_nan() {
        return Err(LayoutError::InvalidTarget);
    }
    if !spacing.is_finite() || spacing < 0.0 {
        return Err(LayoutError::InvalidSpacing(spacing));
    }

    let mut lines = Vec::new();
    let mut current = Line::default();
    let mut current_width = 0.0;

    for word in words {
        if !word.width.is_finite() || word.width <= 0.0 {
            return Err(LayoutError::InvalidMeasurement {
                word: word.text,
                width: word.width,
            });
        }

        let incremental = word.width + if current.is_empty() { 0.0 } else { spacing };

        if current_width + incremental > target && !current.is_empty() {
            current_width = word.width;
            lines.push(std::mem::replace(
                &mut current,
                Line { words: vec![word] },
            ));
        } else {
            current_width += incremental;
            current.words.push(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}
