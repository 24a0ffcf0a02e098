use crate::metrics::GlyphMetrics;
use crate::model::{Line, PlacedWord, Word};
use crate::palette::Palette;
use crate::wrap::{wrap_words, LayoutError};
use serde::Serialize;

/// Gap between words as a fraction of the font size
pub const DEFAULT_SPACE_RATIO: f64 = 0.35;

/// Distance between baselines as a fraction of the font size
pub const DEFAULT_LINE_HEIGHT_RATIO: f64 = 1.4;

/// World size of one character cell when the text is drawn on a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGrid {
    pub column_width: f64,
    pub row_height: f64,
}

impl CellGrid {
    /// Round `value` to a whole number of `step`s, never below one.
    fn snap(value: f64, step: f64) -> f64 {
        (value / step).round().max(1.0) * step
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub font_size: f64,
    pub target_width: f64,
    pub space_ratio: f64,
    pub line_height_ratio: f64,
    /// When set, gaps snap to whole columns and lines to whole rows.
    pub grid: Option<CellGrid>,
}

impl LayoutParams {
    pub fn new(font_size: f64, target_width: f64) -> Self {
        Self {
            font_size,
            target_width,
            space_ratio: DEFAULT_SPACE_RATIO,
            line_height_ratio: DEFAULT_LINE_HEIGHT_RATIO,
            grid: None,
        }
    }

    pub fn spacing(&self) -> f64 {
        let spacing = self.font_size * self.space_ratio;
        match self.grid {
            Some(grid) => CellGrid::snap(spacing, grid.column_width),
            None => spacing,
        }
    }

    pub fn line_height(&self) -> f64 {
        let line_height = self.font_size * self.line_height_ratio;
        match self.grid {
            Some(grid) => CellGrid::snap(line_height, grid.row_height),
            None => line_height,
        }
    }
}

/// A wrapped paragraph placed on the text plane, centred on the origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub lines: Vec<Line>,
    pub words: Vec<PlacedWord>,
    pub target_width: f64,
    pub spacing: f64,
    pub line_height: f64,
}

impl TextBlock {
    pub fn build(
        paragraph: &str,
        metrics: &impl GlyphMetrics,
        palette: &Palette,
        params: &LayoutParams,
    ) -> Result<Self, LayoutError> {
        let words = measure_words(paragraph, metrics, palette);
        let spacing = params.spacing();
        let lines = wrap_words(words, params.target_width, spacing)?;
        let line_height = params.line_height();
        let words = place_lines(&lines, spacing, line_height);

        Ok(Self {
            lines,
            words,
            target_width: params.target_width,
            spacing,
            line_height,
        })
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn total_height(&self) -> f64 {
        self.lines.len() as f64 * self.line_height
    }

    /// Widest line, which may exceed the target for a lone overflowing word.
    pub fn max_line_width(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.width(self.spacing))
            .fold(0.0, f64::max)
    }

    pub fn line_texts(&self) -> Vec<String> {
        self.lines.iter().map(Line::text).collect()
    }
}

/// Tokenise on whitespace, colour each token and measure it.
pub fn measure_words(
    paragraph: &str,
    metrics: &impl GlyphMetrics,
    palette: &Palette,
) -> Vec<Word> {
    paragraph
        .split_whitespace()
        .map(|token| Word::new(token, metrics.measure(token), palette.classify(token)))
        .collect()
}

/// Row `i` sits at `total_height / 2 - i * line_height`; each row is centred
/// horizontally.
fn place_lines(lines: &[Line], spacing: f64, line_height: f64) -> Vec<PlacedWord> {
    let total_height = lines.len() as f64 * line_height;
    let mut placed = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let y = total_height / 2.0 - index as f64 * line_height;
        let mut x = -line.width(spacing) / 2.0;

        for word in &line.words {
            placed.push(PlacedWord {
                text: word.text.clone(),
                color: word.color,
                x,
                y,
                width: word.width,
                line: index,
            });
            x += word.width + spacing;
        }
    }

    placed
}
