use crate::ui::constants::{CharBuffer, StyleBuffer};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

const CELL_EPSILON: f64 = 1e-6;

// Buffer canvas for drawing characters and styles
pub struct BufferCanvas {
    pub char_buffer: CharBuffer,
    pub style_buffer: StyleBuffer,
    pub width: usize,
    pub height: usize,
}

impl BufferCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            char_buffer: vec![vec![' '; width]; height],
            style_buffer: vec![vec![Style::default(); width]; height],
            width,
            height,
        }
    }

    pub fn set_char(&mut self, x: usize, y: usize, ch: char, style: Style) {
        if self.in_bounds(x, y) {
            self.char_buffer[y][x] = ch;
            self.style_buffer[y][x] = style;
        }
    }

    /// Plot at fractional cell coordinates; anything off the canvas,
    /// including negative positions, is dropped.
    pub fn plot(&mut self, x: f64, y: f64, ch: char, style: Style) {
        if let Some((x, y)) = Self::cell(x, y) {
            self.set_char(x, y, ch, style);
        }
    }

    /// Draw text starting at fractional cell coordinates. Characters that
    /// fall left of the canvas are clipped individually.
    pub fn draw_styled_text_at(&mut self, x: f64, y: f64, text: &str, style: Style) {
        if !x.is_finite() || !y.is_finite() || y + CELL_EPSILON < 0.0 {
            return;
        }
        // Word positions are whole cells apart; keep rounding noise from
        // pushing one of them into the previous cell.
        let row = (y + CELL_EPSILON).floor() as usize;
        let start = (x + CELL_EPSILON).floor() as i64;
        for (i, ch) in text.chars().enumerate() {
            let col = start.saturating_add(i as i64);
            if col >= 0 {
                self.set_char(col as usize, row, ch, style);
            }
        }
    }

    pub fn draw_styled_text(&mut self, x: usize, y: usize, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.set_char(x + i, y, ch, style);
        }
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        y < self.height && x < self.width
    }

    fn cell(x: f64, y: f64) -> Option<(usize, usize)> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        Some((x.floor() as usize, y.floor() as usize))
    }

    pub fn row_text(&self, y: usize) -> String {
        self.char_buffer
            .get(y)
            .map(|row| row.iter().collect())
            .unwrap_or_default()
    }

    pub fn to_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();

        for (y, row) in self.char_buffer.iter().enumerate() {
            let mut spans = Vec::new();
            let mut current_style = Style::default();
            let mut current_text = String::new();

            for (x, &ch) in row.iter().enumerate() {
                let style = self.style_buffer[y][x];
                if style != current_style {
                    if !current_text.is_empty() {
                        spans.push(Span::styled(current_text.clone(), current_style));
                        current_text.clear();
                    }
                    current_style = style;
                }
                current_text.push(ch);
            }

            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, current_style));
            }

            lines.push(Line::from(spans));
        }

        lines
    }
}
