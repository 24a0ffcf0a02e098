use unicode_width::UnicodeWidthStr;

/// Measures how wide a word renders, in layout units.
pub trait GlyphMetrics {
    fn measure(&self, word: &str) -> f64;
}

impl<F> GlyphMetrics for F
where
    F: Fn(&str) -> f64,
{
    fn measure(&self, word: &str) -> f64 {
        self(word)
    }
}

/// Fixed-advance font: every terminal column advances by the same amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub font_size: f64,
    /// Advance of one column in em.
    pub glyph_advance: f64,
}

impl MonospaceMetrics {
    pub fn new(font_size: f64, glyph_advance: f64) -> Self {
        Self {
            font_size,
            glyph_advance,
        }
    }

    /// Metrics whose single column is `column_width` wide.
    pub fn from_column_width(column_width: f64, glyph_advance: f64) -> Self {
        Self::new(column_width / glyph_advance, glyph_advance)
    }

    /// World-space width of a single terminal column.
    pub fn column_width(&self) -> f64 {
        self.font_size * self.glyph_advance
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn measure(&self, word: &str) -> f64 {
        word.width() as f64 * self.column_width()
    }
}
