use crate::core::Size;

/// Measures the line box of a single-line label.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> Size;
}

/// Deterministic, backend-independent text metrics.
///
/// Widths come from per-glyph-class advance factors, heights from the font
/// size times `line_height_factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedTextMeasurer {
    pub line_height_factor: f64,
}

impl Default for EstimatedTextMeasurer {
    fn default() -> Self {
        Self {
            line_height_factor: 1.2,
        }
    }
}

impl EstimatedTextMeasurer {
    #[must_use]
    pub fn estimate_width(text: &str, font_size_px: f64) -> f64 {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' | ':' | ';' | '\'' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                'A'..='Z' | '$' | '€' | '£' => 0.68,
                'i' | 'j' | 'l' | '|' => 0.28,
                'm' | 'w' => 0.86,
                _ => 0.58,
            }
        });
        units * font_size_px
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        Size::new(
            Self::estimate_width(text, font_size_px),
            font_size_px * self.line_height_factor,
        )
    }
}
