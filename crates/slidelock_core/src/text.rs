//! Text measurement
//!
//! The control sizes its hint and thumb labels through [`TextMeasurer`].
//! Hosts with a real font stack implement it; [`EstimatedTextMeasurer`] is a
//! deterministic fallback good enough for tests and headless replay.

use crate::draw::FontWeight;

/// Single-line text measurement
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width in pixels
    pub width: f32,
    /// Distance from baseline to top
    pub ascender: f32,
    /// Distance from baseline to bottom, typically negative
    pub descender: f32,
}

impl TextMetrics {
    /// Visible glyph height used for vertical centering: ascent minus |descent|
    pub fn centering_height(&self) -> f32 {
        self.ascender - self.descender.abs()
    }
}

/// Trait for measuring text dimensions
pub trait TextMeasurer: Send + Sync {
    /// Measure a single line of text
    fn measure(&self, text: &str, font_size: f32, weight: FontWeight) -> TextMetrics;
}

/// A text measurer that uses estimates
///
/// Width is `0.55 * font_size` per character (0.6 for bold), ascender
/// `0.8 * font_size`, descender `-0.2 * font_size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size: f32, weight: FontWeight) -> TextMetrics {
        let char_factor = match weight {
            FontWeight::Bold => 0.6,
            FontWeight::Regular => 0.55,
        };

        TextMetrics {
            width: text.chars().count() as f32 * font_size * char_factor,
            ascender: font_size * 0.8,
            descender: font_size * -0.2,
        }
    }
}
