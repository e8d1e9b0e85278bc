use unicode_segmentation::UnicodeSegmentation;

use crate::measurement::{TextBounds, TextMeasurer};
use crate::types::FontSpec;

/// Deterministic measurer for tests and headless layout.
///
/// Width is estimated as a fixed advance per grapheme cluster scaled by the
/// font size; height is one line at the font size with an 80/20
/// ascent/descent split. Good enough to exercise layout, not for display.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicMeasurer {
    /// Average glyph advance as a fraction of the font size
    pub advance_em: f32,
}

impl HeuristicMeasurer {
    pub fn new(advance_em: f32) -> Self {
        Self { advance_em }
    }
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> TextBounds {
        let count = text.graphemes(true).count();
        let height = font.size;
        TextBounds {
            width: self.advance_em * font.size * count as f32,
            height,
            ascent: height * 0.8,
            descent: height * 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_width_scales_with_graphemes() {
        let measurer = HeuristicMeasurer::new(0.5);
        let font = FontSpec::new("sans-serif", 10.0);
        let bounds = measurer.measure("abcd", &font);
        assert_approx_eq!(f32, bounds.width, 20.0);
        assert_approx_eq!(f32, bounds.height, 10.0);
        assert_approx_eq!(f32, bounds.ascent + bounds.descent, bounds.height);
    }

    #[test]
    fn test_empty_text_keeps_line_height() {
        let measurer = HeuristicMeasurer::default();
        let bounds = measurer.measure("", &FontSpec::new("serif", 14.0));
        assert_approx_eq!(f32, bounds.width, 0.0);
        assert_approx_eq!(f32, bounds.height, 14.0);
    }

    #[test]
    fn test_grapheme_clusters_not_chars() {
        let measurer = HeuristicMeasurer::new(1.0);
        let font = FontSpec::new("sans-serif", 10.0);
        // "e" + combining acute is one grapheme
        let bounds = measurer.measure("e\u{301}", &font);
        assert_approx_eq!(f32, bounds.width, 10.0);
    }
}
