pub mod heuristic;

pub use heuristic::HeuristicMeasurer;

use easel_geom::Size;

use crate::types::FontSpec;

/// Results from measuring a single-line text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    /// Total width of the text
    pub width: f32,
    /// Total height from top to bottom
    pub height: f32,
    /// Distance from top to baseline
    pub ascent: f32,
    /// Distance from baseline to bottom
    pub descent: f32,
}

impl TextBounds {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Core trait for text measurement functionality.
///
/// This is the layout engine's only route to glyph metrics; implementations
/// wrap whatever shaping backend the embedding application uses.
pub trait TextMeasurer: Send + Sync {
    /// Measures the bounding dimensions for a text string in the given font
    fn measure(&self, text: &str, font: &FontSpec) -> TextBounds;
}
