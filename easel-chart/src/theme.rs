#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use easel_geom::Insets;
use easel_scene::Color;
use easel_text::FontSpec;

/// Per-chart style configuration.
///
/// Constructed once and threaded through chart construction; there are no
/// process-wide style defaults.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub title_font: FontSpec,
    pub subtitle_font: FontSpec,
    pub legend_item_font: FontSpec,
    pub foreground: Color,
    pub background: Color,
    pub chart_padding: Insets,
    /// Gap between items in horizontally-arranged legends
    pub hgap: f32,
    /// Gap between items in vertically-arranged legends
    pub vgap: f32,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            title_font: FontSpec::bold("sans-serif", 18.0),
            subtitle_font: FontSpec::new("sans-serif", 12.0),
            legend_item_font: FontSpec::new("sans-serif", 12.0),
            foreground: Color::BLACK,
            background: Color::WHITE,
            chart_padding: Insets::zero(),
            hgap: 2.0,
            vgap: 2.0,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_theme_serde_round_trip() {
        let theme = ChartTheme {
            title_font: FontSpec::bold("serif", 24.0),
            chart_padding: Insets::uniform(4.0),
            ..ChartTheme::default()
        };
        let value = serde_json::to_value(&theme).unwrap();
        let back: ChartTheme = serde_json::from_value(value).unwrap();
        assert_eq!(back, theme);
    }
}
