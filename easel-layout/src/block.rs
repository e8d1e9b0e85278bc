//! The block capability and its box model.
//!
//! Every layout unit carries the same chrome (margin, border, padding) and
//! answers the same two operations: `measure` under a constraint, `place`
//! into a resolved rectangle. Variation lives in composed strategy objects,
//! not subclass overrides.

use easel_geom::{Insets, Rect, Size};
use easel_scene::{Canvas, Color, RectOp, SceneOp};
use easel_text::TextMeasurer;

use crate::constraint::{Constraint, SizeRule};
use crate::entity::EntityRegistry;
use crate::error::EaselLayoutError;

/// Border thickness and color. Thickness participates in the inset stack
/// exactly like margin and padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    pub insets: Insets,
    pub color: Color,
}

impl BorderStyle {
    pub fn new(insets: Insets, color: Color) -> Self {
        Self { insets, color }
    }

    pub fn line(thickness: f32, color: Color) -> Self {
        Self {
            insets: Insets::uniform(thickness),
            color,
        }
    }

    pub fn none() -> Self {
        Self {
            insets: Insets::zero(),
            color: Color::TRANSPARENT,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.color.is_transparent()
            && (self.insets.top > 0.0
                || self.insets.left > 0.0
                || self.insets.bottom > 0.0
                || self.insets.right > 0.0)
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::none()
    }
}

/// Box-model state shared by every block: margin, border, padding, and
/// optional fixed outer-size overrides.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BlockChrome {
    pub margin: Insets,
    pub border: BorderStyle,
    pub padding: Insets,
    pub fixed_width: Option<f32>,
    pub fixed_height: Option<f32>,
}

impl BlockChrome {
    pub fn with_padding(padding: Insets) -> Self {
        Self {
            padding,
            ..Default::default()
        }
    }

    /// Per-edge sum of margin, border thickness, and padding.
    pub fn insets_total(&self) -> Insets {
        self.margin.add(&self.border.insets).add(&self.padding)
    }

    /// Derives the inner content constraint from an outer constraint.
    ///
    /// Fixed outer-size overrides replace the corresponding rule before the
    /// inset sums are subtracted.
    pub fn content_constraint(&self, outer: &Constraint) -> Constraint {
        let insets = self.insets_total();
        let width = match self.fixed_width {
            Some(w) => SizeRule::Fixed(w),
            None => outer.width,
        };
        let height = match self.fixed_height {
            Some(h) => SizeRule::Fixed(h),
            None => outer.height,
        };
        Constraint {
            width: width.shrink_by(insets.horizontal()),
            height: height.shrink_by(insets.vertical()),
        }
    }

    /// Converts a measured content size back to an outer size. Fixed
    /// overrides win over the grown extent.
    pub fn outer_size(&self, content: Size) -> Size {
        let grown = self.insets_total().grow(&content);
        Size {
            width: self.fixed_width.unwrap_or(grown.width),
            height: self.fixed_height.unwrap_or(grown.height),
        }
    }

    /// The content rectangle inside a resolved outer rectangle.
    pub fn content_rect(&self, outer: &Rect) -> Rect {
        self.insets_total().shrink(outer)
    }

    /// The border rectangle (outer rectangle less margin).
    pub fn border_rect(&self, outer: &Rect) -> Rect {
        self.margin.shrink(outer)
    }

    /// Emits one filled strip per non-zero border edge.
    pub fn draw_border(&self, canvas: &mut dyn Canvas, outer: &Rect) {
        if !self.border.is_visible() {
            return;
        }
        let frame = self.border_rect(outer);
        if frame.is_degenerate() {
            return;
        }
        let insets = self.border.insets;
        let color = self.border.color;
        if insets.top > 0.0 {
            canvas.submit(SceneOp::Rect(RectOp::filled(
                Rect::new(frame.x, frame.y, frame.width, insets.top),
                color,
            )));
        }
        if insets.bottom > 0.0 {
            canvas.submit(SceneOp::Rect(RectOp::filled(
                Rect::new(
                    frame.x,
                    frame.max_y() - insets.bottom,
                    frame.width,
                    insets.bottom,
                ),
                color,
            )));
        }
        let mid_y = frame.y + insets.top;
        let mid_h = (frame.height - insets.vertical()).max(0.0);
        if insets.left > 0.0 {
            canvas.submit(SceneOp::Rect(RectOp::filled(
                Rect::new(frame.x, mid_y, insets.left, mid_h),
                color,
            )));
        }
        if insets.right > 0.0 {
            canvas.submit(SceneOp::Rect(RectOp::filled(
                Rect::new(frame.max_x() - insets.right, mid_y, insets.right, mid_h),
                color,
            )));
        }
    }
}

/// Capabilities threaded through a placement pass: the measurer, the draw
/// sink, and the optional entity accumulator.
pub struct RenderCtx<'a> {
    pub measurer: &'a dyn TextMeasurer,
    pub canvas: &'a mut dyn Canvas,
    pub entities: Option<&'a mut EntityRegistry>,
}

impl<'a> RenderCtx<'a> {
    pub fn new(measurer: &'a dyn TextMeasurer, canvas: &'a mut dyn Canvas) -> Self {
        Self {
            measurer,
            canvas,
            entities: None,
        }
    }

    pub fn with_entities(
        measurer: &'a dyn TextMeasurer,
        canvas: &'a mut dyn Canvas,
        entities: &'a mut EntityRegistry,
    ) -> Self {
        Self {
            measurer,
            canvas,
            entities: Some(entities),
        }
    }

    /// Records an entity region when a registry is attached and the region
    /// carries any metadata.
    pub fn add_entity(&mut self, area: Rect, tooltip: Option<&str>, href: Option<&str>) {
        if tooltip.is_none() && href.is_none() {
            return;
        }
        if let Some(entities) = self.entities.as_deref_mut() {
            entities.add(
                area,
                tooltip.map(|s| s.to_string()),
                href.map(|s| s.to_string()),
            );
        }
    }
}

/// The atomic sizable/placeable layout unit.
pub trait Block {
    /// Resolves the block's outer size under the given constraint.
    ///
    /// Must be pure: identical inputs on an unmodified block yield an
    /// identical size, and no shared state is mutated.
    fn measure(&self, measurer: &dyn TextMeasurer, constraint: &Constraint) -> Size;

    /// Renders the block into a resolved outer rectangle.
    ///
    /// `area` is normally at least the size `measure` returned, but a smaller
    /// rectangle must not fail; overflow is clipped visually by the caller.
    fn place(&self, ctx: &mut RenderCtx<'_>, area: Rect) -> Result<(), EaselLayoutError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Interval;
    use float_cmp::assert_approx_eq;

    fn chrome() -> BlockChrome {
        BlockChrome {
            margin: Insets::uniform(2.0),
            border: BorderStyle::line(1.0, Color::BLACK),
            padding: Insets::uniform(3.0),
            fixed_width: None,
            fixed_height: None,
        }
    }

    #[test]
    fn test_insets_total_sums_all_layers() {
        let total = chrome().insets_total();
        assert_approx_eq!(f32, total.horizontal(), 12.0);
        assert_approx_eq!(f32, total.vertical(), 12.0);
    }

    #[test]
    fn test_content_constraint_fixed() {
        let inner = chrome().content_constraint(&Constraint::fixed(Size::new(100.0, 40.0)));
        assert_eq!(inner.width, SizeRule::Fixed(88.0));
        assert_eq!(inner.height, SizeRule::Fixed(28.0));
    }

    #[test]
    fn test_content_constraint_range() -> Result<(), EaselLayoutError> {
        let outer = Constraint::new(
            SizeRule::Range(Interval::try_new(10.0, 100.0)?),
            SizeRule::None,
        );
        let inner = chrome().content_constraint(&outer);
        match inner.width {
            SizeRule::Range(interval) => {
                assert_approx_eq!(f32, interval.min(), 0.0);
                assert_approx_eq!(f32, interval.max(), 88.0);
            }
            other => panic!("expected range rule, got {other:?}"),
        }
        assert_eq!(inner.height, SizeRule::None);
        Ok(())
    }

    #[test]
    fn test_fixed_override_wins() {
        let chrome = BlockChrome {
            fixed_width: Some(50.0),
            ..chrome()
        };
        let outer = chrome.outer_size(Size::new(100.0, 10.0));
        assert_approx_eq!(f32, outer.width, 50.0);
        assert_approx_eq!(f32, outer.height, 22.0);

        let inner = chrome.content_constraint(&Constraint::none());
        assert_eq!(inner.width, SizeRule::Fixed(38.0));
    }

    #[test]
    fn test_outer_content_rect_round_trip() {
        let chrome = chrome();
        let outer = Rect::new(10.0, 10.0, 100.0, 50.0);
        let content = chrome.content_rect(&outer);
        assert_eq!(content, Rect::new(16.0, 16.0, 88.0, 38.0));
        let restored = chrome.insets_total().grow(&content.size());
        assert_eq!(restored, outer.size());
    }
}
