#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::VariantNames;

use crate::types::{Rect, Size};

/// One edge of a rectangle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum RectEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl RectEdge {
    /// True for Top/Bottom (edges that run horizontally).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, RectEdge::Top | RectEdge::Bottom)
    }

    pub fn opposite(&self) -> RectEdge {
        match self {
            RectEdge::Top => RectEdge::Bottom,
            RectEdge::Bottom => RectEdge::Top,
            RectEdge::Left => RectEdge::Right,
            RectEdge::Right => RectEdge::Left,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Positions a rectangle of the given size within a frame according to the
/// horizontal and vertical alignment.
pub fn align_rect(
    size: Size,
    frame: &Rect,
    halign: HorizontalAlign,
    valign: VerticalAlign,
) -> Rect {
    let x = match halign {
        HorizontalAlign::Left => frame.min_x(),
        HorizontalAlign::Center => frame.center().x - size.width / 2.0,
        HorizontalAlign::Right => frame.max_x() - size.width,
    };
    let y = match valign {
        VerticalAlign::Top => frame.min_y(),
        VerticalAlign::Center => frame.center().y - size.height / 2.0,
        VerticalAlign::Bottom => frame.max_y() - size.height,
    };
    Rect {
        x,
        y,
        width: size.width,
        height: size.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_align_rect_all_anchors() {
        let frame = Rect::new(10.0, 20.0, 100.0, 60.0);
        let size = Size::new(20.0, 10.0);

        let cases = [
            (HorizontalAlign::Left, VerticalAlign::Top, 10.0, 20.0),
            (HorizontalAlign::Center, VerticalAlign::Top, 50.0, 20.0),
            (HorizontalAlign::Right, VerticalAlign::Top, 90.0, 20.0),
            (HorizontalAlign::Left, VerticalAlign::Center, 10.0, 45.0),
            (HorizontalAlign::Center, VerticalAlign::Center, 50.0, 45.0),
            (HorizontalAlign::Right, VerticalAlign::Center, 90.0, 45.0),
            (HorizontalAlign::Left, VerticalAlign::Bottom, 10.0, 70.0),
            (HorizontalAlign::Center, VerticalAlign::Bottom, 50.0, 70.0),
            (HorizontalAlign::Right, VerticalAlign::Bottom, 90.0, 70.0),
        ];
        for (halign, valign, x, y) in cases {
            let aligned = align_rect(size, &frame, halign, valign);
            assert_approx_eq!(f32, aligned.x, x);
            assert_approx_eq!(f32, aligned.y, y);
            assert_eq!(aligned.size(), size);
        }
    }

    #[test]
    fn test_edge_orientation() {
        assert!(RectEdge::Top.is_horizontal());
        assert!(RectEdge::Bottom.is_horizontal());
        assert!(!RectEdge::Left.is_horizontal());
        assert_eq!(RectEdge::Left.opposite(), RectEdge::Right);
        assert_eq!(RectEdge::Top.opposite(), RectEdge::Bottom);
    }
}
