#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::VariantNames;

use easel_geom::{HorizontalAlign, Point, Rect};
use easel_text::FontSpec;

use crate::color::Color;

/// A filled and/or stroked rectangle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RectOp {
    pub rect: Rect,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f32,
}

impl RectOp {
    pub fn filled(rect: Rect, fill: Color) -> Self {
        Self {
            rect,
            fill: Some(fill),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    pub fn stroked(rect: Rect, stroke: Color, stroke_width: f32) -> Self {
        Self {
            rect,
            fill: None,
            stroke: Some(stroke),
            stroke_width,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum SymbolShape {
    #[default]
    Square,
    Circle,
}

/// A small centered symbol, as drawn in legend samples.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolOp {
    pub center: Point,
    pub shape: SymbolShape,
    /// Side length (square) or diameter (circle)
    pub size: f32,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f32,
}

/// A stroked line segment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LineOp {
    pub from: Point,
    pub to: Point,
    pub stroke: Color,
    pub stroke_width: f32,
}

/// A single-line text run anchored at `origin`.
///
/// The origin is the point the text aligns against per `halign`; baseline
/// placement within the line box is the renderer's concern.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    pub origin: Point,
    pub text: String,
    pub font: FontSpec,
    pub color: Color,
    pub halign: HorizontalAlign,
}

/// The closed set of draw descriptors the layout engine can emit.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq)]
pub enum SceneOp {
    Rect(RectOp),
    Symbol(SymbolOp),
    Line(LineOp),
    Text(TextOp),
}
