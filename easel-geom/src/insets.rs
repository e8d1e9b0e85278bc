use ordered_float::OrderedFloat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Rect, Size};

/// Four non-negative edge distances.
///
/// Used uniformly for margin, border thickness, and padding. Shrinking clamps
/// the resulting width/height at zero, so `grow(shrink_size(s)) == s` only
/// when `s` was large enough that no clipping occurred.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Insets {
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Total horizontal extent (left + right).
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical extent (top + bottom).
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Per-edge sum of two inset sets.
    pub fn add(&self, other: &Insets) -> Insets {
        Insets {
            top: self.top + other.top,
            left: self.left + other.left,
            bottom: self.bottom + other.bottom,
            right: self.right + other.right,
        }
    }

    /// Subtracts the edges from a rectangle, clamping width/height at zero.
    pub fn shrink(&self, rect: &Rect) -> Rect {
        Rect {
            x: rect.x + self.left,
            y: rect.y + self.top,
            width: (rect.width - self.horizontal()).max(0.0),
            height: (rect.height - self.vertical()).max(0.0),
        }
    }

    /// Subtracts the edges from a size, clamping at zero.
    pub fn shrink_size(&self, size: &Size) -> Size {
        Size {
            width: (size.width - self.horizontal()).max(0.0),
            height: (size.height - self.vertical()).max(0.0),
        }
    }

    /// Adds the edges to a size.
    pub fn grow(&self, size: &Size) -> Size {
        Size {
            width: size.width + self.horizontal(),
            height: size.height + self.vertical(),
        }
    }
}

impl std::hash::Hash for Insets {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        [self.top, self.left, self.bottom, self.right]
            .iter()
            .for_each(|v| OrderedFloat::from(*v).hash(state));
    }
}
