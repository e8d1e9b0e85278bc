//! Per-axis sizing rules.
//!
//! A [`Constraint`] pairs one [`SizeRule`] per axis. `None` lets a block
//! report its natural extent, `Fixed` pins the axis, and `Range` clamps the
//! natural extent into an interval. Malformed ranges are rejected at
//! construction, so a constraint that reaches `measure` is always well
//! formed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use easel_geom::{Insets, Size};

use crate::error::EaselLayoutError;

/// A closed, non-negative interval.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    min: f32,
    max: f32,
}

impl Interval {
    pub fn try_new(min: f32, max: f32) -> Result<Self, EaselLayoutError> {
        if min > max || min < 0.0 || max < 0.0 {
            return Err(EaselLayoutError::InvalidInterval { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reduces both ends by `amount`, flooring at zero. Used when converting
    /// an outer constraint into an inner content constraint.
    pub fn shrink_by(&self, amount: f32) -> Interval {
        Interval {
            min: (self.min - amount).max(0.0),
            max: (self.max - amount).max(0.0),
        }
    }
}

/// Sizing rule for a single axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum SizeRule {
    /// The block reports its natural extent
    #[default]
    None,
    /// The axis is pinned to the given value
    Fixed(f32),
    /// The natural extent is clamped into the interval
    Range(Interval),
}

impl SizeRule {
    /// `Range [0, max]`, flooring a negative bound at zero.
    pub fn up_to(max: f32) -> SizeRule {
        SizeRule::Range(Interval {
            min: 0.0,
            max: max.max(0.0),
        })
    }

    /// Resolves a natural extent against this rule.
    pub fn apply(&self, natural: f32) -> f32 {
        match self {
            SizeRule::None => natural,
            SizeRule::Fixed(value) => *value,
            SizeRule::Range(interval) => interval.clamp(natural),
        }
    }

    /// The largest extent this rule permits, if bounded.
    pub fn upper_bound(&self) -> Option<f32> {
        match self {
            SizeRule::None => None,
            SizeRule::Fixed(value) => Some(*value),
            SizeRule::Range(interval) => Some(interval.max()),
        }
    }

    /// Reduces the rule's bounds by `amount`, flooring at zero.
    pub fn shrink_by(&self, amount: f32) -> SizeRule {
        match self {
            SizeRule::None => SizeRule::None,
            SizeRule::Fixed(value) => SizeRule::Fixed((value - amount).max(0.0)),
            SizeRule::Range(interval) => SizeRule::Range(interval.shrink_by(amount)),
        }
    }
}

/// A pair of per-axis sizing rules.
///
/// Created fresh for each measure invocation and never mutated.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub width: SizeRule,
    pub height: SizeRule,
}

impl Constraint {
    pub fn new(width: SizeRule, height: SizeRule) -> Self {
        Self { width, height }
    }

    /// Both axes unconstrained.
    pub fn none() -> Self {
        Self::default()
    }

    /// Both axes pinned to the given size.
    pub fn fixed(size: Size) -> Self {
        Self {
            width: SizeRule::Fixed(size.width),
            height: SizeRule::Fixed(size.height),
        }
    }

    pub fn fixed_width(width: f32) -> Self {
        Self {
            width: SizeRule::Fixed(width),
            height: SizeRule::None,
        }
    }

    pub fn fixed_height(height: f32) -> Self {
        Self {
            width: SizeRule::None,
            height: SizeRule::Fixed(height),
        }
    }

    /// `RANGE [0, width] x [0, height]` — the constraint the composer builds
    /// from the remaining rectangle at each docking step.
    ///
    /// Infallible because both ranges start at zero; negative extents are
    /// floored first.
    pub fn window(size: Size) -> Self {
        Self {
            width: SizeRule::Range(Interval {
                min: 0.0,
                max: size.width.max(0.0),
            }),
            height: SizeRule::Range(Interval {
                min: 0.0,
                max: size.height.max(0.0),
            }),
        }
    }

    /// Resolves a natural size against both rules independently.
    pub fn apply(&self, natural: Size) -> Size {
        Size {
            width: self.width.apply(natural.width),
            height: self.height.apply(natural.height),
        }
    }

    /// Derives the inner content constraint for a block whose insets sum to
    /// the given edge distances.
    pub fn shrink_by(&self, insets: &Insets) -> Constraint {
        Constraint {
            width: self.width.shrink_by(insets.horizontal()),
            height: self.height.shrink_by(insets.vertical()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_interval_rejects_inverted_bounds() {
        assert!(matches!(
            Interval::try_new(5.0, 2.0),
            Err(EaselLayoutError::InvalidInterval { .. })
        ));
        assert!(matches!(
            Interval::try_new(-1.0, 2.0),
            Err(EaselLayoutError::InvalidInterval { .. })
        ));
        assert!(Interval::try_new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_range_clamps_only_when_exceeding() -> Result<(), EaselLayoutError> {
        let rule = SizeRule::Range(Interval::try_new(0.0, 100.0)?);
        assert_approx_eq!(f32, rule.apply(150.0), 100.0);
        assert_approx_eq!(f32, rule.apply(50.0), 50.0);
        Ok(())
    }

    #[test]
    fn test_rule_apply() {
        assert_approx_eq!(f32, SizeRule::None.apply(42.0), 42.0);
        assert_approx_eq!(f32, SizeRule::Fixed(10.0).apply(42.0), 10.0);
    }

    #[test]
    fn test_shrink_by_floors_at_zero() -> Result<(), EaselLayoutError> {
        let constraint = Constraint::new(
            SizeRule::Fixed(10.0),
            SizeRule::Range(Interval::try_new(5.0, 30.0)?),
        );
        let inner = constraint.shrink_by(&Insets::uniform(20.0));
        assert_eq!(inner.width, SizeRule::Fixed(0.0));
        match inner.height {
            SizeRule::Range(interval) => {
                assert_approx_eq!(f32, interval.min(), 0.0);
                assert_approx_eq!(f32, interval.max(), 0.0);
            }
            other => panic!("expected range rule, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_window_floors_negative_extents() {
        let constraint = Constraint::window(Size::new(-5.0, 10.0));
        assert_approx_eq!(f32, constraint.width.upper_bound().unwrap(), 0.0);
        assert_approx_eq!(f32, constraint.height.upper_bound().unwrap(), 10.0);
    }
}
