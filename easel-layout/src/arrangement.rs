//! The four child-placement strategies.
//!
//! An arrangement is a pure function of the child list and the constraint:
//! it resolves one frame per child (in input order, relative to the
//! container's content origin) plus the overall size consumed. The consumed
//! size is the content-driven natural size resolved through the constraint,
//! so a `Fixed` rule pins it and a `Range` upper bound truncates it — child
//! overflow is never an error.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::VariantNames;

use easel_geom::{Rect, Size};
use easel_text::TextMeasurer;

use crate::block::Block;
use crate::constraint::{Constraint, SizeRule};

/// Named position within a border arrangement; also reused as the docking
/// edge for chart titles.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum Slot {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

/// A child block plus its optional slot assignment.
///
/// The slot is only meaningful under [`Arrangement::Border`]; an absent slot
/// is treated as [`Slot::Center`] there and ignored elsewhere.
pub struct Child {
    pub block: Box<dyn Block>,
    pub slot: Option<Slot>,
}

impl Child {
    pub fn new(block: Box<dyn Block>) -> Self {
        Self { block, slot: None }
    }

    pub fn in_slot(block: Box<dyn Block>, slot: Slot) -> Self {
        Self {
            block,
            slot: Some(slot),
        }
    }
}

/// Result of arranging a container's children: the overall size consumed and
/// one frame per child in input order. Children an arrangement does not place
/// (losing border-slot assignments, extra center children) get a zero frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub size: Size,
    pub frames: Vec<Rect>,
}

/// A stateless placement algorithm, shareable across containers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arrangement {
    /// Left-to-right with wrapping rows
    Flow { hgap: f32, vgap: f32 },
    /// Vertical stack, left-aligned
    Column { vgap: f32 },
    /// Five named slots: top/bottom first, then left/right, center last
    Border,
    /// A single child with equal leftover space on both axes
    Center,
}

impl Arrangement {
    pub fn flow(hgap: f32, vgap: f32) -> Self {
        Arrangement::Flow { hgap, vgap }
    }

    pub fn column(vgap: f32) -> Self {
        Arrangement::Column { vgap }
    }

    /// Sizes and positions `children` under `constraint`.
    ///
    /// Idempotent: identical inputs produce identical output.
    pub fn arrange(
        &self,
        children: &[Child],
        measurer: &dyn TextMeasurer,
        constraint: &Constraint,
    ) -> Layout {
        match self {
            Arrangement::Flow { hgap, vgap } => {
                arrange_flow(children, measurer, constraint, *hgap, *vgap)
            }
            Arrangement::Column { vgap } => arrange_column(children, measurer, constraint, *vgap),
            Arrangement::Border => arrange_border(children, measurer, constraint),
            Arrangement::Center => arrange_center(children, measurer, constraint),
        }
    }
}

fn arrange_flow(
    children: &[Child],
    measurer: &dyn TextMeasurer,
    constraint: &Constraint,
    hgap: f32,
    vgap: f32,
) -> Layout {
    let available = constraint.width.upper_bound().unwrap_or(f32::INFINITY);

    // Flow rows never squeeze their children; natural sizes only.
    let sizes: Vec<Size> = children
        .iter()
        .map(|child| child.block.measure(measurer, &Constraint::none()))
        .collect();

    // Pack indices into rows. A child wider than the whole row goes alone on
    // its own row rather than wrapping forever.
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut row_width = 0.0;
    for (index, size) in sizes.iter().enumerate() {
        let fits = match rows.last() {
            Some(row) if !row.is_empty() => row_width + hgap + size.width <= available,
            _ => true,
        };
        if rows.is_empty() || !fits {
            rows.push(vec![index]);
            row_width = size.width;
        } else {
            rows.last_mut().unwrap().push(index);
            row_width += hgap + size.width;
        }
    }

    let mut frames = vec![Rect::default(); children.len()];
    let mut natural = Size::zero();
    let mut y = 0.0;
    for (row_index, row) in rows.iter().enumerate() {
        if row_index > 0 {
            y += vgap;
        }
        let row_height = row
            .iter()
            .map(|&i| sizes[i].height)
            .fold(0.0f32, f32::max);
        let mut x = 0.0;
        for (col_index, &i) in row.iter().enumerate() {
            if col_index > 0 {
                x += hgap;
            }
            frames[i] = Rect::new(x, y, sizes[i].width, sizes[i].height);
            x += sizes[i].width;
        }
        natural.width = natural.width.max(x);
        y += row_height;
    }
    natural.height = y;

    Layout {
        size: constraint.apply(natural),
        frames,
    }
}

fn arrange_column(
    children: &[Child],
    measurer: &dyn TextMeasurer,
    constraint: &Constraint,
    vgap: f32,
) -> Layout {
    // Children may use up to the available width but keep natural heights.
    let child_constraint = Constraint {
        width: match constraint.width.upper_bound() {
            Some(available) => SizeRule::up_to(available),
            None => SizeRule::None,
        },
        height: SizeRule::None,
    };

    let mut frames = Vec::with_capacity(children.len());
    let mut natural = Size::zero();
    let mut y = 0.0;
    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            y += vgap;
        }
        let size = child.block.measure(measurer, &child_constraint);
        frames.push(Rect::new(0.0, y, size.width, size.height));
        natural.width = natural.width.max(size.width);
        y += size.height;
    }
    natural.height = y;

    Layout {
        size: constraint.apply(natural),
        frames,
    }
}

fn arrange_border(
    children: &[Child],
    measurer: &dyn TextMeasurer,
    constraint: &Constraint,
) -> Layout {
    // At most one child per slot; a later assignment overwrites an earlier
    // one (last write wins).
    let mut winners: [Option<usize>; 5] = [None; 5];
    for (index, child) in children.iter().enumerate() {
        let slot = child.slot.unwrap_or(Slot::Center);
        winners[slot as usize] = Some(index);
    }
    let winner = |slot: Slot| winners[slot as usize];

    let width_bound = constraint.width.upper_bound();
    let height_bound = constraint.height.upper_bound();
    let bounded = |bound: Option<f32>| match bound {
        Some(value) => SizeRule::up_to(value),
        None => SizeRule::None,
    };

    let mut frames = vec![Rect::default(); children.len()];
    let measure_slot = |index: Option<usize>, child_constraint: Constraint| -> Size {
        match index {
            Some(i) => children[i].block.measure(measurer, &child_constraint),
            None => Size::zero(),
        }
    };

    // Top and bottom are measured first at the full available width.
    let strip_constraint = Constraint {
        width: bounded(width_bound),
        height: SizeRule::None,
    };
    let top = measure_slot(winner(Slot::Top), strip_constraint);
    let bottom = measure_slot(winner(Slot::Bottom), strip_constraint);

    // Left and right get the height that remains after the strips.
    let remaining_height = height_bound.map(|h| (h - top.height - bottom.height).max(0.0));
    let side_constraint = Constraint {
        width: SizeRule::None,
        height: bounded(remaining_height),
    };
    let left = measure_slot(winner(Slot::Left), side_constraint);
    let right = measure_slot(winner(Slot::Right), side_constraint);

    // Center gets whatever rectangle remains.
    let remaining_width = width_bound.map(|w| (w - left.width - right.width).max(0.0));
    let center_constraint = Constraint {
        width: bounded(remaining_width),
        height: bounded(remaining_height),
    };
    let center = measure_slot(winner(Slot::Center), center_constraint);

    let natural = Size::new(
        (left.width + center.width + right.width)
            .max(top.width)
            .max(bottom.width),
        top.height + bottom.height + center.height.max(left.height).max(right.height),
    );
    let total = constraint.apply(natural);

    let middle_height = (total.height - top.height - bottom.height).max(0.0);
    if let Some(i) = winner(Slot::Top) {
        frames[i] = Rect::new(0.0, 0.0, total.width, top.height);
    }
    if let Some(i) = winner(Slot::Bottom) {
        frames[i] = Rect::new(0.0, total.height - bottom.height, total.width, bottom.height);
    }
    if let Some(i) = winner(Slot::Left) {
        frames[i] = Rect::new(0.0, top.height, left.width, middle_height);
    }
    if let Some(i) = winner(Slot::Right) {
        frames[i] = Rect::new(total.width - right.width, top.height, right.width, middle_height);
    }
    if let Some(i) = winner(Slot::Center) {
        frames[i] = Rect::new(
            left.width,
            top.height,
            (total.width - left.width - right.width).max(0.0),
            middle_height,
        );
    }

    Layout { size: total, frames }
}

fn arrange_center(
    children: &[Child],
    measurer: &dyn TextMeasurer,
    constraint: &Constraint,
) -> Layout {
    // Exactly one child is placed; extras keep zero frames.
    let mut frames = vec![Rect::default(); children.len()];
    let natural = match children.first() {
        Some(child) => child.block.measure(measurer, &Constraint::none()),
        None => Size::zero(),
    };
    let total = constraint.apply(natural);
    if !children.is_empty() {
        frames[0] = Rect::new(
            (total.width - natural.width) / 2.0,
            (total.height - natural.height) / 2.0,
            natural.width,
            natural.height,
        );
    }
    Layout { size: total, frames }
}
