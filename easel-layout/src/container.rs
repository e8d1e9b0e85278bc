//! Composite blocks.

use itertools::izip;

use easel_geom::{Rect, Size};
use easel_text::TextMeasurer;

use crate::arrangement::{Arrangement, Child, Slot};
use crate::block::{Block, BlockChrome, RenderCtx};
use crate::constraint::Constraint;
use crate::error::EaselLayoutError;

/// A block holding an ordered list of children and one arrangement.
///
/// Child order is caller-supplied and preserved; the engine never reorders.
pub struct Container {
    pub chrome: BlockChrome,
    pub arrangement: Arrangement,
    children: Vec<Child>,
}

impl Container {
    pub fn new(arrangement: Arrangement) -> Self {
        Self {
            chrome: BlockChrome::default(),
            arrangement,
            children: Vec::new(),
        }
    }

    pub fn with_chrome(mut self, chrome: BlockChrome) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn push(&mut self, block: Box<dyn Block>) {
        self.children.push(Child::new(block));
    }

    pub fn push_in(&mut self, block: Box<dyn Block>, slot: Slot) {
        self.children.push(Child::in_slot(block, slot));
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Block for Container {
    fn measure(&self, measurer: &dyn TextMeasurer, constraint: &Constraint) -> Size {
        let inner = self.chrome.content_constraint(constraint);
        let layout = self.arrangement.arrange(&self.children, measurer, &inner);
        self.chrome.outer_size(layout.size)
    }

    fn place(&self, ctx: &mut RenderCtx<'_>, area: Rect) -> Result<(), EaselLayoutError> {
        self.chrome.draw_border(ctx.canvas, &area);
        let content = self.chrome.content_rect(&area);

        // Re-arrange against the resolved content size so children split
        // exactly the space this container was given.
        let layout = self.arrangement.arrange(
            &self.children,
            ctx.measurer,
            &Constraint::fixed(content.size()),
        );
        for (child, frame) in izip!(&self.children, &layout.frames) {
            if frame.is_degenerate() {
                continue;
            }
            child
                .block
                .place(ctx, frame.translate(content.x, content.y))?;
        }
        Ok(())
    }
}
