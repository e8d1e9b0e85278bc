//! Leaf blocks: a single-line text label and a fixed-size spacer.

use easel_geom::{HorizontalAlign, Rect, Size};
use easel_scene::{Color, SceneOp, TextOp};
use easel_text::{FontSpec, TextMeasurer};

use crate::block::{Block, BlockChrome, RenderCtx};
use crate::constraint::Constraint;
use crate::error::EaselLayoutError;

/// A single line of text.
///
/// Text reports its natural measured extent; the outer constraint only
/// affects it through the chrome's fixed-size overrides. Oversized labels
/// are clipped by the caller, never wrapped.
#[derive(Debug, Clone)]
pub struct LabelBlock {
    pub text: String,
    pub font: FontSpec,
    pub color: Color,
    pub halign: HorizontalAlign,
    pub tooltip: Option<String>,
    pub href: Option<String>,
    pub chrome: BlockChrome,
}

impl LabelBlock {
    pub fn new(text: impl Into<String>, font: FontSpec, color: Color) -> Self {
        Self {
            text: text.into(),
            font,
            color,
            halign: HorizontalAlign::Left,
            tooltip: None,
            href: None,
            chrome: BlockChrome::default(),
        }
    }

    pub fn with_halign(mut self, halign: HorizontalAlign) -> Self {
        self.halign = halign;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_chrome(mut self, chrome: BlockChrome) -> Self {
        self.chrome = chrome;
        self
    }
}

impl Block for LabelBlock {
    fn measure(&self, measurer: &dyn TextMeasurer, _constraint: &Constraint) -> Size {
        let bounds = measurer.measure(&self.text, &self.font);
        self.chrome.outer_size(bounds.size())
    }

    fn place(&self, ctx: &mut RenderCtx<'_>, area: Rect) -> Result<(), EaselLayoutError> {
        self.chrome.draw_border(ctx.canvas, &area);
        let content = self.chrome.content_rect(&area);
        let anchor_x = match self.halign {
            HorizontalAlign::Left => content.min_x(),
            HorizontalAlign::Center => content.center().x,
            HorizontalAlign::Right => content.max_x(),
        };
        ctx.canvas.submit(SceneOp::Text(TextOp {
            origin: easel_geom::Point::new(anchor_x, content.min_y()),
            text: self.text.clone(),
            font: self.font.clone(),
            color: self.color,
            halign: self.halign,
        }));
        ctx.add_entity(area, self.tooltip.as_deref(), self.href.as_deref());
        Ok(())
    }
}

/// A spacer with a fixed content size and no visual output beyond its
/// border, if any.
#[derive(Debug, Clone, Default)]
pub struct EmptyBlock {
    pub size: Size,
    pub chrome: BlockChrome,
}

impl EmptyBlock {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            chrome: BlockChrome::default(),
        }
    }
}

impl Block for EmptyBlock {
    fn measure(&self, _measurer: &dyn TextMeasurer, _constraint: &Constraint) -> Size {
        self.chrome.outer_size(self.size)
    }

    fn place(&self, ctx: &mut RenderCtx<'_>, area: Rect) -> Result<(), EaselLayoutError> {
        self.chrome.draw_border(ctx.canvas, &area);
        Ok(())
    }
}
