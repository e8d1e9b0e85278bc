//! The legend: item model, item-source capability, and the docked legend
//! block.
//!
//! Legend items are derived from the live sources inside every measure and
//! place pass. Nothing is cached, so a dataset change between renders shows
//! up without any invalidation bookkeeping.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use easel_geom::{
    HorizontalAlign, Insets, Point, Rect, RectEdge, Size, VerticalAlign,
};
use easel_layout::{
    Arrangement, Block, BlockChrome, BorderStyle, Constraint, Container, EaselLayoutError,
    LabelBlock, RenderCtx, Slot,
};
use easel_scene::{Color, LineOp, RectOp, SceneOp, SymbolOp, SymbolShape};
use easel_text::{FontSpec, TextMeasurer};

/// Shape sample for a legend item.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSpec {
    pub shape: SymbolShape,
    /// Side length (square) or diameter (circle)
    pub size: f32,
}

impl ShapeSpec {
    pub fn square(size: f32) -> Self {
        Self {
            shape: SymbolShape::Square,
            size,
        }
    }

    pub fn circle(size: f32) -> Self {
        Self {
            shape: SymbolShape::Circle,
            size,
        }
    }
}

/// Line sample for a legend item.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpec {
    pub color: Color,
    pub width: f32,
}

/// One entry in a legend, describing a single series.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub tooltip: Option<String>,
    pub href: Option<String>,
    pub fill: Color,
    pub outline: Option<Color>,
    pub shape: Option<ShapeSpec>,
    pub line: Option<LineSpec>,
}

impl LegendItem {
    pub fn new(label: impl Into<String>, fill: Color) -> Self {
        Self {
            label: label.into(),
            tooltip: None,
            href: None,
            fill,
            outline: None,
            shape: Some(ShapeSpec::square(8.0)),
            line: None,
        }
    }
}

/// The explicit capability a legend pulls its items from on every pass.
pub trait LegendItemSource: Send + Sync {
    fn legend_items(&self) -> Vec<LegendItem>;
}

/// Leaf block drawing a legend item's shape and/or line sample, centered in
/// its content rectangle.
#[derive(Debug, Clone)]
pub struct LegendGraphic {
    pub fill: Color,
    pub outline: Option<Color>,
    pub shape: Option<ShapeSpec>,
    pub line: Option<LineSpec>,
    pub chrome: BlockChrome,
}

impl LegendGraphic {
    pub fn from_item(item: &LegendItem, padding: Insets) -> Self {
        Self {
            fill: item.fill,
            outline: item.outline,
            shape: item.shape,
            line: item.line,
            chrome: BlockChrome::with_padding(padding),
        }
    }

    /// Natural sample extent: the shape size, or a fixed line-sample length
    /// when only a line is present.
    fn sample_extent(&self) -> f32 {
        match (&self.shape, &self.line) {
            (Some(shape), _) => shape.size,
            (None, Some(_)) => 12.0,
            (None, None) => 0.0,
        }
    }
}

impl Block for LegendGraphic {
    fn measure(&self, _measurer: &dyn TextMeasurer, _constraint: &Constraint) -> Size {
        let extent = self.sample_extent();
        self.chrome.outer_size(Size::new(extent, extent))
    }

    fn place(&self, ctx: &mut RenderCtx<'_>, area: Rect) -> Result<(), EaselLayoutError> {
        self.chrome.draw_border(ctx.canvas, &area);
        let content = self.chrome.content_rect(&area);
        let center = content.center();
        if let Some(line) = &self.line {
            ctx.canvas.submit(SceneOp::Line(LineOp {
                from: Point::new(content.min_x(), center.y),
                to: Point::new(content.max_x(), center.y),
                stroke: line.color,
                stroke_width: line.width,
            }));
        }
        if let Some(shape) = &self.shape {
            ctx.canvas.submit(SceneOp::Symbol(SymbolOp {
                center,
                shape: shape.shape,
                size: shape.size,
                fill: Some(self.fill),
                stroke: self.outline,
                stroke_width: if self.outline.is_some() { 1.0 } else { 0.0 },
            }));
        }
        Ok(())
    }
}

/// A legend docked against one edge of the chart.
pub struct LegendTitle {
    sources: Vec<Arc<dyn LegendItemSource>>,
    pub item_font: FontSpec,
    pub item_color: Color,
    /// Which side of each item the graphic sits on
    pub graphic_edge: RectEdge,
    pub graphic_padding: Insets,
    pub label_padding: Insets,
    pub background: Option<Color>,
    /// Item arrangement when docked top or bottom
    pub horizontal: Arrangement,
    /// Item arrangement when docked left or right
    pub vertical: Arrangement,
    pub slot: Slot,
    pub halign: HorizontalAlign,
    pub valign: VerticalAlign,
    pub visible: bool,
    pub chrome: BlockChrome,
}

impl LegendTitle {
    pub fn new(source: Arc<dyn LegendItemSource>) -> Self {
        Self {
            sources: vec![source],
            item_font: FontSpec::new("sans-serif", 12.0),
            item_color: Color::BLACK,
            graphic_edge: RectEdge::Left,
            graphic_padding: Insets::uniform(2.0),
            label_padding: Insets::uniform(2.0),
            background: Some(Color::WHITE),
            horizontal: Arrangement::flow(2.0, 2.0),
            vertical: Arrangement::column(2.0),
            slot: Slot::Bottom,
            halign: HorizontalAlign::Center,
            valign: VerticalAlign::Center,
            visible: true,
            chrome: BlockChrome {
                margin: Insets::uniform(1.0),
                border: BorderStyle::line(1.0, Color::BLACK),
                padding: Insets::uniform(1.0),
                fixed_width: None,
                fixed_height: None,
            },
        }
    }

    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slot = slot;
        self
    }

    pub fn with_item_font(mut self, font: FontSpec) -> Self {
        self.item_font = font;
        self
    }

    pub fn add_source(&mut self, source: Arc<dyn LegendItemSource>) {
        self.sources.push(source);
    }

    fn item_arrangement(&self) -> Arrangement {
        match self.slot {
            Slot::Top | Slot::Bottom => self.horizontal,
            _ => self.vertical,
        }
    }

    /// Builds the per-item block: a border container with the graphic on the
    /// configured edge and the label in the center, wrapped in a centering
    /// container so items in a row align.
    fn build_item_block(&self, item: &LegendItem) -> Box<dyn Block> {
        let mut inner = Container::new(Arrangement::Border);
        inner.push_in(
            Box::new(LegendGraphic::from_item(item, self.graphic_padding)),
            edge_slot(self.graphic_edge),
        );
        let mut label = LabelBlock::new(item.label.clone(), self.item_font.clone(), self.item_color)
            .with_chrome(BlockChrome::with_padding(self.label_padding));
        label.tooltip = item.tooltip.clone();
        label.href = item.href.clone();
        inner.push_in(Box::new(label), Slot::Center);

        let mut wrapper = Container::new(Arrangement::Center);
        wrapper.push(Box::new(inner));
        Box::new(wrapper)
    }

    /// Derives a fresh item container from the live sources.
    fn build_items(&self) -> Container {
        let mut items = Container::new(self.item_arrangement());
        for source in &self.sources {
            for item in source.legend_items() {
                items.push(self.build_item_block(&item));
            }
        }
        items
    }
}

impl Block for LegendTitle {
    fn measure(&self, measurer: &dyn TextMeasurer, constraint: &Constraint) -> Size {
        let inner = self.chrome.content_constraint(constraint);
        let content = self.build_items().measure(measurer, &inner);
        self.chrome.outer_size(content)
    }

    fn place(&self, ctx: &mut RenderCtx<'_>, area: Rect) -> Result<(), EaselLayoutError> {
        if let Some(background) = self.background {
            let frame = self.chrome.border_rect(&area);
            if !frame.is_degenerate() && !background.is_transparent() {
                ctx.canvas.submit(SceneOp::Rect(RectOp::filled(frame, background)));
            }
        }
        self.chrome.draw_border(ctx.canvas, &area);
        self.build_items().place(ctx, self.chrome.content_rect(&area))
    }
}

fn edge_slot(edge: RectEdge) -> Slot {
    match edge {
        RectEdge::Top => Slot::Top,
        RectEdge::Bottom => Slot::Bottom,
        RectEdge::Left => Slot::Left,
        RectEdge::Right => Slot::Right,
    }
}
