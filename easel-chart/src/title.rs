//! Chart titles.

use easel_geom::{HorizontalAlign, Insets, Rect, Size, VerticalAlign};
use easel_layout::{
    Block, BlockChrome, Constraint, EaselLayoutError, LabelBlock, RenderCtx, Slot,
};
use easel_scene::Color;
use easel_text::{FontSpec, TextMeasurer};

use crate::legend::LegendTitle;

/// A single-line text title docked against one edge of the chart.
#[derive(Debug, Clone)]
pub struct TextTitle {
    pub text: String,
    pub font: FontSpec,
    pub color: Color,
    pub slot: Slot,
    pub halign: HorizontalAlign,
    pub valign: VerticalAlign,
    pub visible: bool,
    pub tooltip: Option<String>,
    pub href: Option<String>,
    pub chrome: BlockChrome,
}

impl TextTitle {
    pub fn new(text: impl Into<String>, font: FontSpec) -> Self {
        Self {
            text: text.into(),
            font,
            color: Color::BLACK,
            slot: Slot::Top,
            halign: HorizontalAlign::Center,
            valign: VerticalAlign::Center,
            visible: true,
            tooltip: None,
            href: None,
            chrome: BlockChrome::with_padding(Insets::uniform(1.0)),
        }
    }

    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slot = slot;
        self
    }

    pub fn with_halign(mut self, halign: HorizontalAlign) -> Self {
        self.halign = halign;
        self
    }

    pub fn with_valign(mut self, valign: VerticalAlign) -> Self {
        self.valign = valign;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    fn label_view(&self) -> LabelBlock {
        let mut label = LabelBlock::new(self.text.clone(), self.font.clone(), self.color)
            .with_halign(self.halign)
            .with_chrome(self.chrome.clone());
        label.tooltip = self.tooltip.clone();
        label.href = self.href.clone();
        label
    }
}

impl Block for TextTitle {
    fn measure(&self, measurer: &dyn TextMeasurer, constraint: &Constraint) -> Size {
        self.label_view().measure(measurer, constraint)
    }

    fn place(&self, ctx: &mut RenderCtx<'_>, area: Rect) -> Result<(), EaselLayoutError> {
        self.label_view().place(ctx, area)
    }
}

/// The closed set of blocks the composer docks around the plot.
pub enum Title {
    Text(TextTitle),
    Legend(LegendTitle),
}

impl Title {
    pub fn slot(&self) -> Slot {
        match self {
            Title::Text(t) => t.slot,
            Title::Legend(l) => l.slot,
        }
    }

    pub fn halign(&self) -> HorizontalAlign {
        match self {
            Title::Text(t) => t.halign,
            Title::Legend(l) => l.halign,
        }
    }

    pub fn valign(&self) -> VerticalAlign {
        match self {
            Title::Text(t) => t.valign,
            Title::Legend(l) => l.valign,
        }
    }

    pub fn visible(&self) -> bool {
        match self {
            Title::Text(t) => t.visible,
            Title::Legend(l) => l.visible,
        }
    }
}

impl Block for Title {
    fn measure(&self, measurer: &dyn TextMeasurer, constraint: &Constraint) -> Size {
        match self {
            Title::Text(t) => t.measure(measurer, constraint),
            Title::Legend(l) => l.measure(measurer, constraint),
        }
    }

    fn place(&self, ctx: &mut RenderCtx<'_>, area: Rect) -> Result<(), EaselLayoutError> {
        match self {
            Title::Text(t) => t.place(ctx, area),
            Title::Legend(l) => l.place(ctx, area),
        }
    }
}
