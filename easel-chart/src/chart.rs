//! The chart composer.
//!
//! A render pass carves edge-docked strips (main title, subtitles, legends)
//! out of a single shrinking "remaining rectangle" in registration order,
//! then hands whatever is left to the plot.

use easel_geom::{align_rect, HorizontalAlign, Rect, VerticalAlign};
use easel_layout::{
    Block, BorderStyle, Constraint, EntityRegistry, RenderCtx, Slot,
};
use easel_scene::{Canvas, RectOp, SceneOp};
use easel_text::TextMeasurer;

use crate::error::EaselChartError;
use crate::legend::LegendTitle;
use crate::plot::Plot;
use crate::theme::ChartTheme;
use crate::title::{TextTitle, Title};

/// Result of one render pass.
#[derive(Debug)]
pub struct RenderInfo {
    /// The full canvas rectangle the chart was rendered into
    pub chart_area: Rect,
    /// The rectangle that remained for the plot after docking
    pub plot_area: Rect,
    /// Entity regions registered during the pass, in draw order
    pub entities: EntityRegistry,
}

/// A composite chart: background, border, docked titles and legends, and
/// the plot.
pub struct Chart {
    plot: Box<dyn Plot>,
    pub theme: ChartTheme,
    pub border: Option<BorderStyle>,
    pub title: Option<TextTitle>,
    subtitles: Vec<Title>,
}

impl Chart {
    pub fn new(plot: Box<dyn Plot>) -> Self {
        Self {
            plot,
            theme: ChartTheme::default(),
            border: None,
            title: None,
            subtitles: Vec::new(),
        }
    }

    /// Swaps the theme. A main title still wearing the previous theme's
    /// title font follows the new theme; an explicitly customized title font
    /// is left alone.
    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        if let Some(title) = self.title.as_mut() {
            if title.font == self.theme.title_font {
                title.font = theme.title_font.clone();
            }
        }
        self.theme = theme;
        self
    }

    /// Sets the main title, using the theme's title font.
    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(TextTitle::new(text, self.theme.title_font.clone()));
        self
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = Some(border);
        self
    }

    pub fn add_subtitle(&mut self, title: Title) {
        self.subtitles.push(title);
    }

    pub fn add_legend(&mut self, legend: LegendTitle) {
        self.subtitles.push(Title::Legend(legend));
    }

    pub fn subtitles(&self) -> &[Title] {
        &self.subtitles
    }

    /// The first legend among the subtitles, if any.
    pub fn legend(&self) -> Option<&LegendTitle> {
        self.subtitles.iter().find_map(|t| match t {
            Title::Legend(l) => Some(l),
            _ => None,
        })
    }

    pub fn remove_legend(&mut self) {
        self.subtitles.retain(|t| !matches!(t, Title::Legend(_)));
    }

    pub fn plot(&self) -> &dyn Plot {
        self.plot.as_ref()
    }

    /// Runs one full layout-and-draw pass over `area`.
    ///
    /// Contract violations abort the whole pass; cosmetic overflow and
    /// exhausted area never do.
    #[tracing::instrument(skip_all)]
    pub fn render(
        &self,
        area: Rect,
        measurer: &dyn TextMeasurer,
        canvas: &mut dyn Canvas,
    ) -> Result<RenderInfo, EaselChartError> {
        let mut entities = EntityRegistry::new();

        if !self.theme.background.is_transparent() {
            canvas.submit(SceneOp::Rect(RectOp::filled(area, self.theme.background)));
        }
        if let Some(border) = &self.border {
            if border.is_visible() {
                canvas.submit(SceneOp::Rect(RectOp::stroked(
                    area,
                    border.color,
                    border.insets.top,
                )));
            }
        }

        let mut remaining = self.theme.chart_padding.shrink(&area);
        let plot_area;
        {
            let mut ctx = RenderCtx::with_entities(measurer, canvas, &mut entities);
            if let Some(title) = &self.title {
                if title.visible {
                    dock(
                        title,
                        title.slot,
                        title.halign,
                        title.valign,
                        &mut ctx,
                        &mut remaining,
                    )?;
                }
            }
            for subtitle in &self.subtitles {
                if subtitle.visible() {
                    dock(
                        subtitle,
                        subtitle.slot(),
                        subtitle.halign(),
                        subtitle.valign(),
                        &mut ctx,
                        &mut remaining,
                    )?;
                }
            }

            plot_area = remaining;
            ctx.add_entity(plot_area, Some(self.plot.label()), None);
            self.plot.render(&mut ctx, plot_area)?;
        }

        Ok(RenderInfo {
            chart_area: area,
            plot_area,
            entities,
        })
    }
}

/// Docks one block against an edge of the remaining rectangle, placing it
/// and shrinking the rectangle by the consumed extent.
fn dock(
    block: &dyn Block,
    slot: Slot,
    halign: HorizontalAlign,
    valign: VerticalAlign,
    ctx: &mut RenderCtx<'_>,
    remaining: &mut Rect,
) -> Result<(), EaselChartError> {
    if remaining.is_degenerate() {
        tracing::debug!(?slot, "skipping docked block: remaining area exhausted");
        return Ok(());
    }

    let constraint = Constraint::window(remaining.size());
    let mut size = block.measure(ctx.measurer, &constraint);

    // Docked blocks span the full perpendicular extent of the strip, exactly
    // as the remaining rectangle will shrink.
    let frame = match slot {
        Slot::Top => {
            size.width = remaining.width;
            align_rect(size, remaining, halign, VerticalAlign::Top)
        }
        Slot::Bottom => {
            size.width = remaining.width;
            align_rect(size, remaining, halign, VerticalAlign::Bottom)
        }
        Slot::Left => {
            size.height = remaining.height;
            align_rect(size, remaining, HorizontalAlign::Left, valign)
        }
        Slot::Right => {
            size.height = remaining.height;
            align_rect(size, remaining, HorizontalAlign::Right, valign)
        }
        Slot::Center => return Err(EaselChartError::UnsupportedEdge(Slot::Center)),
    };

    block.place(ctx, frame)?;

    match slot {
        Slot::Top => {
            let consumed = size.height.min(remaining.height);
            remaining.y += consumed;
            remaining.height -= consumed;
        }
        Slot::Bottom => {
            remaining.height -= size.height.min(remaining.height);
        }
        Slot::Left => {
            let consumed = size.width.min(remaining.width);
            remaining.x += consumed;
            remaining.width -= consumed;
        }
        Slot::Right => {
            remaining.width -= size.width.min(remaining.width);
        }
        Slot::Center => unreachable!("rejected above"),
    }
    Ok(())
}
