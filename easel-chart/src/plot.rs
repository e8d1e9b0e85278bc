use easel_geom::Rect;
use easel_layout::{EaselLayoutError, RenderCtx};

use crate::legend::LegendItemSource;

/// The plot seam.
///
/// The composer hands the plot whatever rectangle remains after all titles
/// and legends are docked. Datasets, axes, and scales live behind this trait
/// and never participate in the layout algorithm. Every plot doubles as a
/// legend item source so a legend can derive its items from the live series
/// list on each pass.
pub trait Plot: LegendItemSource {
    /// A short human-readable label, used for the plot's entity region.
    fn label(&self) -> &str;

    /// Renders the plot into the resolved plot area.
    fn render(&self, ctx: &mut RenderCtx<'_>, area: Rect) -> Result<(), EaselLayoutError>;
}
