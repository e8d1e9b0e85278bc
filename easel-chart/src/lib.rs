//! Chart-level composition: edge-docked titles and legends around a plot.

pub mod chart;
pub mod error;
pub mod legend;
pub mod plot;
pub mod prelude;
pub mod theme;
pub mod title;

pub use chart::{Chart, RenderInfo};
pub use error::EaselChartError;
pub use legend::{LegendGraphic, LegendItem, LegendItemSource, LegendTitle, LineSpec, ShapeSpec};
pub use plot::Plot;
pub use theme::ChartTheme;
pub use title::{TextTitle, Title};
