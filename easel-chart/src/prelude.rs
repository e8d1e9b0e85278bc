pub use crate::chart::{Chart, RenderInfo};
pub use crate::error::EaselChartError;
pub use crate::legend::{
    LegendGraphic, LegendItem, LegendItemSource, LegendTitle, LineSpec, ShapeSpec,
};
pub use crate::plot::Plot;
pub use crate::theme::ChartTheme;
pub use crate::title::{TextTitle, Title};

pub use easel_geom::{
    align_rect, HorizontalAlign, Insets, Point, Rect, RectEdge, Size, VerticalAlign,
};
pub use easel_layout::{
    Arrangement, Block, BlockChrome, BorderStyle, Constraint, Container, EntityRegistry,
    LabelBlock, RenderCtx, SizeRule, Slot,
};
pub use easel_scene::{Canvas, Color, SceneOp, SceneRecorder};
pub use easel_text::{FontSpec, HeuristicMeasurer, TextMeasurer};
