use easel_layout::{EaselLayoutError, Slot};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EaselChartError {
    #[error("Internal error: `{0}`")]
    InternalError(String),

    #[error("Unsupported docking edge for title: {0:?}")]
    UnsupportedEdge(Slot),

    #[error("Layout error: `{0}`")]
    LayoutError(#[from] EaselLayoutError),
}
