pub mod align;
pub mod insets;
pub mod types;

pub use align::{align_rect, HorizontalAlign, RectEdge, VerticalAlign};
pub use insets::Insets;
pub use types::{Point, Rect, Size};
