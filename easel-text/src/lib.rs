pub mod measurement;
pub mod types;

pub use measurement::{HeuristicMeasurer, TextBounds, TextMeasurer};
pub use types::{FontSpec, FontStyle, FontWeight};
