pub mod canvas;
pub mod color;
pub mod ops;

pub use canvas::{Canvas, SceneRecorder};
pub use color::Color;
pub use ops::{LineOp, RectOp, SceneOp, SymbolOp, SymbolShape, TextOp};
