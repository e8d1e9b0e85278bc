//! Constraint-based block layout.
//!
//! A chart is composed from a tree of [`Block`]s. Each block obeys the same
//! contract: `measure` resolves a natural size under a [`Constraint`], and
//! `place` renders into a resolved rectangle. Containers delegate the sizing
//! and positioning of their children to a stateless [`Arrangement`].

pub mod arrangement;
pub mod block;
pub mod constraint;
pub mod container;
pub mod entity;
pub mod error;
pub mod leaf;

pub use arrangement::{Arrangement, Child, Layout, Slot};
pub use block::{Block, BlockChrome, BorderStyle, RenderCtx};
pub use constraint::{Constraint, Interval, SizeRule};
pub use container::Container;
pub use entity::{Entity, EntityRegistry};
pub use error::EaselLayoutError;
pub use leaf::{EmptyBlock, LabelBlock};
