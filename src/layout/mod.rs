//! Opening layout engine
//!
//! Computes exact one-dimensional packing of drawers, shelves, doors and
//! pull-outs inside a bounded opening: per-component positions and consumed
//! spans, total consumed space, remaining space, and overflow.

pub mod config;
pub mod engine;
pub mod error;
pub mod fraction;
pub mod types;

pub use config::{LayoutConfig, RevealSet};
pub use engine::{can_fit, layout_opening};
pub use error::LayoutError;
pub use fraction::{format_inches, DEFAULT_DENOMINATOR};
pub use types::{
    ComponentKind, Door, DrawerFront, LayoutDirection, LineRef, Opening, OpeningLayout, Placement,
    Pullout, Shelf,
};
