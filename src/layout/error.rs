//! Error types for the layout engine

use thiserror::Error;

use super::types::ComponentKind;

/// Errors that can occur during opening layout.
///
/// Overflow is not among them: an over-full opening is an expected business
/// condition reported on the layout result.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Grid packing is not implemented; rows must be laid out as separate
    /// vertical openings
    #[error("grid layout is not supported; lay out each row as its own vertical opening")]
    GridUnsupported,

    /// A placement refers to a component that does not exist in the opening
    #[error("placement refers to missing {} at index {index}", .kind.label())]
    UnknownComponent { kind: ComponentKind, index: usize },
}

impl LayoutError {
    /// Create an unknown-component error
    pub fn unknown_component(kind: ComponentKind, index: usize) -> Self {
        Self::UnknownComponent { kind, index }
    }
}
