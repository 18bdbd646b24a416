//! Casework - construction-standards resolution and opening layout
//!
//! This library determines the effective construction parameters for a
//! cabinetry entity through a multi-level override hierarchy, and computes
//! exact one-dimensional packing of drawers, shelves, doors and pull-outs
//! inside a bounded opening.
//!
//! The two halves are independent leaves: [`standards::StandardsResolver`]
//! is a lookup/cache over stored templates, and [`layout::layout_opening`]
//! is a pure calculation over scalar inputs. [`plan_opening`] composes
//! them the way callers normally do.
//!
//! # Example
//!
//! ```rust
//! use casework::layout::{DrawerFront, LayoutConfig, LayoutDirection, Opening};
//! use casework::standards::{Cabinet, OwnershipSnapshot, StandardsCatalog, StandardsResolver};
//! use casework::plan_opening;
//!
//! let catalog = StandardsCatalog::new();
//! let mut snapshot = OwnershipSnapshot::new();
//! snapshot.add_cabinet(Cabinet {
//!     id: 1,
//!     template_id: None,
//!     room_id: None,
//!     section_id: None,
//!     project_id: None,
//! });
//!
//! let mut opening = Opening::new(20.0, 18.0, LayoutDirection::Vertical);
//! for (i, h) in [4.0, 6.0, 4.0].into_iter().enumerate() {
//!     opening.drawers.push(DrawerFront {
//!         front_height: h,
//!         width: 18.0,
//!         sort_order: i as i32,
//!         placement: None,
//!     });
//! }
//!
//! let mut resolver = StandardsResolver::new(&catalog, &snapshot);
//! let layout = plan_opening(&mut resolver, Some(1), &opening, &LayoutConfig::default()).unwrap();
//! assert!(layout.valid);
//! assert_eq!(layout.consumed, 14.5);
//! ```

pub mod job;
pub mod layout;
pub mod report;
pub mod standards;

pub use job::{Job, JobError};
pub use layout::{
    can_fit, format_inches, layout_opening, LayoutConfig, LayoutError, Opening, OpeningLayout,
};
pub use standards::{ResolveError, StandardsCatalog, StandardsResolver};

use layout::LayoutDirection;
use standards::{CabinetId, EntityRef, TemplateSource};
use thiserror::Error;

/// Errors that can occur in the resolve-then-layout pipeline
#[derive(Debug, Error)]
pub enum EngineError {
    /// Error during standards resolution
    #[error("resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// Error during opening layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Resolve a cabinet's effective standards and lay out one of its openings.
///
/// The resolved template's `door_gap` becomes the inter-component gap, with
/// the opening's own override still taking precedence; edge reveals come
/// from the layout config. Resolution never fails, so the only errors are
/// layout errors (an unsupported grid direction).
pub fn plan_opening<S: TemplateSource>(
    resolver: &mut StandardsResolver<'_, S>,
    cabinet: Option<CabinetId>,
    opening: &Opening,
    config: &LayoutConfig,
) -> Result<OpeningLayout, EngineError> {
    let gap = resolver.door_gap(EntityRef::Cabinet(cabinet));
    let effective = config.clone().with_component_gap(gap);
    Ok(layout_opening(opening, &effective)?)
}

/// Whether a direction is currently supported by the layout engine
pub fn direction_supported(direction: LayoutDirection) -> bool {
    !matches!(direction, LayoutDirection::Grid)
}
