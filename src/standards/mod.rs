//! Construction-standards resolution
//!
//! This module determines the effective set of construction parameters for a
//! cabinetry entity. Templates live in a catalog; cabinets, rooms and
//! projects may each point at one. Resolution walks the ownership hierarchy
//! (cabinet -> room -> project), then the global default, then the
//! hard-coded shop table, and memoizes the answer per entity for the life of
//! a [`StandardsResolver`] session.
//!
//! # Example
//!
//! ```
//! use casework::standards::{
//!     Cabinet, EntityRef, OwnershipSnapshot, StandardsCatalog, StandardsResolver,
//! };
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
//! let mut resolver = StandardsResolver::new(&catalog, &snapshot);
//! let effective = resolver.resolve(EntityRef::Cabinet(Some(1)));
//! // Nothing stored anywhere: the shop fallback applies.
//! assert_eq!(effective.params.base_cabinet_height, Some(34.75));
//! ```

mod catalog;
mod entities;
mod resolver;
mod template;

pub use catalog::{CatalogError, StandardsCatalog, TemplateSource};
pub use entities::{
    Cabinet, CabinetId, CabinetRun, EntityKind, EntityRef, LocationId, OwnershipSnapshot, Project,
    ProjectId, Room, RoomId, RoomLocation, RunId, Section, SectionId,
};
pub use resolver::{ResolveError, StandardsResolver};
pub use template::{shop, ConstructionTemplate, TemplateId, TemplateParams};
