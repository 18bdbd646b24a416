//! Effective-standards resolution
//!
//! Walks the ownership hierarchy of an entity to find the nearest active
//! construction template, falling back to the global default and finally to
//! the hard-coded shop table. Results are memoized per entity for the life
//! of the resolver; one resolver per resolution session, no sharing across
//! threads.

use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use super::catalog::TemplateSource;
use super::entities::{EntityKind, EntityRef, OwnershipSnapshot};
use super::template::{shop, ConstructionTemplate, TemplateId};

/// Resolution contract violations.
///
/// Resolution itself is total: every walk terminates in the shop fallback.
/// The only failure is an integration bug: a persistence layer handing over
/// an entity kind this engine does not model.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Entity kind string not recognized
    #[error("unsupported entity kind: {kind}")]
    UnsupportedEntityKind { kind: String },
}

impl ResolveError {
    /// Create an unsupported-kind error
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedEntityKind { kind: kind.into() }
    }
}

/// Session-scoped resolver over a template source and an ownership snapshot.
///
/// The cache is keyed by `(entity kind, id-or-new)` and never invalidated
/// automatically; callers working over a long-lived session must
/// [`clear_cache`](Self::clear_cache) after mutating the underlying records.
#[derive(Debug)]
pub struct StandardsResolver<'a, S: TemplateSource> {
    source: &'a S,
    snapshot: &'a OwnershipSnapshot,
    cache: HashMap<(EntityKind, Option<u32>), Rc<ConstructionTemplate>>,
}

impl<'a, S: TemplateSource> StandardsResolver<'a, S> {
    /// Create a resolver for one resolution session
    pub fn new(source: &'a S, snapshot: &'a OwnershipSnapshot) -> Self {
        Self {
            source,
            snapshot,
            cache: HashMap::new(),
        }
    }

    /// Resolve the effective template for an entity. Never fails: the worst
    /// case returns the shop fallback.
    ///
    /// Precedence, first *active* match wins:
    /// 1. the entity's own template,
    /// 2. for cabinets: the owning room's, then the owning project's,
    /// 3. for rooms: the owning project's,
    /// 4. the global default,
    /// 5. the shop fallback.
    ///
    /// A template that exists but is inactive is a miss; the walk continues.
    pub fn resolve(&mut self, entity: EntityRef) -> Rc<ConstructionTemplate> {
        let key = entity.cache_key();
        if let Some(hit) = self.cache.get(&key) {
            return Rc::clone(hit);
        }
        let resolved = Rc::new(self.walk(entity));
        self.cache.insert(key, Rc::clone(&resolved));
        resolved
    }

    /// Resolve from a persistence-layer kind string. The only error is an
    /// unrecognized kind; a recognized kind resolves like [`resolve`](Self::resolve).
    pub fn resolve_kind(
        &mut self,
        kind: &str,
        id: Option<u32>,
    ) -> Result<Rc<ConstructionTemplate>, ResolveError> {
        let entity = match kind {
            "cabinet" => EntityRef::Cabinet(id),
            "room" => EntityRef::Room(id),
            "project" => EntityRef::Project(id),
            other => return Err(ResolveError::unsupported(other)),
        };
        Ok(self.resolve(entity))
    }

    /// Drop all memoized entries
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of memoized entries
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    fn walk(&self, entity: EntityRef) -> ConstructionTemplate {
        match entity {
            EntityRef::Cabinet(id) => {
                if let Some(cabinet) = id.and_then(|i| self.snapshot.cabinet(i)) {
                    if let Some(t) = self.active(cabinet.template_id) {
                        return t.clone();
                    }
                    if let Some(room) = self.snapshot.room_of_cabinet(cabinet) {
                        if let Some(t) = self.active(room.template_id) {
                            return t.clone();
                        }
                    }
                    if let Some(project) = self.snapshot.project_of_cabinet(cabinet) {
                        if let Some(t) = self.active(project.template_id) {
                            return t.clone();
                        }
                    }
                }
            }
            EntityRef::Room(id) => {
                if let Some(room) = id.and_then(|i| self.snapshot.room(i)) {
                    if let Some(t) = self.active(room.template_id) {
                        return t.clone();
                    }
                    if let Some(project) = self.snapshot.project_of_room(room) {
                        if let Some(t) = self.active(project.template_id) {
                            return t.clone();
                        }
                    }
                }
            }
            EntityRef::Project(id) => {
                if let Some(project) = id.and_then(|i| self.snapshot.project(i)) {
                    if let Some(t) = self.active(project.template_id) {
                        return t.clone();
                    }
                }
            }
        }

        if let Some(t) = self.source.default_template().filter(|t| t.is_active) {
            return t.clone();
        }
        ConstructionTemplate::shop_fallback()
    }

    fn active(&self, id: Option<TemplateId>) -> Option<&ConstructionTemplate> {
        id.and_then(|i| self.source.template(i))
            .filter(|t| t.is_active)
    }
}

// Effective-parameter accessors. Each resolves the entity and projects one
// field, with its own literal fallback: a resolved but sparsely populated
// template falls through to the shop constant rather than failing.
impl<'a, S: TemplateSource> StandardsResolver<'a, S> {
    /// Effective base cabinet height, in inches
    pub fn base_cabinet_height(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .base_cabinet_height
            .unwrap_or(shop::BASE_CABINET_HEIGHT)
    }

    /// Effective 30" wall cabinet height
    pub fn wall_30(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity).params.wall_30.unwrap_or(shop::WALL_30)
    }

    pub fn wall_36(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity).params.wall_36.unwrap_or(shop::WALL_36)
    }

    pub fn wall_42(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity).params.wall_42.unwrap_or(shop::WALL_42)
    }

    pub fn tall_84(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity).params.tall_84.unwrap_or(shop::TALL_84)
    }

    pub fn tall_96(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity).params.tall_96.unwrap_or(shop::TALL_96)
    }

    pub fn toe_kick_height(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .toe_kick_height
            .unwrap_or(shop::TOE_KICK_HEIGHT)
    }

    pub fn toe_kick_recess(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .toe_kick_recess
            .unwrap_or(shop::TOE_KICK_RECESS)
    }

    pub fn stretcher_depth(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .stretcher_depth
            .unwrap_or(shop::STRETCHER_DEPTH)
    }

    pub fn stretcher_thickness(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .stretcher_thickness
            .unwrap_or(shop::STRETCHER_THICKNESS)
    }

    pub fn stretcher_min_depth(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .stretcher_min_depth
            .unwrap_or(shop::STRETCHER_MIN_DEPTH)
    }

    pub fn stretcher_max_depth(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .stretcher_max_depth
            .unwrap_or(shop::STRETCHER_MAX_DEPTH)
    }

    pub fn stile_width(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .stile_width
            .unwrap_or(shop::STILE_WIDTH)
    }

    pub fn rail_width(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .rail_width
            .unwrap_or(shop::RAIL_WIDTH)
    }

    /// Effective gap between door faces; also the inter-component gap fed to
    /// opening layout
    pub fn door_gap(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .door_gap
            .unwrap_or(shop::DOOR_GAP)
    }

    pub fn ff_thickness(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .ff_thickness
            .unwrap_or(shop::FF_THICKNESS)
    }

    pub fn box_thickness(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .box_thickness
            .unwrap_or(shop::BOX_THICKNESS)
    }

    pub fn back_panel_thickness(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .back_panel_thickness
            .unwrap_or(shop::BACK_PANEL_THICKNESS)
    }

    pub fn side_panel_thickness(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .side_panel_thickness
            .unwrap_or(shop::SIDE_PANEL_THICKNESS)
    }

    pub fn sink_side_extension(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .sink_side_extension
            .unwrap_or(shop::SINK_SIDE_EXTENSION)
    }

    pub fn finished_end_gap(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .finished_end_gap
            .unwrap_or(shop::FINISHED_END_GAP)
    }

    pub fn finished_end_wall_extension(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .finished_end_wall_extension
            .unwrap_or(shop::FINISHED_END_WALL_EXTENSION)
    }

    pub fn back_wall_gap(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .back_wall_gap
            .unwrap_or(shop::BACK_WALL_GAP)
    }

    pub fn drawer_bank_ratio(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .drawer_bank_ratio
            .unwrap_or(shop::DRAWER_BANK_RATIO)
    }

    pub fn door_section_ratio(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .door_section_ratio
            .unwrap_or(shop::DOOR_SECTION_RATIO)
    }

    pub fn equal_section_ratio(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .equal_section_ratio
            .unwrap_or(shop::EQUAL_SECTION_RATIO)
    }

    pub fn countertop_thickness(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .countertop_thickness
            .unwrap_or(shop::COUNTERTOP_THICKNESS)
    }

    pub fn finished_counter_height(&mut self, entity: EntityRef) -> f64 {
        self.resolve(entity)
            .params
            .finished_counter_height
            .unwrap_or(shop::FINISHED_COUNTER_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::standards::catalog::StandardsCatalog;
    use crate::standards::entities::{Cabinet, Project, Room};
    use crate::standards::template::TemplateParams;

    /// Template source that counts lookups, for cache-behavior assertions
    struct CountingSource {
        inner: StandardsCatalog,
        lookups: Cell<usize>,
    }

    impl CountingSource {
        fn new(inner: StandardsCatalog) -> Self {
            Self {
                inner,
                lookups: Cell::new(0),
            }
        }
    }

    impl TemplateSource for CountingSource {
        fn template(&self, id: TemplateId) -> Option<&ConstructionTemplate> {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.template(id)
        }

        fn default_template(&self) -> Option<&ConstructionTemplate> {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.default_template()
        }
    }

    fn template(id: TemplateId, active: bool) -> ConstructionTemplate {
        let mut t = ConstructionTemplate::new(id, format!("t{}", id));
        t.is_active = active;
        t
    }

    fn snapshot(
        cabinet_template: Option<TemplateId>,
        room_template: Option<TemplateId>,
        project_template: Option<TemplateId>,
    ) -> OwnershipSnapshot {
        let mut snap = OwnershipSnapshot::new();
        snap.add_project(Project {
            id: 1,
            template_id: project_template,
        });
        snap.add_room(Room {
            id: 10,
            project_id: Some(1),
            template_id: room_template,
        });
        snap.add_cabinet(Cabinet {
            id: 100,
            template_id: cabinet_template,
            room_id: Some(10),
            section_id: None,
            project_id: None,
        });
        snap
    }

    #[test]
    fn test_own_template_wins() {
        let mut catalog = StandardsCatalog::new();
        catalog.insert(template(1, true)).unwrap();
        catalog.insert(template(2, true)).unwrap();
        catalog.insert(template(3, true)).unwrap();
        let snap = snapshot(Some(1), Some(2), Some(3));

        let mut resolver = StandardsResolver::new(&catalog, &snap);
        let t = resolver.resolve(EntityRef::Cabinet(Some(100)));
        assert_eq!(t.id, Some(1));
    }

    #[test]
    fn test_inactive_own_template_falls_to_room() {
        let mut catalog = StandardsCatalog::new();
        catalog.insert(template(1, false)).unwrap();
        catalog.insert(template(2, true)).unwrap();
        let snap = snapshot(Some(1), Some(2), None);

        let mut resolver = StandardsResolver::new(&catalog, &snap);
        let t = resolver.resolve(EntityRef::Cabinet(Some(100)));
        assert_eq!(t.id, Some(2));
    }

    #[test]
    fn test_room_resolution_uses_project() {
        let mut catalog = StandardsCatalog::new();
        catalog.insert(template(3, true)).unwrap();
        let snap = snapshot(None, None, Some(3));

        let mut resolver = StandardsResolver::new(&catalog, &snap);
        let t = resolver.resolve(EntityRef::Room(Some(10)));
        assert_eq!(t.id, Some(3));
    }

    #[test]
    fn test_global_default_before_fallback() {
        let mut catalog = StandardsCatalog::new();
        let mut def = template(9, true);
        def.is_default = true;
        catalog.insert(def).unwrap();
        let snap = snapshot(None, None, None);

        let mut resolver = StandardsResolver::new(&catalog, &snap);
        let t = resolver.resolve(EntityRef::Cabinet(Some(100)));
        assert_eq!(t.id, Some(9));
    }

    #[test]
    fn test_inactive_default_is_a_miss() {
        let mut catalog = StandardsCatalog::new();
        let mut def = template(9, false);
        def.is_default = true;
        catalog.insert(def).unwrap();
        let snap = snapshot(None, None, None);

        let mut resolver = StandardsResolver::new(&catalog, &snap);
        let t = resolver.resolve(EntityRef::Cabinet(Some(100)));
        assert_eq!(t.id, None);
        assert_eq!(t.params, TemplateParams::shop_defaults());
    }

    #[test]
    fn test_unknown_entity_resolves_to_fallback() {
        let catalog = StandardsCatalog::new();
        let snap = OwnershipSnapshot::new();
        let mut resolver = StandardsResolver::new(&catalog, &snap);

        let t = resolver.resolve(EntityRef::Cabinet(Some(404)));
        assert!(!t.is_persisted());
    }

    #[test]
    fn test_memoized_second_resolve_skips_store() {
        let mut catalog = StandardsCatalog::new();
        catalog.insert(template(1, true)).unwrap();
        let source = CountingSource::new(catalog);
        let snap = snapshot(Some(1), None, None);

        let mut resolver = StandardsResolver::new(&source, &snap);
        let first = resolver.resolve(EntityRef::Cabinet(Some(100)));
        let after_first = source.lookups.get();
        let second = resolver.resolve(EntityRef::Cabinet(Some(100)));

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(source.lookups.get(), after_first);
        assert_eq!(resolver.cached_entries(), 1);
    }

    #[test]
    fn test_clear_cache_requeries() {
        let mut catalog = StandardsCatalog::new();
        catalog.insert(template(1, true)).unwrap();
        let source = CountingSource::new(catalog);
        let snap = snapshot(Some(1), None, None);

        let mut resolver = StandardsResolver::new(&source, &snap);
        let first = resolver.resolve(EntityRef::Cabinet(Some(100)));
        resolver.clear_cache();
        assert_eq!(resolver.cached_entries(), 0);
        let second = resolver.resolve(EntityRef::Cabinet(Some(100)));
        assert!(!Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_resolve_kind_rejects_unknown() {
        let catalog = StandardsCatalog::new();
        let snap = OwnershipSnapshot::new();
        let mut resolver = StandardsResolver::new(&catalog, &snap);

        assert!(resolver.resolve_kind("cabinet", Some(1)).is_ok());
        let err = resolver.resolve_kind("invoice", Some(1)).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::UnsupportedEntityKind { ref kind } if kind == "invoice"
        ));
    }

    #[test]
    fn test_accessor_double_fallback() {
        // Active template that leaves base_cabinet_height unset but sets
        // toe_kick_height: the accessor falls to the literal for the former
        // and reads the template for the latter.
        let mut catalog = StandardsCatalog::new();
        let mut t = template(1, true);
        t.params.toe_kick_height = Some(4.0);
        catalog.insert(t).unwrap();
        let snap = snapshot(Some(1), None, None);

        let mut resolver = StandardsResolver::new(&catalog, &snap);
        let entity = EntityRef::Cabinet(Some(100));
        assert_eq!(resolver.toe_kick_height(entity), 4.0);
        assert_eq!(resolver.base_cabinet_height(entity), shop::BASE_CABINET_HEIGHT);
    }

    #[test]
    fn test_unsaved_entities_share_new_slot() {
        let catalog = StandardsCatalog::new();
        let snap = OwnershipSnapshot::new();
        let mut resolver = StandardsResolver::new(&catalog, &snap);

        let a = resolver.resolve(EntityRef::Room(None));
        let b = resolver.resolve(EntityRef::Room(None));
        assert!(Rc::ptr_eq(&a, &b));
        // Distinct kinds get distinct slots
        resolver.resolve(EntityRef::Cabinet(None));
        assert_eq!(resolver.cached_entries(), 2);
    }
}
