//! Catalog of stored construction templates

use std::collections::HashMap;

use thiserror::Error;

use super::template::{ConstructionTemplate, TemplateId};

/// Errors that can occur when populating the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A template with this id is already registered
    #[error("duplicate template id: {id}")]
    DuplicateTemplate { id: TemplateId },

    /// A second template claims the global default flag
    #[error("template {offered} claims the default flag already held by {existing}")]
    DuplicateDefault {
        existing: TemplateId,
        offered: TemplateId,
    },

    /// A template destined for the catalog must carry an id
    #[error("cannot register a non-persisted template: {name}")]
    NotPersisted { name: String },
}

/// Read interface the resolver uses to reach stored templates.
///
/// Lookups return the record regardless of its active flag; deciding whether
/// an inactive template counts as a miss is the resolver's concern.
pub trait TemplateSource {
    /// Look up a template by id
    fn template(&self, id: TemplateId) -> Option<&ConstructionTemplate>;

    /// The single globally-flagged default template, if any
    fn default_template(&self) -> Option<&ConstructionTemplate>;
}

/// In-memory store of construction templates.
///
/// The catalog stands in for the persistence layer: it enforces the
/// single-default invariant at insert time so resolution can assume at most
/// one default exists.
#[derive(Debug, Default)]
pub struct StandardsCatalog {
    templates: HashMap<TemplateId, ConstructionTemplate>,
    default_id: Option<TemplateId>,
}

impl StandardsCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, rejecting duplicate ids and a second default
    pub fn insert(&mut self, template: ConstructionTemplate) -> Result<(), CatalogError> {
        let id = template.id.ok_or_else(|| CatalogError::NotPersisted {
            name: template.name.clone(),
        })?;
        if self.templates.contains_key(&id) {
            return Err(CatalogError::DuplicateTemplate { id });
        }
        if template.is_default {
            if let Some(existing) = self.default_id {
                return Err(CatalogError::DuplicateDefault {
                    existing,
                    offered: id,
                });
            }
            self.default_id = Some(id);
        }
        self.templates.insert(id, template);
        Ok(())
    }

    /// Check if a template id is registered
    pub fn contains(&self, id: TemplateId) -> bool {
        self.templates.contains_key(&id)
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog holds no templates
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateSource for StandardsCatalog {
    fn template(&self, id: TemplateId) -> Option<&ConstructionTemplate> {
        self.templates.get(&id)
    }

    fn default_template(&self) -> Option<&ConstructionTemplate> {
        self.default_id.and_then(|id| self.templates.get(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(id: TemplateId) -> ConstructionTemplate {
        ConstructionTemplate::new(id, format!("t{}", id))
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut catalog = StandardsCatalog::new();
        catalog.insert(template(1)).unwrap();
        assert!(catalog.contains(1));
        assert_eq!(catalog.template(1).unwrap().name, "t1");
        assert!(catalog.template(2).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = StandardsCatalog::new();
        catalog.insert(template(1)).unwrap();
        let err = catalog.insert(template(1)).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTemplate { id: 1 }));
    }

    #[test]
    fn test_single_default_enforced() {
        let mut catalog = StandardsCatalog::new();
        let mut first = template(1);
        first.is_default = true;
        let mut second = template(2);
        second.is_default = true;

        catalog.insert(first).unwrap();
        let err = catalog.insert(second).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateDefault {
                existing: 1,
                offered: 2
            }
        ));
        assert_eq!(catalog.default_template().unwrap().id, Some(1));
    }

    #[test]
    fn test_default_template_absent() {
        let mut catalog = StandardsCatalog::new();
        catalog.insert(template(1)).unwrap();
        assert!(catalog.default_template().is_none());
    }

    #[test]
    fn test_fallback_instance_not_registrable() {
        let mut catalog = StandardsCatalog::new();
        let err = catalog
            .insert(ConstructionTemplate::shop_fallback())
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotPersisted { .. }));
    }
}
