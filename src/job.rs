//! Job file loading for the CLI
//!
//! A job file is a TOML document describing stored templates, the ownership
//! rows of a project, and the openings to lay out per cabinet. Loading a job
//! yields a [`StandardsCatalog`], an [`OwnershipSnapshot`], and the opening
//! work list.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::Opening;
use crate::standards::{
    Cabinet, CabinetId, CabinetRun, CatalogError, ConstructionTemplate, OwnershipSnapshot,
    Project, Room, RoomLocation, Section, StandardsCatalog, TemplateId, TemplateParams,
};

/// Errors that can occur when loading or building a job
#[derive(Debug, Error)]
pub enum JobError {
    #[error("failed to read job file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse job TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// TOML shape of a stored template
#[derive(Debug, Deserialize)]
struct JobTemplate {
    id: TemplateId,
    name: String,
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default = "default_true")]
    active: bool,
    #[serde(default, rename = "default")]
    is_default: bool,
    #[serde(default)]
    params: TemplateParams,
}

fn default_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

/// A cabinet row plus the openings to lay out inside it
#[derive(Debug, Deserialize)]
struct JobCabinet {
    #[serde(flatten)]
    cabinet: Cabinet,
    #[serde(default)]
    openings: Vec<Opening>,
}

/// A parsed job file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Job {
    templates: Vec<JobTemplate>,
    project: Option<Project>,
    rooms: Vec<Room>,
    locations: Vec<RoomLocation>,
    runs: Vec<CabinetRun>,
    sections: Vec<Section>,
    cabinets: Vec<JobCabinet>,
}

/// A job built into engine inputs
#[derive(Debug)]
pub struct JobData {
    pub catalog: StandardsCatalog,
    pub snapshot: OwnershipSnapshot,
    /// Openings per cabinet, in job-file order
    pub cabinets: Vec<(CabinetId, Vec<Opening>)>,
}

impl Job {
    /// Load a job from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, JobError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a job from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, JobError> {
        Ok(toml::from_str(content)?)
    }

    /// Build catalog, snapshot and work list from the parsed rows
    pub fn build(self) -> Result<JobData, JobError> {
        let mut catalog = StandardsCatalog::new();
        for t in self.templates {
            let mut template = ConstructionTemplate::new(t.id, t.name);
            template.version = t.version;
            template.is_active = t.active;
            template.is_default = t.is_default;
            template.params = t.params;
            catalog.insert(template)?;
        }

        let mut snapshot = OwnershipSnapshot::new();
        if let Some(project) = self.project {
            snapshot.add_project(project);
        }
        for room in self.rooms {
            snapshot.add_room(room);
        }
        for location in self.locations {
            snapshot.add_location(location);
        }
        for run in self.runs {
            snapshot.add_run(run);
        }
        for section in self.sections {
            snapshot.add_section(section);
        }

        let mut cabinets = Vec::with_capacity(self.cabinets.len());
        for jc in self.cabinets {
            let id = jc.cabinet.id;
            snapshot.add_cabinet(jc.cabinet);
            cabinets.push((id, jc.openings));
        }

        Ok(JobData {
            catalog,
            snapshot,
            cabinets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standards::TemplateSource;

    const SAMPLE: &str = r#"
        [[templates]]
        id = 1
        name = "shaker"
        version = 3
        default = true

        [templates.params]
        base_cabinet_height = 35.0

        [project]
        id = 1
        template = 1

        [[rooms]]
        id = 10
        project = 1

        [[cabinets]]
        id = 100
        room = 10

        [[cabinets.openings]]
        height = 20.0
        width = 18.0

        [[cabinets.openings.drawers]]
        front_height = 6.0
        sort_order = 0
    "#;

    #[test]
    fn test_parse_and_build() {
        let job = Job::from_str(SAMPLE).expect("should parse");
        let data = job.build().expect("should build");

        assert_eq!(data.catalog.len(), 1);
        assert_eq!(
            data.catalog.default_template().map(|t| t.version),
            Some(3)
        );
        assert!(data.snapshot.cabinet(100).is_some());
        assert_eq!(data.cabinets.len(), 1);
        assert_eq!(data.cabinets[0].0, 100);
        assert_eq!(data.cabinets[0].1[0].drawers.len(), 1);
    }

    #[test]
    fn test_duplicate_template_surfaces_catalog_error() {
        let source = r#"
            [[templates]]
            id = 1
            name = "a"

            [[templates]]
            id = 1
            name = "b"
        "#;
        let err = Job::from_str(source).unwrap().build().unwrap_err();
        assert!(matches!(
            err,
            JobError::Catalog(CatalogError::DuplicateTemplate { id: 1 })
        ));
    }

    #[test]
    fn test_empty_job_builds() {
        let data = Job::from_str("").unwrap().build().unwrap();
        assert!(data.catalog.is_empty());
        assert!(data.cabinets.is_empty());
    }
}
