//! Ownership records for resolvable entities
//!
//! Cabinets, rooms and projects are plain records with nullable foreign
//! keys; the resolver walks them read-only. A cabinet may reach its room
//! directly or through the Section -> CabinetRun -> RoomLocation chain.

use std::collections::HashMap;

use serde::Deserialize;

use super::template::TemplateId;

pub type ProjectId = u32;
pub type RoomId = u32;
pub type CabinetId = u32;
pub type SectionId = u32;
pub type RunId = u32;
pub type LocationId = u32;

/// Top-level entity; may declare its own template
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(default, rename = "template")]
    pub template_id: Option<TemplateId>,
}

/// A room within a project
#[derive(Debug, Clone, Deserialize)]
pub struct Room {
    pub id: RoomId,
    #[serde(default, rename = "project")]
    pub project_id: Option<ProjectId>,
    #[serde(default, rename = "template")]
    pub template_id: Option<TemplateId>,
}

/// A placement of cabinetry within a room
#[derive(Debug, Clone, Deserialize)]
pub struct RoomLocation {
    pub id: LocationId,
    #[serde(default, rename = "room")]
    pub room_id: Option<RoomId>,
}

/// A run of cabinets along a room location
#[derive(Debug, Clone, Deserialize)]
pub struct CabinetRun {
    pub id: RunId,
    #[serde(default, rename = "location")]
    pub location_id: Option<LocationId>,
}

/// A section of a cabinet run
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub id: SectionId,
    #[serde(default, rename = "run")]
    pub run_id: Option<RunId>,
}

/// A cabinet; may belong to a room directly, via its section chain, and/or
/// to a project
#[derive(Debug, Clone, Deserialize)]
pub struct Cabinet {
    pub id: CabinetId,
    #[serde(default, rename = "template")]
    pub template_id: Option<TemplateId>,
    #[serde(default, rename = "room")]
    pub room_id: Option<RoomId>,
    #[serde(default, rename = "section")]
    pub section_id: Option<SectionId>,
    #[serde(default, rename = "project")]
    pub project_id: Option<ProjectId>,
}

/// The kind of a resolvable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Cabinet,
    Room,
    Project,
}

impl EntityKind {
    /// Name used in persistence-layer kind strings and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Cabinet => "cabinet",
            EntityKind::Room => "room",
            EntityKind::Project => "project",
        }
    }
}

/// Reference to a resolvable entity.
///
/// A `None` id means an unsaved record; all unsaved records of one kind
/// share a cache slot, matching the persistence layer's "new" key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Cabinet(Option<CabinetId>),
    Room(Option<RoomId>),
    Project(Option<ProjectId>),
}

impl EntityRef {
    /// The entity's kind tag
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Cabinet(_) => EntityKind::Cabinet,
            EntityRef::Room(_) => EntityKind::Room,
            EntityRef::Project(_) => EntityKind::Project,
        }
    }

    /// Cache key: kind plus id, or the shared "new" slot
    pub(crate) fn cache_key(&self) -> (EntityKind, Option<u32>) {
        match *self {
            EntityRef::Cabinet(id) => (EntityKind::Cabinet, id),
            EntityRef::Room(id) => (EntityKind::Room, id),
            EntityRef::Project(id) => (EntityKind::Project, id),
        }
    }
}

/// Read-only snapshot of the ownership graph.
///
/// All lookups are nullable-safe: a dangling or absent foreign key simply
/// ends that branch of a resolution walk.
#[derive(Debug, Default)]
pub struct OwnershipSnapshot {
    projects: HashMap<ProjectId, Project>,
    rooms: HashMap<RoomId, Room>,
    locations: HashMap<LocationId, RoomLocation>,
    runs: HashMap<RunId, CabinetRun>,
    sections: HashMap<SectionId, Section>,
    cabinets: HashMap<CabinetId, Cabinet>,
}

impl OwnershipSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_project(&mut self, project: Project) {
        self.projects.insert(project.id, project);
    }

    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.id, room);
    }

    pub fn add_location(&mut self, location: RoomLocation) {
        self.locations.insert(location.id, location);
    }

    pub fn add_run(&mut self, run: CabinetRun) {
        self.runs.insert(run.id, run);
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.insert(section.id, section);
    }

    pub fn add_cabinet(&mut self, cabinet: Cabinet) {
        self.cabinets.insert(cabinet.id, cabinet);
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn cabinet(&self, id: CabinetId) -> Option<&Cabinet> {
        self.cabinets.get(&id)
    }

    /// All cabinet ids in the snapshot, sorted for stable iteration
    pub fn cabinet_ids(&self) -> Vec<CabinetId> {
        let mut ids: Vec<CabinetId> = self.cabinets.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The room owning a cabinet: direct reference first, then the
    /// Section -> CabinetRun -> RoomLocation chain.
    pub fn room_of_cabinet(&self, cabinet: &Cabinet) -> Option<&Room> {
        if let Some(room) = cabinet.room_id.and_then(|id| self.rooms.get(&id)) {
            return Some(room);
        }
        let section = self.sections.get(&cabinet.section_id?)?;
        let run = self.runs.get(&section.run_id?)?;
        let location = self.locations.get(&run.location_id?)?;
        self.rooms.get(&location.room_id?)
    }

    /// The project owning a cabinet: direct reference first, then through
    /// its room.
    pub fn project_of_cabinet(&self, cabinet: &Cabinet) -> Option<&Project> {
        if let Some(project) = cabinet.project_id.and_then(|id| self.projects.get(&id)) {
            return Some(project);
        }
        let room = self.room_of_cabinet(cabinet)?;
        self.projects.get(&room.project_id?)
    }

    /// The project owning a room
    pub fn project_of_room(&self, room: &Room) -> Option<&Project> {
        self.projects.get(&room.project_id?)
    }
}
