//! Construction template model and shop-default constants

use serde::Deserialize;

/// Identifier of a stored template
pub type TemplateId = u32;

/// Hard-coded shop standards, used when no stored template (or template
/// field) applies. All dimensions in inches; `*_RATIO` values are unitless.
pub mod shop {
    pub const BASE_CABINET_HEIGHT: f64 = 34.75;
    pub const WALL_30: f64 = 30.0;
    pub const WALL_36: f64 = 36.0;
    pub const WALL_42: f64 = 42.0;
    pub const TALL_84: f64 = 84.0;
    pub const TALL_96: f64 = 96.0;
    pub const TOE_KICK_HEIGHT: f64 = 4.5;
    pub const TOE_KICK_RECESS: f64 = 3.0;
    pub const STRETCHER_DEPTH: f64 = 3.0;
    pub const STRETCHER_THICKNESS: f64 = 0.75;
    pub const STRETCHER_MIN_DEPTH: f64 = 2.5;
    pub const STRETCHER_MAX_DEPTH: f64 = 4.0;
    pub const STILE_WIDTH: f64 = 1.5;
    pub const RAIL_WIDTH: f64 = 1.5;
    pub const DOOR_GAP: f64 = 0.125;
    pub const FF_THICKNESS: f64 = 0.75;
    pub const BOX_THICKNESS: f64 = 0.75;
    pub const BACK_PANEL_THICKNESS: f64 = 0.75;
    pub const SIDE_PANEL_THICKNESS: f64 = 0.75;
    pub const SINK_SIDE_EXTENSION: f64 = 0.75;
    pub const FINISHED_END_GAP: f64 = 0.25;
    pub const FINISHED_END_WALL_EXTENSION: f64 = 0.5;
    pub const BACK_WALL_GAP: f64 = 0.25;
    pub const DRAWER_BANK_RATIO: f64 = 0.40;
    pub const DOOR_SECTION_RATIO: f64 = 0.60;
    pub const EQUAL_SECTION_RATIO: f64 = 0.50;
    pub const COUNTERTOP_THICKNESS: f64 = 1.25;
    pub const FINISHED_COUNTER_HEIGHT: f64 = 36.0;

    // Opening layout gaps
    pub const TOP_REVEAL: f64 = 0.125;
    pub const BOTTOM_REVEAL: f64 = 0.125;
    pub const COMPONENT_GAP: f64 = 0.125;
    pub const DOOR_SIDE_REVEAL: f64 = 0.0625;
    pub const MIN_SHELF_CLEARANCE: f64 = 5.5;
    pub const MIN_DRAWER_FRONT: f64 = 4.0;
}

/// The numeric construction parameters carried by a template.
///
/// Every field is optional: a stored template may leave parameters
/// unset, in which case the resolver's accessors fall back to the
/// matching [`shop`] constant field by field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TemplateParams {
    pub base_cabinet_height: Option<f64>,
    pub wall_30: Option<f64>,
    pub wall_36: Option<f64>,
    pub wall_42: Option<f64>,
    pub tall_84: Option<f64>,
    pub tall_96: Option<f64>,
    pub toe_kick_height: Option<f64>,
    pub toe_kick_recess: Option<f64>,
    pub stretcher_depth: Option<f64>,
    pub stretcher_thickness: Option<f64>,
    pub stretcher_min_depth: Option<f64>,
    pub stretcher_max_depth: Option<f64>,
    pub stile_width: Option<f64>,
    pub rail_width: Option<f64>,
    pub door_gap: Option<f64>,
    pub ff_thickness: Option<f64>,
    pub box_thickness: Option<f64>,
    pub back_panel_thickness: Option<f64>,
    pub side_panel_thickness: Option<f64>,
    pub sink_side_extension: Option<f64>,
    pub finished_end_gap: Option<f64>,
    pub finished_end_wall_extension: Option<f64>,
    pub back_wall_gap: Option<f64>,
    pub drawer_bank_ratio: Option<f64>,
    pub door_section_ratio: Option<f64>,
    pub equal_section_ratio: Option<f64>,
    pub countertop_thickness: Option<f64>,
    pub finished_counter_height: Option<f64>,
}

impl TemplateParams {
    /// Parameters fully populated from the shop constant table
    pub fn shop_defaults() -> Self {
        Self {
            base_cabinet_height: Some(shop::BASE_CABINET_HEIGHT),
            wall_30: Some(shop::WALL_30),
            wall_36: Some(shop::WALL_36),
            wall_42: Some(shop::WALL_42),
            tall_84: Some(shop::TALL_84),
            tall_96: Some(shop::TALL_96),
            toe_kick_height: Some(shop::TOE_KICK_HEIGHT),
            toe_kick_recess: Some(shop::TOE_KICK_RECESS),
            stretcher_depth: Some(shop::STRETCHER_DEPTH),
            stretcher_thickness: Some(shop::STRETCHER_THICKNESS),
            stretcher_min_depth: Some(shop::STRETCHER_MIN_DEPTH),
            stretcher_max_depth: Some(shop::STRETCHER_MAX_DEPTH),
            stile_width: Some(shop::STILE_WIDTH),
            rail_width: Some(shop::RAIL_WIDTH),
            door_gap: Some(shop::DOOR_GAP),
            ff_thickness: Some(shop::FF_THICKNESS),
            box_thickness: Some(shop::BOX_THICKNESS),
            back_panel_thickness: Some(shop::BACK_PANEL_THICKNESS),
            side_panel_thickness: Some(shop::SIDE_PANEL_THICKNESS),
            sink_side_extension: Some(shop::SINK_SIDE_EXTENSION),
            finished_end_gap: Some(shop::FINISHED_END_GAP),
            finished_end_wall_extension: Some(shop::FINISHED_END_WALL_EXTENSION),
            back_wall_gap: Some(shop::BACK_WALL_GAP),
            drawer_bank_ratio: Some(shop::DRAWER_BANK_RATIO),
            door_section_ratio: Some(shop::DOOR_SECTION_RATIO),
            equal_section_ratio: Some(shop::EQUAL_SECTION_RATIO),
            countertop_thickness: Some(shop::COUNTERTOP_THICKNESS),
            finished_counter_height: Some(shop::FINISHED_COUNTER_HEIGHT),
        }
    }
}

/// A named, versioned set of construction parameters.
///
/// `id` is `None` for the synthesized in-memory fallback; stored templates
/// always carry an id. Parameter sanity is not validated here; a stored
/// template with negative values passes through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructionTemplate {
    pub id: Option<TemplateId>,
    pub name: String,
    pub version: u32,
    pub is_active: bool,
    pub is_default: bool,
    pub params: TemplateParams,
}

impl ConstructionTemplate {
    /// Create a stored template with the given id and name
    pub fn new(id: TemplateId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            version: 1,
            is_active: true,
            is_default: false,
            params: TemplateParams::default(),
        }
    }

    /// The non-persisted fallback instance: every parameter populated from
    /// the shop constant table.
    pub fn shop_fallback() -> Self {
        Self {
            id: None,
            name: "shop defaults".to_string(),
            version: 1,
            is_active: true,
            is_default: false,
            params: TemplateParams::shop_defaults(),
        }
    }

    /// Whether this template was synthesized rather than stored
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
