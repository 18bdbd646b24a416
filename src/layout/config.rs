//! Configuration for the layout engine

use crate::standards::shop;

use super::types::Opening;

/// Shop-standard gaps and floors used by opening layout
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Reveal above the topmost component (vertical layout only)
    pub top_reveal: f64,

    /// Reveal below the bottommost component (vertical layout only)
    pub bottom_reveal: f64,

    /// Gap between consecutive components, never charged after the last
    pub component_gap: f64,

    /// Reveal at each side of a door face
    pub door_side_reveal: f64,

    /// Vertical clearance a shelf consumes, regardless of its thickness
    pub min_shelf_clearance: f64,

    /// Absolute minimum drawer front height
    pub min_drawer_front: f64,

    /// Print a placement trace to stderr during layout
    pub trace: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            top_reveal: shop::TOP_REVEAL,
            bottom_reveal: shop::BOTTOM_REVEAL,
            component_gap: shop::COMPONENT_GAP,
            door_side_reveal: shop::DOOR_SIDE_REVEAL,
            min_shelf_clearance: shop::MIN_SHELF_CLEARANCE,
            min_drawer_front: shop::MIN_DRAWER_FRONT,
            trace: false,
        }
    }
}

impl LayoutConfig {
    /// Create a configuration with shop defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top and bottom reveals
    pub fn with_reveals(mut self, top: f64, bottom: f64) -> Self {
        self.top_reveal = top;
        self.bottom_reveal = bottom;
        self
    }

    /// Set the inter-component gap
    pub fn with_component_gap(mut self, gap: f64) -> Self {
        self.component_gap = gap;
        self
    }

    /// Set the minimum drawer front height
    pub fn with_min_drawer_front(mut self, height: f64) -> Self {
        self.min_drawer_front = height;
        self
    }

    /// Enable or disable the placement trace
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// The gaps in effect for an opening: configured values overridden by
    /// the opening's own, where set
    pub fn reveals_for(&self, opening: &Opening) -> RevealSet {
        RevealSet {
            top_reveal: opening.top_reveal.unwrap_or(self.top_reveal),
            bottom_reveal: opening.bottom_reveal.unwrap_or(self.bottom_reveal),
            component_gap: opening.component_gap.unwrap_or(self.component_gap),
        }
    }
}

/// The edge reveals and inter-component gap applied to one layout run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSet {
    pub top_reveal: f64,
    pub bottom_reveal: f64,
    pub component_gap: f64,
}
