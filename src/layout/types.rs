//! Core types for opening layout

use serde::Deserialize;

use super::error::LayoutError;

/// The kind of component occupying an opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Drawer,
    Shelf,
    Door,
    Pullout,
}

impl ComponentKind {
    /// Short label for cut sheets and trace output
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Drawer => "drawer",
            ComponentKind::Shelf => "shelf",
            ComponentKind::Door => "door",
            ComponentKind::Pullout => "pullout",
        }
    }
}

/// Direction components are packed along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    #[default]
    Vertical,
    Horizontal,
    Grid,
}

impl LayoutDirection {
    /// Short label for cut sheets and trace output
    pub fn label(&self) -> &'static str {
        match self {
            LayoutDirection::Vertical => "vertical",
            LayoutDirection::Horizontal => "horizontal",
            LayoutDirection::Grid => "grid",
        }
    }
}

/// A computed position and consumed span along the layout axis.
///
/// Position and span travel together: a component either has a complete
/// placement or none at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Offset of the component's leading edge from the opening's leading
    /// reveal/edge
    pub position: f64,
    /// The component's declared size plus its trailing gap (omitted for the
    /// last component)
    pub span: f64,
}

/// A drawer front
#[derive(Debug, Clone, Deserialize)]
pub struct DrawerFront {
    pub front_height: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(skip)]
    pub placement: Option<Placement>,
}

/// A shelf. Layout charges the fixed pin-hole clearance, never the shelf's
/// material thickness.
#[derive(Debug, Clone, Deserialize)]
pub struct Shelf {
    #[serde(default)]
    pub thickness: f64,
    #[serde(default)]
    pub depth: f64,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(skip)]
    pub placement: Option<Placement>,
}

/// A door
#[derive(Debug, Clone, Deserialize)]
pub struct Door {
    pub height: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(skip)]
    pub placement: Option<Placement>,
}

/// A pull-out
#[derive(Debug, Clone, Deserialize)]
pub struct Pullout {
    pub height: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(skip)]
    pub placement: Option<Placement>,
}

/// Reference to one component within an opening: its kind plus its index in
/// that kind's collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRef {
    pub kind: ComponentKind,
    pub index: usize,
}

impl LineRef {
    pub fn new(kind: ComponentKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// A bounded rectangular opening holding typed components.
///
/// `top_reveal`, `bottom_reveal` and `component_gap` override the configured
/// shop gaps for this opening only. Computed placements are outputs, not
/// inputs: mutating the component collections invalidates them, and callers
/// must re-run layout.
#[derive(Debug, Clone, Deserialize)]
pub struct Opening {
    pub height: f64,
    pub width: f64,
    #[serde(default)]
    pub direction: LayoutDirection,
    #[serde(default)]
    pub top_reveal: Option<f64>,
    #[serde(default)]
    pub bottom_reveal: Option<f64>,
    #[serde(default)]
    pub component_gap: Option<f64>,
    #[serde(default)]
    pub drawers: Vec<DrawerFront>,
    #[serde(default)]
    pub shelves: Vec<Shelf>,
    #[serde(default)]
    pub doors: Vec<Door>,
    #[serde(default)]
    pub pullouts: Vec<Pullout>,
}

impl Opening {
    /// Create an empty opening
    pub fn new(height: f64, width: f64, direction: LayoutDirection) -> Self {
        Self {
            height,
            width,
            direction,
            top_reveal: None,
            bottom_reveal: None,
            component_gap: None,
            drawers: Vec::new(),
            shelves: Vec::new(),
            doors: Vec::new(),
            pullouts: Vec::new(),
        }
    }

    /// Total number of components across all four collections
    pub fn component_count(&self) -> usize {
        self.drawers.len() + self.shelves.len() + self.doors.len() + self.pullouts.len()
    }

    /// Whether the opening holds no components
    pub fn is_empty(&self) -> bool {
        self.component_count() == 0
    }

    /// Drop all computed placements
    pub fn clear_placements(&mut self) {
        for d in &mut self.drawers {
            d.placement = None;
        }
        for s in &mut self.shelves {
            s.placement = None;
        }
        for d in &mut self.doors {
            d.placement = None;
        }
        for p in &mut self.pullouts {
            p.placement = None;
        }
    }

    /// Write a layout's placements back onto the components.
    ///
    /// All references are validated before any write, so a bad layout
    /// leaves the opening untouched; each component then receives its
    /// position and span as one value.
    pub fn apply(&mut self, layout: &OpeningLayout) -> Result<(), LayoutError> {
        for (re, _) in &layout.placements {
            if re.index >= self.collection_len(re.kind) {
                return Err(LayoutError::unknown_component(re.kind, re.index));
            }
        }
        for (re, placement) in &layout.placements {
            match re.kind {
                ComponentKind::Drawer => self.drawers[re.index].placement = Some(*placement),
                ComponentKind::Shelf => self.shelves[re.index].placement = Some(*placement),
                ComponentKind::Door => self.doors[re.index].placement = Some(*placement),
                ComponentKind::Pullout => self.pullouts[re.index].placement = Some(*placement),
            }
        }
        Ok(())
    }

    fn collection_len(&self, kind: ComponentKind) -> usize {
        match kind {
            ComponentKind::Drawer => self.drawers.len(),
            ComponentKind::Shelf => self.shelves.len(),
            ComponentKind::Door => self.doors.len(),
            ComponentKind::Pullout => self.pullouts.len(),
        }
    }
}

/// Result of laying out one opening.
///
/// Overflow is reported, never raised: an over-full opening keeps its
/// computed positions so callers can decide whether to reject, shrink, or
/// warn.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningLayout {
    /// Space consumed along the layout axis, edge reveals included
    pub consumed: f64,
    /// `extent - consumed`; negative when over-full
    pub remaining: f64,
    /// `max(0, consumed - extent)`
    pub overflow: f64,
    /// Whether everything fit
    pub valid: bool,
    /// Position updates in placement order, one per component
    pub placements: Vec<(LineRef, Placement)>,
}

impl OpeningLayout {
    /// Find the placement computed for a component, if any
    pub fn placement_for(&self, re: LineRef) -> Option<Placement> {
        self.placements
            .iter()
            .find(|(r, _)| *r == re)
            .map(|(_, p)| *p)
    }
}
