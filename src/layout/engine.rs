//! Opening layout computation
//!
//! Packs an opening's components along one axis: merge the four typed
//! collections into placement order, then a single linear scan assigning
//! each component a position and consumed span. Deterministic for fixed
//! inputs; overflow is reported on the result, never raised.

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::types::{
    ComponentKind, LayoutDirection, LineRef, Opening, OpeningLayout, Placement,
};

/// One component flattened into the packing sequence
#[derive(Debug, Clone, Copy)]
struct Line {
    re: LineRef,
    size: f64,
    sort_order: i32,
}

/// Lay out an opening's components along its configured direction.
///
/// Vertical layout charges both edge reveals; horizontal layout starts
/// flush at the opening edge with no reveals. Grid is not implemented and
/// returns [`LayoutError::GridUnsupported`] rather than silently packing
/// vertically.
///
/// The returned placements are a parallel sequence of position updates;
/// apply them with [`Opening::apply`].
pub fn layout_opening(
    opening: &Opening,
    config: &LayoutConfig,
) -> Result<OpeningLayout, LayoutError> {
    let mut reveals = config.reveals_for(opening);
    let extent = match opening.direction {
        LayoutDirection::Vertical => opening.height,
        LayoutDirection::Horizontal => {
            // Horizontal runs start flush; only the inter-component gap applies
            reveals.top_reveal = 0.0;
            reveals.bottom_reveal = 0.0;
            opening.width
        }
        LayoutDirection::Grid => return Err(LayoutError::GridUnsupported),
    };

    let lines = merge_lines(opening, config);
    let mut placements = Vec::with_capacity(lines.len());
    let mut position = reveals.bottom_reveal;
    let mut consumed = reveals.bottom_reveal + reveals.top_reveal;

    for (i, line) in lines.iter().enumerate() {
        let trailing = if i + 1 == lines.len() {
            0.0
        } else {
            reveals.component_gap
        };
        let span = line.size + trailing;
        if config.trace {
            eprintln!(
                "TRACE: {}[{}] order={} pos={:.4} span={:.4}",
                line.re.kind.label(),
                line.re.index,
                line.sort_order,
                position,
                span
            );
        }
        placements.push((line.re, Placement { position, span }));
        position += span;
        consumed += span;
    }

    Ok(OpeningLayout {
        consumed,
        remaining: extent - consumed,
        overflow: (consumed - extent).max(0.0),
        valid: consumed <= extent,
        placements,
    })
}

/// Check whether a candidate component would fit in the opening's remaining
/// space.
///
/// The candidate's size is floored per kind: a drawer never packs below the
/// minimum front height, and a shelf always consumes the fixed clearance
/// whatever was requested. An inter-component gap is charged only when the
/// opening already holds at least one component; the first component in an
/// empty opening pays no entry gap.
pub fn can_fit(
    opening: &Opening,
    config: &LayoutConfig,
    kind: ComponentKind,
    requested: f64,
) -> Result<bool, LayoutError> {
    let current = layout_opening(opening, config)?;
    let effective = match kind {
        ComponentKind::Drawer => requested.max(config.min_drawer_front),
        ComponentKind::Shelf => config.min_shelf_clearance,
        ComponentKind::Door | ComponentKind::Pullout => requested,
    };
    let entry_gap = if opening.is_empty() {
        0.0
    } else {
        opening.component_gap.unwrap_or(config.component_gap)
    };
    Ok(effective + entry_gap <= current.remaining)
}

/// Merge the four typed collections into a single packing sequence, sorted
/// by `sort_order`. The sort is stable, so ties keep input order: drawers,
/// then shelves, doors, pullouts, each in collection order.
fn merge_lines(opening: &Opening, config: &LayoutConfig) -> Vec<Line> {
    let horizontal = opening.direction == LayoutDirection::Horizontal;
    let mut lines = Vec::with_capacity(opening.component_count());

    for (i, d) in opening.drawers.iter().enumerate() {
        lines.push(Line {
            re: LineRef::new(ComponentKind::Drawer, i),
            size: if horizontal { d.width } else { d.front_height },
            sort_order: d.sort_order,
        });
    }
    for (i, s) in opening.shelves.iter().enumerate() {
        // Pin-hole clearance, not material thickness
        lines.push(Line {
            re: LineRef::new(ComponentKind::Shelf, i),
            size: config.min_shelf_clearance,
            sort_order: s.sort_order,
        });
    }
    for (i, d) in opening.doors.iter().enumerate() {
        lines.push(Line {
            re: LineRef::new(ComponentKind::Door, i),
            size: if horizontal { d.width } else { d.height },
            sort_order: d.sort_order,
        });
    }
    for (i, p) in opening.pullouts.iter().enumerate() {
        lines.push(Line {
            re: LineRef::new(ComponentKind::Pullout, i),
            size: if horizontal { p.width } else { p.height },
            sort_order: p.sort_order,
        });
    }

    lines.sort_by_key(|l| l.sort_order);
    lines
}
