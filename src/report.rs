//! Cut-sheet rendering
//!
//! Turns a computed [`OpeningLayout`] into the plain-text block a shop
//! prints alongside the cut list. All dimensions are formatted as mixed
//! fractions at the caller's precision.

use crate::layout::{format_inches, LayoutDirection, Opening, OpeningLayout};

/// Render one opening's layout as an indented text block.
///
/// Positions are offsets from the opening's leading reveal/edge; spans
/// include each component's trailing gap except the last.
pub fn render_opening(
    label: &str,
    opening: &Opening,
    layout: &OpeningLayout,
    denominator: u32,
) -> String {
    let extent = match opening.direction {
        LayoutDirection::Horizontal => opening.width,
        LayoutDirection::Vertical | LayoutDirection::Grid => opening.height,
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} ({}, {} x {})\n",
        label,
        opening.direction.label(),
        format_inches(opening.height, denominator),
        format_inches(opening.width, denominator),
    ));

    for (re, placement) in &layout.placements {
        out.push_str(&format!(
            "  {:<7} {:>2}   pos {:<8} span {}\n",
            re.kind.label(),
            re.index + 1,
            format_inches(placement.position, denominator),
            format_inches(placement.span, denominator),
        ));
    }

    if layout.valid {
        out.push_str(&format!(
            "  consumed {} of {}, remaining {}\n",
            format_inches(layout.consumed, denominator),
            format_inches(extent, denominator),
            format_inches(layout.remaining, denominator),
        ));
    } else {
        out.push_str(&format!(
            "  OVERFLOW by {} (consumed {} of {})\n",
            format_inches(layout.overflow, denominator),
            format_inches(layout.consumed, denominator),
            format_inches(extent, denominator),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_opening, DrawerFront, LayoutConfig, Opening};

    fn bank() -> Opening {
        let mut opening = Opening::new(20.0, 18.0, LayoutDirection::Vertical);
        for (i, h) in [4.0, 6.0, 4.0].into_iter().enumerate() {
            opening.drawers.push(DrawerFront {
                front_height: h,
                width: 18.0,
                sort_order: i as i32,
                placement: None,
            });
        }
        opening
    }

    #[test]
    fn test_render_drawer_bank() {
        let opening = bank();
        let layout = layout_opening(&opening, &LayoutConfig::default()).unwrap();
        let text = render_opening("opening 1", &opening, &layout, 16);
        insta::assert_snapshot!(text, @r###"
        opening 1 (vertical, 20 x 18)
          drawer   1   pos 1/8      span 4-1/8
          drawer   2   pos 4-1/4    span 6-1/8
          drawer   3   pos 10-3/8   span 4
          consumed 14-1/2 of 20, remaining 5-1/2
        "###);
    }

    #[test]
    fn test_render_overflow() {
        let mut opening = bank();
        opening.height = 10.0;
        let layout = layout_opening(&opening, &LayoutConfig::default()).unwrap();
        let text = render_opening("opening 1", &opening, &layout, 16);
        assert!(text.contains("OVERFLOW by 4-1/2"));
        assert!(text.contains("consumed 14-1/2 of 10"));
    }
}
