use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Border, Direction, Size};

/// Intrinsic content-box width: content plus padding and border, without
/// margins. Intrinsic sizes ignore display state (hidden flags, stylesheet
/// rules), so a region measures the same whether or not it is currently
/// collapsed.
pub fn intrinsic_width(element: &Element) -> u16 {
    estimate(element, true)
}

/// Intrinsic content-box height, same rules as [`intrinsic_width`].
pub fn intrinsic_height(element: &Element) -> u16 {
    estimate(element, false)
}

/// Intrinsic width including horizontal margins.
pub fn outer_width(element: &Element) -> u16 {
    intrinsic_width(element).saturating_add(element.margin.horizontal_total())
}

/// Sum of the immediate children's outer widths. Gaps between children
/// are not counted, only the children's own boxes and margins.
pub fn children_outer_width(element: &Element) -> u16 {
    element
        .child_elements()
        .iter()
        .map(outer_width)
        .fold(0u16, u16::saturating_add)
}

fn estimate(element: &Element, is_width: bool) -> u16 {
    // An explicit size is the box size; only auto/fill boxes are estimated
    // from their content.
    let explicit = if is_width { element.width } else { element.height };
    if let Size::Fixed(n) = explicit {
        return n;
    }

    let border = if element.style.border == Border::None {
        0
    } else {
        2
    };
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content = match &element.content {
        Content::Text(text) => {
            if is_width {
                text.lines()
                    .map(|line| display_width(line) as u16)
                    .max()
                    .unwrap_or(0)
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                // Sum along the main axis, margins and gaps included
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|c| outer_size(c, is_width))
                    .fold(gap_total, u16::saturating_add)
            } else {
                // Max across the cross axis
                children
                    .iter()
                    .map(|c| outer_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content.saturating_add(padding).saturating_add(border)
}

fn outer_size(element: &Element, is_width: bool) -> u16 {
    let margin = if is_width {
        element.margin.horizontal_total()
    } else {
        element.margin.vertical_total()
    };
    estimate(element, is_width).saturating_add(margin)
}
