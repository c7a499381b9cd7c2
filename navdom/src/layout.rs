use std::collections::HashMap;

use crate::element::Element;
use crate::measure;
use crate::stylesheet::Stylesheet;
use crate::types::{Border, Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: self.width.saturating_sub(left.saturating_add(right)),
            height: self.height.saturating_sub(top.saturating_add(bottom)),
        }
    }
}

/// Single-pass row/column layout. Hidden elements (flag or stylesheet)
/// take no space and receive no rect.
pub fn layout(root: &Element, available: Rect, sheet: &Stylesheet) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(root, available, sheet, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, sheet: &Stylesheet, result: &mut LayoutResult) {
    if !sheet.visible(element) {
        return;
    }

    // Margin shrinks available space and offsets position
    let margin = &element.margin;
    let after_margin = available.shrink(margin.top, margin.right, margin.bottom, margin.left);

    let width = resolve(element.width, after_margin.width, || {
        measure::intrinsic_width(element)
    });
    let height = resolve(element.height, after_margin.height, || {
        measure::intrinsic_height(element)
    });
    let rect = Rect::new(after_margin.x, after_margin.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, sheet, result);
}

fn resolve(size: Size, available: u16, intrinsic: impl FnOnce() -> u16) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => intrinsic().min(available),
    }
}

fn layout_children(element: &Element, rect: Rect, sheet: &Stylesheet, result: &mut LayoutResult) {
    let children: Vec<&Element> = element
        .child_elements()
        .iter()
        .filter(|c| sheet.visible(c))
        .collect();
    if children.is_empty() {
        return;
    }

    let border = if sheet.computed(element).border == Border::None {
        0
    } else {
        1
    };
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;

    // First pass: space consumed by fixed and auto children, fill count
    let mut consumed = 0u16;
    let mut fill_count = 0u16;
    for child in &children {
        let margin_main = if is_row {
            child.margin.horizontal_total()
        } else {
            child.margin.vertical_total()
        };
        consumed = consumed.saturating_add(margin_main);
        match main_axis_size(child, is_row) {
            Size::Fixed(n) => consumed = consumed.saturating_add(n),
            Size::Auto => consumed = consumed.saturating_add(intrinsic_main(child, is_row)),
            Size::Fill => fill_count += 1,
        }
    }

    let remaining = main_size.saturating_sub(consumed.saturating_add(gap_total));
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    // Second pass: assign rects in flow order
    let mut offset = 0u16;
    for child in children {
        let (margin_before, margin_after) = if is_row {
            (child.margin.left, child.margin.right)
        } else {
            (child.margin.top, child.margin.bottom)
        };
        let (cross_margin_before, cross_margin_after) = if is_row {
            (child.margin.top, child.margin.bottom)
        } else {
            (child.margin.left, child.margin.right)
        };

        let main = match main_axis_size(child, is_row) {
            Size::Fixed(n) => n,
            Size::Auto => intrinsic_main(child, is_row),
            Size::Fill => fill_size,
        };
        let main = main.min(main_size.saturating_sub(offset.saturating_add(margin_before)));

        let cross_available =
            cross_size.saturating_sub(cross_margin_before.saturating_add(cross_margin_after));
        let cross = match cross_axis_size(child, is_row) {
            Size::Fixed(n) => n.min(cross_available),
            Size::Fill => cross_available,
            Size::Auto => intrinsic_cross(child, is_row).min(cross_available),
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x + offset + margin_before,
                inner.y + cross_margin_before,
                main,
                cross,
            )
        } else {
            Rect::new(
                inner.x + cross_margin_before,
                inner.y + offset + margin_before,
                cross,
                main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, sheet, result);

        offset = offset
            .saturating_add(margin_before)
            .saturating_add(main)
            .saturating_add(margin_after)
            .saturating_add(element.gap);
    }
}

fn main_axis_size(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.width
    } else {
        element.height
    }
}

fn cross_axis_size(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.height
    } else {
        element.width
    }
}

fn intrinsic_main(element: &Element, is_row: bool) -> u16 {
    if is_row {
        measure::intrinsic_width(element)
    } else {
        measure::intrinsic_height(element)
    }
}

fn intrinsic_cross(element: &Element, is_row: bool) -> u16 {
    if is_row {
        measure::intrinsic_height(element)
    } else {
        measure::intrinsic_width(element)
    }
}
