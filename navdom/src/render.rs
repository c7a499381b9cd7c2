use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::stylesheet::Stylesheet;
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Rgb, TextStyle};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);
const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);

/// Paint the tree into the buffer using rects from the last layout.
/// Elements without a rect (hidden, or never laid out) are skipped.
pub fn render_to_buffer(
    root: &Element,
    layout: &LayoutResult,
    sheet: &Stylesheet,
    buf: &mut Buffer,
) {
    render_element(root, layout, sheet, buf, DEFAULT_BG);
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    sheet: &Stylesheet,
    buf: &mut Buffer,
    inherited_bg: Rgb,
) {
    if !sheet.visible(element) {
        return;
    }
    let Some(&rect) = layout.get(&element.id) else {
        return;
    };

    let style = sheet.computed(element);
    let bg = style.background.map(|c| c.to_rgb()).unwrap_or(inherited_bg);
    let fg = style.foreground.map(|c| c.to_rgb()).unwrap_or(DEFAULT_FG);

    if style.background.is_some() {
        fill_background(buf, rect, bg);
    }
    render_border(buf, rect, style.border, fg, bg);

    let border = if style.border == Border::None { 0 } else { 1 };
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    match &element.content {
        Content::Text(text) => {
            for (i, line) in text.lines().enumerate() {
                let y = inner.y + i as u16;
                if y >= inner.bottom() {
                    break;
                }
                draw_line(buf, inner, y, line, fg, bg, style.text_style);
            }
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, sheet, buf, bg);
            }
        }
        Content::None => {}
    }
}

fn fill_background(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                *cell = Cell {
                    bg,
                    ..Cell::default()
                };
            }
        }
    }
}

fn render_border(buf: &mut Buffer, rect: Rect, border: Border, fg: Rgb, bg: Rgb) {
    let (tl, tr, bl, br, h, v) = match border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let set = |buf: &mut Buffer, x: u16, y: u16, ch: char| {
        buf.set(
            x,
            y,
            Cell {
                ch,
                fg,
                bg,
                ..Cell::default()
            },
        );
    };

    set(buf, rect.x, rect.y, tl);
    set(buf, rect.right() - 1, rect.y, tr);
    set(buf, rect.x, rect.bottom() - 1, bl);
    set(buf, rect.right() - 1, rect.bottom() - 1, br);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set(buf, x, rect.y, h);
        set(buf, x, rect.bottom() - 1, h);
    }
    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set(buf, rect.x, y, v);
        set(buf, rect.right() - 1, y, v);
    }
}

fn draw_line(
    buf: &mut Buffer,
    inner: Rect,
    y: u16,
    line: &str,
    fg: Rgb,
    bg: Rgb,
    text_style: TextStyle,
) {
    if inner.width == 0 {
        return;
    }
    let text = truncate_to_width(line, inner.width as usize);
    let mut x = inner.x;

    for ch in text.chars() {
        let w = char_width(ch) as u16;
        if w == 0 {
            continue;
        }
        if x + w > inner.right() {
            break;
        }
        buf.set(
            x,
            y,
            Cell {
                ch,
                fg,
                bg,
                style: text_style,
                wide_continuation: false,
            },
        );
        if w == 2 {
            buf.set(
                x + 1,
                y,
                Cell {
                    ch: ' ',
                    fg,
                    bg,
                    style: text_style,
                    wide_continuation: true,
                },
            );
        }
        x += w;
    }
}
