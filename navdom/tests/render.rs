use navdom::layout::layout;
use navdom::{
    render_to_buffer, Border, Buffer, Color, Element, Rect, Rgb, Rule, Selector, Size, Style,
    Stylesheet,
};

fn render(root: &Element, sheet: &Stylesheet, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::new(width, height);
    let l = layout(root, Rect::from_size(width, height), sheet);
    render_to_buffer(root, &l, sheet, &mut buf);
    buf
}

#[test]
fn test_text_lands_in_cells() {
    let root = Element::text("hi")
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1));
    let buf = render(&root, &Stylesheet::new(), 10, 3);

    assert_eq!(buf.get(0, 0).unwrap().ch, 'h');
    assert_eq!(buf.get(1, 0).unwrap().ch, 'i');
    assert_eq!(buf.get(2, 0).unwrap().ch, ' ');
}

#[test]
fn test_background_fills_rect() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(4))
        .height(Size::Fixed(2))
        .style(Style::new().background(Color::rgb(10, 20, 30)));
    let buf = render(&root, &Stylesheet::new(), 10, 3);

    assert_eq!(buf.get(0, 0).unwrap().bg, Rgb::new(10, 20, 30));
    assert_eq!(buf.get(3, 1).unwrap().bg, Rgb::new(10, 20, 30));
    assert_eq!(buf.get(4, 0).unwrap().bg, Rgb::new(0, 0, 0), "outside rect");
}

#[test]
fn test_border_glyphs() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(4))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Rounded));
    let buf = render(&root, &Stylesheet::new(), 10, 5);

    assert_eq!(buf.get(0, 0).unwrap().ch, '╭');
    assert_eq!(buf.get(3, 0).unwrap().ch, '╮');
    assert_eq!(buf.get(0, 2).unwrap().ch, '╰');
    assert_eq!(buf.get(3, 2).unwrap().ch, '╯');
    assert_eq!(buf.get(1, 0).unwrap().ch, '─');
    assert_eq!(buf.get(0, 1).unwrap().ch, '│');
}

#[test]
fn test_hidden_element_is_not_painted() {
    let root = Element::text("hi")
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .hidden(true);
    let buf = render(&root, &Stylesheet::new(), 10, 3);

    assert_eq!(buf.get(0, 0).unwrap().ch, ' ');
}

#[test]
fn test_collapsed_region_reappears_with_visible_class() {
    let sheet = Stylesheet::new()
        .rule(Selector::class("collapsed"), Rule::hide())
        .rule(Selector::class("visible"), Rule::show());

    let hidden_root = Element::text("nav")
        .id("root")
        .class("collapsed")
        .width(Size::Fixed(5))
        .height(Size::Fixed(1));
    let buf = render(&hidden_root, &sheet, 10, 3);
    assert_eq!(buf.get(0, 0).unwrap().ch, ' ', "collapsed region hidden");

    let shown_root = hidden_root.clone().class("visible");
    let buf = render(&shown_root, &sheet, 10, 3);
    assert_eq!(buf.get(0, 0).unwrap().ch, 'n', "visible class re-shows it");
}

#[test]
fn test_wide_char_marks_continuation_cell() {
    let root = Element::text("日")
        .id("root")
        .width(Size::Fixed(4))
        .height(Size::Fixed(1));
    let buf = render(&root, &Stylesheet::new(), 10, 3);

    assert_eq!(buf.get(0, 0).unwrap().ch, '日');
    assert!(buf.get(1, 0).unwrap().wide_continuation);
}

#[test]
fn test_rule_style_applies_to_matching_elements() {
    let sheet = Stylesheet::new().rule(
        Selector::class("accent"),
        Rule::style(Style::new().foreground(Color::rgb(200, 100, 50))),
    );
    let root = Element::text("x")
        .id("root")
        .class("accent")
        .width(Size::Fixed(1))
        .height(Size::Fixed(1));
    let buf = render(&root, &sheet, 5, 1);

    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(200, 100, 50));
}
