use navdom::layout::layout;
use navdom::{Border, Edges, Element, Rect, Rule, Selector, Size, Style, Stylesheet};

fn layout_root(root: &Element, width: u16, height: u16) -> navdom::LayoutResult {
    layout(root, Rect::from_size(width, height), &Stylesheet::new())
}

// ============================================================================
// Margins
// ============================================================================

#[test]
fn test_margin_offsets_position() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(50))
        .height(Size::Fixed(50))
        .margin(Edges::new(5, 0, 0, 10));

    let layout = layout_root(&root, 100, 100);
    let rect = layout.get("root").unwrap();

    assert_eq!(rect.x, 10, "margin left");
    assert_eq!(rect.y, 5, "margin top");
    assert_eq!(rect.width, 50);
    assert_eq!(rect.height, 50);
}

#[test]
fn test_margin_shrinks_fill() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .margin(Edges::all(10));

    let layout = layout_root(&root, 100, 100);
    let rect = layout.get("root").unwrap();

    assert_eq!(*rect, Rect::new(10, 10, 80, 80));
}

#[test]
fn test_child_margins_stack_in_column() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(
            Element::box_()
                .id("child1")
                .height(Size::Fixed(20))
                .margin(Edges::new(5, 0, 5, 0)),
        )
        .child(Element::box_().id("child2").height(Size::Fixed(20)));

    let layout = layout_root(&root, 100, 100);

    let child1 = layout.get("child1").unwrap();
    assert_eq!(child1.y, 5, "child1 margin top");
    assert_eq!(child1.height, 20);

    let child2 = layout.get("child2").unwrap();
    assert_eq!(child2.y, 30, "child2 starts after child1 + margins");
}

// ============================================================================
// Main-Axis Distribution
// ============================================================================

#[test]
fn test_fill_children_split_remaining_space() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(10))
        .child(
            Element::box_()
                .id("fixed")
                .width(Size::Fixed(30))
                .height(Size::Fixed(5)),
        )
        .child(Element::box_().id("fill1").height(Size::Fixed(5)).width(Size::Fill))
        .child(Element::box_().id("fill2").height(Size::Fixed(5)).width(Size::Fill));

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.get("fixed").unwrap().width, 30);
    let fill1 = layout.get("fill1").unwrap();
    let fill2 = layout.get("fill2").unwrap();
    assert_eq!(fill1.width, 35, "remaining 70 split across two fills");
    assert_eq!(fill2.width, 35);
    assert_eq!(fill1.x, 30);
    assert_eq!(fill2.x, 65);
}

#[test]
fn test_gap_between_children() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(10))
        .gap(10)
        .child(
            Element::box_()
                .id("a")
                .width(Size::Fixed(20))
                .height(Size::Fixed(5)),
        )
        .child(
            Element::box_()
                .id("b")
                .width(Size::Fixed(20))
                .height(Size::Fixed(5)),
        );

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.get("a").unwrap().x, 0);
    assert_eq!(layout.get("b").unwrap().x, 30, "20 + gap 10");
}

#[test]
fn test_padding_and_border_shrink_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(20))
        .padding(Edges::all(1))
        .style(Style::new().border(Border::Single))
        .child(
            Element::box_()
                .id("child")
                .width(Size::Fill)
                .height(Size::Fill),
        );

    let layout = layout_root(&root, 100, 100);
    let child = layout.get("child").unwrap();

    assert_eq!(*child, Rect::new(2, 2, 16, 16));
}

#[test]
fn test_auto_text_takes_intrinsic_size() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(Element::text("hello").id("label"));

    let layout = layout_root(&root, 100, 100);
    let label = layout.get("label").unwrap();

    assert_eq!(label.width, 5);
    assert_eq!(label.height, 1);
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_hidden_element_takes_no_space() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(
            Element::box_()
                .id("gone")
                .height(Size::Fixed(10))
                .hidden(true),
        )
        .child(Element::box_().id("kept").height(Size::Fixed(10)));

    let layout = layout_root(&root, 100, 100);

    assert!(layout.get("gone").is_none(), "hidden element gets no rect");
    assert_eq!(layout.get("kept").unwrap().y, 0, "sibling moves up");
}

#[test]
fn test_stylesheet_hide_rule_removes_element() {
    let sheet = Stylesheet::new().rule(Selector::class("collapsed"), Rule::hide());
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(
            Element::box_()
                .id("region")
                .class("collapsed")
                .height(Size::Fixed(10)),
        );

    let layout = layout(&root, Rect::from_size(100, 100), &sheet);
    assert!(layout.get("region").is_none());
}

#[test]
fn test_later_show_rule_wins() {
    let sheet = Stylesheet::new()
        .rule(Selector::class("collapsed"), Rule::hide())
        .rule(Selector::class("visible"), Rule::show());
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(
            Element::box_()
                .id("region")
                .class("collapsed")
                .class("visible")
                .height(Size::Fixed(10)),
        );

    let layout = layout(&root, Rect::from_size(100, 100), &sheet);
    assert!(layout.get("region").is_some(), "show rule re-shows the region");
}

#[test]
fn test_hidden_flag_outranks_show_rule() {
    let sheet = Stylesheet::new().rule(Selector::class("visible"), Rule::show());
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(
            Element::box_()
                .id("region")
                .class("visible")
                .height(Size::Fixed(10))
                .hidden(true),
        );

    let layout = layout(&root, Rect::from_size(100, 100), &sheet);
    assert!(layout.get("region").is_none());
}
