use navdom::measure::{children_outer_width, intrinsic_height, intrinsic_width, outer_width};
use navdom::{Border, Edges, Element, Size, Style};

// ============================================================================
// Text Content
// ============================================================================

#[test]
fn test_text_display_width() {
    let el = Element::text("hello");
    assert_eq!(intrinsic_width(&el), 5);
    assert_eq!(intrinsic_height(&el), 1);
}

#[test]
fn test_wide_characters_count_double() {
    let el = Element::text("日本");
    assert_eq!(intrinsic_width(&el), 4);
}

#[test]
fn test_multiline_text() {
    let el = Element::text("ab\ncdef");
    assert_eq!(intrinsic_width(&el), 4, "widest line");
    assert_eq!(intrinsic_height(&el), 2);
}

// ============================================================================
// Box Model Contributions
// ============================================================================

#[test]
fn test_padding_and_border_add_to_width() {
    let el = Element::text("hello")
        .padding(Edges::horizontal(2))
        .style(Style::new().border(Border::Single));
    assert_eq!(intrinsic_width(&el), 5 + 4 + 2);
    assert_eq!(intrinsic_height(&el), 1 + 2);
}

#[test]
fn test_fixed_size_is_the_box_size() {
    let el = Element::box_()
        .width(Size::Fixed(200))
        .padding(Edges::all(3));
    assert_eq!(intrinsic_width(&el), 200, "explicit size wins over content");
}

#[test]
fn test_outer_width_includes_margins() {
    let el = Element::box_()
        .width(Size::Fixed(200))
        .margin(Edges::horizontal(25));
    assert_eq!(outer_width(&el), 250);
}

// ============================================================================
// Container Estimation
// ============================================================================

#[test]
fn test_row_sums_children_with_gaps() {
    let row = Element::row()
        .gap(3)
        .child(
            Element::box_()
                .width(Size::Fixed(10))
                .margin(Edges::horizontal(1)),
        )
        .child(Element::box_().width(Size::Fixed(20)));
    assert_eq!(intrinsic_width(&row), 12 + 20 + 3);
}

#[test]
fn test_column_takes_widest_child() {
    let col = Element::col()
        .child(Element::box_().width(Size::Fixed(10)))
        .child(Element::box_().width(Size::Fixed(20)));
    assert_eq!(intrinsic_width(&col), 20);
}

#[test]
fn test_children_outer_width_sums_margins_but_not_gaps() {
    let content = Element::row()
        .gap(5)
        .child(
            Element::box_()
                .width(Size::Fixed(200))
                .margin(Edges::horizontal(25)),
        )
        .child(Element::box_().width(Size::Fixed(250)));
    assert_eq!(children_outer_width(&content), 500);
}

#[test]
fn test_children_outer_width_of_leaf_is_zero() {
    assert_eq!(children_outer_width(&Element::text("hi")), 0);
    assert_eq!(children_outer_width(&Element::box_()), 0);
}
