use tabledom::{Edges, Element, Geometry, LayoutEngine, Rect, Size};

fn produce_table() -> Element {
    Element::table()
        .id("t")
        .child(
            Element::thead().id("head").child(
                Element::tr()
                    .id("hr")
                    .child(Element::th("Name").id("h0"))
                    .child(Element::th("Qty").id("h1"))
                    .child(Element::th("Price").id("h2"))
                    .child(Element::th("Notes").id("h3")),
            ),
        )
        .child(
            Element::tbody()
                .id("body")
                .child(
                    Element::tr()
                        .id("r0")
                        .with_children(["apple", "3", "1.25", "fresh"].map(Element::td)),
                )
                .child(
                    Element::tr()
                        .id("r1")
                        .with_children(["kiwi", "12", "0.5", "ripe and sweet"].map(Element::td)),
                ),
        )
}

fn measure(root: &Element, width: u16) -> std::collections::HashMap<String, Rect> {
    LayoutEngine::new(width, 50).measure(root)
}

// ============================================================================
// Table Tests
// ============================================================================

#[test]
fn test_column_widths_follow_widest_content() {
    let layout = measure(&produce_table(), 80);

    assert_eq!(layout["h0"], Rect::new(0, 0, 5, 1), "\"apple\" is widest");
    assert_eq!(layout["h1"], Rect::new(5, 0, 3, 1));
    assert_eq!(layout["h2"], Rect::new(8, 0, 5, 1));
    assert_eq!(layout["h3"], Rect::new(13, 0, 14, 1));
    assert_eq!(layout["t"], Rect::new(0, 0, 27, 3));
}

#[test]
fn test_rows_and_sections() {
    let layout = measure(&produce_table(), 80);

    assert_eq!(layout["hr"], Rect::new(0, 0, 27, 1));
    assert_eq!(layout["r0"], Rect::new(0, 1, 27, 1));
    assert_eq!(layout["r1"], Rect::new(0, 2, 27, 1));
    assert_eq!(layout["head"], Rect::new(0, 0, 27, 1));
    assert_eq!(layout["body"], Rect::new(0, 1, 27, 2));
}

#[test]
fn test_explicit_width_wraps_text() {
    let mut table = produce_table();
    table.find_mut("h3").unwrap().width = Size::Fixed(6);
    let layout = measure(&table, 80);

    assert_eq!(layout["h3"].width, 6);
    // "ripe and sweet" wraps to "ripe" / "and" / "sweet"
    assert_eq!(layout["r1"].height, 3);
    assert_eq!(layout["r0"].height, 1);
}

#[test]
fn test_explicit_row_height_is_a_minimum() {
    let mut table = produce_table();
    table.find_mut("r0").unwrap().height = Size::Fixed(4);
    table.find_mut("r1").unwrap().height = Size::Fixed(0);
    let layout = measure(&table, 80);

    assert_eq!(layout["r0"].height, 4);
    assert_eq!(layout["r1"].height, 1);
    assert_eq!(layout["r1"].y, 5);
}

#[test]
fn test_table_wider_than_columns_keeps_slack() {
    let table = produce_table().width(Size::Fixed(30));
    let layout = measure(&table, 80);

    assert_eq!(layout["t"].width, 30);
    assert_eq!(layout["h3"].width, 14);
}

#[test]
fn test_padding_adds_to_cell_size() {
    let table = Element::table().child(
        Element::tr().child(
            Element::td("abc")
                .id("c")
                .padding(Edges::symmetric(1, 1)),
        ),
    );
    let layout = measure(&table, 80);
    assert_eq!(layout["c"], Rect::new(0, 0, 5, 3));
}

#[test]
fn test_colspan_grows_last_column() {
    let table = Element::table()
        .child(
            Element::tr().child(Element::td("abcdefghij").id("wide").colspan(2)),
        )
        .child(
            Element::tr()
                .child(Element::td("ab").id("a"))
                .child(Element::td("cd").id("b")),
        );
    let layout = measure(&table, 80);

    assert_eq!(layout["a"].width, 2);
    assert_eq!(layout["b"], Rect::new(2, 1, 8, 1));
    assert_eq!(layout["wide"].width, 10);
}

#[test]
fn test_rowspan_grows_last_row() {
    let table = Element::table().child(
        Element::tbody()
            .child(
                Element::tr()
                    .id("r0")
                    .child(Element::td("tall").id("tall").rowspan(2).height(Size::Fixed(5)))
                    .child(Element::td("x")),
            )
            .child(Element::tr().id("r1").child(Element::td("y").id("y"))),
    );
    let layout = measure(&table, 80);

    assert_eq!(layout["r0"].height, 1);
    assert_eq!(layout["r1"].height, 4);
    assert_eq!(layout["tall"].height, 5);
    assert_eq!(layout["y"].x, 4, "y sits in column 1, after \"tall\"");
}

#[test]
fn test_cell_with_child_elements_sizes_to_children() {
    let table = Element::table().id("t").child(
        Element::tr()
            .id("r")
            .child(
                Element::td("")
                    .id("stack")
                    .child(Element::div().text("ab"))
                    .child(Element::div().text("abcd")),
            )
            .child(Element::td("x").id("plain")),
    );
    let layout = measure(&table, 40);

    assert_eq!(layout["stack"], Rect::new(0, 0, 4, 2));
    assert_eq!(layout["plain"], Rect::new(4, 0, 1, 2));
    assert_eq!(layout["r"].height, 2);
}

// ============================================================================
// Block Tests
// ============================================================================

#[test]
fn test_block_text_wraps_to_width() {
    let root = Element::div()
        .id("root")
        .child(Element::div().id("p").width(Size::Fixed(5)).text("hello world"));
    let layout = measure(&root, 40);

    assert_eq!(layout["p"], Rect::new(0, 0, 5, 2));
    assert_eq!(layout["root"], Rect::new(0, 0, 40, 2));
}

#[test]
fn test_side_by_side_containers() {
    let fixed = Element::div()
        .id("fixed")
        .style("display", "inline-block")
        .style("float", "left")
        .child(Element::table().child(
            Element::tr().child(Element::td("abcd")).child(Element::td("ef")),
        ));
    let scroll = Element::div()
        .id("scroll")
        .style("display", "inline-block")
        .style("position", "absolute")
        .style("overflow-x", "scroll")
        .style("right", "0")
        .style("left", "6px")
        .child(Element::table().id("st").child(Element::tr().child(Element::td("0123456789"))));
    let wrapper = Element::div()
        .id("wrapper")
        .style("position", "relative")
        .style("padding-bottom", "20px")
        .child(fixed)
        .child(scroll);
    let root = Element::div().id("root").child(wrapper);

    let layout = measure(&root, 40);

    assert_eq!(layout["fixed"], Rect::new(0, 0, 6, 1));
    assert_eq!(layout["scroll"], Rect::new(6, 0, 34, 1));
    assert_eq!(layout["st"], Rect::new(6, 0, 10, 1));
    assert_eq!(layout["wrapper"], Rect::new(0, 0, 40, 21));
}

#[test]
fn test_right_anchored_box_is_measured_then_placed() {
    let root = Element::div()
        .id("root")
        .child(
            Element::div()
                .id("badge")
                .style("position", "absolute")
                .style("right", "2px")
                .text("new"),
        );
    let layout = measure(&root, 20);

    assert_eq!(layout["badge"], Rect::new(15, 0, 3, 1));
}

#[test]
fn test_text_taller_than_coordinate_space_saturates() {
    let root = Element::div()
        .id("root")
        .child(Element::div().id("tall").text("\n".repeat(70_000)));
    let layout = measure(&root, 40);

    assert_eq!(layout["tall"].height, u16::MAX);
    assert_eq!(layout["root"].height, u16::MAX);
}
