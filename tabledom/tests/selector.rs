use tabledom::{select, select_ids, select_ids_in_table, select_in_table, Element, Selector};

fn two_row_header_table() -> Element {
    Element::table()
        .id("t")
        .child(
            Element::thead()
                .child(
                    Element::tr()
                        .id("group-row")
                        .child(Element::th("Item").id("g1").colspan(2))
                        .child(Element::th("Detail").id("g2")),
                )
                .child(
                    Element::tr()
                        .id("head-row")
                        .child(Element::th("Name").id("h1"))
                        .child(Element::td("Qty").id("h2").class("num"))
                        .child(Element::th("Notes").id("h3")),
                ),
        )
        .child(
            Element::tbody()
                .child(
                    Element::tr()
                        .id("r1")
                        .class("odd")
                        .child(Element::td("apple").id("c1")),
                )
                .child(Element::tr().id("r2").child(Element::td("kiwi").id("c2"))),
        )
}

// ============================================================================
// Matching Tests
// ============================================================================

#[test]
fn test_tag_selector_matches_all_rows_in_order() {
    let table = two_row_header_table();
    let sel = Selector::parse("tr").unwrap();
    assert_eq!(
        select_ids(&table, &sel),
        vec!["group-row", "head-row", "r1", "r2"]
    );
}

#[test]
fn test_last_header_row_cells() {
    let table = two_row_header_table();
    let sel = Selector::parse("thead tr:last-child th, thead tr:last-child td").unwrap();
    // Document order is kept across selector groups
    assert_eq!(select_ids(&table, &sel), vec!["h1", "h2", "h3"]);
}

#[test]
fn test_first_child() {
    let table = two_row_header_table();
    let sel = Selector::parse("tbody tr:first-child td").unwrap();
    assert_eq!(select_ids(&table, &sel), vec!["c1"]);
}

#[test]
fn test_class_and_id() {
    let table = two_row_header_table();
    assert_eq!(
        select_ids(&table, &Selector::parse(".num").unwrap()),
        vec!["h2"]
    );
    assert_eq!(
        select_ids(&table, &Selector::parse("tr.odd td").unwrap()),
        vec!["c1"]
    );
    assert_eq!(
        select_ids(&table, &Selector::parse("#r2 *").unwrap()),
        vec!["c2"]
    );
}

#[test]
fn test_root_is_not_a_candidate() {
    let table = two_row_header_table();
    assert!(select(&table, &Selector::parse("table").unwrap()).is_empty());
    // ...but it can still satisfy an ancestor compound
    assert_eq!(
        select_ids(&table, &Selector::parse("table tbody td").unwrap()),
        vec!["c1", "c2"]
    );
}

#[test]
fn test_duplicate_groups_are_deduplicated() {
    let table = two_row_header_table();
    let sel = Selector::parse("tbody td, td:first-child").unwrap();
    assert_eq!(select_ids(&table, &sel), vec!["c1", "c2"]);
}

// ============================================================================
// Table Scope Tests
// ============================================================================

fn table_with_nested_table() -> Element {
    let inner = Element::table().id("inner").child(
        Element::thead().child(
            Element::tr()
                .id("inner-head")
                .child(Element::th("a").id("ih1"))
                .child(Element::th("b").id("ih2")),
        ),
    );
    let inner = inner.child(
        Element::tbody()
            .child(Element::tr().id("inner-r1").child(Element::td("1")))
            .child(Element::tr().id("inner-r2").child(Element::td("2"))),
    );

    Element::table()
        .id("outer")
        .child(
            Element::thead().child(
                Element::tr()
                    .id("head-row")
                    .child(Element::th("Name").id("h1"))
                    .child(Element::th("Notes").id("h2")),
            ),
        )
        .child(
            Element::tbody().child(
                Element::tr()
                    .id("r1")
                    .child(Element::td("apple"))
                    .child(Element::td("").id("holder").child(inner)),
            ),
        )
}

#[test]
fn test_nested_table_rows_are_out_of_scope() {
    let table = table_with_nested_table();
    let sel = Selector::parse("tr").unwrap();

    assert_eq!(select_ids_in_table(&table, &sel), vec!["head-row", "r1"]);
    // Unscoped selection still sees everything
    assert_eq!(select(&table, &sel).len(), 5);
}

#[test]
fn test_nested_table_headers_are_out_of_scope() {
    let table = table_with_nested_table();
    let sel = Selector::parse("thead tr:last-child th").unwrap();

    assert_eq!(select_ids_in_table(&table, &sel), vec!["h1", "h2"]);
    assert_eq!(
        select_ids(&table, &sel),
        vec!["h1", "h2", "ih1", "ih2"]
    );
}

#[test]
fn test_nested_table_itself_can_match() {
    let table = table_with_nested_table();
    let found = select_in_table(&table, &Selector::parse("td table").unwrap());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "inner");
}
