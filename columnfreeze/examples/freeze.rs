use std::fs::File;

use columnfreeze::{ColumnFreeze, Outcome};
use serde_json::json;
use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{to_html, Document, Element, LayoutEngine, MarkupOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("freeze.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new(
        Element::div()
            .id("page")
            .child(Element::div().text("Quarterly revenue"))
            .child(revenue()),
    );
    let mut freezer = ColumnFreeze::new(LayoutEngine::new(60, 30));
    let markup = MarkupOptions {
        ids: false,
        pretty: true,
    };

    freezer.invoke(
        &mut doc,
        "revenue",
        None,
        &[json!({ "index": 1, "wrapperCSS": { "position": "relative", "paddingBottom": 1 } })],
    )?;
    println!("{}\n", to_html(&doc.root, markup));

    if let Outcome::Frozen(frozen) = freezer.invoke(&mut doc, "revenue", Some("isFrozen"), &[])? {
        println!("frozen: {frozen}");
    }

    freezer.invoke(&mut doc, "revenue", Some("unfreeze"), &[])?;
    println!("{}", to_html(&doc.root, markup));

    Ok(())
}

fn revenue() -> Element {
    let rows = [
        ["North", "12.1", "13.4", "15.0", "14.2"],
        ["South (incl. islands)", "8.3", "9.9", "10.4", "11.7"],
        ["West", "20.5", "19.8", "22.1", "23.6"],
    ];

    let header = Element::tr().with_children(["Region", "Q1", "Q2", "Q3", "Q4"].map(Element::th));
    let body = rows
        .into_iter()
        .fold(Element::tbody(), |body, row| {
            body.child(Element::tr().with_children(row.map(Element::td)))
        });

    Element::table()
        .id("revenue")
        .child(Element::thead().child(header))
        .child(body)
}
