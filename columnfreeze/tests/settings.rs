use columnfreeze::settings::{style_map, StyleRecord, StyleValue};
use columnfreeze::{ConfigArgs, FreezeError, Settings, WidthOverride};
use serde_json::{json, Map, Value};

fn record(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("not a record: {other}"),
    }
}

fn is_invalid_argument<T>(result: columnfreeze::Result<T>) -> bool {
    matches!(result, Err(FreezeError::InvalidArgument(_)))
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.index, 1);
    assert_eq!(settings.row_selector, "tr");
    assert_eq!(
        settings.header_selector,
        "thead tr:last-child th, thead tr:last-child td"
    );
    assert_eq!(settings.fixed_width, None);
    assert_eq!(settings.scroll_width, None);
    assert_eq!(
        settings.container_scroll_style.get("overflow-x"),
        Some(&StyleValue::Text("scroll".into()))
    );
}

#[test]
fn test_get_by_key() {
    let settings = Settings::default();
    assert_eq!(settings.get("index").unwrap(), json!(1));
    assert_eq!(settings.get("wrapperClass").unwrap(), json!("columnfreeze-wrapper"));
    assert_eq!(settings.get("fixedWidth").unwrap(), Value::Null);
    assert_eq!(
        settings.get("wrapperCSS").unwrap(),
        json!({ "overflow": "hidden", "padding-bottom": "20px", "position": "relative" })
    );
}

// ============================================================================
// Updates
// ============================================================================

#[test]
fn test_set_through_alias() {
    let mut settings = Settings::default();
    settings.set("widthFixed", json!(120)).unwrap();
    settings.set("widthScroll", json!("auto")).unwrap();

    assert_eq!(settings.fixed_width, Some(WidthOverride::Px(120)));
    assert_eq!(settings.scroll_width, Some(WidthOverride::AUTO));
    assert_eq!(settings.get("fixedWidth").unwrap(), json!(120));
    assert_eq!(settings.get("scrollWidth").unwrap(), json!("auto"));
}

#[test]
fn test_set_null_clears_override() {
    let mut settings = Settings::default();
    settings.set("fixedWidth", json!(40)).unwrap();
    settings.set("fixedWidth", Value::Null).unwrap();
    assert_eq!(settings.fixed_width, None);
}

#[test]
fn test_merge_is_shallow() {
    let settings = Settings::default();
    let merged = settings
        .merged(&record(json!({
            "index": 3,
            "containerFixedCSS": { "backgroundColor": "white" },
        })))
        .unwrap();

    assert_eq!(merged.index, 3);
    assert_eq!(merged.container_fixed_style.len(), 1);
    assert_eq!(merged.container_scroll_style, settings.container_scroll_style);
    assert_eq!(merged.row_selector, "tr");
}

#[test]
fn test_merge_empty_record_changes_nothing() {
    let settings = Settings::default();
    assert_eq!(settings.merged(&Map::new()).unwrap(), settings);
}

#[test]
fn test_style_map_writes_css_names() {
    let mut style = StyleRecord::new();
    style.insert("overflowX".into(), StyleValue::Text("scroll".into()));
    style.insert("left".into(), StyleValue::Number(10.0));

    let map = style_map(&style);
    assert_eq!(map.get("overflow-x"), Some("scroll"));
    assert_eq!(map.get("left"), Some("10px"));
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_unknown_key() {
    let mut settings = Settings::default();
    assert!(is_invalid_argument(settings.get("colour")));
    assert!(is_invalid_argument(settings.set("colour", json!("red"))));
    assert!(is_invalid_argument(
        settings.merged(&record(json!({ "index": 2, "colour": "red" })))
    ));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_wrong_value_type() {
    let mut settings = Settings::default();
    assert!(is_invalid_argument(settings.set("index", json!("two"))));
    assert!(is_invalid_argument(settings.set("fixedWidth", json!(-4))));
    assert!(is_invalid_argument(settings.set("scrollWidth", json!("wide"))));
    assert!(is_invalid_argument(settings.set("wrapperStyle", json!(["a"]))));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_bad_selector() {
    let mut settings = Settings::default();
    assert!(is_invalid_argument(settings.set("rowSelector", json!("tr:hover"))));
    assert!(is_invalid_argument(settings.set("headerSelector", json!(""))));
    assert_eq!(settings.row_selector, "tr");
}

// ============================================================================
// Configuration Arguments
// ============================================================================

#[test]
fn test_config_args_shapes() {
    assert_eq!(ConfigArgs::from_values(&[]).unwrap(), ConfigArgs::Ensure);
    assert_eq!(
        ConfigArgs::from_values(&[Value::Null]).unwrap(),
        ConfigArgs::Ensure
    );
    assert_eq!(
        ConfigArgs::from_values(&[json!("index")]).unwrap(),
        ConfigArgs::Get("index".into())
    );
    assert_eq!(
        ConfigArgs::from_values(&[json!("index"), json!(2)]).unwrap(),
        ConfigArgs::Set("index".into(), json!(2))
    );
    assert_eq!(
        ConfigArgs::from_values(&[json!({ "index": 2 })]).unwrap(),
        ConfigArgs::Merge(record(json!({ "index": 2 })))
    );
}

#[test]
fn test_config_args_rejected() {
    assert!(is_invalid_argument(ConfigArgs::from_values(&[json!(3)])));
    assert!(is_invalid_argument(ConfigArgs::from_values(&[json!(["index"])])));
    assert!(is_invalid_argument(ConfigArgs::from_values(&[
        json!("index"),
        json!(2),
        json!(3)
    ])));
}
