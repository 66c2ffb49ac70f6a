//! Per-table freeze settings.
//!
//! Settings travel as JSON-shaped records so that callers can pass partial
//! updates by key, the same way they would configure the widget from a page
//! script. Merging is a shallow overwrite by key: a style map in a record
//! replaces the whole style map, it is not merged property by property.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabledom::{Selector, StyleMap};

use crate::error::{FreezeError, Result};

/// Every accepted key, with the alias spellings mapped to their canonical name.
const KEYS: &[(&str, &str)] = &[
    ("index", "index"),
    ("containerFixedClass", "containerFixedClass"),
    ("containerFixedStyle", "containerFixedStyle"),
    ("containerFixedCSS", "containerFixedStyle"),
    ("containerScrollClass", "containerScrollClass"),
    ("containerScrollStyle", "containerScrollStyle"),
    ("containerScrollCSS", "containerScrollStyle"),
    ("wrapperClass", "wrapperClass"),
    ("wrapperStyle", "wrapperStyle"),
    ("wrapperCSS", "wrapperStyle"),
    ("rowSelector", "rowSelector"),
    ("headerSelector", "headerSelector"),
    ("fixedWidth", "fixedWidth"),
    ("widthFixed", "fixedWidth"),
    ("scrollWidth", "scrollWidth"),
    ("widthScroll", "scrollWidth"),
];

fn canonical_key(key: &str) -> Result<&'static str> {
    KEYS.iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
        .ok_or_else(|| FreezeError::invalid_argument(format!("unknown setting \"{key}\"")))
}

/// Explicit width for one side of the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidthOverride {
    /// Applied verbatim, in pixels.
    Px(u16),
    Keyword(WidthKeyword),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthKeyword {
    /// Leave the table at its natural width. On the scroll side this also
    /// skips copying header widths.
    Auto,
}

impl WidthOverride {
    pub const AUTO: WidthOverride = WidthOverride::Keyword(WidthKeyword::Auto);
}

/// A style property value. Numbers are pixel lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}px"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

pub type StyleRecord = BTreeMap<String, StyleValue>;

/// Convert a style record to inline style properties. camelCase names
/// (`overflowX`) are accepted and written as CSS names (`overflow-x`).
pub fn style_map(record: &StyleRecord) -> StyleMap {
    record
        .iter()
        .map(|(property, value)| (css_property_name(property), value.to_string()))
        .collect()
}

fn css_property_name(name: &str) -> String {
    let mut css = String::with_capacity(name.len() + 2);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            css.push('-');
            css.push(ch.to_ascii_lowercase());
        } else {
            css.push(ch);
        }
    }
    css
}

fn style(entries: &[(&str, StyleValue)]) -> StyleRecord {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn text(s: &str) -> StyleValue {
    StyleValue::Text(s.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// The table is split before the column at this index (0-based).
    pub index: usize,
    pub container_fixed_class: String,
    #[serde(alias = "containerFixedCSS")]
    pub container_fixed_style: StyleRecord,
    pub container_scroll_class: String,
    #[serde(alias = "containerScrollCSS")]
    pub container_scroll_style: StyleRecord,
    pub wrapper_class: String,
    #[serde(alias = "wrapperCSS")]
    pub wrapper_style: StyleRecord,
    /// Selects rows when reconciling heights.
    pub row_selector: String,
    /// Selects header cells when copying column widths.
    pub header_selector: String,
    #[serde(alias = "widthFixed")]
    pub fixed_width: Option<WidthOverride>,
    #[serde(alias = "widthScroll")]
    pub scroll_width: Option<WidthOverride>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            index: 1,
            container_fixed_class: "columnfreeze-container columnfreeze-container-fixed".into(),
            container_fixed_style: style(&[("display", text("inline-block")), ("float", text("left"))]),
            container_scroll_class: "columnfreeze-container columnfreeze-container-scroll".into(),
            container_scroll_style: style(&[
                ("display", text("inline-block")),
                ("position", text("absolute")),
                ("overflow-x", text("scroll")),
                ("right", text("0")),
            ]),
            wrapper_class: "columnfreeze-wrapper".into(),
            wrapper_style: style(&[
                ("position", text("relative")),
                ("overflow", text("hidden")),
                ("padding-bottom", text("20px")),
            ]),
            row_selector: "tr".into(),
            header_selector: "thead tr:last-child th, thead tr:last-child td".into(),
            fixed_width: None,
            scroll_width: None,
        }
    }
}

impl Settings {
    /// Read one setting by key.
    pub fn get(&self, key: &str) -> Result<Value> {
        let key = canonical_key(key)?;
        let mut record = self.to_record()?;
        Ok(record.remove(key).unwrap_or(Value::Null))
    }

    /// Overwrite one setting by key.
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut record = Map::new();
        record.insert(key.to_string(), value);
        *self = self.merged(&record)?;
        Ok(())
    }

    /// A copy of these settings with every key of `record` overwritten.
    ///
    /// Fails without changing anything if a key is unknown, a value has the
    /// wrong type, or a selector does not parse.
    pub fn merged(&self, record: &Map<String, Value>) -> Result<Settings> {
        let mut base = self.to_record()?;
        for (key, value) in record {
            base.insert(canonical_key(key)?.to_string(), value.clone());
        }

        let merged: Settings = serde_json::from_value(Value::Object(base))
            .map_err(|e| FreezeError::invalid_argument(format!("bad settings record: {e}")))?;
        merged.validate()?;
        Ok(merged)
    }

    fn validate(&self) -> Result<()> {
        for selector in [&self.row_selector, &self.header_selector] {
            Selector::parse(selector).map_err(|e| {
                FreezeError::invalid_argument(format!("bad selector \"{selector}\": {e}"))
            })?;
        }
        Ok(())
    }

    fn to_record(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(FreezeError::invalid_argument(format!(
                "settings serialized to {other}"
            ))),
            Err(e) => Err(FreezeError::invalid_argument(e.to_string())),
        }
    }
}

/// The shapes a configuration call can take.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigArgs {
    /// Only make sure settings exist.
    Ensure,
    Get(String),
    Set(String, Value),
    Merge(Map<String, Value>),
}

impl ConfigArgs {
    /// Classify loosely typed call arguments.
    pub fn from_values(args: &[Value]) -> Result<Self> {
        match args {
            [] | [Value::Null] => Ok(Self::Ensure),
            [Value::String(key)] => Ok(Self::Get(key.clone())),
            [Value::String(key), value] => Ok(Self::Set(key.clone(), value.clone())),
            [Value::Object(record)] => Ok(Self::Merge(record.clone())),
            _ => Err(FreezeError::invalid_argument(
                "unsupported configuration arguments",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_property_name() {
        assert_eq!(css_property_name("overflowX"), "overflow-x");
        assert_eq!(css_property_name("paddingBottom"), "padding-bottom");
        assert_eq!(css_property_name("left"), "left");
    }

    #[test]
    fn test_style_value_display() {
        assert_eq!(StyleValue::Number(0.0).to_string(), "0px");
        assert_eq!(StyleValue::Number(12.5).to_string(), "12.5px");
        assert_eq!(text("scroll").to_string(), "scroll");
    }

    #[test]
    fn test_every_alias_points_at_a_serialized_key() {
        let record = Settings::default().to_record().unwrap();
        for (_, canonical) in KEYS {
            assert!(record.contains_key(*canonical), "{canonical}");
        }
        assert_eq!(record.len(), 11);
    }
}
