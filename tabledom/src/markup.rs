//! HTML-like serialization of element trees.

use std::fmt::Write;

use crate::element::{Content, Element};
use crate::types::Size;

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupOptions {
    /// Emit `id` attributes. Off when comparing structure across rebuilds,
    /// since copies get fresh IDs.
    pub ids: bool,
    /// Indent nested elements by two spaces per level.
    pub pretty: bool,
}

pub fn to_html(element: &Element, options: MarkupOptions) -> String {
    let mut out = String::new();
    write_element(&mut out, element, options, 0);
    out
}

fn write_element(out: &mut String, element: &Element, options: MarkupOptions, depth: usize) {
    let tag = element.tag.name();
    if options.pretty {
        out.push_str(&"  ".repeat(depth));
    }

    out.push('<');
    out.push_str(tag);
    if options.ids {
        let _ = write!(out, " id=\"{}\"", escape(&element.id));
    }
    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&element.classes.join(" ")));
    }
    if element.colspan > 1 {
        let _ = write!(out, " colspan=\"{}\"", element.colspan);
    }
    if element.rowspan > 1 {
        let _ = write!(out, " rowspan=\"{}\"", element.rowspan);
    }
    let style = style_attribute(element);
    if !style.is_empty() {
        let _ = write!(out, " style=\"{}\"", escape(&style));
    }
    out.push('>');

    match &element.content {
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                if options.pretty {
                    out.push('\n');
                }
                write_element(out, child, options, depth + 1);
            }
            if options.pretty && !children.is_empty() {
                out.push('\n');
                out.push_str(&"  ".repeat(depth));
            }
        }
        Content::None => {}
    }

    let _ = write!(out, "</{tag}>");
}

fn style_attribute(element: &Element) -> String {
    let mut parts: Vec<String> = element
        .style
        .iter()
        .map(|(p, v)| format!("{p}: {v}"))
        .collect();
    if let Size::Fixed(w) = element.width {
        parts.push(format!("width: {w}px"));
    }
    if let Size::Fixed(h) = element.height {
        parts.push(format!("height: {h}px"));
    }
    parts.join("; ")
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
