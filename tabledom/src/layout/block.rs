use super::{table, LayoutResult, Rect};
use crate::element::{Content, Element};
use crate::text::{line_count, max_line_width, to_cells};
use crate::types::Tag;

pub(super) fn layout_element(
    element: &Element,
    x: u16,
    y: u16,
    available_width: u16,
    result: &mut LayoutResult,
) -> Rect {
    if element.tag == Tag::Table {
        return table::layout_table(element, x, y, result);
    }
    layout_block(element, x, y, available_width, None, result)
}

/// Laid out side by side instead of stacked.
fn is_inline(element: &Element) -> bool {
    element.style.is("display", "inline-block")
        || element
            .style
            .get("float")
            .is_some_and(|f| f == "left" || f == "right")
}

fn is_absolute(element: &Element) -> bool {
    element.style.is("position", "absolute")
}

fn layout_block(
    element: &Element,
    x: u16,
    y: u16,
    available_width: u16,
    forced_width: Option<u16>,
    result: &mut LayoutResult,
) -> Rect {
    let padding = element.padding;
    let padding_bottom = element.style.px("padding-bottom").unwrap_or(padding.bottom);
    let shrink_to_fit = is_inline(element) || is_absolute(element);
    let explicit_width = element.width.fixed().or(forced_width);

    let inner_x = x.saturating_add(padding.left);
    let inner_y = y.saturating_add(padding.top);
    let inner_available = explicit_width
        .unwrap_or(available_width)
        .saturating_sub(padding.horizontal_total());

    // Flow content first; shrink-to-fit boxes take their width from it
    let (content_width, flow_bottom) = match &element.content {
        Content::Children(children) => layout_flow(
            children.iter().filter(|c| !is_absolute(c)),
            inner_x,
            inner_y,
            inner_available,
            result,
        ),
        Content::Text(text) => {
            let text_width = to_cells(max_line_width(text));
            let wrap_at = if shrink_to_fit && explicit_width.is_none() {
                text_width
            } else {
                inner_available
            };
            let lines = to_cells(line_count(text, usize::from(wrap_at)));
            (text_width, inner_y.saturating_add(lines))
        }
        Content::None => (0, inner_y),
    };

    let width = match explicit_width {
        Some(w) => w,
        None if shrink_to_fit => content_width.saturating_add(padding.horizontal_total()),
        None => available_width,
    };

    let mut bottom = flow_bottom;
    for child in element.children().iter().filter(|c| is_absolute(c)) {
        let rect = layout_absolute(child, x, y, width, result);
        bottom = bottom.max(rect.bottom());
    }

    let height = element
        .height
        .fixed()
        .unwrap_or_else(|| bottom.saturating_sub(y).saturating_add(padding_bottom));

    let rect = Rect::new(x, y, width, height);
    result.insert(element.id.clone(), rect);
    rect
}

/// Place an absolutely positioned child relative to its parent's box.
fn layout_absolute(
    child: &Element,
    parent_x: u16,
    parent_y: u16,
    parent_width: u16,
    result: &mut LayoutResult,
) -> Rect {
    let left = child.style.px("left");
    let right = child.style.px("right");
    let top = child.style.px("top").unwrap_or(0);
    let y = parent_y.saturating_add(top);

    let forced_width = match (left, right) {
        (Some(l), Some(r)) if child.width.fixed().is_none() => {
            Some(parent_width.saturating_sub(l.saturating_add(r)))
        }
        _ => None,
    };

    let x = match (left, right) {
        (Some(l), _) => parent_x.saturating_add(l),
        (None, Some(r)) => {
            // Right-anchored: measure first, then place against the right edge
            let measured = layout_block(child, 0, 0, parent_width, None, &mut LayoutResult::new());
            parent_x.saturating_add(parent_width.saturating_sub(r.saturating_add(measured.width)))
        }
        (None, None) => parent_x,
    };

    layout_block(child, x, y, parent_width, forced_width, result)
}

/// Stack block children vertically and run inline children side by side.
/// Returns the content width and the bottom edge of the flow.
pub(super) fn layout_flow<'a>(
    children: impl Iterator<Item = &'a Element>,
    inner_x: u16,
    inner_y: u16,
    inner_width: u16,
    result: &mut LayoutResult,
) -> (u16, u16) {
    let mut cursor_y = inner_y;
    let mut line_x = inner_x;
    let mut line_height = 0u16;
    let mut extent = inner_x;

    for child in children {
        let rect = if is_inline(child) {
            let remaining = inner_width.saturating_sub(line_x - inner_x);
            let rect = layout_element(child, line_x, cursor_y, remaining, result);
            line_x = rect.right();
            line_height = line_height.max(rect.height);
            rect
        } else {
            if line_x > inner_x || line_height > 0 {
                cursor_y = cursor_y.saturating_add(line_height);
                line_x = inner_x;
                line_height = 0;
            }
            let rect = layout_element(child, inner_x, cursor_y, inner_width, result);
            cursor_y = rect.bottom();
            rect
        };
        extent = extent.max(rect.right());
    }

    (extent - inner_x, cursor_y.saturating_add(line_height))
}

/// Content size of an element without placing it, used for table cells.
pub(super) fn intrinsic_size(element: &Element) -> (u16, u16) {
    let (width, height) = match &element.content {
        Content::Text(text) => (
            to_cells(max_line_width(text)),
            to_cells(line_count(text, usize::MAX)),
        ),
        Content::Children(children) => children
            .iter()
            .map(intrinsic_size)
            .fold((0u16, 0u16), |(w, h), (cw, ch)| (w.max(cw), h.saturating_add(ch))),
        Content::None => (0, 0),
    };
    (
        element
            .width
            .fixed()
            .unwrap_or(width.saturating_add(element.padding.horizontal_total())),
        element
            .height
            .fixed()
            .unwrap_or(height.saturating_add(element.padding.vertical_total())),
    )
}
