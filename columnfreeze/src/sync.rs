//! Width and height reconciliation between the fixed and scroll tables.
//!
//! Both passes read geometry from a single [`LayoutResult`] snapshot. Widths
//! are read from the original table while it is still in the document;
//! heights are read from the split tables once they sit in their containers.
//! Forcing widths can make text reflow, so heights are measured after widths
//! are applied and reconciled in one pass, not iterated to a fixed point.

use tabledom::{
    select_ids_in_table, select_in_table, Document, Element, LayoutResult, Selector, Size,
};

use crate::error::{FreezeError, Result};

/// Accumulated header widths of each side, including the 1px allowance
/// against sub-pixel wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub fixed: u16,
    pub scroll: u16,
}

impl ColumnWidths {
    const BASELINE: u16 = 1;
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            fixed: Self::BASELINE,
            scroll: Self::BASELINE,
        }
    }
}

/// Copy the rendered width of every original header cell onto the matching
/// header cell of the fixed or scroll table. Cells of tables nested inside
/// a cell are never headers of the outer table.
///
/// Header `i < index` maps to fixed header `i`; header `i >= index` maps to
/// scroll header `i - index`. If the selector matches nothing, both totals
/// stay at their baseline.
pub fn copy_column_widths(
    layout: &LayoutResult,
    original: &Element,
    fixed: &mut Element,
    scroll: &mut Element,
    header_selector: &Selector,
    index: usize,
) -> ColumnWidths {
    let headers = select_ids_in_table(original, header_selector);
    let fixed_headers = select_ids_in_table(fixed, header_selector);
    let scroll_headers = select_ids_in_table(scroll, header_selector);
    let mut widths = ColumnWidths::default();

    for (i, header) in headers.iter().enumerate() {
        let Some(rect) = layout.get(header) else {
            log::debug!("[sync] header {header} has no geometry, treating as 0px");
            continue;
        };
        let width = rect.width;

        let (table, target, total) = if i < index {
            (&mut *fixed, fixed_headers.get(i), &mut widths.fixed)
        } else {
            (&mut *scroll, scroll_headers.get(i - index), &mut widths.scroll)
        };
        *total = total.saturating_add(width);

        let cell = match target {
            Some(id) => table.find_mut(id),
            None => None,
        };
        match cell {
            Some(cell) => cell.width = Size::Fixed(width),
            None => log::debug!("[sync] no split header for original header #{i}"),
        }
    }

    log::trace!(
        "[sync] copied {} header widths (fixed {}px, scroll {}px)",
        headers.len(),
        widths.fixed,
        widths.scroll
    );

    widths
}

/// Force row `i` of both split tables to the taller of the two, for every
/// row `i` of the original table. Rows of nested tables are not counted.
///
/// Returns the number of rows reconciled.
///
/// # Panics
///
/// If either split table has a different number of rows than the original.
/// The splitter guarantees equal counts, so a mismatch is an integration bug.
pub fn copy_row_heights(
    doc: &mut Document,
    layout: &LayoutResult,
    original: &Element,
    fixed_id: &str,
    scroll_id: &str,
    row_selector: &Selector,
) -> Result<usize> {
    let count = select_in_table(original, row_selector).len();
    let fixed_rows = rows_of(doc, fixed_id, row_selector)?;
    let scroll_rows = rows_of(doc, scroll_id, row_selector)?;
    assert_eq!(fixed_rows.len(), count, "fixed table row count differs from original");
    assert_eq!(scroll_rows.len(), count, "scroll table row count differs from original");

    let height_of = |id: &str| layout.get(id).map_or(0, |r| r.height);

    for (fixed_row, scroll_row) in fixed_rows.iter().zip(&scroll_rows) {
        let height = height_of(fixed_row.as_str()).max(height_of(scroll_row.as_str()));
        for id in [fixed_row, scroll_row] {
            if let Some(row) = doc.find_mut(id) {
                row.height = Size::Fixed(height);
            }
        }
    }

    log::trace!("[sync] reconciled {count} row heights");

    Ok(count)
}

fn rows_of(doc: &Document, table_id: &str, row_selector: &Selector) -> Result<Vec<String>> {
    let table = doc
        .find(table_id)
        .ok_or_else(|| FreezeError::NotInDocument(table_id.to_string()))?;
    Ok(select_ids_in_table(table, row_selector))
}
