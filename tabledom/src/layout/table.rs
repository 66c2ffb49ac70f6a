use std::collections::HashMap;

use super::block::{intrinsic_size, layout_flow};
use super::{LayoutResult, Rect};
use crate::element::{Content, Element};
use crate::grid::{GridCell, TableGrid};
use crate::text::{line_count, to_cells};

/// Auto table layout.
///
/// Column width is the widest explicit width among single-column cells of
/// that column, or the widest content when none is explicit. Row height is
/// the tallest single-row cell after wrapping its text to the column width.
/// Spanning cells only grow the last column/row they cover. A table wider
/// than its columns keeps the slack after the last column.
pub(super) fn layout_table(table: &Element, x: u16, y: u16, result: &mut LayoutResult) -> Rect {
    let grid = TableGrid::build(table);
    let cols = column_widths(&grid);
    let rows = row_heights(&grid, &cols);

    let col_x = offsets(x, &cols);
    let row_y = offsets(y, &rows);
    let grid_width: u16 = cols.iter().fold(0, |acc, w| acc.saturating_add(*w));
    let grid_height: u16 = rows.iter().fold(0, |acc, h| acc.saturating_add(*h));

    let mut row_rects: HashMap<&str, Rect> = HashMap::new();
    for (r, grid_row) in grid.rows.iter().enumerate() {
        let row_rect = Rect::new(x, row_y[r], grid_width, rows[r]);
        row_rects.insert(grid_row.row.id.as_str(), row_rect);
        result.insert(grid_row.row.id.clone(), row_rect);

        let children = grid_row.row.children();
        for cell in &grid_row.cells {
            let last_row = (r + cell.rowspan).min(grid_row.group_end);
            let rect = Rect::new(
                col_x[cell.col],
                row_y[r],
                span_total(&cols, cell.col, cell.col + cell.colspan),
                span_total(&rows, r, last_row),
            );
            place_cell(&children[cell.child], rect, result);
        }
    }

    // Sections cover the rows they contain
    for section in table.children().iter().filter(|c| c.tag.is_section()) {
        let rect = section
            .children()
            .iter()
            .filter_map(|row| row_rects.get(row.id.as_str()).copied())
            .reduce(Rect::union)
            .unwrap_or(Rect::new(x, y, grid_width, 0));
        result.insert(section.id.clone(), rect);
    }

    let width = table.width.fixed().unwrap_or(0).max(grid_width);
    let height = table.height.fixed().unwrap_or(0).max(grid_height);
    let rect = Rect::new(x, y, width, height);
    result.insert(table.id.clone(), rect);

    log::trace!(
        "[layout] table {}: {} columns {:?}, {} rows",
        table.id,
        cols.len(),
        cols,
        rows.len()
    );

    rect
}

fn place_cell(cell: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(cell.id.clone(), rect);
    if let Content::Children(children) = &cell.content {
        let padding = cell.padding;
        layout_flow(
            children.iter(),
            rect.x.saturating_add(padding.left),
            rect.y.saturating_add(padding.top),
            rect.width.saturating_sub(padding.horizontal_total()),
            result,
        );
    }
}

fn cells_by_span<'g>(grid: &'g TableGrid<'_>) -> Vec<(&'g GridCell, &'g Element)> {
    let mut cells: Vec<_> = grid
        .rows
        .iter()
        .flat_map(|row| {
            let children = row.row.children();
            row.cells.iter().map(move |c| (c, &children[c.child]))
        })
        .collect();
    cells.sort_by_key(|(c, _)| c.colspan);
    cells
}

fn column_widths(grid: &TableGrid<'_>) -> Vec<u16> {
    let mut explicit: Vec<Option<u16>> = vec![None; grid.columns];
    let mut content = vec![0u16; grid.columns];

    let cells = cells_by_span(grid);
    for (cell, element) in cells.iter().filter(|(c, _)| c.colspan == 1) {
        match element.width.fixed() {
            Some(w) => explicit[cell.col] = Some(explicit[cell.col].map_or(w, |e| e.max(w))),
            None => content[cell.col] = content[cell.col].max(intrinsic_size(element).0),
        }
    }

    let mut widths: Vec<u16> = explicit
        .iter()
        .zip(&content)
        .map(|(e, c)| e.unwrap_or(*c))
        .collect();

    for (cell, element) in cells.iter().filter(|(c, _)| c.colspan > 1) {
        let end = cell.col + cell.colspan;
        let needed = intrinsic_size(element).0;
        let have = span_total(&widths, cell.col, end);
        if needed > have {
            widths[end - 1] = widths[end - 1].saturating_add(needed - have);
        }
    }

    widths
}

fn row_heights(grid: &TableGrid<'_>, cols: &[u16]) -> Vec<u16> {
    let mut heights: Vec<u16> = grid
        .rows
        .iter()
        .map(|row| row.row.height.fixed().unwrap_or(0))
        .collect();

    let needed = |cell: &GridCell, element: &Element| -> u16 {
        let width = span_total(cols, cell.col, cell.col + cell.colspan);
        let content = cell_content_height(element, width);
        element.height.fixed().map_or(content, |h| h.max(content))
    };

    for (r, row) in grid.rows.iter().enumerate() {
        let children = row.row.children();
        for cell in row.cells.iter().filter(|c| c.rowspan == 1) {
            heights[r] = heights[r].max(needed(cell, &children[cell.child]));
        }
    }

    for (r, row) in grid.rows.iter().enumerate() {
        let children = row.row.children();
        for cell in row.cells.iter().filter(|c| c.rowspan > 1) {
            let end = (r + cell.rowspan).min(row.group_end);
            let want = needed(cell, &children[cell.child]);
            let have = span_total(&heights, r, end);
            if want > have {
                heights[end - 1] = heights[end - 1].saturating_add(want - have);
            }
        }
    }

    heights
}

fn cell_content_height(cell: &Element, width: u16) -> u16 {
    let padding = cell.padding;
    let inner = width.saturating_sub(padding.horizontal_total());
    let content = match &cell.content {
        Content::Text(text) => to_cells(line_count(text, usize::from(inner))),
        Content::Children(_) => {
            let (_, h) = intrinsic_size(cell);
            h.saturating_sub(padding.vertical_total())
        }
        Content::None => 0,
    };
    content.saturating_add(padding.vertical_total())
}

fn span_total(sizes: &[u16], start: usize, end: usize) -> u16 {
    sizes[start..end.min(sizes.len())]
        .iter()
        .fold(0, |acc, s| acc.saturating_add(*s))
}

fn offsets(origin: u16, sizes: &[u16]) -> Vec<u16> {
    let mut pos = origin;
    sizes
        .iter()
        .map(|size| {
            let start = pos;
            pos = pos.saturating_add(*size);
            start
        })
        .collect()
}
