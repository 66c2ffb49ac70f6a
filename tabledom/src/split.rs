//! Splitting a table into two tables at a display column.

use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::grid::{GridCell, TableGrid};
use crate::types::Tag;

/// Number of display columns in `table`, accounting for colspan and rowspan.
pub fn column_count(table: &Element) -> usize {
    TableGrid::build(table).columns
}

/// Split `table` before display column `index`.
///
/// Both returned tables are deep copies with fresh IDs and contain every
/// section and row of the original, in order. Columns `[0, index)` go to the
/// first table, the rest to the second. A cell straddling the boundary stays on
/// the left with a trimmed colspan, and an empty filler cell covering the
/// remaining columns is added on the right.
pub fn split_table(table: &Element, index: usize) -> (Element, Element) {
    let grid = TableGrid::build(table);
    let placements: HashMap<&str, &[GridCell]> = grid
        .rows
        .iter()
        .map(|r| (r.row.id.as_str(), r.cells.as_slice()))
        .collect();

    let mut left = table.shallow_clone();
    let mut right = table.shallow_clone();

    for child in table.children() {
        match child.tag {
            Tag::Tr => {
                let (l, r) = split_row(child, &placements, index);
                left.append(l);
                right.append(r);
            }
            tag if tag.is_section() => {
                let mut l_section = child.shallow_clone();
                let mut r_section = child.shallow_clone();
                for row in child.children() {
                    if row.tag == Tag::Tr {
                        let (l, r) = split_row(row, &placements, index);
                        l_section.append(l);
                        r_section.append(r);
                    } else {
                        l_section.append(row.deep_clone());
                    }
                }
                left.append(l_section);
                right.append(r_section);
            }
            _ => left.append(child.deep_clone()),
        }
    }

    log::trace!(
        "[split] {} at column {} of {} -> {} | {}",
        table.id,
        index,
        grid.columns,
        left.id,
        right.id
    );

    (left, right)
}

fn split_row(
    row: &Element,
    placements: &HashMap<&str, &[GridCell]>,
    index: usize,
) -> (Element, Element) {
    let mut left = row.shallow_clone();
    let mut right = row.shallow_clone();
    // Rows must stay rows even when one side ends up with no cells
    left.content = Content::Children(Vec::new());
    right.content = Content::Children(Vec::new());

    let cells = placements.get(row.id.as_str()).copied().unwrap_or(&[]);
    let children = row.children();

    for placement in cells {
        let cell = &children[placement.child];
        let start = placement.col;
        let end = start + placement.colspan;

        if end <= index {
            left.append(cell.deep_clone());
        } else if start >= index {
            right.append(cell.deep_clone());
        } else {
            let mut head = cell.deep_clone();
            head.colspan = span(index - start);
            let mut filler = cell.shallow_clone();
            filler.content = Content::None;
            filler.colspan = span(end - index);
            left.append(head);
            right.append(filler);
        }
    }

    (left, right)
}

fn span(columns: usize) -> u16 {
    u16::try_from(columns).unwrap_or(u16::MAX).max(1)
}
