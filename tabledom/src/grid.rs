//! Display-column resolution for table rows.
//!
//! Cells are placed left to right, skipping positions already taken by a
//! `rowspan` from an earlier row of the same section. Row spans never cross
//! section boundaries.

use std::collections::HashSet;

use crate::element::Element;
use crate::types::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridCell {
    /// Index of the cell among its row's children.
    pub child: usize,
    /// First display column the cell occupies.
    pub col: usize,
    pub colspan: usize,
    pub rowspan: usize,
}

#[derive(Debug)]
pub(crate) struct GridRow<'a> {
    pub row: &'a Element,
    pub cells: Vec<GridCell>,
    /// Global index one past the last row of this row's section.
    pub group_end: usize,
}

#[derive(Debug)]
pub(crate) struct TableGrid<'a> {
    /// Rows in document order across all sections.
    pub rows: Vec<GridRow<'a>>,
    pub columns: usize,
}

impl<'a> TableGrid<'a> {
    pub fn build(table: &'a Element) -> Self {
        let mut rows = Vec::new();
        let mut columns = 0;

        for group in row_groups(table) {
            let group_end = rows.len() + group.len();
            let mut occupied: HashSet<(usize, usize)> = HashSet::new();
            for (r, row) in group.into_iter().enumerate() {
                let mut col = 0;
                let mut cells = Vec::new();
                for (child, cell) in row.children().iter().enumerate() {
                    if !cell.tag.is_cell() {
                        continue;
                    }
                    while occupied.contains(&(r, col)) {
                        col += 1;
                    }
                    let colspan = usize::from(cell.colspan.max(1));
                    let rowspan = usize::from(cell.rowspan.max(1));
                    for dr in 0..rowspan {
                        for dc in 0..colspan {
                            occupied.insert((r + dr, col + dc));
                        }
                    }
                    cells.push(GridCell {
                        child,
                        col,
                        colspan,
                        rowspan,
                    });
                    col += colspan;
                    columns = columns.max(col);
                }
                rows.push(GridRow {
                    row,
                    cells,
                    group_end,
                });
            }
        }

        Self { rows, columns }
    }
}

/// Rows of a table grouped by section. Rows placed directly under the table
/// form their own groups between sections.
pub(crate) fn row_groups(table: &Element) -> Vec<Vec<&Element>> {
    let mut groups: Vec<Vec<&Element>> = Vec::new();
    let mut loose: Vec<&Element> = Vec::new();

    for child in table.children() {
        match child.tag {
            Tag::Tr => loose.push(child),
            tag if tag.is_section() => {
                if !loose.is_empty() {
                    groups.push(std::mem::take(&mut loose));
                }
                groups.push(
                    child
                        .children()
                        .iter()
                        .filter(|row| row.tag == Tag::Tr)
                        .collect(),
                );
            }
            _ => {}
        }
    }
    if !loose.is_empty() {
        groups.push(loose);
    }

    groups
}
