//! Geometry: where every element of a tree ends up and how big it is.
//!
//! [`LayoutEngine`] is a small box model: blocks, inline-blocks,
//! absolutely positioned boxes and auto-sized tables. All sizes are outer
//! (border-box) sizes in whole pixels.

mod block;
mod rect;
mod table;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::Element;

pub type LayoutResult = HashMap<String, Rect>;

/// Read-only provider of rendered element geometry.
pub trait Geometry {
    /// Lay out the tree under `root` and report every element's rect by ID.
    fn measure(&self, root: &Element) -> LayoutResult;
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    pub viewport: Rect,
}

impl LayoutEngine {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: Rect::from_size(width, height),
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(120, 40)
    }
}

impl Geometry for LayoutEngine {
    fn measure(&self, root: &Element) -> LayoutResult {
        layout(root, self.viewport)
    }
}

pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let rect = block::layout_element(root, available.x, available.y, available.width, &mut result);
    log::trace!(
        "[layout] {} laid out at {}x{} ({} boxes)",
        root.id,
        rect.width,
        rect.height,
        result.len()
    );
    result
}
