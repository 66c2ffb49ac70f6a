pub mod document;
pub mod element;
mod grid;
pub mod layout;
pub mod markup;
pub mod selector;
pub mod split;
pub mod text;
pub mod types;

pub use document::{DomError, Document, Slot, Substitution};
pub use element::Element;
pub use layout::{Geometry, LayoutEngine, LayoutResult, Rect};
pub use markup::{to_html, MarkupOptions};
pub use selector::{
    select, select_ids, select_ids_in_table, select_in_table, Selector, SelectorError,
};
pub use split::{column_count, split_table};
pub use types::*;
