mod edges;
mod enums;
mod style;

pub use edges::Edges;
pub use enums::{Size, Tag};
pub use style::{parse_px, StyleMap};
