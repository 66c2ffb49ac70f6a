//! Column freezing for tables.
//!
//! A frozen table is replaced in its document by a wrapper holding two tables
//! side by side: a fixed one with the leading columns and a horizontally
//! scrolling one with the rest. Column widths are copied from the original
//! header and row heights are reconciled so the pair reads as one grid.
//!
//! ```text
//! wrapper
//!     container (fixed)
//!         table (fixed columns)
//!     container (scroll)
//!         table (scrolling columns)
//! ```

pub mod action;
pub mod controller;
pub mod error;
pub mod registry;
pub mod settings;
pub mod sync;

pub use action::{Action, ColumnFreeze, Outcome};
pub use controller::Controller;
pub use error::{FreezeError, Result};
pub use registry::Registry;
pub use settings::{ConfigArgs, Settings, WidthKeyword, WidthOverride};
pub use sync::ColumnWidths;
