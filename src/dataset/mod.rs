//! Flat-file product tables: loading CSV into a [`RawTable`] and writing
//! generated [`ProductRecord`](crate::domain::ProductRecord)s back out.

pub mod reader;
pub mod table;
pub mod writer;

pub use reader::{load_columns, load_head, load_table};
pub use table::RawTable;
pub use writer::write_products;
