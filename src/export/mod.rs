//! Output tables and their serialized form.
//!
//! The merge fills a [`MappingTables`] value; this module turns it into CSV
//! and packs the non-empty tables into a ZIP archive:
//!
//! ```text
//! output.zip
//! ├── classes.csv
//! ├── fields.csv
//! ├── methods.csv
//! ├── params.csv
//! └── packages.csv    (each: searge,name,desc)
//! ```

#[cfg(feature = "archive")]
mod archive;
mod encode;
mod table;

#[cfg(feature = "archive")]
pub use archive::{entry_names, read_entry, write_entries, write_tables, write_tables_to};
pub use encode::encode_table;
pub use table::{MappingTables, Row, Table, TableKind};
