//! CSV encoding of output tables.
//!
//! Comma separated, quoted only where needed, `\n` line endings, UTF-8
//! without a byte-order mark.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::table::Table;
use crate::error::{MergeError, Result};

/// Encode a table, header included.
pub fn encode_table(table: &Table) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(Table::header())?;
    for row in table.rows() {
        writer.write_record(row.fields())?;
    }

    writer
        .into_inner()
        .map_err(|e| MergeError::csv(format!("Failed to flush table: {e}")))
}
