//! Table assertion helpers.

use namebridge::export::{MappingTables, Row, Table, TableKind, encode_table, read_entry};

/// Rows of a table as `(searge, name, desc)` tuples for compact comparison.
pub fn rows(table: &Table) -> Vec<(&str, &str, &str)> {
    table
        .rows()
        .iter()
        .map(|r| (r.searge.as_str(), r.name.as_str(), r.desc.as_str()))
        .collect()
}

/// Assert a row with `searge` exists and return it.
pub fn get_row<'a>(table: &'a Table, searge: &str) -> &'a Row {
    table
        .find(searge)
        .unwrap_or_else(|| panic!("Expected a row for '{}', got {:?}", searge, rows(table)))
}

/// Assert no row is keyed by `searge`.
pub fn assert_no_row(table: &Table, searge: &str) {
    assert!(
        table.find(searge).is_none(),
        "Expected no row for '{}', got {:?}",
        searge,
        rows(table)
    );
}

/// CSV text of one table, header included.
pub fn csv_text(tables: &MappingTables, kind: TableKind) -> String {
    String::from_utf8(encode_table(tables.get(kind)).unwrap()).unwrap()
}

/// CSV text of one archive entry.
pub fn archive_entry_text(archive: &[u8], name: &str) -> String {
    String::from_utf8(read_entry(archive, name).unwrap()).unwrap()
}
