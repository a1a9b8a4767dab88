//! ZIP container I/O.
//!
//! Reading is limited to "give me this entry's bytes". Writing produces a
//! deterministic archive: fixed entry order and a fixed timestamp, so equal
//! tables always yield byte-identical archives.

use std::io::{Cursor, Read, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

use super::encode::encode_table;
use super::table::{MappingTables, TableKind};
use crate::error::{MergeError, Result};

/// Read one named entry from an archive.
pub fn read_entry(archive: &[u8], name: &str) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(archive))
        .map_err(|e| MergeError::archive(format!("Failed to open archive: {e}")))?;

    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(MergeError::missing_entry(name));
        }
        Err(e) => {
            return Err(MergeError::archive(format!("Failed to read {name}: {e}")));
        }
    };

    let mut content = Vec::new();
    entry
        .read_to_end(&mut content)
        .map_err(|e| MergeError::archive(format!("Failed to read {name}: {e}")))?;
    Ok(content)
}

/// Names of all entries in an archive, in stored order.
pub fn entry_names(archive: &[u8]) -> Result<Vec<String>> {
    let archive = ZipArchive::new(Cursor::new(archive))
        .map_err(|e| MergeError::archive(format!("Failed to open archive: {e}")))?;
    Ok(archive.file_names().map(str::to_string).collect())
}

/// Write named entries into a new archive.
pub fn write_entries<'a>(
    entries: impl IntoIterator<Item = (&'a str, &'a [u8])>,
) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    let mut zip = ZipWriter::new(&mut buffer);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    for (name, content) in entries {
        zip.start_file(name, options)
            .map_err(|e| MergeError::archive(format!("Failed to create {name}: {e}")))?;
        zip.write_all(content)
            .map_err(|e| MergeError::archive(format!("Failed to write {name}: {e}")))?;
    }

    zip.finish()
        .map_err(|e| MergeError::archive(format!("Failed to finalize archive: {e}")))?;
    Ok(buffer.into_inner())
}

/// Encode all non-empty tables into an archive.
///
/// Tables holding only their header are omitted entirely.
pub fn write_tables(tables: &MappingTables) -> Result<Vec<u8>> {
    let mut encoded = Vec::new();
    for kind in TableKind::WRITE_ORDER {
        let table = tables.get(kind);
        if table.is_empty() {
            tracing::debug!(entry = kind.file_name(), "skipping empty table");
            continue;
        }
        encoded.push((kind.file_name(), encode_table(table)?));
    }

    write_entries(
        encoded
            .iter()
            .map(|(name, bytes)| (*name, bytes.as_slice())),
    )
}

/// Write the tables archive to `path`, creating parent directories.
pub fn write_tables_to(tables: &MappingTables, path: &Path) -> Result<()> {
    let bytes = write_tables(tables)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
