//! Mapping documents as an invertible, composable tree.
//!
//! Both name layers the merge consumes (obfuscated→intermediate and
//! readable→obfuscated) are loaded into the same [`MappingFile`] model, which
//! supports the operations the composer needs:
//!
//! - [`MappingFile::reverse`] - swap the two namespaces
//! - [`MappingFile::chain`] - compose with a second mapping
//! - [`MappingFile::remap_descriptor`] - rewrite descriptors across namespaces
//!
//! ## Usage
//!
//! ```ignore
//! use namebridge::mapping::MappingFile;
//!
//! let obf_to_srg = MappingFile::load(&std::fs::read("joined.tsrg")?)?;
//! let srg_to_obf = obf_to_srg.reverse();
//! ```

pub mod descriptor;
mod format;
mod model;
mod ops;
mod proguard;
mod srg;
mod tsrg;

pub use format::MappingFormat;
pub use model::{Class, Field, MappingFile, Metadata, Method, Parameter, Package, method_key};

use crate::error::{MergeError, Result};

impl MappingFile {
    /// Load a mapping document, detecting its format from the content.
    ///
    /// An empty document loads as an empty mapping.
    pub fn load(bytes: &[u8]) -> Result<MappingFile> {
        let text = decode(bytes)?;
        match MappingFormat::detect(text) {
            Some(format) => Self::parse_as(text, format),
            None => Ok(MappingFile::new()),
        }
    }

    /// Load a mapping document in a known format.
    pub fn load_as(bytes: &[u8], format: MappingFormat) -> Result<MappingFile> {
        Self::parse_as(decode(bytes)?, format)
    }

    fn parse_as(text: &str, format: MappingFormat) -> Result<MappingFile> {
        let file = match format {
            MappingFormat::Tsrg => tsrg::parse_v1(text)?,
            MappingFormat::Tsrg2 => tsrg::parse_v2(text)?,
            MappingFormat::Srg => srg::parse(text)?,
            MappingFormat::ProGuard => proguard::parse(text)?,
        };
        tracing::debug!(
            format = %format,
            classes = file.classes.len(),
            methods = file.method_count(),
            "loaded mapping document"
        );
        Ok(file)
    }
}

fn decode(bytes: &[u8]) -> Result<&str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    std::str::from_utf8(bytes)
        .map_err(|e| MergeError::parse("mapping", 0, format!("invalid UTF-8: {e}")))
}
