//! The curated name/documentation database.
//!
//! A sparse overlay keyed by readable-layer names: only symbols somebody
//! documented or renamed have records. Absence of a record is the normal
//! case, not an error.
//!
//! ```text
//! {
//!   "version": "1.x",
//!   "packages": [{ "name", "javadoc" }],
//!   "classes":  [{ "name", "javadoc",
//!                  "fields":  [{ "name", "descriptor", "javadoc" }],
//!                  "methods": [{ "name", "descriptor", "javadoc",
//!                                "parameters": [{ "index", "name", "javadoc" }] }] }]
//! }
//! ```

mod javadoc;
mod model;

pub use javadoc::{Javadoc, doc_text};
pub use model::{ClassData, CuratedDatabase, FieldData, MethodData, PackageData, ParameterData};

#[cfg(feature = "archive")]
impl CuratedDatabase {
    /// Read the database from the `parchment.json` entry of an archive.
    pub fn from_archive(bytes: &[u8]) -> crate::error::Result<Self> {
        let json = crate::export::read_entry(bytes, crate::base::constants::CURATED_ENTRY)?;
        Self::from_json(&json)
    }
}
