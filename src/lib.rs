//! # namebridge
//!
//! Merges three name layers for a compiled program's symbols into rename
//! tables keyed by intermediate identifiers:
//!
//! - obfuscated → intermediate (TSRG/SRG export)
//! - readable → obfuscated (ProGuard mappings)
//! - a sparse curated database of readable names and documentation
//!
//! The result is five CSV tables (`packages`, `classes`, `fields`, `methods`,
//! `params`), each `searge,name,desc`, packed into a ZIP archive.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → versions, artifact resolution, output cache
//!   ↓
//! merge     → composition, parameter ids, record emission
//!   ↓
//! export    → tables, CSV encoding, archives
//! curated   → curated database
//! mapping   → mapping tree, readers, reverse/chain/remap
//!   ↓
//! base      → identifier rules and constants
//! ```

// ============================================================================
// MODULES (dependency order: base → mapping/curated/export → merge → project)
// ============================================================================

/// Identifier classification and shared constants
pub mod base;

/// Errors shared by every module
pub mod error;

/// Mapping documents and their algebra
pub mod mapping;

/// Curated name/documentation database
pub mod curated;

/// Output tables and archives
pub mod export;

/// The merge itself
pub mod merge;

/// Versions, artifacts, configuration and caching
pub mod project;

pub use error::{MergeError, Result};
pub use export::{MappingTables, Row, Table, TableKind};
pub use mapping::MappingFile;
pub use merge::{ExportMode, MergeInputs, merge};
pub use project::MappingVersion;
