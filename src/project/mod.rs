//! Everything around the merge: versions, artifacts, configuration and the
//! on-disk output cache.

mod cache;
mod config;
mod coordinate;
mod hash_store;
#[cfg(feature = "archive")]
mod provider;
mod version;

pub use cache::{ArtifactResolver, DependencyCache, LocalRepository};
pub use config::{CODE_VERSION, ExportConfig, ProviderConfig};
pub use coordinate::Coordinate;
pub use hash_store::{HashStore, sha256_hex};
#[cfg(feature = "archive")]
pub use provider::MappingsProvider;
pub use version::MappingVersion;
