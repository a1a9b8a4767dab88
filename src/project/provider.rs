//! Resolve, merge and cache: from a version string to a tables archive.
//!
//! ```text
//! "1.20.1-2023.09.06-1.20.1"
//!        │ MappingVersion
//!        ▼
//! readable mappings ─┐
//! export archive ────┼─ HashStore up to date? ── yes ─→ cached archive
//! curated archive ───┘             │ no
//!                                  ▼
//!                    MergeInputs → merge → write_tables_to + save hashes
//! ```

use std::fs;
use std::path::PathBuf;

use tracing::info;

use super::cache::{ArtifactResolver, DependencyCache};
use super::config::ProviderConfig;
use super::coordinate::Coordinate;
use super::hash_store::HashStore;
use super::version::MappingVersion;
use crate::error::{MergeError, Result};
use crate::export::write_tables_to;
use crate::merge::{MergeInputs, merge};

pub struct MappingsProvider<R> {
    config: ProviderConfig,
    dependencies: DependencyCache<R>,
}

impl<R: ArtifactResolver> MappingsProvider<R> {
    pub fn new(resolver: R) -> Self {
        Self::with_config(resolver, ProviderConfig::default())
    }

    pub fn with_config(resolver: R, config: ProviderConfig) -> Self {
        Self {
            config,
            dependencies: DependencyCache::new(resolver),
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Path of the merged tables archive for `version`, building it when the
    /// cached copy is missing or its inputs changed.
    pub fn provide(&self, version: &str) -> Result<PathBuf> {
        let version = MappingVersion::parse(version)?;

        let readable = self.require(&self.config.readable_mappings_coordinate(&version)?)?;
        let export = self.require(&self.config.export_coordinate(&version)?)?;
        let curated_candidates = self.config.curated_coordinates(&version)?;
        let (_, curated) = self
            .dependencies
            .first_of(&curated_candidates)?
            .ok_or_else(|| match curated_candidates.first() {
                Some(c) => MergeError::missing_artifact(c.to_string()),
                None => MergeError::missing_artifact(version.curated_version()),
            })?;

        let output = self.config.output_path(&version);
        let hashes = HashStore::load(self.config.input_hash_path(&version))?
            .add_file("export", &export)?
            .add_file("readable", &readable)?
            .add_str("mcversion", version.mc_version())
            .add_file("curated", &curated)?
            .add_str("codever", &self.config.code_version);

        if hashes.is_up_to_date() && output.is_file() {
            info!(%version, path = %output.display(), "reusing cached mappings");
            return Ok(output);
        }

        let inputs = MergeInputs::from_artifacts(
            &fs::read(&export)?,
            &fs::read(&readable)?,
            &fs::read(&curated)?,
        )?;
        let tables = merge(&inputs);
        write_tables_to(&tables, &output)?;
        hashes.save()?;

        info!(
            %version,
            path = %output.display(),
            rows = tables.row_count(),
            "wrote merged mappings"
        );
        Ok(output)
    }

    fn require(&self, coordinate: &Coordinate) -> Result<PathBuf> {
        self.dependencies
            .get(coordinate)?
            .ok_or_else(|| MergeError::missing_artifact(coordinate.to_string()))
    }
}
