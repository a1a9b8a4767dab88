//! Configuration: the export's own `config.json` and provider settings.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use super::version::MappingVersion;
use crate::error::{MergeError, Result};
use crate::merge::ExportMode;

// ============================================================================
// EXPORT CONFIG
// ============================================================================

/// The `config.json` document shipped inside an intermediate export.
///
/// Only `official` and the string values of `data` are read; anything else
/// is carried along untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub official: bool,
    #[serde(default)]
    pub data: IndexMap<String, serde_json::Value>,
}

impl ExportConfig {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Read `config.json` from an export archive.
    #[cfg(feature = "archive")]
    pub fn from_archive(archive: &[u8]) -> Result<Self> {
        use crate::base::constants::EXPORT_CONFIG_ENTRY;
        Self::from_json(&crate::export::read_entry(archive, EXPORT_CONFIG_ENTRY)?)
    }

    pub fn is_official(&self) -> bool {
        self.official
    }

    pub fn mode(&self) -> ExportMode {
        ExportMode::from_official(self.official)
    }

    /// Archive entry path stored under a `data` key.
    ///
    /// Non-string values (per-side tables and the like) are not entry paths.
    pub fn data_entry(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(serde_json::Value::as_str)
    }

    /// Like [`data_entry`](Self::data_entry), failing when the key is absent.
    pub fn required_entry(&self, key: &str) -> Result<&str> {
        self.data_entry(key)
            .ok_or_else(|| MergeError::missing_field(format!("data.{key}")))
    }
}

// ============================================================================
// PROVIDER CONFIG
// ============================================================================

/// Bumped whenever the table layout changes so stale cached outputs are
/// rebuilt.
pub const CODE_VERSION: &str = "3";

/// Settings for [`MappingsProvider`](super::MappingsProvider).
///
/// Coordinate templates use `{mc}`, `{export}` and `{curated}` placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Directory under which merged archives are cached.
    pub cache_dir: PathBuf,
    pub readable_mappings: String,
    pub export: String,
    pub curated: String,
    /// Classifier tried first for the curated artifact.
    pub curated_classifier: Option<String>,
    pub code_version: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("caches").join("namebridge"),
            readable_mappings: "net.minecraft:client:{mc}:mappings@txt".to_string(),
            export: "de.oceanlabs.mcp:mcp_config:{export}@zip".to_string(),
            curated: "org.parchmentmc.data:parchment-{mc}:{curated}@zip".to_string(),
            curated_classifier: Some("checked".to_string()),
            code_version: CODE_VERSION.to_string(),
        }
    }
}

impl ProviderConfig {
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    pub fn with_readable_mappings(mut self, template: impl Into<String>) -> Self {
        self.readable_mappings = template.into();
        self
    }

    pub fn with_export(mut self, template: impl Into<String>) -> Self {
        self.export = template.into();
        self
    }

    pub fn with_curated(mut self, template: impl Into<String>) -> Self {
        self.curated = template.into();
        self
    }

    pub fn with_curated_classifier(mut self, classifier: Option<String>) -> Self {
        self.curated_classifier = classifier;
        self
    }

    pub fn with_code_version(mut self, code_version: impl Into<String>) -> Self {
        self.code_version = code_version.into();
        self
    }

    pub fn readable_mappings_coordinate(&self, version: &MappingVersion) -> Result<Coordinate> {
        Coordinate::parse(&expand(&self.readable_mappings, version))
    }

    pub fn export_coordinate(&self, version: &MappingVersion) -> Result<Coordinate> {
        Coordinate::parse(&expand(&self.export, version))
    }

    /// Curated artifact candidates in lookup order: classified, then plain.
    pub fn curated_coordinates(&self, version: &MappingVersion) -> Result<Vec<Coordinate>> {
        let plain = Coordinate::parse(&expand(&self.curated, version))?;
        Ok(match &self.curated_classifier {
            Some(classifier) => vec![plain.clone().with_classifier(classifier.as_str()), plain],
            None => vec![plain],
        })
    }

    /// Where the merged archive for a version is cached.
    pub fn output_path(&self, version: &MappingVersion) -> PathBuf {
        self.output_dir(version).join(format!("{}.zip", output_stem(version)))
    }

    /// Hash-store file next to the merged archive.
    pub fn input_hash_path(&self, version: &MappingVersion) -> PathBuf {
        self.output_dir(version).join(format!("{}.zip.input", output_stem(version)))
    }

    fn output_dir(&self, version: &MappingVersion) -> PathBuf {
        self.cache_dir
            .join("org")
            .join("parchmentmc")
            .join("data")
            .join(format!("parchment-{}", version.export_version()))
            .join(version.curated_version())
    }
}

fn output_stem(version: &MappingVersion) -> String {
    format!("parchment-{}-{}", version.export_version(), version.curated_version())
}

fn expand(template: &str, version: &MappingVersion) -> String {
    template
        .replace("{mc}", version.mc_version())
        .replace("{export}", version.export_version())
        .replace("{curated}", version.curated_version())
}
