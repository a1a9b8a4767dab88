//! Input fingerprints for cached outputs.
//!
//! A hash store is a small `key=sha256hex` file written next to a cached
//! output. When every input hashes the same as last time, the output can be
//! reused.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::Result;

#[derive(Clone, Debug, Default)]
pub struct HashStore {
    path: Option<PathBuf>,
    previous: IndexMap<String, String>,
    current: IndexMap<String, String>,
}

impl HashStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load previously saved hashes; a missing file means no history.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut previous = IndexMap::new();
        if path.is_file() {
            for line in fs::read_to_string(&path)?.lines() {
                if let Some((key, hash)) = line.split_once('=') {
                    previous.insert(key.to_string(), hash.to_string());
                }
            }
        }
        Ok(Self {
            path: Some(path),
            previous,
            current: IndexMap::new(),
        })
    }

    /// Add a file input by content.
    pub fn add_file(mut self, key: impl Into<String>, path: &Path) -> Result<Self> {
        let hash = sha256_hex(&fs::read(path)?);
        self.current.insert(key.into(), hash);
        Ok(self)
    }

    /// Add a plain string input.
    pub fn add_str(mut self, key: impl Into<String>, value: &str) -> Self {
        self.current.insert(key.into(), sha256_hex(value.as_bytes()));
        self
    }

    /// Whether the current inputs hash exactly as the loaded ones.
    pub fn is_up_to_date(&self) -> bool {
        !self.current.is_empty() && self.current == self.previous
    }

    /// Persist the current hashes to the loaded path.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut text = String::new();
        for (key, hash) in &self.current {
            text.push_str(key);
            text.push('=');
            text.push_str(hash);
            text.push('\n');
        }
        fs::write(path, text)?;
        debug!(path = %path.display(), inputs = self.current.len(), "saved input hashes");
        Ok(())
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
