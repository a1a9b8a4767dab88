//! Composite mapping version strings.
//!
//! ```text
//! [<query-mc>-]<curated>-<mc>[-YYYYMMDD.HHMMSS]
//!  1.20.1-     2023.09.06-1.20.1-20230612.114412
//!              └ curated  └ export version ───────┘
//! ```
//!
//! The curated version is either a release date (`YYYY.MM.DD`) or starts with
//! a letter (`BLEEDING-SNAPSHOT`), optionally followed by `-` qualifiers
//! (`-nightly-SNAPSHOT`). Game versions are release numbers (`1.20.1`,
//! `1.16-pre4`, `1.5-rc9`) or weekly snapshots (`21w41a`).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MergeError, Result};

const GAME: &str = r"\d+w\d+[a-z_]*|\d+(?:\.\d+)+(?:-(?:pre|rc)\d+)?";
const CURATED: &str = r"(?:\d{4}\.\d{2}\.\d{2}|[A-Za-z][\w.]*)(?:-[\w.]+)*?";

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?:(?P<query>{GAME})-)??(?P<curated>{CURATED})-(?P<export>(?P<mc>{GAME})(?:-\d{{8}}\.\d{{6}})?)$"
    );
    Regex::new(&pattern).expect("version pattern is valid")
});

/// A parsed mapping version.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MappingVersion {
    query_mc_version: String,
    curated_version: String,
    mc_version: String,
    export_version: String,
}

impl MappingVersion {
    /// Parse a composite version string.
    pub fn parse(version: &str) -> Result<Self> {
        let captures = VERSION_PATTERN
            .captures(version)
            .ok_or_else(|| MergeError::InvalidVersion(version.to_string()))?;
        let group = |name: &str| captures.name(name).map(|m| m.as_str().to_string());

        let mc_version = group("mc").unwrap_or_default();
        Ok(Self {
            query_mc_version: group("query").unwrap_or_else(|| mc_version.clone()),
            curated_version: group("curated").unwrap_or_default(),
            export_version: group("export").unwrap_or_default(),
            mc_version,
        })
    }

    /// Game version used to query for curated data; the game version itself
    /// unless given explicitly.
    pub fn query_mc_version(&self) -> &str {
        &self.query_mc_version
    }

    pub fn curated_version(&self) -> &str {
        &self.curated_version
    }

    pub fn mc_version(&self) -> &str {
        &self.mc_version
    }

    /// Version of the intermediate export: the game version plus an optional
    /// timestamp.
    pub fn export_version(&self) -> &str {
        &self.export_version
    }
}

impl FromStr for MappingVersion {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for MappingVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query_mc_version != self.mc_version {
            write!(f, "{}-", self.query_mc_version)?;
        }
        write!(f, "{}-{}", self.curated_version, self.export_version)
    }
}
