//! Mapping document format detection.

/// Textual mapping formats understood by [`MappingFile::load`].
///
/// [`MappingFile::load`]: super::MappingFile::load
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MappingFormat {
    /// Two-column TSRG.
    Tsrg,
    /// Multi-namespace TSRG with parameters and static markers.
    Tsrg2,
    /// Record-based SRG.
    Srg,
    /// ProGuard/R8 mapping output.
    ProGuard,
}

impl MappingFormat {
    /// Human-readable name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tsrg => "TSRG",
            Self::Tsrg2 => "TSRG2",
            Self::Srg => "SRG",
            Self::ProGuard => "ProGuard",
        }
    }

    /// Guess the format from the first meaningful line.
    ///
    /// Returns `None` for documents without any content.
    pub fn detect(text: &str) -> Option<Self> {
        let first = text.lines().map(str::trim_end).find(|line| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })?;

        let format = if first.starts_with("tsrg2 ") {
            Self::Tsrg2
        } else if ["PK: ", "CL: ", "FD: ", "MD: "]
            .iter()
            .any(|tag| first.starts_with(tag))
        {
            Self::Srg
        } else if first.contains(" -> ") && first.ends_with(':') {
            Self::ProGuard
        } else {
            Self::Tsrg
        };
        Some(format)
    }
}

impl std::fmt::Display for MappingFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
