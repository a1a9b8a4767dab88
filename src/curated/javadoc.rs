//! Documentation payloads.

use serde::{Deserialize, Serialize};

use crate::base::constants::DOC_LINE_SEPARATOR;

/// Documentation attached to a curated record.
///
/// Most records carry an ordered list of lines; parameters usually carry a
/// single string. Both shapes normalize to the same text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Javadoc {
    Text(String),
    Lines(Vec<String>),
}

impl Javadoc {
    /// Join lines with a literal `\n` (backslash, `n`); text passes through.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Lines(lines) => lines.join(DOC_LINE_SEPARATOR),
        }
    }
}

/// Normalized text of an optional payload; empty when absent.
pub fn doc_text(javadoc: Option<&Javadoc>) -> String {
    javadoc.map(Javadoc::to_text).unwrap_or_default()
}
