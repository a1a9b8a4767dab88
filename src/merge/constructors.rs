//! Constructor side-table for legacy exports.
//!
//! Legacy intermediate exports do not list constructors in the main mapping,
//! so a separate table provides them, one per line:
//!
//! ```text
//! <id> <owning class (intermediate)> <descriptor (intermediate)>
//! 1000 net/minecraft/util/Foo (ILjava/lang/String;)V
//! ```

use rustc_hash::FxHashMap;
use tracing::warn;

/// One constructor of an intermediate class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructorEntry {
    pub id: String,
    pub owner: String,
    pub descriptor: String,
}

/// Constructors grouped by owning intermediate class, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstructorTable {
    by_class: FxHashMap<String, Vec<ConstructorEntry>>,
}

impl ConstructorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the side-table text. Lines with fewer than three columns are
    /// skipped with a warning.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut columns = line.split(' ');
            match (columns.next(), columns.next(), columns.next()) {
                (Some(id), Some(owner), Some(descriptor)) if !descriptor.is_empty() => {
                    table.insert(ConstructorEntry {
                        id: id.to_string(),
                        owner: owner.to_string(),
                        descriptor: descriptor.trim_end().to_string(),
                    });
                }
                _ => warn!(line = idx + 1, "malformed constructor record: {line}"),
            }
        }
        table
    }

    pub fn insert(&mut self, entry: ConstructorEntry) {
        self.by_class
            .entry(entry.owner.clone())
            .or_default()
            .push(entry);
    }

    /// Constructors of an intermediate class, in file order.
    pub fn constructors(&self, class: &str) -> &[ConstructorEntry] {
        self.by_class.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_class.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_class.is_empty()
    }
}
