//! Output rows and tables.

use crate::base::constants::TABLE_HEADER;

/// One output row: intermediate key, display name, documentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub searge: String,
    pub name: String,
    pub desc: String,
}

impl Row {
    pub fn new(
        searge: impl Into<String>,
        name: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            searge: searge.into(),
            name: name.into(),
            desc: desc.into(),
        }
    }

    pub fn fields(&self) -> [&str; 3] {
        [&self.searge, &self.name, &self.desc]
    }
}

/// Ordered rows below the fixed `searge,name,desc` header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header() -> [&'static str; 3] {
        TABLE_HEADER
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds nothing but its header.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row with the given key.
    pub fn find(&self, searge: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.searge == searge)
    }
}

/// The five symbol kinds that get their own table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    Packages,
    Classes,
    Fields,
    Methods,
    Parameters,
}

impl TableKind {
    /// Archive entries are written in this order.
    pub const WRITE_ORDER: [TableKind; 5] = [
        Self::Classes,
        Self::Fields,
        Self::Methods,
        Self::Parameters,
        Self::Packages,
    ];

    /// Archive entry name for the table.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Packages => "packages.csv",
            Self::Classes => "classes.csv",
            Self::Fields => "fields.csv",
            Self::Methods => "methods.csv",
            Self::Parameters => "params.csv",
        }
    }
}

/// All tables produced by one merge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MappingTables {
    pub packages: Table,
    pub classes: Table,
    pub fields: Table,
    pub methods: Table,
    pub parameters: Table,
}

impl MappingTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: TableKind) -> &Table {
        match kind {
            TableKind::Packages => &self.packages,
            TableKind::Classes => &self.classes,
            TableKind::Fields => &self.fields,
            TableKind::Methods => &self.methods,
            TableKind::Parameters => &self.parameters,
        }
    }

    /// Total data rows across all tables.
    pub fn row_count(&self) -> usize {
        TableKind::WRITE_ORDER
            .iter()
            .map(|kind| self.get(*kind).len())
            .sum()
    }
}
