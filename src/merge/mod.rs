//! The merge: composed mapping + curated database → rename tables.
//!
//! ## Flow
//!
//! ```text
//! obf→intermediate ─┐
//!                   ├─ compose ─→ readable→intermediate ─┐
//! readable→obf ─────┘                                    ├─ walk ─→ MappingTables
//! curated database ──────────────────────────────────────┘
//! ```
//!
//! The walk visits packages, then classes in file order; for each class its
//! legacy constructors, fields and methods, and for each method its curated
//! parameters. Every visited symbol goes through [`emit::record`].

mod chain;
mod constructors;
pub mod emit;
mod params;

pub use chain::compose;
pub use constructors::{ConstructorEntry, ConstructorTable};
pub use params::{ParameterOwner, parameter_ids};

use tracing::info;

use crate::base::constants::CONSTRUCTOR_NAME;
use crate::curated::{ClassData, CuratedDatabase, MethodData, doc_text};
use crate::export::{MappingTables, Table};
use crate::mapping::{Class, MappingFile};
use emit::{Symbol, emit, emit_parameters};

/// How the intermediate export identifies parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportMode {
    /// Parameters are enumerated in the mapping with positional ids.
    Official,
    /// Parameter ids are derived from method/constructor ids; constructors
    /// come from a side-table.
    Legacy,
}

impl ExportMode {
    pub fn from_official(official: bool) -> Self {
        if official { Self::Official } else { Self::Legacy }
    }
}

/// Everything a merge reads, already loaded.
#[derive(Clone, Debug)]
pub struct MergeInputs {
    /// Obfuscated → intermediate.
    pub intermediate: MappingFile,
    /// Readable → obfuscated, as shipped by the vendor.
    pub readable: MappingFile,
    pub curated: CuratedDatabase,
    pub mode: ExportMode,
    /// Legacy constructors; empty for official exports.
    pub constructors: ConstructorTable,
}

impl MergeInputs {
    pub fn new(
        intermediate: MappingFile,
        readable: MappingFile,
        curated: CuratedDatabase,
        mode: ExportMode,
    ) -> Self {
        Self {
            intermediate,
            readable,
            curated,
            mode,
            constructors: ConstructorTable::new(),
        }
    }

    pub fn with_constructors(mut self, constructors: ConstructorTable) -> Self {
        self.constructors = constructors;
        self
    }
}

/// Run the merge and collect the five output tables.
///
/// Per-symbol correlation failures are skipped and logged; nothing here
/// aborts once the inputs are loaded.
pub fn merge(inputs: &MergeInputs) -> MappingTables {
    let composed = compose(&inputs.intermediate, &inputs.readable);
    let intermediate_to_readable = composed.reverse();
    let curated = &inputs.curated;
    let mut tables = MappingTables::new();

    for package in composed.packages() {
        let doc = doc_text(
            curated
                .package(&package.original)
                .and_then(|p| p.javadoc.as_ref()),
        );
        emit(&mut tables.packages, Symbol::Package(package), &doc);
    }

    for class in composed.classes() {
        let class_data = curated.class(&class.original);
        let doc = doc_text(class_data.and_then(|c| c.javadoc.as_ref()));
        emit(&mut tables.classes, Symbol::Class(class), &doc);

        if let (Some(class_data), ExportMode::Legacy) = (class_data, inputs.mode) {
            merge_constructors(
                inputs,
                &intermediate_to_readable,
                class,
                class_data,
                &mut tables,
            );
        }

        for field in class.fields() {
            let doc = doc_text(
                class_data
                    .and_then(|c| c.field(&field.original))
                    .and_then(|f| f.javadoc.as_ref()),
            );
            emit(&mut tables.fields, Symbol::Field { owner: class, field }, &doc);
        }

        for method in class.methods() {
            let method_data =
                class_data.and_then(|c| c.method(&method.original, &method.descriptor));
            let mut doc = method_data.map(MethodData::doc).unwrap_or_default();
            if let Some(method_data) = method_data {
                merge_parameters(
                    inputs.mode,
                    ParameterOwner::Method(method),
                    method_data,
                    &mut tables.parameters,
                    &mut doc,
                );
            }
            emit(&mut tables.methods, Symbol::Method { owner: class, method }, &doc);
        }
    }

    info!(
        packages = tables.packages.len(),
        classes = tables.classes.len(),
        fields = tables.fields.len(),
        methods = tables.methods.len(),
        parameters = tables.parameters.len(),
        "merge complete"
    );
    tables
}

fn merge_constructors(
    inputs: &MergeInputs,
    intermediate_to_readable: &MappingFile,
    class: &Class,
    class_data: &ClassData,
    tables: &mut MappingTables,
) {
    for constructor in inputs.constructors.constructors(&class.mapped) {
        let descriptor = intermediate_to_readable.remap_descriptor(&constructor.descriptor);
        let Some(method_data) = class_data.method(CONSTRUCTOR_NAME, &descriptor) else {
            continue;
        };

        let mut doc = method_data.doc();
        merge_parameters(
            inputs.mode,
            ParameterOwner::Constructor(&constructor.id),
            method_data,
            &mut tables.parameters,
            &mut doc,
        );
        emit(&mut tables.methods, Symbol::Constructor { owner: class }, &doc);
    }
}

fn merge_parameters(
    mode: ExportMode,
    owner: ParameterOwner<'_>,
    method_data: &MethodData,
    table: &mut Table,
    doc: &mut String,
) {
    if method_data.parameters.is_empty() {
        return;
    }
    let ids = parameter_ids(mode, owner, &method_data.parameters);
    emit_parameters(table, &ids, &method_data.parameters, doc);
}

#[cfg(feature = "archive")]
impl MergeInputs {
    /// Load inputs from the raw artifacts.
    ///
    /// - `export_archive`: the intermediate export, holding `config.json`,
    ///   the mapping entry it names and, for legacy exports, the constructor
    ///   side-table
    /// - `readable_mappings`: the vendor mapping text (readable → obfuscated)
    /// - `curated_archive`: the archive holding the curated database
    pub fn from_artifacts(
        export_archive: &[u8],
        readable_mappings: &[u8],
        curated_archive: &[u8],
    ) -> crate::error::Result<Self> {
        use crate::export::read_entry;
        use crate::project::ExportConfig;

        let config = ExportConfig::from_archive(export_archive)?;
        let mode = config.mode();
        let intermediate =
            MappingFile::load(&read_entry(export_archive, config.required_entry("mappings")?)?)?;
        let readable = MappingFile::load(readable_mappings)?;
        let curated = CuratedDatabase::from_archive(curated_archive)?;

        let mut inputs = Self::new(intermediate, readable, curated, mode);
        if mode == ExportMode::Legacy {
            let bytes = read_entry(export_archive, config.required_entry("constructors")?)?;
            inputs.constructors = ConstructorTable::parse(&String::from_utf8_lossy(&bytes));
        }
        Ok(inputs)
    }
}
