//! Row emission rules per symbol kind.
//!
//! | kind              | key                                  | emitted when                      |
//! |-------------------|--------------------------------------|-----------------------------------|
//! | package, class    | dotted display name                  | documentation present             |
//! | field, method     | id, `Owner#id` for documented stable ids | generated id renamed, or documented |
//! | parameter         | intermediate parameter id            | curated name present              |

use crate::base::constants::{CONSTRUCTOR_NAME, DOC_LINE_SEPARATOR, FIELD_PREFIX};
use crate::base::{display_class_name, is_generated_identifier};
use crate::curated::ParameterData;
use crate::export::{Row, Table};
use crate::mapping::{Class, Field, Method, Package};

/// A symbol of the composed mapping, ready for emission.
#[derive(Clone, Copy, Debug)]
pub enum Symbol<'a> {
    Package(&'a Package),
    Class(&'a Class),
    Field { owner: &'a Class, field: &'a Field },
    Method { owner: &'a Class, method: &'a Method },
    /// A legacy constructor taken from the side-table.
    Constructor { owner: &'a Class },
}

/// The row for `symbol`, or `None` when the inclusion rules suppress it.
pub fn record(symbol: Symbol<'_>, doc: &str) -> Option<Row> {
    match symbol {
        Symbol::Package(package) => {
            type_row(display_class_name(&package.original, &package.mapped), doc)
        }
        Symbol::Class(class) => type_row(display_class_name(&class.original, &class.mapped), doc),
        Symbol::Field { owner, field } => member_row(
            owner,
            &field.mapped,
            &field.original,
            is_generated_identifier(&field.mapped),
            doc,
        ),
        Symbol::Method { owner, method } => member_row(
            owner,
            &method.mapped,
            &method.original,
            is_generated_identifier(&method.mapped),
            doc,
        ),
        Symbol::Constructor { owner } => {
            member_row(owner, CONSTRUCTOR_NAME, CONSTRUCTOR_NAME, false, doc)
        }
    }
}

/// Push the row for `symbol` into `table` if one is emitted.
pub fn emit(table: &mut Table, symbol: Symbol<'_>, doc: &str) {
    if let Some(row) = record(symbol, doc) {
        table.push(row);
    }
}

// Downstream tooling expects both name columns even though they are equal.
fn type_row(name: String, doc: &str) -> Option<Row> {
    if doc.is_empty() {
        return None;
    }
    Some(Row::new(name.clone(), name, doc))
}

fn member_row(
    owner: &Class,
    mapped: &str,
    original: &str,
    generated: bool,
    doc: &str,
) -> Option<Row> {
    if !((generated && mapped != original) || !doc.is_empty()) {
        return None;
    }

    // Documented stable ids (record accessors, constructors) are qualified
    // with their owner so the consumer can tell them apart.
    let key = if !generated && !doc.is_empty() {
        format!("{}#{}", display_class_name(&owner.original, &owner.mapped), mapped)
    } else {
        mapped.to_string()
    };
    Some(Row::new(key, original, doc))
}

/// Emit parameter rows and fold parameter docs into the owning method's doc.
///
/// `ids` is index-aligned with `parameters`; `None` entries are skipped
/// entirely. Ids borrowed from a backing field (`f_` prefix) never get a
/// name row, but their documentation is still folded into `method_doc`.
pub fn emit_parameters(
    table: &mut Table,
    ids: &[Option<String>],
    parameters: &[ParameterData],
    method_doc: &mut String,
) {
    for (id, parameter) in ids.iter().zip(parameters) {
        let Some(id) = id else {
            continue;
        };
        let name = parameter.name.as_deref();

        if let Some(name) = name {
            if !id.starts_with(FIELD_PREFIX) {
                table.push(Row::new(id.as_str(), name, ""));
            }
        }

        let doc = parameter.doc();
        if !doc.is_empty() {
            method_doc.push_str(DOC_LINE_SEPARATOR);
            method_doc.push_str("@param ");
            method_doc.push_str(name.unwrap_or(id));
            method_doc.push(' ');
            method_doc.push_str(&doc);
        }
    }
}
