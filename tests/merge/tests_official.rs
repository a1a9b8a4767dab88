//! Merges against an official export: positional parameter ids and
//! placeholder class names.

use namebridge::export::TableKind;
use namebridge::merge::merge;

use crate::helpers::fixtures::official_inputs;
use crate::helpers::table_assertions::{assert_no_row, csv_text, get_row, rows};

#[test]
fn test_documented_package_is_emitted() {
    let tables = merge(&official_inputs());
    assert_eq!(
        rows(&tables.packages),
        [("net.example", "net.example", "Example package.")]
    );
}

#[test]
fn test_class_rows_use_readable_name_for_placeholders() {
    let tables = merge(&official_inputs());
    assert_eq!(
        rows(&tables.classes),
        [("net.example.Foo", "net.example.Foo", "A foo.\\nSecond line.")]
    );
}

#[test]
fn test_fields() {
    let tables = merge(&official_inputs());
    assert_eq!(
        rows(&tables.fields),
        [("f_10_", "count", "How many."), ("f_11_", "label", "")]
    );
}

#[test]
fn test_methods() {
    let tables = merge(&official_inputs());
    assert_eq!(
        rows(&tables.methods),
        [
            ("m_20_", "doThing", "does a thing"),
            ("m_21_", "apply", "\\n@param duration In ticks."),
            ("m_22_", "accept", ""),
            ("m_23_", "size", ""),
            ("net.example.Bar#name", "name", "The name."),
        ]
    );
}

#[test]
fn test_parameters_follow_slot_translation() {
    let tables = merge(&official_inputs());
    assert_eq!(
        rows(&tables.parameters),
        [
            ("p_21_0_", "amount", ""),
            ("p_21_1_", "duration", ""),
            ("p_21_2_", "label", ""),
            ("p_22_0_", "bar", ""),
            ("p_24_0_", "initial", ""),
        ]
    );
}

#[test]
fn test_count_mismatch_skips_parameters_and_their_docs() {
    let tables = merge(&official_inputs());
    assert_eq!(get_row(&tables.methods, "m_23_").desc, "");
    assert!(rows(&tables.parameters).iter().all(|(_, name, _)| *name != "ghost"));
}

#[test]
fn test_undocumented_constructor_has_no_method_row() {
    let tables = merge(&official_inputs());
    assert_no_row(&tables.methods, "<init>");
    assert_no_row(&tables.methods, "net.example.Foo#<init>");
}

#[test]
fn test_methods_csv() {
    let tables = merge(&official_inputs());
    assert_eq!(
        csv_text(&tables, TableKind::Methods),
        "searge,name,desc\n\
         m_20_,doThing,does a thing\n\
         m_21_,apply,\\n@param duration In ticks.\n\
         m_22_,accept,\n\
         m_23_,size,\n\
         net.example.Bar#name,name,The name.\n"
    );
}
