//! Whole-merge properties: the reference scenario, determinism, empty
//! tables and documentation shapes.

use namebridge::curated::CuratedDatabase;
use namebridge::export::{TableKind, entry_names, write_tables};
use namebridge::merge::{ExportMode, MergeInputs, merge};

use crate::helpers::fixtures::{curated, legacy_inputs, load, official_inputs};
use crate::helpers::table_assertions::{archive_entry_text, csv_text, rows};

const SCENARIO_CLIENT: &str = "net.example.Foo -> a:\n    void doThing() -> a\n";

fn scenario(joined: &str, javadoc: &str) -> MergeInputs {
    let json = format!(
        r#"{{"version":"1.0.0","classes":[{{"name":"net/example/Foo","methods":[{{"name":"doThing","descriptor":"()V","javadoc":{javadoc}}}]}}]}}"#
    );
    MergeInputs::new(
        load(joined),
        load(SCENARIO_CLIENT),
        curated(&json),
        ExportMode::Official,
    )
}

#[test]
fn test_documented_generated_method() {
    let inputs = scenario("a net/example/Foo\n\ta ()V m_1_\n", r#""does a thing""#);
    let tables = merge(&inputs);
    assert_eq!(
        csv_text(&tables, TableKind::Methods),
        "searge,name,desc\nm_1_,doThing,does a thing\n"
    );
}

#[test]
fn test_documented_stable_method_is_owner_qualified() {
    let inputs = scenario("a net/example/Foo\n\ta ()V a\n", r#""does a thing""#);
    let tables = merge(&inputs);
    assert_eq!(
        rows(&tables.methods),
        [("net.example.Foo#a", "doThing", "does a thing")]
    );
}

#[test]
fn test_javadoc_string_and_single_line_list_are_equivalent() {
    let joined = "a net/example/Foo\n\ta ()V m_1_\n";
    let as_string = merge(&scenario(joined, r#""does a thing""#));
    let as_list = merge(&scenario(joined, r#"["does a thing"]"#));
    assert_eq!(as_string, as_list);
}

#[test]
fn test_multi_line_javadoc_uses_literal_separator() {
    let tables = merge(&scenario(
        "a net/example/Foo\n\ta ()V m_1_\n",
        r#"["first", "second"]"#,
    ));
    assert_eq!(rows(&tables.methods), [("m_1_", "doThing", "first\\nsecond")]);
}

#[test]
fn test_merge_is_deterministic() {
    for inputs in [official_inputs(), legacy_inputs()] {
        let first = merge(&inputs);
        let second = merge(&inputs);
        assert_eq!(first, second);
        assert_eq!(write_tables(&first).unwrap(), write_tables(&second).unwrap());
    }
}

#[test]
fn test_empty_tables_are_left_out_of_the_archive() {
    let archive = write_tables(&merge(&legacy_inputs())).unwrap();
    assert_eq!(
        entry_names(&archive).unwrap(),
        ["fields.csv", "methods.csv", "params.csv"]
    );
    assert_eq!(
        archive_entry_text(&archive, "fields.csv"),
        "searge,name,desc\nfield_100_a,size,\n"
    );
}

#[test]
fn test_empty_curated_database_keeps_renames_only() {
    let mut inputs = official_inputs();
    inputs.curated = CuratedDatabase::new("1.0.0", Vec::new(), Vec::new());
    let tables = merge(&inputs);

    assert!(tables.packages.is_empty());
    assert!(tables.classes.is_empty());
    assert!(tables.parameters.is_empty());
    assert_eq!(
        rows(&tables.methods),
        [
            ("m_20_", "doThing", ""),
            ("m_21_", "apply", ""),
            ("m_22_", "accept", ""),
            ("m_23_", "size", ""),
        ]
    );
}

#[test]
fn test_unknown_obfuscated_class_is_dropped() {
    let mut inputs = official_inputs();
    inputs.readable = load("net.example.Other -> zz:\n");
    let tables = merge(&inputs);
    assert_eq!(tables.row_count(), rows(&tables.packages).len());
}
