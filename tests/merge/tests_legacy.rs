//! Merges against a legacy export: parameter ids rebuilt from method ids and
//! constructors from the side-table.

use namebridge::merge::{ConstructorTable, merge};

use crate::helpers::fixtures::legacy_inputs;
use crate::helpers::table_assertions::{assert_no_row, get_row, rows};

#[test]
fn test_constructor_parameters_and_row() {
    let tables = merge(&legacy_inputs());

    assert_eq!(get_row(&tables.parameters, "p_i1001_1_").name, "width");
    assert_eq!(get_row(&tables.parameters, "p_i1001_2_").name, "label");

    let ctor = get_row(&tables.methods, "net.minecraft.util.Widget#<init>");
    assert_eq!(ctor.name, "<init>");
    assert_eq!(ctor.desc, "Creates a widget.\\n@param label Shown on screen.");
}

#[test]
fn test_uncurated_constructor_is_skipped() {
    let tables = merge(&legacy_inputs());
    assert!(
        rows(&tables.parameters)
            .iter()
            .all(|(id, _, _)| !id.starts_with("p_i1002_"))
    );
}

#[test]
fn test_method_parameter_ids_use_numeric_tag() {
    let tables = merge(&legacy_inputs());
    assert_eq!(get_row(&tables.parameters, "p_123_1_").name, "newSize");
}

#[test]
fn test_hand_named_method_parameters_are_skipped() {
    let tables = merge(&legacy_inputs());
    assert!(rows(&tables.parameters).iter().all(|(_, name, _)| *name != "task"));
    assert_no_row(&tables.methods, "doStuff");
    assert_no_row(&tables.methods, "net.minecraft.util.Widget#doStuff");
}

#[test]
fn test_table_order() {
    let tables = merge(&legacy_inputs());
    assert_eq!(rows(&tables.fields), [("field_100_a", "size", "")]);
    assert_eq!(
        rows(&tables.methods),
        [
            (
                "net.minecraft.util.Widget#<init>",
                "<init>",
                "Creates a widget.\\n@param label Shown on screen."
            ),
            ("func_123_a", "resize", ""),
            ("func_124_c", "reset", "Resets."),
        ]
    );
    assert_eq!(
        rows(&tables.parameters),
        [
            ("p_i1001_1_", "width", ""),
            ("p_i1001_2_", "label", ""),
            ("p_123_1_", "newSize", ""),
        ]
    );
}

#[test]
fn test_without_side_table_no_constructor_rows() {
    let inputs = legacy_inputs().with_constructors(ConstructorTable::new());
    let tables = merge(&inputs);
    assert!(
        rows(&tables.methods)
            .iter()
            .all(|(key, _, _)| !key.ends_with("#<init>"))
    );
    assert_no_row(&tables.parameters, "p_i1001_1_");
}
