//! Loading merge inputs from raw artifacts.

use namebridge::MergeError;
use namebridge::export::write_entries;
use namebridge::merge::{ExportMode, MergeInputs, merge};

use crate::helpers::fixtures::{
    LEGACY_CLIENT, LEGACY_CONSTRUCTORS, LEGACY_CURATED, LEGACY_JOINED, OFFICIAL_CLIENT,
    OFFICIAL_CURATED, OFFICIAL_JOINED, curated_archive, export_archive, legacy_inputs,
    official_inputs,
};

#[test]
fn test_official_artifacts_match_direct_inputs() {
    let inputs = MergeInputs::from_artifacts(
        &export_archive(true, OFFICIAL_JOINED, None),
        OFFICIAL_CLIENT.as_bytes(),
        &curated_archive(OFFICIAL_CURATED),
    )
    .unwrap();

    assert_eq!(inputs.mode, ExportMode::Official);
    assert!(inputs.constructors.is_empty());
    assert_eq!(merge(&inputs), merge(&official_inputs()));
}

#[test]
fn test_legacy_artifacts_read_side_table() {
    let inputs = MergeInputs::from_artifacts(
        &export_archive(false, LEGACY_JOINED, Some(LEGACY_CONSTRUCTORS)),
        LEGACY_CLIENT.as_bytes(),
        &curated_archive(LEGACY_CURATED),
    )
    .unwrap();

    assert_eq!(inputs.mode, ExportMode::Legacy);
    assert_eq!(inputs.constructors.len(), 2);
    assert_eq!(merge(&inputs), merge(&legacy_inputs()));
}

#[test]
fn test_legacy_export_without_side_table_fails() {
    let err = MergeInputs::from_artifacts(
        &export_archive(false, LEGACY_JOINED, None),
        LEGACY_CLIENT.as_bytes(),
        &curated_archive(LEGACY_CURATED),
    )
    .unwrap_err();
    assert!(matches!(err, MergeError::Missing { kind: "archive entry", .. }));
}

#[test]
fn test_export_without_config_fails() {
    let export = write_entries([("config/joined.tsrg", OFFICIAL_JOINED.as_bytes())]).unwrap();
    let err = MergeInputs::from_artifacts(
        &export,
        OFFICIAL_CLIENT.as_bytes(),
        &curated_archive(OFFICIAL_CURATED),
    )
    .unwrap_err();
    assert!(matches!(err, MergeError::Missing { name, .. } if name == "config.json"));
}

#[test]
fn test_config_without_mappings_entry_fails() {
    let export = write_entries([("config.json", br#"{"official":true,"data":{}}"#.as_slice())])
        .unwrap();
    let err = MergeInputs::from_artifacts(
        &export,
        OFFICIAL_CLIENT.as_bytes(),
        &curated_archive(OFFICIAL_CURATED),
    )
    .unwrap_err();
    assert!(matches!(err, MergeError::Missing { kind: "field", .. }));
}

#[test]
fn test_incompatible_curated_version_aborts() {
    let err = MergeInputs::from_artifacts(
        &export_archive(true, OFFICIAL_JOINED, None),
        OFFICIAL_CLIENT.as_bytes(),
        &curated_archive(r#"{"version":"2.0.0","classes":[]}"#),
    )
    .unwrap_err();
    assert!(matches!(&err, MergeError::IncompatibleVersion(v) if v == "2.0.0"));
    assert!(err.to_string().contains("2.0.0"));
}

#[test]
fn test_curated_archive_without_database_fails() {
    let empty = write_entries([("README", b"nothing here".as_slice())]).unwrap();
    let err = MergeInputs::from_artifacts(
        &export_archive(true, OFFICIAL_JOINED, None),
        OFFICIAL_CLIENT.as_bytes(),
        &empty,
    )
    .unwrap_err();
    assert!(matches!(err, MergeError::Missing { name, .. } if name == "parchment.json"));
}
