//! Version strings and the coordinates derived from them.

use namebridge::project::{ExportConfig, MappingVersion, ProviderConfig};
use namebridge::{ExportMode, MergeError};
use rstest::rstest;

#[rstest]
#[case("2023.09.06-1.20.1", "1.20.1", "2023.09.06", "1.20.1", "1.20.1")]
#[case(
    "1.20.2-2023.09.06-1.20.1",
    "1.20.2",
    "2023.09.06",
    "1.20.1",
    "1.20.1"
)]
#[case(
    "2021.08.08-nightly-SNAPSHOT-1.16.5-20210115.111550",
    "1.16.5",
    "2021.08.08-nightly-SNAPSHOT",
    "1.16.5",
    "1.16.5-20210115.111550"
)]
#[case("BLEEDING-SNAPSHOT-23w31a", "23w31a", "BLEEDING-SNAPSHOT", "23w31a", "23w31a")]
fn test_version_components(
    #[case] text: &str,
    #[case] query: &str,
    #[case] curated: &str,
    #[case] mc: &str,
    #[case] export: &str,
) {
    let version = MappingVersion::parse(text).unwrap();
    assert_eq!(version.query_mc_version(), query);
    assert_eq!(version.curated_version(), curated);
    assert_eq!(version.mc_version(), mc);
    assert_eq!(version.export_version(), export);
}

#[test]
fn test_invalid_version_message() {
    let err = MappingVersion::parse("latest").unwrap_err();
    assert!(matches!(&err, MergeError::InvalidVersion(_)));
    assert_eq!(err.to_string(), "Mapping version latest is invalid");
}

#[test]
fn test_coordinates_for_legacy_version() {
    let version = MappingVersion::parse("2021.08.08-1.16.5-20210115.111550").unwrap();
    let config = ProviderConfig::default();

    assert_eq!(
        config.export_coordinate(&version).unwrap().to_string(),
        "de.oceanlabs.mcp:mcp_config:1.16.5-20210115.111550@zip"
    );
    assert_eq!(
        config.curated_coordinates(&version).unwrap()[0].to_string(),
        "org.parchmentmc.data:parchment-1.16.5:2021.08.08:checked@zip"
    );
}

#[test]
fn test_curated_without_classifier() {
    let version = MappingVersion::parse("2023.09.06-1.20.1").unwrap();
    let config = ProviderConfig::default().with_curated_classifier(None);
    let candidates = config.curated_coordinates(&version).unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].classifier, None);
}

#[rstest]
#[case(r#"{"official":true,"data":{"mappings":"config/joined.tsrg"}}"#, ExportMode::Official)]
#[case(r#"{"official":false,"data":{"mappings":"config/joined.tsrg"}}"#, ExportMode::Legacy)]
#[case(r#"{"data":{"mappings":"config/joined.tsrg"}}"#, ExportMode::Legacy)]
fn test_export_config_mode(#[case] json: &str, #[case] mode: ExportMode) {
    let config = ExportConfig::from_json(json.as_bytes()).unwrap();
    assert_eq!(config.mode(), mode);
    assert_eq!(config.data_entry("mappings"), Some("config/joined.tsrg"));
}

#[test]
fn test_export_config_rejects_malformed_json() {
    assert!(matches!(
        ExportConfig::from_json(b"{not json"),
        Err(MergeError::Json(_))
    ));
}
