//! Project tests
//!
//! - Loading merge inputs from export, readable and curated artifacts
//! - Version strings, coordinates and export configuration

mod tests_artifacts;
mod tests_versions;
