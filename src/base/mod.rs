//! Foundation types for the merge.
//!
//! This module provides the naming conventions every other module leans on:
//! - [`constants`] - generated-identifier prefixes, table names, archive entries
//! - [`ident`] - identifier classification and parameter-id helpers
//!
//! This module has NO dependencies on other namebridge modules.

pub mod constants;
mod ident;

pub use ident::{
    constructor_parameter_id, display_class_name, is_generated_identifier,
    is_synthetic_class_name, method_parameter_id, method_tag,
};
