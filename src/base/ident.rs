//! Identifier classification.
//!
//! Pure string tests over intermediate identifiers. Nothing here allocates
//! except the helpers that build new identifiers.

use super::constants::{GENERATED_PREFIXES, SYNTHETIC_CLASS_PREFIX};

/// True iff `name` lives in the generated-identifier namespace.
pub fn is_generated_identifier(name: &str) -> bool {
    GENERATED_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// True iff `name` is a placeholder class name.
pub fn is_synthetic_class_name(name: &str) -> bool {
    name.starts_with(SYNTHETIC_CLASS_PREFIX)
}

/// Dotted display name for a class or package.
///
/// Placeholder class names are useless downstream, so the human-readable
/// `original` name is used for them instead of `mapped`.
pub fn display_class_name(original: &str, mapped: &str) -> String {
    let name = if is_synthetic_class_name(mapped) {
        original
    } else {
        mapped
    };
    name.replace('/', ".")
}

/// Short tag used to build legacy parameter ids from a method id.
///
/// `func_1234_a` yields `1234`; an id without `_` is its own tag. Trailing
/// empty segments are ignored, so `a_` has no tag at all while `func__a` has
/// an empty one. Returns `None` when there is no tag or it is purely
/// alphabetic: such a method was named by hand (typically a functional
/// interface method) and its parameters have no generated ids.
pub fn method_tag(mapped: &str) -> Option<&str> {
    let tag = if mapped.contains('_') {
        let trimmed = mapped.trim_end_matches('_');
        trimmed.split('_').nth(1)?
    } else {
        mapped
    };

    if !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphabetic()) {
        None
    } else {
        Some(tag)
    }
}

/// Legacy parameter id for an ordinary method: `p_<tag>_<index>_`.
pub fn method_parameter_id(tag: &str, index: u32) -> String {
    format!("p_{tag}_{index}_")
}

/// Legacy parameter id for a constructor: `p_i<id>_<index>_`.
pub fn constructor_parameter_id(constructor_id: &str, index: u32) -> String {
    format!("p_i{constructor_id}_{index}_")
}
