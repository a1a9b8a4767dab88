//! Domain constants shared across the crate.

/// Prefixes of machine-generated intermediate identifiers.
///
/// `p_` parameters, `func_`/`m_` methods, `field_`/`f_` fields.
pub const GENERATED_PREFIXES: &[&str] = &["p_", "func_", "m_", "field_", "f_"];

/// Prefix of placeholder class names emitted by some intermediate exports.
pub const SYNTHETIC_CLASS_PREFIX: &str = "net/minecraft/src/C_";

/// Prefix marking a generated field identifier.
pub const FIELD_PREFIX: &str = "f_";

/// Name of every constructor in the JVM.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// Metadata key marking a static method.
pub const STATIC_METADATA: &str = "is_static";

/// Header row of every output table.
pub const TABLE_HEADER: [&str; 3] = ["searge", "name", "desc"];

/// Separator between joined documentation lines (a literal backslash-n).
pub const DOC_LINE_SEPARATOR: &str = "\\n";

/// Archive entry holding the curated database.
pub const CURATED_ENTRY: &str = "parchment.json";

/// Archive entry holding the intermediate export configuration.
pub const EXPORT_CONFIG_ENTRY: &str = "config.json";
