//! Composition of the two name layers into readable→intermediate.

use crate::base::is_synthetic_class_name;
use crate::mapping::MappingFile;

/// Build the readable→intermediate mapping.
///
/// `obf_to_intermediate` maps obfuscated names to intermediate ids and
/// `readable_to_obf` maps readable names to obfuscated ones. The result is
/// computed as `reverse(reverse(obf_to_intermediate) ∘ reverse(readable_to_obf))`,
/// which keeps the intermediate parameter lists attached to their methods.
/// Placeholder class names are then replaced by the readable class name.
pub fn compose(obf_to_intermediate: &MappingFile, readable_to_obf: &MappingFile) -> MappingFile {
    let mut composed = obf_to_intermediate
        .reverse()
        .chain(&readable_to_obf.reverse())
        .reverse();

    composed.rename_classes(|class| {
        is_synthetic_class_name(&class.mapped).then(|| class.original.clone())
    });

    tracing::debug!(
        classes = composed.classes.len(),
        methods = composed.method_count(),
        "composed readable to intermediate mapping"
    );
    composed
}
