//! JVM type descriptors.
//!
//! Helpers for walking descriptors, converting Java source types into
//! descriptor form, and translating JVM local-variable indices into the
//! positional parameter slots used by official intermediate exports.

/// Placeholder used for every reference-typed slot.
const REFERENCE_SLOT: char = 'L';

/// Parameter section of a method descriptor, without the parentheses.
///
/// Returns an empty string when the descriptor is not a method descriptor.
pub fn parameter_section(descriptor: &str) -> &str {
    let Some(open) = descriptor.find('(') else {
        return "";
    };
    let Some(close) = descriptor.rfind(')') else {
        return "";
    };
    if close <= open {
        return "";
    }
    &descriptor[open + 1..close]
}

/// One character per declared parameter.
///
/// Object types (`Lpkg/Name;`) and arrays (`[...`) collapse to `L`; primitive
/// types keep their descriptor character, so `J` and `D` remain visible as
/// wide types.
pub fn parameter_slots(descriptor: &str) -> Vec<char> {
    let args = parameter_section(descriptor);
    let mut slots = Vec::new();
    let mut chars = args.chars();

    while let Some(c) = chars.next() {
        match c {
            '[' => {
                let mut element = chars.next();
                while element == Some('[') {
                    element = chars.next();
                }
                if element == Some('L') {
                    skip_class_name(&mut chars);
                }
                slots.push(REFERENCE_SLOT);
            }
            'L' => {
                skip_class_name(&mut chars);
                slots.push(REFERENCE_SLOT);
            }
            other => slots.push(other),
        }
    }

    slots
}

fn skip_class_name(chars: &mut std::str::Chars<'_>) {
    for c in chars.by_ref() {
        if c == ';' {
            break;
        }
    }
}

/// Translate a JVM local-variable index into a positional parameter slot.
///
/// Instance methods reserve JVM index 0 for the receiver, and `long` and
/// `double` parameters occupy two JVM indices each. The result may be past
/// the end of the parameter list when the index does not belong to this
/// descriptor; callers must bounds-check it.
pub fn jvm_index_to_slot(descriptor: &str, jvm_index: u32, is_static: bool) -> usize {
    let slots = parameter_slots(descriptor);
    let mut current = if is_static { 0 } else { 1 };
    let mut slot = 0usize;

    while current < jvm_index {
        match slots.get(slot) {
            Some('J') | Some('D') => current += 2,
            _ => current += 1,
        }
        slot += 1;
    }

    slot
}

/// Convert a Java source type (`int`, `java.lang.String[]`) to a descriptor.
pub fn java_type_descriptor(java_type: &str) -> String {
    let mut base = java_type.trim();
    let mut out = String::new();
    while let Some(element) = base.strip_suffix("[]") {
        out.push('[');
        base = element.trim_end();
    }

    match base {
        "byte" => out.push('B'),
        "char" => out.push('C'),
        "double" => out.push('D'),
        "float" => out.push('F'),
        "int" => out.push('I'),
        "long" => out.push('J'),
        "short" => out.push('S'),
        "boolean" => out.push('Z'),
        "void" => out.push('V'),
        class => {
            out.push('L');
            out.push_str(&class.replace('.', "/"));
            out.push(';');
        }
    }

    out
}

/// Build a method descriptor from Java source parameter and return types.
pub fn java_method_descriptor<'a>(
    parameters: impl IntoIterator<Item = &'a str>,
    return_type: &str,
) -> String {
    let mut out = String::from("(");
    for parameter in parameters {
        out.push_str(&java_type_descriptor(parameter));
    }
    out.push(')');
    out.push_str(&java_type_descriptor(return_type));
    out
}
