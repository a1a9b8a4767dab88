//! ProGuard mapping reader.
//!
//! ```text
//! net.example.Foo -> a:
//!     int count -> b
//!     1:4:void doThing(int,java.lang.String) -> a
//!     void <init>() -> <init>
//! ```
//!
//! Names on the left are the original (readable) side. Source types are
//! converted to descriptors; line-number ranges and inlining information are
//! ignored, and repeated method lines (inlined frames) keep the first entry.

use super::descriptor::{java_method_descriptor, java_type_descriptor};
use super::model::MappingFile;
use crate::error::{MergeError, Result};

const FORMAT: &str = "ProGuard";
const ARROW: &str = " -> ";

/// Parse a ProGuard mapping document.
pub(super) fn parse(text: &str) -> Result<MappingFile> {
    let mut file = MappingFile::new();
    let mut class: Option<String> = None;

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let line_no = idx + 1;
        let Some((left, mapped)) = trimmed.split_once(ARROW) else {
            return Err(MergeError::parse(FORMAT, line_no, "missing ' -> ' separator"));
        };

        if !line.starts_with(char::is_whitespace) {
            let Some(mapped) = mapped.strip_suffix(':') else {
                return Err(MergeError::parse(FORMAT, line_no, "class line must end with ':'"));
            };
            let original = left.replace('.', "/");
            file.add_class(original.as_str(), mapped.trim());
            class = Some(original);
            continue;
        }

        let Some(owner) = class.as_deref() else {
            return Err(MergeError::parse(FORMAT, line_no, "member declared outside of a class"));
        };
        let Some(target) = file.class_mut(owner) else {
            return Err(MergeError::parse(FORMAT, line_no, "member declared outside of a class"));
        };
        let mapped = mapped.trim();

        if left.contains('(') {
            let (name, descriptor) = parse_method(strip_line_numbers(left))
                .ok_or_else(|| MergeError::parse(FORMAT, line_no, "malformed method"))?;
            target.add_method(name, descriptor, mapped);
        } else {
            let (ty, name) = left
                .rsplit_once(' ')
                .ok_or_else(|| MergeError::parse(FORMAT, line_no, "malformed field"))?;
            target.add_field(name.trim(), mapped, Some(java_type_descriptor(ty)));
        }
    }

    Ok(file)
}

/// Drop a leading `start:end:` line-number range.
fn strip_line_numbers(member: &str) -> &str {
    let mut rest = member;
    while let Some((head, tail)) = rest.split_once(':') {
        if head.is_empty() || !head.bytes().all(|b| b.is_ascii_digit()) {
            break;
        }
        rest = tail;
    }
    rest
}

/// Split `ret name(args)[:a:b]` into the name and its descriptor.
fn parse_method(member: &str) -> Option<(&str, String)> {
    let open = member.find('(')?;
    let close = open + member[open..].find(')')?;
    let (return_type, name) = member[..open].trim().rsplit_once(' ')?;
    let args = member[open + 1..close]
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty());
    Some((name, java_method_descriptor(args, return_type)))
}
