//! SRG reader (`PK:`, `CL:`, `FD:`, `MD:` records).

use super::model::MappingFile;
use crate::error::{MergeError, Result};

const FORMAT: &str = "SRG";

/// Parse an SRG document.
pub(super) fn parse(text: &str) -> Result<MappingFile> {
    let mut file = MappingFile::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or(raw).trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            ["PK:", original, mapped] => {
                file.add_package(*original, *mapped);
            }
            ["CL:", original, mapped] => {
                file.add_class(*original, *mapped);
            }
            // Members may arrive before (or without) their `CL:` record.
            ["FD:", original, mapped] | ["FD:", original, _, mapped, _] => {
                let descriptor = (tokens.len() == 5).then(|| tokens[2].to_string());
                let (owner, name) = split_member(original, line_no)?;
                let (mapped_owner, mapped_name) = split_member(mapped, line_no)?;
                file.add_class(owner, mapped_owner)
                    .add_field(name, mapped_name, descriptor);
            }
            ["MD:", original, descriptor, mapped, _] => {
                let (owner, name) = split_member(original, line_no)?;
                let (mapped_owner, mapped_name) = split_member(mapped, line_no)?;
                file.add_class(owner, mapped_owner)
                    .add_method(name, *descriptor, mapped_name);
            }
            _ => {
                return Err(MergeError::parse(FORMAT, line_no, "unrecognized record"));
            }
        }
    }

    Ok(file)
}

fn split_member(path: &str, line: usize) -> Result<(&str, &str)> {
    path.rsplit_once('/')
        .ok_or_else(|| MergeError::parse(FORMAT, line, format!("member {path} has no owner")))
}
