//! TSRG v1 and v2 readers.
//!
//! ```text
//! tsrg2 obf srg id           <- v2 header (namespaces)
//! a net/minecraft/src/C_1_ 1 <- class
//! \ta f_2_ 2                 <- field (optionally with descriptor)
//! \tb (I)V m_3_ 3            <- method
//! \t\tstatic                 <- method is static
//! \t\t1 o p_3_1_ 4           <- parameter
//! ```
//!
//! Only the first two namespaces of a v2 file are read.

use super::model::MappingFile;
use crate::error::{MergeError, Result};

const V1: &str = "TSRG";
const V2: &str = "TSRG2";

/// Parse a TSRG v1 document.
pub(super) fn parse_v1(text: &str) -> Result<MappingFile> {
    Reader::new(V1, 2).read(text.lines().enumerate())
}

/// Parse a TSRG v2 document, header line included.
pub(super) fn parse_v2(text: &str) -> Result<MappingFile> {
    let mut lines = text.lines().enumerate();
    let (_, header) = lines
        .by_ref()
        .find(|(_, line)| !is_skippable(line))
        .ok_or_else(|| MergeError::parse(V2, 1, "missing header"))?;

    let namespaces = header.split_whitespace().skip(1).count();
    if namespaces < 2 {
        return Err(MergeError::parse(
            V2,
            1,
            format!("expected at least two namespaces, found {namespaces}"),
        ));
    }

    Reader::new(V2, namespaces).read(lines)
}

fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

struct Reader {
    format: &'static str,
    namespaces: usize,
    file: MappingFile,
    class: Option<String>,
    method: Option<(String, String)>,
}

impl Reader {
    fn new(format: &'static str, namespaces: usize) -> Self {
        Self {
            format,
            namespaces,
            file: MappingFile::new(),
            class: None,
            method: None,
        }
    }

    fn read<'a>(mut self, lines: impl Iterator<Item = (usize, &'a str)>) -> Result<MappingFile> {
        for (idx, raw) in lines {
            if is_skippable(raw) {
                continue;
            }
            let line = raw.split('#').next().unwrap_or(raw).trim_end();
            let depth = line.chars().take_while(|c| *c == '\t').count();
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let line_no = idx + 1;

            match depth {
                0 => self.top_level(line_no, &tokens)?,
                1 => self.member(line_no, &tokens)?,
                2 if self.format == V2 => self.parameter(line_no, &tokens)?,
                _ => return Err(self.error(line_no, format!("unexpected indentation {depth}"))),
            }
        }

        Ok(self.file)
    }

    fn top_level(&mut self, line: usize, tokens: &[&str]) -> Result<()> {
        if tokens.len() != self.namespaces {
            return Err(self.error(line, format!("expected {} names", self.namespaces)));
        }
        self.method = None;

        if tokens[0].ends_with('/') {
            self.class = None;
            self.file.add_package(
                tokens[0].trim_end_matches('/'),
                tokens[1].trim_end_matches('/'),
            );
        } else {
            self.file.add_class(tokens[0], tokens[1]);
            self.class = Some(tokens[0].to_string());
        }
        Ok(())
    }

    fn member(&mut self, line: usize, tokens: &[&str]) -> Result<()> {
        let Some(owner) = self.class.clone() else {
            return Err(self.error(line, "member declared outside of a class"));
        };
        let n = self.namespaces;
        let method = tokens.len() == n + 1 && tokens[1].starts_with('(');
        let Some(class) = self.file.class_mut(&owner) else {
            return Err(self.error(line, "member declared outside of a class"));
        };

        if method {
            class.add_method(tokens[0], tokens[1], tokens[2]);
            self.method = Some((tokens[0].to_string(), tokens[1].to_string()));
        } else if tokens.len() == n {
            class.add_field(tokens[0], tokens[1], None);
            self.method = None;
        } else if tokens.len() == n + 1 {
            class.add_field(tokens[0], tokens[2], Some(tokens[1].to_string()));
            self.method = None;
        } else {
            return Err(self.error(line, "malformed member"));
        }
        Ok(())
    }

    fn parameter(&mut self, line: usize, tokens: &[&str]) -> Result<()> {
        let (Some(owner), Some((name, descriptor))) = (self.class.clone(), self.method.clone())
        else {
            return Err(self.error(line, "parameter declared outside of a method"));
        };
        let Some(method) = self
            .file
            .class_mut(&owner)
            .and_then(|c| c.method_mut(&name, &descriptor))
        else {
            return Err(self.error(line, "parameter declared outside of a method"));
        };

        if tokens == ["static"] {
            method.set_static();
            return Ok(());
        }
        if tokens.len() != self.namespaces + 1 {
            return Err(self.error(line, "malformed parameter"));
        }
        let Ok(index) = tokens[0].parse::<u32>() else {
            return Err(self.error(line, format!("invalid parameter index {}", tokens[0])));
        };
        method.add_parameter(index, tokens[1], tokens[2]);
        Ok(())
    }

    fn error(&self, line: usize, message: impl Into<String>) -> MergeError {
        MergeError::parse(self.format, line, message)
    }
}
