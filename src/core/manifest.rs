//! Line-oriented go.mod parsing.
//!
//! Only two things are extracted: the `require` entries and the module paths
//! that already carry a `replace` directive. Parsing is deliberately
//! permissive. Lines that are not understood are skipped rather than
//! reported, since go.mod has many legal shapes this tool never needs.

use std::collections::HashSet;

use crate::core::dependency::{filter_dependencies, DependencyRecord};

/// Name of the manifest looked up in the working directory.
pub const MANIFEST_NAME: &str = "go.mod";

/// The parts of a go.mod this tool cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedManifest {
    /// Direct requirements, in file order.
    pub records: Vec<DependencyRecord>,

    /// Module paths on the left-hand side of a `replace` directive.
    pub replaced: HashSet<String>,
}

impl ParsedManifest {
    /// Module paths containing `partial` that have no replace directive yet.
    pub fn matches(&self, partial: &str) -> Vec<String> {
        filter_dependencies(&self.records, &self.replaced, partial)
    }

    /// Check whether `module` already has a replace directive.
    pub fn is_replaced(&self, module: &str) -> bool {
        self.replaced.contains(module)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    None,
    Require,
    Replace,
}

/// Parse manifest text into requirements and already-replaced paths.
pub fn parse(text: &str) -> ParsedManifest {
    let mut parsed = ParsedManifest::default();
    let mut block = Block::None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with("require (") {
            block = Block::Require;
        } else if block != Block::Require && line.starts_with("require ") {
            if let Some(dep) = parse_require_line(&line["require ".len()..]) {
                parsed.records.push(dep);
            }
        } else if block == Block::Require {
            if line == ")" {
                block = Block::None;
            } else if let Some(dep) = parse_require_line(line) {
                parsed.records.push(dep);
            }
        } else if line.starts_with("replace (") {
            block = Block::Replace;
        } else if block == Block::Replace {
            if line == ")" {
                block = Block::None;
            } else if let Some(path) = extract_replace_path(line) {
                parsed.replaced.insert(path);
            }
        } else if line.starts_with("replace ") {
            if let Some(path) = extract_replace_path(line) {
                parsed.replaced.insert(path);
            }
        }
    }

    tracing::debug!(
        "parsed {} requirement(s), {} replace(s)",
        parsed.records.len(),
        parsed.replaced.len()
    );
    parsed
}

/// Parse `<path> <version> [// comment]`.
///
/// Entries marked `indirect` anywhere on the line are dropped, as are lines
/// with fewer than two fields.
fn parse_require_line(line: &str) -> Option<DependencyRecord> {
    if line.contains("indirect") {
        tracing::trace!("skipping indirect requirement: {}", line);
        return None;
    }

    let line = match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    };

    let mut fields = line.split_whitespace();
    let path = fields.next()?;
    let version = fields.next()?;

    Some(DependencyRecord::new(path, version))
}

/// Left-hand side of `[replace ]<path> => <target>`, if there is an arrow.
fn extract_replace_path(line: &str) -> Option<String> {
    let (left, _) = line.split_once("=>")?;
    let path = left.strip_prefix("replace ").unwrap_or(left).trim();

    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}
