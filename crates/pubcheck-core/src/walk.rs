//! # Tree Traversal
//!
//! Single synchronous pass over the tree: enumerate files in sorted order,
//! prune vendored/hidden directories, filter to candidate JSON files, parse
//! each once, classify by path, and apply the matching rule set.
//!
//! Sorted traversal makes the emitted report deterministic: two runs over an
//! unchanged tree render byte-identical output.

use std::path::Path;

use serde_json::Value;
use walkdir::{DirEntry, WalkDir};

use crate::classify::classify;
use crate::diagnostic::{Diagnostic, Report};
use crate::error::WalkError;
use crate::rules::apply_rules;

/// Directory names whose entire subtree is skipped.
pub const IGNORED_DIRS: [&str; 4] = [".git", ".github", "node_modules", "__pycache__"];

fn is_pruned_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| IGNORED_DIRS.contains(&name))
}

/// A candidate file ends in `.json`, is not `meta.json`, and is not package
/// metadata (any basename with a `package` prefix).
fn is_candidate(name: &str) -> bool {
    name.ends_with(".json") && name != "meta.json" && !name.starts_with("package")
}

/// Walk `root` and validate every candidate JSON file beneath it.
///
/// Classification looks at the path *relative to the root*, so components of
/// the root path itself (say, a parent directory that happens to be named
/// `publications`) never influence which rules apply. Diagnostics carry the
/// full path as walked.
///
/// # Errors
///
/// Returns [`WalkError`] when a directory cannot be traversed or a candidate
/// file cannot be read. Malformed JSON is reported in the [`Report`] instead.
pub fn validate_tree(root: &Path) -> Result<Report, WalkError> {
    let mut report = Report::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_pruned_dir(entry));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_candidate(name) {
            continue;
        }

        let path = entry.path();
        tracing::debug!(path = %path.display(), "checking file");

        let text = std::fs::read_to_string(path).map_err(|source| WalkError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // Every candidate is parsed before classification; a file no rule
        // applies to still gets its parse errors reported.
        let doc: Value = match serde_json::from_str(&text) {
            Ok(doc) => doc,
            Err(err) => {
                report.push(Diagnostic::parse_failure(path, format!("JSON parse error: {err}")));
                continue;
            }
        };

        let relative = path.strip_prefix(root).unwrap_or(path);
        if let Some(classification) = classify(relative) {
            tracing::trace!(path = %path.display(), ?classification, "classified");
            apply_rules(classification, path, &doc, &mut report);
        }
    }

    Ok(report)
}
