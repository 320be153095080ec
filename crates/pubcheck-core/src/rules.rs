//! # Shape Rules
//!
//! Per-classification validation of parsed JSON documents. Each checker
//! appends findings to the shared [`Report`]; none of them aborts the walk.
//!
//! ## Alias Resolution
//!
//! Publication data accumulated identifier and author keys under several
//! names over time. Lookups use an ordered candidate list and take the first
//! key that is *present* — a key carrying `null` still counts as found.

use std::path::Path;

use serde_json::Value;

use crate::classify::FileClassification;
use crate::diagnostic::{Diagnostic, Report};

/// Identifier-bearing keys, in precedence order.
const IDENTIFIER_KEYS: [&str; 3] = ["identifier", "id", "publication_identifier"];

/// Author-bearing keys, in precedence order.
const AUTHOR_KEYS: [&str; 3] = ["author", "author_name", "author_names"];

/// Keys every manifest must carry.
const MANIFEST_REQUIRED: [&str; 2] = ["identifier", "title"];

/// Keys every dialogue entry must carry.
const DIALOGUE_REQUIRED: [&str; 3] = ["character_identifier", "ordinal", "text"];

/// Apply the rule set for `classification` to a parsed document.
pub fn apply_rules(
    classification: FileClassification,
    path: &Path,
    doc: &Value,
    report: &mut Report,
) {
    match classification {
        FileClassification::Manifest => check_manifest(path, doc, report),
        FileClassification::Dialogues => check_dialogues(path, doc, report),
        FileClassification::Recent => check_recent(path, doc, report),
        FileClassification::GenericPublication => check_generic_publication(path, doc, report),
    }
}

/// First present value among `keys`, in order. Presence, not truthiness:
/// a key mapped to `null` is found. Non-mapping documents have no keys.
fn first_present<'a>(doc: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let obj = doc.as_object()?;
    keys.iter().find_map(|key| obj.get(*key))
}

/// String form used when comparing an identifier to a directory name.
/// Strings compare by their contents; anything else by its JSON rendering.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A manifest must be a mapping with `identifier` and `title`, and its
/// identifier should equal the parent directory name.
///
/// A manifest with no identifier-bearing key at all is reported twice: once
/// by the required-field loop (for the literal key `identifier`) and once by
/// the alias-resolution branch. The double report is intentional and kept
/// stable for downstream consumers.
fn check_manifest(path: &Path, doc: &Value, report: &mut Report) {
    for key in MANIFEST_REQUIRED {
        if doc.get(key).is_none() {
            report.push(Diagnostic::error(
                path,
                format!("Missing required manifest field '{key}'"),
            ));
        }
    }

    let parent_dir = path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match first_present(doc, &IDENTIFIER_KEYS) {
        Some(identifier) => {
            let identifier = value_text(identifier);
            if identifier != parent_dir {
                report.push(Diagnostic::warning(
                    path,
                    format!("Parent dir '{parent_dir}' != identifier '{identifier}'"),
                ));
            }
        }
        None => {
            report.push(Diagnostic::error(path, "manifest missing identifier field"));
        }
    }
}

/// A dialogues file must be an array of mappings, each carrying
/// `character_identifier`, `ordinal`, and `text`.
fn check_dialogues(path: &Path, doc: &Value, report: &mut Report) {
    let Some(entries) = doc.as_array() else {
        report.push(Diagnostic::error(path, "dialogues file should be a JSON array"));
        return;
    };

    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            report.push(Diagnostic::error(path, "dialogue entry not an object").at_index(index));
            continue;
        }
        for key in DIALOGUE_REQUIRED {
            if entry.get(key).is_none() {
                report.push(
                    Diagnostic::error(path, format!("Missing required dialogue field '{key}'"))
                        .at_index(index),
                );
            }
        }
    }
}

/// The recent-items summary must be an array of mappings, each carrying an
/// identifier-bearing key and an author-bearing key. The two checks are
/// independent; one entry can produce both findings.
fn check_recent(path: &Path, doc: &Value, report: &mut Report) {
    let Some(entries) = doc.as_array() else {
        report.push(Diagnostic::error(path, "expected array of recent items"));
        return;
    };

    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            report.push(Diagnostic::error(path, "recent entry not an object").at_index(index));
            continue;
        }
        if first_present(entry, &IDENTIFIER_KEYS).is_none() {
            report.push(
                Diagnostic::error(
                    path,
                    "missing publication identifier (publication_identifier/identifier/id)",
                )
                .at_index(index),
            );
        }
        if first_present(entry, &AUTHOR_KEYS).is_none() {
            report.push(
                Diagnostic::error(path, "missing author field (author_names/author)")
                    .at_index(index),
            );
        }
    }
}

/// Other JSON files inside a publication directory are expected to carry an
/// identifier-bearing key when they are mappings. Non-mapping documents are
/// accepted silently.
fn check_generic_publication(path: &Path, doc: &Value, report: &mut Report) {
    if doc.is_object() && first_present(doc, &IDENTIFIER_KEYS).is_none() {
        report.push(Diagnostic::warning(
            path,
            "expected an identifier key (identifier/id/publication_identifier)",
        ));
    }
}
