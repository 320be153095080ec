//! # Path Classification
//!
//! Decides which rule set applies to a JSON file from its path shape alone —
//! directory component names and the file basename. Content never influences
//! classification.
//!
//! Rules are an ordered predicate list evaluated first-match-wins:
//!
//! 1. `manifest.json` under a `publications` directory → [`Manifest`]
//! 2. `dialogues.json` under a `segments` directory → [`Dialogues`]
//! 3. path ending in `publications/recent.json` → [`Recent`]
//! 4. anything else under a `publications` directory → [`GenericPublication`]
//!
//! A path matching none of the rules is unclassified (`None`) and receives no
//! shape validation.
//!
//! [`Manifest`]: FileClassification::Manifest
//! [`Dialogues`]: FileClassification::Dialogues
//! [`Recent`]: FileClassification::Recent
//! [`GenericPublication`]: FileClassification::GenericPublication

use std::path::Path;

/// Which rule set applies to a JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClassification {
    /// A publication's `manifest.json`.
    Manifest,
    /// A segment's `dialogues.json`.
    Dialogues,
    /// The `publications/recent.json` summary.
    Recent,
    /// Any other JSON file under a `publications` subtree.
    GenericPublication,
}

type Predicate = fn(&Path) -> bool;

/// Ordered classification rules; the first matching predicate wins.
const RULES: [(Predicate, FileClassification); 4] = [
    (is_manifest, FileClassification::Manifest),
    (is_dialogues, FileClassification::Dialogues),
    (is_recent, FileClassification::Recent),
    (is_generic_publication, FileClassification::GenericPublication),
];

/// Classify a path relative to the traversal root.
///
/// Returns `None` for paths no rule applies to.
pub fn classify(path: &Path) -> Option<FileClassification> {
    RULES
        .iter()
        .find(|(predicate, _)| predicate(path))
        .map(|&(_, classification)| classification)
}

/// True iff the file's basename is exactly `name`.
fn basename_is(path: &Path, name: &str) -> bool {
    path.file_name().is_some_and(|f| f == name)
}

/// True iff some *directory* component of the path is exactly `name`.
/// The basename itself does not count.
fn under_dir(path: &Path, name: &str) -> bool {
    path.parent()
        .is_some_and(|p| p.components().any(|c| c.as_os_str() == name))
}

fn is_manifest(path: &Path) -> bool {
    basename_is(path, "manifest.json") && under_dir(path, "publications")
}

fn is_dialogues(path: &Path) -> bool {
    basename_is(path, "dialogues.json") && under_dir(path, "segments")
}

fn is_recent(path: &Path) -> bool {
    // Separator-agnostic check that the path ends with the component
    // sequence `publications/recent.json`.
    let mut components = path.components().rev();
    components.next().is_some_and(|c| c.as_os_str() == "recent.json")
        && components.next().is_some_and(|c| c.as_os_str() == "publications")
}

fn is_generic_publication(path: &Path) -> bool {
    under_dir(path, "publications")
}
