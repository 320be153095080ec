//! # Diagnostics
//!
//! One reported validation finding, tied to a path and optionally an index
//! into an array-shaped document, plus the ordered collection the walk
//! accumulates them into.
//!
//! Diagnostics are append-only and never deduplicated: emission order follows
//! file-tree traversal order, and rendering the same tree twice produces
//! byte-identical output.

use std::fmt;
use std::path::PathBuf;

/// How severe a finding is, conveyed in output only through a leading symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A shape rule was violated.
    Error,
    /// Suspicious but tolerated (e.g. directory/identifier mismatch).
    Warning,
    /// The file could not be parsed as JSON at all.
    ParseFailure,
}

impl Severity {
    /// The symbol prefixed to a rendered diagnostic line.
    pub fn symbol(self) -> &'static str {
        match self {
            Severity::Error => "❌",
            Severity::Warning => "⚠️",
            Severity::ParseFailure => "🔥",
        }
    }
}

/// A single validation finding.
///
/// Renders as `<symbol> <path>: <message>`, with an `[index]` suffix on the
/// path when the finding concerns one element of an array-shaped document.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity of the finding.
    pub severity: Severity,
    /// Filesystem path of the offending file.
    pub path: PathBuf,
    /// Index into the document, for findings on array elements.
    pub index: Option<usize>,
    /// Human-readable description of the finding.
    pub message: String,
}

impl Diagnostic {
    /// Create an error-severity finding.
    pub fn error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, path, message)
    }

    /// Create a warning-severity finding.
    pub fn warning(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, path, message)
    }

    /// Create a parse-failure finding.
    pub fn parse_failure(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(Severity::ParseFailure, path, message)
    }

    fn new(severity: Severity, path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            severity,
            path: path.into(),
            index: None,
            message: message.into(),
        }
    }

    /// Attach an array index to the finding.
    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(
                f,
                "{} {}[{}]: {}",
                self.severity.symbol(),
                self.path.display(),
                i,
                self.message
            ),
            None => write!(
                f,
                "{} {}: {}",
                self.severity.symbol(),
                self.path.display(),
                self.message
            ),
        }
    }
}

/// Ordered collection of findings produced by one validation walk.
#[derive(Debug, Default)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding. Findings are never removed or reordered.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// True iff no findings were recorded.
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// True iff no findings were recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// All findings in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_index() {
        let d = Diagnostic::error("publications/x/manifest.json", "Missing required manifest field 'title'");
        assert_eq!(
            d.to_string(),
            "❌ publications/x/manifest.json: Missing required manifest field 'title'"
        );
    }

    #[test]
    fn display_with_index() {
        let d = Diagnostic::error("a/dialogues.json", "dialogue entry not an object").at_index(3);
        assert_eq!(d.to_string(), "❌ a/dialogues.json[3]: dialogue entry not an object");
    }

    #[test]
    fn severity_symbols() {
        assert_eq!(Severity::Error.symbol(), "❌");
        assert_eq!(Severity::Warning.symbol(), "⚠️");
        assert_eq!(Severity::ParseFailure.symbol(), "🔥");
    }

    #[test]
    fn report_passed_tracks_emptiness() {
        let mut report = Report::new();
        assert!(report.passed());
        assert_eq!(report.len(), 0);

        report.push(Diagnostic::warning("p.json", "suspicious"));
        assert!(!report.passed());
        assert_eq!(report.len(), 1);
        assert_eq!(report.diagnostics()[0].severity, Severity::Warning);
    }
}
