//! # pubcheck-core — Publication Tree Shape Validation
//!
//! Walks a directory tree of JSON documents and checks that files matching
//! known naming/location patterns conform to a small set of shape rules:
//!
//! - `publications/<identifier>/manifest.json` — mapping with required
//!   `identifier` and `title`; the identifier should equal the parent
//!   directory name.
//! - `publications/<identifier>/segments/<segment>/dialogues.json` — array of
//!   mappings, each requiring `character_identifier`, `ordinal`, and `text`.
//! - `publications/recent.json` — array of mappings, each requiring an
//!   identifier-bearing key and an author-bearing key.
//! - Any other `*.json` under a `publications/` subtree — mapping expected to
//!   carry an identifier-bearing key (warning only).
//!
//! Findings accumulate into an ordered [`Report`] of [`Diagnostic`]s; the
//! caller decides how to render them and what exit status to produce.
//!
//! ## Crate Policy
//!
//! - No CLI concerns here; argument parsing and output rendering live in
//!   `pubcheck-cli`.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - A malformed document is a reported finding, never an abort; only
//!   filesystem failures (unreadable file or directory) end the walk early.

pub mod classify;
pub mod diagnostic;
pub mod error;
pub mod rules;
pub mod walk;

// Re-export primary types for ergonomic imports.
pub use classify::{classify, FileClassification};
pub use diagnostic::{Diagnostic, Report, Severity};
pub use error::WalkError;
pub use walk::validate_tree;
