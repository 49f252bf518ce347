//! Template validation: malformed or unknown placeholders plus structural warnings.
//!
//! Findings never surface as `Err`; they accumulate into a [`ValidationResult`]
//! and the caller decides what is fatal.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Serialize;

use crate::catalog::is_hidden;
use crate::content::decode_text;
use crate::placeholder::{Placeholder, TOKEN_PREFIX, token_pattern};
use crate::store::FileStore;

/// Content longer than this many characters is reported as a large file.
pub const LARGE_FILE_CHARS: usize = 1_000_000;

/// Outcome of validating one template item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn finish(mut self) -> Self {
        self.valid = self.errors.is_empty();
        self
    }
}

#[derive(Clone, Copy)]
enum Location {
    FileName,
    DirectoryName,
    Content,
}

impl Location {
    fn label(self) -> &'static str {
        match self {
            Location::FileName => "filename",
            Location::DirectoryName => "directory name",
            Location::Content => "content",
        }
    }
}

/// Tokens found in a piece of text that are not part of the vocabulary, and
/// whether any `__templateName` prefix failed to open a well-formed token.
#[derive(Debug, Default, PartialEq, Eq)]
struct PlaceholderScan {
    unrecognized: Vec<String>,
    incomplete: bool,
}

fn scan_placeholders(text: &str) -> PlaceholderScan {
    if !text.contains(TOKEN_PREFIX) {
        return PlaceholderScan::default();
    }

    let mut scan = PlaceholderScan::default();
    let mut well_formed_starts = HashSet::new();
    for found in token_pattern().find_iter(text) {
        well_formed_starts.insert(found.start());
        if Placeholder::from_token(found.as_str()).is_none() {
            scan.unrecognized.push(found.as_str().to_string());
        }
    }
    scan.incomplete = text
        .match_indices(TOKEN_PREFIX)
        .any(|(idx, _)| !well_formed_starts.contains(&idx));
    scan
}

fn has_mixed_line_endings(content: &str) -> bool {
    let bytes = content.as_bytes();
    let mut crlf = false;
    let mut bare_lf = false;
    for (idx, _) in content.match_indices('\n') {
        if idx > 0 && bytes[idx - 1] == b'\r' {
            crlf = true;
        } else {
            bare_lf = true;
        }
        if crlf && bare_lf {
            return true;
        }
    }
    false
}

/// Validates templates read through a [`FileStore`].
pub struct TemplateValidator<S: FileStore> {
    store: S,
}

impl<S: FileStore> TemplateValidator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates a single template file or directory tree.
    pub fn validate(&self, path: &Path) -> ValidationResult {
        let mut result = ValidationResult::default();
        self.visit(path, true, &mut result);
        result.finish()
    }

    /// Validates every template under `root`, keyed by template name.
    ///
    /// An unreadable root yields a single entry keyed by the root path itself.
    pub fn validate_all(&self, root: &Path) -> BTreeMap<String, ValidationResult> {
        let mut results = BTreeMap::new();
        let entries = match self.store.list_entries(root) {
            Ok(entries) => entries,
            Err(err) => {
                let result = ValidationResult {
                    errors: vec![format!("Cannot access templates root: {err}")],
                    ..ValidationResult::default()
                };
                results.insert(root.display().to_string(), result.finish());
                return results;
            }
        };

        for name in entries.into_iter().filter(|name| !is_hidden(name)) {
            let result = self.validate(&root.join(&name));
            results.insert(name, result);
        }
        results
    }

    fn visit(&self, path: &Path, is_root: bool, result: &mut ValidationResult) {
        if !self.store.exists(path) {
            result
                .errors
                .push(format!("Cannot access template: {}", path.display()));
            return;
        }

        if self.store.is_dir(path) {
            self.visit_dir(path, is_root, result);
        } else {
            self.visit_file(path, result);
        }
    }

    fn visit_dir(&self, path: &Path, is_root: bool, result: &mut ValidationResult) {
        let entries = match self.store.list_entries(path) {
            Ok(entries) => entries,
            Err(err) => {
                result.errors.push(format!("Cannot access template: {err}"));
                return;
            }
        };

        if !is_root {
            check_name(path, Location::DirectoryName, result);
        }

        if entries.is_empty() {
            result
                .warnings
                .push(format!("Empty directory: {}", path.display()));
            return;
        }

        for name in entries {
            self.visit(&path.join(name), false, result);
        }
    }

    fn visit_file(&self, path: &Path, result: &mut ValidationResult) {
        let bytes = match self.store.read_bytes(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                result.errors.push(format!("Cannot access template: {err}"));
                return;
            }
        };

        check_name(path, Location::FileName, result);

        let Ok(content) = decode_text(path, bytes) else {
            result.warnings.push(format!(
                "Binary file detected, content validation skipped: {}",
                path.display()
            ));
            return;
        };

        check_text(&content, path, Location::Content, result);

        if has_mixed_line_endings(&content) {
            result.warnings.push(format!(
                "Mixed line endings (CRLF and LF): {}",
                path.display()
            ));
        }

        let chars = content.chars().count();
        if chars > LARGE_FILE_CHARS {
            result.warnings.push(format!(
                "Large file ({chars} characters): {}",
                path.display()
            ));
        }
    }
}

fn check_name(path: &Path, location: Location, result: &mut ValidationResult) {
    if let Some(name) = path.file_name() {
        check_text(&name.to_string_lossy(), path, location, result);
    }
}

fn check_text(text: &str, path: &Path, location: Location, result: &mut ValidationResult) {
    let scan = scan_placeholders(text);
    for token in scan.unrecognized {
        result.errors.push(format!(
            "Invalid placeholder in {}: {token} ({})",
            location.label(),
            path.display()
        ));
    }
    if scan.incomplete {
        result.errors.push(format!(
            "Incomplete placeholder in {}: {}",
            location.label(),
            path.display()
        ));
    }
}
