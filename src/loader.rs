// SPDX-License-Identifier: MIT

//! Language-file discovery and parsing.
//!
//! Scans a directory (non-recursive) for files carrying the configured
//! suffix, derives the language tag from each filename, and parses the
//! file into the catalog. Failures never abort the scan: an inaccessible,
//! unreadable, or malformed file is reported through the diagnostic sink
//! and skipped, and loading continues with the remaining candidates.
//! Partial success is the normal operating mode.
//!
//! Expected file shape:
//!
//! ```json
//! {"lang": [{"id": "menu.title", "text": "Settings"}, ...]}
//! ```
//!
//! Unknown top-level fields are ignored; a missing `lang` field parses as
//! an empty row list (the language still counts as loaded). Malformed
//! JSON fails the whole file, no partial parse is attempted.

use crate::catalog::Catalog;
use crate::diagnostics::{DiagnosticSink, Level};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Raw file-reader hook. Override via [`crate::Phrasebook::set_reader`]
/// for tests or virtual file systems.
pub type FileReader = Box<dyn Fn(&Path) -> io::Result<Vec<u8>> + Send + Sync>;

/// Default reader: plain [`fs::read`].
pub(crate) fn default_reader() -> FileReader {
    Box::new(|path| fs::read(path))
}

#[derive(Debug, Deserialize)]
struct LanguageFile {
    #[serde(rename = "lang", default)]
    rows: Vec<LanguageRow>,
}

// Row fields default to empty rather than failing the file, so a row
// with a missing `text` still loads (and resolves to an empty string).
#[derive(Debug, Deserialize)]
struct LanguageRow {
    #[serde(default)]
    id: String,
    #[serde(default)]
    text: String,
}

/// Result of one load pass.
pub(crate) struct LoadOutcome {
    pub catalog: Catalog,
    /// Language tags found during the scan, in sorted filename order,
    /// including ones whose read or parse failed.
    pub discovered: Vec<String>,
}

/// Scan `directory` and build a fresh catalog.
///
/// Never returns an error: all failure is signaled through `sink` plus an
/// empty or partial result.
pub(crate) fn load_catalog(
    directory: &Path,
    suffix: &str,
    reader: &FileReader,
    sink: &DiagnosticSink,
) -> LoadOutcome {
    let mut catalog = Catalog::new();
    let mut discovered = Vec::new();

    for filename in language_file_list(directory, suffix, sink) {
        sink(&format!("reading language file '{}'", filename), Level::Info);

        let language = filename
            .strip_suffix(suffix)
            .unwrap_or(filename.as_str())
            .to_string();
        // Recorded even when the steps below fail, so hosts can see
        // which languages were found in a partial/failed state.
        discovered.push(language.clone());

        let path = directory.join(&filename);
        if fs::metadata(&path).is_err() {
            sink(
                &format!(
                    "translation file '{}' could not be accessed, check that it exists and is readable",
                    path.display()
                ),
                Level::Error,
            );
            continue;
        }

        let bytes = match reader(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                sink(
                    &format!(
                        "translation file '{}' could not be read: {}",
                        path.display(),
                        err
                    ),
                    Level::Error,
                );
                continue;
            }
        };

        let parsed: LanguageFile = match serde_json::from_slice(&bytes) {
            Ok(parsed) => parsed,
            Err(err) => {
                sink(
                    &format!(
                        "translation for language '{}' has an invalid file format: {}",
                        language, err
                    ),
                    Level::Error,
                );
                continue;
            }
        };

        // Merge into the language's set; duplicate ids within one file
        // resolve as last write wins.
        let set = catalog.translation_set_mut(&language);
        for row in parsed.rows {
            set.insert(row.id, row.text);
        }
    }

    LoadOutcome {
        catalog,
        discovered,
    }
}

/// Candidate filenames under `directory`, sorted for deterministic
/// processing order. Sub-directories and files without the expected
/// suffix are skipped.
fn language_file_list(directory: &Path, suffix: &str, sink: &DiagnosticSink) -> Vec<String> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(err) => {
            sink(
                &format!(
                    "language directory '{}' could not be read: {}",
                    directory.display(),
                    err
                ),
                Level::Error,
            );
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in entries.flatten() {
        if entry.path().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !name.ends_with(suffix) {
            sink(
                &format!(
                    "file '{}' does not have the expected suffix '{}', skipping it",
                    name, suffix
                ),
                Level::Info,
            );
            continue;
        }

        files.push(name);
    }

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_expected_shape() {
        let raw = br#"{"lang": [{"id": "a.b", "text": "Hello"}]}"#;
        let parsed: LanguageFile = serde_json::from_slice(raw).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].id, "a.b");
        assert_eq!(parsed.rows[0].text, "Hello");
    }

    #[test]
    fn unknown_top_level_fields_ignored() {
        let raw = br#"{"version": 3, "lang": [{"id": "k", "text": "v"}]}"#;
        let parsed: LanguageFile = serde_json::from_slice(raw).unwrap();
        assert_eq!(parsed.rows.len(), 1);
    }

    #[test]
    fn missing_lang_field_parses_empty() {
        let raw = br#"{"other": true}"#;
        let parsed: LanguageFile = serde_json::from_slice(raw).unwrap();
        assert!(parsed.rows.is_empty());
    }

    #[test]
    fn wrong_lang_type_fails() {
        let raw = br#"{"lang": "not an array"}"#;
        assert!(serde_json::from_slice::<LanguageFile>(raw).is_err());
    }
}
