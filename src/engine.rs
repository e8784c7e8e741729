// SPDX-License-Identifier: MIT

//! The resolution engine: configuration, active-language state, lookup.
//!
//! [`Phrasebook`] is an explicit handle owned by the host application
//! rather than process-wide state, so multiple independent catalogs can
//! coexist and tests need no global reset. Setters and [`Phrasebook::load`]
//! take `&mut self` while lookups take `&self`; ownership enforces the
//! single-writer-at-init discipline statically. Hosts that need live
//! reconfiguration can wrap the handle in an `RwLock` themselves.
//!
//! Lookup misses are not errors. A key absent from the effective language
//! resolves to the key itself, so missing translations are visibly
//! identifiable in the UI instead of silently blank.

use crate::audit::{self, ConsistencyReport};
use crate::catalog::Catalog;
use crate::diagnostics::{self, DiagnosticSink, Level};
use crate::error::PhrasebookError;
use crate::loader::{self, FileReader};
use std::env;
use std::path::{Path, PathBuf};

/// Built-in default language, used as the final fallback tier.
pub const DEFAULT_LANGUAGE: &str = "en";
/// Default directory scanned for language files.
pub const DEFAULT_LANGUAGE_DIR: &str = "./lang";
/// Default language-file suffix.
pub const DEFAULT_SUFFIX: &str = ".json";
/// Environment variable naming a preferred default language, consulted
/// during default resolution. Read once at handle construction.
pub const DEFAULT_LANGUAGE_ENV: &str = "PHRASEBOOK_DEFAULT_LANG";
/// Returned by lookups when no language is set at all (fresh handle,
/// never loaded, no override given).
pub const NO_LANGUAGE_TEXT: &str = "phrasebook: no language set";

/// Translation-catalog handle: load language files once, query many times.
///
/// # Example
///
/// ```no_run
/// use phrasebook::Phrasebook;
///
/// let mut book = Phrasebook::new();
/// book.set_directory("./lang");
/// book.load();
/// book.set_active_language("en")?;
///
/// assert_eq!(book.get("missing.key"), "missing.key");
/// # Ok::<(), phrasebook::PhrasebookError>(())
/// ```
pub struct Phrasebook {
    directory: PathBuf,
    suffix: String,
    preferred_default: Option<String>,
    catalog: Catalog,
    discovered: Vec<String>,
    /// Empty = unset. When non-empty it names a loaded language, except
    /// in the degraded case where no language loaded at all and it
    /// carries [`DEFAULT_LANGUAGE`] verbatim.
    active: String,
    sink: DiagnosticSink,
    reader: FileReader,
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Phrasebook {
    /// Create a handle with default configuration and an empty catalog.
    /// Call [`Phrasebook::load`] to populate it.
    #[must_use]
    pub fn new() -> Self {
        let preferred_default = env::var(DEFAULT_LANGUAGE_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Self {
            directory: PathBuf::from(DEFAULT_LANGUAGE_DIR),
            suffix: DEFAULT_SUFFIX.to_string(),
            preferred_default,
            catalog: Catalog::new(),
            discovered: Vec::new(),
            active: String::new(),
            sink: diagnostics::default_sink(),
            reader: loader::default_reader(),
        }
    }

    // ── Configuration ───────────────────────────────────────────────

    /// Set the directory scanned for language files.
    ///
    /// An empty (or whitespace-only) value falls back to
    /// [`DEFAULT_LANGUAGE_DIR`] with a warning. Takes effect on the next
    /// [`Phrasebook::load`].
    pub fn set_directory(&mut self, directory: &str) {
        if directory.trim().is_empty() {
            self.directory = PathBuf::from(DEFAULT_LANGUAGE_DIR);
            self.emit(
                &format!(
                    "empty language directory provided, falling back to default '{}'",
                    DEFAULT_LANGUAGE_DIR
                ),
                Level::Warn,
            );
            return;
        }

        self.directory = PathBuf::from(directory.trim_end_matches(['/', '\\']));
    }

    /// Set the expected language-file suffix, e.g. `.json`.
    /// Matching is a case-sensitive exact comparison.
    pub fn set_suffix(&mut self, suffix: &str) {
        self.suffix = suffix.to_string();
    }

    /// Install a diagnostic sink replacing the default `tracing` one.
    pub fn set_sink(&mut self, sink: DiagnosticSink) {
        self.sink = sink;
    }

    /// Install a raw file reader replacing the default filesystem one.
    pub fn set_reader(&mut self, reader: FileReader) {
        self.reader = reader;
    }

    /// Override the preferred default language normally taken from
    /// [`DEFAULT_LANGUAGE_ENV`]. `None` clears it.
    pub fn set_preferred_default(&mut self, language: Option<&str>) {
        self.preferred_default = language
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
    }

    /// Directory currently configured for language files.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Scan the configured directory and rebuild the catalog.
    ///
    /// Replaces the previous catalog and discovered-language list
    /// wholesale, then resolves the active language through the default
    /// chain. Never fails: I/O and format problems are reported through
    /// the sink and the affected languages skipped.
    pub fn load(&mut self) {
        let outcome = loader::load_catalog(&self.directory, &self.suffix, &self.reader, &self.sink);
        self.catalog = outcome.catalog;
        self.discovered = outcome.discovered;
        self.active = self.resolve_default();
    }

    // ── Active language ─────────────────────────────────────────────

    /// Set the language used when [`Phrasebook::get`] is called without
    /// an override.
    ///
    /// Empty input is the one hard error; previous state is left
    /// untouched. A non-empty language that is not loaded emits a
    /// warning and resolves through the default chain instead, so the
    /// active language never ends up pointing at missing data.
    pub fn set_active_language(&mut self, language: &str) -> Result<(), PhrasebookError> {
        let language = language.trim();
        if language.is_empty() {
            return Err(PhrasebookError::InvalidLanguage);
        }

        if self.catalog.contains(language) {
            self.active = language.to_string();
            return Ok(());
        }

        self.emit(
            &format!(
                "language '{}' is not loaded, falling back to the default language",
                language
            ),
            Level::Warn,
        );
        self.active = self.resolve_default();
        Ok(())
    }

    /// The active language, or `None` when unset.
    #[must_use]
    pub fn active_language(&self) -> Option<&str> {
        if self.active.is_empty() {
            None
        } else {
            Some(self.active.as_str())
        }
    }

    /// Choose a default language, in strict priority order:
    /// configured preferred default, then the built-in default, then the
    /// first discovered language present in the catalog, then the
    /// built-in default verbatim even though nothing is loaded.
    ///
    /// Each skipped tier emits a warning naming what was tried. The
    /// discovered list is in sorted filename order, so the outcome is
    /// deterministic for a given catalog.
    fn resolve_default(&self) -> String {
        if let Some(preferred) = &self.preferred_default {
            if self.catalog.contains(preferred) {
                return preferred.clone();
            }
            self.emit(
                &format!(
                    "preferred default language '{}' is not loaded, trying fallback '{}'",
                    preferred, DEFAULT_LANGUAGE
                ),
                Level::Warn,
            );
        }

        if self.catalog.contains(DEFAULT_LANGUAGE) {
            return DEFAULT_LANGUAGE.to_string();
        }

        for language in &self.discovered {
            if self.catalog.contains(language) {
                self.emit(
                    &format!(
                        "default language '{}' is not loaded, using first loaded language '{}'",
                        DEFAULT_LANGUAGE, language
                    ),
                    Level::Warn,
                );
                return language.clone();
            }
        }

        self.emit(
            &format!(
                "no language files loaded, using fallback language '{}'",
                DEFAULT_LANGUAGE
            ),
            Level::Warn,
        );
        DEFAULT_LANGUAGE.to_string()
    }

    // ── Lookup ──────────────────────────────────────────────────────

    /// Resolve `key` in the active language.
    ///
    /// Returns the stored text, the key itself when the key (or the
    /// active language) is unknown, or [`NO_LANGUAGE_TEXT`] when no
    /// language is set at all.
    #[must_use]
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.get_in(key, "")
    }

    /// Resolve `key` in `language`, falling back to the active language
    /// when `language` is empty.
    #[must_use]
    pub fn get_in<'a>(&'a self, key: &'a str, language: &str) -> &'a str {
        let effective = if language.is_empty() {
            self.active.as_str()
        } else {
            language
        };

        if effective.is_empty() {
            return NO_LANGUAGE_TEXT;
        }

        self.catalog.get(effective, key).unwrap_or(key)
    }

    // ── Catalog access ──────────────────────────────────────────────

    /// All loaded language tags, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        self.catalog.languages()
    }

    /// Language tags found during the last load pass, in sorted filename
    /// order, including ones whose read or parse failed.
    #[must_use]
    pub fn discovered_languages(&self) -> &[String] {
        &self.discovered
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ── Consistency ─────────────────────────────────────────────────

    /// Diff every loaded language against the reference (active)
    /// language without emitting diagnostics.
    ///
    /// `None` when the reference has no translation set.
    #[must_use]
    pub fn audit(&self) -> Option<ConsistencyReport> {
        audit::diff_languages(&self.catalog, self.reference_language())
    }

    /// Audit the catalog and report every divergence through the sink.
    ///
    /// Returns `true` only if every loaded language has a key set
    /// identical to the reference language's. Fails closed when the
    /// reference language has no translation set. Never fatal and never
    /// blocks lookups.
    #[must_use]
    pub fn is_catalog_consistent(&self) -> bool {
        let reference = self.reference_language();
        self.emit(
            &format!("using language '{}' as reference", reference),
            Level::Info,
        );

        let Some(report) = audit::diff_languages(&self.catalog, reference) else {
            self.emit(
                &format!(
                    "reference language '{}' has no translation set, name another language",
                    reference
                ),
                Level::Error,
            );
            return false;
        };

        self.emit(
            &format!(
                "languages found: {}, checking consistency",
                self.discovered.join(", ")
            ),
            Level::Info,
        );

        for divergence in &report.languages {
            if divergence.entry_count != report.reference_count {
                self.emit(
                    &format!(
                        "language '{}' ({} entries) differs from reference language '{}' ({} entries)",
                        divergence.language,
                        divergence.entry_count,
                        report.reference,
                        report.reference_count
                    ),
                    Level::Warn,
                );
            }
            for key in &divergence.missing_keys {
                self.emit(
                    &format!(
                        "key '{}' was not found in language '{}'",
                        key, divergence.language
                    ),
                    Level::Warn,
                );
            }
            for key in &divergence.extra_keys {
                self.emit(
                    &format!(
                        "key '{}' in language '{}' does not exist in reference language '{}'",
                        key, divergence.language, report.reference
                    ),
                    Level::Warn,
                );
            }
        }

        report.is_consistent()
    }

    /// Reference language for auditing: the active language, or the
    /// built-in default when nothing was ever set.
    fn reference_language(&self) -> &str {
        if self.active.is_empty() {
            DEFAULT_LANGUAGE
        } else {
            self.active.as_str()
        }
    }

    fn emit(&self, message: &str, level: Level) {
        (self.sink)(message, level);
    }
}
