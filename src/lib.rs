// SPDX-License-Identifier: MIT

//! phrasebook — runtime translation catalog with deterministic fallback.
//!
//! Externalizes user-facing strings into per-language JSON files that are
//! loaded once and queried many times. Given a symbolic key and an active
//! language, [`Phrasebook::get`] returns the localized text, falling back
//! through a deterministic chain of defaults when the requested language
//! or key is unavailable. A missing key resolves to the key itself, so
//! untranslated strings stay visible instead of going blank.
//!
//! ```no_run
//! use phrasebook::Phrasebook;
//!
//! let mut book = Phrasebook::new();
//! book.set_directory("./lang");
//! book.load();
//! book.set_active_language("de")?;
//!
//! println!("{}", book.get("menu.title"));
//! # Ok::<(), phrasebook::PhrasebookError>(())
//! ```
//!
//! Language files are JSON objects with a `lang` row list:
//!
//! ```json
//! {"lang": [{"id": "menu.title", "text": "Einstellungen"}]}
//! ```
//!
//! Diagnostics (skipped files, fallback hops, audit findings) go through
//! a pluggable sink defaulting to `tracing`; the raw file reader is
//! likewise pluggable for tests and virtual file systems.

pub mod audit;
pub mod catalog;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod loader;

pub use audit::{ConsistencyReport, LanguageDivergence};
pub use catalog::{Catalog, TranslationSet};
pub use diagnostics::{DiagnosticSink, Level};
pub use engine::{
    Phrasebook, DEFAULT_LANGUAGE, DEFAULT_LANGUAGE_DIR, DEFAULT_LANGUAGE_ENV, DEFAULT_SUFFIX,
    NO_LANGUAGE_TEXT,
};
pub use error::PhrasebookError;
pub use loader::FileReader;
