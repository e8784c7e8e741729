// SPDX-License-Identifier: MIT

//! Caller-visible errors.
//!
//! The engine deliberately has a tiny error surface: I/O and format
//! problems during loading are routed to the diagnostic sink and the
//! affected language is skipped, while lookup misses fall back to the
//! key itself. The only operation that can fail is the active-language
//! setter, and only on empty input.

use thiserror::Error;

/// Errors returned by [`crate::Phrasebook`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhrasebookError {
    /// An empty (or whitespace-only) language tag was passed to
    /// [`crate::Phrasebook::set_active_language`].
    #[error("cannot set an empty language")]
    InvalidLanguage,
}
