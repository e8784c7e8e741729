// SPDX-License-Identifier: MIT

//! Cross-language consistency auditing.
//!
//! Compares every loaded language against a reference language (the
//! active language at audit time) and reports divergence: entry-count
//! mismatches and the symmetric difference of key sets. Divergence is
//! reported, never corrected, and never blocks lookups; missing keys
//! still resolve through the fallback-to-key design.
//!
//! The audit does not short-circuit: every language and every one-sided
//! key is listed in one pass, in sorted order, so the report is
//! deterministic regardless of map iteration order.

use crate::catalog::Catalog;

/// Structured result of a consistency audit.
#[derive(Debug, Clone)]
pub struct ConsistencyReport {
    /// Language the other sets were compared against.
    pub reference: String,
    /// Entry count of the reference language.
    pub reference_count: usize,
    /// Per-language divergence, sorted by language tag. The reference
    /// itself is not included.
    pub languages: Vec<LanguageDivergence>,
}

impl ConsistencyReport {
    /// `true` iff every audited language has an identical key set to the
    /// reference.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.languages.iter().all(LanguageDivergence::is_consistent)
    }
}

/// How one language's key set diverges from the reference.
#[derive(Debug, Clone)]
pub struct LanguageDivergence {
    /// Audited language tag.
    pub language: String,
    /// Entry count of this language's translation set.
    pub entry_count: usize,
    /// Reference keys absent from this language, sorted.
    pub missing_keys: Vec<String>,
    /// Keys of this language absent from the reference, sorted.
    pub extra_keys: Vec<String>,
}

impl LanguageDivergence {
    /// `true` iff the key set matches the reference exactly.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.missing_keys.is_empty() && self.extra_keys.is_empty()
    }
}

/// Diff every loaded language against `reference`.
///
/// Returns `None` when the reference language has no translation set
/// (the audit fails closed in that case).
pub(crate) fn diff_languages(catalog: &Catalog, reference: &str) -> Option<ConsistencyReport> {
    let reference_set = catalog.translation_set(reference)?;

    let mut languages = Vec::new();
    for language in catalog.languages() {
        if language == reference {
            continue;
        }
        // languages() is sorted, so the report order is stable.
        let Some(set) = catalog.translation_set(language) else {
            continue;
        };

        let missing_keys: Vec<String> = reference_set
            .sorted_keys()
            .into_iter()
            .filter(|key| !set.contains(key))
            .map(String::from)
            .collect();
        let extra_keys: Vec<String> = set
            .sorted_keys()
            .into_iter()
            .filter(|key| !reference_set.contains(key))
            .map(String::from)
            .collect();

        languages.push(LanguageDivergence {
            language: language.to_string(),
            entry_count: set.len(),
            missing_keys,
            extra_keys,
        });
    }

    Some(ConsistencyReport {
        reference: reference.to_string(),
        reference_count: reference_set.len(),
        languages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn two_language_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let en = catalog.translation_set_mut("en");
        en.insert("x", "Hi");
        let de = catalog.translation_set_mut("de");
        de.insert("y", "Hallo");
        catalog
    }

    #[test]
    fn missing_reference_fails_closed() {
        let catalog = Catalog::new();
        assert!(diff_languages(&catalog, "en").is_none());
    }

    #[test]
    fn symmetric_difference_reported_both_ways() {
        let catalog = two_language_catalog();
        let report = diff_languages(&catalog, "en").unwrap();
        assert!(!report.is_consistent());
        assert_eq!(report.languages.len(), 1);

        let de = &report.languages[0];
        assert_eq!(de.language, "de");
        assert_eq!(de.missing_keys, vec!["x"]);
        assert_eq!(de.extra_keys, vec!["y"]);
    }

    #[test]
    fn identical_sets_are_consistent() {
        let mut catalog = Catalog::new();
        for lang in ["en", "de", "fr"] {
            let set = catalog.translation_set_mut(lang);
            set.insert("a", "1");
            set.insert("b", "2");
        }
        let report = diff_languages(&catalog, "en").unwrap();
        assert!(report.is_consistent());
        assert_eq!(report.languages.len(), 2);
        assert_eq!(report.reference_count, 2);
    }

    #[test]
    fn report_order_is_sorted() {
        let mut catalog = Catalog::new();
        for lang in ["en", "fr", "de", "cs"] {
            catalog.translation_set_mut(lang).insert("k", "v");
        }
        let report = diff_languages(&catalog, "en").unwrap();
        let order: Vec<&str> = report
            .languages
            .iter()
            .map(|l| l.language.as_str())
            .collect();
        assert_eq!(order, vec!["cs", "de", "fr"]);
    }

    #[test]
    fn divergent_keys_are_sorted() {
        let mut catalog = Catalog::new();
        let en = catalog.translation_set_mut("en");
        en.insert("c", "3");
        en.insert("a", "1");
        en.insert("b", "2");
        catalog.translation_set_mut("de").insert("z", "26");

        let report = diff_languages(&catalog, "en").unwrap();
        assert_eq!(report.languages[0].missing_keys, vec!["a", "b", "c"]);
    }
}
