// SPDX-License-Identifier: MIT

//! In-memory translation catalog.
//!
//! A [`Catalog`] maps language tags (`en`, `en-us`, ...) to
//! [`TranslationSet`]s, each of which maps dot-namespaced keys to
//! localized text. Keys are opaque to the catalog; the dot convention is
//! purely organizational. The catalog is rebuilt wholesale on every load
//! cycle, so a reload replaces rather than merges previous entries.

use std::collections::HashMap;

/// One language's key → text mapping.
///
/// Keys are unique within a language; inserting an existing key
/// overwrites the previous text (last write wins).
#[derive(Debug, Clone, Default)]
pub struct TranslationSet {
    texts: HashMap<String, String>,
}

impl TranslationSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key → text pair, overwriting any previous text.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(key.into(), text.into());
    }

    /// Look up the text for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.texts.get(key).map(String::as_str)
    }

    /// Whether the set contains a key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.texts.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Iterate over all keys, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.texts.keys().map(String::as_str)
    }

    /// All keys, sorted. Used wherever deterministic reporting matters.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        keys
    }
}

/// All loaded languages and their translation sets.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    languages: HashMap<String, TranslationSet>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a language is loaded.
    #[must_use]
    pub fn contains(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// The translation set for a language, if loaded.
    #[must_use]
    pub fn translation_set(&self, language: &str) -> Option<&TranslationSet> {
        self.languages.get(language)
    }

    /// The translation set for a language, created empty if absent.
    pub(crate) fn translation_set_mut(&mut self, language: &str) -> &mut TranslationSet {
        self.languages.entry(language.to_string()).or_default()
    }

    /// Look up text for a key in a language. `None` when either the
    /// language or the key is unknown.
    #[must_use]
    pub fn get(&self, language: &str, key: &str) -> Option<&str> {
        self.languages.get(language).and_then(|set| set.get(key))
    }

    /// All loaded language tags, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Number of loaded languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether no language is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut set = TranslationSet::new();
        set.insert("menu.title", "Settings");
        assert_eq!(set.get("menu.title"), Some("Settings"));
        assert_eq!(set.get("menu.other"), None);
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn insert_overwrites() {
        let mut set = TranslationSet::new();
        set.insert("greeting", "Hi");
        set.insert("greeting", "Hello");
        assert_eq!(set.get("greeting"), Some("Hello"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn sorted_keys_are_sorted() {
        let mut set = TranslationSet::new();
        set.insert("b", "2");
        set.insert("a", "1");
        set.insert("c", "3");
        assert_eq!(set.sorted_keys(), vec!["a", "b", "c"]);
    }

    #[test]
    fn catalog_languages_sorted() {
        let mut catalog = Catalog::new();
        catalog.translation_set_mut("fr").insert("k", "v");
        catalog.translation_set_mut("de").insert("k", "v");
        catalog.translation_set_mut("en").insert("k", "v");
        assert_eq!(catalog.languages(), vec!["de", "en", "fr"]);
    }

    #[test]
    fn catalog_get_misses() {
        let mut catalog = Catalog::new();
        catalog.translation_set_mut("en").insert("k", "v");
        assert_eq!(catalog.get("en", "k"), Some("v"));
        assert_eq!(catalog.get("en", "missing"), None);
        assert_eq!(catalog.get("de", "k"), None);
    }

    #[test]
    fn translation_set_mut_creates_empty() {
        let mut catalog = Catalog::new();
        let _ = catalog.translation_set_mut("en");
        assert!(catalog.contains("en"));
        assert!(catalog.translation_set("en").unwrap().is_empty());
    }
}
