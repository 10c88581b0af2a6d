//! Per-language translation storage.

use std::collections::HashMap;

use crate::types::{TextFormat, TranslationEntry};

/// Folds a language tag or key for case-insensitive comparison.
pub(crate) fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// An ordered store of dotted keys to translated text for one language.
///
/// Keys are compared case-insensitively but keep the spelling they were
/// first added with. Iteration follows insertion order; replacing an entry
/// keeps its original position.
///
/// # Example
///
/// ```
/// use lingo::{TextFormat, TranslationDictionary};
///
/// let mut dictionary = TranslationDictionary::new("en-US");
/// dictionary.add("Greeting.Hello", "Hello", TextFormat::Plain, false);
///
/// assert_eq!(dictionary.get("greeting.hello").unwrap().value, "Hello");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationDictionary {
    language: String,
    entries: Vec<(String, TranslationEntry)>,
    /// Folded key -> position in `entries`.
    index: HashMap<String, usize>,
}

impl TranslationDictionary {
    /// Create an empty dictionary for a language tag.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The language tag this dictionary was created for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Add an entry.
    ///
    /// When the key already exists the call only has an effect if
    /// `replace_if_exists` is set; otherwise the original value is kept and
    /// no error is raised. Returns true if the value was stored.
    pub fn add(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        format: TextFormat,
        replace_if_exists: bool,
    ) -> bool {
        let key = key.into();
        let entry = TranslationEntry::new(value, format);

        match self.index.get(&fold_case(&key)) {
            Some(&position) if replace_if_exists => {
                self.entries[position].1 = entry;
                true
            }
            Some(_) => false,
            None => {
                self.index.insert(fold_case(&key), self.entries.len());
                self.entries.push((key, entry));
                true
            }
        }
    }

    /// Look up an entry by exact, case-insensitive key.
    pub fn get(&self, key: &str) -> Option<&TranslationEntry> {
        self.index
            .get(&fold_case(key))
            .map(|&position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(&fold_case(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}
