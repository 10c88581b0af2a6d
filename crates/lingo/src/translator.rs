//! Key resolution against one dictionary.

use std::sync::Arc;

use tracing::trace;

use crate::dictionary::TranslationDictionary;
use crate::error::{LookupError, compute_suggestions};
use crate::options::MissingTranslationMode;
use crate::prefix::{compose, non_blank};
use crate::readable::to_readable;
use crate::registry::Lingo;
use crate::types::TranslationEntry;

/// Marks a key as a complete dictionary key that bypasses the prefix.
pub const KEY_MARKER: char = '#';

/// Resolves short keys below a prefix in one language's dictionary.
///
/// A translator keeps the dictionary it was created with; a later reload
/// of the registry does not affect it.
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    lingo: &'a Lingo,
    dictionary: Arc<TranslationDictionary>,
    prefix: Option<String>,
}

impl<'a> Translator<'a> {
    pub fn new(
        lingo: &'a Lingo,
        dictionary: Arc<TranslationDictionary>,
        prefix: Option<&str>,
    ) -> Self {
        Self {
            lingo,
            dictionary,
            prefix: non_blank(prefix).map(str::to_string),
        }
    }

    pub fn language(&self) -> &str {
        self.dictionary.language()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn dictionary(&self) -> &TranslationDictionary {
        &self.dictionary
    }

    /// The dictionary key a short key resolves to.
    ///
    /// Keys starting with [`KEY_MARKER`] are used as-is without the marker.
    ///
    /// ```
    /// use lingo::Lingo;
    ///
    /// let lingo = Lingo::default();
    /// let translator = lingo.get_translator(Some("en"), Some("Orders"));
    /// assert_eq!(translator.full_key("Title"), "Orders.Title");
    /// assert_eq!(translator.full_key("#Shared.Title"), "Shared.Title");
    /// ```
    pub fn full_key(&self, key: &str) -> String {
        if let Some(literal) = key.strip_prefix(KEY_MARKER) {
            return literal.to_string();
        }
        match &self.prefix {
            Some(prefix) => compose(prefix, key),
            None => key.to_string(),
        }
    }

    /// The raw entry for a key, without parameter substitution.
    pub fn entry(&self, key: &str) -> Option<&TranslationEntry> {
        self.dictionary.get(&self.full_key(key))
    }

    /// The translated text, or `None` if the key is missing.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entry(key).map(|entry| {
            self.lingo
                .parse_params(&entry.value, self.language())
                .into_owned()
        })
    }

    /// Translate a key, applying the missing-translation mode on a miss.
    ///
    /// Returns an error only when the mode is
    /// [`MissingTranslationMode::AsError`].
    pub fn translate(&self, key: &str) -> Result<String, LookupError> {
        match self.get(key) {
            Some(text) => Ok(text),
            None => self.resolve_missing(key),
        }
    }

    /// Translate a key with explicit control over misses.
    ///
    /// With `null_if_not_exists` a miss yields `Ok(None)` regardless of the
    /// configured mode.
    pub fn translate_with(
        &self,
        key: &str,
        null_if_not_exists: bool,
    ) -> Result<Option<String>, LookupError> {
        if null_if_not_exists {
            Ok(self.get(key))
        } else {
            self.translate(key).map(Some)
        }
    }

    /// Translate a key, never failing.
    ///
    /// Misses that would be errors produce the registry's missing-item
    /// placeholder instead.
    pub fn text(&self, key: &str) -> String {
        self.translate(key)
            .unwrap_or_else(|_| self.missing_text(key))
    }

    fn resolve_missing(&self, key: &str) -> Result<String, LookupError> {
        let short_key = key.strip_prefix(KEY_MARKER).unwrap_or(key);
        let mode = self.lingo.missing_translation_mode();
        trace!(language = self.language(), key, ?mode, "translation missing");

        match mode {
            MissingTranslationMode::AsError => {
                let full_key = self.full_key(key);
                let available: Vec<String> = self.dictionary.keys().map(str::to_string).collect();
                Err(LookupError::Missing {
                    language: self.language().to_string(),
                    suggestions: compute_suggestions(&full_key, &available),
                    key: full_key,
                })
            }
            MissingTranslationMode::AsReadable => Ok(to_readable(short_key)),
            MissingTranslationMode::AsName | MissingTranslationMode::Undefined => {
                Ok(short_key.to_string())
            }
        }
    }

    fn missing_text(&self, key: &str) -> String {
        let full_key = self.full_key(key);
        if self.lingo.options().missing_item_text().is_empty() {
            return full_key;
        }
        self.lingo.missing_text(self.language(), &full_key)
    }
}
