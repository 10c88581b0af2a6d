//! The translation registry.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use crate::context;
use crate::dictionary::{TranslationDictionary, fold_case};
use crate::error::LoadError;
use crate::loader::LoadSession;
use crate::options::{LingoOptions, MissingTranslationMode};
use crate::params::substitute;
use crate::prefix::{PrefixResolver, non_blank};
use crate::translator::Translator;

/// An immutable set of per-language dictionaries.
///
/// Language tags are matched case-insensitively. Readers hold a snapshot
/// through an `Arc`, so a reload never changes a set someone is reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DictionarySet {
    /// Folded language tag -> dictionary.
    dictionaries: BTreeMap<String, Arc<TranslationDictionary>>,
}

impl DictionarySet {
    pub(crate) fn from_dictionaries(
        dictionaries: impl IntoIterator<Item = TranslationDictionary>,
    ) -> Self {
        Self {
            dictionaries: dictionaries
                .into_iter()
                .map(|dictionary| (fold_case(dictionary.language()), Arc::new(dictionary)))
                .collect(),
        }
    }

    pub fn get(&self, language: &str) -> Option<&Arc<TranslationDictionary>> {
        self.dictionaries.get(&fold_case(language))
    }

    /// Language tags as they were first spelled, ordered case-insensitively.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.values().map(|d| d.language())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<TranslationDictionary>> {
        self.dictionaries.values()
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    /// Total number of entries across all languages.
    pub fn entry_count(&self) -> usize {
        self.dictionaries.values().map(|d| d.len()).sum()
    }

    fn with_dictionary(&self, dictionary: TranslationDictionary) -> Self {
        let mut dictionaries = self.dictionaries.clone();
        dictionaries.insert(fold_case(dictionary.language()), Arc::new(dictionary));
        Self { dictionaries }
    }
}

/// Owns the per-language dictionaries and the configuration used to
/// resolve keys against them.
///
/// `load` rebuilds every dictionary from the registered loaders and
/// publishes the result in one swap. Lookups never block on a running load
/// and never see a half-built set.
///
/// # Example
///
/// ```
/// use lingo::{LoadError, LoadSession, Lingo, LingoOptions, TextFormat};
///
/// let mut options = LingoOptions::default();
/// options.add_loader(|session: &mut LoadSession<'_>| -> Result<(), LoadError> {
///     session.dictionary("fr").add("Greeting", "Bonjour", TextFormat::Plain, true);
///     Ok(())
/// });
///
/// let lingo = Lingo::new(options);
/// lingo.load().unwrap();
///
/// assert_eq!(lingo.get_translator(Some("fr"), None).text("Greeting"), "Bonjour");
/// ```
#[derive(Debug)]
pub struct Lingo {
    options: LingoOptions,
    snapshot: RwLock<Arc<DictionarySet>>,
    load_lock: Mutex<()>,
}

impl Default for Lingo {
    fn default() -> Self {
        Lingo::new(LingoOptions::default())
    }
}

impl Lingo {
    pub fn new(options: LingoOptions) -> Self {
        Self {
            options,
            snapshot: RwLock::new(Arc::new(DictionarySet::default())),
            load_lock: Mutex::new(()),
        }
    }

    pub fn options(&self) -> &LingoOptions {
        &self.options
    }

    pub fn debug(&self) -> bool {
        self.options.debug()
    }

    pub fn fields_prefix(&self) -> &str {
        self.options.fields_prefix()
    }

    pub fn missing_translation_mode(&self) -> MissingTranslationMode {
        self.options.missing_translation_mode()
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Rebuild all dictionaries from the registered loaders.
    ///
    /// Loaders run in registration order against an empty set; the result
    /// replaces the published set only once every loader has succeeded.
    /// Concurrent calls are serialized. On error the previously published
    /// set stays in place.
    pub fn load(&self) -> Result<(), LoadError> {
        let _guard = self.load_lock.lock();

        let mut session = LoadSession::new(self);
        for (index, loader) in self.options.loaders().iter().enumerate() {
            debug!(loader = index, "running translation loader");
            loader.load(&mut session)?;
        }

        let set = session.into_set();
        info!(
            languages = set.len(),
            entries = set.entry_count(),
            "translations loaded"
        );
        *self.snapshot.write() = Arc::new(set);
        Ok(())
    }

    /// The currently published dictionary set.
    pub fn snapshot(&self) -> Arc<DictionarySet> {
        Arc::clone(&self.snapshot.read())
    }

    /// Language tags with a dictionary in the published set.
    pub fn languages(&self) -> Vec<String> {
        self.snapshot().languages().map(str::to_string).collect()
    }

    // =========================================================================
    // Dictionaries and Translators
    // =========================================================================

    /// The language a lookup should use: `language` if not blank, else the
    /// thread's current language, else the configured default.
    pub fn resolve_language(&self, language: Option<&str>) -> String {
        match non_blank(language) {
            Some(language) => language.to_string(),
            None => context::current_language()
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| self.options.default_language().to_string()),
        }
    }

    /// The dictionary for a language, created empty on first use.
    pub fn get_dictionary(&self, language: Option<&str>) -> Arc<TranslationDictionary> {
        let language = self.resolve_language(language);

        if let Some(dictionary) = self.snapshot.read().get(&language) {
            return Arc::clone(dictionary);
        }

        let mut snapshot = self.snapshot.write();
        if let Some(dictionary) = snapshot.get(&language) {
            return Arc::clone(dictionary);
        }

        debug!(%language, "creating empty dictionary");
        let updated = snapshot.with_dictionary(TranslationDictionary::new(language.as_str()));
        let dictionary = updated.get(&language).map(Arc::clone);
        *snapshot = Arc::new(updated);

        dictionary.unwrap_or_else(|| Arc::new(TranslationDictionary::new(language)))
    }

    /// A translator for a language, resolving keys below `prefix`.
    pub fn get_translator(&self, language: Option<&str>, prefix: Option<&str>) -> Translator<'_> {
        Translator::new(self, self.get_dictionary(language), prefix)
    }

    /// Prefix computation using this registry's rules and overrides.
    pub fn prefix_resolver(&self) -> PrefixResolver<'_> {
        PrefixResolver::new(&self.options)
    }

    /// See [`PrefixResolver::base_prefix`].
    pub fn get_base_prefix(&self, type_name: Option<&str>, name: Option<&str>) -> Option<String> {
        self.prefix_resolver().base_prefix(type_name, name)
    }

    // =========================================================================
    // Text Helpers
    // =========================================================================

    /// Substitute registered parameters into `text`.
    pub fn parse_params<'t>(&self, text: &'t str, language: &str) -> Cow<'t, str> {
        self.options.parameters().parse(text, language)
    }

    /// The missing-translation placeholder for a key.
    pub fn missing_text(&self, language: &str, key: &str) -> String {
        substitute(self.options.missing_item_text(), |name| {
            match fold_case(name).as_str() {
                "language" => Some(language.to_string()),
                "key" => Some(key.to_string()),
                _ => None,
            }
        })
        .into_owned()
    }
}
