//! Translation loaders.
//!
//! Loaders populate dictionaries during [`Lingo::load`]. Each load pass
//! starts from an empty [`LoadSession`]; the registry publishes the
//! session's dictionaries once every loader has returned successfully.

mod embedded;
mod path;
mod xml;

use std::collections::BTreeMap;

use crate::dictionary::{TranslationDictionary, fold_case};
use crate::error::LoadError;
use crate::registry::{DictionarySet, Lingo};

pub use embedded::{EmbeddedResources, ResourceLoader};
pub use path::{XmlPathLoader, read_xml_file};
pub use xml::{load_xml, load_xml_document};

/// Populates dictionaries during a load pass.
///
/// Implemented for closures taking the session, so ad-hoc loaders can be
/// registered directly.
pub trait Loader: Send + Sync {
    fn load(&self, session: &mut LoadSession<'_>) -> Result<(), LoadError>;
}

impl<F> Loader for F
where
    F: Fn(&mut LoadSession<'_>) -> Result<(), LoadError> + Send + Sync,
{
    fn load(&self, session: &mut LoadSession<'_>) -> Result<(), LoadError> {
        self(session)
    }
}

/// The dictionaries being built by one load pass.
#[derive(Debug)]
pub struct LoadSession<'a> {
    lingo: &'a Lingo,
    /// Folded language tag -> dictionary.
    dictionaries: BTreeMap<String, TranslationDictionary>,
}

impl<'a> LoadSession<'a> {
    pub(crate) fn new(lingo: &'a Lingo) -> Self {
        Self {
            lingo,
            dictionaries: BTreeMap::new(),
        }
    }

    /// The registry being loaded.
    pub fn lingo(&self) -> &'a Lingo {
        self.lingo
    }

    /// The dictionary for a language, created empty on first use.
    ///
    /// A blank language resolves like [`Lingo::resolve_language`].
    pub fn dictionary(&mut self, language: &str) -> &mut TranslationDictionary {
        let language = self.lingo.resolve_language(Some(language));
        self.dictionaries
            .entry(fold_case(&language))
            .or_insert_with(|| TranslationDictionary::new(language))
    }

    /// The dictionary for a language, if this pass has created it.
    pub fn get(&self, language: &str) -> Option<&TranslationDictionary> {
        self.dictionaries.get(&fold_case(language))
    }

    pub(crate) fn into_set(self) -> DictionarySet {
        DictionarySet::from_dictionaries(self.dictionaries.into_values())
    }
}
