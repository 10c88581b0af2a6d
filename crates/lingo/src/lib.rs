//! Dotted-key translation dictionaries.
//!
//! A [`Lingo`] registry owns one [`TranslationDictionary`] per language and
//! rebuilds them from registered loaders on [`Lingo::load`]. Keys are
//! dotted paths; a [`Translator`] resolves short keys below a prefix that
//! [`PrefixResolver`] derives from model types, their ancestors and
//! explicit overrides. Missing keys fall back according to the configured
//! [`MissingTranslationMode`].

pub mod context;
pub mod dictionary;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod options;
pub mod params;
pub mod parser;
pub mod prefix;
pub mod readable;
pub mod registry;
pub mod translator;
pub mod types;

pub use dictionary::TranslationDictionary;
pub use error::{LoadError, LookupError, compute_suggestions};
pub use loader::{EmbeddedResources, LoadSession, Loader, ResourceLoader, XmlPathLoader};
pub use metadata::{
    DisplayLiterals, DisplayMetadata, EnumField, EnumValueDisplay, MetadataKind, MetadataResolver,
};
pub use options::{LingoOptions, LingoSettings, MissingTranslationMode};
pub use params::Parameters;
pub use prefix::PrefixResolver;
pub use readable::to_readable;
pub use registry::{DictionarySet, Lingo};
pub use translator::Translator;
pub use types::{TextFormat, TranslationEntry, TypeInfo, TypeKind};
