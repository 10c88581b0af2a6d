//! Registry configuration.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::sync::Arc;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::loader::{EmbeddedResources, Loader, ResourceLoader, XmlPathLoader};
use crate::params::Parameters;
use crate::prefix::{BasePrefixes, PrefixOverrides, TypeHierarchy};
use crate::types::{ENUM_TYPE, TypeInfo};

/// Default template shown in place of a missing translation.
pub const DEFAULT_MISSING_ITEM_TEXT: &str = "[{language}] #{key}";

/// What a lookup returns when the key is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MissingTranslationMode {
    /// Not configured; behaves like [`MissingTranslationMode::AsName`].
    #[default]
    Undefined,
    /// Return the requested key.
    AsName,
    /// Return the requested key split into capitalized words.
    AsReadable,
    /// Report the miss to the caller.
    AsError,
}

/// Configuration for a [`Lingo`](crate::Lingo) registry.
///
/// Scalar settings are set through the builder. Parameters, prefix rules,
/// type registrations and loaders are added to the built value before it
/// is handed to the registry, after which the configuration is fixed.
///
/// # Example
///
/// ```
/// use lingo::{LingoOptions, MissingTranslationMode};
///
/// let mut options = LingoOptions::builder()
///     .missing_translation_mode(MissingTranslationMode::AsName)
///     .build();
/// options
///     .add_parameter("site", |_language, _name| "Example".to_string())
///     .add_base_prefix_str("ViewModel", "Views");
///
/// assert_eq!(options.fields_prefix(), "Fields");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct LingoOptions {
    #[builder(default)]
    debug: bool,

    /// Segment placed between a container prefix and a property name.
    #[builder(default = "Fields".to_string())]
    fields_prefix: String,

    /// Placeholder for missing translations, with `{language}` and `{key}`.
    #[builder(default = DEFAULT_MISSING_ITEM_TEXT.to_string())]
    missing_item_text: String,

    #[builder(default = MissingTranslationMode::AsReadable)]
    missing_translation_mode: MissingTranslationMode,

    /// Language used when neither the caller nor the current thread names one.
    #[builder(default = "en".to_string())]
    default_language: String,

    #[builder(skip)]
    parameters: Parameters,

    #[builder(skip = default_base_prefixes())]
    base_prefixes: BasePrefixes,

    #[builder(skip)]
    types: TypeHierarchy,

    #[builder(skip)]
    overrides: PrefixOverrides,

    /// Invoked in registration order on every load.
    #[builder(skip)]
    loaders: Vec<Arc<dyn Loader>>,
}

fn default_base_prefixes() -> BasePrefixes {
    let mut prefixes = BasePrefixes::new();
    prefixes.insert(ENUM_TYPE, Arc::new(|_: &TypeInfo| Some("Enums".to_string())));
    prefixes
}

impl Default for LingoOptions {
    fn default() -> Self {
        LingoOptions::builder().build()
    }
}

impl Debug for LingoOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LingoOptions")
            .field("debug", &self.debug)
            .field("fields_prefix", &self.fields_prefix)
            .field("missing_item_text", &self.missing_item_text)
            .field("missing_translation_mode", &self.missing_translation_mode)
            .field("default_language", &self.default_language)
            .field("parameters", &self.parameters)
            .field("base_prefixes", &self.base_prefixes)
            .field("loaders", &self.loaders.len())
            .finish_non_exhaustive()
    }
}

impl LingoOptions {
    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn fields_prefix(&self) -> &str {
        &self.fields_prefix
    }

    pub fn missing_item_text(&self) -> &str {
        &self.missing_item_text
    }

    pub fn missing_translation_mode(&self) -> MissingTranslationMode {
        self.missing_translation_mode
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn base_prefixes(&self) -> &BasePrefixes {
        &self.base_prefixes
    }

    pub fn types(&self) -> &TypeHierarchy {
        &self.types
    }

    pub fn overrides(&self) -> &PrefixOverrides {
        &self.overrides
    }

    pub fn loaders(&self) -> &[Arc<dyn Loader>] {
        &self.loaders
    }

    // =========================================================================
    // Parameters and Prefixes
    // =========================================================================

    /// Register a `{name}` parameter, called with `(language, name)`.
    pub fn add_parameter<F>(&mut self, name: impl Into<String>, value: F) -> &mut Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.parameters.insert(name, Arc::new(value));
        self
    }

    /// Register a base-prefix rule for a type and everything deriving from it.
    pub fn add_base_prefix<F>(&mut self, type_name: impl Into<String>, rule: F) -> &mut Self
    where
        F: Fn(&TypeInfo) -> Option<String> + Send + Sync + 'static,
    {
        self.base_prefixes.insert(type_name, Arc::new(rule));
        self
    }

    /// Register a constant base prefix for a type.
    pub fn add_base_prefix_str(
        &mut self,
        type_name: impl Into<String>,
        prefix: impl Into<String>,
    ) -> &mut Self {
        let prefix = prefix.into();
        self.add_base_prefix(type_name, move |_| Some(prefix.clone()))
    }

    /// Declare a model type and its supertype.
    pub fn register_type(&mut self, info: TypeInfo) -> &mut Self {
        self.types.register(info);
        self
    }

    /// Override the prefix of a type (inherited by derived types).
    pub fn set_type_prefix(
        &mut self,
        type_name: impl Into<String>,
        prefix: impl Into<String>,
    ) -> &mut Self {
        self.overrides.set_type_prefix(type_name, prefix);
        self
    }

    /// Override the prefix of one member of a type.
    ///
    /// A prefix starting with `.` is appended to the container's prefix.
    pub fn set_member_prefix(
        &mut self,
        type_name: impl Into<String>,
        member: impl Into<String>,
        prefix: impl Into<String>,
    ) -> &mut Self {
        self.overrides.set_member_prefix(type_name, member, prefix);
        self
    }

    // =========================================================================
    // Loaders
    // =========================================================================

    /// Register a loader invoked on every [`Lingo::load`](crate::Lingo::load).
    pub fn add_loader(&mut self, loader: impl Loader + 'static) -> &mut Self {
        self.loaders.push(Arc::new(loader));
        self
    }

    /// Load XML translations from a file, or from every `*.xml` file below a
    /// directory.
    pub fn add_translation_xml(
        &mut self,
        path: impl Into<PathBuf>,
        throw_if_not_exists: bool,
    ) -> &mut Self {
        self.add_loader(XmlPathLoader::new(path, throw_if_not_exists))
    }

    /// Load XML translations from embedded resources matching `pattern`.
    pub fn add_translation_resources(
        &mut self,
        resources: Arc<EmbeddedResources>,
        pattern: impl Into<String>,
        throw_if_not_exists: bool,
    ) -> &mut Self {
        self.add_loader(ResourceLoader::new(resources, pattern, throw_if_not_exists))
    }
}

/// Serializable scalar settings, e.g. read from a JSON configuration file.
///
/// Absent fields keep the [`LingoOptions`] defaults.
///
/// ```
/// use lingo::{LingoOptions, LingoSettings, MissingTranslationMode};
///
/// let settings = LingoSettings {
///     missing_translation_mode: Some(MissingTranslationMode::AsError),
///     ..LingoSettings::default()
/// };
/// let options = LingoOptions::from(settings);
/// assert_eq!(options.missing_translation_mode(), MissingTranslationMode::AsError);
/// assert_eq!(options.default_language(), "en");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LingoSettings {
    pub debug: Option<bool>,
    pub fields_prefix: Option<String>,
    pub missing_item_text: Option<String>,
    pub missing_translation_mode: Option<MissingTranslationMode>,
    pub default_language: Option<String>,
}

impl From<LingoSettings> for LingoOptions {
    fn from(settings: LingoSettings) -> Self {
        LingoOptions::builder()
            .maybe_debug(settings.debug)
            .maybe_fields_prefix(settings.fields_prefix)
            .maybe_missing_item_text(settings.missing_item_text)
            .maybe_missing_translation_mode(settings.missing_translation_mode)
            .maybe_default_language(settings.default_language)
            .build()
    }
}
