//! Display names, descriptions and placeholders for model types.
//!
//! Host integrations ask for the display strings of a type, a property or
//! the values of an enum. Each string comes from a literal supplied by the
//! host when present, and otherwise from the dictionary below the prefix
//! computed for the type or property.

use crate::error::LookupError;
use crate::options::MissingTranslationMode;
use crate::prefix::{PrefixResolver, meta_key};
use crate::readable::to_readable;
use crate::registry::Lingo;
use crate::translator::{KEY_MARKER, Translator};

/// Order given to enum fields that do not declare one.
pub const DEFAULT_FIELD_ORDER: i32 = 1000;

/// The display strings that can be resolved for a type or property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    DisplayName,
    Description,
    Placeholder,
}

impl MetadataKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataKind::DisplayName => "DisplayName",
            MetadataKind::Description => "Description",
            MetadataKind::Placeholder => "Placeholder",
        }
    }
}

/// Literal display strings declared by the host, each optional.
///
/// A literal starting with `#` names a dictionary key instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLiterals {
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub placeholder: Option<String>,
}

/// Resolved display strings. Absent values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayMetadata {
    pub display_name: String,
    pub description: String,
    pub placeholder: String,
}

/// One declared enum field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumField {
    pub name: String,
    pub display_name: Option<String>,
    pub group: Option<String>,
    pub order: Option<i32>,
}

impl EnumField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            group: None,
            order: None,
        }
    }
}

/// The resolved display name of an enum field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDisplay {
    pub name: String,
    pub group: String,
    pub display_name: String,
}

/// Resolves display metadata in one language.
#[derive(Debug, Clone)]
pub struct MetadataResolver<'a> {
    prefixes: PrefixResolver<'a>,
    translator: Translator<'a>,
    mode: MissingTranslationMode,
}

impl<'a> MetadataResolver<'a> {
    pub fn new(lingo: &'a Lingo, language: Option<&str>) -> Self {
        Self {
            prefixes: lingo.prefix_resolver(),
            translator: lingo.get_translator(language, None),
            mode: lingo.missing_translation_mode(),
        }
    }

    /// Display strings for a model type.
    pub fn type_metadata(
        &self,
        type_name: &str,
        literals: &DisplayLiterals,
    ) -> Result<DisplayMetadata, LookupError> {
        let prefix = self.prefixes.type_prefix(type_name);
        self.display_metadata(prefix.as_deref(), literals, type_name)
    }

    /// Display strings for a property of `container`.
    pub fn property_metadata(
        &self,
        container: Option<&str>,
        property: &str,
        literals: &DisplayLiterals,
    ) -> Result<DisplayMetadata, LookupError> {
        let prefix = self.prefixes.property_prefix(container, property);
        self.display_metadata(Some(&prefix), literals, property)
    }

    /// Display names of enum fields, ordered by declared order.
    ///
    /// Fields without an order sort as [`DEFAULT_FIELD_ORDER`]; ties keep
    /// declaration order.
    pub fn enum_values(
        &self,
        enum_type: &str,
        fields: &[EnumField],
    ) -> Result<Vec<EnumValueDisplay>, LookupError> {
        let mut ordered: Vec<&EnumField> = fields.iter().collect();
        ordered.sort_by_key(|field| field.order.unwrap_or(DEFAULT_FIELD_ORDER));

        ordered
            .into_iter()
            .map(|field| {
                let key = self.prefixes.enum_value_key(enum_type, &field.name);
                let display_name =
                    self.meta_string("", Some(&key), field.display_name.as_deref(), &field.name)?;
                Ok(EnumValueDisplay {
                    name: field.name.clone(),
                    group: field.group.clone().unwrap_or_default(),
                    display_name,
                })
            })
            .collect()
    }

    fn display_metadata(
        &self,
        prefix: Option<&str>,
        literals: &DisplayLiterals,
        name: &str,
    ) -> Result<DisplayMetadata, LookupError> {
        let resolve = |kind: MetadataKind, literal: &Option<String>| {
            self.meta_string(kind.as_str(), prefix, literal.as_deref(), name)
        };

        Ok(DisplayMetadata {
            display_name: resolve(MetadataKind::DisplayName, &literals.display_name)?,
            description: resolve(MetadataKind::Description, &literals.description)?,
            placeholder: resolve(MetadataKind::Placeholder, &literals.placeholder)?,
        })
    }

    /// Resolve one display string.
    ///
    /// A non-blank literal wins, with `#key` literals translated. Otherwise
    /// `<prefix>.<kind>` is looked up; only [`MissingTranslationMode::AsError`]
    /// turns a miss into an error. A missing display name (or kind-less
    /// string) falls back to the readable form of `name` under
    /// [`MissingTranslationMode::AsReadable`].
    pub fn meta_string(
        &self,
        kind: &str,
        prefix: Option<&str>,
        literal: Option<&str>,
        name: &str,
    ) -> Result<String, LookupError> {
        match literal.filter(|l| !l.trim().is_empty()) {
            Some(literal) if literal.starts_with(KEY_MARKER) => Ok(self.translator.text(literal)),
            Some(literal) => Ok(literal.to_string()),
            None => {
                let key = meta_key(prefix, kind);
                let text = match self.mode {
                    MissingTranslationMode::AsError => Some(self.translator.translate(&key)?),
                    _ => self.translator.get(&key),
                };

                let readable = self.mode == MissingTranslationMode::AsReadable
                    && (kind == MetadataKind::DisplayName.as_str() || kind.trim().is_empty());

                Ok(text
                    .or_else(|| readable.then(|| to_readable(name)))
                    .unwrap_or_default())
            }
        }
    }
}
