use serde::{Deserialize, Serialize};

/// How the text of a translation entry should be rendered by consumers.
///
/// The format is carried through lookups untouched; parameter substitution
/// treats every format the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextFormat {
    /// Plain text, no markup.
    #[default]
    Plain,
    /// Inline markup.
    Markup,
    /// Markup where blank lines separate paragraphs.
    ParagraphedMarkup,
}

impl TextFormat {
    /// Selects a format from the value of a `Markup` attribute.
    ///
    /// `"Paragraphed"` (any case) selects [`TextFormat::ParagraphedMarkup`],
    /// any other value selects [`TextFormat::Markup`], and an absent
    /// attribute means [`TextFormat::Plain`].
    pub fn from_markup_attribute(value: Option<&str>) -> Self {
        match value {
            None => TextFormat::Plain,
            Some(v) if v.eq_ignore_ascii_case("Paragraphed") => TextFormat::ParagraphedMarkup,
            Some(_) => TextFormat::Markup,
        }
    }

    /// Returns true for both markup formats.
    pub fn is_markup(self) -> bool {
        !matches!(self, TextFormat::Plain)
    }
}

/// A single translated value together with its text format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub value: String,
    pub format: TextFormat,
}

impl TranslationEntry {
    pub fn new(value: impl Into<String>, format: TextFormat) -> Self {
        Self {
            value: value.into(),
            format,
        }
    }

    /// Creates a [`TextFormat::Plain`] entry.
    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(value, TextFormat::Plain)
    }
}
