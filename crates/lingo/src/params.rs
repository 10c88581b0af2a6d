//! `{name}` placeholder substitution.

use std::borrow::Cow;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::dictionary::fold_case;

/// Produces the replacement for a parameter, given `(language, name)`.
pub type ParameterFn = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// An ordered set of named parameters.
///
/// Names are case-insensitive. Re-registering a name replaces its function
/// but keeps its original position.
#[derive(Clone, Default)]
pub struct Parameters {
    entries: Vec<Parameter>,
}

#[derive(Clone)]
struct Parameter {
    name: String,
    folded: String,
    value: ParameterFn,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ParameterFn) {
        let name = name.into();
        let folded = fold_case(&name);
        match self.entries.iter_mut().find(|p| p.folded == folded) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Parameter {
                name,
                folded,
                value,
            }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every `{name}` of a registered parameter in `text`.
    ///
    /// Matching is case-insensitive. Replacement values are inserted as-is
    /// and never scanned for further placeholders. Placeholders without a
    /// registered parameter are left untouched.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use lingo::Parameters;
    ///
    /// let mut params = Parameters::new();
    /// params.insert("name", Arc::new(|_language: &str, _name: &str| "World".to_string()));
    ///
    /// assert_eq!(params.parse("Hello {NAME}, {other}", "en"), "Hello World, {other}");
    /// ```
    pub fn parse<'t>(&self, text: &'t str, language: &str) -> Cow<'t, str> {
        if self.entries.is_empty() {
            return Cow::Borrowed(text);
        }
        substitute(text, |name| {
            self.find(name).map(|p| (p.value)(language, &p.name))
        })
    }

    fn find(&self, name: &str) -> Option<&Parameter> {
        let folded = fold_case(name);
        self.entries.iter().find(|p| p.folded == folded)
    }
}

impl Debug for Parameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Single left-to-right pass replacing `{name}` tokens for which `lookup`
/// returns a value.
pub(crate) fn substitute<'t>(
    text: &'t str,
    mut lookup: impl FnMut(&str) -> Option<String>,
) -> Cow<'t, str> {
    if !text.contains('{') {
        return Cow::Borrowed(text);
    }

    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    let mut replaced = false;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after
            .find('}')
            .and_then(|close| lookup(&after[..close]).map(|value| (close, value)));

        match replacement {
            Some((close, value)) => {
                output.push_str(&value);
                rest = &after[close + 1..];
                replaced = true;
            }
            None => {
                output.push('{');
                rest = after;
            }
        }
    }
    output.push_str(rest);

    if replaced {
        Cow::Owned(output)
    } else {
        Cow::Borrowed(text)
    }
}
