use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::{LoadSession, Loader, load_xml};
use crate::error::LoadError;
use crate::prefix::suffix;

const XML_EXTENSION: &str = ".xml";

/// Translation files compiled into the binary, identified by dotted ids.
///
/// Ids follow the `<namespace>.<dir>.<file>.xml` convention, so a pattern
/// such as `/Translations/` selects every file below that directory of the
/// namespace.
///
/// # Example
///
/// ```
/// use lingo::EmbeddedResources;
///
/// let resources = EmbeddedResources::new("MyApp")
///     .with("MyApp.Translations.en.xml", r#"<Translations Language="en"/>"#);
/// assert_eq!(resources.ids().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    namespace: String,
    resources: Vec<(String, String)>,
}

impl EmbeddedResources {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            resources: Vec::new(),
        }
    }

    /// Add a resource, typically the result of `include_str!`.
    pub fn with(mut self, id: impl Into<String>, content: impl Into<String>) -> Self {
        self.resources.push((id.into(), content.into()));
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(|(id, _)| id.as_str())
    }

    /// Expand a path-like pattern into an id prefix.
    ///
    /// Slashes become dots, a leading dot is relative to the namespace and
    /// a pattern not naming an `.xml` file is treated as a directory.
    pub fn resolve_pattern(&self, pattern: &str) -> String {
        let mut resolved = pattern.replace('/', ".");
        if resolved.starts_with('.') {
            resolved = format!("{}{resolved}", self.namespace);
        }
        if !ends_with_ignore_case(&resolved, XML_EXTENSION) {
            resolved = suffix(Some(&resolved));
        }
        resolved
    }

    /// Resources whose id starts with the resolved pattern and ends in
    /// `.xml`, compared case-insensitively, in registration order.
    pub fn matching<'a>(&'a self, pattern: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.resources
            .iter()
            .filter(move |(id, _)| {
                starts_with_ignore_case(id, pattern) && ends_with_ignore_case(id, XML_EXTENSION)
            })
            .map(|(id, content)| (id.as_str(), content.as_str()))
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

fn ends_with_ignore_case(s: &str, suffix: &str) -> bool {
    s.len() >= suffix.len()
        && s.is_char_boundary(s.len() - suffix.len())
        && s[s.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Loads XML translations from [`EmbeddedResources`].
#[derive(Debug, Clone)]
pub struct ResourceLoader {
    resources: Arc<EmbeddedResources>,
    pattern: String,
    throw_if_not_exists: bool,
}

impl ResourceLoader {
    pub fn new(
        resources: Arc<EmbeddedResources>,
        pattern: impl Into<String>,
        throw_if_not_exists: bool,
    ) -> Self {
        Self {
            resources,
            pattern: pattern.into(),
            throw_if_not_exists,
        }
    }
}

impl Loader for ResourceLoader {
    fn load(&self, session: &mut LoadSession<'_>) -> Result<(), LoadError> {
        let pattern = self.resources.resolve_pattern(&self.pattern);
        let mut count = 0;

        for (id, content) in self.resources.matching(&pattern) {
            load_xml(session, Path::new(id), content)?;
            count += 1;
        }

        if count == 0 {
            if self.throw_if_not_exists {
                return Err(LoadError::ResourceNotFound { pattern });
            }
            debug!(%pattern, "no translation resources matched, skipping");
        }
        Ok(())
    }
}
