//! Dotted-path prefix computation.
//!
//! A prefix is the dotted path prepended to a short key to form the full
//! dictionary key. Prefixes for types, properties and enum values are
//! derived from per-member overrides, base-prefix rules registered for a
//! type or one of its ancestors, and a naming convention fallback.

mod hierarchy;
mod overrides;
mod resolver;
mod rules;

pub use hierarchy::{Ancestors, TypeHierarchy};
pub use overrides::PrefixOverrides;
pub use resolver::PrefixResolver;
pub use rules::{BasePrefixes, PrefixFn};

/// Path separator between key segments.
pub const SEPARATOR: char = '.';

/// Returns `s` if it contains anything other than whitespace.
pub(crate) fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// Appends the separator to a non-empty fragment that does not already end
/// with it. Absent and empty fragments yield an empty string.
///
/// ```
/// use lingo::prefix::suffix;
///
/// assert_eq!(suffix(Some("Models")), "Models.");
/// assert_eq!(suffix(Some("Models.")), "Models.");
/// assert_eq!(suffix(None), "");
/// ```
pub fn suffix(fragment: Option<&str>) -> String {
    match fragment {
        Some(f) if !f.is_empty() && !f.ends_with(SEPARATOR) => format!("{f}{SEPARATOR}"),
        Some(f) => f.to_string(),
        None => String::new(),
    }
}

/// Strips one trailing separator.
pub fn unsuffix(fragment: &str) -> &str {
    fragment.strip_suffix(SEPARATOR).unwrap_or(fragment)
}

/// Strips one leading separator.
pub fn unprefix(fragment: &str) -> &str {
    fragment.strip_prefix(SEPARATOR).unwrap_or(fragment)
}

/// Joins two fragments with exactly one separator.
///
/// The first fragment loses a trailing separator and the second a leading
/// one. An empty side contributes nothing.
///
/// ```
/// use lingo::prefix::compose;
///
/// assert_eq!(compose("A.", "B"), "A.B");
/// assert_eq!(compose("A", ".B"), "A.B");
/// assert_eq!(compose("", ".B"), "B");
/// ```
pub fn compose(first: &str, second: &str) -> String {
    let first = unsuffix(first);
    let second = unprefix(second);

    match (first.is_empty(), second.is_empty()) {
        (true, _) => second.to_string(),
        (false, true) => first.to_string(),
        (false, false) => format!("{first}{SEPARATOR}{second}"),
    }
}

/// Builds the key of a metadata string (`DisplayName`, `Description`, ...)
/// below a prefix. A blank kind yields the prefix itself.
pub fn meta_key(prefix: Option<&str>, kind: &str) -> String {
    let prefix = unsuffix(prefix.unwrap_or_default());
    match kind.trim() {
        "" => prefix.to_string(),
        kind => format!("{prefix}{SEPARATOR}{kind}"),
    }
}
