//! Error types for loading and strict lookups.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a [`Lingo::load`](crate::Lingo::load) pass.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A translation path that was required to exist does not.
    #[error("could not find path '{path}'")]
    NotFound { path: PathBuf },

    /// A resource pattern that was required to match did not match anything.
    #[error("could not find resource '{pattern}'")]
    ResourceNotFound { pattern: String },

    /// File I/O error when reading a translation source.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal failed.
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// Malformed translation source, with location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Failure reported by a custom loader.
    #[error("{message}")]
    Custom { message: String },
}

impl LoadError {
    pub fn custom(message: impl Into<String>) -> Self {
        LoadError::Custom {
            message: message.into(),
        }
    }
}

/// A lookup miss surfaced under strict missing-translation handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("translation '{key}' not found for language '{language}'{}", format_suggestions(suggestions))]
    Missing {
        language: String,
        key: String,
        suggestions: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Find up to three keys similar to `key`, closest first.
///
/// Comparison is case-insensitive Levenshtein distance, allowing one edit
/// for keys of up to three characters and two edits otherwise.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let key = key.to_lowercase();
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };

    let mut candidates: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| {
            let distance = strsim::levenshtein(&key, &candidate.to_lowercase());
            (distance, candidate)
        })
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();

    candidates.sort();
    candidates
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
