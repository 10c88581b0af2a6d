//! Miette diagnostic wrapper for translation file errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use lingo::loader::read_xml_file;
use lingo::parser::ParseError;
use lingo::LoadError;
use miette::{miette, Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for malformed translation files.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(lingo::syntax))]
pub struct LingoDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl LingoDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        Self::at(path, content, line, column, err.message())
    }

    /// Create a diagnostic pointing at a 1-based line and column.
    pub fn at(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        let help = message
            .contains("end tag")
            .then(|| "every element must be closed by an end tag with the same name".to_string());

        LingoDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (byte_offset(content, line, column), 1).into(),
            message,
            help,
        }
    }
}

/// Convert a 1-based line and character column to a byte offset, clamped
/// to the content.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let rest = content.get(line_start..).unwrap_or_default();
    let within = rest
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(rest.len(), |(offset, _)| offset);
    (line_start + within).min(content.len())
}

/// Turn a load failure into a report, with source context for parse errors.
pub fn load_error_report(err: LoadError) -> Report {
    if let LoadError::Parse {
        path,
        line,
        column,
        message,
    } = &err
    {
        if let Ok(content) = read_xml_file(path) {
            return LingoDiagnostic::at(path, &content, *line, *column, message.clone()).into();
        }
    }
    miette!("{}", err)
}
