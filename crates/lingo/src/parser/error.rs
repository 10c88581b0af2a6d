//! Parse error types for translation files.

use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected end of input.
    #[error("unexpected end of input at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },
}

impl ParseError {
    /// Line and column of the error, both 1-based.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. } | ParseError::UnexpectedEof { line, column } => {
                (*line, *column)
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParseError::Syntax { message, .. } => message.clone(),
            ParseError::UnexpectedEof { .. } => "unexpected end of file".to_string(),
        }
    }
}
