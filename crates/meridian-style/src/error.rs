//! Error types for the styling language.

use std::path::PathBuf;

use crate::parser::Position;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a stylesheet.
///
/// Every parse error carries the 1-indexed line and column of the first
/// unconsumed input, by leftmost scanning order. A stylesheet is either
/// wholly well-formed or rejected; no partial rule list accompanies an
/// error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed token: bad literal, unterminated string, bracket, or comment.
    #[error("Lexical error at line {line}, column {column}: {message}")]
    Lexical {
        message: String,
        line: u32,
        column: u32,
    },

    /// A grammar production was not satisfied at the current position.
    #[error("Syntax error at line {line}, column {column}: expected {expected}")]
    Syntax {
        expected: String,
        line: u32,
        column: u32,
    },

    /// Bracketed text was rejected by the filter/expression grammar its
    /// syntactic position requires.
    #[error("Embedded expression error at line {line}, column {column}: {message}")]
    EmbeddedExpression {
        message: String,
        line: u32,
        column: u32,
    },

    /// File I/O error.
    #[error("Failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a lexical error.
    pub fn lexical(message: impl Into<String>, at: Position) -> Self {
        Self::Lexical {
            message: message.into(),
            line: at.line,
            column: at.column,
        }
    }

    /// Create a syntax error from an expectation description.
    pub fn syntax(expected: impl Into<String>, at: Position) -> Self {
        Self::Syntax {
            expected: expected.into(),
            line: at.line,
            column: at.column,
        }
    }

    /// Create an embedded-expression error.
    pub fn embedded(message: impl Into<String>, at: Position) -> Self {
        Self::EmbeddedExpression {
            message: message.into(),
            line: at.line,
            column: at.column,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The line/column the error points at, when it has one.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Lexical { line, column, .. }
            | Self::Syntax { line, column, .. }
            | Self::EmbeddedExpression { line, column, .. } => Some(Position {
                line: *line,
                column: *column,
            }),
            Self::Io { .. } => None,
        }
    }
}
