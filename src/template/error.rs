//! Error types for SQL template splitting

use thiserror::Error;

use crate::model::ClauseStatus;

/// Errors that can occur while splitting a SQL template
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("Unterminated clause at offset {offset}: missing '}}}}'")]
    UnterminatedClause { offset: usize },

    #[error("Unknown clause '{name}' at offset {offset}")]
    UnknownClause { name: String, offset: usize },

    #[error("'{{{{end}}}}' at offset {offset} has no open block")]
    UnexpectedEnd { offset: usize },

    #[error("'{{{{else}}}}' at offset {offset} is not inside an if block")]
    MisplacedElse { offset: usize },

    #[error("Block {status:?} is never closed")]
    UnclosedBlock { status: ClauseStatus },

    #[error("Variable '{name}' collides with a generated helper name")]
    ReservedVariable { name: String },

    #[error("Unterminated string literal at offset {offset}")]
    UnterminatedLiteral { offset: usize },

    #[error("Placeholder at offset {offset} has no name")]
    EmptyVariable { offset: usize },
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;
