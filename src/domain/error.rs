//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed tree data or broken tree invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed database: unknown token type '{token}' at token {position}")]
    BadToken { position: usize, token: String },

    #[error("malformed database: unexpected end of tokens at token {position}")]
    UnexpectedEnd { position: usize },

    #[error("malformed database: {remaining} unused tokens after the tree at token {position}")]
    TrailingTokens { position: usize, remaining: usize },

    #[error("cannot flip '{0}': node is already a question")]
    NotALeaf(String),

    #[error("'{0}' starts with '#' and would be read back as a comment")]
    CommentLabel(String),

    #[error("broken tree invariant: {0}")]
    BrokenInvariant(String),
}

impl DomainError {
    /// True for errors caused by bad input data rather than a logic error.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            DomainError::BadToken { .. }
                | DomainError::UnexpectedEnd { .. }
                | DomainError::TrailingTokens { .. }
        )
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
