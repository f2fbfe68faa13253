//! Domain layer: the guessing tree and its token form
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod node;
pub mod token;
pub mod trace;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use node::AnimalNode;
pub use token::{read_token_lines, TokenBuilder, TokenKind, COMMENT_MARKER};
pub use trace::TraceFlags;
pub use tree::{AnimalTree, DEFAULT_ANIMAL};
