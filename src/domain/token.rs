//! Token stream reading and tree reconstruction.
//!
//! A database is a sequence of `(type, content)` token pairs in pre-order,
//! yes subtree before no subtree:
//!
//! ```text
//! # comment lines and blank lines are ignored
//! Q
//! Does it have legs?
//! G
//! snake
//! G
//! lizard
//! ```

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::AnimalNode;
use crate::domain::trace::TraceFlags;
use crate::domain::tree::AnimalTree;

/// Lines starting with this character are comments in a token file.
pub const COMMENT_MARKER: char = '#';
/// Marker selecting the question family of type tokens.
pub const QUESTION_MARKER: char = 'q';
/// Markers selecting the leaf family of type tokens (guess, animal).
pub const LEAF_MARKERS: [char; 2] = ['g', 'a'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Question,
    Leaf,
}

impl TokenKind {
    /// Classifies a type token, case-insensitively. The question marker wins.
    pub fn classify(token: &str) -> Option<Self> {
        let token = token.to_lowercase();
        if token.contains(QUESTION_MARKER) {
            Some(TokenKind::Question)
        } else if token.contains(&LEAF_MARKERS[..]) {
            Some(TokenKind::Leaf)
        } else {
            None
        }
    }

    /// Canonical token written for this kind.
    pub fn as_token(self) -> &'static str {
        match self {
            TokenKind::Question => "Q",
            TokenKind::Leaf => "G",
        }
    }
}

/// Collects the token lines of `content`.
///
/// Lines starting with `#` and blank lines are skipped, the rest are trimmed.
/// End of input closes the stream, so no empty trailing token is produced.
pub fn read_token_lines(content: &str, trace: &TraceFlags) -> Vec<String> {
    let mut tokens = Vec::new();
    for line in content.lines() {
        if line.starts_with(COMMENT_MARKER) || line.trim().is_empty() {
            if trace.ignoring_line {
                debug!("ignoring line: {:?}", line);
            }
            continue;
        }
        let token = line.trim();
        if trace.token_line {
            debug!("token line: {}", token);
        }
        tokens.push(token.to_string());
    }
    tokens
}

/// Rebuilds an `AnimalTree` from a flat token sequence.
#[derive(Debug, Default)]
pub struct TokenBuilder {
    trace: TraceFlags,
}

impl TokenBuilder {
    pub fn new(trace: TraceFlags) -> Self {
        Self { trace }
    }

    /// Builds the whole tree; any malformed token fails the whole build.
    #[instrument(level = "debug", skip(self, tokens), fields(tokens = tokens.len()))]
    pub fn build(&self, tokens: &[String]) -> DomainResult<AnimalTree> {
        let mut cursor = 0;
        let root = self.build_node(tokens, &mut cursor)?;
        if cursor < tokens.len() {
            return Err(DomainError::TrailingTokens {
                position: cursor,
                remaining: tokens.len() - cursor,
            });
        }
        debug!("built tree from {} tokens", cursor);
        Ok(AnimalTree::new(root))
    }

    fn build_node(&self, tokens: &[String], cursor: &mut usize) -> DomainResult<AnimalNode> {
        let position = *cursor;
        let (kind_token, content) = match (tokens.get(position), tokens.get(position + 1)) {
            (Some(kind), Some(content)) => (kind, content),
            _ => return Err(DomainError::UnexpectedEnd { position }),
        };
        *cursor += 2;

        let node = match TokenKind::classify(kind_token) {
            Some(TokenKind::Question) => {
                let yes = self.build_node(tokens, cursor)?;
                let no = self.build_node(tokens, cursor)?;
                AnimalNode::new_question(content.as_str(), yes, no)
            }
            Some(TokenKind::Leaf) => AnimalNode::new_leaf(content.as_str()),
            None => {
                return Err(DomainError::BadToken {
                    position,
                    token: kind_token.clone(),
                })
            }
        };

        if self.trace.node_created {
            debug!("node created: {}", node);
        }
        Ok(node)
    }
}
