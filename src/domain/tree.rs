use termtree::Tree;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::AnimalNode;
use crate::domain::token::{TokenKind, COMMENT_MARKER};

/// Animal guessed by a freshly created tree.
pub const DEFAULT_ANIMAL: &str = "lizard";

/// Header written on top of every saved token file.
pub const TOKEN_FILE_HEADER: &str = "# animal-guess database\n# pairs of lines: Q/G, then the question or animal\n";

/// Decision tree of yes/no questions leading to animal guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalTree {
    root: AnimalNode,
}

impl Default for AnimalTree {
    fn default() -> Self {
        Self::with_default_animal(DEFAULT_ANIMAL)
    }
}

impl AnimalTree {
    pub fn new(root: AnimalNode) -> Self {
        Self { root }
    }

    /// Single-leaf tree guessing `animal`.
    pub fn with_default_animal(animal: impl Into<String>) -> Self {
        Self::new(AnimalNode::new_leaf(animal))
    }

    pub fn root(&self) -> &AnimalNode {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut AnimalNode {
        &mut self.root
    }

    /// Turns the rejected leaf `node` into a question whose yes branch is
    /// `correct_animal` and whose no branch is the rejected guess.
    ///
    /// Labels starting with `#` are refused: the token file could not
    /// store them.
    #[instrument(level = "debug", skip(node), fields(guess = %node.label()))]
    pub fn flip_to_question(
        node: &mut AnimalNode,
        question: &str,
        correct_animal: &str,
    ) -> DomainResult<()> {
        if node.is_question() {
            return Err(DomainError::NotALeaf(node.label().to_string()));
        }
        if let Some(label) = [question, correct_animal]
            .into_iter()
            .find(|label| label.starts_with(COMMENT_MARKER))
        {
            return Err(DomainError::CommentLabel(label.to_string()));
        }
        node.flip(question.to_string(), correct_animal.to_string());
        Ok(())
    }

    /// Pre-order walk yielding `(depth, node)`, yes subtree before no subtree.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Number of levels; a single leaf has depth 1.
    pub fn depth(&self) -> usize {
        self.iter().map(|(depth, _)| depth + 1).max().unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Leaf labels in pre-order.
    pub fn animals(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.label().to_string())
            .collect()
    }

    /// Flat `(type, content)` token sequence accepted by `TokenBuilder`.
    pub fn to_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.node_count() * 2);
        for (_, node) in self.iter() {
            let kind = if node.is_question() {
                TokenKind::Question
            } else {
                TokenKind::Leaf
            };
            tokens.push(kind.as_token().to_string());
            tokens.push(node.label().to_string());
        }
        tokens
    }

    /// Token file content: header comment followed by one token per line.
    pub fn to_token_file(&self) -> String {
        let mut content = String::from(TOKEN_FILE_HEADER);
        for token in self.to_tokens() {
            content.push_str(&token);
            content.push('\n');
        }
        content
    }

    /// Indented human-readable lines: `Q:` for questions, `G:` for guesses.
    pub fn render(&self) -> Vec<String> {
        self.iter()
            .map(|(depth, node)| format!("{}{}", "  ".repeat(depth), marked_label(node)))
            .collect()
    }

    pub fn to_termtree(&self) -> Tree<String> {
        fn build(node: &AnimalNode) -> Tree<String> {
            let leaves: Vec<_> = [node.yes(), node.no()]
                .into_iter()
                .flatten()
                .map(build)
                .collect();
            Tree::new(marked_label(node)).with_leaves(leaves)
        }
        build(&self.root)
    }
}

fn marked_label(node: &AnimalNode) -> String {
    if node.is_question() {
        format!("Q: {}", node.label())
    } else {
        format!("G: {}", node.label())
    }
}

pub struct TreeIterator<'a> {
    stack: Vec<(usize, &'a AnimalNode)>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a AnimalTree) -> Self {
        Self {
            stack: vec![(0, tree.root())],
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (usize, &'a AnimalNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // no pushed first so yes is visited first
        if let (Some(yes), Some(no)) = (node.yes(), node.no()) {
            self.stack.push((depth + 1, no));
            self.stack.push((depth + 1, yes));
        }
        Some((depth, node))
    }
}
