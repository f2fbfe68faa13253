use std::fmt;

/// The two subtrees of a question node.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Branches {
    yes: AnimalNode,
    no: AnimalNode,
}

/// Node of the guessing tree.
///
/// A node without children is a leaf holding an animal name; a node with
/// both children is a question. Both children live in one optional box, so
/// a node with a single child cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalNode {
    /// Question text or animal name, depending on the node shape
    label: String,
    branches: Option<Box<Branches>>,
}

impl AnimalNode {
    /// Question node whose `yes` subtree is taken on an affirmative answer.
    pub fn new_question(question: impl Into<String>, yes: AnimalNode, no: AnimalNode) -> Self {
        Self {
            label: question.into(),
            branches: Some(Box::new(Branches { yes, no })),
        }
    }

    pub fn new_leaf(animal: impl Into<String>) -> Self {
        Self {
            label: animal.into(),
            branches: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_question(&self) -> bool {
        self.branches.is_some()
    }

    pub fn is_leaf(&self) -> bool {
        self.branches.is_none()
    }

    pub fn yes(&self) -> Option<&AnimalNode> {
        self.branches.as_deref().map(|b| &b.yes)
    }

    pub fn no(&self) -> Option<&AnimalNode> {
        self.branches.as_deref().map(|b| &b.no)
    }

    /// Child selected by `answer`, `None` for leaves.
    pub fn branch(&self, answer: bool) -> Option<&AnimalNode> {
        if answer {
            self.yes()
        } else {
            self.no()
        }
    }

    pub(crate) fn branch_mut(&mut self, answer: bool) -> Option<&mut AnimalNode> {
        self.branches
            .as_deref_mut()
            .map(|b| if answer { &mut b.yes } else { &mut b.no })
    }

    /// Rewrites this leaf in place: the label becomes `question`, the yes
    /// child holds `correct_animal` and the no child the previous guess.
    pub(super) fn flip(&mut self, question: String, correct_animal: String) {
        let guessed = std::mem::replace(&mut self.label, question);
        self.branches = Some(Box::new(Branches {
            yes: AnimalNode::new_leaf(correct_animal),
            no: AnimalNode::new_leaf(guessed),
        }));
    }
}

impl fmt::Display for AnimalNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.yes(), self.no()) {
            (Some(yes), Some(no)) => {
                write!(f, "question: ({}, {}, {})", self.label, yes.label, no.label)
            }
            _ => write!(f, "animal: {}", self.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_is_not_question() {
        let leaf = AnimalNode::new_leaf("cat");
        assert!(leaf.is_leaf());
        assert!(!leaf.is_question());
        assert!(leaf.yes().is_none());
        assert!(leaf.no().is_none());
    }

    #[test]
    fn test_question_keeps_branch_order() {
        let node = AnimalNode::new_question(
            "Does it bark?",
            AnimalNode::new_leaf("dog"),
            AnimalNode::new_leaf("cat"),
        );
        assert!(node.is_question());
        assert!(!node.is_leaf());
        assert_eq!(node.branch(true).map(AnimalNode::label), Some("dog"));
        assert_eq!(node.branch(false).map(AnimalNode::label), Some("cat"));
    }

    #[test]
    fn test_flip_moves_guess_to_no_branch() {
        let mut node = AnimalNode::new_leaf("lizard");
        node.flip("Does it have legs?".into(), "snake".into());

        assert_eq!(node.label(), "Does it have legs?");
        assert_eq!(node.yes().map(AnimalNode::label), Some("snake"));
        assert_eq!(node.no().map(AnimalNode::label), Some("lizard"));
        assert!(node.yes().is_some_and(AnimalNode::is_leaf));
        assert!(node.no().is_some_and(AnimalNode::is_leaf));
    }

    #[test]
    fn test_display() {
        let node = AnimalNode::new_question(
            "Does it fly?",
            AnimalNode::new_leaf("bird"),
            AnimalNode::new_leaf("fish"),
        );
        assert_eq!(node.to_string(), "question: (Does it fly?, bird, fish)");
        assert_eq!(AnimalNode::new_leaf("fish").to_string(), "animal: fish");
    }
}
