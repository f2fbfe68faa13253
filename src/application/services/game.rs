//! Game session service
//!
//! Plays one round against an `AnimalTree`: walks the questions, makes a
//! guess, and learns a new animal when the guess is wrong.

use std::io;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{AnimalNode, AnimalTree, DomainError, TraceFlags, COMMENT_MARKER};
use crate::infrastructure::traits::Console;

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// The guess was confirmed; the tree is unchanged.
    GuessedCorrectly { animal: String },
    /// The guess was wrong and the tree learned `animal`.
    LearnedNewAnimal { animal: String, question: String },
}

/// Service driving a single play-through.
#[derive(Debug, Default)]
pub struct GameService {
    trace: TraceFlags,
}

impl GameService {
    pub fn new(trace: TraceFlags) -> Self {
        Self { trace }
    }

    /// Play one round. The session ends after a correct guess or after
    /// one learning step.
    #[instrument(level = "debug", skip_all)]
    pub fn play(
        &self,
        tree: &mut AnimalTree,
        console: &mut dyn Console,
    ) -> ApplicationResult<GameOutcome> {
        let mut cursor = tree.root_mut();
        while cursor.is_question() {
            if self.trace.inspecting_node {
                debug!("inspecting node: {}", cursor);
            }
            let answer = console
                .ask_yes_no(cursor.label())
                .with_context("ask question")?;
            cursor = match cursor.branch_mut(answer) {
                Some(next) => next,
                None => {
                    return Err(DomainError::BrokenInvariant(
                        "question node without children".to_string(),
                    )
                    .into())
                }
            };
        }

        if self.trace.inspecting_node {
            debug!("inspecting node: {}", cursor);
        }
        let guess = cursor.label().to_string();
        let correct = console
            .ask_yes_no(&format!("Is it a(n) {guess}?"))
            .with_context("ask guess")?;
        if correct {
            info!("guessed {}", guess);
            return Ok(GameOutcome::GuessedCorrectly { animal: guess });
        }

        self.learn(cursor, console)
    }

    /// Ask for the right animal and a question telling it apart from the
    /// rejected guess, then flip the leaf. Answering yes selects the new
    /// animal.
    fn learn(
        &self,
        leaf: &mut AnimalNode,
        console: &mut dyn Console,
    ) -> ApplicationResult<GameOutcome> {
        let guess = leaf.label().to_string();
        let animal = ask_label(console, "I give up. What animal were you thinking of?")
            .with_context("ask animal")?;
        let question = ask_label(
            console,
            &format!(
                "Enter a yes/no question that tells a(n) {animal} apart from a(n) {guess} \
                 (answering yes must mean a(n) {animal})"
            ),
        )
        .with_context("ask question")?;

        AnimalTree::flip_to_question(leaf, &question, &animal)?;
        if self.trace.flipping {
            debug!("flipped to question: {}", leaf);
        }
        info!("learned {} via {:?}", animal, question);

        Ok(GameOutcome::LearnedNewAnimal { animal, question })
    }
}

/// Like `ask_line`, but re-prompts for answers the token file would read
/// back as comments.
fn ask_label(console: &mut dyn Console, prompt: &str) -> io::Result<String> {
    loop {
        let answer = console.ask_line(prompt)?;
        if !answer.starts_with(COMMENT_MARKER) {
            return Ok(answer);
        }
        console.write_error(&format!("answer must not start with '{COMMENT_MARKER}'"))?;
    }
}
