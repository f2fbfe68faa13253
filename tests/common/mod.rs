//! Shared test helpers

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use animal_guess::domain::{AnimalNode, AnimalTree};
use animal_guess::infrastructure::traits::Console;
use animal_guess::util::testing;

/// Console that replays scripted answers and records everything it shows.
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    markers: Vec<String>,
    /// Prompts in the order they were shown
    pub prompts: Vec<String>,
    /// Lines written
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        testing::init_test_setup();
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            markers: vec!["y".to_string()],
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn affirmative_markers(&self) -> &[String] {
        &self.markers
    }
}

/// fly? -> bird | swim? -> (fish | dog)
pub fn sample_tree() -> AnimalTree {
    AnimalTree::new(AnimalNode::new_question(
        "Does it fly?",
        AnimalNode::new_leaf("bird"),
        AnimalNode::new_question(
            "Does it swim?",
            AnimalNode::new_leaf("fish"),
            AnimalNode::new_leaf("dog"),
        ),
    ))
}

pub fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
