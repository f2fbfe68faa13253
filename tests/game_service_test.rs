//! Tests for GameService

mod common;

use std::sync::Arc;

use animal_guess::application::services::{DatabaseService, GameOutcome, GameService};
use animal_guess::domain::{AnimalNode, AnimalTree, TraceFlags};
use animal_guess::infrastructure::traits::RealFileSystem;
use common::{sample_tree, ScriptedConsole};
use tempfile::TempDir;

#[test]
fn given_default_tree_when_playing_then_first_prompt_is_the_lizard_guess() {
    // Arrange
    let mut tree = AnimalTree::default();
    let mut console = ScriptedConsole::new(&["y"]);

    // Act
    GameService::default().play(&mut tree, &mut console).unwrap();

    // Assert
    assert_eq!(console.prompts[0], "Is it a(n) lizard? (y/n)");
}

#[test]
fn given_correct_guess_when_playing_then_tree_is_unchanged() {
    // Arrange
    let mut tree = sample_tree();
    let mut console = ScriptedConsole::new(&["no", "yes", "Y"]);

    // Act
    let outcome = GameService::default().play(&mut tree, &mut console).unwrap();

    // Assert
    assert_eq!(
        outcome,
        GameOutcome::GuessedCorrectly {
            animal: "fish".to_string()
        }
    );
    assert_eq!(tree, sample_tree());
    assert_eq!(console.remaining(), 0);
}

#[test]
fn given_wrong_guess_on_default_tree_when_playing_then_learns_new_animal() {
    // Arrange
    let mut tree = AnimalTree::default();
    let mut console = ScriptedConsole::new(&["n", "snake", "Does it have legs?"]);

    // Act
    let outcome = GameService::default().play(&mut tree, &mut console).unwrap();

    // Assert
    assert_eq!(
        outcome,
        GameOutcome::LearnedNewAnimal {
            animal: "snake".to_string(),
            question: "Does it have legs?".to_string()
        }
    );
    assert_eq!(
        tree,
        AnimalTree::new(AnimalNode::new_question(
            "Does it have legs?",
            AnimalNode::new_leaf("snake"),
            AnimalNode::new_leaf("lizard"),
        ))
    );
    assert_eq!(tree.depth(), 2);
    let question_prompt = &console.prompts[2];
    assert!(question_prompt.contains("tells a(n) snake apart from a(n) lizard"));
    assert!(question_prompt.contains("answering yes must mean a(n) snake"));
}

#[test]
fn given_learned_tree_when_playing_again_then_asks_new_question_first() {
    // Arrange
    let mut tree = AnimalTree::default();
    let game = GameService::new(TraceFlags::all());
    let mut first = ScriptedConsole::new(&["n", "snake", "Does it have legs?"]);
    game.play(&mut tree, &mut first).unwrap();
    let mut second = ScriptedConsole::new(&["y", "y"]);

    // Act
    let outcome = game.play(&mut tree, &mut second).unwrap();

    // Assert
    assert_eq!(
        second.prompts,
        vec!["Does it have legs? (y/n)", "Is it a(n) snake? (y/n)"]
    );
    assert_eq!(
        outcome,
        GameOutcome::GuessedCorrectly {
            animal: "snake".to_string()
        }
    );
}

#[test]
fn given_wrong_guess_deep_in_tree_when_learning_then_only_that_leaf_grows() {
    // Arrange
    let mut tree = sample_tree();
    let depth_before = tree.depth();
    let mut console = ScriptedConsole::new(&["n", "n", "n", "cat", "Does it purr?"]);

    // Act
    GameService::default().play(&mut tree, &mut console).unwrap();

    // Assert
    assert_eq!(tree.depth(), depth_before + 1);
    assert_eq!(tree.animals(), vec!["bird", "fish", "cat", "dog"]);
    for (_, node) in tree.iter() {
        assert!(node.is_leaf() != node.is_question());
    }
}

#[test]
fn given_empty_answers_when_playing_then_reprompts_until_non_empty() {
    // Arrange
    let mut tree = AnimalTree::default();
    let mut console = ScriptedConsole::new(&["", "   ", "n", "", "snake", "Does it have legs?"]);

    // Act
    GameService::default().play(&mut tree, &mut console).unwrap();

    // Assert
    assert_eq!(tree.animals(), vec!["snake", "lizard"]);
    assert_eq!(
        console
            .output
            .iter()
            .filter(|l| l.as_str() == "ERROR: input is empty")
            .count(),
        3
    );
}

#[test]
fn given_input_ends_mid_round_when_playing_then_reports_end_of_input() {
    // Arrange
    let mut tree = AnimalTree::default();
    let mut console = ScriptedConsole::new(&["n", "snake"]);

    // Act
    let result = GameService::default().play(&mut tree, &mut console);

    // Assert
    let err = result.unwrap_err();
    assert!(err.is_end_of_input());
    assert_eq!(tree, AnimalTree::default());
}

#[test]
fn given_answers_starting_with_hash_when_learning_then_reprompts_and_tree_reloads() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("animals.txt");
    let database = DatabaseService::new(Arc::new(RealFileSystem), TraceFlags::default());
    let mut tree = AnimalTree::default();
    let mut console =
        ScriptedConsole::new(&["n", "#1 dog", "dog", "# a pet?", "Is it a pet?"]);

    // Act
    GameService::default().play(&mut tree, &mut console).unwrap();
    database.save(&path, &tree).unwrap();
    let reloaded = database.load(&path).unwrap();

    // Assert
    assert_eq!(
        tree,
        AnimalTree::new(AnimalNode::new_question(
            "Is it a pet?",
            AnimalNode::new_leaf("dog"),
            AnimalNode::new_leaf("lizard"),
        ))
    );
    assert_eq!(reloaded, tree);
    assert_eq!(
        console
            .output
            .iter()
            .filter(|l| l.as_str() == "ERROR: answer must not start with '#'")
            .count(),
        2
    );
    assert_eq!(console.remaining(), 0);
}
