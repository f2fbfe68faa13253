//! Tests for ConsoleIo and the shared Console prompting helpers

use std::io::{Cursor, ErrorKind};

use animal_guess::domain::TraceFlags;
use animal_guess::infrastructure::traits::{Console, ConsoleIo};

fn console(input: &str) -> ConsoleIo<Cursor<Vec<u8>>, Vec<u8>> {
    ConsoleIo::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        vec!["y".to_string()],
        TraceFlags::default(),
    )
}

fn written(console: ConsoleIo<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_writer()).unwrap()
}

#[test]
fn given_line_with_crlf_when_asking_then_returns_trimmed_answer() {
    // Arrange
    let mut console = console("  snake \r\n");

    // Act
    let answer = console.ask_line("What animal?").unwrap();

    // Assert
    assert_eq!(answer, "snake");
    assert_eq!(written(console), "What animal? : ");
}

#[test]
fn given_empty_lines_when_asking_then_reprompts() {
    // Arrange
    let mut console = console("\n\nsnake\n");

    // Act
    let answer = console.ask_line("What animal?").unwrap();

    // Assert
    assert_eq!(answer, "snake");
    let out = written(console);
    assert_eq!(out.matches("What animal? : ").count(), 3);
    assert_eq!(out.matches("ERROR: input is empty").count(), 2);
}

#[test]
fn given_closed_input_when_asking_then_fails_with_unexpected_eof() {
    // Arrange
    let mut console = console("");

    // Act
    let result = console.ask_line("What animal?");

    // Assert
    assert_eq!(result.unwrap_err().kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn given_yes_no_prompt_when_asking_then_appends_hint_and_matches_marker() {
    // Arrange
    let mut console = console("Yes\nnope\n");

    // Act
    let first = console.ask_yes_no("Does it fly?").unwrap();
    let second = console.ask_yes_no("Does it fly?").unwrap();

    // Assert
    assert!(first);
    assert!(!second);
    assert!(written(console).starts_with("Does it fly? (y/n) : "));
}

#[test]
fn given_custom_markers_when_asking_yes_no_then_uses_them() {
    // Arrange
    let mut console = ConsoleIo::new(
        Cursor::new(b"oui\ny\n".to_vec()),
        Vec::new(),
        vec!["oui".to_string()],
        TraceFlags::default(),
    );

    // Act / Assert
    assert!(console.ask_yes_no("Est-ce un chat?").unwrap());
    assert!(!console.ask_yes_no("Est-ce un chat?").unwrap());
}

#[test]
fn given_out_of_range_and_non_numeric_selection_when_selecting_then_reprompts() {
    // Arrange
    let mut console = console("0\nthree\n7\n2\n");

    // Act
    let choice = console.select("Pick one", &["a", "b", "c"]).unwrap();

    // Assert
    assert_eq!(choice, 1);
    let out = written(console);
    assert!(out.contains("Pick one (select a number)"));
    assert!(out.contains("\t3. c"));
    assert_eq!(out.matches("ERROR: input must be between 1 and 3").count(), 2);
    assert_eq!(out.matches("ERROR: invalid input (must be an integer)").count(), 1);
}

#[test]
fn given_banner_when_writing_lines_then_each_line_is_written() {
    // Arrange
    let mut console = console("");

    // Act
    console.write_lines("one\ntwo").unwrap();

    // Assert
    assert_eq!(written(console), "one\ntwo\n");
}
