//! Terminal output formatting with colors, banners and boxed text
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

pub const PROGRAM_TITLE: &str = r"
   _          _                 _     ___
  /_\   _ _  (_) _ __   __ _  | |   / __| _  _  ___  ___ ___
 / _ \ | ' \ | || '  \ / _` | | |  | (_ || || |/ -_)(_-<(_-<
/_/ \_\|_||_||_||_|_|_|\__,_| |_|   \___| \_,_|\___|/__//__/
";

pub const INTRO: &str = "
Think of an animal and I will try to guess it by asking questions.
Answer with 'y' for yes or 'n' for no. When I guess wrong, tell me
the animal and a question that tells it apart, and I will remember it
for next time.
";

pub const GOODBYE: &str = "
~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
      Thanks for playing!
~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
";

/// `msg` centered in a box at least `width` characters wide.
pub fn boxed_centered(msg: &str, width: usize) -> String {
    let msg_len = msg.chars().count();
    let width = width.max(msg_len);
    let left = (width - msg_len) / 2;
    let right = width - msg_len - left;
    let border = format!("+{}+", "-".repeat(width + 2));
    format!(
        "{border}\n| {}{msg}{} |\n{border}",
        " ".repeat(left),
        " ".repeat(right)
    )
}

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_centered() {
        assert_eq!(boxed_centered("odd", 7), "+---------+\n|   odd   |\n+---------+");
    }

    #[test]
    fn test_boxed_centered_grows_for_long_message() {
        let boxed = boxed_centered("a long message", 4);
        assert!(boxed.contains("| a long message |"));
    }
}
