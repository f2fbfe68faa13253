//! I/O boundary traits for testability
//!
//! These traits abstract file and console operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::domain::TraceFlags;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

/// Line-oriented interactive console.
///
/// Implementors provide raw line reading and writing; prompting,
/// validation and re-prompting are shared.
pub trait Console {
    /// Show `prompt` and read one raw line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write one line of output.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Lowercase substrings that mark an answer as "yes".
    fn affirmative_markers(&self) -> &[String];

    /// Write a multi-line block such as a banner.
    fn write_lines(&mut self, text: &str) -> io::Result<()> {
        for line in text.lines() {
            self.write_line(line)?;
        }
        Ok(())
    }

    fn write_error(&mut self, msg: &str) -> io::Result<()> {
        self.write_line(&format!("ERROR: {msg}"))
    }

    /// Non-empty trimmed line; re-prompts on empty input.
    fn ask_line(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for an answer",
                ));
            };
            let answer = line.trim();
            if answer.is_empty() {
                self.write_error("input is empty")?;
                continue;
            }
            return Ok(answer.to_string());
        }
    }

    /// True iff the answer contains an affirmative marker, ignoring case.
    fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.ask_line(&format!("{prompt} (y/n)"))?;
        Ok(is_affirmative(&answer, self.affirmative_markers()))
    }

    /// Numbered menu selection, returns the 0-based index of the option.
    fn select(&mut self, prompt: &str, options: &[&str]) -> io::Result<usize> {
        self.write_line(&format!("{prompt} (select a number)"))?;
        for (i, option) in options.iter().enumerate() {
            self.write_line(&format!("\t{}. {}", i + 1, option))?;
        }
        loop {
            let answer = self.ask_line("Enter your selection")?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                Ok(_) => self.write_error(&format!(
                    "input must be between 1 and {}",
                    options.len()
                ))?,
                Err(_) => self.write_error("invalid input (must be an integer)")?,
            }
        }
    }
}

/// Case-insensitive substring match against the affirmative markers.
pub fn is_affirmative(answer: &str, markers: &[String]) -> bool {
    let answer = answer.trim().to_lowercase();
    markers
        .iter()
        .any(|marker| answer.contains(marker.to_lowercase().as_str()))
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

/// Console over any buffered reader and writer (stdin/stdout in production).
pub struct ConsoleIo<R, W> {
    reader: R,
    writer: W,
    affirmative: Vec<String>,
    trace: TraceFlags,
}

impl ConsoleIo<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(affirmative: Vec<String>, trace: TraceFlags) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), affirmative, trace)
    }
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(reader: R, writer: W, affirmative: Vec<String>, trace: TraceFlags) -> Self {
        Self {
            reader,
            writer,
            affirmative,
            trace,
        }
    }

    /// Consume the console and hand back the writer (captured output in tests).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for ConsoleIo<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt} : ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(&['\r', '\n'][..]).to_string();
        if self.trace.user_input {
            debug!("user input = {:?}", line);
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    fn affirmative_markers(&self) -> &[String] {
        &self.affirmative
    }
}
