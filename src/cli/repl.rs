//! Interactive menu loop
//!
//! Offers play, print, save, load, new tree and exit until the user quits
//! or the input ends.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::application::services::GameOutcome;
use crate::cli::error::CliResult;
use crate::cli::output::{boxed_centered, GOODBYE, INTRO, PROGRAM_TITLE};
use crate::domain::AnimalTree;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::Console;
use crate::infrastructure::InfraError;

pub const MENU: [&str; 6] = [
    "Play the game",
    "Print the tree",
    "Save the tree",
    "Load a tree from a file",
    "Start a new tree",
    "Exit",
];

const BOX_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu session owning the tree being played.
pub struct Repl<'a> {
    services: &'a ServiceContainer,
    tree: AnimalTree,
}

impl<'a> Repl<'a> {
    pub fn new(services: &'a ServiceContainer) -> Self {
        Self::with_tree(services, services.new_tree())
    }

    pub fn with_tree(services: &'a ServiceContainer, tree: AnimalTree) -> Self {
        Self { services, tree }
    }

    pub fn tree(&self) -> &AnimalTree {
        &self.tree
    }

    /// Replace the tree with the database at `path`. On failure the error is
    /// reported on the console and the current tree is kept.
    pub fn preload(&mut self, path: &Path, console: &mut dyn Console) -> CliResult<()> {
        match self.services.database.load(path) {
            Ok(tree) => {
                self.tree = tree;
                console
                    .write_line(&format!("Loaded tree from {}", path.display()))
                    .map_err(|e| InfraError::io("write", e))?;
            }
            Err(e) => {
                warn!("preload failed: {}", e);
                console
                    .write_error(&format!("{e}; starting with a new tree"))
                    .map_err(|e| InfraError::io("write", e))?;
            }
        }
        Ok(())
    }

    /// Run the menu loop until Exit or end of input.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&mut self, console: &mut dyn Console) -> CliResult<()> {
        let mut flow = match self.intro(console) {
            Ok(()) => Flow::Continue,
            Err(e) => console_flow(e)?,
        };
        while flow == Flow::Continue {
            flow = match console.select("What would you like to do?", &MENU) {
                Ok(choice) => {
                    debug!("menu choice: {}", MENU[choice]);
                    self.dispatch(choice, console)?
                }
                Err(e) => console_flow(e)?,
            };
        }
        // output may already be gone at end of input
        console.write_lines(GOODBYE).ok();
        Ok(())
    }

    fn intro(&self, console: &mut dyn Console) -> io::Result<()> {
        console.write_lines(PROGRAM_TITLE)?;
        console.write_lines(INTRO)
    }

    fn dispatch(&mut self, choice: usize, console: &mut dyn Console) -> CliResult<Flow> {
        match choice {
            0 => self.play(console),
            1 => self.print(console).or_else(console_flow),
            2 => self.save(console).or_else(console_flow),
            3 => self.load(console).or_else(console_flow),
            4 => self.new_tree(console).or_else(console_flow),
            _ => Ok(Flow::Quit),
        }
    }

    fn play(&mut self, console: &mut dyn Console) -> CliResult<Flow> {
        let message = match self.services.game.play(&mut self.tree, console) {
            Ok(GameOutcome::GuessedCorrectly { animal }) => {
                format!("I guessed it: a(n) {animal}!")
            }
            Ok(GameOutcome::LearnedNewAnimal { animal, .. }) => {
                format!("Thanks! Now I know a(n) {animal}.")
            }
            Err(e) if e.is_end_of_input() => return Ok(Flow::Quit),
            Err(e) => return Err(e.into()),
        };
        console
            .write_lines(&boxed_centered(&message, BOX_WIDTH))
            .map(|_| Flow::Continue)
            .or_else(console_flow)
    }

    fn print(&self, console: &mut dyn Console) -> io::Result<Flow> {
        for line in self.tree.render() {
            console.write_line(&line)?;
        }
        Ok(Flow::Continue)
    }

    fn save(&self, console: &mut dyn Console) -> io::Result<Flow> {
        let path = PathBuf::from(console.ask_line("Enter the file path to save the tree")?);
        match self.services.database.save(&path, &self.tree) {
            Ok(()) => console.write_line(&format!("Tree saved to {}", path.display()))?,
            Err(e) => console.write_error(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn load(&mut self, console: &mut dyn Console) -> io::Result<Flow> {
        let path = self.ask_existing_path(console)?;
        match self.services.database.load(&path) {
            Ok(tree) => {
                self.tree = tree;
                console.write_line(&format!(
                    "Loaded {} animals from {}",
                    self.tree.animals().len(),
                    path.display()
                ))?;
            }
            Err(e) => console.write_error(&format!("{e}; keeping the current tree"))?,
        }
        Ok(Flow::Continue)
    }

    fn new_tree(&mut self, console: &mut dyn Console) -> io::Result<Flow> {
        self.tree = self.services.new_tree();
        console.write_line(&format!(
            "Started a new tree guessing a(n) {}",
            self.tree.root().label()
        ))?;
        Ok(Flow::Continue)
    }

    /// Re-prompts until the answer names an existing file.
    fn ask_existing_path(&self, console: &mut dyn Console) -> io::Result<PathBuf> {
        loop {
            let path = PathBuf::from(console.ask_line("Enter the file path of the tree")?);
            if self.services.database.is_database_file(&path) {
                return Ok(path);
            }
            console.write_error(&format!("file not found: {}", path.display()))?;
        }
    }
}

/// End of input ends the session; other console failures are errors.
fn console_flow(e: io::Error) -> CliResult<Flow> {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        debug!("input closed");
        Ok(Flow::Quit)
    } else {
        Err(InfraError::io("console", e).into())
    }
}
