//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

/// Animal guessing game that learns new animals from its mistakes
#[derive(Parser, Debug)]
#[command(name = "animal-guess")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity of log output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Tree database to load at startup
    #[arg(short = 'f', long, env = "ANIMAL_GUESS_DATABASE", value_hint = ValueHint::FilePath)]
    pub database: Option<PathBuf>,

    /// Additional config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a tree database without playing
    Print {
        /// Tree database file
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,

        /// Output style
        #[arg(short, long, value_enum, default_value_t = PrintStyle::Indent)]
        style: PrintStyle,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show global config file location
    Path,
    /// Print a commented config template
    Template,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintStyle {
    /// Indented Q:/G: lines
    Indent,
    /// Box-drawing tree
    Tree,
    /// Token file format
    Tokens,
}
