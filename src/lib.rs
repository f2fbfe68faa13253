//! Animal guessing game backed by a self-extending yes/no decision tree.
//!
//! The tree (`domain`) is walked and extended by the game service
//! (`application`), persisted as a flat token file, and driven by an
//! interactive menu (`cli`).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{AnimalNode, AnimalTree};
