//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Console)
//! but are themselves concrete structs, not traits.

mod database;
mod game;

pub use database::DatabaseService;
pub use game::{GameOutcome, GameService};
