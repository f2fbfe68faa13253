//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{DatabaseService, GameService};
use crate::config::Settings;
use crate::domain::AnimalTree;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    pub game: GameService,
    pub database: DatabaseService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);
        let game = GameService::new(settings.trace);
        let database = DatabaseService::new(Arc::clone(&fs), settings.trace);

        Self {
            settings,
            fs,
            game,
            database,
        }
    }

    /// Fresh single-leaf tree guessing the configured default animal.
    pub fn new_tree(&self) -> AnimalTree {
        AnimalTree::with_default_animal(self.settings.default_animal.as_str())
    }
}
