//! Tree database service
//!
//! Loads and saves `AnimalTree`s in the token file format.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{read_token_lines, AnimalTree, TokenBuilder, TraceFlags};
use crate::infrastructure::traits::FileSystem;

/// Service for reading and writing tree databases.
pub struct DatabaseService {
    fs: Arc<dyn FileSystem>,
    trace: TraceFlags,
}

impl DatabaseService {
    /// Create a new database service.
    pub fn new(fs: Arc<dyn FileSystem>, trace: TraceFlags) -> Self {
        Self { fs, trace }
    }

    /// True if `path` names an existing regular file.
    pub fn is_database_file(&self, path: &Path) -> bool {
        self.fs.is_file(path)
    }

    /// Load a tree from a token file.
    ///
    /// A malformed file yields `InvalidDatabase` and no tree at all.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<AnimalTree> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::DatabaseNotFound(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read database", path)?;

        let tokens = read_token_lines(&content, &self.trace);
        debug!("load: {} tokens in {}", tokens.len(), path.display());

        TokenBuilder::new(self.trace)
            .build(&tokens)
            .map_err(|source| ApplicationError::InvalidDatabase {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Save a tree as a token file, creating parent directories.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn save(&self, path: &Path, tree: &AnimalTree) -> ApplicationResult<()> {
        self.fs
            .ensure_parent(path)
            .with_path_context("create parent directory", path)?;
        self.fs
            .write(path, &tree.to_token_file())
            .with_path_context("write database", path)?;
        debug!("save: {} nodes to {}", tree.node_count(), path.display());
        Ok(())
    }
}
