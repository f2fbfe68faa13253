//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/animal-guess/animal-guess.toml`
//! 3. Local config: file passed with `--config`
//! 4. Environment variables: `ANIMAL_GUESS_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{TraceFlags, DEFAULT_ANIMAL};

/// Unified configuration for animal-guess.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Tree database loaded at startup (optional)
    pub database: Option<PathBuf>,
    /// Animal guessed by a new tree
    pub default_animal: String,
    /// Substrings that make an answer count as "yes"
    pub affirmative: Vec<String>,
    /// Verbose tracing categories
    pub trace: TraceFlags,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: None,
            default_animal: DEFAULT_ANIMAL.to_string(),
            affirmative: vec!["y".to_string()],
            trace: TraceFlags::default(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub database: Option<PathBuf>,
    pub default_animal: Option<String>,
    pub affirmative: Option<Vec<String>>,
    pub trace: Option<TraceFlags>,
}

/// Get the XDG config directory for animal-guess.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "animal-guess").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("animal-guess.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Optional config file layered over the global one; it must exist
    pub fn load(local: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(local) = local {
            if !local.is_file() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", local.display()),
                });
            }
            current = current.merge_with(&load_raw_settings(local)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();
        current.validate()?;

        Ok(current)
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            database: overlay.database.clone().or_else(|| self.database.clone()),
            default_animal: overlay
                .default_animal
                .clone()
                .unwrap_or_else(|| self.default_animal.clone()),
            affirmative: overlay
                .affirmative
                .clone()
                .unwrap_or_else(|| self.affirmative.clone()),
            trace: overlay.trace.unwrap_or(self.trace),
        }
    }

    /// Apply ANIMAL_GUESS_* environment variables as explicit overrides.
    ///
    /// Nested keys use `__`: `ANIMAL_GUESS_TRACE__TOKEN_LINE=true`.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("ANIMAL_GUESS")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("affirmative")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("database") {
            settings.database = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("default_animal") {
            settings.default_animal = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("affirmative") {
            settings.affirmative = val;
        }

        let trace = &mut settings.trace;
        for (key, flag) in [
            ("trace.node_created", &mut trace.node_created),
            ("trace.token_line", &mut trace.token_line),
            ("trace.ignoring_line", &mut trace.ignoring_line),
            ("trace.user_input", &mut trace.user_input),
            ("trace.inspecting_node", &mut trace.inspecting_node),
            ("trace.flipping", &mut trace.flipping),
        ] {
            if let Ok(val) = config.get_bool(key) {
                *flag = val;
            }
        }

        Ok(settings)
    }

    fn expand_paths(&mut self) {
        if let Some(database) = &self.database {
            let expanded = expand_env_vars(database.to_string_lossy().as_ref());
            self.database = Some(PathBuf::from(expanded));
        }
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.default_animal.trim().is_empty() {
            return Err(ApplicationError::Config {
                message: "default_animal must not be empty".to_string(),
            });
        }
        if self.affirmative.iter().all(|m| m.trim().is_empty()) {
            return Err(ApplicationError::Config {
                message: "affirmative needs at least one non-empty marker".to_string(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# animal-guess configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/animal-guess/animal-guess.toml
#   Local:  file passed with --config
#   Env:    ANIMAL_GUESS_* environment variables (ANIMAL_GUESS_TRACE__FLIPPING=true)

# Tree database loaded at startup
# database = "~/.local/share/animal-guess/animals.txt"

# Animal guessed by a brand new tree
# default_animal = "lizard"

# Answers containing any of these (case-insensitive) count as "yes"
# affirmative = ["y"]

[trace]
# node_created = false
# token_line = false
# ignoring_line = false
# user_input = false
# inspecting_node = false
# flipping = false
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
