//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/nodetree/nodetree.toml`
//! 3. Environment variables: `NODETREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;

/// Settings for reading and printing outlines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Separator between keys of a path (default: `/`)
    pub key_separator: String,
    /// Separator between values of an entry (default: `,`)
    pub value_separator: String,
    /// Print values next to keys when rendering a tree
    pub show_values: bool,
    /// Text printed for an empty tree
    pub empty_label: String,
    /// Deepest tree `show` renders; deeper trees are rejected
    pub max_render_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_separator: "/".into(),
            value_separator: ",".into(),
            show_values: true,
            empty_label: "(empty)".into(),
            max_render_depth: 256,
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub key_separator: Option<String>,
    pub value_separator: Option<String>,
    pub show_values: Option<bool>,
    pub empty_label: Option<String>,
    pub max_render_depth: Option<usize>,
}

/// Get the XDG config directory for nodetree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nodetree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("nodetree.toml"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Load a TOML file into RawSettings for merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            key_separator: overlay
                .key_separator
                .clone()
                .unwrap_or_else(|| self.key_separator.clone()),
            value_separator: overlay
                .value_separator
                .clone()
                .unwrap_or_else(|| self.value_separator.clone()),
            show_values: overlay.show_values.unwrap_or(self.show_values),
            empty_label: overlay
                .empty_label
                .clone()
                .unwrap_or_else(|| self.empty_label.clone()),
            max_render_depth: overlay.max_render_depth.unwrap_or(self.max_render_depth),
        }
    }

    /// Load settings from defaults, the global config file and the environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with `config_path` standing in for the global config file.
    ///
    /// A missing file is skipped; an unreadable or malformed one is an error.
    #[instrument(level = "debug")]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                debug!("loading config file");
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply NODETREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NODETREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("key_separator") {
            settings.key_separator = val;
        }
        if let Ok(val) = config.get_string("value_separator") {
            settings.value_separator = val;
        }
        if let Ok(val) = config.get_bool("show_values") {
            settings.show_values = val;
        }
        if let Ok(val) = config.get_string("empty_label") {
            settings.empty_label = val;
        }
        if let Ok(val) = config.get::<usize>("max_render_depth") {
            settings.max_render_depth = val;
        }

        Ok(settings)
    }

    /// Separators must be non-empty and distinct from each other and from `=`;
    /// the render depth must be positive.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let invalid = |message: String| Err(ApplicationError::Config { message });
        if self.key_separator.is_empty() || self.value_separator.is_empty() {
            return invalid("separators must not be empty".into());
        }
        if self.key_separator == self.value_separator {
            return invalid(format!(
                "key and value separator are both '{}'",
                self.key_separator
            ));
        }
        if self.key_separator.contains('=') || self.value_separator.contains('=') {
            return invalid("'=' is reserved between path and values".into());
        }
        if self.max_render_depth == 0 {
            return invalid("max_render_depth must be at least 1".into());
        }
        Ok(())
    }

    /// Serialize to TOML for display.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}
