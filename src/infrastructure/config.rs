//! Configuration management
//!
//! ```toml
//! [tags]
//! start = "t"
//! due = "due"
//!
//! [implied]
//! # X implies -> A B C ...
//! "+pygolang" = "+work +python +go"
//! "@jp" = "+work"
//! ```

use crate::domain::dates::DateTagNames;
use crate::domain::implied::ImplicationTable;
use crate::error::{Result, TodoTagsError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the current directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "todotags.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub tags: DateTagNames,
    /// Tag identifier -> whitespace-separated implied identifiers
    pub implied: BTreeMap<String, String>,
}

impl Config {
    /// Parse config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from an explicit file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TodoTagsError::ConfigNotFound(path.to_path_buf())
            } else {
                TodoTagsError::Io(e)
            }
        })?;

        let config = Self::from_toml_str(&contents).map_err(|e| match e {
            TodoTagsError::TomlDeserialize(e) => TodoTagsError::Config(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            )),
            other => other,
        })?;
        tracing::debug!(path = %path.display(), implied = config.implied.len(), "loaded config");
        Ok(config)
    }

    /// Load config from `path` if given, else `todotags.toml` in `dir`
    ///
    /// A missing default file is not an error: the default config is used.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        let default_path: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        match Self::load_from_path(&default_path) {
            Err(TodoTagsError::ConfigNotFound(_)) => {
                tracing::debug!(path = %default_path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Names of the start and due date tags
    pub fn date_tags(&self) -> &DateTagNames {
        &self.tags
    }

    /// Build the implication table from the `[implied]` section
    pub fn implication_table(&self) -> ImplicationTable {
        self.implied
            .iter()
            .map(|(key, value)| (key.as_str(), value.split_whitespace()))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        for (role, name) in [("start", &self.tags.start), ("due", &self.tags.due)] {
            if name.is_empty() || name.contains(char::is_whitespace) || name.contains(':') {
                return Err(TodoTagsError::Config(format!(
                    "Invalid {} tag name: '{}'",
                    role, name
                )));
            }
        }
        if self.tags.start == self.tags.due {
            return Err(TodoTagsError::Config(format!(
                "Start and due tags must differ (both are '{}')",
                self.tags.start
            )));
        }
        Ok(())
    }
}
