//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::output::Field;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Project filter applied when `--project` is not given.
    pub project: Option<String>,
    /// Default output columns.
    pub fields: Vec<Field>,
    /// Whether CSV output starts with a header row.
    pub header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: None,
            fields: Field::ALL.to_vec(),
            header: true,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // HOURS_CSV_PROJECT, HOURS_CSV_HEADER, ...
        figment = figment.merge(Env::prefixed("HOURS_CSV_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory.
///
/// On Linux: `~/.config/hours-csv`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("hours-csv"))
}
