// This file is part of xkcdpwd.
//
// Copyright (c) 2025  The xkcdpwd Developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Settings from the config file merged with command-line overrides.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use xkcdpwd::Capitalization;

pub const APP_NAME: &str = "xkcdpwd";

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_WORDS: usize = 4;
pub const DEFAULT_PASSPHRASES: usize = 10;
pub const DEFAULT_SEPARATOR: &str = " ";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid separator \"{0}\": use nothing or a single space or punctuation character")]
    InvalidSeparator(String),
}

/// Config file contents. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub language: Option<String>,
    pub words: Option<usize>,
    pub passphrases: Option<usize>,
    pub capitalize: Option<String>,
    pub separator: Option<String>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
}

impl FileConfig {
    pub fn from_toml(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// Overlays `overrides` on `self`; values set in `overrides` win.
    pub fn merge(self, overrides: FileConfig) -> FileConfig {
        FileConfig {
            language: overrides.language.or(self.language),
            words: overrides.words.or(self.words),
            passphrases: overrides.passphrases.or(self.passphrases),
            capitalize: overrides.capitalize.or(self.capitalize),
            separator: overrides.separator.or(self.separator),
            min_length: overrides.min_length.or(self.min_length),
            max_length: overrides.max_length.or(self.max_length),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub language: String,
    pub words: usize,
    pub passphrases: usize,
    pub capitalization: Capitalization,
    pub separator: String,
    pub min_length: i64,
    pub max_length: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            words: DEFAULT_WORDS,
            passphrases: DEFAULT_PASSPHRASES,
            capitalization: Capitalization::None,
            separator: DEFAULT_SEPARATOR.to_string(),
            min_length: 0,
            max_length: 0,
        }
    }
}

impl TryFrom<FileConfig> for Settings {
    type Error = ConfigError;

    fn try_from(config: FileConfig) -> Result<Self, Self::Error> {
        let defaults = Settings::default();

        let separator = config.separator.unwrap_or(defaults.separator);
        if !check_separator(&separator) {
            return Err(ConfigError::InvalidSeparator(separator));
        }

        Ok(Self {
            language: config.language.unwrap_or(defaults.language),
            words: config.words.unwrap_or(defaults.words),
            passphrases: config.passphrases.unwrap_or(defaults.passphrases),
            capitalization: config
                .capitalize
                .as_deref()
                .map_or(defaults.capitalization, Capitalization::from_setting),
            separator,
            min_length: config.min_length.unwrap_or(defaults.min_length),
            max_length: config.max_length.unwrap_or(defaults.max_length),
        })
    }
}

/// A separator is either empty or one ASCII space or punctuation character.
pub fn check_separator(separator: &str) -> bool {
    let mut chars = separator.chars();
    match (chars.next(), chars.next()) {
        (None, _) => true,
        (Some(c), None) => c == ' ' || c.is_ascii_punctuation(),
        _ => false,
    }
}

/// `<config dir>/xkcdpwd/xkcdpwd.toml` for the current user.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(format!("{APP_NAME}.toml")))
}

/// Loads the config file at `path`, or the default one.
///
/// An explicit path must exist; a missing default file yields an empty config.
pub fn load(path: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => match default_config_path() {
            Some(path) => (path, false),
            None => {
                debug!("no user config directory");
                return Ok(FileConfig::default());
            }
        },
    };

    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(err) if !explicit && err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file");
            return Ok(FileConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    info!(path = %path.display(), "using config file");
    FileConfig::from_toml(&data).map_err(|source| ConfigError::Parse { path, source })
}
