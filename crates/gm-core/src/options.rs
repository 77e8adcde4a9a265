//! Game options and configuration file loading
//!
//! The options file uses rc-style lines:
//!
//! ```text
//! # comment
//! OPTIONS=difficulty:hard,light
//! OPTIONS=!confirm_exit,seed:42
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::difficulty::Difficulty;

/// Name of the options file looked up in the home directory.
pub const OPTIONS_FILE_NAME: &str = ".guessmasterrc";

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Difficulty preselected at launch
    pub difficulty: Difficulty,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
    /// Force the light terminal theme instead of auto-detecting
    pub light: bool,
    /// Ask before quitting while a round is in progress
    pub confirm_exit: bool,
    /// Show the "(Range 1-N)" hint in the status line
    pub show_range: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
            light: false,
            confirm_exit: true,
            show_range: true,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}

impl GameOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::IoError(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Load the default options file if there is one, defaults otherwise.
    pub fn load_default() -> Result<Self, OptionsError> {
        match default_options_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    let opt = opt.trim();
                    if !opt.is_empty() {
                        options.parse_option(opt)?;
                    }
                }
            }
        }

        Ok(options)
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':').or_else(|| opt.split_once('=')) {
            return self.set_option(key.trim(), Some(value.trim()));
        }

        let (negated, opt_name) = match opt.strip_prefix('!') {
            Some(name) => (true, name),
            None => (false, opt),
        };

        match opt_name {
            "difficulty" | "seed" => self.set_option(opt_name, None),
            _ => self.set_bool_option(opt_name, !negated),
        }
    }

    /// Set a boolean option
    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "light" => self.light = value,
            "confirm_exit" => self.confirm_exit = value,
            "show_range" => self.show_range = value,
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Set an option with a value
    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionsError> {
        let value = value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| OptionsError::MissingValue(name.to_string()))?;
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "difficulty" => {
                self.difficulty = Difficulty::from_str(value).map_err(|_| invalid())?;
            }
            "seed" => self.seed = Some(value.parse().map_err(|_| invalid())?),
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Convert options to config file format
    pub fn to_config_string(&self) -> String {
        let flag = |on: bool, name: &str| {
            if on {
                format!("OPTIONS={}", name)
            } else {
                format!("OPTIONS=!{}", name)
            }
        };

        let mut lines = vec![
            "# GuessMaster configuration file".to_string(),
            String::new(),
            format!("OPTIONS=difficulty:{}", self.difficulty),
        ];
        if let Some(seed) = self.seed {
            lines.push(format!("OPTIONS=seed:{}", seed));
        }
        lines.push(flag(self.light, "light"));
        lines.push(flag(self.confirm_exit, "confirm_exit"));
        lines.push(flag(self.show_range, "show_range"));

        lines.join("\n")
    }
}

/// Path of the options file in the user's home directory.
pub fn default_options_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(OPTIONS_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = GameOptions::default();
        assert_eq!(opts.difficulty, Difficulty::Easy);
        assert!(opts.confirm_exit);
        assert!(opts.show_range);
        assert!(!opts.light);
        assert_eq!(opts.seed, None);
    }

    #[test]
    fn test_parse_bool_option() {
        let config = "OPTIONS=light,!confirm_exit";
        let opts = GameOptions::parse_config(config).unwrap();
        assert!(opts.light);
        assert!(!opts.confirm_exit);
        assert!(opts.show_range);
    }

    #[test]
    fn test_parse_value_option() {
        let config = "# pick hard\nOPTIONS=difficulty:Hard, seed=42\n\n";
        let opts = GameOptions::parse_config(config).unwrap();
        assert_eq!(opts.difficulty, Difficulty::Hard);
        assert_eq!(opts.seed, Some(42));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            GameOptions::parse_config("OPTIONS=sound"),
            Err(OptionsError::UnknownOption("sound".to_string()))
        );
        assert_eq!(
            GameOptions::parse_config("OPTIONS=difficulty:insane"),
            Err(OptionsError::InvalidValue(
                "difficulty".to_string(),
                "insane".to_string()
            ))
        );
        assert_eq!(
            GameOptions::parse_config("OPTIONS=seed"),
            Err(OptionsError::MissingValue("seed".to_string()))
        );
        assert_eq!(
            GameOptions::parse_config("OPTIONS=seed:"),
            Err(OptionsError::MissingValue("seed".to_string()))
        );
    }

    #[test]
    fn test_roundtrip() {
        let opts = GameOptions {
            difficulty: Difficulty::Medium,
            seed: Some(7),
            light: true,
            confirm_exit: false,
            show_range: true,
        };

        let config_str = opts.to_config_string();
        let parsed = GameOptions::parse_config(&config_str).unwrap();

        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameOptions::load_from_file(Path::new("/definitely/not/here/.guessmasterrc"))
            .unwrap_err();
        assert!(matches!(err, OptionsError::IoError(_)));
    }
}
