//! Configuration loading
//!
//! Reads `AppConfig` from a TOML file. Missing keys keep their defaults;
//! the result is validated before it is handed to the renderer.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use gallows_core::{AppConfig, ConfigError};

/// Configuration loading errors
#[derive(Debug)]
pub enum LoadError {
    /// File could not be read
    Io(io::Error),
    /// TOML parsing failed
    TomlParse(toml::de::Error),
    /// Values parsed but are not usable
    Invalid(ConfigError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "cannot read config: {}", e),
            LoadError::TomlParse(e) => write!(f, "cannot parse config: {}", e),
            LoadError::Invalid(e) => write!(f, "invalid config: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(e: toml::de::Error) -> Self {
        LoadError::TomlParse(e)
    }
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Invalid(e)
    }
}

/// Parse and validate TOML text
pub fn parse_config(text: &str) -> Result<AppConfig, LoadError> {
    let config: AppConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file, or defaults when no path is given
pub fn load(path: Option<&Path>) -> Result<AppConfig, LoadError> {
    let Some(path) = path else {
        eprintln!("no config given, using defaults");
        return Ok(AppConfig::default());
    };

    eprintln!("loading configuration from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"
            [display]
            target_width = 640
            foreground = [255, 255, 255]
            background = [0, 0, 0]

            [game]
            max_wrong_guesses = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.display.target_width, 640);
        assert_eq!(config.display.canvas_width, 524);
        assert_eq!(config.display.foreground, [255, 255, 255]);
        assert_eq!(config.game.max_wrong_guesses, 4);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = parse_config("[game]\nmax_wrong_guesses = 9\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(ConfigError::InvalidGuessLimit(9))
        ));

        let err = parse_config("[display]\ntarget_width = 10\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(ConfigError::TargetSmallerThanCanvas)
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = parse_config("[display\n").unwrap_err();
        assert!(matches!(err, LoadError::TomlParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nmargin = 8").unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.display.margin, 8);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Some(Path::new("/nonexistent/gallows.toml"))).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_sample_config_is_valid() {
        let sample = include_str!("../gallows.toml");
        assert_eq!(parse_config(sample).unwrap(), AppConfig::default());
    }
}
