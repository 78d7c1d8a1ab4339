use std::path::PathBuf;

/// Errors from parsing a `#rrggbb` colour string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("colour '{0}' must start with '#'")]
    MissingHash(String),

    #[error("colour '{0}' is not six hex digits")]
    InvalidHex(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid colour: {0}")]
    Color(#[from] ColorParseError),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_error_display() {
        let err = ColorParseError::InvalidHex("#12".to_string());
        assert_eq!(err.to_string(), "colour '#12' is not six hex digits");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be in 1..=20".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be in 1..=20"
        );
    }

    #[test]
    fn test_color_error_converts_into_config_error() {
        let err: ConfigError = ColorParseError::MissingHash("red".to_string()).into();
        assert_eq!(err.to_string(), "invalid colour: colour 'red' must start with '#'");
    }
}
