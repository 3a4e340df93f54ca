//! Centralized error types for Emblem.
//!
//! Uses `thiserror` for ergonomic error definitions. Role resolution itself
//! never fails; these cover loading, parsing and validating catalogs.

/// Failure to parse a color specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color string is empty")]
    Empty,

    #[error("invalid hex color '{input}': expected 1, 2, 3 or 6 hex digits")]
    InvalidLength { input: String },

    #[error("invalid hex digit '{digit}' in color '{input}'")]
    InvalidDigit { input: String, digit: char },

    #[error("multi-color spec '{input}' needs at least two colors")]
    TooFewColors { input: String },

    #[error("color spec '{input}' mixes '|' and '>' separators")]
    MixedSeparators { input: String },
}

/// Core error type used across Emblem crates.
#[derive(Debug, thiserror::Error)]
pub enum EmblemError {
    // === Catalog I/O ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {extension}")]
    UnsupportedFormat { extension: String },

    // === Configuration ===
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // === Validation ===
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Invalid catalog: {count} issue(s) found")]
    InvalidCatalog { count: usize },
}

impl EmblemError {
    /// Error code string for programmatic handling (exit codes, log fields).
    pub fn error_code(&self) -> &str {
        match self {
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) | Self::Toml(_) => "PARSE_ERROR",
            Self::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::InvalidCatalog { .. } => "INVALID_CATALOG",
        }
    }
}

/// Convenience type alias for Results using EmblemError.
pub type EmblemResult<T> = Result<T, EmblemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        let err = EmblemError::UnsupportedFormat {
            extension: "yaml".into(),
        };
        assert_eq!(err.error_code(), "UNSUPPORTED_FORMAT");
        assert_eq!(err.to_string(), "Unsupported catalog format: yaml");

        let err = EmblemError::InvalidCatalog { count: 2 };
        assert_eq!(err.error_code(), "INVALID_CATALOG");
    }

    #[test]
    fn color_error_messages_name_the_input() {
        let err = ColorParseError::InvalidDigit {
            input: "#zz0000".into(),
            digit: 'z',
        };
        assert_eq!(err.to_string(), "invalid hex digit 'z' in color '#zz0000'");
    }
}
