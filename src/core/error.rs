use std::fmt;

/// Comprehensive error types for urlive operations
#[derive(Debug)]
pub enum UrliveError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Probe engine error
    Probe(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// File not found error
    FileNotFound(String),
}

impl fmt::Display for UrliveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrliveError::Io(err) => write!(f, "IO error: {err}"),
            UrliveError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrliveError::Probe(msg) => write!(f, "Probe error: {msg}"),
            UrliveError::Http(err) => write!(f, "HTTP error: {err}"),
            UrliveError::Json(err) => write!(f, "JSON error: {err}"),
            UrliveError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UrliveError::FileNotFound(path) => write!(f, "File not found: {path}"),
        }
    }
}

impl std::error::Error for UrliveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrliveError::Io(err) => Some(err),
            UrliveError::Http(err) => Some(err),
            UrliveError::Json(err) => Some(err),
            UrliveError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrliveError {
    fn from(err: std::io::Error) -> Self {
        UrliveError::Io(err)
    }
}

impl From<reqwest::Error> for UrliveError {
    fn from(err: reqwest::Error) -> Self {
        UrliveError::Http(err)
    }
}

impl From<serde_json::Error> for UrliveError {
    fn from(err: serde_json::Error) -> Self {
        UrliveError::Json(err)
    }
}

impl From<toml::de::Error> for UrliveError {
    fn from(err: toml::de::Error) -> Self {
        UrliveError::TomlParsing(err)
    }
}

/// Type alias for Results using UrliveError
pub type Result<T> = std::result::Result<T, UrliveError>;
