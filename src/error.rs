//! Error types for Pharma Desk
//!
//! Table operations never fail. These cover the fallible edges: settings
//! files, JSON fixtures and form input.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Page size outside the supported set
    #[snafu(display("Unsupported page size {size}, expected one of 5, 10, 20, 50, 100"))]
    InvalidPageSize { size: usize },

    /// Required form field left blank
    #[snafu(display("Missing field: {field}"))]
    MissingField { field: &'static str },

    /// Reading or writing a settings or fixture file
    #[snafu(context(false), display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// Malformed JSON fixture
    #[snafu(context(false), display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// Malformed settings file
    #[snafu(context(false), display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    #[snafu(context(false), display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
