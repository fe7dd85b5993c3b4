//! Error types for the order-tracking proxy
//!
//! Every public API returns `Result<T, Error>`. At the HTTP boundary an
//! error is turned into a status code and a short public message; the full
//! error (which may carry upstream detail) only goes to the log.

use thiserror::Error;

/// The main error type
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Inbound Request Errors
    // ============================================================================
    #[error("Method not allowed: {method}")]
    InvalidMethod { method: String },

    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("No matching orders found")]
    NotFound,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Upstream Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid method error
    pub fn invalid_method(method: impl Into<String>) -> Self {
        Self::InvalidMethod {
            method: method.into(),
        }
    }

    /// Create a missing parameter error
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// True for failures talking to the upstream store
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::HttpStatus { .. }
                | Error::JsonParse(_)
                | Error::InvalidUrl(_)
                | Error::Decode { .. }
        )
    }

    /// HTTP status code reported to the inbound caller
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidMethod { .. } => 405,
            Error::MissingParameter { .. } => 400,
            Error::NotFound => 404,
            _ => 500,
        }
    }

    /// Message safe to return to the inbound caller.
    ///
    /// Never includes upstream URLs, bodies or credentials.
    pub fn public_message(&self) -> &'static str {
        match self {
            Error::InvalidMethod { .. } => "Method not allowed",
            Error::MissingParameter { .. } => "Missing query parameter.",
            Error::NotFound => "Order not found.",
            _ => "Server error.",
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
