//! Error types for the `html_sanitizer` crate.
//!
//! Sanitizing itself is total over any input string and never fails; errors
//! only arise when deriving request context from a source URL.

/// All errors that can occur while assembling sanitizer context.
#[derive(Debug, thiserror::Error)]
pub enum SanitizerError {
    /// The source URL could not be parsed.
    #[error("Invalid source url: {0}")]
    InvalidSourceUrl(#[from] url::ParseError),

    /// The source URL carries no host to resolve relative links against.
    #[error("Source url has no host: {0}")]
    MissingHost(String),
}

/// A type alias for `Result<T, SanitizerError>`.
pub type Result<T> = std::result::Result<T, SanitizerError>;
