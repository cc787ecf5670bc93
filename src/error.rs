/// Error types shared across the application
///
/// Fetch errors are recovered locally by the browser session (logged,
/// loading flag cleared, prior batch kept). Config errors fall back to
/// defaults. Neither is ever fatal.

use thiserror::Error;

/// Failure while fetching or decoding one page of the catalog
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, connection reset...)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status code
    #[error("catalog returned HTTP {0}")]
    Status(u16),

    /// The body was not the JSON shape we expect
    #[error("could not decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure while loading the on-disk or environment configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}
