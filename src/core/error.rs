use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Failures from the underlying transport are passed through unmodified: the
/// client layer adds no retries, no context, and never swallows an error.
#[derive(Debug, Error)]
pub enum HawkizError {
    /// An error occurred during an HTTP request (connect failure, timeout,
    /// body read failure). Carries the transport's error untouched.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided or constructed URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned a non-success HTTP status code. The response body
    /// is not inspected.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not valid JSON or did not match the declared
    /// response shape.
    #[error("Response body decode error: {0}")]
    Json(#[from] serde_json::Error),
}
