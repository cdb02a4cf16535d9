//! Result and error types for Carrito.

use thiserror::Error;

/// Result type for Carrito operations
pub type CarritoResult<T> = Result<T, CarritoError>;

/// Errors that can occur while driving the suite
#[derive(Debug, Error)]
pub enum CarritoError {
    /// Required environment variables are missing
    #[error("missing environment variables: {}", missing.join(", "))]
    Config {
        /// Names of the missing variables
        missing: Vec<String>,
    },

    /// Browser launch error
    #[error("failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page-level error from the browser backend
    #[error("page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// A blocking wait did not reach its condition in time
    #[error("timed out after {ms}ms waiting for {waiting_for}")]
    Timeout {
        /// Timeout budget in milliseconds
        ms: u64,
        /// Description of the awaited condition
        waiting_for: String,
    },

    /// No element matched the selector
    #[error("no element matched selector {selector}")]
    ElementNotFound {
        /// Selector description
        selector: String,
    },

    /// More than one element matched an exact-scoped selector
    #[error("selector {selector} matched {matches} elements, expected exactly one")]
    AmbiguousSelector {
        /// Selector description
        selector: String,
        /// Number of matching elements
        matches: usize,
    },

    /// Cart badge text is not a number
    #[error("cart badge text {text:?} is not a number")]
    BadgeParse {
        /// The badge text that failed to parse
        text: String,
    },

    /// Assertion failed
    #[error("assertion failed: {message}")]
    Assertion {
        /// Expected vs actual description
        message: String,
    },

    /// Screenshot error
    #[error("screenshot failed: {message}")]
    Screenshot {
        /// Error message
        message: String,
    },

    /// Session state capture or restore error
    #[error("session state error: {message}")]
    Session {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
