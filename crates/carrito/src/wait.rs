//! Wait mechanisms for synchronization.
//!
//! Every blocking operation in the suite funnels through [`poll_until`]:
//! probe the condition, sleep the polling interval, repeat until the budget
//! elapses. Timeouts surface as [`CarritoError::Timeout`] carrying the
//! budget and a description of the awaited condition.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::result::{CarritoError, CarritoResult};

/// Default timeout for wait operations (30 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 30_000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Options for wait operations
#[derive(Debug, Clone)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create new wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Get timeout as Duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get poll interval as Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// How a navigation wait decides the page has arrived.
///
/// The login flow waits on `Glob("**/inventory.html")`: any origin, the
/// post-login route, nothing trailing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPattern {
    /// The whole URL, character for character
    Exact(String),
    /// URL starts with the given prefix
    Prefix(String),
    /// URL contains the given substring
    Contains(String),
    /// URL matches a regular expression
    Regex(String),
    /// Shell-style glob where `*` spans any run of characters
    Glob(String),
    /// Every URL qualifies
    Any,
}

impl UrlPattern {
    /// Test a URL against the pattern
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        match self {
            Self::Exact(pattern) => url == pattern,
            Self::Prefix(pattern) => url.starts_with(pattern),
            Self::Contains(pattern) => url.contains(pattern),
            Self::Regex(pattern) => regex::Regex::new(pattern)
                .map(|re| re.is_match(url))
                .unwrap_or(false),
            Self::Glob(pattern) => Self::glob_matches(pattern, url),
            Self::Any => true,
        }
    }

    /// Glob match over a URL. Literal runs must appear in order; a leading
    /// literal is anchored at the start, and the URL must end where the
    /// pattern does unless the pattern ends with `*`.
    fn glob_matches(pattern: &str, url: &str) -> bool {
        let parts: Vec<&str> = pattern.split('*').collect();
        if parts.is_empty() {
            return url.is_empty();
        }

        let mut pos = 0;
        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if let Some(found) = url[pos..].find(part) {
                if i == 0 && found != 0 {
                    return false;
                }
                pos += found + part.len();
            } else {
                return false;
            }
        }

        pattern.ends_with('*') || pos == url.len()
    }
}

impl std::fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(p) => write!(f, "URL == {p}"),
            Self::Prefix(p) => write!(f, "URL starting with {p}"),
            Self::Contains(p) => write!(f, "URL containing {p}"),
            Self::Regex(p) => write!(f, "URL matching /{p}/"),
            Self::Glob(p) => write!(f, "URL matching {p}"),
            Self::Any => write!(f, "any URL"),
        }
    }
}

/// Poll an async probe until it reports true or the budget elapses.
///
/// # Errors
///
/// Propagates probe errors immediately; returns [`CarritoError::Timeout`]
/// naming `waiting_for` when the budget elapses first.
pub async fn poll_until<F, Fut>(
    mut probe: F,
    waiting_for: &str,
    options: &WaitOptions,
) -> CarritoResult<Duration>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = CarritoResult<bool>>,
{
    let start = Instant::now();
    loop {
        if probe().await? {
            return Ok(start.elapsed());
        }
        if start.elapsed() >= options.timeout() {
            return Err(CarritoError::Timeout {
                ms: options.timeout_ms,
                waiting_for: waiting_for.to_string(),
            });
        }
        tokio::time::sleep(options.poll_interval()).await;
    }
}
