//! Suite configuration.
//!
//! All configuration comes from the process environment exactly once, at
//! startup, and is carried through the suite as an immutable struct. Missing
//! variables are a fatal condition reported before any browser is launched.

use std::path::PathBuf;

use crate::result::{CarritoError, CarritoResult};

/// Environment variable holding the login username
pub const ENV_USER_NAME: &str = "USER_NAME";

/// Environment variable holding the login password
pub const ENV_USER_PASSWORD: &str = "USER_PASSWORD";

/// Environment variable holding the application base URL
pub const ENV_BASE_URL: &str = "BASE_URL";

/// Route of the post-login inventory page, relative to the base URL
pub const INVENTORY_ROUTE: &str = "inventory.html";

/// Default action timeout (click/fill auto-wait)
pub const DEFAULT_ACTION_TIMEOUT_MS: u64 = 10_000;

/// Default navigation timeout
pub const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 30_000;

/// Default retrying-assertion timeout
pub const DEFAULT_ASSERTION_TIMEOUT_MS: u64 = 5_000;

/// Immutable configuration for one suite run
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Application base URL, e.g. `https://www.saucedemo.com/`
    pub base_url: String,
    /// Login username
    pub username: String,
    /// Login password
    pub password: String,
    /// Auto-wait budget for click/fill/select actions
    pub action_timeout_ms: u64,
    /// Budget for navigation and URL waits
    pub navigation_timeout_ms: u64,
    /// Budget for retrying assertions
    pub assertion_timeout_ms: u64,
    /// Directory holding persisted authentication state artifacts
    pub auth_dir: PathBuf,
    /// Root directory for screenshots and HTML dumps
    pub artifacts_dir: PathBuf,
}

impl SuiteConfig {
    /// Create a config with explicit credentials and default timeouts
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            action_timeout_ms: DEFAULT_ACTION_TIMEOUT_MS,
            navigation_timeout_ms: DEFAULT_NAVIGATION_TIMEOUT_MS,
            assertion_timeout_ms: DEFAULT_ASSERTION_TIMEOUT_MS,
            auth_dir: PathBuf::from("fixtures/auth"),
            artifacts_dir: PathBuf::from("test-results"),
        }
    }

    /// Build the config from `USER_NAME`, `USER_PASSWORD` and `BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`CarritoError::Config`] naming every missing variable.
    pub fn from_env() -> CarritoResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests inject closures instead of mutating
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> CarritoResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut require = |name: &str| {
            let value = lookup(name).filter(|v| !v.is_empty());
            if value.is_none() {
                missing.push(name.to_string());
            }
            value
        };

        let username = require(ENV_USER_NAME);
        let password = require(ENV_USER_PASSWORD);
        let base_url = require(ENV_BASE_URL);

        if !missing.is_empty() {
            return Err(CarritoError::Config { missing });
        }

        Ok(Self::new(
            base_url.unwrap_or_default(),
            username.unwrap_or_default(),
            password.unwrap_or_default(),
        ))
    }

    /// Set the action timeout
    #[must_use]
    pub const fn with_action_timeout(mut self, timeout_ms: u64) -> Self {
        self.action_timeout_ms = timeout_ms;
        self
    }

    /// Set the navigation timeout
    #[must_use]
    pub const fn with_navigation_timeout(mut self, timeout_ms: u64) -> Self {
        self.navigation_timeout_ms = timeout_ms;
        self
    }

    /// Set the assertion timeout
    #[must_use]
    pub const fn with_assertion_timeout(mut self, timeout_ms: u64) -> Self {
        self.assertion_timeout_ms = timeout_ms;
        self
    }

    /// Set the authentication artifact directory
    #[must_use]
    pub fn with_auth_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.auth_dir = dir.into();
        self
    }

    /// Set the artifacts (screenshots, HTML dumps) directory
    #[must_use]
    pub fn with_artifacts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifacts_dir = dir.into();
        self
    }

    /// Join a path onto the base URL. An empty path yields the bare base URL.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.is_empty() {
            return self.base_url.clone();
        }
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Whether a URL points at the application host.
    #[must_use]
    pub fn is_on_host(&self, url: &str) -> bool {
        match Self::host_of(&self.base_url) {
            Some(host) => Self::host_of(url).is_some_and(|h| h == host),
            None => false,
        }
    }

    fn host_of(url: &str) -> Option<&str> {
        let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
        let host = rest.split(['/', '?', '#']).next()?;
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| (*v).to_string())
        }
    }

    mod from_lookup_tests {
        use super::*;

        #[test]
        fn test_all_present() {
            let config = SuiteConfig::from_lookup(env(&[
                ("USER_NAME", "standard_user"),
                ("USER_PASSWORD", "secret_sauce"),
                ("BASE_URL", "https://www.saucedemo.com/"),
            ]))
            .unwrap();
            assert_eq!(config.username, "standard_user");
            assert_eq!(config.password, "secret_sauce");
            assert_eq!(config.base_url, "https://www.saucedemo.com/");
        }

        #[test]
        fn test_missing_variables_are_all_reported() {
            let err = SuiteConfig::from_lookup(env(&[("USER_NAME", "standard_user")]))
                .expect_err("should fail");
            match err {
                CarritoError::Config { missing } => {
                    assert_eq!(missing, vec!["USER_PASSWORD", "BASE_URL"]);
                }
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        fn test_empty_value_counts_as_missing() {
            let err = SuiteConfig::from_lookup(env(&[
                ("USER_NAME", ""),
                ("USER_PASSWORD", "x"),
                ("BASE_URL", "y"),
            ]))
            .expect_err("should fail");
            match err {
                CarritoError::Config { missing } => assert_eq!(missing, vec!["USER_NAME"]),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    mod url_tests {
        use super::*;

        fn config() -> SuiteConfig {
            SuiteConfig::new("https://www.saucedemo.com/", "u", "p")
        }

        #[test]
        fn test_empty_path_is_bare_base_url() {
            assert_eq!(config().url_for(""), "https://www.saucedemo.com/");
        }

        #[test]
        fn test_join_normalizes_slashes() {
            assert_eq!(
                config().url_for("inventory.html"),
                "https://www.saucedemo.com/inventory.html"
            );
            assert_eq!(
                config().url_for("/inventory.html"),
                "https://www.saucedemo.com/inventory.html"
            );
            let no_slash = SuiteConfig::new("https://www.saucedemo.com", "u", "p");
            assert_eq!(
                no_slash.url_for("inventory.html"),
                "https://www.saucedemo.com/inventory.html"
            );
        }

        #[test]
        fn test_is_on_host() {
            let config = config();
            assert!(config.is_on_host("https://www.saucedemo.com/inventory.html"));
            assert!(config.is_on_host("http://www.saucedemo.com"));
            assert!(!config.is_on_host("https://example.com/"));
            assert!(!config.is_on_host("about:blank"));
        }
    }

    mod builder_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = SuiteConfig::new("https://x/", "u", "p");
            assert_eq!(config.action_timeout_ms, DEFAULT_ACTION_TIMEOUT_MS);
            assert_eq!(config.navigation_timeout_ms, DEFAULT_NAVIGATION_TIMEOUT_MS);
            assert_eq!(config.assertion_timeout_ms, DEFAULT_ASSERTION_TIMEOUT_MS);
            assert_eq!(config.auth_dir, PathBuf::from("fixtures/auth"));
        }

        #[test]
        fn test_chained_overrides() {
            let config = SuiteConfig::new("https://x/", "u", "p")
                .with_action_timeout(500)
                .with_navigation_timeout(1_000)
                .with_assertion_timeout(250)
                .with_auth_dir("/tmp/auth")
                .with_artifacts_dir("/tmp/out");
            assert_eq!(config.action_timeout_ms, 500);
            assert_eq!(config.navigation_timeout_ms, 1_000);
            assert_eq!(config.assertion_timeout_ms, 250);
            assert_eq!(config.auth_dir, PathBuf::from("/tmp/auth"));
            assert_eq!(config.artifacts_dir, PathBuf::from("/tmp/out"));
        }
    }
}
