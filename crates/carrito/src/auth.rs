//! Authentication manager.
//!
//! Performs the UI login once, waits for the post-login navigation, and
//! persists the resulting session as a [`StorageState`] artifact so later
//! runs can skip the login form entirely.

use std::path::PathBuf;

use crate::browser::Page;
use crate::config::{SuiteConfig, INVENTORY_ROUTE};
use crate::page::PageDriver;
use crate::pages::LoginPage;
use crate::result::CarritoResult;
use crate::session::{self, StorageState};
use crate::wait::{poll_until, UrlPattern, WaitOptions};

/// Default file name for the persisted session artifact
pub const DEFAULT_AUTH_STATE_FILE: &str = "user.json";

/// Whether the page currently holds an authenticated session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// On a post-login page of the application
    Authenticated,
    /// On the application but not past the login form
    Unauthenticated,
    /// Not on the application at all; nothing can be said
    Unknown,
}

/// Drives login and session persistence for one page
#[derive(Debug, Clone, Copy)]
pub struct AuthManager<'p> {
    page: &'p Page,
    config: &'p SuiteConfig,
}

impl<'p> AuthManager<'p> {
    /// Create a manager over a page
    #[must_use]
    pub const fn new(page: &'p Page, config: &'p SuiteConfig) -> Self {
        Self { page, config }
    }

    /// Path of the session artifact, `file_name` defaulting to `user.json`
    #[must_use]
    pub fn auth_state_path(&self, file_name: Option<&str>) -> PathBuf {
        self.config
            .auth_dir
            .join(file_name.unwrap_or(DEFAULT_AUTH_STATE_FILE))
    }

    /// Log in through the UI and wait until the inventory page is reached.
    ///
    /// # Errors
    ///
    /// Times out under the navigation budget when the login does not land on
    /// the inventory route, wrong credentials included.
    pub async fn authenticate_as_user(&self, username: &str, password: &str) -> CarritoResult<()> {
        let driver = PageDriver::new(self.page, self.config);
        let login = LoginPage::new(driver);
        login.goto().await?;
        login.login(username, password).await?;

        let pattern = UrlPattern::Glob(format!("**/{INVENTORY_ROUTE}"));
        let page = self.page;
        let pattern_ref = &pattern;
        poll_until(
            || async move { Ok(pattern_ref.matches(&page.url().await?)) },
            &pattern.to_string(),
            &WaitOptions::new().with_timeout(self.config.navigation_timeout_ms),
        )
        .await?;
        tracing::info!(username, "authenticated");
        Ok(())
    }

    /// Log in with the configured credentials
    pub async fn authenticate(&self) -> CarritoResult<()> {
        self.authenticate_as_user(&self.config.username, &self.config.password)
            .await
    }

    /// Capture the session and write it to the auth artifact.
    ///
    /// Returns the path written. The file is replaced whole.
    pub async fn save_auth_state(&self, file_name: Option<&str>) -> CarritoResult<PathBuf> {
        let state = session::capture(self.page).await?;
        let path = self.auth_state_path(file_name);
        state.save(&path)?;
        tracing::info!(path = %path.display(), cookies = state.cookies.len(), "auth state saved");
        Ok(path)
    }

    /// Load the auth artifact and restore it into the page's context.
    ///
    /// The page should already be on the application origin so storage
    /// entries land where they were captured.
    pub async fn restore_auth_state(&self, file_name: Option<&str>) -> CarritoResult<()> {
        let path = self.auth_state_path(file_name);
        let state = StorageState::load(&path)?;
        session::restore(self.page, &state).await?;
        tracing::info!(path = %path.display(), "auth state restored");
        Ok(())
    }

    /// Classify the page's current authentication status.
    ///
    /// Only the application's own URLs say anything: the inventory route
    /// means authenticated, any other application URL means not, and foreign
    /// URLs (including `about:blank`) are [`AuthStatus::Unknown`].
    pub async fn auth_status(&self) -> CarritoResult<AuthStatus> {
        let url = self.page.url().await?;
        if !self.config.is_on_host(&url) {
            return Ok(AuthStatus::Unknown);
        }
        if url.contains(INVENTORY_ROUTE) {
            Ok(AuthStatus::Authenticated)
        } else {
            Ok(AuthStatus::Unauthenticated)
        }
    }

    /// Whether the page is on a post-login page right now
    pub async fn is_authenticated(&self) -> CarritoResult<bool> {
        Ok(self.auth_status().await? == AuthStatus::Authenticated)
    }

    /// Drop the live session: cookies and web storage.
    ///
    /// Web storage is the full extent of the storefront's client-side state;
    /// the site never requests browser permissions, so there are none to
    /// reset. The persisted artifact, if any, is left untouched.
    pub async fn clear_auth_state(&self) -> CarritoResult<()> {
        self.page.clear_cookies().await?;
        self.page.clear_storage().await?;
        tracing::info!("auth state cleared");
        Ok(())
    }
}
