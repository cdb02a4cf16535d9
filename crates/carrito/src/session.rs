//! Serialized session state: the authentication artifact.
//!
//! A [`StorageState`] is a snapshot of cookies plus per-origin local and
//! session storage, written whole to a JSON file and read whole on restore.
//! The artifact carries no expiry metadata; a stale file simply fails the
//! next authenticated navigation.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::browser::Page;
use crate::result::{CarritoError, CarritoResult};

/// Storage state for a browser context
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageState {
    /// Cookies
    pub cookies: Vec<Cookie>,
    /// Local storage data, keyed by origin
    pub local_storage: HashMap<String, HashMap<String, String>>,
    /// Session storage data, keyed by origin
    pub session_storage: HashMap<String, HashMap<String, String>>,
}

impl StorageState {
    /// Create empty storage state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cookie
    #[must_use]
    pub fn with_cookie(mut self, cookie: Cookie) -> Self {
        self.cookies.push(cookie);
        self
    }

    /// Add a local storage item
    #[must_use]
    pub fn with_local_storage(mut self, origin: &str, key: &str, value: &str) -> Self {
        self.local_storage
            .entry(origin.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Add a session storage item
    #[must_use]
    pub fn with_session_storage(mut self, origin: &str, key: &str, value: &str) -> Self {
        self.session_storage
            .entry(origin.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Check if the snapshot holds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty() && self.local_storage.is_empty() && self.session_storage.is_empty()
    }

    /// Write the snapshot to `path` as JSON, replacing any prior content.
    ///
    /// Parent directories are created if absent.
    pub fn save(&self, path: &Path) -> CarritoResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a snapshot back from `path`.
    pub fn load(path: &Path) -> CarritoResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// A browser cookie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Domain
    pub domain: String,
    /// Path
    pub path: String,
    /// Expiration timestamp (seconds since epoch), None for session cookies
    pub expires: Option<i64>,
    /// HTTP only flag
    pub http_only: bool,
    /// Secure flag
    pub secure: bool,
    /// Same site setting
    pub same_site: SameSite,
}

impl Cookie {
    /// Create a new cookie
    #[must_use]
    pub fn new(name: &str, value: &str, domain: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            domain: domain.to_string(),
            path: "/".to_string(),
            expires: None,
            http_only: false,
            secure: false,
            same_site: SameSite::Lax,
        }
    }

    /// Set path
    #[must_use]
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    /// Set expiration
    #[must_use]
    pub const fn with_expires(mut self, expires: i64) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Set HTTP only
    #[must_use]
    pub const fn http_only(mut self) -> Self {
        self.http_only = true;
        self
    }

    /// Set secure
    #[must_use]
    pub const fn secure(mut self) -> Self {
        self.secure = true;
        self
    }

    /// Set same site
    #[must_use]
    pub const fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }
}

/// Same site cookie setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    /// Strict same site
    Strict,
    /// Lax same site
    Lax,
    /// No same site restriction
    None,
}

/// Capture the page's current session as a snapshot.
///
/// Collects the context's cookies plus the local and session storage of the
/// origin the page is currently on.
pub async fn capture(page: &Page) -> CarritoResult<StorageState> {
    let mut state = StorageState::new();
    state.cookies = page.cookies().await?;

    let origin = page.origin().await?;
    if origin.is_empty() || origin == "null" {
        return Err(CarritoError::Session {
            message: "cannot capture storage for an opaque origin".to_string(),
        });
    }

    let local = page.local_storage().await?;
    if !local.is_empty() {
        state.local_storage.insert(origin.clone(), local);
    }
    let session = page.session_storage().await?;
    if !session.is_empty() {
        state.session_storage.insert(origin, session);
    }

    Ok(state)
}

/// Restore a snapshot into the page's context.
///
/// Cookies apply immediately. Web storage is origin-scoped, so the page must
/// already be on the target origin for its entries to land.
pub async fn restore(page: &Page, state: &StorageState) -> CarritoResult<()> {
    page.set_cookies(&state.cookies).await?;

    let origin = page.origin().await?;
    if let Some(entries) = state.local_storage.get(&origin) {
        for (key, value) in entries {
            page.set_local_storage_item(key, value).await?;
        }
    }
    if let Some(entries) = state.session_storage.get(&origin) {
        for (key, value) in entries {
            page.set_session_storage_item(key, value).await?;
        }
    }
    Ok(())
}
