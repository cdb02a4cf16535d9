//! Carrito: End-to-End Test Harness for the Sauce Demo Storefront
//!
//! Carrito (Spanish: "little cart") drives the Sauce Demo web shop through
//! a headless browser, with typed page objects, centralized selectors, and
//! persisted authentication state so suites skip the login form after the
//! first run.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    CARRITO Architecture                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐         │
//! │   │ Page       │    │ PageDriver │    │ Headless   │         │
//! │   │ Objects    │───►│ (waits,    │───►│ Browser    │         │
//! │   │            │    │ assertions)│    │ (chromium) │         │
//! │   └────────────┘    └────────────┘    └────────────┘         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! With the `browser` feature enabled, pages talk CDP via chromiumoxide;
//! without it, a scriptable mock page backs the same API so flows can be
//! tested hermetically.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod auth;
pub mod browser;
pub mod config;
pub mod helpers;
pub mod locator;
pub mod page;
pub mod pages;
pub mod result;
pub mod selectors;
pub mod session;
pub mod wait;

pub use auth::{AuthManager, AuthStatus, DEFAULT_AUTH_STATE_FILE};
pub use browser::{Browser, BrowserConfig, Page};
pub use config::{
    SuiteConfig, DEFAULT_ACTION_TIMEOUT_MS, DEFAULT_ASSERTION_TIMEOUT_MS,
    DEFAULT_NAVIGATION_TIMEOUT_MS, ENV_BASE_URL, ENV_USER_NAME, ENV_USER_PASSWORD,
    INVENTORY_ROUTE,
};
pub use locator::Selector;
pub use page::PageDriver;
pub use pages::{InventoryPage, LoginPage, SortOption};
pub use result::{CarritoError, CarritoResult};
pub use session::{Cookie, SameSite, StorageState};
pub use wait::{poll_until, UrlPattern, WaitOptions, DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS};

#[cfg(not(feature = "browser"))]
pub use browser::MockElement;
