//! Page objects for the storefront under test.
//!
//! Each page object wraps a [`crate::page::PageDriver`] and exposes the
//! page's interactions by name. Page objects never reach around the driver
//! to touch the page directly.

pub mod inventory;
pub mod login;

pub use inventory::{InventoryPage, SortOption};
pub use login::LoginPage;
