//! Typed selectors compiled to DOM query JavaScript.
//!
//! The only dynamic selector construction in the suite is product-name
//! scoping on the inventory page, and it is done here with typed variants
//! rather than string interpolation at the call site. Item scoping matches
//! the product name exactly; callers detect zero/multiple matches through
//! [`Selector::to_count_query`] and fail loudly instead of silently acting
//! on the first hit.

use serde::{Deserialize, Serialize};

/// A selector for locating elements on the page under test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector (e.g. `.inventory_item`)
    Css(String),
    /// CSS selector filtered by text content containing a substring
    CssWithText {
        /// Base CSS selector
        css: String,
        /// Substring the text content must contain
        text: String,
    },
    /// Any element whose text content contains a substring
    Text(String),
    /// Item container whose nested name element's trimmed text equals `name`
    ItemByName {
        /// CSS selector for the item container
        item: String,
        /// CSS selector for the name element within the container
        name_css: String,
        /// Exact product name
        name: String,
    },
    /// An element nested inside an exact-name-scoped item container
    WithinItem {
        /// CSS selector for the item container
        item: String,
        /// CSS selector for the name element within the container
        name_css: String,
        /// Exact product name
        name: String,
        /// CSS selector for the nested target element
        inner: String,
    },
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create a text-content selector
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Filter a CSS selector by text content
    #[must_use]
    pub fn css_with_text(css: impl Into<String>, text: impl Into<String>) -> Self {
        Self::CssWithText {
            css: css.into(),
            text: text.into(),
        }
    }

    /// Scope to the item container holding an exact product name
    #[must_use]
    pub fn item_by_name(
        item: impl Into<String>,
        name_css: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::ItemByName {
            item: item.into(),
            name_css: name_css.into(),
            name: name.into(),
        }
    }

    /// Scope to an element nested inside an exact-name item container
    #[must_use]
    pub fn within_item(
        item: impl Into<String>,
        name_css: impl Into<String>,
        name: impl Into<String>,
        inner: impl Into<String>,
    ) -> Self {
        Self::WithinItem {
            item: item.into(),
            name_css: name_css.into(),
            name: name.into(),
            inner: inner.into(),
        }
    }

    /// JavaScript expression collecting every matching element into an array
    fn collect_expr(&self) -> String {
        match self {
            Self::Css(css) => format!("Array.from(document.querySelectorAll({css:?}))"),
            Self::CssWithText { css, text } => format!(
                "Array.from(document.querySelectorAll({css:?})).filter(el => el.textContent.includes({text:?}))"
            ),
            Self::Text(text) => format!(
                "Array.from(document.querySelectorAll('*')).filter(el => el.textContent.includes({text:?}))"
            ),
            Self::ItemByName { item, name_css, name } => format!(
                "Array.from(document.querySelectorAll({item:?})).filter(el => {{ const n = el.querySelector({name_css:?}); return n && n.textContent.trim() === {name:?}; }})"
            ),
            Self::WithinItem { item, name_css, name, inner } => format!(
                "Array.from(document.querySelectorAll({item:?})).filter(el => {{ const n = el.querySelector({name_css:?}); return n && n.textContent.trim() === {name:?}; }}).map(el => el.querySelector({inner:?})).filter(el => el)"
            ),
        }
    }

    /// JavaScript expression yielding the first matching element or `null`
    #[must_use]
    pub fn to_query(&self) -> String {
        format!("({})[0] || null", self.collect_expr())
    }

    /// JavaScript expression yielding the number of matching elements
    #[must_use]
    pub fn to_count_query(&self) -> String {
        format!("({}).length", self.collect_expr())
    }

    /// JavaScript expression yielding the first match's text content or `null`
    #[must_use]
    pub fn to_text_query(&self) -> String {
        format!(
            "(() => {{ const el = {}; return el ? el.textContent : null; }})()",
            self.to_query()
        )
    }

    /// JavaScript expression yielding every match's text content as an array
    #[must_use]
    pub fn to_all_text_query(&self) -> String {
        format!("({}).map(el => el.textContent)", self.collect_expr())
    }

    /// JavaScript expression yielding whether the first match is visible.
    ///
    /// Absent elements evaluate to `false` rather than failing.
    #[must_use]
    pub fn to_visible_query(&self) -> String {
        format!(
            "(() => {{ const el = {}; return !!(el && el.getClientRects().length > 0 && getComputedStyle(el).visibility !== 'hidden'); }})()",
            self.to_query()
        )
    }

    /// JavaScript expression clicking the first match; yields `false` when absent
    #[must_use]
    pub fn to_click_query(&self) -> String {
        format!(
            "(() => {{ const el = {}; if (!el) return false; el.click(); return true; }})()",
            self.to_query()
        )
    }

    /// JavaScript expression filling the first match with `value`.
    ///
    /// Dispatches `input` and `change` events so framework bindings update.
    #[must_use]
    pub fn to_fill_query(&self, value: &str) -> String {
        format!(
            "(() => {{ const el = {}; if (!el) return false; el.value = {value:?}; el.dispatchEvent(new Event('input', {{ bubbles: true }})); el.dispatchEvent(new Event('change', {{ bubbles: true }})); return true; }})()",
            self.to_query()
        )
    }

    /// JavaScript expression selecting `value` on the first matching `<select>`
    #[must_use]
    pub fn to_select_query(&self, value: &str) -> String {
        format!(
            "(() => {{ const el = {}; if (!el) return false; el.value = {value:?}; el.dispatchEvent(new Event('change', {{ bubbles: true }})); return true; }})()",
            self.to_query()
        )
    }

    /// Human-readable description used in error messages
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Css(css) => css.clone(),
            Self::CssWithText { css, text } => format!("{css} with text \"{text}\""),
            Self::Text(text) => format!("text \"{text}\""),
            Self::ItemByName { item, name, .. } => format!("{item} named \"{name}\""),
            Self::WithinItem {
                item, name, inner, ..
            } => format!("{inner} inside {item} named \"{name}\""),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
