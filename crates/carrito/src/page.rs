//! Shared page driver.
//!
//! [`PageDriver`] is the piece every page object holds (composition, not a
//! base-class hierarchy): it pairs a [`Page`] with the suite configuration
//! and layers waiting on top of the page's immediate operations. Actions
//! auto-wait for visibility under the action timeout; assertions retry under
//! the assertion timeout; navigation waits use the navigation timeout.

use std::path::PathBuf;

use crate::browser::Page;
use crate::config::SuiteConfig;
use crate::locator::Selector;
use crate::result::{CarritoError, CarritoResult};
use crate::wait::{poll_until, WaitOptions};

/// Driver shared by all page objects
#[derive(Debug, Clone, Copy)]
pub struct PageDriver<'p> {
    page: &'p Page,
    config: &'p SuiteConfig,
}

impl<'p> PageDriver<'p> {
    /// Create a driver over a page
    #[must_use]
    pub const fn new(page: &'p Page, config: &'p SuiteConfig) -> Self {
        Self { page, config }
    }

    /// The underlying page
    #[must_use]
    pub const fn page(&self) -> &'p Page {
        self.page
    }

    /// The suite configuration
    #[must_use]
    pub const fn config(&self) -> &'p SuiteConfig {
        self.config
    }

    fn action_wait(&self) -> WaitOptions {
        WaitOptions::new().with_timeout(self.config.action_timeout_ms)
    }

    fn navigation_wait(&self) -> WaitOptions {
        WaitOptions::new().with_timeout(self.config.navigation_timeout_ms)
    }

    fn assertion_wait(&self) -> WaitOptions {
        WaitOptions::new().with_timeout(self.config.assertion_timeout_ms)
    }

    /// Navigate to a route relative to the configured base URL
    pub async fn goto(&self, path: &str) -> CarritoResult<()> {
        let url = self.config.url_for(path);
        tracing::info!(url, "goto");
        self.page.goto(&url).await
    }

    /// Reload the current page
    pub async fn reload(&self) -> CarritoResult<()> {
        self.page.reload().await
    }

    /// Current URL
    pub async fn current_url(&self) -> CarritoResult<String> {
        self.page.url().await
    }

    /// Document title
    pub async fn title(&self) -> CarritoResult<String> {
        self.page.title().await
    }

    /// Wait until the document has finished parsing
    pub async fn wait_for_page_load(&self) -> CarritoResult<()> {
        let page = self.page;
        poll_until(
            || async move { page.is_dom_ready().await },
            "document ready",
            &self.navigation_wait(),
        )
        .await?;
        Ok(())
    }

    /// Wait for the selector to become visible, then click it
    pub async fn click(&self, selector: &Selector) -> CarritoResult<()> {
        self.wait_for_selector(selector, None).await?;
        self.page.click(selector).await
    }

    /// Wait for the selector to become visible, then fill it
    pub async fn fill(&self, selector: &Selector, value: &str) -> CarritoResult<()> {
        self.wait_for_selector(selector, None).await?;
        self.page.fill(selector, value).await
    }

    /// Wait for the selector to become visible, then select an option by value
    pub async fn select_option(&self, selector: &Selector, value: &str) -> CarritoResult<()> {
        self.wait_for_selector(selector, None).await?;
        self.page.select_option(selector, value).await
    }

    /// Text content of the first match, without waiting
    pub async fn get_text(&self, selector: &Selector) -> CarritoResult<Option<String>> {
        self.page.text(selector).await
    }

    /// Text content of every match, without waiting
    pub async fn all_texts(&self, selector: &Selector) -> CarritoResult<Vec<String>> {
        self.page.all_texts(selector).await
    }

    /// Whether the first match is currently visible, without waiting
    pub async fn is_visible(&self, selector: &Selector) -> CarritoResult<bool> {
        self.page.is_visible(selector).await
    }

    /// Number of matching elements, without waiting
    pub async fn count(&self, selector: &Selector) -> CarritoResult<usize> {
        self.page.count(selector).await
    }

    /// Wait for the selector to become visible.
    ///
    /// `timeout_ms` overrides the action timeout when given.
    pub async fn wait_for_selector(
        &self,
        selector: &Selector,
        timeout_ms: Option<u64>,
    ) -> CarritoResult<()> {
        let options = match timeout_ms {
            Some(ms) => WaitOptions::new().with_timeout(ms),
            None => self.action_wait(),
        };
        let page = self.page;
        poll_until(
            || async move { page.is_visible(selector).await },
            &format!("{selector} to be visible"),
            &options,
        )
        .await?;
        Ok(())
    }

    /// Wait for the selector to disappear or turn invisible
    pub async fn wait_for_hidden(
        &self,
        selector: &Selector,
        timeout_ms: Option<u64>,
    ) -> CarritoResult<()> {
        let options = match timeout_ms {
            Some(ms) => WaitOptions::new().with_timeout(ms),
            None => self.assertion_wait(),
        };
        let page = self.page;
        poll_until(
            || async move { Ok(!page.is_visible(selector).await?) },
            &format!("{selector} to be hidden"),
            &options,
        )
        .await?;
        Ok(())
    }

    /// Assert the selector becomes visible within the assertion timeout
    pub async fn assert_visible(&self, selector: &Selector) -> CarritoResult<()> {
        let page = self.page;
        poll_until(
            || async move { page.is_visible(selector).await },
            &format!("{selector} to be visible"),
            &self.assertion_wait(),
        )
        .await
        .map_err(|_| CarritoError::Assertion {
            message: format!("expected {selector} to be visible"),
        })?;
        Ok(())
    }

    /// Assert the first match's text contains `expected`, retrying until the
    /// assertion timeout. The failure message carries the last observed text.
    pub async fn assert_text(&self, selector: &Selector, expected: &str) -> CarritoResult<()> {
        self.assert_text_with(selector, expected, |actual, expected| {
            actual.contains(expected)
        })
        .await
    }

    /// Assert the first match's trimmed text equals `expected` exactly
    pub async fn assert_exact_text(
        &self,
        selector: &Selector,
        expected: &str,
    ) -> CarritoResult<()> {
        self.assert_text_with(selector, expected, |actual, expected| {
            actual.trim() == expected
        })
        .await
    }

    async fn assert_text_with<F>(
        &self,
        selector: &Selector,
        expected: &str,
        check: F,
    ) -> CarritoResult<()>
    where
        F: Fn(&str, &str) -> bool,
    {
        let last_seen = std::sync::Mutex::new(None::<String>);
        let page = self.page;
        let last_seen_ref = &last_seen;
        let check_ref = &check;
        let result = poll_until(
            || async move {
                let text = page.text(selector).await?;
                let ok = text.as_deref().is_some_and(|t| check_ref(t, expected));
                *last_seen_ref.lock().expect("assertion text cell poisoned") = text;
                Ok(ok)
            },
            &format!("{selector} to have text"),
            &self.assertion_wait(),
        )
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(CarritoError::Timeout { .. }) => {
                let actual = last_seen
                    .lock()
                    .expect("assertion text cell poisoned")
                    .take();
                Err(CarritoError::Assertion {
                    message: match actual {
                        Some(actual) => format!(
                            "expected {selector} to have text {expected:?}, last saw {actual:?}"
                        ),
                        None => format!(
                            "expected {selector} to have text {expected:?}, element not found"
                        ),
                    },
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Save a PNG screenshot under `<artifacts_dir>/screenshots/<name>.png`
    pub async fn screenshot(&self, name: &str) -> CarritoResult<PathBuf> {
        let bytes = self.page.screenshot().await?;
        let dir = self.config.artifacts_dir.join("screenshots");
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{name}.png"));
        std::fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), "screenshot saved");
        Ok(path)
    }
}
