//! Browser control for the suite.
//!
//! This module provides real browser control via the Chrome `DevTools`
//! Protocol. When compiled with the `browser` feature, it uses chromiumoxide
//! for full CDP support. Without the feature, it provides a scriptable mock
//! page so page objects and flows can be tested without a browser binary.
//!
//! Both backends expose the same [`Page`] surface: immediate, single-shot
//! operations. Waiting and retrying live above this layer.

use std::collections::HashMap;

use crate::locator::Selector;
use crate::result::{CarritoError, CarritoResult};
use crate::session::Cookie;

/// How the browser process is launched
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run without a visible window
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Chromium binary to launch; autodetected when unset
    pub chromium_path: Option<String>,
    /// User agent override
    pub user_agent: Option<String>,
    /// Chromium sandbox; turn off inside containers and CI
    pub sandbox: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
            chromium_path: None,
            user_agent: None,
            sandbox: true,
        }
    }
}

impl BrowserConfig {
    /// Set viewport dimensions
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set chromium path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Set user agent
    #[must_use]
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Disable sandbox (for containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }
}

// ============================================================================
// Real CDP Implementation (when `browser` feature is enabled)
// ============================================================================

#[cfg(feature = "browser")]
#[allow(
    clippy::significant_drop_tightening,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation
)]
mod cdp {
    use super::*;
    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
    use chromiumoxide::cdp::browser_protocol::network::{
        ClearBrowserCookiesParams, CookieParam, CookieSameSite, SetCookiesParams, TimeSinceEpoch,
    };
    use chromiumoxide::cdp::browser_protocol::page::{
        CaptureScreenshotFormat, CaptureScreenshotParams,
    };
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    use crate::session::SameSite;

    fn page_err(e: impl std::fmt::Display) -> CarritoError {
        CarritoError::Page {
            message: e.to_string(),
        }
    }

    /// A real browser instance driven over CDP
    #[derive(Debug)]
    pub struct Browser {
        config: BrowserConfig,
        inner: CdpBrowser,
        handle: tokio::task::JoinHandle<()>,
    }

    impl Browser {
        /// Launch a browser with the given configuration
        ///
        /// # Errors
        ///
        /// Returns error if browser cannot be launched
        pub async fn launch(config: BrowserConfig) -> CarritoResult<Self> {
            let mut builder =
                CdpConfig::builder().window_size(config.viewport_width, config.viewport_height);

            // with_head() turns headless OFF
            if !config.headless {
                builder = builder.with_head();
            }

            if !config.sandbox {
                builder = builder.no_sandbox();
            }

            if let Some(ref path) = config.chromium_path {
                builder = builder.chrome_executable(path);
            }

            let cdp_config = builder
                .build()
                .map_err(|e| CarritoError::BrowserLaunch { message: e })?;

            let (browser, mut handler) =
                CdpBrowser::launch(cdp_config)
                    .await
                    .map_err(|e| CarritoError::BrowserLaunch {
                        message: e.to_string(),
                    })?;

            // Spawn handler task
            let handle = tokio::spawn(async move {
                while let Some(h) = handler.next().await {
                    if h.is_err() {
                        break;
                    }
                }
            });

            tracing::debug!(
                headless = config.headless,
                width = config.viewport_width,
                height = config.viewport_height,
                "browser launched"
            );

            Ok(Self {
                config,
                inner: browser,
                handle,
            })
        }

        /// Get the browser configuration
        #[must_use]
        pub const fn config(&self) -> &BrowserConfig {
            &self.config
        }

        /// Open a new blank page
        pub async fn new_page(&self) -> CarritoResult<Page> {
            let cdp_page = self.inner.new_page("about:blank").await.map_err(page_err)?;
            Ok(Page {
                inner: Arc::new(Mutex::new(cdp_page)),
            })
        }

        /// Close the browser
        pub async fn close(mut self) -> CarritoResult<()> {
            self.inner
                .close()
                .await
                .map_err(|e| CarritoError::BrowserLaunch {
                    message: e.to_string(),
                })?;
            self.handle.abort();
            Ok(())
        }
    }

    /// A browser page with real CDP connection
    #[derive(Debug, Clone)]
    pub struct Page {
        inner: Arc<Mutex<CdpPage>>,
    }

    impl Page {
        async fn eval(&self, expr: &str) -> CarritoResult<serde_json::Value> {
            let page = self.inner.lock().await;
            let result = page.evaluate(expr).await.map_err(page_err)?;
            Ok(result
                .value()
                .cloned()
                .unwrap_or(serde_json::Value::Null))
        }

        /// Navigate to a URL and wait for the navigation to commit
        pub async fn goto(&self, url: &str) -> CarritoResult<()> {
            let page = self.inner.lock().await;
            page.goto(url)
                .await
                .map_err(|e| CarritoError::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            page.wait_for_navigation()
                .await
                .map_err(|e| CarritoError::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            tracing::debug!(url, "navigated");
            Ok(())
        }

        /// Reload the current page
        pub async fn reload(&self) -> CarritoResult<()> {
            let page = self.inner.lock().await;
            page.reload().await.map_err(page_err)?;
            Ok(())
        }

        /// Current URL, `about:blank` when none is committed yet
        pub async fn url(&self) -> CarritoResult<String> {
            let page = self.inner.lock().await;
            let url = page.url().await.map_err(page_err)?;
            Ok(url.unwrap_or_else(|| String::from("about:blank")))
        }

        /// Document title
        pub async fn title(&self) -> CarritoResult<String> {
            let page = self.inner.lock().await;
            let title = page.get_title().await.map_err(page_err)?;
            Ok(title.unwrap_or_default())
        }

        /// Full page HTML
        pub async fn content(&self) -> CarritoResult<String> {
            let page = self.inner.lock().await;
            page.content().await.map_err(page_err)
        }

        /// Whether the document has finished parsing
        pub async fn is_dom_ready(&self) -> CarritoResult<bool> {
            let value = self
                .eval("document.readyState === 'interactive' || document.readyState === 'complete'")
                .await?;
            Ok(value.as_bool().unwrap_or(false))
        }

        /// Origin of the current document
        pub async fn origin(&self) -> CarritoResult<String> {
            let value = self.eval("location.origin").await?;
            Ok(value.as_str().unwrap_or_default().to_string())
        }

        /// Click the first element matching the selector
        pub async fn click(&self, selector: &Selector) -> CarritoResult<()> {
            let value = self.eval(&selector.to_click_query()).await?;
            if value.as_bool().unwrap_or(false) {
                Ok(())
            } else {
                Err(CarritoError::ElementNotFound {
                    selector: selector.describe(),
                })
            }
        }

        /// Fill the first matching input with a value
        pub async fn fill(&self, selector: &Selector, value: &str) -> CarritoResult<()> {
            let result = self.eval(&selector.to_fill_query(value)).await?;
            if result.as_bool().unwrap_or(false) {
                Ok(())
            } else {
                Err(CarritoError::ElementNotFound {
                    selector: selector.describe(),
                })
            }
        }

        /// Select an option by value on the first matching `<select>`
        pub async fn select_option(&self, selector: &Selector, value: &str) -> CarritoResult<()> {
            let result = self.eval(&selector.to_select_query(value)).await?;
            if result.as_bool().unwrap_or(false) {
                Ok(())
            } else {
                Err(CarritoError::ElementNotFound {
                    selector: selector.describe(),
                })
            }
        }

        /// Text content of the first match, `None` when absent
        pub async fn text(&self, selector: &Selector) -> CarritoResult<Option<String>> {
            let value = self.eval(&selector.to_text_query()).await?;
            Ok(value.as_str().map(String::from))
        }

        /// Text content of every match
        pub async fn all_texts(&self, selector: &Selector) -> CarritoResult<Vec<String>> {
            let value = self.eval(&selector.to_all_text_query()).await?;
            Ok(value
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|v| v.as_str().map(String::from))
                        .collect()
                })
                .unwrap_or_default())
        }

        /// Whether the first match is rendered and not hidden.
        ///
        /// Absent elements report `false` rather than an error.
        pub async fn is_visible(&self, selector: &Selector) -> CarritoResult<bool> {
            let value = self.eval(&selector.to_visible_query()).await?;
            Ok(value.as_bool().unwrap_or(false))
        }

        /// Number of matching elements
        pub async fn count(&self, selector: &Selector) -> CarritoResult<usize> {
            let value = self.eval(&selector.to_count_query()).await?;
            Ok(value.as_u64().unwrap_or(0) as usize)
        }

        /// Take a PNG screenshot
        pub async fn screenshot(&self) -> CarritoResult<Vec<u8>> {
            let page = self.inner.lock().await;
            let params = CaptureScreenshotParams::builder()
                .format(CaptureScreenshotFormat::Png)
                .build();

            let screenshot =
                page.execute(params)
                    .await
                    .map_err(|e| CarritoError::Screenshot {
                        message: e.to_string(),
                    })?;

            use base64::Engine;
            base64::engine::general_purpose::STANDARD
                .decode(&screenshot.data)
                .map_err(|e| CarritoError::Screenshot {
                    message: e.to_string(),
                })
        }

        /// Cookies visible to the page
        pub async fn cookies(&self) -> CarritoResult<Vec<Cookie>> {
            let page = self.inner.lock().await;
            let raw = page.get_cookies().await.map_err(page_err)?;
            Ok(raw
                .into_iter()
                .map(|c| Cookie {
                    name: c.name,
                    value: c.value,
                    domain: c.domain,
                    path: c.path,
                    expires: if c.expires < 0.0 {
                        None
                    } else {
                        Some(c.expires as i64)
                    },
                    http_only: c.http_only,
                    secure: c.secure,
                    same_site: match c.same_site {
                        Some(CookieSameSite::Strict) => SameSite::Strict,
                        Some(CookieSameSite::None) => SameSite::None,
                        _ => SameSite::Lax,
                    },
                })
                .collect())
        }

        /// Install cookies into the browser context
        pub async fn set_cookies(&self, cookies: &[Cookie]) -> CarritoResult<()> {
            if cookies.is_empty() {
                return Ok(());
            }
            let mut params = Vec::with_capacity(cookies.len());
            for cookie in cookies {
                let mut builder = CookieParam::builder()
                    .name(&cookie.name)
                    .value(&cookie.value)
                    .domain(&cookie.domain)
                    .path(&cookie.path)
                    .secure(cookie.secure)
                    .http_only(cookie.http_only)
                    .same_site(match cookie.same_site {
                        SameSite::Strict => CookieSameSite::Strict,
                        SameSite::Lax => CookieSameSite::Lax,
                        SameSite::None => CookieSameSite::None,
                    });
                if let Some(expires) = cookie.expires {
                    builder = builder.expires(TimeSinceEpoch::new(expires as f64));
                }
                let param = builder
                    .build()
                    .map_err(|e| CarritoError::Session { message: e })?;
                params.push(param);
            }
            let page = self.inner.lock().await;
            page.execute(SetCookiesParams::new(params))
                .await
                .map_err(|e| CarritoError::Session {
                    message: e.to_string(),
                })?;
            Ok(())
        }

        /// Remove every cookie from the browser context
        pub async fn clear_cookies(&self) -> CarritoResult<()> {
            let page = self.inner.lock().await;
            page.execute(ClearBrowserCookiesParams::default())
                .await
                .map_err(|e| CarritoError::Session {
                    message: e.to_string(),
                })?;
            Ok(())
        }

        /// Local storage entries of the current origin
        pub async fn local_storage(&self) -> CarritoResult<HashMap<String, String>> {
            let value = self
                .eval("JSON.stringify(Object.fromEntries(Object.entries(localStorage)))")
                .await?;
            parse_storage_json(&value)
        }

        /// Session storage entries of the current origin
        pub async fn session_storage(&self) -> CarritoResult<HashMap<String, String>> {
            let value = self
                .eval("JSON.stringify(Object.fromEntries(Object.entries(sessionStorage)))")
                .await?;
            parse_storage_json(&value)
        }

        /// Set one local storage entry on the current origin
        pub async fn set_local_storage_item(&self, key: &str, value: &str) -> CarritoResult<()> {
            self.eval(&format!("localStorage.setItem({key:?}, {value:?}); true"))
                .await?;
            Ok(())
        }

        /// Set one session storage entry on the current origin
        pub async fn set_session_storage_item(&self, key: &str, value: &str) -> CarritoResult<()> {
            self.eval(&format!("sessionStorage.setItem({key:?}, {value:?}); true"))
                .await?;
            Ok(())
        }

        /// Clear local and session storage on the current origin
        pub async fn clear_storage(&self) -> CarritoResult<()> {
            self.eval("localStorage.clear(); sessionStorage.clear(); true")
                .await?;
            Ok(())
        }
    }

    fn parse_storage_json(value: &serde_json::Value) -> CarritoResult<HashMap<String, String>> {
        match value.as_str() {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(HashMap::new()),
        }
    }
}

// ============================================================================
// Mock Implementation (default, no browser binary required)
// ============================================================================

#[cfg(not(feature = "browser"))]
mod mock {
    use super::*;
    use std::sync::Mutex;

    // PNG magic bytes, so mock screenshots written to disk are recognizable
    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// A mock browser that fabricates pages
    #[derive(Debug, Default)]
    pub struct Browser {
        config: BrowserConfig,
    }

    impl Browser {
        /// Launch a mock browser
        pub async fn launch(config: BrowserConfig) -> CarritoResult<Self> {
            tracing::debug!("mock browser launched");
            Ok(Self { config })
        }

        /// Get the browser configuration
        #[must_use]
        pub const fn config(&self) -> &BrowserConfig {
            &self.config
        }

        /// Open a new blank mock page
        pub async fn new_page(&self) -> CarritoResult<Page> {
            Ok(Page::default())
        }

        /// Close the mock browser
        pub async fn close(self) -> CarritoResult<()> {
            Ok(())
        }
    }

    /// A scriptable element in the mock DOM
    #[derive(Debug, Clone)]
    pub struct MockElement {
        /// CSS selectors this element answers to
        pub selectors: Vec<String>,
        /// Text content
        pub text: String,
        /// Form value
        pub value: String,
        /// Visibility flag
        pub visible: bool,
        /// Product name of the containing item card, if any
        pub scope: Option<String>,
    }

    impl MockElement {
        /// Create an element answering to the given selectors
        #[must_use]
        pub fn new(selectors: &[&str]) -> Self {
            Self {
                selectors: selectors.iter().map(|s| (*s).to_string()).collect(),
                text: String::new(),
                value: String::new(),
                visible: true,
                scope: None,
            }
        }

        /// Set text content
        #[must_use]
        pub fn with_text(mut self, text: impl Into<String>) -> Self {
            self.text = text.into();
            self
        }

        /// Set form value
        #[must_use]
        pub fn with_value(mut self, value: impl Into<String>) -> Self {
            self.value = value.into();
            self
        }

        /// Scope the element to an item card by product name
        #[must_use]
        pub fn with_scope(mut self, name: impl Into<String>) -> Self {
            self.scope = Some(name.into());
            self
        }

        /// Mark the element hidden
        #[must_use]
        pub const fn hidden(mut self) -> Self {
            self.visible = false;
            self
        }

        fn has_css(&self, css: &str) -> bool {
            self.selectors.iter().any(|s| s == css)
        }

        fn matches(&self, selector: &Selector) -> bool {
            match selector {
                Selector::Css(css) => self.has_css(css),
                Selector::CssWithText { css, text } => {
                    self.has_css(css) && self.text.contains(text.as_str())
                }
                Selector::Text(text) => self.text.contains(text.as_str()),
                Selector::ItemByName { item, name, .. } => {
                    self.has_css(item) && self.scope.as_deref() == Some(name.as_str())
                }
                Selector::WithinItem { name, inner, .. } => {
                    self.has_css(inner) && self.scope.as_deref() == Some(name.as_str())
                }
            }
        }
    }

    #[derive(Debug, Default)]
    struct MockState {
        url: String,
        title: String,
        content: String,
        elements: Vec<MockElement>,
        clicks: Vec<String>,
        // selector description -> (url, optional title) applied on click
        navigations: HashMap<String, (String, Option<String>)>,
        cookies: Vec<Cookie>,
        local_storage: HashMap<String, String>,
        session_storage: HashMap<String, String>,
    }

    /// A scriptable mock page
    #[derive(Debug, Default)]
    pub struct Page {
        state: Mutex<MockState>,
    }

    impl Page {
        fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
            self.state.lock().expect("mock page state poisoned")
        }

        /// Navigate to a URL
        pub async fn goto(&self, url: &str) -> CarritoResult<()> {
            self.state().url = url.to_string();
            Ok(())
        }

        /// Reload the current page (a no-op on the mock)
        pub async fn reload(&self) -> CarritoResult<()> {
            Ok(())
        }

        /// Current URL, `about:blank` when none was set
        pub async fn url(&self) -> CarritoResult<String> {
            let state = self.state();
            if state.url.is_empty() {
                Ok(String::from("about:blank"))
            } else {
                Ok(state.url.clone())
            }
        }

        /// Document title
        pub async fn title(&self) -> CarritoResult<String> {
            Ok(self.state().title.clone())
        }

        /// Full page HTML
        pub async fn content(&self) -> CarritoResult<String> {
            Ok(self.state().content.clone())
        }

        /// The mock DOM is always parsed
        pub async fn is_dom_ready(&self) -> CarritoResult<bool> {
            Ok(true)
        }

        /// Origin derived from the current URL
        pub async fn origin(&self) -> CarritoResult<String> {
            let url = self.url().await?;
            match url.split_once("://") {
                Some((scheme, rest)) => {
                    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
                    Ok(format!("{scheme}://{host}"))
                }
                None => Ok(String::new()),
            }
        }

        /// Click the first element matching the selector
        pub async fn click(&self, selector: &Selector) -> CarritoResult<()> {
            let mut state = self.state();
            if !state.elements.iter().any(|el| el.matches(selector)) {
                return Err(CarritoError::ElementNotFound {
                    selector: selector.describe(),
                });
            }
            let key = selector.describe();
            state.clicks.push(key.clone());
            if let Some((url, title)) = state.navigations.get(&key).cloned() {
                state.url = url;
                if let Some(title) = title {
                    state.title = title;
                }
            }
            Ok(())
        }

        /// Fill the first matching input with a value
        pub async fn fill(&self, selector: &Selector, value: &str) -> CarritoResult<()> {
            let mut state = self.state();
            match state.elements.iter_mut().find(|el| el.matches(selector)) {
                Some(el) => {
                    el.value = value.to_string();
                    Ok(())
                }
                None => Err(CarritoError::ElementNotFound {
                    selector: selector.describe(),
                }),
            }
        }

        /// Select an option by value on the first matching element
        pub async fn select_option(&self, selector: &Selector, value: &str) -> CarritoResult<()> {
            self.fill(selector, value).await
        }

        /// Text content of the first match, `None` when absent
        pub async fn text(&self, selector: &Selector) -> CarritoResult<Option<String>> {
            let state = self.state();
            Ok(state
                .elements
                .iter()
                .find(|el| el.matches(selector))
                .map(|el| el.text.clone()))
        }

        /// Text content of every match
        pub async fn all_texts(&self, selector: &Selector) -> CarritoResult<Vec<String>> {
            let state = self.state();
            Ok(state
                .elements
                .iter()
                .filter(|el| el.matches(selector))
                .map(|el| el.text.clone())
                .collect())
        }

        /// Whether the first match is visible; absent elements report `false`
        pub async fn is_visible(&self, selector: &Selector) -> CarritoResult<bool> {
            let state = self.state();
            Ok(state
                .elements
                .iter()
                .find(|el| el.matches(selector))
                .is_some_and(|el| el.visible))
        }

        /// Number of matching elements
        pub async fn count(&self, selector: &Selector) -> CarritoResult<usize> {
            let state = self.state();
            Ok(state.elements.iter().filter(|el| el.matches(selector)).count())
        }

        /// Produce a placeholder PNG
        pub async fn screenshot(&self) -> CarritoResult<Vec<u8>> {
            Ok(PNG_SIGNATURE.to_vec())
        }

        /// Cookies visible to the page
        pub async fn cookies(&self) -> CarritoResult<Vec<Cookie>> {
            Ok(self.state().cookies.clone())
        }

        /// Install cookies into the mock context
        pub async fn set_cookies(&self, cookies: &[Cookie]) -> CarritoResult<()> {
            let mut state = self.state();
            for cookie in cookies {
                state.cookies.retain(|c| c.name != cookie.name);
                state.cookies.push(cookie.clone());
            }
            Ok(())
        }

        /// Remove every cookie from the mock context
        pub async fn clear_cookies(&self) -> CarritoResult<()> {
            self.state().cookies.clear();
            Ok(())
        }

        /// Local storage entries of the current origin
        pub async fn local_storage(&self) -> CarritoResult<HashMap<String, String>> {
            Ok(self.state().local_storage.clone())
        }

        /// Session storage entries of the current origin
        pub async fn session_storage(&self) -> CarritoResult<HashMap<String, String>> {
            Ok(self.state().session_storage.clone())
        }

        /// Set one local storage entry
        pub async fn set_local_storage_item(&self, key: &str, value: &str) -> CarritoResult<()> {
            self.state()
                .local_storage
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        /// Set one session storage entry
        pub async fn set_session_storage_item(&self, key: &str, value: &str) -> CarritoResult<()> {
            self.state()
                .session_storage
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        /// Clear local and session storage
        pub async fn clear_storage(&self) -> CarritoResult<()> {
            let mut state = self.state();
            state.local_storage.clear();
            state.session_storage.clear();
            Ok(())
        }

        // --- scripting surface, for tests ---

        /// Set the current URL without a navigation
        pub fn set_url(&self, url: &str) {
            self.state().url = url.to_string();
        }

        /// Set the document title
        pub fn set_title(&self, title: &str) {
            self.state().title = title.to_string();
        }

        /// Set the page HTML returned by [`Page::content`]
        pub fn set_content(&self, content: &str) {
            self.state().content = content.to_string();
        }

        /// Add an element to the mock DOM
        pub fn add_element(&self, element: MockElement) {
            self.state().elements.push(element);
        }

        /// Toggle visibility of every element matching a CSS selector
        pub fn set_visible(&self, css: &str, visible: bool) {
            for el in self
                .state()
                .elements
                .iter_mut()
                .filter(|el| el.has_css(css))
            {
                el.visible = visible;
            }
        }

        /// Replace the text of every element matching a CSS selector
        pub fn set_text(&self, css: &str, text: &str) {
            for el in self
                .state()
                .elements
                .iter_mut()
                .filter(|el| el.has_css(css))
            {
                el.text = text.to_string();
            }
        }

        /// Remove every element matching a CSS selector
        pub fn remove_elements(&self, css: &str) {
            self.state().elements.retain(|el| !el.has_css(css));
        }

        /// Script a navigation triggered by clicking a selector
        pub fn navigate_on_click(&self, selector: &Selector, url: &str, title: Option<&str>) {
            self.state().navigations.insert(
                selector.describe(),
                (url.to_string(), title.map(String::from)),
            );
        }

        /// Descriptions of every click performed so far
        #[must_use]
        pub fn clicks(&self) -> Vec<String> {
            self.state().clicks.clone()
        }

        /// Current form value of the first element matching a CSS selector
        #[must_use]
        pub fn element_value(&self, css: &str) -> Option<String> {
            self.state()
                .elements
                .iter()
                .find(|el| el.has_css(css))
                .map(|el| el.value.clone())
        }
    }
}

#[cfg(feature = "browser")]
pub use cdp::{Browser, Page};

#[cfg(not(feature = "browser"))]
pub use mock::{Browser, MockElement, Page};
