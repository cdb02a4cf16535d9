//! Standalone test helpers: explicit waits, data generation, and debug
//! artifacts. Everything here is free-standing so helpers can be used with a
//! bare [`Page`] before any page object exists.

use crate::browser::Page;
use crate::result::CarritoResult;

/// Explicit wait helpers over a bare page
pub mod waits {
    use super::Page;
    use crate::locator::Selector;
    use crate::result::CarritoResult;
    use crate::wait::{poll_until, UrlPattern, WaitOptions};
    use std::time::Duration;

    /// Wait until the selector is visible
    pub async fn wait_for_visible(
        page: &Page,
        selector: &Selector,
        options: &WaitOptions,
    ) -> CarritoResult<Duration> {
        poll_until(
            || async move { page.is_visible(selector).await },
            &format!("{selector} to be visible"),
            options,
        )
        .await
    }

    /// Wait until the selector is hidden or gone
    pub async fn wait_for_hidden(
        page: &Page,
        selector: &Selector,
        options: &WaitOptions,
    ) -> CarritoResult<Duration> {
        poll_until(
            || async move { Ok(!page.is_visible(selector).await?) },
            &format!("{selector} to be hidden"),
            options,
        )
        .await
    }

    /// Wait until the page URL matches a pattern
    pub async fn wait_for_url(
        page: &Page,
        pattern: &UrlPattern,
        options: &WaitOptions,
    ) -> CarritoResult<Duration> {
        poll_until(
            || async move { Ok(pattern.matches(&page.url().await?)) },
            &pattern.to_string(),
            options,
        )
        .await
    }

    /// Wait until the document has finished parsing
    pub async fn wait_for_dom_ready(page: &Page, options: &WaitOptions) -> CarritoResult<Duration> {
        poll_until(
            || async move { page.is_dom_ready().await },
            "document ready",
            options,
        )
        .await
    }

    /// Wait until some element contains the given text
    pub async fn wait_for_text(
        page: &Page,
        text: &str,
        options: &WaitOptions,
    ) -> CarritoResult<Duration> {
        let selector = Selector::text(text);
        let selector_ref = &selector;
        poll_until(
            || async move { page.is_visible(selector_ref).await },
            &format!("text \"{text}\" to appear"),
            options,
        )
        .await
    }
}

/// Test data generation
pub mod data {
    /// A random lowercase hex string of the given length
    #[must_use]
    pub fn random_string(len: usize) -> String {
        let mut out = String::with_capacity(len);
        while out.len() < len {
            out.push_str(&uuid::Uuid::new_v4().simple().to_string());
        }
        out.truncate(len);
        out
    }

    /// A unique identifier usable in form fields and file names
    #[must_use]
    pub fn unique_id() -> String {
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix = random_string(7);
        format!("test_{millis}_{suffix}")
    }

    /// A filesystem-safe UTC timestamp
    #[must_use]
    pub fn timestamp() -> String {
        chrono::Utc::now().format("%Y-%m-%d_%H-%M-%S").to_string()
    }
}

/// Debug artifact helpers
pub mod debug {
    use super::{CarritoResult, Page};
    use std::path::{Path, PathBuf};

    /// Screenshot the page into `dir`, stamping the file name.
    ///
    /// Returns the path written.
    pub async fn take_screenshot(page: &Page, dir: &Path, name: &str) -> CarritoResult<PathBuf> {
        let bytes = page.screenshot().await?;
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{name}-{}.png", super::data::timestamp()));
        std::fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), "debug screenshot saved");
        Ok(path)
    }

    /// Log the page's URL and title
    pub async fn log_page_info(page: &Page) -> CarritoResult<()> {
        let url = page.url().await?;
        let title = page.title().await?;
        tracing::info!(url, title, "page info");
        Ok(())
    }

    /// Dump the page HTML into `dir/<name>.html`.
    ///
    /// Returns the path written.
    pub async fn save_page_html(page: &Page, dir: &Path, name: &str) -> CarritoResult<PathBuf> {
        let html = page.content().await?;
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{name}.html"));
        std::fs::write(&path, html)?;
        tracing::info!(path = %path.display(), "page html saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    mod data_tests {
        use crate::helpers::data;

        #[test]
        fn test_random_string_length_and_charset() {
            let s = data::random_string(40);
            assert_eq!(s.len(), 40);
            assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
        }

        #[test]
        fn test_random_strings_differ() {
            assert_ne!(data::random_string(16), data::random_string(16));
        }

        #[test]
        fn test_unique_id_shape() {
            let id = data::unique_id();
            assert!(id.starts_with("test_"));
            assert_eq!(id.split('_').count(), 3);
        }

        #[test]
        fn test_timestamp_is_filesystem_safe() {
            let ts = data::timestamp();
            assert!(!ts.contains(':'));
            assert!(!ts.contains('/'));
            assert_eq!(ts.len(), "2026-01-01_00-00-00".len());
        }
    }

    #[cfg(not(feature = "browser"))]
    mod waits_tests {
        use crate::browser::{MockElement, Page};
        use crate::helpers::waits;
        use crate::locator::Selector;
        use crate::wait::{UrlPattern, WaitOptions};

        fn short() -> WaitOptions {
            WaitOptions::new().with_timeout(100).with_poll_interval(5)
        }

        #[tokio::test]
        async fn test_wait_for_visible() {
            let page = Page::default();
            page.add_element(MockElement::new(&[".title"]).with_text("Products"));
            waits::wait_for_visible(&page, &Selector::css(".title"), &short())
                .await
                .unwrap();
            waits::wait_for_text(&page, "Products", &short()).await.unwrap();
        }

        #[tokio::test]
        async fn test_wait_for_hidden_absent_element() {
            let page = Page::default();
            waits::wait_for_hidden(&page, &Selector::css(".spinner"), &short())
                .await
                .unwrap();
        }

        #[tokio::test]
        async fn test_wait_for_url_glob() {
            let page = Page::default();
            page.set_url("https://www.saucedemo.com/inventory.html");
            waits::wait_for_url(
                &page,
                &UrlPattern::Glob("**/inventory.html".into()),
                &short(),
            )
            .await
            .unwrap();
        }

        #[tokio::test]
        async fn test_wait_for_url_timeout() {
            let page = Page::default();
            let err = waits::wait_for_url(
                &page,
                &UrlPattern::Contains("inventory".into()),
                &short(),
            )
            .await
            .expect_err("never navigates");
            assert!(matches!(err, crate::result::CarritoError::Timeout { .. }));
        }
    }

    #[cfg(not(feature = "browser"))]
    mod debug_tests {
        use crate::browser::Page;
        use crate::helpers::debug;

        #[tokio::test]
        async fn test_artifacts_are_written() {
            let dir = tempfile::tempdir().unwrap();
            let page = Page::default();
            page.set_url("https://www.saucedemo.com/");
            page.set_content("<html><body>Swag Labs</body></html>");

            let shot = debug::take_screenshot(&page, dir.path(), "failure")
                .await
                .unwrap();
            assert!(shot.exists());

            let html = debug::save_page_html(&page, dir.path(), "failure")
                .await
                .unwrap();
            assert_eq!(
                std::fs::read_to_string(html).unwrap(),
                "<html><body>Swag Labs</body></html>"
            );

            debug::log_page_info(&page).await.unwrap();
        }
    }
}
