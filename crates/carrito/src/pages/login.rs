//! Login page object.

use crate::locator::Selector;
use crate::page::PageDriver;
use crate::result::CarritoResult;
use crate::selectors::login as sel;

/// The login page
#[derive(Debug, Clone, Copy)]
pub struct LoginPage<'p> {
    driver: PageDriver<'p>,
}

impl<'p> LoginPage<'p> {
    /// Wrap a driver as the login page
    #[must_use]
    pub const fn new(driver: PageDriver<'p>) -> Self {
        Self { driver }
    }

    /// The underlying driver
    #[must_use]
    pub const fn driver(&self) -> PageDriver<'p> {
        self.driver
    }

    /// Navigate to the login page (the application root) and wait for it
    pub async fn goto(&self) -> CarritoResult<()> {
        self.driver.goto("").await?;
        self.driver.wait_for_page_load().await
    }

    /// Fill the username field
    pub async fn fill_username(&self, username: &str) -> CarritoResult<()> {
        self.driver
            .fill(&Selector::css(sel::USERNAME_INPUT), username)
            .await
    }

    /// Fill the password field
    pub async fn fill_password(&self, password: &str) -> CarritoResult<()> {
        self.driver
            .fill(&Selector::css(sel::PASSWORD_INPUT), password)
            .await
    }

    /// Clear the username field
    pub async fn clear_username(&self) -> CarritoResult<()> {
        self.driver.fill(&Selector::css(sel::USERNAME_INPUT), "").await
    }

    /// Clear the password field
    pub async fn clear_password(&self) -> CarritoResult<()> {
        self.driver.fill(&Selector::css(sel::PASSWORD_INPUT), "").await
    }

    /// Submit the login form
    pub async fn click_login(&self) -> CarritoResult<()> {
        self.driver.click(&Selector::css(sel::LOGIN_BUTTON)).await
    }

    /// Fill credentials and submit.
    ///
    /// Does not wait for the post-login navigation; callers decide whether
    /// success or an error message is the expected outcome.
    pub async fn login(&self, username: &str, password: &str) -> CarritoResult<()> {
        tracing::info!(username, "logging in");
        self.fill_username(username).await?;
        self.fill_password(password).await?;
        self.click_login().await
    }

    /// Current error message text, `None` when no error is shown
    pub async fn error_message(&self) -> CarritoResult<Option<String>> {
        self.driver
            .get_text(&Selector::css(sel::ERROR_MESSAGE))
            .await
    }

    /// Whether the error container is currently visible
    pub async fn is_error_visible(&self) -> CarritoResult<bool> {
        self.driver
            .is_visible(&Selector::css(sel::ERROR_MESSAGE))
            .await
    }

    /// Dismiss the error message
    pub async fn dismiss_error(&self) -> CarritoResult<()> {
        self.driver.click(&Selector::css(sel::ERROR_BUTTON)).await
    }

    /// Assert the login form is fully rendered
    pub async fn assert_loaded(&self) -> CarritoResult<()> {
        self.driver.assert_visible(&Selector::css(sel::LOGO)).await?;
        self.driver
            .assert_visible(&Selector::css(sel::USERNAME_INPUT))
            .await?;
        self.driver
            .assert_visible(&Selector::css(sel::PASSWORD_INPUT))
            .await?;
        self.driver
            .assert_visible(&Selector::css(sel::LOGIN_BUTTON))
            .await
    }

    /// Assert the error container shows a message containing `expected`
    pub async fn assert_error_message(&self, expected: &str) -> CarritoResult<()> {
        self.driver
            .assert_text(&Selector::css(sel::ERROR_MESSAGE), expected)
            .await
    }

    /// Usernames listed in the demo page's credentials hint.
    ///
    /// The hint block holds a header line followed by one username per line;
    /// the header and blank lines are dropped.
    pub async fn available_usernames(&self) -> CarritoResult<Vec<String>> {
        let text = self
            .driver
            .get_text(&Selector::css(sel::CREDENTIALS_HINT))
            .await?
            .unwrap_or_default();
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("Accepted usernames are"))
            .map(String::from)
            .collect())
    }
}

#[cfg(all(test, not(feature = "browser")))]
mod tests {
    use super::*;
    use crate::browser::{MockElement, Page};
    use crate::config::SuiteConfig;
    use crate::result::CarritoError;

    fn test_config() -> SuiteConfig {
        SuiteConfig::new("https://www.saucedemo.com/", "standard_user", "secret_sauce")
            .with_action_timeout(200)
            .with_navigation_timeout(200)
            .with_assertion_timeout(200)
    }

    fn login_dom(page: &Page) {
        page.add_element(MockElement::new(&[sel::LOGO]).with_text("Swag Labs"));
        page.add_element(MockElement::new(&[sel::USERNAME_INPUT]));
        page.add_element(MockElement::new(&[sel::PASSWORD_INPUT]));
        page.add_element(MockElement::new(&[sel::LOGIN_BUTTON]).with_text("Login"));
    }

    #[tokio::test]
    async fn test_goto_lands_on_base_url() {
        let page = Page::default();
        login_dom(&page);
        let config = test_config();
        let login = LoginPage::new(PageDriver::new(&page, &config));
        login.goto().await.unwrap();
        assert_eq!(
            login.driver().current_url().await.unwrap(),
            "https://www.saucedemo.com/"
        );
    }

    #[tokio::test]
    async fn test_login_fills_and_submits() {
        let page = Page::default();
        login_dom(&page);
        let config = test_config();
        let login = LoginPage::new(PageDriver::new(&page, &config));
        login.login("standard_user", "secret_sauce").await.unwrap();
        assert_eq!(
            page.element_value(sel::USERNAME_INPUT).as_deref(),
            Some("standard_user")
        );
        assert_eq!(
            page.element_value(sel::PASSWORD_INPUT).as_deref(),
            Some("secret_sauce")
        );
        assert_eq!(page.clicks().len(), 1);
    }

    #[tokio::test]
    async fn test_assert_loaded() {
        let page = Page::default();
        login_dom(&page);
        let config = test_config();
        let login = LoginPage::new(PageDriver::new(&page, &config));
        login.assert_loaded().await.unwrap();
    }

    #[tokio::test]
    async fn test_assert_loaded_fails_without_form() {
        let page = Page::default();
        let config = test_config();
        let login = LoginPage::new(PageDriver::new(&page, &config));
        let err = login.assert_loaded().await.expect_err("empty page");
        assert!(matches!(err, CarritoError::Assertion { .. }));
    }

    #[tokio::test]
    async fn test_error_message() {
        let page = Page::default();
        login_dom(&page);
        page.add_element(
            MockElement::new(&[sel::ERROR_MESSAGE])
                .with_text("Epic sadface: Username and password do not match"),
        );
        let config = test_config();
        let login = LoginPage::new(PageDriver::new(&page, &config));
        assert!(login.is_error_visible().await.unwrap());
        login
            .assert_error_message("Username and password do not match")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_no_error_message_on_clean_page() {
        let page = Page::default();
        login_dom(&page);
        let config = test_config();
        let login = LoginPage::new(PageDriver::new(&page, &config));
        assert!(!login.is_error_visible().await.unwrap());
        assert_eq!(login.error_message().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_available_usernames_drops_header_and_blanks() {
        let page = Page::default();
        page.add_element(MockElement::new(&[sel::CREDENTIALS_HINT]).with_text(
            "Accepted usernames are:\nstandard_user\nlocked_out_user\n\n  problem_user  \n",
        ));
        let config = test_config();
        let login = LoginPage::new(PageDriver::new(&page, &config));
        assert_eq!(
            login.available_usernames().await.unwrap(),
            vec!["standard_user", "locked_out_user", "problem_user"]
        );
    }
}
