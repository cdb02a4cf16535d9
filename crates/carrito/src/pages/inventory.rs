//! Inventory (products) page object.
//!
//! Cart interactions are scoped to a product card by exact name match. Zero
//! matches and multiple matches are both hard errors; acting on "the first
//! card that happens to match" is how tests silently buy the wrong backpack.

use crate::config::INVENTORY_ROUTE;
use crate::locator::Selector;
use crate::page::PageDriver;
use crate::result::{CarritoError, CarritoResult};
use crate::selectors::inventory as sel;

/// Product sort orders offered by the sort dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    /// Name A to Z
    NameAscending,
    /// Name Z to A
    NameDescending,
    /// Price low to high
    PriceLowToHigh,
    /// Price high to low
    PriceHighToLow,
}

impl SortOption {
    /// The `<option>` value understood by the sort dropdown
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::NameAscending => "az",
            Self::NameDescending => "za",
            Self::PriceLowToHigh => "lohi",
            Self::PriceHighToLow => "hilo",
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_value())
    }
}

/// The inventory page
#[derive(Debug, Clone, Copy)]
pub struct InventoryPage<'p> {
    driver: PageDriver<'p>,
}

impl<'p> InventoryPage<'p> {
    /// Wrap a driver as the inventory page
    #[must_use]
    pub const fn new(driver: PageDriver<'p>) -> Self {
        Self { driver }
    }

    /// The underlying driver
    #[must_use]
    pub const fn driver(&self) -> PageDriver<'p> {
        self.driver
    }

    fn item_selector(name: &str) -> Selector {
        Selector::item_by_name(sel::INVENTORY_ITEM, sel::ITEM_NAME, name)
    }

    fn within_item_selector(name: &str, inner: &str) -> Selector {
        Selector::within_item(sel::INVENTORY_ITEM, sel::ITEM_NAME, name, inner)
    }

    /// Navigate straight to the inventory route and wait for it
    pub async fn goto(&self) -> CarritoResult<()> {
        self.driver.goto(INVENTORY_ROUTE).await?;
        self.driver.wait_for_page_load().await
    }

    /// Assert the page header and product list are rendered
    pub async fn assert_loaded(&self) -> CarritoResult<()> {
        self.driver
            .assert_visible(&Selector::css(sel::PAGE_TITLE))
            .await?;
        self.driver
            .assert_visible(&Selector::css(sel::INVENTORY_CONTAINER))
            .await?;
        self.driver
            .assert_exact_text(&Selector::css(sel::PAGE_TITLE), "Products")
            .await
    }

    /// Text of the page title heading
    pub async fn page_title(&self) -> CarritoResult<Option<String>> {
        self.driver.get_text(&Selector::css(sel::PAGE_TITLE)).await
    }

    /// Number of product cards on the page
    pub async fn product_count(&self) -> CarritoResult<usize> {
        self.driver.count(&Selector::css(sel::INVENTORY_ITEM)).await
    }

    /// Product names in page order
    pub async fn product_names(&self) -> CarritoResult<Vec<String>> {
        let names = self.driver.all_texts(&Selector::css(sel::ITEM_NAME)).await?;
        Ok(names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(String::from)
            .collect())
    }

    /// Resolve a product card by exact name, failing on zero or many matches
    async fn require_unique_item(&self, name: &str) -> CarritoResult<()> {
        let item = Self::item_selector(name);
        match self.driver.count(&item).await? {
            0 => Err(CarritoError::ElementNotFound {
                selector: item.describe(),
            }),
            1 => Ok(()),
            matches => Err(CarritoError::AmbiguousSelector {
                selector: item.describe(),
                matches,
            }),
        }
    }

    /// Add the exactly-named product to the cart
    pub async fn add_to_cart(&self, name: &str) -> CarritoResult<()> {
        self.require_unique_item(name).await?;
        tracing::info!(product = name, "adding to cart");
        self.driver
            .click(&Self::within_item_selector(name, sel::ADD_TO_CART_BUTTON))
            .await
    }

    /// Remove the exactly-named product from the cart
    pub async fn remove_from_cart(&self, name: &str) -> CarritoResult<()> {
        self.require_unique_item(name).await?;
        tracing::info!(product = name, "removing from cart");
        self.driver
            .click(&Self::within_item_selector(name, sel::REMOVE_BUTTON))
            .await
    }

    /// Number shown on the cart badge; a hidden or absent badge means zero.
    ///
    /// A visible badge whose text is not a number is an error, not a zero.
    pub async fn cart_item_count(&self) -> CarritoResult<u32> {
        let badge = Selector::css(sel::CART_BADGE);
        if !self.driver.is_visible(&badge).await? {
            return Ok(0);
        }
        let text = self.driver.get_text(&badge).await?.unwrap_or_default();
        text.trim()
            .parse()
            .map_err(|_| CarritoError::BadgeParse { text })
    }

    /// Open the cart page
    pub async fn click_cart(&self) -> CarritoResult<()> {
        self.driver.click(&Selector::css(sel::CART_LINK)).await
    }

    /// Pick a sort order on the sort dropdown
    pub async fn sort_products(&self, option: SortOption) -> CarritoResult<()> {
        tracing::info!(order = %option, "sorting products");
        self.driver
            .select_option(&Selector::css(sel::SORT_SELECT), option.as_value())
            .await
    }

    /// Displayed price of the exactly-named product
    pub async fn product_price(&self, name: &str) -> CarritoResult<Option<String>> {
        self.driver
            .get_text(&Self::within_item_selector(name, sel::ITEM_PRICE))
            .await
    }

    /// Displayed prices in page order
    pub async fn product_prices(&self) -> CarritoResult<Vec<String>> {
        let prices = self.driver.all_texts(&Selector::css(sel::ITEM_PRICE)).await?;
        Ok(prices
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect())
    }

    fn price_value(text: &str) -> CarritoResult<f64> {
        text.trim()
            .trim_start_matches('$')
            .parse()
            .map_err(|_| CarritoError::Assertion {
                message: format!("price text {text:?} is not a number"),
            })
    }

    /// Assert displayed prices never decrease down the page.
    ///
    /// Prices are parsed numerically after stripping the currency symbol;
    /// unparseable price text is an error, not a pass.
    pub async fn assert_prices_ascending(&self) -> CarritoResult<()> {
        let prices = self.product_prices().await?;
        for pair in prices.windows(2) {
            let (first, second) = (&pair[0], &pair[1]);
            if Self::price_value(second)? < Self::price_value(first)? {
                return Err(CarritoError::Assertion {
                    message: format!("prices out of order: {second} listed after {first}"),
                });
            }
        }
        Ok(())
    }

    /// Click a product name link, first match wins
    pub async fn click_product_name(&self, name: &str) -> CarritoResult<()> {
        self.driver
            .click(&Selector::css_with_text(sel::ITEM_NAME, name))
            .await
    }

    /// Open the burger menu
    pub async fn open_menu(&self) -> CarritoResult<()> {
        self.driver.click(&Selector::css(sel::BURGER_MENU)).await
    }

    /// Log out through the burger menu
    pub async fn logout(&self) -> CarritoResult<()> {
        self.open_menu().await?;
        let logout = Selector::css(sel::LOGOUT_LINK);
        self.driver.wait_for_selector(&logout, None).await?;
        self.driver.click(&logout).await
    }

    /// Assert the cart badge shows `expected`; zero means the badge is hidden
    pub async fn assert_cart_item_count(&self, expected: u32) -> CarritoResult<()> {
        let badge = Selector::css(sel::CART_BADGE);
        if expected == 0 {
            self.driver.wait_for_hidden(&badge, None).await
        } else {
            self.driver
                .assert_exact_text(&badge, &expected.to_string())
                .await
        }
    }

    /// Assert the exactly-named product card is visible
    pub async fn assert_product_visible(&self, name: &str) -> CarritoResult<()> {
        self.driver.assert_visible(&Self::item_selector(name)).await
    }
}
