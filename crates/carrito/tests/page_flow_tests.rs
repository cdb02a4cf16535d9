//! End-to-end flows over the scriptable mock page: login, inventory and
//! cart interactions, and session persistence, without a browser binary.

#![cfg(not(feature = "browser"))]

use carrito::selectors::{inventory as inv_sel, login as login_sel};
use carrito::{
    AuthManager, AuthStatus, Cookie, InventoryPage, LoginPage, MockElement, Page, PageDriver,
    Selector, SortOption, SuiteConfig,
};

const PRODUCTS: [&str; 6] = [
    "Sauce Labs Backpack",
    "Sauce Labs Bike Light",
    "Sauce Labs Bolt T-Shirt",
    "Sauce Labs Fleece Jacket",
    "Sauce Labs Onesie",
    "Test.allTheThings() T-Shirt (Red)",
];

fn suite_config() -> SuiteConfig {
    SuiteConfig::new("https://www.saucedemo.com/", "standard_user", "secret_sauce")
        .with_action_timeout(300)
        .with_navigation_timeout(300)
        .with_assertion_timeout(300)
}

fn script_login_page(page: &Page) {
    page.set_url("https://www.saucedemo.com/");
    page.add_element(MockElement::new(&[login_sel::LOGO]).with_text("Swag Labs"));
    page.add_element(MockElement::new(&[login_sel::USERNAME_INPUT]));
    page.add_element(MockElement::new(&[login_sel::PASSWORD_INPUT]));
    page.add_element(MockElement::new(&[login_sel::LOGIN_BUTTON]).with_text("Login"));
    page.add_element(MockElement::new(&[login_sel::CREDENTIALS_HINT]).with_text(
        "Accepted usernames are:\nstandard_user\nlocked_out_user\nproblem_user",
    ));
}

fn script_inventory_page(page: &Page) {
    page.add_element(MockElement::new(&[inv_sel::PAGE_TITLE]).with_text("Products"));
    page.add_element(MockElement::new(&[inv_sel::INVENTORY_CONTAINER]));
    page.add_element(MockElement::new(&[inv_sel::SORT_SELECT]));
    page.add_element(MockElement::new(&[inv_sel::CART_LINK]));
    page.add_element(MockElement::new(&[inv_sel::BURGER_MENU]));
    for name in PRODUCTS {
        page.add_element(
            MockElement::new(&[inv_sel::INVENTORY_ITEM])
                .with_text(name)
                .with_scope(name),
        );
        page.add_element(MockElement::new(&[inv_sel::ITEM_NAME]).with_text(name));
        page.add_element(
            MockElement::new(&[inv_sel::ADD_TO_CART_BUTTON])
                .with_text("Add to cart")
                .with_scope(name),
        );
        page.add_element(
            MockElement::new(&[inv_sel::REMOVE_BUTTON])
                .with_text("Remove")
                .with_scope(name),
        );
    }
}

#[tokio::test]
async fn test_login_flow_reaches_inventory() {
    let page = Page::default();
    script_login_page(&page);
    script_inventory_page(&page);
    page.navigate_on_click(
        &Selector::css(login_sel::LOGIN_BUTTON),
        "https://www.saucedemo.com/inventory.html",
        Some("Swag Labs"),
    );

    let config = suite_config();
    let driver = PageDriver::new(&page, &config);

    let login = LoginPage::new(driver);
    login.goto().await.unwrap();
    login.assert_loaded().await.unwrap();
    assert_eq!(
        login.available_usernames().await.unwrap(),
        vec!["standard_user", "locked_out_user", "problem_user"]
    );

    login.login("standard_user", "secret_sauce").await.unwrap();

    let inventory = InventoryPage::new(driver);
    inventory.assert_loaded().await.unwrap();
    assert_eq!(
        driver.current_url().await.unwrap(),
        "https://www.saucedemo.com/inventory.html"
    );

    let auth = AuthManager::new(&page, &config);
    assert_eq!(auth.auth_status().await.unwrap(), AuthStatus::Authenticated);
}

#[tokio::test]
async fn test_failed_login_shows_error_and_stays_unauthenticated() {
    let page = Page::default();
    script_login_page(&page);
    // no navigation scripted; the app rejects and renders the error box
    page.add_element(
        MockElement::new(&[login_sel::ERROR_MESSAGE]).with_text(
            "Epic sadface: Username and password do not match any user in this service",
        ),
    );

    let config = suite_config();
    let driver = PageDriver::new(&page, &config);
    let login = LoginPage::new(driver);
    login.login("standard_user", "wrong_password").await.unwrap();
    login
        .assert_error_message("Username and password do not match")
        .await
        .unwrap();

    let auth = AuthManager::new(&page, &config);
    assert_eq!(
        auth.auth_status().await.unwrap(),
        AuthStatus::Unauthenticated
    );
}

#[tokio::test]
async fn test_cart_round_trip_updates_badge() {
    let page = Page::default();
    page.set_url("https://www.saucedemo.com/inventory.html");
    script_inventory_page(&page);

    let config = suite_config();
    let driver = PageDriver::new(&page, &config);
    let inventory = InventoryPage::new(driver);

    assert_eq!(inventory.cart_item_count().await.unwrap(), 0);

    inventory.add_to_cart("Sauce Labs Backpack").await.unwrap();
    inventory.add_to_cart("Sauce Labs Onesie").await.unwrap();
    // the app renders the badge once the cart is non-empty
    page.add_element(MockElement::new(&[inv_sel::CART_BADGE]).with_text("2"));

    assert_eq!(inventory.cart_item_count().await.unwrap(), 2);
    inventory.assert_cart_item_count(2).await.unwrap();

    inventory
        .remove_from_cart("Sauce Labs Onesie")
        .await
        .unwrap();
    page.set_text(inv_sel::CART_BADGE, "1");
    inventory.assert_cart_item_count(1).await.unwrap();

    inventory
        .remove_from_cart("Sauce Labs Backpack")
        .await
        .unwrap();
    page.remove_elements(inv_sel::CART_BADGE);
    inventory.assert_cart_item_count(0).await.unwrap();

    let clicks = page.clicks();
    assert_eq!(clicks.len(), 4);
    assert!(clicks[0].contains("add-to-cart"));
    assert!(clicks[2].contains("remove"));
}

#[tokio::test]
async fn test_exact_name_scoping_never_touches_lookalikes() {
    let page = Page::default();
    page.set_url("https://www.saucedemo.com/inventory.html");
    script_inventory_page(&page);

    let config = suite_config();
    let inventory = InventoryPage::new(PageDriver::new(&page, &config));

    // "Sauce Labs Bolt T-Shirt" must not also hit the (Red) variant
    inventory
        .add_to_cart("Sauce Labs Bolt T-Shirt")
        .await
        .unwrap();
    let clicks = page.clicks();
    assert_eq!(clicks.len(), 1);
    assert!(clicks[0].contains("Sauce Labs Bolt T-Shirt"));
    assert!(!clicks[0].contains("(Red)"));
}

#[tokio::test]
async fn test_sorting_and_product_listing() {
    let page = Page::default();
    page.set_url("https://www.saucedemo.com/inventory.html");
    script_inventory_page(&page);

    let config = suite_config();
    let inventory = InventoryPage::new(PageDriver::new(&page, &config));

    assert_eq!(inventory.product_count().await.unwrap(), PRODUCTS.len());
    assert_eq!(inventory.product_names().await.unwrap(), PRODUCTS);

    inventory
        .sort_products(SortOption::PriceHighToLow)
        .await
        .unwrap();
    assert_eq!(
        page.element_value(inv_sel::SORT_SELECT).as_deref(),
        Some("hilo")
    );
}

#[tokio::test]
async fn test_logout_returns_to_login_page() {
    let page = Page::default();
    page.set_url("https://www.saucedemo.com/inventory.html");
    script_inventory_page(&page);
    page.add_element(MockElement::new(&[inv_sel::LOGOUT_LINK]).with_text("Logout"));
    page.navigate_on_click(
        &Selector::css(inv_sel::LOGOUT_LINK),
        "https://www.saucedemo.com/",
        None,
    );

    let config = suite_config();
    let inventory = InventoryPage::new(PageDriver::new(&page, &config));
    inventory.logout().await.unwrap();

    let auth = AuthManager::new(&page, &config);
    assert_eq!(
        auth.auth_status().await.unwrap(),
        AuthStatus::Unauthenticated
    );
}

#[tokio::test]
async fn test_auth_state_survives_a_fresh_page() {
    let dir = tempfile::tempdir().unwrap();
    let config = suite_config().with_auth_dir(dir.path().join("auth"));

    // first run: authenticate through the UI, then persist
    let page = Page::default();
    script_login_page(&page);
    page.navigate_on_click(
        &Selector::css(login_sel::LOGIN_BUTTON),
        "https://www.saucedemo.com/inventory.html",
        None,
    );
    let auth = AuthManager::new(&page, &config);
    auth.authenticate().await.unwrap();

    page.set_cookies(&[Cookie::new(
        "session-username",
        "standard_user",
        ".saucedemo.com",
    )])
    .await
    .unwrap();
    let path = auth.save_auth_state(None).await.unwrap();
    assert!(path.ends_with("auth/user.json"));

    // second run: a fresh page skips the login form entirely
    let fresh = Page::default();
    fresh.set_url("https://www.saucedemo.com/");
    let fresh_auth = AuthManager::new(&fresh, &config);
    fresh_auth.restore_auth_state(None).await.unwrap();

    let cookies = fresh.cookies().await.unwrap();
    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies[0].name, "session-username");

    fresh.goto("https://www.saucedemo.com/inventory.html")
        .await
        .unwrap();
    assert!(fresh_auth.is_authenticated().await.unwrap());
}
