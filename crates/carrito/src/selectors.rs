//! Selector registries, one per page.
//!
//! Each registry is a static read-only mapping from a semantic element name
//! to a locator string. Keys are unique within a page; there is no
//! cross-page lookup. Callers that reference a selector for an element the
//! page does not render fail at the point of use, not here.

/// Login page selectors
pub mod login {
    /// Username input field
    pub const USERNAME_INPUT: &str = r#"[data-test="username"]"#;
    /// Password input field
    pub const PASSWORD_INPUT: &str = r#"[data-test="password"]"#;
    /// Login submit button
    pub const LOGIN_BUTTON: &str = r#"[data-test="login-button"]"#;
    /// Error message container
    pub const ERROR_MESSAGE: &str = r#"[data-test="error"]"#;
    /// Error dismiss button
    pub const ERROR_BUTTON: &str = ".error-button";
    /// Application logo
    pub const LOGO: &str = ".login_logo";
    /// Bot mascot image column
    pub const BOT_IMAGE: &str = ".bot_column";
    /// Login form container
    pub const LOGIN_CONTAINER: &str = ".login_container";
    /// Login form box
    pub const LOGIN_FORM: &str = ".login-box";
    /// Accepted-usernames hint block shown on the demo login page
    pub const CREDENTIALS_HINT: &str = "#login_credentials";
}

/// Inventory (products) page selectors
pub mod inventory {
    /// Page title heading
    pub const PAGE_TITLE: &str = ".title";
    /// Application logo in the header
    pub const APP_LOGO: &str = ".app_logo";
    /// Inventory container
    pub const INVENTORY_CONTAINER: &str = ".inventory_container";
    /// Product list
    pub const INVENTORY_LIST: &str = ".inventory_list";
    /// Single product card
    pub const INVENTORY_ITEM: &str = ".inventory_item";
    /// Product name within a card
    pub const ITEM_NAME: &str = ".inventory_item_name";
    /// Product description within a card
    pub const ITEM_DESC: &str = ".inventory_item_desc";
    /// Product price within a card
    pub const ITEM_PRICE: &str = ".inventory_item_price";
    /// Product image within a card
    pub const ITEM_IMG: &str = ".inventory_item_img";
    /// Add-to-cart button within a card
    pub const ADD_TO_CART_BUTTON: &str = r#"[data-test^="add-to-cart"]"#;
    /// Remove-from-cart button within a card
    pub const REMOVE_BUTTON: &str = r#"[data-test^="remove"]"#;
    /// Shopping cart link in the header
    pub const CART_LINK: &str = ".shopping_cart_link";
    /// Shopping cart badge (hidden when the cart is empty)
    pub const CART_BADGE: &str = ".shopping_cart_badge";
    /// Product sort dropdown
    pub const SORT_SELECT: &str = ".product_sort_container";
    /// Burger menu button
    pub const BURGER_MENU: &str = "#react-burger-menu-btn";
    /// Logout link inside the burger menu
    pub const LOGOUT_LINK: &str = "#logout_sidebar_link";
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    #[test]
    fn test_login_selectors_are_distinct() {
        let all = [
            super::login::USERNAME_INPUT,
            super::login::PASSWORD_INPUT,
            super::login::LOGIN_BUTTON,
            super::login::ERROR_MESSAGE,
            super::login::ERROR_BUTTON,
            super::login::LOGO,
            super::login::BOT_IMAGE,
            super::login::LOGIN_CONTAINER,
            super::login::LOGIN_FORM,
            super::login::CREDENTIALS_HINT,
        ];
        let set: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(set.len(), all.len());
    }

    #[test]
    fn test_inventory_selectors_are_distinct() {
        let all = [
            super::inventory::PAGE_TITLE,
            super::inventory::APP_LOGO,
            super::inventory::INVENTORY_CONTAINER,
            super::inventory::INVENTORY_LIST,
            super::inventory::INVENTORY_ITEM,
            super::inventory::ITEM_NAME,
            super::inventory::ITEM_DESC,
            super::inventory::ITEM_PRICE,
            super::inventory::ITEM_IMG,
            super::inventory::ADD_TO_CART_BUTTON,
            super::inventory::REMOVE_BUTTON,
            super::inventory::CART_LINK,
            super::inventory::CART_BADGE,
            super::inventory::SORT_SELECT,
            super::inventory::BURGER_MENU,
            super::inventory::LOGOUT_LINK,
        ];
        let set: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(set.len(), all.len());
    }
}
