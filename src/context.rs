//! Application Context
//!
//! Navigation state provided via Leptos Context API. The only thing the two
//! screens share is the product id carried by a forward navigation.

use leptos::prelude::*;

use crate::models::ProductSummary;

/// Which screen is on top of the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Catalog,
    Detail { product_id: u32 },
}

impl Screen {
    /// Forward target for a tapped catalog row
    pub fn for_product(product: &ProductSummary) -> Self {
        Screen::Detail { product_id: product.id }
    }

    /// Where the back control leads
    pub fn back(self) -> Self {
        Screen::Catalog
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub screen: ReadSignal<Screen>,
    /// Current screen - write
    set_screen: WriteSignal<Screen>,
}

impl AppContext {
    pub fn new(screen: (ReadSignal<Screen>, WriteSignal<Screen>)) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
        }
    }

    /// Navigate forward to the detail screen of one product
    pub fn open_product(&self, product: &ProductSummary) {
        self.set_screen.set(Screen::for_product(product));
    }

    /// Pop back to the catalog
    pub fn back(&self) {
        self.set_screen.update(|s| *s = s.back());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactive_graph::owner::Owner;

    fn product(id: u32) -> ProductSummary {
        ProductSummary {
            id,
            title: format!("Product {}", id),
            brand: None,
            thumbnail: String::new(),
            price: 1.0,
            discount_percentage: 0.0,
            rating: 0.0,
        }
    }

    #[test]
    fn test_each_row_navigates_with_its_own_id() {
        let rows = vec![product(30), product(4), product(17)];
        let targets: Vec<Screen> = rows.iter().map(Screen::for_product).collect();
        assert_eq!(
            targets,
            vec![
                Screen::Detail { product_id: 30 },
                Screen::Detail { product_id: 4 },
                Screen::Detail { product_id: 17 },
            ]
        );
    }

    #[test]
    fn test_context_follows_navigation() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::new(signal(Screen::Catalog));

        ctx.open_product(&product(5));
        assert_eq!(ctx.screen.get_untracked(), Screen::Detail { product_id: 5 });

        ctx.back();
        assert_eq!(ctx.screen.get_untracked(), Screen::Catalog);
    }

    #[test]
    fn test_back_returns_to_catalog() {
        assert_eq!(Screen::Detail { product_id: 9 }.back(), Screen::Catalog);
        assert_eq!(Screen::Catalog.back(), Screen::Catalog);
    }
}
