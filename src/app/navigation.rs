//! Navigation - Active Page
//!
//! The admin pages reachable from the sidebar.

use serde::{Deserialize, Serialize};

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePage {
    /// Medicine inventory
    #[default]
    Inventory,
    /// Sales orders
    Orders,
    /// Customer directory
    Customers,
    /// Purchase orders to distributors
    Purchases,
    /// Supplier directory
    Distributors,
}

impl ActivePage {
    /// Sidebar and heading title
    pub fn title(&self) -> &'static str {
        match self {
            ActivePage::Inventory => "Inventory",
            ActivePage::Orders => "Orders",
            ActivePage::Customers => "Customers",
            ActivePage::Purchases => "Purchases",
            ActivePage::Distributors => "Distributors",
        }
    }

    /// Get all available pages for sidebar
    pub fn all() -> &'static [ActivePage] {
        &[
            ActivePage::Inventory,
            ActivePage::Orders,
            ActivePage::Customers,
            ActivePage::Purchases,
            ActivePage::Distributors,
        ]
    }
}
