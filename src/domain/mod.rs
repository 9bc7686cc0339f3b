//! Domain - Pharmacy Records
//!
//! Plain data types for the admin pages. None of them depend on GPUI.

pub mod customer;
pub mod distributor;
pub mod medicine;
pub mod order;
pub mod purchase;

pub use customer::Customer;
pub use distributor::Distributor;
pub use medicine::{Medicine, NewMedicine, StockStatus};
pub use order::Order;
pub use purchase::Purchase;
