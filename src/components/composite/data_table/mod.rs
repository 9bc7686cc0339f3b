//! DataTable Component Module

mod data_table;
mod pagination;

pub use data_table::{DataTable, data_table};
pub use pagination::Pagination;
