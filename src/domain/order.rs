//! Order - Sales Orders

use serde::{Deserialize, Serialize};

use crate::table::{CellValue, Column, Record};
use crate::utils::{capitalize, format_rupiah};

/// A customer order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u32,
    pub order_number: String,
    pub customer: String,
    /// ISO date (`2023-10-15`)
    pub date: String,
    pub items: u32,
    /// Amount in rupiah
    pub total: i64,
    /// `completed`, `processing`, `pending` or `cancelled`
    pub status: String,
    /// `cash`, `transfer` or `credit`
    pub payment_method: String,
}

impl Record for Order {
    fn fields(&self) -> Vec<(&str, CellValue)> {
        vec![
            ("id", self.id.into()),
            ("orderNumber", self.order_number.as_str().into()),
            ("customer", self.customer.as_str().into()),
            ("date", self.date.as_str().into()),
            ("items", self.items.into()),
            ("total", self.total.into()),
            ("status", self.status.as_str().into()),
            ("paymentMethod", self.payment_method.as_str().into()),
        ]
    }
}

/// Columns of the orders page
pub fn columns() -> Vec<Column<Order>> {
    vec![
        Column::new("orderNumber", "Order #").sortable(),
        Column::new("customer", "Customer").sortable(),
        Column::new("date", "Order Date").sortable(),
        Column::new("items", "Items").sortable().fixed_width(70.0),
        Column::new("total", "Total Amount")
            .sortable()
            .cell(|o: &Order| format_rupiah(o.total)),
        Column::new("status", "Status")
            .sortable()
            .cell(|o: &Order| capitalize(&o.status)),
        Column::new("paymentMethod", "Payment Method")
            .sortable()
            .cell(|o: &Order| capitalize(&o.payment_method)),
    ]
}

/// Sample orders
pub fn mock_orders() -> Vec<Order> {
    let rows = [
        (1, "John Doe", "2023-10-15", 3, 450_000, "completed", "cash"),
        (2, "Jane Smith", "2023-10-18", 2, 275_000, "processing", "transfer"),
        (3, "Robert Johnson", "2023-10-20", 5, 820_000, "pending", "credit"),
        (4, "Maria Putri", "2023-10-21", 1, 65_000, "completed", "cash"),
        (5, "Budi Santoso", "2023-10-22", 4, 390_000, "cancelled", "transfer"),
        (6, "Ahmad Fauzi", "2023-10-23", 2, 150_000, "completed", "credit"),
    ];

    rows.into_iter()
        .map(|(id, customer, date, items, total, status, payment_method)| Order {
            id,
            order_number: format!("ORD-2023-{id:04}"),
            customer: customer.to_string(),
            date: date.to_string(),
            items,
            total,
            status: status.to_string(),
            payment_method: payment_method.to_string(),
        })
        .collect()
}
