//! Purchase - Purchase Orders to Distributors

use serde::{Deserialize, Serialize};

use crate::table::{CellValue, Column, Record};
use crate::utils::{capitalize, format_rupiah};

/// A purchase order placed with a distributor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: u32,
    /// `PO-2023-0001`
    pub invoice: String,
    pub distributor: String,
    /// ISO date
    pub date: String,
    /// Amount in rupiah
    pub total: i64,
    /// `completed`, `processing` or `pending`
    pub status: String,
    pub payment_method: String,
}

impl Record for Purchase {
    fn fields(&self) -> Vec<(&str, CellValue)> {
        vec![
            ("id", self.id.into()),
            ("invoice", self.invoice.as_str().into()),
            ("distributor", self.distributor.as_str().into()),
            ("date", self.date.as_str().into()),
            ("total", self.total.into()),
            ("status", self.status.as_str().into()),
            ("paymentMethod", self.payment_method.as_str().into()),
        ]
    }
}

/// Columns of the purchases page
pub fn columns() -> Vec<Column<Purchase>> {
    vec![
        Column::new("invoice", "Invoice Number").sortable(),
        Column::new("distributor", "Distributor").sortable().flex_width(Some(180.0), None),
        Column::new("date", "Purchase Date").sortable(),
        Column::new("total", "Total Amount")
            .sortable()
            .cell(|p: &Purchase| format_rupiah(p.total)),
        Column::new("status", "Status")
            .sortable()
            .cell(|p: &Purchase| capitalize(&p.status)),
        Column::new("paymentMethod", "Payment Method")
            .sortable()
            .cell(|p: &Purchase| capitalize(&p.payment_method)),
    ]
}

/// Sample purchase orders
pub fn mock_purchases() -> Vec<Purchase> {
    let rows = [
        (1, "PharmaCorp Inc.", "2023-10-15", 4_500_000, "completed", "transfer"),
        (2, "MediSupply Co.", "2023-10-18", 2_750_000, "processing", "credit"),
        (3, "HealthDrug Distributors", "2023-10-20", 6_200_000, "pending", "transfer"),
        (4, "PharmaCorp Inc.", "2023-10-23", 1_850_000, "completed", "cash"),
        (5, "GlobalMed Supplies", "2023-10-25", 3_200_000, "processing", "credit"),
    ];

    rows.into_iter()
        .map(|(id, distributor, date, total, status, payment_method)| Purchase {
            id,
            invoice: format!("PO-2023-{id:04}"),
            distributor: distributor.to_string(),
            date: date.to_string(),
            total,
            status: status.to_string(),
            payment_method: payment_method.to_string(),
        })
        .collect()
}
