//! Customer - Customer Directory

use serde::{Deserialize, Serialize};

use crate::table::{CellValue, Column, Record};
use crate::utils::format_rupiah;

/// A registered customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub total_orders: u32,
    /// Lifetime spend in rupiah
    pub total_spent: i64,
    /// ISO date of the latest order (`2023-10-15`)
    pub last_order: String,
    /// `regular`, `vip` or `new`
    #[serde(rename = "type")]
    pub kind: String,
}

impl Record for Customer {
    fn fields(&self) -> Vec<(&str, CellValue)> {
        vec![
            ("id", self.id.into()),
            ("name", self.name.as_str().into()),
            ("phone", self.phone.as_str().into()),
            ("email", self.email.as_str().into()),
            ("address", self.address.as_str().into()),
            ("totalOrders", self.total_orders.into()),
            ("totalSpent", self.total_spent.into()),
            ("lastOrder", self.last_order.as_str().into()),
            ("type", self.kind.as_str().into()),
        ]
    }
}

/// Columns of the customers page
pub fn columns() -> Vec<Column<Customer>> {
    vec![
        Column::new("name", "Customer Name").sortable(),
        Column::new("phone", "Phone").sortable(),
        Column::new("email", "Email").sortable().flex_width(Some(200.0), None),
        Column::new("totalOrders", "Orders").sortable().fixed_width(80.0),
        Column::new("totalSpent", "Total Spent")
            .sortable()
            .cell(|c: &Customer| format_rupiah(c.total_spent)),
        Column::new("type", "Customer Type")
            .sortable()
            .cell(|c: &Customer| c.kind.to_uppercase()),
    ]
}

/// Sample customers
pub fn mock_customers() -> Vec<Customer> {
    let rows = [
        (1, "John Doe", "081234567890", "Jl. Pahlawan No. 123, Jakarta", 8, 2_450_000, "2023-10-15", "regular"),
        (2, "Jane Smith", "082345678901", "Jl. Merdeka No. 45, Bandung", 12, 3_780_000, "2023-10-18", "vip"),
        (3, "Ahmad Fauzi", "083456789012", "Jl. Ahmad Yani No. 67, Surabaya", 3, 850_000, "2023-10-10", "new"),
        (4, "Maria Putri", "084567890123", "Jl. Sudirman No. 89, Makassar", 15, 4_250_000, "2023-10-20", "vip"),
        (5, "Budi Santoso", "085678901234", "Jl. Gatot Subroto No. 12, Yogyakarta", 6, 1_650_000, "2023-10-05", "regular"),
    ];

    rows.into_iter()
        .map(|(id, name, phone, address, total_orders, total_spent, last_order, kind)| Customer {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            address: address.to_string(),
            total_orders,
            total_spent,
            last_order: last_order.to_string(),
            kind: kind.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{RecordSet, TableBody, TableBrowser, TableOptions};

    fn table() -> TableBrowser<Customer> {
        TableBrowser::new(RecordSet::new(mock_customers()), columns(), TableOptions::default())
    }

    #[test]
    fn test_mock_emails() {
        let customers = mock_customers();
        assert_eq!(customers.len(), 5);
        assert_eq!(customers[3].email, "maria.putri@example.com");
    }

    #[test]
    fn test_last_order_date_is_searchable() {
        let mut table = table();
        table.set_search("2023-10-15");
        assert_eq!(table.view().body.row_keys(), vec!["1"]);
    }

    #[test]
    fn test_address_is_searchable_without_a_column() {
        let mut table = table();
        table.set_search("surabaya");
        assert_eq!(table.view().body.row_keys(), vec!["3"]);
    }

    #[test]
    fn test_sort_by_total_spent_descending() {
        let mut table = table();
        table.toggle_sort("totalSpent");
        table.toggle_sort("totalSpent");
        assert_eq!(table.view().body.row_keys(), vec!["4", "2", "1", "5", "3"]);
    }

    #[test]
    fn test_cells_match_customers_page() {
        let mut table = table();
        table.set_search("jane");
        let TableBody::Rows(rows) = table.view().body else {
            panic!("expected one row");
        };
        assert_eq!(
            rows[0].cells,
            vec!["Jane Smith", "082345678901", "jane.smith@example.com", "12", "Rp 3.780.000", "VIP"]
        );
    }
}
