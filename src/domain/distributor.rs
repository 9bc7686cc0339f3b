//! Distributor - Supplier Directory

use serde::{Deserialize, Serialize};

use crate::table::{CellValue, Column, Record};
use crate::utils::capitalize;

/// A medicine supplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distributor {
    pub id: u32,
    pub name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// `active`, `inactive` or `pending`
    pub status: String,
    pub total_purchases: u32,
    /// ISO date, or `-` before the first purchase
    pub last_purchase: String,
}

impl Record for Distributor {
    fn fields(&self) -> Vec<(&str, CellValue)> {
        vec![
            ("id", self.id.into()),
            ("name", self.name.as_str().into()),
            ("contactName", self.contact_name.as_str().into()),
            ("phone", self.phone.as_str().into()),
            ("email", self.email.as_str().into()),
            ("address", self.address.as_str().into()),
            ("status", self.status.as_str().into()),
            ("totalPurchases", self.total_purchases.into()),
            ("lastPurchase", self.last_purchase.as_str().into()),
        ]
    }
}

/// Columns of the distributors page
pub fn columns() -> Vec<Column<Distributor>> {
    vec![
        Column::new("name", "Distributor Name").sortable().flex_width(Some(180.0), None),
        Column::new("contactName", "Contact Person").sortable(),
        Column::new("phone", "Phone").sortable(),
        Column::new("email", "Email").sortable().flex_width(Some(200.0), None),
        Column::new("totalPurchases", "Orders").sortable().fixed_width(80.0),
        Column::new("status", "Status")
            .sortable()
            .cell(|d: &Distributor| capitalize(&d.status)),
    ]
}

/// Sample distributors
pub fn mock_distributors() -> Vec<Distributor> {
    let rows = [
        (1, "PharmaCorp Inc.", "David Johnson", "021-5557890", "contact@pharmacorp.com", "Jl. Industri Farmasi No. 45, Jakarta Utara", "active", 15, "2023-10-15"),
        (2, "MediSupply Co.", "Sarah Williams", "021-5558901", "info@medisupply.co.id", "Jl. Gatot Subroto Km. 5, Jakarta Selatan", "active", 8, "2023-10-18"),
        (3, "HealthDrug Distributors", "Michael Chen", "022-4446789", "orders@healthdrug.com", "Jl. Pasteur No. 123, Bandung", "inactive", 5, "2023-09-30"),
        (4, "GlobalMed Supplies", "Linda Kusuma", "031-8889012", "sales@globalmed.co.id", "Jl. Raya Darmo No. 56, Surabaya", "active", 12, "2023-10-10"),
        (5, "PharmaPlus Distribution", "Robert Tanaka", "024-7778901", "contact@pharmaplus.com", "Jl. Pandanaran No. 78, Semarang", "pending", 0, "-"),
    ];

    rows.into_iter()
        .map(
            |(id, name, contact_name, phone, email, address, status, total_purchases, last_purchase)| Distributor {
                id,
                name: name.to_string(),
                contact_name: contact_name.to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
                address: address.to_string(),
                status: status.to_string(),
                total_purchases,
                last_purchase: last_purchase.to_string(),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{RecordSet, TableBody, TableBrowser, TableOptions};

    fn table() -> TableBrowser<Distributor> {
        TableBrowser::new(RecordSet::new(mock_distributors()), columns(), TableOptions::default())
    }

    #[test]
    fn test_search_by_contact_person() {
        let mut table = table();
        table.set_search("kusuma");
        assert_eq!(table.view().body.row_keys(), vec!["4"]);
    }

    #[test]
    fn test_search_by_city_in_address() {
        let mut table = table();
        table.set_search("jakarta");
        assert_eq!(table.view().body.row_keys(), vec!["1", "2"]);
    }

    #[test]
    fn test_sort_by_orders_descending() {
        let mut table = table();
        table.toggle_sort("totalPurchases");
        table.toggle_sort("totalPurchases");
        assert_eq!(table.view().body.row_keys(), vec!["1", "4", "2", "3", "5"]);
    }

    #[test]
    fn test_status_cell_is_capitalized() {
        let mut table = table();
        table.set_search("pharmaplus");
        let TableBody::Rows(rows) = table.view().body else {
            panic!("expected one row");
        };
        assert_eq!(rows[0].cells[5], "Pending");
        assert_eq!(rows[0].cells[4], "0");
    }
}
