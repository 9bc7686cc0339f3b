//! Medicine - Inventory Records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::LOW_STOCK_THRESHOLD;
use crate::error::{Error, Result};
use crate::table::{CellValue, Column, Record, RecordSet};
use crate::utils::format_short_date;

/// Stock level bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Bucket for a stock count
    pub fn from_stock(stock: i64) -> Self {
        if stock <= 0 {
            StockStatus::OutOfStock
        } else if stock <= LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Raw value as stored (`in-stock`)
    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    /// Badge label (`In Stock`)
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// One inventory line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub stock: i64,
    /// Display price including currency sign (`$5.99`)
    pub price: String,
    pub supplier: String,
    pub expiry: NaiveDate,
    pub status: StockStatus,
}

impl Medicine {
    /// Numeric part of the price, if it parses
    pub fn price_amount(&self) -> Option<f64> {
        self.price.trim_start_matches('$').parse().ok()
    }
}

impl Record for Medicine {
    fn fields(&self) -> Vec<(&str, CellValue)> {
        vec![
            ("id", self.id.into()),
            ("name", self.name.as_str().into()),
            ("category", self.category.as_str().into()),
            ("stock", self.stock.into()),
            ("price", self.price.as_str().into()),
            ("supplier", self.supplier.as_str().into()),
            // ISO text so it stays searchable and sorts chronologically
            ("expiry", self.expiry.format("%Y-%m-%d").to_string().into()),
            ("status", self.status.as_str().into()),
        ]
    }

    fn field(&self, name: &str) -> Option<CellValue> {
        let value = match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "category" => self.category.as_str().into(),
            "stock" => self.stock.into(),
            "price" => self.price.as_str().into(),
            "supplier" => self.supplier.as_str().into(),
            "expiry" => self.expiry.format("%Y-%m-%d").to_string().into(),
            "status" => self.status.as_str().into(),
            _ => return None,
        };
        Some(value)
    }
}

/// Columns of the inventory page
pub fn columns() -> Vec<Column<Medicine>> {
    vec![
        Column::new("name", "Name").sortable().flex_width(Some(180.0), None),
        Column::new("category", "Category").sortable(),
        Column::new("stock", "Stock").sortable().fixed_width(90.0),
        Column::new("price", "Price")
            .sortable()
            .fixed_width(90.0)
            .value(|m: &Medicine| m.price_amount().into())
            .cell(|m: &Medicine| m.price.clone()),
        Column::new("supplier", "Supplier").sortable(),
        Column::new("expiry", "Expiry Date")
            .sortable()
            .cell(|m: &Medicine| format_short_date(&m.expiry)),
        Column::new("status", "Status")
            .sortable()
            .cell(|m: &Medicine| m.status.label().to_string()),
    ]
}

/// Form input for a new inventory line. Every field arrives as typed text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMedicine {
    pub name: String,
    pub category: String,
    pub stock: String,
    pub price: String,
    pub supplier: String,
    pub expiry: String,
}

impl NewMedicine {
    /// Validate the form and build the record
    pub fn validate(&self, id: u32) -> Result<Medicine> {
        let required = [
            ("name", &self.name),
            ("category", &self.category),
            ("stock", &self.stock),
            ("price", &self.price),
            ("supplier", &self.supplier),
            ("expiry", &self.expiry),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(Error::MissingField { field });
        }

        let stock: i64 = self.stock.trim().parse().map_err(|e| Error::Invalid {
            message: format!("Stock must be a whole number: {e}"),
        })?;

        let expiry = NaiveDate::parse_from_str(self.expiry.trim(), "%Y-%m-%d").map_err(|e| {
            Error::Invalid {
                message: format!("Expiry must be YYYY-MM-DD: {e}"),
            }
        })?;

        let price = self.price.trim();
        let price = if price.starts_with('$') {
            price.to_string()
        } else {
            format!("${price}")
        };

        Ok(Medicine {
            id,
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            stock,
            price,
            supplier: self.supplier.trim().to_string(),
            expiry,
            status: StockStatus::from_stock(stock),
        })
    }
}

/// Validate a form and put the new medicine at the top of the inventory
pub fn add_medicine(inventory: &mut RecordSet<Medicine>, form: &NewMedicine) -> Result<u32> {
    let id = u32::try_from(inventory.len() + 1).map_err(|_| Error::Invalid {
        message: "Inventory is full".to_string(),
    })?;
    let medicine = form.validate(id)?;
    info!(id, name = %medicine.name, status = medicine.status.as_str(), "Medicine added");
    inventory.push_front(medicine);
    Ok(id)
}

fn medicine(
    id: u32,
    name: &str,
    category: &str,
    stock: i64,
    price: &str,
    supplier: &str,
    expiry: (i32, u32, u32),
) -> Option<Medicine> {
    Some(Medicine {
        id,
        name: name.to_string(),
        category: category.to_string(),
        stock,
        price: price.to_string(),
        supplier: supplier.to_string(),
        expiry: NaiveDate::from_ymd_opt(expiry.0, expiry.1, expiry.2)?,
        status: StockStatus::from_stock(stock),
    })
}

/// Sample inventory
pub fn mock_medicines() -> Vec<Medicine> {
    const MEDI: &str = "MediSupply Inc.";
    const WHOLESALE: &str = "PharmaWholesale Ltd.";
    const CARE: &str = "MediCare Distributions";

    [
        medicine(1, "Paracetamol 500mg", "Pain Relief", 250, "$5.99", MEDI, (2025, 6, 15)),
        medicine(2, "Amoxicillin 250mg", "Antibiotics", 120, "$12.50", WHOLESALE, (2024, 11, 30)),
        medicine(3, "Cetirizine 10mg", "Antihistamines", 15, "$8.75", MEDI, (2024, 8, 22)),
        medicine(4, "Ibuprofen 400mg", "Pain Relief", 200, "$6.49", WHOLESALE, (2025, 3, 10)),
        medicine(5, "Omeprazole 20mg", "Gastrointestinal", 0, "$15.25", CARE, (2024, 12, 5)),
        medicine(6, "Loratadine 10mg", "Antihistamines", 85, "$9.99", MEDI, (2025, 2, 18)),
        medicine(7, "Aspirin 75mg", "Pain Relief", 10, "$4.50", WHOLESALE, (2024, 9, 30)),
        medicine(8, "Simvastatin 20mg", "Cardiovascular", 65, "$18.75", CARE, (2025, 1, 15)),
        medicine(9, "Metformin 500mg", "Diabetes", 45, "$11.25", MEDI, (2024, 10, 8)),
        medicine(10, "Tramadol 50mg", "Pain Relief", 0, "$14.99", WHOLESALE, (2024, 11, 22)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{TableBody, TableBrowser, TableOptions};

    fn form() -> NewMedicine {
        NewMedicine {
            name: "Diclofenac 50mg".into(),
            category: "Pain Relief".into(),
            stock: "18".into(),
            price: "7.25".into(),
            supplier: "MediSupply Inc.".into(),
            expiry: "2025-09-01".into(),
        }
    }

    #[test]
    fn test_stock_status_thresholds() {
        assert_eq!(StockStatus::from_stock(-1), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_stock(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_stock(20), StockStatus::LowStock);
        assert_eq!(StockStatus::from_stock(21), StockStatus::InStock);
    }

    #[test]
    fn test_mock_inventory_is_complete() {
        let medicines = mock_medicines();
        assert_eq!(medicines.len(), 10);
        assert_eq!(medicines[4].status, StockStatus::OutOfStock);
    }

    #[test]
    fn test_validate_builds_record() {
        let medicine = form().validate(11).expect("valid form");
        assert_eq!(medicine.price, "$7.25");
        assert_eq!(medicine.status, StockStatus::LowStock);
        assert_eq!(medicine.field("expiry"), Some(CellValue::from("2025-09-01")));
    }

    #[test]
    fn test_validate_reports_missing_field() {
        let mut input = form();
        input.supplier = "  ".into();
        assert!(matches!(
            input.validate(1),
            Err(Error::MissingField { field: "supplier" })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_numbers_and_dates() {
        let mut input = form();
        input.stock = "many".into();
        assert!(matches!(input.validate(1), Err(Error::Invalid { .. })));

        let mut input = form();
        input.expiry = "15/06/2025".into();
        assert!(matches!(input.validate(1), Err(Error::Invalid { .. })));
    }

    #[test]
    fn test_add_medicine_prepends() {
        let mut inventory = RecordSet::new(mock_medicines());
        let id = add_medicine(&mut inventory, &form()).expect("added");
        assert_eq!(id, 11);
        assert_eq!(inventory.len(), 11);
        assert_eq!(inventory.get(0).map(|m| m.name.as_str()), Some("Diclofenac 50mg"));
    }

    #[test]
    fn test_price_column_sorts_numerically() {
        let mut table = TableBrowser::new(
            RecordSet::new(mock_medicines()),
            columns(),
            TableOptions::default().pagination(false),
        );
        table.toggle_sort("price");
        let prices: Vec<String> = table.visible_rows().iter().map(|m| m.price.clone()).collect();
        assert_eq!(prices.first().map(String::as_str), Some("$4.50"));
        assert_eq!(prices.last().map(String::as_str), Some("$18.75"));
    }

    #[test]
    fn test_inventory_cells_use_renderers() {
        let mut table = TableBrowser::new(RecordSet::new(mock_medicines()), columns(), TableOptions::default());
        table.set_search("omeprazole");
        let TableBody::Rows(rows) = table.view().body else {
            panic!("expected one row");
        };
        assert_eq!(rows[0].key, "5");
        assert_eq!(
            rows[0].cells,
            vec!["Omeprazole 20mg", "Gastrointestinal", "0", "$15.25", "MediCare Distributions", "12/5/2024", "Out of Stock"]
        );
    }
}
