// Dairy sales record domain model
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One row of the dairy dataset. Year and month are derived from `date` once,
/// when the record is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DairyRecord {
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    pub location: String,
    pub sales_channel: String,
    pub storage_condition: String,
    pub date: Option<NaiveDate>,
    pub price_per_unit: f64,
    pub quantity_sold: f64,
    pub quantity_in_stock: f64,
    pub minimum_stock_threshold: f64,
    pub reorder_quantity: f64,
    pub shelf_life_days: i64,
    pub revenue: f64,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl DairyRecord {
    /// Fills in the derived `year` and `month` from `date`.
    pub fn with_derived_dates(mut self) -> Self {
        self.year = self.date.map(|d| d.year());
        self.month = self.date.map(|d| d.month());
        self
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity_in_stock < self.minimum_stock_threshold
    }
}

/// Short English month name for a month number (1-12).
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
}

/// Month names in calendar order, used as a category order on trend axes.
pub fn month_names() -> Vec<String> {
    MONTH_NAMES.iter().map(|m| m.to_string()).collect()
}
