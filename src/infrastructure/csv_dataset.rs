// CSV dataset loader
use crate::domain::record::DairyRecord;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%m/%d/%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to open dataset {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: csv::Error,
    },
}

/// A row as it appears in the file. Columns not listed here are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Product ID", default)]
    product_id: String,
    #[serde(rename = "Product Name")]
    product_name: String,
    #[serde(rename = "Brand")]
    brand: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Sales Channel")]
    sales_channel: String,
    #[serde(rename = "Storage Condition")]
    storage_condition: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Price per Unit")]
    price_per_unit: f64,
    #[serde(rename = "Quantity Sold (liters/kg)")]
    quantity_sold: f64,
    #[serde(rename = "Quantity in Stock (liters/kg)")]
    quantity_in_stock: f64,
    #[serde(rename = "Minimum Stock Threshold (liters/kg)")]
    minimum_stock_threshold: f64,
    #[serde(rename = "Reorder Quantity (liters/kg)")]
    reorder_quantity: f64,
    #[serde(rename = "Shelf Life (days)")]
    shelf_life_days: i64,
    #[serde(rename = "Approx. Total Revenue(INR)")]
    revenue: f64,
}

impl CsvRow {
    fn into_record(self, line: usize) -> DairyRecord {
        let date = parse_date(&self.date);
        if date.is_none() {
            tracing::warn!("Line {}: unparseable date {:?}, treating as missing", line, self.date);
        }

        DairyRecord {
            product_id: self.product_id,
            product_name: self.product_name,
            brand: self.brand,
            location: self.location,
            sales_channel: self.sales_channel,
            storage_condition: self.storage_condition,
            date,
            price_per_unit: self.price_per_unit,
            quantity_sold: self.quantity_sold,
            quantity_in_stock: self.quantity_in_stock,
            minimum_stock_threshold: self.minimum_stock_threshold,
            reorder_quantity: self.reorder_quantity,
            shelf_life_days: self.shelf_life_days,
            revenue: self.revenue,
            year: None,
            month: None,
        }
        .with_derived_dates()
    }
}

/// Parses the date formats seen in exports of this dataset. Anything else is `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Loads dairy records from a CSV reader.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<DairyRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let line = idx + 2;
        let row = result.map_err(|source| DatasetError::Parse { line, source })?;
        records.push(row.into_record(line));
    }

    Ok(records)
}

/// Loads dairy records from a CSV file.
pub fn load_records_file(path: &Path) -> Result<Vec<DairyRecord>, DatasetError> {
    let file = std::fs::File::open(path).map_err(|source| DatasetError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let records = load_records(file)?;

    let undated = records.iter().filter(|r| r.date.is_none()).count();
    tracing::info!(
        "Loaded {} records from {} ({} without a parseable date)",
        records.len(),
        path.display(),
        undated
    );

    Ok(records)
}
