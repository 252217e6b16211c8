// KPI summary over a record subset
use super::columns::{PRICE, PRODUCT, QUANTITY_SOLD, REVENUE};
use num_format::{Locale, ToFormattedString};
use polars::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    pub distinct_product_count: usize,
    pub total_revenue: f64,
    /// `None` when the subset has no usable price.
    pub avg_unit_price: Option<f64>,
    pub total_quantity: f64,
}

/// Summarizes a record frame. Nulls (missing or non-finite inputs) are skipped.
pub fn summarize(frame: &DataFrame) -> PolarsResult<KpiSummary> {
    let out = frame
        .clone()
        .lazy()
        .select([
            col(PRODUCT).n_unique().cast(DataType::UInt64).alias("products"),
            col(REVENUE).sum().alias("revenue"),
            col(PRICE).mean().alias("price"),
            col(QUANTITY_SOLD).sum().alias("quantity"),
        ])
        .collect()?;

    Ok(KpiSummary {
        distinct_product_count: out.column("products")?.u64()?.get(0).unwrap_or(0) as usize,
        total_revenue: out.column("revenue")?.f64()?.get(0).unwrap_or(0.0),
        avg_unit_price: out.column("price")?.f64()?.get(0),
        total_quantity: out.column("quantity")?.f64()?.get(0).unwrap_or(0.0),
    })
}

/// Formats an amount as rupees with thousands separators, e.g. `₹1,234,567.89`.
pub fn format_inr(amount: f64) -> String {
    format!("₹{}", format_grouped(amount, 2))
}

/// Formats a number with en-locale thousands separators and a fixed number of decimals.
pub fn format_grouped(value: f64, precision: usize) -> String {
    let rounded = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rounded.as_str(), None),
    };
    let grouped = int_part
        .parse::<u64>()
        .map(|n| n.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| int_part.to_string());
    let sign = if value < 0.0 && rounded.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}
