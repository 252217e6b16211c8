//! View handlers.
//!
//! Each handler is a pure function from a [`ViewContext`] (the filtered records,
//! the same records as a frame, and render settings) to the ordered blocks of its
//! page. An empty record slice renders charts with empty data tables; the only
//! failure is an aggregation error from the frame.

pub mod demand;
pub mod inventory;
pub mod overview;
pub mod sales;

pub use crate::domain::columns::*;

use crate::domain::aggregate::{HierarchyNode, MonthlyTotal};
use crate::domain::chart::{Cell, Table, Tile};
use crate::domain::kpi::{format_inr, KpiSummary};
use crate::domain::record::{month_name, DairyRecord};
use polars::prelude::{DataFrame, PolarsResult};
use std::path::PathBuf;

/// Render settings shared by every view.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub image_path: PathBuf,
    pub image_url: String,
    pub geojson_url: String,
    pub name_key: String,
    pub color_range_max: f64,
}

/// Everything a view handler reads.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub records: &'a [DairyRecord],
    pub frame: &'a DataFrame,
    pub settings: &'a ViewSettings,
}

pub type ViewResult = PolarsResult<Vec<crate::domain::dashboard::Block>>;

/// The four KPI cards.
pub fn kpi_tiles(summary: &KpiSummary) -> Vec<Tile> {
    vec![
        Tile::new(
            "total-products",
            "Total Products",
            "",
            Some(summary.distinct_product_count as f64),
            0,
            summary.distinct_product_count.to_string(),
        ),
        Tile::new(
            "total-revenue",
            "Total Revenue (INR)",
            "INR",
            Some(summary.total_revenue),
            2,
            format_inr(summary.total_revenue),
        ),
        Tile::new(
            "avg-price",
            "Avg Price per Unit (INR)",
            "INR",
            summary.avg_unit_price,
            2,
            summary
                .avg_unit_price
                .map(|p| format!("₹{:.2}", p))
                .unwrap_or_else(|| "n/a".to_string()),
        ),
        Tile::new(
            "total-quantity",
            "Total Quantity Sold (liters/kg)",
            "liters/kg",
            Some(summary.total_quantity),
            2,
            summary.total_quantity.to_string(),
        ),
    ]
}

/// Two-column table of `(label, value)` groups.
pub fn groups_table<K: AsRef<str>>(label: &str, value: &str, groups: &[(K, f64)]) -> Table {
    let mut table = Table::new([label, value]);
    for (k, v) in groups {
        table.push_row(vec![k.as_ref().into(), (*v).into()]);
    }
    table
}

/// Monthly totals with year, month name and month number columns, in the
/// incoming (chronological) order. `label` adds a formatted text column.
pub fn monthly_table(
    value: &str,
    totals: &[MonthlyTotal],
    label: Option<fn(f64) -> String>,
) -> Table {
    let mut columns = vec![YEAR, MONTH_NAME, MONTH, value];
    if label.is_some() {
        columns.push("Label");
    }
    let mut table = Table::new(columns);
    for t in totals {
        let mut row = vec![
            Cell::Integer(t.year as i64),
            month_name(t.month).into(),
            Cell::Integer(t.month as i64),
            t.value.into(),
        ];
        if let Some(format) = label {
            row.push(format(t.value).into());
        }
        table.push_row(row);
    }
    table
}

/// Sunburst nodes as `id, label, parent, value` rows.
pub fn hierarchy_table(value: &str, nodes: &[HierarchyNode]) -> Table {
    let mut table = Table::new(["id", "label", "parent", value]);
    for node in nodes {
        table.push_row(vec![
            node.id.as_str().into(),
            node.label.as_str().into(),
            node.parent.clone().into(),
            node.value.into(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kpi::summarize;
    use crate::test_support::frame;

    #[test]
    fn test_kpi_tiles_display_strings() {
        let summary = KpiSummary {
            distinct_product_count: 3,
            total_revenue: 1234567.5,
            avg_unit_price: Some(54.321),
            total_quantity: 4200.0,
        };
        let tiles = kpi_tiles(&summary);
        let displays: Vec<&str> = tiles.iter().map(|t| t.display.as_str()).collect();
        assert_eq!(displays, vec!["3", "₹1,234,567.50", "₹54.32", "4200"]);
    }

    #[test]
    fn test_kpi_tiles_on_empty_subset() {
        let tiles = kpi_tiles(&summarize(&frame(&[])).unwrap());
        assert_eq!(tiles[1].display, "₹0.00");
        assert_eq!(tiles[2].value, None);
        assert_eq!(tiles[2].display, "n/a");
        assert_eq!(tiles[3].display, "0");
    }

    #[test]
    fn test_monthly_table_labels() {
        let totals = vec![MonthlyTotal {
            year: 2023,
            month: 12,
            value: 1500.0,
        }];
        let table = monthly_table(REVENUE, &totals, Some(format_inr));
        assert_eq!(table.columns, vec![YEAR, MONTH_NAME, MONTH, REVENUE, "Label"]);
        assert_eq!(
            table.rows[0],
            vec![
                Cell::Integer(2023),
                Cell::Text("Dec".to_string()),
                Cell::Integer(12),
                Cell::Number(1500.0),
                Cell::Text("₹1,500.00".to_string()),
            ]
        );
    }
}
