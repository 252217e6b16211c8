// Inventory & stock page
use super::*;
use crate::domain::aggregate::{group_range, hierarchy, low_stock};
use crate::domain::chart::{Aggregation, ChartKind, ChartOptions, ChartSpec};
use crate::domain::dashboard::Block;
use polars::prelude::DataFrame;
use std::collections::HashMap;

pub fn render(ctx: &ViewContext) -> ViewResult {
    Ok(vec![
        Block::heading("🚨Low Stock Alerts"),
        Block::Table {
            id: "low-stock".to_string(),
            title: "Low Stock Alerts".to_string(),
            table: low_stock_table(ctx.records),
        },
        Block::heading("📊 Product Shelf Life Distribution"),
        Block::Chart {
            spec: shelf_life(ctx.records),
        },
        Block::heading("🌞 Storage Condition Across Products"),
        Block::Chart {
            spec: storage_conditions(ctx.frame)?,
        },
        Block::heading("📊 Reorder Quantity by Product"),
        Block::Chart {
            spec: reorder_quantities(ctx.records, ctx.frame)?,
        },
    ])
}

/// Records whose stock is strictly below their minimum threshold.
pub fn low_stock_table(records: &[DairyRecord]) -> Table {
    let mut table = Table::new([
        LOCATION,
        PRODUCT_ID,
        PRODUCT,
        BRAND,
        QUANTITY_IN_STOCK,
        MIN_THRESHOLD,
    ]);
    for r in low_stock(records) {
        table.push_row(vec![
            r.location.as_str().into(),
            r.product_id.as_str().into(),
            r.product_name.as_str().into(),
            r.brand.as_str().into(),
            r.quantity_in_stock.into(),
            r.minimum_stock_threshold.into(),
        ]);
    }
    table
}

/// One point per record: shelf life against product.
pub fn shelf_life(records: &[DairyRecord]) -> ChartSpec {
    let mut data = Table::new([PRODUCT, SHELF_LIFE]);
    for r in records {
        data.push_row(vec![r.product_name.as_str().into(), r.shelf_life_days.into()]);
    }
    ChartSpec::new(
        "shelf-life-distribution",
        "Product Shelf Life Distribution",
        ChartKind::Strip,
        data,
    )
    .x(SHELF_LIFE)
    .y(PRODUCT)
    .color(PRODUCT)
    .options(ChartOptions {
        x_title: Some("Shelf Life (Days)".to_string()),
        y_title: Some("Product".to_string()),
        show_legend: Some(false),
        height: Some(450),
        ..Default::default()
    })
}

/// Storage condition → product, sized by quantity in stock.
pub fn storage_conditions(frame: &DataFrame) -> PolarsResult<ChartSpec> {
    let nodes = hierarchy(frame, STORAGE, PRODUCT, QUANTITY_IN_STOCK)?;
    Ok(ChartSpec::new(
        "storage-conditions",
        "Product Storage Condition Distribution",
        ChartKind::Sunburst,
        hierarchy_table(QUANTITY_IN_STOCK, &nodes),
    )
    .y(QUANTITY_IN_STOCK)
    .color(STORAGE)
    .aggregation(Aggregation::Sum)
    .options(ChartOptions {
        path: Some(vec![STORAGE.to_string(), PRODUCT.to_string()]),
        text_info: Some("label+percent entry".to_string()),
        ..Default::default()
    }))
}

/// Lollipop: each record's reorder quantity, plus the product's min-max stem.
pub fn reorder_quantities(records: &[DairyRecord], frame: &DataFrame) -> PolarsResult<ChartSpec> {
    let ranges: HashMap<String, (f64, f64)> = group_range(frame, PRODUCT, REORDER)?
        .into_iter()
        .map(|(product, lo, hi)| (product, (lo, hi)))
        .collect();
    let mut data = Table::new([PRODUCT, REORDER, "Stem Start", "Stem End"]);
    for r in records {
        let (start, end) = ranges
            .get(&r.product_name)
            .copied()
            .unwrap_or((r.reorder_quantity, r.reorder_quantity));
        data.push_row(vec![
            r.product_name.as_str().into(),
            r.reorder_quantity.into(),
            start.into(),
            end.into(),
        ]);
    }
    Ok(ChartSpec::new(
        "reorder-quantity",
        "Reorder Quantity by Product",
        ChartKind::Lollipop,
        data,
    )
    .x(REORDER)
    .y(PRODUCT)
    .color(PRODUCT)
    .options(ChartOptions {
        x_title: Some("Reorder Quantity (liters/kg)".to_string()),
        y_title: Some("Product".to_string()),
        show_legend: Some(false),
        height: Some(450),
        ..Default::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::Cell;
    use crate::test_support::{frame, record, sample_records, view_settings};

    fn stocked(product: &str, in_stock: f64, threshold: f64) -> DairyRecord {
        let mut r = record(product, "Amul", "Delhi");
        r.quantity_in_stock = in_stock;
        r.minimum_stock_threshold = threshold;
        r
    }

    #[test]
    fn test_low_stock_table_threshold_boundary() {
        let records = vec![
            stocked("Milk", 19.0, 20.0),
            stocked("Curd", 20.0, 20.0),
            stocked("Ghee", 35.0, 20.0),
        ];
        let table = low_stock_table(&records);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0][2], Cell::from("Milk"));
        assert_eq!(table.columns.len(), 6);
    }

    #[test]
    fn test_storage_hierarchy_sums_stock() {
        let mut frozen = stocked("Ice Cream", 10.0, 0.0);
        frozen.storage_condition = "Frozen".to_string();
        let mut frozen_again = stocked("Ice Cream", 5.0, 0.0);
        frozen_again.storage_condition = "Frozen".to_string();
        let mut chilled = stocked("Milk", 7.0, 0.0);
        chilled.storage_condition = "Refrigerated".to_string();

        let spec = storage_conditions(&frame(&[frozen, frozen_again, chilled])).unwrap();
        let ids = spec.data.column("id").unwrap();
        assert_eq!(
            ids,
            vec![
                &Cell::from("Frozen"),
                &Cell::from("Refrigerated"),
                &Cell::from("Frozen/Ice Cream"),
                &Cell::from("Refrigerated/Milk"),
            ]
        );
        assert_eq!(spec.data.rows[0][3], Cell::Number(15.0));
    }

    #[test]
    fn test_reorder_stems_span_product_range() {
        let mut a = record("Milk", "Amul", "Delhi");
        a.reorder_quantity = 40.0;
        let mut b = record("Milk", "Amul", "Goa");
        b.reorder_quantity = 15.0;
        let records = vec![a, b];
        let spec = reorder_quantities(&records, &frame(&records)).unwrap();

        for row in &spec.data.rows {
            assert_eq!(row[2], Cell::Number(15.0));
            assert_eq!(row[3], Cell::Number(40.0));
        }
    }

    #[test]
    fn test_render_order_and_empty_subset() {
        let records = sample_records();
        let settings = view_settings();
        let blocks = render(&ViewContext {
            records: &records,
            frame: &frame(&records),
            settings: &settings,
        })
        .unwrap();
        let kinds: Vec<&str> = blocks.iter().map(|b| b.kind()).collect();
        assert_eq!(
            kinds,
            vec!["heading", "table", "heading", "chart", "heading", "chart", "heading", "chart"]
        );

        let empty = render(&ViewContext {
            records: &[],
            frame: &frame(&[]),
            settings: &settings,
        })
        .unwrap();
        for block in &empty {
            match block {
                Block::Chart { spec } => assert!(spec.data.is_empty()),
                Block::Table { table, .. } => assert!(table.is_empty()),
                _ => {}
            }
        }
    }
}
