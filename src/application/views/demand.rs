// Customer demand & trends page
use super::*;
use crate::domain::aggregate::{hierarchy, monthly_totals, top_n};
use crate::domain::chart::{Aggregation, ChartKind, ChartOptions, ChartSpec};
use crate::domain::dashboard::Block;
use crate::domain::record::month_names;
use polars::prelude::DataFrame;

pub const TOP_SELLERS: usize = 10;

pub fn render(ctx: &ViewContext) -> ViewResult {
    Ok(vec![
        Block::heading("🏆 Best-Selling Dairy Products"),
        Block::Chart {
            spec: best_sellers(ctx.frame)?,
        },
        Block::heading("📅 Seasonal Sales Trends"),
        Block::Chart {
            spec: seasonal_trend(ctx.frame)?,
        },
        Block::heading("🏷️ Brand Market Share"),
        Block::Chart {
            spec: brand_market_share(ctx.frame)?,
        },
        Block::heading("💰 Price Sensitivity Analysis"),
        Block::Chart {
            spec: price_sensitivity(ctx.records),
        },
    ])
}

pub fn best_sellers(frame: &DataFrame) -> PolarsResult<ChartSpec> {
    let top = top_n(frame, PRODUCT, QUANTITY_SOLD, TOP_SELLERS)?;
    Ok(ChartSpec::new(
        "best-selling-products",
        "Top 10 Best-Selling Dairy Products",
        ChartKind::Bar,
        groups_table(PRODUCT, QUANTITY_SOLD, &top),
    )
    .x(PRODUCT)
    .y(QUANTITY_SOLD)
    .color(PRODUCT)
    .aggregation(Aggregation::Sum)
    .options(ChartOptions {
        text_field: Some(QUANTITY_SOLD.to_string()),
        ..Default::default()
    }))
}

pub fn seasonal_trend(frame: &DataFrame) -> PolarsResult<ChartSpec> {
    let totals = monthly_totals(frame, QUANTITY_SOLD)?;
    Ok(ChartSpec::new(
        "seasonal-sales-trend",
        "Seasonal Sales Trends",
        ChartKind::Line,
        monthly_table(QUANTITY_SOLD, &totals, None),
    )
    .x(MONTH_NAME)
    .y(QUANTITY_SOLD)
    .color(YEAR)
    .aggregation(Aggregation::Sum)
    .options(ChartOptions {
        x_title: Some("Month".to_string()),
        y_title: Some("Quantity Sold".to_string()),
        legend_title: Some("Year".to_string()),
        markers: Some(true),
        x_category_order: Some(month_names()),
        ..Default::default()
    }))
}

/// Brand → product, sized by quantity sold.
pub fn brand_market_share(frame: &DataFrame) -> PolarsResult<ChartSpec> {
    let nodes = hierarchy(frame, BRAND, PRODUCT, QUANTITY_SOLD)?;
    Ok(ChartSpec::new(
        "brand-market-share",
        "Brand Market Share by Revenue",
        ChartKind::Sunburst,
        hierarchy_table(QUANTITY_SOLD, &nodes),
    )
    .y(QUANTITY_SOLD)
    .color(QUANTITY_SOLD)
    .aggregation(Aggregation::Sum)
    .options(ChartOptions {
        path: Some(vec![BRAND.to_string(), PRODUCT.to_string()]),
        text_info: Some("label+percent parent".to_string()),
        color_scale: Some("blues".to_string()),
        ..Default::default()
    }))
}

/// One bubble per record: price against quantity sold.
pub fn price_sensitivity(records: &[DairyRecord]) -> ChartSpec {
    let mut data = Table::new([PRODUCT, PRICE, QUANTITY_SOLD]);
    for r in records {
        data.push_row(vec![
            r.product_name.as_str().into(),
            r.price_per_unit.into(),
            r.quantity_sold.into(),
        ]);
    }
    ChartSpec::new(
        "price-sensitivity",
        "Impact of Price on Sales",
        ChartKind::Scatter,
        data,
    )
    .x(PRICE)
    .y(QUANTITY_SOLD)
    .color(PRODUCT)
    .size(QUANTITY_SOLD)
    .options(ChartOptions {
        opacity: Some(0.7),
        ..Default::default()
    })
}
