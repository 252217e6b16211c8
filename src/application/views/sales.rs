// Sales & revenue page
use super::*;
use crate::domain::aggregate::{group_sum, monthly_totals, rank_descending, top_n};
use crate::domain::chart::{Aggregation, ChartKind, ChartOptions, ChartSpec};
use crate::domain::dashboard::Block;
use crate::domain::geo::{enrich, BoundaryError};
use crate::domain::kpi::summarize;
use crate::domain::record::month_names;
use polars::prelude::DataFrame;
use serde_json::Value;

pub const TOP_PRODUCTS: usize = 5;

pub fn render(ctx: &ViewContext, boundaries: Result<&Value, &BoundaryError>) -> ViewResult {
    Ok(vec![
        Block::Metrics {
            tiles: kpi_tiles(&summarize(ctx.frame)?),
        },
        Block::heading("📉 Revenue by Brands"),
        Block::Chart {
            spec: revenue_by_brand(ctx.frame)?,
        },
        Block::heading("🌍 Sales by State (India)"),
        sales_by_state(ctx, boundaries)?,
        Block::heading("Top 5 Dairy Products by Revenue"),
        Block::Chart {
            spec: top_products(ctx.frame)?,
        },
        Block::heading("Sales by Channel"),
        Block::Chart {
            spec: sales_by_channel(ctx.frame)?,
        },
        Block::heading("📈 Revenue Trends Over Time (Monthly)"),
        Block::Chart {
            spec: revenue_trend(ctx.frame)?,
        },
    ])
}

/// Funnel of summed revenue per brand, largest first.
pub fn revenue_by_brand(frame: &DataFrame) -> PolarsResult<ChartSpec> {
    let ranked = rank_descending(group_sum(frame, BRAND, REVENUE)?);
    Ok(ChartSpec::new(
        "revenue-by-brand",
        "Revenue by Brands",
        ChartKind::Funnel,
        groups_table(BRAND, REVENUE, &ranked),
    )
    .x(REVENUE)
    .y(BRAND)
    .color(BRAND)
    .aggregation(Aggregation::Sum)
    .options(ChartOptions {
        x_title: Some("Total Revenue (INR)".to_string()),
        y_title: Some("Brand".to_string()),
        show_legend: Some(false),
        height: Some(450),
        ..Default::default()
    }))
}

/// Choropleth of quantity sold per state, or a warning when the boundary
/// data cannot be used.
pub fn sales_by_state(ctx: &ViewContext, boundaries: Result<&Value, &BoundaryError>) -> PolarsResult<Block> {
    let totals = group_sum(ctx.frame, LOCATION, QUANTITY_SOLD)?;
    let joined = boundaries
        .map_err(Clone::clone)
        .and_then(|geo| enrich(&totals, geo, &ctx.settings.name_key));

    Ok(match joined {
        Ok(regions) => Block::Chart {
            spec: ChartSpec::new(
                "sales-by-state",
                "Quantity Sold Across Indian States",
                ChartKind::Choropleth,
                groups_table(LOCATION, QUANTITY_SOLD, &regions),
            )
            .x(LOCATION)
            .color(QUANTITY_SOLD)
            .aggregation(Aggregation::Sum)
            .options(ChartOptions {
                color_scale: Some("blues".to_string()),
                color_range: Some([0.0, ctx.settings.color_range_max]),
                feature_id_key: Some(format!("properties.{}", ctx.settings.name_key)),
                geojson_url: Some(ctx.settings.geojson_url.clone()),
                fit_bounds: Some("locations".to_string()),
                projection: Some("mercator".to_string()),
                show_base_map: Some(false),
                height: Some(450),
                ..Default::default()
            }),
        },
        Err(e) => {
            tracing::warn!("Skipping state choropleth: {}", e);
            Block::Warning {
                id: "sales-by-state".to_string(),
                message: format!("State name mapping failed. Check your GeoJSON structure. ({})", e),
            }
        }
    })
}

pub fn top_products(frame: &DataFrame) -> PolarsResult<ChartSpec> {
    let top = top_n(frame, PRODUCT, REVENUE, TOP_PRODUCTS)?;
    Ok(ChartSpec::new(
        "top-products-by-revenue",
        "Top 5 Products by Revenue",
        ChartKind::Bar,
        groups_table(PRODUCT, REVENUE, &top),
    )
    .x(PRODUCT)
    .y(REVENUE)
    .color(PRODUCT)
    .aggregation(Aggregation::Sum)
    .options(ChartOptions {
        text_field: Some(REVENUE.to_string()),
        height: Some(450),
        ..Default::default()
    }))
}

pub fn sales_by_channel(frame: &DataFrame) -> PolarsResult<ChartSpec> {
    let channels = group_sum(frame, SALES_CHANNEL, REVENUE)?;
    Ok(ChartSpec::new(
        "sales-channel-distribution",
        "Sales Channel Distribution",
        ChartKind::Pie,
        groups_table(SALES_CHANNEL, REVENUE, &channels),
    )
    .x(SALES_CHANNEL)
    .y(REVENUE)
    .color(SALES_CHANNEL)
    .aggregation(Aggregation::Sum)
    .options(ChartOptions {
        text_info: Some("percent+label".to_string()),
        height: Some(450),
        ..Default::default()
    }))
}

pub fn revenue_trend(frame: &DataFrame) -> PolarsResult<ChartSpec> {
    let totals = monthly_totals(frame, REVENUE)?;
    Ok(ChartSpec::new(
        "monthly-revenue-trend",
        "Monthly Revenue Trends Over Time",
        ChartKind::Line,
        monthly_table(REVENUE, &totals, Some(format_inr)),
    )
    .x(MONTH_NAME)
    .y(REVENUE)
    .color(YEAR)
    .aggregation(Aggregation::Sum)
    .options(ChartOptions {
        x_title: Some("Month".to_string()),
        y_title: Some("Total Revenue (INR)".to_string()),
        legend_title: Some("Year".to_string()),
        text_field: Some("Label".to_string()),
        markers: Some(true),
        x_category_order: Some(month_names()),
        height: Some(450),
        ..Default::default()
    }))
}
