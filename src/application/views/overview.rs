// Overview page: dataset description and the raw filtered records
use super::*;
use crate::domain::dashboard::Block;

const ABOUT: &str = "This dataset contains information on dairy product sales, revenue, inventory, and production. It includes details such as product names, sales channels, stock levels, and total revenue.";

const INSIGHTS: [&str; 4] = [
    "Identify top-selling dairy products and track revenue growth.",
    "Analyze sales trends across different locations and brands.",
    "Monitor inventory levels to prevent stock shortages or overstocking.",
    "Optimize pricing and distribution strategies based on demand.",
];

const EXPANSION: [&str; 7] = [
    "**Optimizing Product Portfolio** - Businesses can focus on high-performing products and phase out underperforming ones.",
    "**Market Expansion** - Identifying high-demand locations and expanding operations accordingly.",
    "**Better Inventory Management** - Avoid stockouts and overstocking by maintaining an optimal inventory level.",
    "**Customer Insights** - Understanding customer preferences to tailor marketing strategies.",
    "**Improved Sales Strategies** - Determining the best sales channels (Retail, Wholesale, Online) to boost revenue.",
    "**Competitive Pricing** - Adjusting prices based on demand and competition.",
    "**Supply Chain Optimization** - Ensuring an efficient flow of goods from production to sales.",
];

pub fn render(ctx: &ViewContext) -> Vec<Block> {
    vec![
        image_block(ctx.settings),
        Block::heading("About the Dataset"),
        Block::text(ABOUT),
        Block::Table {
            id: "filtered-records".to_string(),
            title: "Filtered Records".to_string(),
            table: records_table(ctx.records),
        },
        Block::heading("Insights from the Data"),
        Block::List {
            ordered: false,
            items: INSIGHTS.iter().map(|s| s.to_string()).collect(),
        },
        Block::heading("How This Helps Businesses Expand"),
        Block::List {
            ordered: true,
            items: EXPANSION.iter().map(|s| s.to_string()).collect(),
        },
    ]
}

fn image_block(settings: &ViewSettings) -> Block {
    let error = if settings.image_path.is_file() {
        None
    } else {
        tracing::warn!("Overview image {} not found", settings.image_path.display());
        Some(format!("Image not available: {}", settings.image_path.display()))
    };
    Block::Image {
        url: settings.image_url.clone(),
        error,
    }
}

/// Every record field, one row per record.
pub fn records_table(records: &[DairyRecord]) -> Table {
    let mut table = Table::new([
        PRODUCT_ID,
        PRODUCT,
        BRAND,
        LOCATION,
        SALES_CHANNEL,
        STORAGE,
        DATE,
        YEAR,
        MONTH,
        PRICE,
        QUANTITY_SOLD,
        QUANTITY_IN_STOCK,
        MIN_THRESHOLD,
        REORDER,
        SHELF_LIFE,
        REVENUE,
    ]);
    for r in records {
        table.push_row(vec![
            r.product_id.as_str().into(),
            r.product_name.as_str().into(),
            r.brand.as_str().into(),
            r.location.as_str().into(),
            r.sales_channel.as_str().into(),
            r.storage_condition.as_str().into(),
            r.date.map(|d| d.format("%Y-%m-%d").to_string()).into(),
            r.year.map(i64::from).into(),
            r.month.map(i64::from).into(),
            r.price_per_unit.into(),
            r.quantity_sold.into(),
            r.quantity_in_stock.into(),
            r.minimum_stock_threshold.into(),
            r.reorder_quantity.into(),
            r.shelf_life_days.into(),
            r.revenue.into(),
        ]);
    }
    table
}
