// Group-by, ranking and time-bucket aggregations over a record frame
use super::columns::*;
use super::record::DairyRecord;
use itertools::{izip, Itertools};
use polars::prelude::*;

/// One row per record. Non-finite numbers become nulls, so sums and means skip them.
pub fn records_frame(records: &[DairyRecord]) -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        text_column(records, PRODUCT, |r| r.product_name.as_str()),
        text_column(records, BRAND, |r| r.brand.as_str()),
        text_column(records, LOCATION, |r| r.location.as_str()),
        text_column(records, SALES_CHANNEL, |r| r.sales_channel.as_str()),
        text_column(records, STORAGE, |r| r.storage_condition.as_str()),
        Series::new(YEAR, records.iter().map(|r| r.year).collect::<Vec<Option<i32>>>()),
        Series::new(
            MONTH,
            records
                .iter()
                .map(|r| r.month.map(|m| m as i32))
                .collect::<Vec<Option<i32>>>(),
        ),
        number_column(records, PRICE, |r| r.price_per_unit),
        number_column(records, QUANTITY_SOLD, |r| r.quantity_sold),
        number_column(records, QUANTITY_IN_STOCK, |r| r.quantity_in_stock),
        number_column(records, REORDER, |r| r.reorder_quantity),
        number_column(records, REVENUE, |r| r.revenue),
    ])
}

fn text_column(records: &[DairyRecord], name: &str, field: fn(&DairyRecord) -> &str) -> Series {
    Series::new(name, records.iter().map(field).collect::<Vec<&str>>())
}

fn number_column(records: &[DairyRecord], name: &str, field: fn(&DairyRecord) -> f64) -> Series {
    let values: Vec<Option<f64>> = records
        .iter()
        .map(|r| Some(field(r)).filter(|v| v.is_finite()))
        .collect();
    Series::new(name, values)
}

/// Lazy sum of `value` grouped by `keys`, groups in first-appearance order.
fn summed(frame: &DataFrame, keys: &[&str], value: &str) -> LazyFrame {
    let by: Vec<Expr> = keys.iter().map(|k| col(k)).collect();
    frame.clone().lazy().group_by_stable(by).agg([col(value).sum()])
}

fn keyed_values(out: &DataFrame, key: &str, value: &str) -> PolarsResult<Vec<(String, f64)>> {
    let keys = out.column(key)?.str()?;
    let values = out.column(value)?.f64()?;
    Ok(keys
        .into_iter()
        .zip(values)
        .filter_map(|(k, v)| Some((k?.to_string(), v.unwrap_or(0.0))))
        .collect())
}

/// Sums `value` per `key`. Groups keep the order in which their key first appears.
pub fn group_sum(frame: &DataFrame, key: &str, value: &str) -> PolarsResult<Vec<(String, f64)>> {
    keyed_values(&summed(frame, &[key], value).collect()?, key, value)
}

/// Sorts groups by value, largest first. The sort is stable, so ties keep their
/// incoming order.
pub fn rank_descending(groups: Vec<(String, f64)>) -> Vec<(String, f64)> {
    groups
        .into_iter()
        .sorted_by(|a, b| b.1.total_cmp(&a.1))
        .collect()
}

/// The `n` largest groups of `value` per `key`, largest first.
pub fn top_n(frame: &DataFrame, key: &str, value: &str, n: usize) -> PolarsResult<Vec<(String, f64)>> {
    let mut ranked = rank_descending(group_sum(frame, key, value)?);
    ranked.truncate(n);
    Ok(ranked)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub value: f64,
}

/// Sums `value` per (year, month), in chronological order. Undated records are skipped.
pub fn monthly_totals(frame: &DataFrame, value: &str) -> PolarsResult<Vec<MonthlyTotal>> {
    let out = frame
        .clone()
        .lazy()
        .filter(col(YEAR).is_not_null().and(col(MONTH).is_not_null()))
        .group_by([col(YEAR), col(MONTH)])
        .agg([col(value).sum()])
        .collect()?;

    let years = out.column(YEAR)?.i32()?;
    let months = out.column(MONTH)?.i32()?;
    let values = out.column(value)?.f64()?;

    Ok(izip!(years, months, values)
        .filter_map(|(year, month, value)| {
            Some(MonthlyTotal {
                year: year?,
                month: u32::try_from(month?).ok()?,
                value: value.unwrap_or(0.0),
            })
        })
        .sorted_by_key(|t| (t.year, t.month))
        .collect())
}

pub fn low_stock(records: &[DairyRecord]) -> Vec<&DairyRecord> {
    records.iter().filter(|r| r.is_low_stock()).collect()
}

/// A node of a two-level hierarchy (parent ring and child ring).
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    pub id: String,
    pub label: String,
    pub parent: Option<String>,
    pub value: f64,
}

/// Builds parent and child nodes from the `outer`/`inner` columns. Parent values
/// are the sum of their children. Parents come first, then children, both in
/// first-appearance order.
pub fn hierarchy(frame: &DataFrame, outer: &str, inner: &str, value: &str) -> PolarsResult<Vec<HierarchyNode>> {
    let parents = keyed_values(&summed(frame, &[outer], value).collect()?, outer, value)?;
    let leaves = summed(frame, &[outer, inner], value).collect()?;

    let parent_nodes = parents.into_iter().map(|(parent, value)| HierarchyNode {
        id: parent.clone(),
        label: parent,
        parent: None,
        value,
    });
    let leaf_nodes = izip!(
        leaves.column(outer)?.str()?,
        leaves.column(inner)?.str()?,
        leaves.column(value)?.f64()?
    )
    .filter_map(|(parent, child, value)| {
        let (parent, child) = (parent?, child?);
        Some(HierarchyNode {
            id: format!("{}/{}", parent, child),
            label: child.to_string(),
            parent: Some(parent.to_string()),
            value: value.unwrap_or(0.0),
        })
    });

    Ok(parent_nodes.chain(leaf_nodes).collect())
}

/// Min and max of `value` per `key`, in first-appearance order. Groups with no
/// finite value are left out.
pub fn group_range(frame: &DataFrame, key: &str, value: &str) -> PolarsResult<Vec<(String, f64, f64)>> {
    let out = frame
        .clone()
        .lazy()
        .group_by_stable([col(key)])
        .agg([col(value).min().alias("min"), col(value).max().alias("max")])
        .collect()?;

    Ok(izip!(out.column(key)?.str()?, out.column("min")?.f64()?, out.column("max")?.f64()?)
        .filter_map(|(k, lo, hi)| Some((k?.to_string(), lo?, hi?)))
        .collect())
}

/// Distinct values of a text column in first-appearance order.
pub fn distinct(frame: &DataFrame, key: &str) -> PolarsResult<Vec<String>> {
    let out = frame
        .clone()
        .lazy()
        .group_by_stable([col(key)])
        .agg([len()])
        .collect()?;
    Ok(out.column(key)?.str()?.into_iter().flatten().map(str::to_string).collect())
}

/// Distinct years, ascending. Undated records contribute nothing.
pub fn distinct_years(frame: &DataFrame) -> PolarsResult<Vec<i32>> {
    let out = frame
        .clone()
        .lazy()
        .filter(col(YEAR).is_not_null())
        .group_by([col(YEAR)])
        .agg([len()])
        .collect()?;
    Ok(out.column(YEAR)?.i32()?.into_iter().flatten().sorted().collect())
}
