// Declarative chart specifications consumed by the browser-side renderer
use serde::Serialize;

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
    Integer(i64),
    Null,
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Null)
    }
}

/// Column-named rows, the data payload of a chart or a table block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }
}

#[cfg(test)]
impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    Funnel,
    Choropleth,
    Pie,
    Line,
    Strip,
    Sunburst,
    Lollipop,
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Aggregation {
    Sum,
    None,
}

/// Display options. Every field is optional so each chart sets only what it needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_category_order: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_id_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geojson_url: Option<String>,
    /// Map framing: "locations" zooms to the regions that carry data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_bounds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_base_map: Option<bool>,
    /// Hierarchy levels for sunburst charts, outermost last.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub aggregation: Aggregation,
    pub options: ChartOptions,
    pub data: Table,
}

impl ChartSpec {
    pub fn new(id: &str, title: &str, kind: ChartKind, data: Table) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            x: None,
            y: None,
            color: None,
            size: None,
            aggregation: Aggregation::None,
            options: ChartOptions::default(),
            data,
        }
    }

    pub fn x(mut self, field: &str) -> Self {
        self.x = Some(field.to_string());
        self
    }

    pub fn y(mut self, field: &str) -> Self {
        self.y = Some(field.to_string());
        self
    }

    pub fn color(mut self, field: &str) -> Self {
        self.color = Some(field.to_string());
        self
    }

    pub fn size(mut self, field: &str) -> Self {
        self.size = Some(field.to_string());
        self
    }

    pub fn aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }
}

/// A KPI card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub value: Option<f64>,
    pub precision: i32,
    pub display: String,
}

impl Tile {
    pub fn new(id: &str, title: &str, unit: &str, value: Option<f64>, precision: i32, display: String) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: unit.to_string(),
            value,
            precision,
            display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_spec_serializes_camel_case_and_skips_unset_options() {
        let mut data = Table::new(["Brand", "Revenue"]);
        data.push_row(vec!["Amul".into(), 10.5.into()]);
        let spec = ChartSpec::new("revenue-by-brand", "Revenue by Brands", ChartKind::Funnel, data)
            .x("Revenue")
            .y("Brand")
            .aggregation(Aggregation::Sum)
            .options(ChartOptions {
                show_legend: Some(false),
                ..Default::default()
            });

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["kind"], "funnel");
        assert_eq!(json["aggregation"], "sum");
        assert_eq!(json["options"]["showLegend"], false);
        assert!(json["options"].get("xTitle").is_none());
        assert!(json.get("size").is_none());
        assert_eq!(json["data"]["rows"][0][0], "Amul");
        assert_eq!(json["data"]["rows"][0][1], 10.5);
    }

    #[test]
    fn test_missing_cells_serialize_as_null() {
        let cell: Cell = Option::<f64>::None.into();
        assert_eq!(serde_json::to_value(cell).unwrap(), serde_json::Value::Null);
    }
}
