// Shared fixtures for unit tests
use crate::application::boundary_source::{BoundaryFetcher, BoundaryService};
use crate::application::dashboard_service::DashboardService;
use crate::application::sidebar_service::SidebarService;
use crate::application::streaming_service::StreamingDashboardService;
use crate::application::views::ViewSettings;
use crate::domain::aggregate::records_frame;
use crate::domain::geo::BoundaryError;
use crate::domain::record::DairyRecord;
use crate::infrastructure::memory_boundary_store::MemoryBoundaryStore;
use crate::presentation::app_state::AppState;
use async_trait::async_trait;
use chrono::NaiveDate;
use polars::prelude::DataFrame;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

impl DairyRecord {
    pub fn dated(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = NaiveDate::from_ymd_opt(year, month, day);
        self.with_derived_dates()
    }
}

/// A record dated 2023-06-15 with small, distinct numeric fields.
pub fn record(product: &str, brand: &str, location: &str) -> DairyRecord {
    DairyRecord {
        product_id: "1".to_string(),
        product_name: product.to_string(),
        brand: brand.to_string(),
        location: location.to_string(),
        sales_channel: "Retail".to_string(),
        storage_condition: "Refrigerated".to_string(),
        date: None,
        price_per_unit: 50.0,
        quantity_sold: 10.0,
        quantity_in_stock: 100.0,
        minimum_stock_threshold: 20.0,
        reorder_quantity: 40.0,
        shelf_life_days: 7,
        revenue: 500.0,
        year: None,
        month: None,
    }
    .dated(2023, 6, 15)
}

pub fn sample_records() -> Vec<DairyRecord> {
    let rows: [(&str, &str, &str, &str, (i32, u32), f64, f64, f64, f64); 8] = [
        ("Milk", "Amul", "Delhi", "Retail", (2023, 1), 45.0, 120.0, 5400.0, 15.0),
        ("Curd", "Amul", "Delhi", "Online", (2023, 12), 60.0, 80.0, 4800.0, 90.0),
        ("Milk", "Mother Dairy", "Delhi", "Wholesale", (2024, 1), 42.0, 300.0, 12600.0, 250.0),
        ("Ghee", "Amul", "Goa", "Retail", (2024, 4), 520.0, 12.0, 6240.0, 8.0),
        ("Butter", "Sudha", "Bihar", "Retail", (2023, 4), 48.5, 60.0, 2910.0, 45.0),
        ("Curd", "Mother Dairy", "Goa", "Online", (2023, 12), 58.0, 45.0, 2610.0, 10.0),
        ("Paneer", "Amul", "Kerala", "Wholesale", (2024, 2), 320.0, 25.0, 8000.0, 60.0),
        ("Milk", "Sudha", "Bihar", "Retail", (2024, 1), 44.0, 150.0, 6600.0, 35.0),
    ];

    rows.iter()
        .enumerate()
        .map(
            |(i, &(product, brand, location, channel, (year, month), price, sold, revenue, stock))| {
                let mut r = record(product, brand, location).dated(year, month, 10);
                r.product_id = (i + 1).to_string();
                r.sales_channel = channel.to_string();
                r.price_per_unit = price;
                r.quantity_sold = sold;
                r.revenue = revenue;
                r.quantity_in_stock = stock;
                r.shelf_life_days = 5 + i as i64;
                r.reorder_quantity = 20.0 + 5.0 * i as f64;
                r
            },
        )
        .collect()
}

pub fn frame(records: &[DairyRecord]) -> DataFrame {
    records_frame(records).unwrap()
}

/// A minimal GeoJSON feature collection with one feature per name under `NAME_1`.
pub fn boundary(names: &[&str]) -> Value {
    let features: Vec<Value> = names
        .iter()
        .map(|n| json!({"type": "Feature", "properties": {"NAME_1": n}, "geometry": null}))
        .collect();
    json!({"type": "FeatureCollection", "features": features})
}

pub fn view_settings() -> ViewSettings {
    ViewSettings {
        image_path: PathBuf::from("no/such/image.jpg"),
        image_url: "/assets/overview-image".to_string(),
        geojson_url: "/geo/boundaries".to_string(),
        name_key: "NAME_1".to_string(),
        color_range_max: 70_000.0,
    }
}

/// Returns a canned result and counts how often it was asked.
pub struct FakeFetcher {
    result: Result<Value, BoundaryError>,
    calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn ok(data: Value) -> Self {
        Self {
            result: Ok(data),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: BoundaryError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BoundaryFetcher for FakeFetcher {
    async fn fetch(&self, _url: &str) -> Result<Value, BoundaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub fn boundary_service(fetcher: Arc<FakeFetcher>) -> BoundaryService {
    BoundaryService::new(
        fetcher,
        Arc::new(MemoryBoundaryStore::default()),
        "http://boundaries.test/india.geojson".to_string(),
        Duration::from_secs(3600),
        Duration::from_secs(30),
    )
}

pub fn dashboard_service(fetcher: Arc<FakeFetcher>) -> DashboardService {
    DashboardService::new(
        Arc::new(sample_records()),
        boundary_service(fetcher),
        view_settings(),
    )
}

pub fn app_state(fetcher: Arc<FakeFetcher>) -> Arc<AppState> {
    let records = Arc::new(sample_records());
    let boundaries = boundary_service(fetcher);
    let dashboard = DashboardService::new(records.clone(), boundaries.clone(), view_settings());
    Arc::new(AppState {
        sidebar_service: SidebarService::new(records).unwrap(),
        streaming_service: StreamingDashboardService::new(dashboard.clone()),
        dashboard_service: dashboard,
        boundary_service: boundaries,
    })
}
