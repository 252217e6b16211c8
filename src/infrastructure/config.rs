use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub geo: GeoSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_addr")]
    pub addr: SocketAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub path: PathBuf,
    #[serde(default = "default_image_path")]
    pub image_path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeoSettings {
    #[serde(default = "default_boundary_url")]
    pub boundary_url: String,
    #[serde(default = "default_name_key")]
    pub name_key: String,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// How long a failed fetch is remembered before the next retry.
    #[serde(default = "default_failure_ttl_secs")]
    pub failure_ttl_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_color_range_max")]
    pub color_range_max: f64,
}

impl GeoSettings {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn failure_ttl(&self) -> Duration {
        Duration::from_secs(self.failure_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for GeoSettings {
    fn default() -> Self {
        Self {
            boundary_url: default_boundary_url(),
            name_key: default_name_key(),
            cache_ttl_secs: default_cache_ttl_secs(),
            failure_ttl_secs: default_failure_ttl_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            color_range_max: default_color_range_max(),
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_image_path() -> PathBuf {
    PathBuf::from("assets/dairy_products.svg")
}

fn default_boundary_url() -> String {
    "https://raw.githubusercontent.com/geohacker/india/master/state/india_telengana.geojson"
        .to_string()
}

fn default_name_key() -> String {
    "NAME_1".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_failure_ttl_secs() -> u64 {
    30
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_color_range_max() -> f64 {
    70_000.0
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_dashboard_config_from("config/dashboard")
}

pub fn load_dashboard_config_from(name: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(name))
        .build()?;

    Ok(settings.try_deserialize()?)
}
