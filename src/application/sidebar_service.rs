// Sidebar service - Use case for navigation, filter options and the KPI panel
use crate::application::views::kpi_tiles;
use crate::domain::aggregate::{distinct, distinct_years, records_frame};
use crate::domain::columns::{BRAND, LOCATION, PRODUCT};
use crate::domain::chart::Tile;
use crate::domain::filter::{FilterSelection, ALL};
use crate::domain::kpi::summarize;
use crate::domain::record::DairyRecord;
use crate::domain::view::View;
use polars::prelude::{DataFrame, PolarsResult};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub view: View,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Selector choices, each list starting with "All".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub brands: Vec<String>,
    pub locations: Vec<String>,
    pub products: Vec<String>,
    pub years: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sidebar {
    pub navigation: Vec<NavItem>,
    pub metrics: Vec<Tile>,
    pub filters: FilterOptions,
    pub selection: FilterSelection,
}

#[derive(Clone)]
pub struct SidebarService {
    options: FilterOptions,
    metrics: Vec<Tile>,
}

impl SidebarService {
    /// Options and the KPI panel depend only on the full dataset, so they are computed once.
    pub fn new(records: Arc<Vec<DairyRecord>>) -> PolarsResult<Self> {
        let frame = records_frame(&records)?;
        Ok(Self {
            options: filter_options(&frame)?,
            metrics: kpi_tiles(&summarize(&frame)?),
        })
    }

    pub fn sidebar(&self, selection: FilterSelection) -> Sidebar {
        Sidebar {
            navigation: View::ALL
                .into_iter()
                .map(|view| NavItem {
                    view,
                    label: view.label(),
                    icon: view.icon(),
                })
                .collect(),
            metrics: self.metrics.clone(),
            filters: self.options.clone(),
            selection,
        }
    }
}

/// Brands, locations and products in first-appearance order; years ascending.
pub fn filter_options(frame: &DataFrame) -> PolarsResult<FilterOptions> {
    let with_all = |values: Vec<String>| {
        std::iter::once(ALL.to_string())
            .chain(values)
            .collect::<Vec<_>>()
    };

    Ok(FilterOptions {
        brands: with_all(distinct(frame, BRAND)?),
        locations: with_all(distinct(frame, LOCATION)?),
        products: with_all(distinct(frame, PRODUCT)?),
        years: with_all(distinct_years(frame)?.into_iter().map(|y| y.to_string()).collect()),
    })
}
