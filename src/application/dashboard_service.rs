// Dashboard service - Use case for rendering a view over the filtered dataset
use crate::application::boundary_source::BoundaryService;
use crate::application::views::{demand, inventory, overview, sales, ViewContext, ViewSettings};
use crate::domain::aggregate::records_frame;
use crate::domain::dashboard::DashboardPage;
use crate::domain::filter::{apply_filters, FilterSelection};
use crate::domain::record::DairyRecord;
use crate::domain::view::View;
use polars::prelude::PolarsError;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("aggregation failed: {0}")]
    Aggregation(#[from] PolarsError),
}

#[derive(Clone)]
pub struct DashboardService {
    records: Arc<Vec<DairyRecord>>,
    boundaries: BoundaryService,
    settings: Arc<ViewSettings>,
}

impl DashboardService {
    pub fn new(records: Arc<Vec<DairyRecord>>, boundaries: BoundaryService, settings: ViewSettings) -> Self {
        Self {
            records,
            boundaries,
            settings: Arc::new(settings),
        }
    }

    /// Recomputes the filtered view for `selection` and runs the handler for `view`.
    pub async fn render(&self, view: View, selection: &FilterSelection) -> Result<DashboardPage, DashboardError> {
        let filtered = apply_filters(&self.records, selection);
        tracing::debug!(
            "Rendering {} with {} of {} records ({:?})",
            view,
            filtered.len(),
            self.records.len(),
            selection
        );

        let frame = records_frame(&filtered)?;
        let ctx = ViewContext {
            records: &filtered,
            frame: &frame,
            settings: &self.settings,
        };

        let blocks = match view {
            View::Overview => overview::render(&ctx),
            View::Sales => {
                let boundaries = self.boundaries.boundaries().await;
                sales::render(&ctx, boundaries.as_deref())?
            }
            View::Inventory => inventory::render(&ctx)?,
            View::CustomerDemand => demand::render(&ctx)?,
        };

        let page = DashboardPage::new(view, blocks);
        tracing::debug!(
            "Rendered {}: {} blocks, {} charts, {} warnings",
            view,
            page.blocks.len(),
            page.charts().count(),
            page.warnings().count()
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ChartKind;
    use crate::domain::filter::FilterValue;
    use crate::domain::geo::BoundaryError;
    use crate::test_support::{boundary, dashboard_service, sample_records, FakeFetcher};

    #[tokio::test]
    async fn test_sales_page_with_boundaries() {
        let fetcher = Arc::new(FakeFetcher::ok(boundary(&["Delhi", "Goa", "Bihar"])));
        let service = dashboard_service(fetcher.clone());

        let page = service.render(View::Sales, &FilterSelection::default()).await.unwrap();

        assert_eq!(page.title, "💰 Sales & Revenue Analysis");
        let map = page.chart("sales-by-state").unwrap();
        assert_eq!(map.kind, ChartKind::Choropleth);
        assert_eq!(map.data.len(), 3);
        assert_eq!(page.warnings().count(), 0);
    }

    #[tokio::test]
    async fn test_sales_page_fetches_boundaries_once_across_interactions() {
        let fetcher = Arc::new(FakeFetcher::ok(boundary(&["Delhi"])));
        let service = dashboard_service(fetcher.clone());

        let amul = FilterSelection {
            brand: FilterValue::Exact("Amul".to_string()),
            ..Default::default()
        };
        service.render(View::Sales, &FilterSelection::default()).await.unwrap();
        service.render(View::Sales, &amul).await.unwrap();
        service.render(View::Overview, &amul).await.unwrap();

        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_boundary_failure_only_disables_choropleth() {
        let fetcher = Arc::new(FakeFetcher::failing(BoundaryError::Status(404)));
        let service = dashboard_service(fetcher);

        let page = service.render(View::Sales, &FilterSelection::default()).await.unwrap();

        assert!(page.chart("sales-by-state").is_none());
        assert_eq!(page.warnings().count(), 1);
        assert!(page.chart("revenue-by-brand").is_some());
        assert!(page.chart("monthly-revenue-trend").is_some());
    }

    #[tokio::test]
    async fn test_failed_boundary_fetch_is_not_retried_on_every_render() {
        let fetcher = Arc::new(FakeFetcher::failing(BoundaryError::Fetch("connection refused".to_string())));
        let service = dashboard_service(fetcher.clone());

        for _ in 0..5 {
            let page = service.render(View::Sales, &FilterSelection::default()).await.unwrap();
            assert_eq!(page.warnings().count(), 1);
        }
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_other_views_do_not_fetch_boundaries() {
        let fetcher = Arc::new(FakeFetcher::ok(boundary(&["Delhi"])));
        let service = dashboard_service(fetcher.clone());

        for view in [View::Overview, View::Inventory, View::CustomerDemand] {
            let page = service.render(view, &FilterSelection::default()).await.unwrap();
            assert_eq!(page.view, view);
        }
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_filters_flow_into_sales_kpis() {
        let fetcher = Arc::new(FakeFetcher::ok(boundary(&["Delhi"])));
        let service = dashboard_service(fetcher);
        let selection = FilterSelection {
            location: FilterValue::Exact("Delhi".to_string()),
            ..Default::default()
        };

        let page = service.render(View::Sales, &selection).await.unwrap();

        let expected: f64 = sample_records()
            .iter()
            .filter(|r| r.location == "Delhi")
            .map(|r| r.revenue)
            .sum();
        let tiles = page
            .blocks
            .iter()
            .find_map(|b| match b {
                crate::domain::dashboard::Block::Metrics { tiles } => Some(tiles),
                _ => None,
            })
            .unwrap();
        assert_eq!(tiles[1].value, Some(expected));
    }
}
