// Application state for HTTP handlers
use crate::application::boundary_source::BoundaryService;
use crate::application::dashboard_service::DashboardService;
use crate::application::sidebar_service::SidebarService;
use crate::application::streaming_service::StreamingDashboardService;

#[derive(Clone)]
pub struct AppState {
    pub sidebar_service: SidebarService,
    pub dashboard_service: DashboardService,
    pub streaming_service: StreamingDashboardService,
    pub boundary_service: BoundaryService,
}
