// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::session_store::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub sessions: SessionStore,
}
