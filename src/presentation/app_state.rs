// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::domain::tabs::TabController;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub default_tab: String,
}

impl AppState {
    /// Fresh tab state for one page view, one tab per configured domain.
    pub fn tab_controller(&self) -> TabController {
        let keys: Vec<&str> = self.dashboard_service.domains().map(|d| d.key()).collect();
        TabController::new(keys.clone(), keys, &self.default_tab)
    }
}
