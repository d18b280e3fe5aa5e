mod status_panel;
pub use status_panel::StatusPanel;

mod overview;
pub use overview::OverviewCards;

mod charts;
pub use charts::{MobilePanel, PerformancePanel, SeoPanel, UrlDistributionPanel};

mod detail;
pub use detail::{SeoDetailTable, UrlDetailTables};

mod export;
pub use export::ExportLinksPanel;

use crate::api::model::AuditResults;

/// Shared state for the results view: the loaded audit payload or the error
/// that prevented loading it. Each successful fetch replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub results: Option<AuditResults>,
    pub error: Option<String>,
    pub loading: bool,
}
