use std::sync::Arc;

use tracing::{info_span, Instrument};

use sc_core::portal::{AdminDashboard, ApiError, Transaction};
use sc_core::ports::PortalApiPort;

/// Use case for loading the back-office headline figures.
pub struct LoadAdminDashboard {
    api: Arc<dyn PortalApiPort>,
}

impl LoadAdminDashboard {
    pub fn new(api: Arc<dyn PortalApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(&self) -> Result<AdminDashboard, ApiError> {
        self.api
            .admin_dashboard()
            .instrument(info_span!("usecase.load_admin_dashboard.execute"))
            .await
    }

    pub async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.api
            .admin_transactions()
            .instrument(info_span!("usecase.load_admin_dashboard.transactions"))
            .await
    }
}
