use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use sc_core::portal::{ApiError, InvestorDashboard};
use sc_core::ports::PortalApiPort;
use sc_core::UserId;

/// Use case for loading the investor dashboard.
///
/// A part the server refuses stays empty; a transport failure of any part
/// fails the whole load.
pub struct LoadInvestorDashboard {
    api: Arc<dyn PortalApiPort>,
}

impl LoadInvestorDashboard {
    pub fn new(api: Arc<dyn PortalApiPort>) -> Self {
        Self { api }
    }

    pub fn from_ports(api: Arc<dyn PortalApiPort>) -> Self {
        Self::new(api)
    }

    pub async fn execute(&self, user_id: UserId) -> Result<InvestorDashboard, ApiError> {
        let span = info_span!("usecase.load_investor_dashboard.execute", user_id = %user_id);
        async {
            let portfolio = keep_part("portfolio", self.api.portfolio(user_id).await)?;
            let packages = keep_part("packages", self.api.packages().await)?;
            let claims = keep_part("claims", self.api.claims().await)?;

            Ok(InvestorDashboard {
                portfolio,
                packages: packages.unwrap_or_default(),
                claims: claims.unwrap_or_default(),
            })
        }
        .instrument(span)
        .await
    }
}

fn keep_part<T>(part: &'static str, result: Result<T, ApiError>) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ApiError::Rejected { status, message }) => {
            debug!(part, ?status, %message, "dashboard part unavailable");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
