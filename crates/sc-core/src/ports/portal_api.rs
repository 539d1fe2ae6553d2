//! Portal REST API port
//!
//! Each method is one endpoint. Adapters map transport failures to
//! [`ApiError::Network`] / [`ApiError::TimedOut`] and refused requests to
//! [`ApiError::Rejected`]; retries are never attempted.

use async_trait::async_trait;

use crate::ids::UserId;
use crate::portal::{
    AdminDashboard, ApiError, Claim, InvestReceipt, InvestRequest, InvestmentPackage, Portfolio,
    Transaction,
};

#[async_trait]
pub trait PortalApiPort: Send + Sync {
    /// `GET /api/admin/dashboard`
    async fn admin_dashboard(&self) -> Result<AdminDashboard, ApiError>;

    /// `GET /api/admin/transactions`
    async fn admin_transactions(&self) -> Result<Vec<Transaction>, ApiError>;

    /// `GET /api/users/{id}/portfolio`
    async fn portfolio(&self, user_id: UserId) -> Result<Portfolio, ApiError>;

    /// `GET /api/packages`
    async fn packages(&self) -> Result<Vec<InvestmentPackage>, ApiError>;

    /// `GET /api/claims`
    async fn claims(&self) -> Result<Vec<Claim>, ApiError>;

    /// `POST /api/invest`; an `{error}` body is a rejection.
    async fn invest(&self, request: &InvestRequest) -> Result<InvestReceipt, ApiError>;
}
