//! Mock implementations of the core ports for testing.

use async_trait::async_trait;
use mockall::mock;

use crate::ids::UserId;
use crate::portal::{
    AdminDashboard, ApiError, Claim, InvestReceipt, InvestRequest, InvestmentPackage, Portfolio,
    Transaction,
};
use crate::ports::{PortalApiPort, SessionStorePort};
use crate::session::UserSession;

mock! {
    pub PortalApi {}

    #[async_trait]
    impl PortalApiPort for PortalApi {
        async fn admin_dashboard(&self) -> Result<AdminDashboard, ApiError>;
        async fn admin_transactions(&self) -> Result<Vec<Transaction>, ApiError>;
        async fn portfolio(&self, user_id: UserId) -> Result<Portfolio, ApiError>;
        async fn packages(&self) -> Result<Vec<InvestmentPackage>, ApiError>;
        async fn claims(&self) -> Result<Vec<Claim>, ApiError>;
        async fn invest(&self, request: &InvestRequest) -> Result<InvestReceipt, ApiError>;
    }
}

mock! {
    pub SessionStore {}

    #[async_trait]
    impl SessionStorePort for SessionStore {
        async fn load(&self) -> anyhow::Result<Option<UserSession>>;
        async fn save(&self, session: &UserSession) -> anyhow::Result<()>;
        async fn clear(&self) -> anyhow::Result<()>;
    }
}

#[tokio::test]
async fn mock_portal_api_returns_configured_rejection() {
    let mut api = MockPortalApi::new();
    api.expect_invest()
        .times(1)
        .returning(|_| Err(ApiError::rejected(Some(400), "Insufficient funds")));

    let request = InvestRequest {
        user_id: UserId::new(1),
        package_id: crate::ids::PackageId::new(1),
        amount: 50_000.0,
    };
    let result = api.invest(&request).await;

    assert_eq!(result.unwrap_err().to_string(), "Insufficient funds");
}

#[tokio::test]
async fn mock_session_store_round_trips() {
    let mut store = MockSessionStore::new();
    store
        .expect_load()
        .returning(|| Ok(Some(UserSession::demo())));

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, Some(UserSession::demo()));
}
