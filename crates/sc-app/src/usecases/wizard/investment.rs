use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use sc_core::flows::investment::{self, investment_flow};
use sc_core::portal::InvestRequest;
use sc_core::ports::PortalApiPort;
use sc_core::wizard::WizardPayload;
use sc_core::{PackageId, UserId};

use crate::deps::WizardDeps;
use crate::usecases::session::SessionService;
use crate::usecases::wizard::{
    StartFlowError, SubmitError, WizardController, WizardSubmitter,
};

/// Posts the chosen amount to `/api/invest` for the signed-in investor.
pub struct InvestmentSubmitter {
    api: Arc<dyn PortalApiPort>,
    user_id: UserId,
    package_id: PackageId,
}

impl InvestmentSubmitter {
    pub fn new(api: Arc<dyn PortalApiPort>, user_id: UserId, package_id: PackageId) -> Self {
        Self {
            api,
            user_id,
            package_id,
        }
    }
}

#[async_trait]
impl WizardSubmitter for InvestmentSubmitter {
    async fn submit(&self, payload: &WizardPayload) -> Result<(), SubmitError> {
        let amount = payload
            .number(investment::AMOUNT)
            .ok_or_else(|| SubmitError::Rejected("Investment amount must be a number".into()))?;
        let request = InvestRequest {
            user_id: self.user_id,
            package_id: self.package_id,
            amount,
        };
        let receipt = self.api.invest(&request).await?;
        info!(
            package_id = %receipt.package_id,
            amount = receipt.amount,
            "investment accepted"
        );
        Ok(())
    }
}

/// Opens the investment wizard for a package.
pub struct StartInvestment {
    api: Arc<dyn PortalApiPort>,
    session: Arc<SessionService>,
    deps: WizardDeps,
}

impl StartInvestment {
    pub fn new(api: Arc<dyn PortalApiPort>, session: Arc<SessionService>, deps: WizardDeps) -> Self {
        Self { api, session, deps }
    }

    /// Requires a signed-in investor and a published package.
    pub async fn execute(&self, package_id: PackageId) -> Result<WizardController, StartFlowError> {
        let user = self
            .session
            .current()
            .await
            .ok_or(StartFlowError::NotSignedIn)?;
        let package = self
            .api
            .packages()
            .await?
            .into_iter()
            .find(|package| package.id == package_id)
            .ok_or(StartFlowError::UnknownPackage(package_id))?;

        let definition = investment_flow(&package)?;
        let submitter = Arc::new(InvestmentSubmitter::new(
            self.api.clone(),
            user.id,
            package.id,
        ));
        let controller = WizardController::new(definition, submitter, self.deps.clone());
        controller.restore_draft().await;
        info!(package_id = %package.id, package = %package.name, "investment wizard started");
        Ok(controller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use mockall::mock;
    use mockall::predicate::eq;
    use sc_core::form::FieldValue;
    use sc_core::portal::{
        AdminDashboard, ApiError, Claim, InvestReceipt, InvestmentPackage, Portfolio, Transaction,
    };
    use sc_core::ports::{ClockPort, SessionStorePort, WizardEventPort};
    use sc_core::wizard::WizardSnapshot;
    use sc_core::UserSession;

    mock! {
        Api {}

        #[async_trait]
        impl PortalApiPort for Api {
            async fn admin_dashboard(&self) -> Result<AdminDashboard, ApiError>;
            async fn admin_transactions(&self) -> Result<Vec<Transaction>, ApiError>;
            async fn portfolio(&self, user_id: UserId) -> Result<Portfolio, ApiError>;
            async fn packages(&self) -> Result<Vec<InvestmentPackage>, ApiError>;
            async fn claims(&self) -> Result<Vec<Claim>, ApiError>;
            async fn invest(&self, request: &InvestRequest) -> Result<InvestReceipt, ApiError>;
        }
    }

    mock! {
        Store {}

        #[async_trait]
        impl SessionStorePort for Store {
            async fn load(&self) -> anyhow::Result<Option<UserSession>>;
            async fn save(&self, session: &UserSession) -> anyhow::Result<()>;
            async fn clear(&self) -> anyhow::Result<()>;
        }
    }

    struct FixedClock;

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            0
        }
    }

    struct NoopEvents;

    #[async_trait]
    impl WizardEventPort for NoopEvents {
        async fn emit_wizard_changed(&self, _snapshot: WizardSnapshot) {}
    }

    fn deps() -> WizardDeps {
        WizardDeps {
            event_port: Arc::new(NoopEvents),
            clock: Arc::new(FixedClock),
            drafts: None,
            submit_timeout: Duration::from_secs(5),
        }
    }

    fn package(id: u64) -> InvestmentPackage {
        InvestmentPackage {
            id: PackageId::new(id),
            name: "Orlando Surplus Claims Bundle".into(),
            min_investment: 50_000.0,
            max_investment: Some(250_000.0),
            ..Default::default()
        }
    }

    fn amount(raw: &str) -> WizardPayload {
        WizardPayload::new(
            investment::FLOW,
            [(investment::AMOUNT.to_string(), FieldValue::text(raw))]
                .into_iter()
                .collect(),
        )
    }

    async fn signed_in() -> Arc<SessionService> {
        let mut store = MockStore::new();
        store.expect_save().returning(|_| Ok(()));
        let session = Arc::new(SessionService::new(Arc::new(store)));
        session.demo_login().await.unwrap();
        session
    }

    #[tokio::test]
    async fn submit_posts_amount_for_user_and_package() {
        let mut api = MockApi::new();
        api.expect_invest()
            .with(eq(InvestRequest {
                user_id: UserId::new(7),
                package_id: PackageId::new(3),
                amount: 75_000.0,
            }))
            .times(1)
            .returning(|request| {
                Ok(InvestReceipt {
                    package_id: request.package_id,
                    amount: request.amount,
                })
            });
        let submitter = InvestmentSubmitter::new(Arc::new(api), UserId::new(7), PackageId::new(3));

        submitter.submit(&amount("75000")).await.unwrap();
    }

    #[tokio::test]
    async fn api_rejection_message_reaches_the_form() {
        let mut api = MockApi::new();
        api.expect_invest()
            .returning(|_| Err(ApiError::rejected(Some(400), "Insufficient funds")));
        let submitter = InvestmentSubmitter::new(Arc::new(api), UserId::new(7), PackageId::new(3));

        let err = submitter.submit(&amount("60000")).await.unwrap_err();

        assert_eq!(err, SubmitError::Rejected("Insufficient funds".into()));
    }

    #[tokio::test]
    async fn non_numeric_amount_is_rejected_before_the_request() {
        let submitter =
            InvestmentSubmitter::new(Arc::new(MockApi::new()), UserId::new(7), PackageId::new(3));

        let err = submitter.submit(&amount("lots")).await.unwrap_err();

        assert!(matches!(err, SubmitError::Rejected(_)));
    }

    #[tokio::test]
    async fn start_requires_a_signed_in_investor() {
        let session = Arc::new(SessionService::new(Arc::new(MockStore::new())));
        let start = StartInvestment::new(Arc::new(MockApi::new()), session, deps());

        let result = start.execute(PackageId::new(3)).await;

        assert!(matches!(result, Err(StartFlowError::NotSignedIn)));
    }

    #[tokio::test]
    async fn start_reports_unknown_package() {
        let mut api = MockApi::new();
        api.expect_packages()
            .times(1)
            .returning(|| Ok(vec![package(1), package(2)]));
        let start = StartInvestment::new(Arc::new(api), signed_in().await, deps());

        let result = start.execute(PackageId::new(9)).await;

        assert!(matches!(
            result,
            Err(StartFlowError::UnknownPackage(id)) if id == PackageId::new(9)
        ));
    }

    #[tokio::test]
    async fn start_surfaces_package_listing_failure() {
        let mut api = MockApi::new();
        api.expect_packages()
            .returning(|| Err(ApiError::Network("connection refused".into())));
        let start = StartInvestment::new(Arc::new(api), signed_in().await, deps());

        let result = start.execute(PackageId::new(1)).await;

        assert!(matches!(result, Err(StartFlowError::Api(ApiError::Network(_)))));
    }

    #[tokio::test]
    async fn start_opens_investment_wizard_for_package() {
        let mut api = MockApi::new();
        api.expect_packages().returning(|| Ok(vec![package(3)]));
        let start = StartInvestment::new(Arc::new(api), signed_in().await, deps());

        let Ok(controller) = start.execute(PackageId::new(3)).await else {
            panic!("investment wizard did not start");
        };

        assert_eq!(controller.definition().name(), investment::FLOW);
        assert_eq!(controller.snapshot().await.step, 1);
    }
}
