use serde::{Deserialize, Serialize};

use crate::ids::{PackageId, UserId};

/// Investable bundle of surplus claims.
///
/// The investor API names the title `name`, the admin API `title`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentPackage {
    pub id: PackageId,
    #[serde(alias = "title")]
    pub name: String,
    pub package_type: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub min_investment: f64,
    pub max_investment: Option<f64>,
    pub projected_return_min: f64,
    pub projected_return_max: f64,
    pub expected_timeline_months: u32,
    pub funding_percentage: f64,
}

/// A single surplus claim backing a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Claim {
    pub id: u64,
    pub property_address: String,
    pub county: String,
    pub state: String,
    pub surplus_amount: f64,
    pub status: String,
    pub package_id: Option<PackageId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestorProfile {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wallet {
    pub balance: f64,
}

/// `GET /api/users/{id}/portfolio`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub user: Option<InvestorProfile>,
    pub total_invested: f64,
    pub total_current_value: f64,
    pub total_returns: f64,
    pub wallet: Option<Wallet>,
}

impl Portfolio {
    pub fn wallet_balance(&self) -> f64 {
        self.wallet.as_ref().map_or(0.0, |wallet| wallet.balance)
    }
}

/// Everything the investor dashboard shows. Parts the server declined to
/// return stay empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvestorDashboard {
    pub portfolio: Option<Portfolio>,
    pub packages: Vec<InvestmentPackage>,
    pub claims: Vec<Claim>,
}

/// `POST /api/invest` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestRequest {
    pub user_id: UserId,
    pub package_id: PackageId,
    pub amount: f64,
}

/// `POST /api/invest` response: `{ok}` or `{error}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestResponse {
    pub ok: Option<bool>,
    pub error: Option<String>,
}

/// Accepted investment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestReceipt {
    pub package_id: PackageId,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_accepts_admin_title_alias() {
        let package: InvestmentPackage = serde_json::from_str(
            r#"{"id": 1, "title": "Orlando Surplus Claims Bundle", "min_investment": 50000, "max_investment": 250000}"#,
        )
        .unwrap();
        assert_eq!(package.name, "Orlando Surplus Claims Bundle");
        assert_eq!(package.max_investment, Some(250000.0));
    }

    #[test]
    fn portfolio_without_wallet_has_zero_balance() {
        let portfolio: Portfolio =
            serde_json::from_str(r#"{"total_invested": 125000}"#).unwrap();
        assert_eq!(portfolio.wallet_balance(), 0.0);
    }

    #[test]
    fn invest_response_reads_error_body() {
        let response: InvestResponse =
            serde_json::from_str(r#"{"error": "Insufficient funds"}"#).unwrap();
        assert_eq!(response.error.as_deref(), Some("Insufficient funds"));
        assert_eq!(response.ok, None);
    }
}
