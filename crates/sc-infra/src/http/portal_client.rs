//! Portal REST API client backed by reqwest.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use sc_core::portal::{
    AdminDashboard, ApiError, Claim, InvestReceipt, InvestRequest, InvestResponse,
    InvestmentPackage, Portfolio, Transaction,
};
use sc_core::ports::PortalApiPort;
use sc_core::UserId;

#[derive(Debug, Clone)]
pub struct PortalClientConfig {
    /// Scheme, host and optional port, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

pub struct ReqwestPortalApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestPortalApi {
    pub fn new(config: PortalClientConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build portal HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;
        debug!(method = "GET", %url, status = response.status().as_u16(), "portal response");

        let response = ensure_success(response).await?;
        response.json::<T>().await.map_err(map_transport_error)
    }
}

#[async_trait]
impl PortalApiPort for ReqwestPortalApi {
    async fn admin_dashboard(&self) -> Result<AdminDashboard, ApiError> {
        self.get_json("/api/admin/dashboard").await
    }

    async fn admin_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("/api/admin/transactions").await
    }

    async fn portfolio(&self, user_id: UserId) -> Result<Portfolio, ApiError> {
        self.get_json(&format!("/api/users/{user_id}/portfolio"))
            .await
    }

    async fn packages(&self) -> Result<Vec<InvestmentPackage>, ApiError> {
        self.get_json("/api/packages").await
    }

    async fn claims(&self) -> Result<Vec<Claim>, ApiError> {
        self.get_json("/api/claims").await
    }

    async fn invest(&self, request: &InvestRequest) -> Result<InvestReceipt, ApiError> {
        let url = self.url("/api/invest");
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        debug!(method = "POST", %url, status = status.as_u16(), "portal response");

        let response = ensure_success(response).await?;
        let body = response.text().await.map_err(map_transport_error)?;

        // Any success body is acceptable unless it carries an explicit refusal.
        let answer = match serde_json::from_str::<InvestResponse>(&body) {
            Ok(answer) => answer,
            Err(err) => {
                debug!(error = %err, "invest response is not an {{ok}}/{{error}} object");
                InvestResponse::default()
            }
        };
        if let Some(message) = answer.error {
            return Err(ApiError::rejected(Some(status.as_u16()), message));
        }
        if answer.ok == Some(false) {
            return Err(ApiError::rejected(
                Some(status.as_u16()),
                "Investment was not accepted",
            ));
        }

        Ok(InvestReceipt {
            package_id: request.package_id,
            amount: request.amount,
        })
    }
}

/// Turns a non-success response into [`ApiError::Rejected`], using the
/// body's `error` field as the message when present.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<InvestResponse>(&body)
        .ok()
        .and_then(|answer| answer.error)
        .unwrap_or_else(|| status_message(status));
    warn!(status = status.as_u16(), %message, "portal request refused");
    Err(ApiError::rejected(Some(status.as_u16()), message))
}

fn status_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("Request failed: {} {reason}", status.as_u16()),
        None => format!("Request failed: {}", status.as_u16()),
    }
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::TimedOut
    } else if error.is_decode() {
        ApiError::Decode(error.to_string())
    } else {
        ApiError::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = ReqwestPortalApi::new(PortalClientConfig {
            base_url: "http://localhost:5000/".into(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();

        assert_eq!(api.url("/api/packages"), "http://localhost:5000/api/packages");
    }

    #[test]
    fn status_message_includes_reason() {
        assert_eq!(
            status_message(StatusCode::NOT_FOUND),
            "Request failed: 404 Not Found"
        );
    }
}
