//! Records exchanged with the portal REST API.
//!
//! Every record tolerates unknown extra fields and fills missing ones with
//! their zero value; the back office ships fields piecemeal.

mod admin;
mod error;
mod investor;

pub use admin::{AdminDashboard, DashboardMetrics, Partner, Transaction};
pub use error::ApiError;
pub use investor::{
    Claim, InvestReceipt, InvestRequest, InvestResponse, InvestmentPackage, InvestorDashboard,
    InvestorProfile, Portfolio, Wallet,
};
