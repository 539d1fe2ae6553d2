use serde::{Deserialize, Serialize};

use crate::ids::{PackageId, UserId};

/// `GET /api/admin/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminDashboard {
    pub metrics: DashboardMetrics,
    pub recent_sales: Vec<Transaction>,
    pub top_partners: Vec<Partner>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardMetrics {
    pub total_investors: u64,
    pub new_investors_today: u64,
    pub new_investors_week: u64,
    pub new_investors_month: u64,
    pub total_sales_today: f64,
    pub total_sales_week: f64,
    pub total_sales_year: f64,
    pub total_partners: u64,
    pub new_partners_today: u64,
    pub new_partners_week: u64,
    pub new_partners_month: u64,
}

/// An investment recorded against a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub id: u64,
    pub user_id: Option<UserId>,
    pub user_name: String,
    pub package_id: Option<PackageId>,
    pub package_name: String,
    pub amount: f64,
    pub status: String,
    pub date: String,
    pub partner_id: String,
    pub partner_name: String,
    pub commission: f64,
}

/// Sales partner; ids are strings such as `P001`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub commission_rate: f64,
    pub total_sales: f64,
    pub total_commission: f64,
    pub status: String,
    pub joined_date: String,
}
