mod load_admin_dashboard;
mod load_investor_dashboard;

pub use load_admin_dashboard::LoadAdminDashboard;
pub use load_investor_dashboard::LoadInvestorDashboard;
