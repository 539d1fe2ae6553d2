//! Admin dashboard sections that have data behind them in the API.

use std::io::Write;

use sc_app::LoadAdminDashboard;
use sc_core::{AdminSection, SectionRouter, SectionSet};

use super::dashboard::render_nav;
use super::format::{money, percent};

pub async fn show<W: Write>(
    loader: &LoadAdminDashboard,
    section: Option<&str>,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut router = SectionRouter::<AdminSection>::new();
    if let Some(section) = section {
        router.select(section);
    }
    render_nav(&router, out)?;

    match router.current() {
        AdminSection::Dashboard => {
            let dashboard = loader.execute().await?;
            let m = &dashboard.metrics;
            writeln!(
                out,
                "Investors: {} total, {} today, {} this week, {} this month",
                m.total_investors, m.new_investors_today, m.new_investors_week, m.new_investors_month
            )?;
            writeln!(
                out,
                "Sales: {} today, {} this week, {} this year",
                money(m.total_sales_today),
                money(m.total_sales_week),
                money(m.total_sales_year)
            )?;
            writeln!(
                out,
                "Partners: {} total, {} today, {} this week, {} this month",
                m.total_partners, m.new_partners_today, m.new_partners_week, m.new_partners_month
            )?;
            if !dashboard.recent_sales.is_empty() {
                writeln!(out, "Recent sales:")?;
                for sale in &dashboard.recent_sales {
                    writeln!(
                        out,
                        "  {} {} | {} | {}",
                        sale.date,
                        sale.user_name,
                        sale.package_name,
                        money(sale.amount)
                    )?;
                }
            }
        }
        AdminSection::Transactions => {
            let transactions = loader.transactions().await?;
            if transactions.is_empty() {
                writeln!(out, "No transactions.")?;
            }
            for tx in &transactions {
                writeln!(
                    out,
                    "#{} {} | {} | {} | {} | {}",
                    tx.id,
                    tx.date,
                    tx.user_name,
                    tx.package_name,
                    money(tx.amount),
                    tx.status
                )?;
            }
        }
        AdminSection::Partners => {
            let dashboard = loader.execute().await?;
            for partner in &dashboard.top_partners {
                writeln!(
                    out,
                    "{} {} | {} commission | {} sales | {}",
                    partner.id,
                    partner.name,
                    percent(partner.commission_rate),
                    money(partner.total_sales),
                    partner.status
                )?;
            }
        }
        other => {
            writeln!(out, "{} is not available in the terminal.", other.label())?;
        }
    }
    Ok(())
}
