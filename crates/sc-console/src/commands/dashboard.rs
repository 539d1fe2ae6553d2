//! Investor dashboard, one section at a time.

use std::io::Write;

use sc_app::LoadInvestorDashboard;
use sc_core::portal::InvestorDashboard;
use sc_core::{InvestorSection, SectionRouter, SectionSet, UserSession};

use super::format::{money, percent};

/// Nav line with the active section in brackets.
pub(crate) fn render_nav<S: SectionSet, W: Write>(
    router: &SectionRouter<S>,
    out: &mut W,
) -> anyhow::Result<()> {
    let items: Vec<String> = S::ALL
        .iter()
        .map(|section| {
            if router.is_active(*section) {
                format!("[{}]", section.label())
            } else {
                section.label().to_string()
            }
        })
        .collect();
    writeln!(out, "{}", items.join(" | "))?;
    writeln!(out, "== {} ==", router.title())?;
    Ok(())
}

pub async fn show<W: Write>(
    loader: &LoadInvestorDashboard,
    user: &UserSession,
    section: Option<&str>,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut router = SectionRouter::<InvestorSection>::new();
    if let Some(section) = section {
        router.select(section);
    }

    let data = loader.execute(user.id).await?;
    writeln!(out, "Welcome back, {}", user.first_name())?;
    render_nav(&router, out)?;
    render_section(router.current(), &data, out)
}

fn render_section<W: Write>(
    section: InvestorSection,
    data: &InvestorDashboard,
    out: &mut W,
) -> anyhow::Result<()> {
    let portfolio = data.portfolio.clone().unwrap_or_default();
    match section {
        InvestorSection::Dashboard => {
            writeln!(out, "Total invested:  {}", money(portfolio.total_invested))?;
            writeln!(out, "Current value:   {}", money(portfolio.total_current_value))?;
            writeln!(out, "Total returns:   {}", money(portfolio.total_returns))?;
            writeln!(out, "Wallet balance:  {}", money(portfolio.wallet_balance()))?;
            writeln!(
                out,
                "{} package(s) open, {} claim(s) tracked",
                data.packages.len(),
                data.claims.len()
            )?;
        }
        InvestorSection::AvailableReturns => {
            if data.packages.is_empty() {
                writeln!(out, "No packages are open for investment.")?;
            }
            for package in &data.packages {
                writeln!(
                    out,
                    "#{} {} | min {} | {} funded | {}-{} projected",
                    package.id,
                    package.name,
                    money(package.min_investment),
                    percent(package.funding_percentage),
                    percent(package.projected_return_min),
                    percent(package.projected_return_max),
                )?;
            }
        }
        InvestorSection::CurrentInvestments => {
            if data.claims.is_empty() {
                writeln!(out, "No claims yet.")?;
            }
            for claim in &data.claims {
                writeln!(
                    out,
                    "{}, {} {} | surplus {} | {}",
                    claim.property_address,
                    claim.county,
                    claim.state,
                    money(claim.surplus_amount),
                    claim.status
                )?;
            }
        }
        InvestorSection::Wallet => {
            writeln!(out, "Available balance: {}", money(portfolio.wallet_balance()))?;
        }
        InvestorSection::Support => {
            writeln!(
                out,
                "Get help with your account and investments through our support system."
            )?;
        }
    }
    Ok(())
}
