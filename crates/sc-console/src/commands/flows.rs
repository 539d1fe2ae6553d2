//! Commands that run a wizard or look at a single package.

use std::io::{BufRead, Write};

use sc_app::{StartInvestment, StartOnboarding};
use sc_core::flows::investment;
use sc_core::form::parse_number;
use sc_core::PackageId;
use tracing::info;

use super::format::{money, percent};
use super::wizard::{run_wizard, WizardOutcome};
use crate::bootstrap::wiring::AppDeps;

pub async fn onboard<R, W>(deps: &AppDeps, input: &mut R, out: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let controller = StartOnboarding::new(deps.session.clone(), deps.wizard.clone())
        .execute()
        .await?;

    match run_wizard(&controller, input, out).await? {
        WizardOutcome::Completed(_) => {
            let name = deps
                .session
                .current()
                .await
                .map(|session| session.first_name().to_string())
                .unwrap_or_default();
            writeln!(out, "Welcome, {name}! Your investor account is ready.")?;
        }
        WizardOutcome::Abandoned(_) => {
            writeln!(out, "Onboarding stopped.")?;
        }
    }
    Ok(())
}

pub async fn invest<R, W>(
    deps: &AppDeps,
    package_id: PackageId,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let controller = StartInvestment::new(deps.api.clone(), deps.session.clone(), deps.wizard.clone())
        .execute(package_id)
        .await?;

    match run_wizard(&controller, input, out).await? {
        WizardOutcome::Completed(snapshot) => {
            let amount = snapshot
                .values
                .get(investment::AMOUNT)
                .and_then(|value| value.as_text())
                .and_then(parse_number)
                .unwrap_or_default();
            info!(%package_id, amount, "investment submitted");
            writeln!(
                out,
                "Investment of {} in package #{package_id} submitted.",
                money(amount)
            )?;
        }
        WizardOutcome::Abandoned(_) => {
            writeln!(out, "Investment not submitted.")?;
        }
    }
    Ok(())
}

pub async fn package_details<W: Write>(
    deps: &AppDeps,
    package_id: PackageId,
    out: &mut W,
) -> anyhow::Result<()> {
    let packages = deps.api.packages().await?;
    let Some(package) = packages.iter().find(|package| package.id == package_id) else {
        anyhow::bail!("investment package {package_id} not found");
    };

    writeln!(out, "#{} {}", package.id, package.name)?;
    writeln!(out, "Type:              {}", package.package_type)?;
    writeln!(
        out,
        "Raised:            {} of {} ({})",
        money(package.current_amount),
        money(package.target_amount),
        percent(package.funding_percentage)
    )?;
    match package.max_investment {
        Some(max) => writeln!(
            out,
            "Investment range:  {} to {}",
            money(package.min_investment),
            money(max)
        )?,
        None => writeln!(out, "Minimum:           {}", money(package.min_investment))?,
    }
    writeln!(
        out,
        "Projected return:  {} to {} over {} months",
        percent(package.projected_return_min),
        percent(package.projected_return_max),
        package.expected_timeline_months
    )?;
    Ok(())
}
