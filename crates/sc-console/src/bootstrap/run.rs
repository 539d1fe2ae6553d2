//! Program entry: configuration, logging, wiring, then one command.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use sc_app::{LoadAdminDashboard, LoadInvestorDashboard};
use sc_core::navigation::resolve_route;
use sc_core::{PackageId, Page};
use tracing::{debug, info, warn};

use crate::bootstrap::config::load_resolved;
use crate::bootstrap::tracing::init_tracing_subscriber;
use crate::bootstrap::wiring::{wire_dependencies, AppDeps};
use crate::cli::{Cli, Commands};
use crate::commands::{admin, dashboard, flows, session};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_resolved(cli.config.as_deref())?;
    init_tracing_subscriber(&config.logs_dir())?;
    info!(
        api_base_url = %config.api_base_url,
        data_dir = %config.data_dir.display(),
        persist_drafts = config.persist_drafts,
        "surplus portal starting"
    );

    let deps = wire_dependencies(&config)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(async {
        boot_session(&deps).await;
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout().lock();
        dispatch(&deps, cli.command, &mut input, &mut out).await
    })
}

/// An unreadable session file leaves the user signed out.
pub async fn boot_session(deps: &AppDeps) {
    if let Err(err) = deps.session.boot().await {
        warn!(error = %format!("{err:#}"), "ignoring unreadable session");
    }
}

pub async fn dispatch<R, W>(
    deps: &AppDeps,
    command: Commands,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    debug!(?command, "dispatching command");
    match command {
        Commands::Signin { email } => session::signin(&deps.session, email.as_deref(), out).await,
        Commands::DemoLogin => session::demo_login(&deps.session, out).await,
        Commands::Logout => session::logout(&deps.session, out).await,
        Commands::Whoami { json } => session::whoami(&deps.session, json, out).await,
        Commands::Onboard => flows::onboard(deps, input, out).await,
        Commands::Invest { package_id } => {
            flows::invest(deps, PackageId::new(package_id), input, out).await
        }
        Commands::Dashboard { section } => investor_dashboard(deps, section.as_deref(), out).await,
        Commands::Admin { section } => {
            admin::show(&LoadAdminDashboard::new(deps.api.clone()), section.as_deref(), out).await
        }
        Commands::Open { path } => open(deps, &path, input, out).await,
    }
}

async fn investor_dashboard<W: Write>(
    deps: &AppDeps,
    section: Option<&str>,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(user) = deps.session.current().await else {
        anyhow::bail!("sign in to view the dashboard");
    };
    let loader = LoadInvestorDashboard::new(deps.api.clone());
    dashboard::show(&loader, &user, section, out).await
}

async fn open<R, W>(deps: &AppDeps, path: &str, input: &mut R, out: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let page = resolve_route(path, deps.session.is_signed_in().await);
    debug!(path, ?page, "resolved route");
    match page {
        Page::SignIn => {
            writeln!(
                out,
                "Sign in with `surplus-portal signin` or `surplus-portal demo-login`."
            )?;
            Ok(())
        }
        Page::SignUp => flows::onboard(deps, input, out).await,
        Page::Dashboard => investor_dashboard(deps, None, out).await,
        Page::InvestmentDetails(id) => flows::package_details(deps, id, out).await,
        Page::Invest(id) => flows::invest(deps, id, input, out).await,
        Page::InvestmentSuccess => {
            writeln!(out, "Your investment has been submitted.")?;
            Ok(())
        }
    }
}
