use std::io::Write;

use sc_app::SessionService;
use sc_core::UserSession;

fn greet<W: Write>(session: &UserSession, out: &mut W) -> anyhow::Result<()> {
    writeln!(
        out,
        "Signed in as {} <{}> (id {})",
        session.name, session.email, session.id
    )?;
    Ok(())
}

pub async fn signin<W: Write>(
    sessions: &SessionService,
    email: Option<&str>,
    out: &mut W,
) -> anyhow::Result<()> {
    let session = sessions.sign_in_local(email).await?;
    greet(&session, out)
}

pub async fn demo_login<W: Write>(sessions: &SessionService, out: &mut W) -> anyhow::Result<()> {
    let session = sessions.demo_login().await?;
    greet(&session, out)
}

pub async fn logout<W: Write>(sessions: &SessionService, out: &mut W) -> anyhow::Result<()> {
    sessions.logout().await?;
    writeln!(out, "Signed out.")?;
    Ok(())
}

pub async fn whoami<W: Write>(
    sessions: &SessionService,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    match sessions.current().await {
        Some(session) if json => writeln!(out, "{}", serde_json::to_string_pretty(&session)?)?,
        Some(session) => writeln!(
            out,
            "{} <{}> (id {})",
            session.name, session.email, session.id
        )?,
        None => writeln!(out, "Not signed in.")?,
    }
    Ok(())
}
