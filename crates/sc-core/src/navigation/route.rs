use crate::ids::PackageId;

/// Top-level page of the investor app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    SignIn,
    /// Onboarding wizard.
    SignUp,
    Dashboard,
    InvestmentDetails(PackageId),
    /// Investment wizard for a package.
    Invest(PackageId),
    InvestmentSuccess,
}

impl Page {
    pub fn path(self) -> String {
        match self {
            Page::SignIn => "/".to_string(),
            Page::SignUp => "/signup".to_string(),
            Page::Dashboard => "/dashboard".to_string(),
            Page::InvestmentDetails(id) => format!("/investment-details/{id}"),
            Page::Invest(id) => format!("/invest/{id}"),
            Page::InvestmentSuccess => "/investment-success".to_string(),
        }
    }
}

/// Onboarding used to be one page per step; those paths now open the wizard.
const LEGACY_ONBOARDING_PATHS: &[&str] = &[
    "email-verification",
    "personal-info",
    "address-info",
    "password-setup",
    "accredited-investor",
    "online-access",
];

/// Maps a URL path to a page.
///
/// `/dashboard` requires a session and otherwise lands on sign-in; unknown
/// paths and malformed package ids also land on sign-in.
pub fn resolve_route(path: &str, has_session: bool) -> Page {
    let segments: Vec<&str> = path
        .split('?')
        .next()
        .unwrap_or_default()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => Page::SignIn,
        ["signup"] => Page::SignUp,
        [step] if LEGACY_ONBOARDING_PATHS.contains(step) => Page::SignUp,
        ["dashboard"] if has_session => Page::Dashboard,
        ["investment-success"] => Page::InvestmentSuccess,
        ["invest", id] => id.parse().map(Page::Invest).unwrap_or(Page::SignIn),
        ["investment-details", id] => id
            .parse()
            .map(Page::InvestmentDetails)
            .unwrap_or(Page::SignIn),
        _ => Page::SignIn,
    }
}
