use super::SectionSet;

macro_rules! define_sections {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($id:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl SectionSet for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn id(self) -> &'static str {
                match self {
                    $(Self::$variant => $id),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

define_sections! {
    /// Back-office sidebar.
    AdminSection {
        Dashboard => ("dashboard", "Dashboard"),
        PartnerDashboard => ("partnerDashboard", "Partner Dashboard"),
        Transactions => ("transactions", "Transactions"),
        Tranches => ("tranches", "Tranches"),
        Payouts => ("payouts", "Payouts"),
        Partners => ("partners", "Partners"),
        NewPartners => ("newPartners", "New Partners"),
        CommissionPayouts => ("commissionPayouts", "Commission Payouts"),
        ClaimProgress => ("claimProgress", "Claim Progress"),
        PackageInfo => ("packageInfo", "Package Info"),
        Support => ("support", "Support Tickets"),
        Settings => ("settings", "System Settings"),
    }
}

define_sections! {
    /// Investor portal sidebar.
    InvestorSection {
        Dashboard => ("dashboard", "Dashboard"),
        AvailableReturns => ("available-returns", "Available Returns"),
        CurrentInvestments => ("current-investments", "Current Investments"),
        Wallet => ("wallet", "Wallet"),
        Support => ("support", "Support"),
    }
}
