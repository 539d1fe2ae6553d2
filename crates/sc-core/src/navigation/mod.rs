//! Navigation domain module.
//!
//! Two kinds of navigation exist: in-app sections (a sidebar selecting one
//! of a fixed set of panels) and top-level routes of the investor app.

mod router;
mod route;
mod sections;

pub use route::{resolve_route, Page};
pub use router::{SectionRouter, SectionSet};
pub use sections::{AdminSection, InvestorSection};
