pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_resolved, resolve_config, ResolvedConfig};
pub use run::{dispatch, run};
pub use wiring::{wire_dependencies, AppDeps};
