//! # sc-console
//!
//! Terminal front-end for the Surplus Claims portal: configuration,
//! logging and dependency wiring, plus the `surplus-portal` subcommands.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
pub mod commands;

pub use bootstrap::run;
