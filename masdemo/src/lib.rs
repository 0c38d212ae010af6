#![warn(missing_docs)]
//! A command-line front end for the modeling assessment dashboard.
//!
//! The demo wires a [`DashboardController`](mas_dashboard::DashboardController) to the
//! in-memory backend of `mas-memory` and to a console "user interface": navigation is
//! printed as a path, notices are printed as their translation key, and confirmations
//! are read from stdin (or skipped with `--yes`).

pub mod impls;

mod cli;
pub use cli::{Cli, Commands};

mod config;
pub use config::AppConfig;
