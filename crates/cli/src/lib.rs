//! `sweetshop-cli` — command-line front end for the sweet shop inventory.
//!
//! A thin adapter: it seeds one [`SweetShop`](sweetshop_inventory::SweetShop),
//! translates commands into shop operations and renders the results. Nothing
//! is persisted between runs.

pub mod app;
pub mod args;
pub mod config;
pub mod demo;
pub mod render;
pub mod seed;

pub use app::{CommandFailed, error_report, run};
pub use args::{Cli, Command, SearchBy};
pub use config::CliConfig;
