//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sweetshop_inventory::{SortCriteria, SweetId};
use sweetshop_observability::LogFormat;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "sweetshop")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "In-memory sweet shop inventory manager")]
pub struct Cli {
    /// Render collections as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// JSON file with the sweets to seed the shop with
    #[arg(long, global = true, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Quantity at or below which an in-stock sweet counts as low stock
    #[arg(long, global = true, value_name = "N")]
    pub threshold: Option<i64>,

    /// Log output format (text or json)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Defaults to `demo` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every sweet with inventory totals
    List,
    /// Search sweets by name, category or price range
    Search {
        #[command(subcommand)]
        by: SearchBy,
    },
    /// List sweets ordered by a field
    Sorted {
        /// name, category, price or quantity
        by: SortCriteria,
        /// Sort in descending order
        #[arg(long)]
        desc: bool,
    },
    /// Report out-of-stock and low-stock sweets
    Status,
    /// Buy units of a sweet
    #[command(allow_negative_numbers = true)]
    Purchase { id: SweetId, quantity: i64 },
    /// Add units of a sweet
    #[command(allow_negative_numbers = true)]
    Restock { id: SweetId, quantity: i64 },
    /// Remove a sweet from the shop
    Delete { id: SweetId },
    /// Add a new sweet to the shop
    #[command(allow_negative_numbers = true)]
    Add {
        id: SweetId,
        name: String,
        category: String,
        price: f64,
        quantity: i64,
    },
    /// Walk through searches, a purchase and a restock
    Demo,
}

#[derive(Debug, Clone, Subcommand)]
pub enum SearchBy {
    /// Case-insensitive substring of the name
    Name { term: String },
    /// Case-insensitive exact category
    Category { category: String },
    /// Inclusive price range
    Price { min: f64, max: f64 },
}
