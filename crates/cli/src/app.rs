//! Command dispatch: turns a parsed [`Command`] into shop operations.

use std::io::Write;

use sweetshop_core::DomainError;
use sweetshop_inventory::{SortOrder, Sweet, SweetShop};
use thiserror::Error;

use crate::args::{Command, SearchBy};
use crate::config::CliConfig;
use crate::demo;
use crate::render::Renderer;
use crate::seed;

/// A shop operation was refused; `message` is meant for the end user.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CommandFailed {
    message: String,
    #[source]
    source: DomainError,
}

impl CommandFailed {
    pub fn domain_error(&self) -> &DomainError {
        &self.source
    }
}

impl From<DomainError> for CommandFailed {
    fn from(source: DomainError) -> Self {
        Self {
            message: describe(&source),
            source,
        }
    }
}

/// User-facing wording for a domain error.
pub fn describe(error: &DomainError) -> String {
    match error {
        DomainError::Validation(msg) => capitalize(msg),
        DomainError::InsufficientStock {
            available,
            requested,
        } => format!("Insufficient stock. Available: {available}, Requested: {requested}"),
        DomainError::DuplicateId(id) => format!("Sweet with ID {id} already exists"),
        DomainError::NotFound(id) => format!("Sweet with ID {id} not found"),
        DomainError::InvalidId(msg) => format!("Invalid sweet ID: {msg}"),
    }
}

fn capitalize(msg: &str) -> String {
    let mut chars = msg.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One-line report of a failed run, with every cause in the chain.
pub fn error_report(err: &anyhow::Error) -> String {
    format!("error: {err:#}")
}

/// Seed a shop per `config` and run `command` against it.
pub fn run(command: Command, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let mut shop = seed::build_shop(config.seed_file.as_deref())?;
    let renderer = Renderer::new(config.currency.clone(), config.json);
    execute(&mut shop, command, config, &renderer, out)
}

/// Run `command` against an existing shop.
pub fn execute(
    shop: &mut SweetShop,
    command: Command,
    config: &CliConfig,
    renderer: &Renderer,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::List => renderer.inventory(out, shop)?,
        Command::Search { by } => search(shop, by, renderer, out)?,
        Command::Sorted { by, desc } => {
            let order = if desc {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            let direction = if desc { "descending" } else { "ascending" };
            renderer.sweets(
                out,
                &format!("sorted by {by} ({direction})"),
                &shop.sorted(by, order),
            )?;
        }
        Command::Status => renderer.stock_status(out, shop, config.low_stock_threshold)?,
        Command::Purchase { id, quantity } => {
            shop.purchase(id, quantity).map_err(CommandFailed::from)?;
            tracing::info!(sweet_id = %id, quantity, "purchase recorded");
            renderer.message(out, &format!("Purchased {quantity} of sweet {id}."))?;
            renderer.inventory(out, shop)?;
        }
        Command::Restock { id, quantity } => {
            shop.restock(id, quantity).map_err(CommandFailed::from)?;
            tracing::info!(sweet_id = %id, quantity, "restock recorded");
            renderer.message(out, &format!("Restocked {quantity} of sweet {id}."))?;
            renderer.inventory(out, shop)?;
        }
        Command::Delete { id } => {
            if !shop.delete(id) {
                return Err(CommandFailed::from(DomainError::not_found(id)).into());
            }
            tracing::info!(sweet_id = %id, "sweet deleted");
            renderer.message(out, &format!("Deleted sweet {id}."))?;
            renderer.inventory(out, shop)?;
        }
        Command::Add {
            id,
            name,
            category,
            price,
            quantity,
        } => {
            Sweet::new(id, name, category, price, quantity)
                .and_then(|sweet| shop.add(sweet))
                .map_err(CommandFailed::from)?;
            tracing::info!(sweet_id = %id, "sweet added");
            renderer.message(out, &format!("Added sweet {id}."))?;
            renderer.inventory(out, shop)?;
        }
        Command::Demo => demo::walkthrough(shop, config, renderer, out)?,
    }
    Ok(())
}

fn search(
    shop: &SweetShop,
    by: SearchBy,
    renderer: &Renderer,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match by {
        SearchBy::Name { term } => {
            renderer.search_results(out, "name", &term, &shop.search_by_name(&term))
        }
        SearchBy::Category { category } => renderer.search_results(
            out,
            "category",
            &category,
            &shop.search_by_category(&category),
        ),
        SearchBy::Price { min, max } => renderer.search_results(
            out,
            "price range",
            &format!("{}-{}", renderer.money(min), renderer.money(max)),
            &shop.search_by_price_range(min, max),
        ),
    }
}
