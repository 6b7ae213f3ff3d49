//! Output formatting: text tables or JSON documents.

use std::io::{self, Write};

use serde::Serialize;
use sweetshop_inventory::{Sweet, SweetShop};

const RULE_WIDTH: usize = 64;

#[derive(Debug, Serialize)]
struct InventoryReport<'a> {
    sweets: &'a [&'a Sweet],
    count: usize,
    total_quantity: i128,
    total_value: f64,
}

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    search: &'a str,
    term: &'a str,
    results: &'a [&'a Sweet],
}

#[derive(Debug, Serialize)]
struct StockReport<'a> {
    threshold: i64,
    out_of_stock: &'a [&'a Sweet],
    low_stock: &'a [&'a Sweet],
}

/// Writes shop data either as aligned text or as JSON.
#[derive(Debug, Clone)]
pub struct Renderer {
    currency: String,
    json: bool,
}

impl Renderer {
    pub fn new(currency: impl Into<String>, json: bool) -> Self {
        Self {
            currency: currency.into(),
            json,
        }
    }

    /// Every sweet followed by count, quantity and value totals.
    pub fn inventory(&self, out: &mut impl Write, shop: &SweetShop) -> io::Result<()> {
        let sweets = shop.all();
        if self.json {
            return write_json(
                out,
                &InventoryReport {
                    sweets: &sweets,
                    count: shop.count(),
                    total_quantity: shop.total_quantity(),
                    total_value: shop.total_value(),
                },
            );
        }

        if sweets.is_empty() {
            return writeln!(out, "No sweets available in the shop.");
        }

        writeln!(out, "\n=== SWEET SHOP INVENTORY ===")?;
        self.table(out, &sweets)?;
        writeln!(out, "Total Sweets: {}", shop.count())?;
        writeln!(out, "Total Inventory: {} items", shop.total_quantity())?;
        writeln!(out, "Total Value: {}", self.money(shop.total_value()))
    }

    pub fn sweets(&self, out: &mut impl Write, title: &str, sweets: &[&Sweet]) -> io::Result<()> {
        if self.json {
            return write_json(out, &sweets);
        }
        writeln!(out, "\n=== {} ===", title.to_uppercase())?;
        if sweets.is_empty() {
            return writeln!(out, "No sweets to show.");
        }
        self.table(out, sweets)
    }

    pub fn search_results(
        &self,
        out: &mut impl Write,
        search: &str,
        term: &str,
        results: &[&Sweet],
    ) -> io::Result<()> {
        if self.json {
            return write_json(
                out,
                &SearchReport {
                    search,
                    term,
                    results,
                },
            );
        }

        writeln!(
            out,
            "\n=== SEARCH RESULTS: {} \"{}\" ===",
            search.to_uppercase(),
            term
        )?;
        if results.is_empty() {
            return writeln!(out, "No sweets found matching your search criteria.");
        }
        self.table(out, results)?;
        writeln!(out, "Found {} sweet(s) matching your search.", results.len())
    }

    /// Out-of-stock and low-stock sections, or an all-clear line.
    pub fn stock_status(
        &self,
        out: &mut impl Write,
        shop: &SweetShop,
        threshold: i64,
    ) -> io::Result<()> {
        let out_of_stock = shop.out_of_stock();
        let low_stock = shop.low_stock(threshold);

        if self.json {
            return write_json(
                out,
                &StockReport {
                    threshold,
                    out_of_stock: &out_of_stock,
                    low_stock: &low_stock,
                },
            );
        }

        writeln!(out, "\n=== INVENTORY STATUS ===")?;
        if !out_of_stock.is_empty() {
            writeln!(out, "OUT OF STOCK:")?;
            for sweet in &out_of_stock {
                writeln!(out, "- {} (ID: {})", sweet.name(), sweet.id_typed())?;
            }
        }
        if !low_stock.is_empty() {
            writeln!(out, "LOW STOCK (<= {threshold} items):")?;
            for sweet in &low_stock {
                writeln!(
                    out,
                    "- {} (ID: {}) - {} remaining",
                    sweet.name(),
                    sweet.id_typed(),
                    sweet.quantity()
                )?;
            }
        }
        if out_of_stock.is_empty() && low_stock.is_empty() {
            writeln!(out, "All sweets are adequately stocked!")?;
        }
        Ok(())
    }

    /// A single status line; suppressed in JSON mode so documents stay parseable.
    pub fn message(&self, out: &mut impl Write, line: &str) -> io::Result<()> {
        if self.json {
            return Ok(());
        }
        writeln!(out, "{line}")
    }

    pub fn money(&self, amount: f64) -> String {
        format!("{}{}", self.currency, amount)
    }

    fn table(&self, out: &mut impl Write, sweets: &[&Sweet]) -> io::Result<()> {
        writeln!(
            out,
            "{:<6} | {:<16} | {:<16} | {:>9} | {:>8}",
            "ID", "Name", "Category", "Price", "Quantity"
        )?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        for sweet in sweets {
            writeln!(
                out,
                "{:<6} | {:<16} | {:<16} | {:>9} | {:>8}",
                sweet.id_typed(),
                sweet.name(),
                sweet.category(),
                self.money(sweet.price()),
                sweet.quantity()
            )?;
        }
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
