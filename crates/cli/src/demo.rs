//! Guided walk-through of the shop's features on the seeded data.

use std::io::{self, Write};

use sweetshop_inventory::{SweetId, SweetShop};

use crate::app::describe;
use crate::config::CliConfig;
use crate::render::Renderer;

const KAJU_KATLI: SweetId = SweetId::new(1001);
const GULAB_JAMUN: SweetId = SweetId::new(1003);

/// Inventory, three searches, a purchase, a restock, the stock report and the
/// updated inventory. Refused operations are reported inline and do not stop
/// the walk-through.
pub fn walkthrough(
    shop: &mut SweetShop,
    config: &CliConfig,
    renderer: &Renderer,
    out: &mut impl Write,
) -> io::Result<()> {
    renderer.message(out, "Welcome to the Sweet Shop Management System!")?;
    renderer.message(out, &"=".repeat(50))?;
    renderer.inventory(out, shop)?;

    renderer.message(out, "\nSEARCH DEMONSTRATIONS:")?;
    renderer.search_results(out, "name", "Kaju", &shop.search_by_name("Kaju"))?;
    renderer.search_results(
        out,
        "category",
        "Milk-Based",
        &shop.search_by_category("Milk-Based"),
    )?;
    renderer.search_results(
        out,
        "price range",
        &format!("{}-{}", renderer.money(40.0), renderer.money(60.0)),
        &shop.search_by_price_range(40.0, 60.0),
    )?;

    renderer.message(out, "\nPURCHASE DEMONSTRATION:")?;
    renderer.message(out, "Purchasing 5 Kaju Katli...")?;
    match shop.purchase(KAJU_KATLI, 5) {
        Ok(()) => {
            tracing::info!(sweet_id = %KAJU_KATLI, quantity = 5, "purchase recorded");
            renderer.message(out, "Purchase successful!")?;
            if let Some(sweet) = shop.find_by_id(KAJU_KATLI) {
                renderer.message(out, &format!("Remaining Kaju Katli: {}", sweet.quantity()))?;
            }
        }
        Err(error) => {
            tracing::warn!(sweet_id = %KAJU_KATLI, %error, "purchase refused");
            renderer.message(out, &format!("Purchase failed: {}", describe(&error)))?;
        }
    }

    renderer.message(out, "\nRESTOCK DEMONSTRATION:")?;
    renderer.message(out, "Restocking 15 Gulab Jamun...")?;
    match shop.restock(GULAB_JAMUN, 15) {
        Ok(()) => {
            tracing::info!(sweet_id = %GULAB_JAMUN, quantity = 15, "restock recorded");
            renderer.message(out, "Restock successful!")?;
            if let Some(sweet) = shop.find_by_id(GULAB_JAMUN) {
                renderer.message(out, &format!("New Gulab Jamun quantity: {}", sweet.quantity()))?;
            }
        }
        Err(error) => {
            tracing::warn!(sweet_id = %GULAB_JAMUN, %error, "restock refused");
            renderer.message(out, &format!("Restock failed: {}", describe(&error)))?;
        }
    }

    renderer.stock_status(out, shop, config.low_stock_threshold)?;

    renderer.message(out, "\nUPDATED INVENTORY:")?;
    renderer.inventory(out, shop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn run_demo(shop: &mut SweetShop) -> String {
        let config = CliConfig::default();
        let renderer = Renderer::new(config.currency.clone(), false);
        let mut out = Vec::new();
        walkthrough(shop, &config, &renderer, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn walkthrough_on_sample_data() {
        let mut shop = seed::build_shop(None).unwrap();
        let text = run_demo(&mut shop);

        assert!(text.contains("Remaining Kaju Katli: 15"));
        assert!(text.contains("New Gulab Jamun quantity: 65"));
        assert!(text.contains("Found 2 sweet(s) matching your search."));
        assert!(text.contains("All sweets are adequately stocked!"));
        // 15 + 15 + 65 + 30 + 25
        assert!(text.contains("Total Inventory: 150 items"));
        assert_eq!(shop.total_quantity(), 150);
    }

    #[test]
    fn walkthrough_reports_refusals_and_keeps_going() {
        let mut shop = SweetShop::new();
        let text = run_demo(&mut shop);

        assert!(text.contains("Purchase failed: Sweet with ID 1001 not found"));
        assert!(text.contains("Restock failed: Sweet with ID 1003 not found"));
        assert!(text.contains("UPDATED INVENTORY:"));
    }
}
