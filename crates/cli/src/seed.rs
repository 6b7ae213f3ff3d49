//! Start-up data for the shop.

use std::path::Path;

use anyhow::Context;
use sweetshop_inventory::{Sweet, SweetDraft, SweetShop};

/// The sample sweets a fresh shop starts with.
pub fn sample_drafts() -> Vec<SweetDraft> {
    [
        (1001, "Kaju Katli", "Nut-Based", 50.0, 20),
        (1002, "Gajar Halwa", "Vegetable-Based", 30.0, 15),
        (1003, "Gulab Jamun", "Milk-Based", 10.0, 50),
        (1004, "Rasgulla", "Milk-Based", 8.0, 30),
        (1005, "Badam Burfi", "Nut-Based", 60.0, 25),
    ]
    .into_iter()
    .map(|(id, name, category, price, quantity)| SweetDraft {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        quantity,
    })
    .collect()
}

/// Read a JSON array of sweets from `path`.
pub fn load_drafts(path: &Path) -> anyhow::Result<Vec<SweetDraft>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", path.display()))
}

/// Add every draft to `shop`, returning how many were added.
///
/// Invalid or duplicate entries are logged and skipped; the rest still load.
pub fn seed_shop(shop: &mut SweetShop, drafts: Vec<SweetDraft>) -> usize {
    let mut added = 0;
    for draft in drafts {
        let id = draft.id;
        match Sweet::try_from(draft).and_then(|sweet| shop.add(sweet)) {
            Ok(()) => added += 1,
            Err(error) => tracing::error!(sweet_id = id, %error, "skipping seed entry"),
        }
    }
    tracing::info!(added, total = shop.count(), "shop seeded");
    added
}

/// Build a shop from the configured seed file, or the sample data.
pub fn build_shop(seed_file: Option<&Path>) -> anyhow::Result<SweetShop> {
    let drafts = match seed_file {
        Some(path) => load_drafts(path)?,
        None => sample_drafts(),
    };
    let mut shop = SweetShop::new();
    seed_shop(&mut shop, drafts);
    Ok(shop)
}
