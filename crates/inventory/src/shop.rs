use indexmap::IndexMap;

use sweetshop_core::{DomainError, DomainResult};

use crate::sort::{SortCriteria, SortOrder};
use crate::sweet::{Sweet, SweetId};

/// The inventory: sweets keyed by id, listed in insertion order.
///
/// The shop is the only mutation authority for stock levels; callers get
/// shared references out and go through [`SweetShop::purchase`] and
/// [`SweetShop::restock`] to change quantities.
#[derive(Debug, Clone, Default)]
pub struct SweetShop {
    sweets: IndexMap<SweetId, Sweet>,
}

impl SweetShop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sweet; fails if its id is already held.
    pub fn add(&mut self, sweet: Sweet) -> DomainResult<()> {
        let id = sweet.id_typed();
        if self.sweets.contains_key(&id) {
            return Err(DomainError::duplicate_id(id));
        }
        self.sweets.insert(id, sweet);
        Ok(())
    }

    /// Remove a sweet. Returns whether anything was removed.
    pub fn delete(&mut self, id: SweetId) -> bool {
        // shift_remove keeps the remaining insertion order intact.
        self.sweets.shift_remove(&id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sweet> + '_ {
        self.sweets.values()
    }

    /// Snapshot of every sweet, in insertion order.
    pub fn all(&self) -> Vec<&Sweet> {
        self.iter().collect()
    }

    pub fn find_by_id(&self, id: SweetId) -> Option<&Sweet> {
        self.sweets.get(&id)
    }

    pub fn contains(&self, id: SweetId) -> bool {
        self.sweets.contains_key(&id)
    }

    /// Case-insensitive substring match on the name. An empty term matches all.
    pub fn search_by_name(&self, term: &str) -> Vec<&Sweet> {
        let term = term.to_lowercase();
        self.filter(|s| s.name().to_lowercase().contains(&term))
    }

    /// Case-insensitive exact match on the category.
    pub fn search_by_category(&self, category: &str) -> Vec<&Sweet> {
        let category = category.to_lowercase();
        self.filter(|s| s.category().to_lowercase() == category)
    }

    /// Sweets priced within `min..=max`. Empty when `min > max`.
    pub fn search_by_price_range(&self, min: f64, max: f64) -> Vec<&Sweet> {
        self.filter(|s| min <= s.price() && s.price() <= max)
    }

    pub fn purchase(&mut self, id: SweetId, quantity: i64) -> DomainResult<()> {
        self.get_mut(id)?.purchase(quantity)
    }

    pub fn restock(&mut self, id: SweetId, quantity: i64) -> DomainResult<()> {
        self.get_mut(id)?.restock(quantity)
    }

    /// Sum of quantities across all sweets. Widened so that any number of
    /// `i64` quantities adds up without overflow.
    pub fn total_quantity(&self) -> i128 {
        self.iter().map(|s| i128::from(s.quantity())).sum()
    }

    /// Sum of `price * quantity` across all sweets.
    pub fn total_value(&self) -> f64 {
        self.iter().map(Sweet::stock_value).sum()
    }

    pub fn out_of_stock(&self) -> Vec<&Sweet> {
        self.filter(|s| !s.is_in_stock())
    }

    /// Sweets with `0 < quantity <= threshold`. Disjoint from [`Self::out_of_stock`].
    pub fn low_stock(&self, threshold: i64) -> Vec<&Sweet> {
        self.filter(|s| s.is_in_stock() && s.quantity() <= threshold)
    }

    /// Every sweet ordered by `criteria`. Stable: ties keep insertion order in
    /// both directions.
    pub fn sorted(&self, criteria: SortCriteria, order: SortOrder) -> Vec<&Sweet> {
        let mut sweets = self.all();
        sweets.sort_by(|a, b| order.apply(criteria.compare(a, b)));
        sweets
    }

    /// Number of distinct sweets held.
    pub fn count(&self) -> usize {
        self.sweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sweets.is_empty()
    }

    pub fn clear(&mut self) {
        self.sweets.clear();
    }

    fn filter(&self, predicate: impl Fn(&Sweet) -> bool) -> Vec<&Sweet> {
        self.iter().filter(|s| predicate(s)).collect()
    }

    fn get_mut(&mut self, id: SweetId) -> DomainResult<&mut Sweet> {
        self.sweets
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweet(id: u64, name: &str, category: &str, price: f64, quantity: i64) -> Sweet {
        Sweet::new(SweetId::new(id), name, category, price, quantity).unwrap()
    }

    fn sample_shop() -> SweetShop {
        let mut shop = SweetShop::new();
        shop.add(sweet(1001, "Kaju Katli", "Nut-Based", 50.0, 20)).unwrap();
        shop.add(sweet(1002, "Gajar Halwa", "Vegetable-Based", 30.0, 15)).unwrap();
        shop.add(sweet(1003, "Gulab Jamun", "Milk-Based", 10.0, 50)).unwrap();
        shop
    }

    fn ids(sweets: &[&Sweet]) -> Vec<u64> {
        sweets.iter().map(|s| s.id_typed().get()).collect()
    }

    #[test]
    fn add_then_find_returns_the_same_fields() {
        let shop = sample_shop();
        let found = shop.find_by_id(SweetId::new(1002)).unwrap();
        assert_eq!(found, &sweet(1002, "Gajar Halwa", "Vegetable-Based", 30.0, 15));
        assert_eq!(shop.count(), 3);
    }

    #[test]
    fn duplicate_id_is_rejected_and_count_is_unchanged() {
        let mut shop = SweetShop::new();
        shop.add(sweet(1001, "Kaju Katli", "Nut-Based", 50.0, 20)).unwrap();

        let err = shop
            .add(sweet(1001, "Badam Burfi", "Nut-Based", 60.0, 25))
            .unwrap_err();
        assert_eq!(err, DomainError::duplicate_id(1001));
        assert_eq!(shop.count(), 1);
        assert_eq!(shop.find_by_id(SweetId::new(1001)).unwrap().name(), "Kaju Katli");
    }

    #[test]
    fn delete_reports_whether_a_sweet_was_removed() {
        let mut shop = sample_shop();

        assert!(!shop.delete(SweetId::new(9999)));
        assert_eq!(shop.count(), 3);

        assert!(shop.delete(SweetId::new(1001)));
        assert_eq!(shop.count(), 2);
        assert!(shop.find_by_id(SweetId::new(1001)).is_none());
        assert!(!shop.contains(SweetId::new(1001)));
        assert!(shop.contains(SweetId::new(1002)));
    }

    #[test]
    fn all_preserves_insertion_order_across_deletes() {
        let mut shop = sample_shop();
        shop.add(sweet(1000, "Rasgulla", "Milk-Based", 8.0, 30)).unwrap();
        shop.delete(SweetId::new(1002));

        assert_eq!(ids(&shop.all()), vec![1001, 1003, 1000]);
    }

    #[test]
    fn all_on_empty_shop_is_empty() {
        let shop = SweetShop::new();
        assert!(shop.all().is_empty());
        assert!(shop.is_empty());
    }

    #[test]
    fn search_by_name_is_case_insensitive_substring() {
        let shop = sample_shop();
        assert_eq!(ids(&shop.search_by_name("kaju")), vec![1001]);
        assert_eq!(ids(&shop.search_by_name("JAMUN")), vec![1003]);
        assert_eq!(ids(&shop.search_by_name("a")), vec![1001, 1002, 1003]);
        assert_eq!(shop.search_by_name("").len(), 3);
        assert!(shop.search_by_name("chocolate").is_empty());
    }

    #[test]
    fn search_by_category_is_case_insensitive_exact() {
        let shop = sample_shop();
        assert_eq!(ids(&shop.search_by_category("nut-based")), vec![1001]);
        assert!(shop.search_by_category("Nut").is_empty());
    }

    #[test]
    fn search_by_price_range_is_inclusive() {
        let shop = sample_shop();
        assert_eq!(ids(&shop.search_by_price_range(30.0, 50.0)), vec![1001, 1002]);
        assert_eq!(ids(&shop.search_by_price_range(10.0, 10.0)), vec![1003]);
        assert!(shop.search_by_price_range(50.0, 10.0).is_empty());
    }

    #[test]
    fn purchase_and_restock_go_through_the_sweet() {
        let mut shop = sample_shop();
        let id = SweetId::new(1001);

        shop.purchase(id, 5).unwrap();
        assert_eq!(shop.find_by_id(id).unwrap().quantity(), 15);

        shop.restock(id, 10).unwrap();
        assert_eq!(shop.find_by_id(id).unwrap().quantity(), 25);
    }

    #[test]
    fn purchase_and_restock_of_unknown_id_is_not_found() {
        let mut shop = sample_shop();
        let id = SweetId::new(9999);
        assert_eq!(shop.purchase(id, 1), Err(DomainError::not_found(9999)));
        assert_eq!(shop.restock(id, 1), Err(DomainError::not_found(9999)));
    }

    #[test]
    fn sweet_errors_propagate_unchanged() {
        let mut shop = sample_shop();
        let id = SweetId::new(1002);

        assert_eq!(
            shop.purchase(id, 100),
            Err(DomainError::insufficient_stock(15, 100))
        );
        assert!(matches!(shop.restock(id, 0), Err(DomainError::Validation(_))));
        assert!(matches!(shop.purchase(id, -1), Err(DomainError::Validation(_))));
        assert_eq!(shop.find_by_id(id).unwrap().quantity(), 15);
    }

    #[test]
    fn totals_over_sample_shop() {
        let shop = sample_shop();
        assert_eq!(shop.total_quantity(), 85);
        assert_eq!(shop.total_value(), 1950.0);
    }

    #[test]
    fn total_quantity_does_not_overflow_on_huge_stock() {
        let mut shop = SweetShop::new();
        shop.add(sweet(1, "Ladoo", "Flour-Based", 1.0, i64::MAX)).unwrap();
        shop.add(sweet(2, "Peda", "Milk-Based", 1.0, 1)).unwrap();

        assert_eq!(shop.total_quantity(), i128::from(i64::MAX) + 1);
    }

    #[test]
    fn totals_of_empty_shop_are_zero() {
        let shop = SweetShop::new();
        assert_eq!(shop.total_quantity(), 0);
        assert_eq!(shop.total_value(), 0.0);
    }

    #[test]
    fn out_of_stock_and_low_stock_are_disjoint() {
        let mut shop = sample_shop();
        shop.purchase(SweetId::new(1002), 15).unwrap();
        shop.purchase(SweetId::new(1001), 15).unwrap();

        assert_eq!(ids(&shop.out_of_stock()), vec![1002]);
        assert_eq!(ids(&shop.low_stock(10)), vec![1001]);
        assert!(shop.low_stock(0).is_empty());
    }

    #[test]
    fn sorted_by_price_descending() {
        let shop = sample_shop();
        let sorted = shop.sorted(SortCriteria::Price, SortOrder::Descending);
        assert_eq!(ids(&sorted), vec![1001, 1002, 1003]);
    }

    #[test]
    fn sorted_by_name_ascending() {
        let shop = sample_shop();
        let sorted = shop.sorted(SortCriteria::Name, SortOrder::Ascending);
        assert_eq!(ids(&sorted), vec![1002, 1003, 1001]);
    }

    #[test]
    fn sorted_by_name_places_accented_names_with_their_base_letter() {
        let mut shop = SweetShop::new();
        shop.add(sweet(1, "Zarda", "Rice-Based", 20.0, 5)).unwrap();
        shop.add(sweet(2, "Éclair", "Pastry", 40.0, 5)).unwrap();
        shop.add(sweet(3, "Fudge", "Milk-Based", 15.0, 5)).unwrap();

        let names: Vec<&str> = shop
            .sorted(SortCriteria::Name, SortOrder::Ascending)
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["Éclair", "Fudge", "Zarda"]);
    }

    #[test]
    fn sorted_keeps_insertion_order_for_ties_in_both_directions() {
        let mut shop = SweetShop::new();
        shop.add(sweet(1, "Peda", "Milk-Based", 10.0, 5)).unwrap();
        shop.add(sweet(2, "Barfi", "Milk-Based", 10.0, 7)).unwrap();
        shop.add(sweet(3, "Ladoo", "Flour-Based", 12.0, 7)).unwrap();

        let asc = shop.sorted(SortCriteria::Category, SortOrder::Ascending);
        assert_eq!(ids(&asc), vec![3, 1, 2]);

        let desc = shop.sorted(SortCriteria::Category, SortOrder::Descending);
        assert_eq!(ids(&desc), vec![1, 2, 3]);

        let by_qty = shop.sorted(SortCriteria::Quantity, SortOrder::Descending);
        assert_eq!(ids(&by_qty), vec![2, 3, 1]);
    }

    #[test]
    fn clear_resets_counts_and_aggregates() {
        let mut shop = sample_shop();
        shop.clear();
        assert_eq!(shop.count(), 0);
        assert_eq!(shop.total_quantity(), 0);
        assert_eq!(shop.total_value(), 0.0);
        assert!(shop.out_of_stock().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_shop() -> impl Strategy<Value = SweetShop> {
            prop::collection::vec((1u32..500, 0i64..40), 0..40).prop_map(|rows| {
                let mut shop = SweetShop::new();
                for (i, (price, quantity)) in rows.into_iter().enumerate() {
                    let name = format!("Sweet {}", i % 7);
                    let id = SweetId::new(i as u64);
                    let s = Sweet::new(id, name, "Assorted", f64::from(price), quantity).unwrap();
                    shop.add(s).unwrap();
                }
                shop
            })
        }

        proptest! {
            /// Property: aggregates equal the sums over `all()`.
            #[test]
            fn aggregates_match_snapshot(shop in arb_shop()) {
                let all = shop.all();
                let qty: i128 = all.iter().map(|s| i128::from(s.quantity())).sum();
                let value: f64 = all.iter().map(|s| s.price() * s.quantity() as f64).sum();
                prop_assert_eq!(shop.total_quantity(), qty);
                prop_assert_eq!(shop.total_value(), value);
            }

            /// Property: out-of-stock and low-stock partition the sweets at or below the threshold.
            #[test]
            fn stock_reports_partition(shop in arb_shop(), threshold in 0i64..50) {
                let out = ids(&shop.out_of_stock());
                let low = ids(&shop.low_stock(threshold));
                prop_assert!(out.iter().all(|id| !low.contains(id)));

                let mut union: Vec<u64> = out.into_iter().chain(low).collect();
                union.sort_unstable();
                let mut expected: Vec<u64> = shop
                    .iter()
                    .filter(|s| s.quantity() <= threshold)
                    .map(|s| s.id_typed().get())
                    .collect();
                expected.sort_unstable();
                prop_assert_eq!(union, expected);
            }

            /// Property: sorting is ordered by the key and stable on ties.
            #[test]
            fn sorted_is_ordered_and_stable(shop in arb_shop(), ascending in any::<bool>()) {
                let order = SortOrder::from(ascending);
                let sorted = shop.sorted(SortCriteria::Quantity, order);
                prop_assert_eq!(sorted.len(), shop.count());
                for pair in sorted.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    let cmp = order.apply(a.quantity().cmp(&b.quantity()));
                    prop_assert!(cmp.is_le());
                    // ids were assigned in insertion order
                    if a.quantity() == b.quantity() {
                        prop_assert!(a.id_typed() < b.id_typed());
                    }
                }
            }
        }
    }
}
