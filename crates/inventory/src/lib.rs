//! Sweet shop inventory domain module.
//!
//! This crate contains business rules for the inventory, implemented purely as
//! deterministic, synchronous domain logic (no IO, no storage, no logging).

pub mod shop;
pub mod sort;
pub mod sweet;

pub use shop::SweetShop;
pub use sort::{SortCriteria, SortOrder};
pub use sweet::{Price, Sweet, SweetDraft, SweetId};
