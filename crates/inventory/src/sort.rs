//! Ordering of sweets for listings.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use sweetshop_core::DomainError;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::sweet::Sweet;

/// Field a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriteria {
    Name,
    Category,
    Price,
    Quantity,
}

impl SortCriteria {
    pub const ALL: [SortCriteria; 4] = [
        SortCriteria::Name,
        SortCriteria::Category,
        SortCriteria::Price,
        SortCriteria::Quantity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortCriteria::Name => "name",
            SortCriteria::Category => "category",
            SortCriteria::Price => "price",
            SortCriteria::Quantity => "quantity",
        }
    }

    /// Ascending comparison of two sweets on this field.
    pub fn compare(self, a: &Sweet, b: &Sweet) -> Ordering {
        match self {
            SortCriteria::Name => collate(a.name(), b.name()),
            SortCriteria::Category => collate(a.category(), b.category()),
            SortCriteria::Price => a.price().total_cmp(&b.price()),
            SortCriteria::Quantity => a.quantity().cmp(&b.quantity()),
        }
    }
}

impl core::fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortCriteria {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortCriteria::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown sort criteria {s:?} (expected name, category, price or quantity)"
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Apply the order to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    /// `true` means ascending.
    fn from(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

/// Human-oriented string ordering, in three levels:
///
/// 1. base letters, ignoring case and accents (`Éclair` sorts with `e`);
/// 2. accents, unaccented first (`e` before `é`);
/// 3. case, lowercase first (`a` before `A`).
fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_ranks(a).cmp(case_ranks(b)))
}

/// Canonically decomposed and lowercased, accents kept as combining marks.
fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    folded(s).filter(|c| !is_combining_mark(*c))
}

fn case_ranks(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c.is_uppercase() { 1 } else { 0 })
}
