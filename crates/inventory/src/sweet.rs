use serde::{Deserialize, Serialize};

use sweetshop_core::{DomainError, DomainResult, Entity, EntityId, ValueObject};

/// Sweet identifier (caller-assigned, unique within a shop).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SweetId(pub EntityId);

impl SweetId {
    pub const fn new(raw: u64) -> Self {
        Self(EntityId::new(raw))
    }

    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<u64> for SweetId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl core::str::FromStr for SweetId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<EntityId>().map(Self)
    }
}

impl core::fmt::Display for SweetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Unit price. Always finite and strictly positive.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !(value.is_finite() && value > 0.0) {
            return Err(DomainError::validation("price must be greater than 0"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A stocked sweet.
///
/// Fields are private: quantity only changes through [`Sweet::restock`] and
/// [`Sweet::purchase`], and every constructor path validates first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sweet {
    id: SweetId,
    name: String,
    category: String,
    price: Price,
    quantity: i64,
}

impl Sweet {
    /// Build a validated sweet.
    ///
    /// Rules are checked in order (name, category, price, quantity) and the
    /// first violation is returned.
    pub fn new(
        id: SweetId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<Self> {
        let name = name.into();
        let category = category.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        let price = Price::new(price)?;
        if quantity < 0 {
            return Err(DomainError::validation(
                "quantity must be greater than or equal to 0",
            ));
        }

        Ok(Self {
            id,
            name,
            category,
            price,
            quantity,
        })
    }

    pub fn id_typed(&self) -> SweetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price.get()
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// `price * quantity`.
    pub fn stock_value(&self) -> f64 {
        self.price.get() * self.quantity as f64
    }

    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Add `amount` units. Bounded only by the integer range.
    pub fn restock(&mut self, amount: i64) -> DomainResult<()> {
        ensure_positive_amount(amount)?;
        self.quantity = self
            .quantity
            .checked_add(amount)
            .ok_or_else(|| DomainError::validation("quantity would overflow"))?;
        Ok(())
    }

    /// Remove `amount` units; fails without mutation if fewer are held.
    pub fn purchase(&mut self, amount: i64) -> DomainResult<()> {
        ensure_positive_amount(amount)?;
        if amount > self.quantity {
            return Err(DomainError::insufficient_stock(self.quantity, amount));
        }
        self.quantity -= amount;
        Ok(())
    }
}

fn ensure_positive_amount(amount: i64) -> DomainResult<()> {
    if amount <= 0 {
        return Err(DomainError::validation("amount must be greater than 0"));
    }
    Ok(())
}

impl Entity for Sweet {
    type Id = SweetId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Sweet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Sweet(id={}, name={}, category={}, price={}, quantity={})",
            self.id, self.name, self.category, self.price, self.quantity
        )
    }
}

/// Unvalidated sweet shape, as read from seed files or other external input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SweetDraft {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
}

impl TryFrom<SweetDraft> for Sweet {
    type Error = DomainError;

    fn try_from(draft: SweetDraft) -> Result<Self, Self::Error> {
        Sweet::new(
            SweetId::new(draft.id),
            draft.name,
            draft.category,
            draft.price,
            draft.quantity,
        )
    }
}
