use serde::{Deserialize, Serialize};

use storefront_core::{DomainResult, Entity, Sku};

use crate::money::Money;

/// One product line in the cart.
///
/// Inside a [`CartState`](crate::CartState) the quantity is always at least 1
/// and no two entries share a SKU.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartEntry {
    pub sku: Sku,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(sku: Sku, name: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        Self {
            sku,
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// A catalog candidate as a product card submits it: quantity 1.
    pub fn candidate(sku: Sku, name: impl Into<String>, unit_price: Money) -> Self {
        Self::new(sku, name, unit_price, 1)
    }

    /// Build a candidate from raw catalog fields (`"item0001"`, `"Widget"`, `"9.99"`).
    pub fn from_catalog(sku: &str, name: &str, unit_price: &str) -> DomainResult<Self> {
        Ok(Self::candidate(
            Sku::parse(sku)?,
            name,
            Money::from_major_str(unit_price)?,
        ))
    }

    /// Same line with a different quantity (payload shape for `SetQuantity`).
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Row subtotal: unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

impl Entity for CartEntry {
    type Id = Sku;

    fn id(&self) -> &Sku {
        &self.sku
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::DomainError;

    #[test]
    fn from_catalog_parses_fields() {
        let entry = CartEntry::from_catalog("item0001", "Widget", "9.99").unwrap();
        assert_eq!(entry.sku.as_str(), "item0001");
        assert_eq!(entry.name, "Widget");
        assert_eq!(entry.unit_price, Money::from_cents(999));
        assert_eq!(entry.quantity, 1);
    }

    #[test]
    fn from_catalog_rejects_bad_fields() {
        assert!(matches!(
            CartEntry::from_catalog(" ", "Widget", "9.99"),
            Err(DomainError::InvalidId(_))
        ));
        assert!(matches!(
            CartEntry::from_catalog("item0001", "Widget", "nine"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn line_total_multiplies_quantity() {
        let entry = CartEntry::from_catalog("item0002", "Gadget", "10.00")
            .unwrap()
            .with_quantity(3);
        assert_eq!(entry.line_total(), Money::from_cents(3000));
    }

    #[test]
    fn identity_is_the_sku() {
        let a = CartEntry::from_catalog("item0003", "Gizmo", "1.00").unwrap();
        let b = a.with_quantity(7);
        assert!(a.same_identity_as(&b));
        assert_ne!(a, b);
    }
}
