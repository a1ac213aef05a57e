//! Cart view-model: the read-only projection views render from.

use serde::{Deserialize, Serialize};

use storefront_core::{Sku, StateRoot};
use storefront_events::Projection;

use crate::config::PriceFormat;
use crate::entry::CartEntry;
use crate::ledger::CartState;
use crate::money::Money;

/// Derived totals and display ordering for one [`CartState`] revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartViewModel {
    /// Revision of the state this snapshot was projected from.
    pub revision: u64,
    pub total_item_count: u64,
    /// `total_price_raw` rendered for display, e.g. `"$25.00"`.
    pub total_price: String,
    pub total_price_raw: Money,
    /// Entries sorted by SKU sequence number; ties keep insertion order.
    pub ordered_entries: Vec<CartEntry>,
}

impl CartViewModel {
    pub fn project(state: &CartState, format: &PriceFormat) -> Self {
        let total_item_count = state
            .entries()
            .iter()
            .map(|e| u64::from(e.quantity))
            .sum();
        let total_price_raw: Money = state.entries().iter().map(CartEntry::line_total).sum();

        let mut ordered_entries = state.entries().to_vec();
        // `sort_by_key` is stable.
        ordered_entries.sort_by_key(|e| e.sku.sort_key());

        Self {
            revision: state.revision(),
            total_item_count,
            total_price: format.format(total_price_raw),
            total_price_raw,
            ordered_entries,
        }
    }

    /// Snapshot of an empty cart.
    pub fn empty(format: &PriceFormat) -> Self {
        Self::project(&CartState::new(), format)
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_entries.is_empty()
    }

    /// Whether placing the order is allowed (at least one item).
    pub fn can_submit(&self) -> bool {
        self.total_item_count > 0
    }

    /// Whether the product is already in the cart (product card marker).
    pub fn contains(&self, sku: &Sku) -> bool {
        self.entry(sku).is_some()
    }

    pub fn entry(&self, sku: &Sku) -> Option<&CartEntry> {
        self.ordered_entries.iter().find(|e| &e.sku == sku)
    }
}

impl Projection for CartViewModel {
    type Source = CartState;
    type Settings = PriceFormat;

    fn project(source: &CartState, settings: &PriceFormat) -> Self {
        CartViewModel::project(source, settings)
    }
}
