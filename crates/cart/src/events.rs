use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_events::Event;

use crate::entry::CartEntry;
use crate::money::Money;

/// Event: CartUpdated (cart contents changed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartUpdated {
    pub revision: u64,
    pub total_item_count: u64,
    pub total_price_raw: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Event: OrderSubmitted (order placed, cart emptied).
///
/// Carries what was in the cart at submission; nothing is stored anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSubmitted {
    pub order_id: Uuid,
    pub entries: Vec<CartEntry>,
    pub total_item_count: u64,
    pub total: Money,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    CartUpdated(CartUpdated),
    OrderSubmitted(OrderSubmitted),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::CartUpdated(_) => "cart.updated",
            CartEvent::OrderSubmitted(_) => "cart.order.submitted",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::CartUpdated(e) => e.occurred_at,
            CartEvent::OrderSubmitted(e) => e.occurred_at,
        }
    }
}
