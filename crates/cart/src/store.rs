//! Cart store: the single writer for a shopper's cart.
//!
//! Build one `CartStore` at the application root and hand `&CartStore` (or an
//! `Arc`) to the components that issue commands or render totals. Every
//! dispatch runs under one lock, in call order:
//!
//! ```text
//! dispatch(command)
//!   ↓
//! 1. ledger::apply (pure; on error nothing changes)
//!   ↓
//! 2. replace the state, re-project the view-model if the revision moved
//!   ↓
//! 3. publish CartUpdated / OrderSubmitted to subscribers
//!   ↓
//! 4. return the new snapshot
//! ```
//!
//! Snapshots are immutable `Arc<CartViewModel>`s; a command that changes
//! nothing returns the previous `Arc`, so `Arc::ptr_eq` doubles as a cheap
//! change check for renderers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use uuid::Uuid;

use storefront_core::{DomainResult, StateRoot};
use storefront_events::{EventBus, EventEnvelope, InMemoryEventBus, Subscription};

use crate::command::{CartCommand, CommandRequest};
use crate::config::PriceFormat;
use crate::events::{CartEvent, CartUpdated, OrderSubmitted};
use crate::ledger::{self, CartState};
use crate::view_model::CartViewModel;

pub type CartEnvelope = EventEnvelope<CartEvent>;

#[derive(Debug)]
struct Slot {
    state: CartState,
    snapshot: Arc<CartViewModel>,
    last_sequence: u64,
}

#[derive(Debug)]
pub struct CartStore<B = InMemoryEventBus<CartEnvelope>>
where
    B: EventBus<CartEnvelope>,
{
    slot: Mutex<Slot>,
    format: PriceFormat,
    bus: B,
}

impl CartStore {
    /// Empty cart publishing to an in-process bus.
    pub fn new(format: PriceFormat) -> Self {
        Self::with_bus(format, InMemoryEventBus::new())
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(PriceFormat::default())
    }
}

impl<B> CartStore<B>
where
    B: EventBus<CartEnvelope>,
{
    pub fn with_bus(format: PriceFormat, bus: B) -> Self {
        let snapshot = Arc::new(CartViewModel::empty(&format));
        Self {
            slot: Mutex::new(Slot {
                state: CartState::new(),
                snapshot,
                last_sequence: 0,
            }),
            format,
            bus,
        }
    }

    pub fn price_format(&self) -> &PriceFormat {
        &self.format
    }

    /// Current read-only snapshot.
    pub fn snapshot(&self) -> Arc<CartViewModel> {
        Arc::clone(&self.lock().snapshot)
    }

    /// Copy of the current ledger state.
    pub fn state(&self) -> CartState {
        self.lock().state.clone()
    }

    /// Receive every event published after this call.
    pub fn subscribe(&self) -> Subscription<CartEnvelope> {
        self.bus.subscribe()
    }

    /// Decode a tagged request and dispatch it.
    pub fn dispatch_request(&self, request: CommandRequest) -> DomainResult<Arc<CartViewModel>> {
        let command = CartCommand::try_from(&request).inspect_err(|err| {
            tracing::error!(kind = %request.kind, error = %err, "cart command rejected");
        })?;
        self.dispatch(command)
    }

    /// Apply `command` and return the resulting snapshot.
    ///
    /// Rejected commands are logged and returned as errors; the cart is left
    /// exactly as it was.
    pub fn dispatch(&self, command: CartCommand) -> DomainResult<Arc<CartViewModel>> {
        let kind = command.kind();
        let mut slot = self.lock();

        let next = ledger::apply(&slot.state, &command).inspect_err(|err| {
            tracing::error!(kind = %kind, error = %err, "cart command rejected");
        })?;

        let changed = next.revision() != slot.state.revision();
        let previous = Arc::clone(&slot.snapshot);
        slot.state = next;
        if changed {
            slot.snapshot = Arc::new(CartViewModel::project(&slot.state, &self.format));
        }

        tracing::debug!(
            kind = %kind,
            revision = slot.state.revision(),
            total_item_count = slot.snapshot.total_item_count,
            changed,
            "cart command applied"
        );

        let occurred_at = Utc::now();
        let event = match command {
            CartCommand::Submit => {
                let order_id = Uuid::now_v7();
                tracing::info!(
                    %order_id,
                    total_item_count = previous.total_item_count,
                    total = %previous.total_price,
                    "order submitted"
                );
                Some(CartEvent::OrderSubmitted(OrderSubmitted {
                    order_id,
                    entries: previous.ordered_entries.clone(),
                    total_item_count: previous.total_item_count,
                    total: previous.total_price_raw,
                    occurred_at,
                }))
            }
            _ if changed => Some(CartEvent::CartUpdated(CartUpdated {
                revision: slot.snapshot.revision,
                total_item_count: slot.snapshot.total_item_count,
                total_price_raw: slot.snapshot.total_price_raw,
                occurred_at,
            })),
            _ => None,
        };

        if let Some(event) = event {
            self.publish(&mut slot, event);
        }

        Ok(Arc::clone(&slot.snapshot))
    }

    // Publishing happens under the lock so sequence numbers follow dispatch order.
    fn publish(&self, slot: &mut Slot, event: CartEvent) {
        slot.last_sequence += 1;
        let envelope = EventEnvelope::new(Uuid::now_v7(), slot.last_sequence, event);
        if let Err(err) = self.bus.publish(envelope) {
            tracing::warn!(
                sequence_number = slot.last_sequence,
                error = ?err,
                "failed to publish cart event"
            );
        }
    }

    // The state is only ever swapped wholesale, so a poisoned guard still holds
    // a consistent cart.
    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
