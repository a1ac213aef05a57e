//! Shopping cart domain module.
//!
//! The ledger is a pure reducer over [`CartState`]; the view-model is a pure
//! projection of it. [`CartStore`] is the single writer that owns the state,
//! applies commands in dispatch order and hands out read-only snapshots.

pub mod command;
pub mod config;
pub mod entry;
pub mod events;
pub mod ledger;
pub mod money;
pub mod store;
pub mod view_model;

pub use command::{CartCommand, CommandKind, CommandRequest};
pub use config::PriceFormat;
pub use entry::CartEntry;
pub use events::{CartEvent, CartUpdated, OrderSubmitted};
pub use ledger::{CartState, apply, apply_request};
pub use money::Money;
pub use store::CartStore;
pub use view_model::CartViewModel;

pub use storefront_core::{DomainError, DomainResult, Sku};
