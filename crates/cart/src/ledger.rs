//! Cart ledger: the authoritative cart contents and the reducer that evolves them.

use serde::Serialize;

use storefront_core::{DomainError, DomainResult, Reducer, Sku, StateRoot};

use crate::command::{CartCommand, CommandRequest};
use crate::entry::CartEntry;

/// Cart contents in insertion order.
///
/// A value type: commands never mutate a state, they produce the next one.
/// `revision` goes up by one exactly when a command changes the entries, so a
/// no-op command yields a state equal to its input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartState {
    entries: Vec<CartEntry>,
    revision: u64,
}

impl CartState {
    /// Empty cart at the start of a session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from pre-existing lines (e.g. test fixtures).
    ///
    /// Rejects duplicate SKUs and zero quantities.
    pub fn from_entries(entries: Vec<CartEntry>) -> DomainResult<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.quantity == 0 {
                return Err(DomainError::validation(format!(
                    "quantity for sku {} must be at least 1",
                    entry.sku
                )));
            }
            if entries[..i].iter().any(|e| e.sku == entry.sku) {
                return Err(DomainError::validation(format!(
                    "duplicate cart entry for sku {}",
                    entry.sku
                )));
            }
        }
        Ok(Self {
            entries,
            revision: 0,
        })
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, sku: &Sku) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.sku == sku)
    }

    pub fn contains(&self, sku: &Sku) -> bool {
        self.get(sku).is_some()
    }

    fn replaced_by(&self, entries: Vec<CartEntry>) -> Self {
        Self {
            entries,
            revision: self.revision + 1,
        }
    }
}

impl StateRoot for CartState {
    fn revision(&self) -> u64 {
        self.revision
    }
}

impl Reducer for CartState {
    type Command = CartCommand;
    type Error = DomainError;

    fn reduce(&self, command: &CartCommand) -> DomainResult<Self> {
        apply(self, command)
    }
}

/// Apply a command to `state`, returning the next state.
///
/// Pure: `state` is only read, so on error the caller still holds it unchanged.
pub fn apply(state: &CartState, command: &CartCommand) -> DomainResult<CartState> {
    match command {
        CartCommand::Add(candidate) => Ok(add(state, candidate)),
        CartCommand::Remove(entry) => Ok(remove(state, &entry.sku)),
        CartCommand::SetQuantity(entry) => set_quantity(state, entry),
        CartCommand::Submit => Ok(submit(state)),
    }
}

/// Decode a tagged request and apply it.
///
/// Surfaces `UnknownCommand` and `InvalidCommand` from decoding as well as the
/// reducer's own failures.
pub fn apply_request(state: &CartState, request: &CommandRequest) -> DomainResult<CartState> {
    let command = CartCommand::try_from(request)?;
    apply(state, &command)
}

fn add(state: &CartState, candidate: &CartEntry) -> CartState {
    let mut entries = state.entries.clone();

    match entries.iter_mut().find(|e| e.sku == candidate.sku) {
        // Keep the existing name and price; only the quantity moves.
        Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
        None => entries.push(candidate.with_quantity(1)),
    }

    state.replaced_by(entries)
}

fn remove(state: &CartState, sku: &Sku) -> CartState {
    if !state.contains(sku) {
        return state.clone();
    }

    let entries = state
        .entries
        .iter()
        .filter(|e| &e.sku != sku)
        .cloned()
        .collect();

    state.replaced_by(entries)
}

fn set_quantity(state: &CartState, target: &CartEntry) -> DomainResult<CartState> {
    let Some(index) = state.entries.iter().position(|e| e.sku == target.sku) else {
        return Err(DomainError::precondition(format!(
            "item {} must be in the cart to update its quantity",
            target.sku
        )));
    };

    if target.quantity == 0 {
        return Err(DomainError::invalid_command(format!(
            "quantity for {} must be at least 1; use REMOVE to drop the line",
            target.sku
        )));
    }

    if state.entries[index].quantity == target.quantity {
        return Ok(state.clone());
    }

    let mut entries = state.entries.clone();
    entries[index].quantity = target.quantity;
    Ok(state.replaced_by(entries))
}

fn submit(state: &CartState) -> CartState {
    if state.is_empty() {
        return state.clone();
    }
    state.replaced_by(Vec::new())
}
