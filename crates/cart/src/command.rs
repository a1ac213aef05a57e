//! Cart commands: the typed enum the ledger consumes and the loosely-typed
//! request shape UI collaborators send.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};
use storefront_events::Command;

use crate::entry::CartEntry;

/// Command tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Add,
    Remove,
    SetQuantity,
    Submit,
}

impl CommandKind {
    pub const ALL: [CommandKind; 4] = [
        CommandKind::Add,
        CommandKind::Remove,
        CommandKind::SetQuantity,
        CommandKind::Submit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::Add => "ADD",
            CommandKind::Remove => "REMOVE",
            CommandKind::SetQuantity => "QUANTITY",
            CommandKind::Submit => "SUBMIT",
        }
    }

    pub fn requires_payload(self) -> bool {
        !matches!(self, CommandKind::Submit)
    }
}

impl core::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::unknown_command(s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    /// Put one more unit of the product in the cart.
    Add(CartEntry),
    /// Drop the line with the payload's SKU.
    Remove(CartEntry),
    /// Replace the quantity of the line with the payload's SKU.
    SetQuantity(CartEntry),
    /// Place the order and empty the cart.
    Submit,
}

impl CartCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            CartCommand::Add(_) => CommandKind::Add,
            CartCommand::Remove(_) => CommandKind::Remove,
            CartCommand::SetQuantity(_) => CommandKind::SetQuantity,
            CartCommand::Submit => CommandKind::Submit,
        }
    }

    pub fn payload(&self) -> Option<&CartEntry> {
        match self {
            CartCommand::Add(e) | CartCommand::Remove(e) | CartCommand::SetQuantity(e) => Some(e),
            CartCommand::Submit => None,
        }
    }
}

impl Command for CartCommand {
    fn kind(&self) -> &'static str {
        CartCommand::kind(self).as_str()
    }
}

/// A tagged command as issued by product cards and cart rows:
/// `{ "kind": "ADD", "payload": { ... } }`.
///
/// The payload is optional on the wire; converting into a [`CartCommand`]
/// enforces that every kind except `SUBMIT` carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<CartEntry>,
}

impl CommandRequest {
    pub fn new(kind: impl Into<String>, payload: Option<CartEntry>) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    pub fn add(entry: CartEntry) -> Self {
        Self::new(CommandKind::Add.as_str(), Some(entry))
    }

    pub fn remove(entry: CartEntry) -> Self {
        Self::new(CommandKind::Remove.as_str(), Some(entry))
    }

    pub fn set_quantity(entry: CartEntry) -> Self {
        Self::new(CommandKind::SetQuantity.as_str(), Some(entry))
    }

    pub fn submit() -> Self {
        Self::new(CommandKind::Submit.as_str(), None)
    }

    /// Decode a JSON request; malformed JSON is an `InvalidCommand`.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::invalid_command(format!("malformed command request: {e}")))
    }
}

impl TryFrom<&CommandRequest> for CartCommand {
    type Error = DomainError;

    fn try_from(request: &CommandRequest) -> Result<Self, Self::Error> {
        let kind: CommandKind = request.kind.parse()?;

        let payload = match (&request.payload, kind.requires_payload()) {
            (_, false) => return Ok(CartCommand::Submit),
            (Some(entry), true) => entry.clone(),
            (None, true) => {
                return Err(DomainError::invalid_command(format!(
                    "payload missing in {kind} command"
                )));
            }
        };

        Ok(match kind {
            CommandKind::Add => CartCommand::Add(payload),
            CommandKind::Remove => CartCommand::Remove(payload),
            CommandKind::SetQuantity => CartCommand::SetQuantity(payload),
            CommandKind::Submit => CartCommand::Submit,
        })
    }
}

impl TryFrom<CommandRequest> for CartCommand {
    type Error = DomainError;

    fn try_from(request: CommandRequest) -> Result<Self, Self::Error> {
        CartCommand::try_from(&request)
    }
}

impl From<CartCommand> for CommandRequest {
    fn from(command: CartCommand) -> Self {
        let kind = command.kind();
        let payload = match command {
            CartCommand::Add(e) | CartCommand::Remove(e) | CartCommand::SetQuantity(e) => Some(e),
            CartCommand::Submit => None,
        };
        CommandRequest::new(kind.as_str(), payload)
    }
}
