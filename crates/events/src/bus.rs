//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus fans published messages out to every live subscriber. It does not
//! store anything: a subscriber only sees messages published after it
//! subscribed, in the order the publisher emitted them.

use std::sync::mpsc::Receiver;

/// A subscription to a message stream.
///
/// Each subscription receives its own copy of every message (broadcast).
/// Dropping the subscription unsubscribes it on the next publish.
///
/// ```ignore
/// let subscription = store.subscribe();
/// while let Ok(envelope) = subscription.try_recv() {
///     rerender(envelope.payload());
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain every message that is already queued.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic pub/sub abstraction.
///
/// `publish` is called by the single writer after a state change has been
/// committed, so a failed publish never rolls anything back; callers decide
/// whether to log or surface it.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
