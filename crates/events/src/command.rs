/// A discrete request to change domain state.
///
/// Commands express **intent** and may be rejected; accepted commands produce a
/// new state and, optionally, events describing what happened. They are never
/// persisted.
///
/// Commands are cloneable (they get logged and replayed in tests) and own all
/// of their data so they can be handed across threads to a single writer.
pub trait Command: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable tag identifying the command kind (e.g. `"ADD"`).
    fn kind(&self) -> &'static str;
}
