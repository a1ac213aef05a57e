/// A projection derives a read-only view from a source state.
///
/// Projections are **disposable**: they hold no state of their own and can be
/// recomputed from the source at any time. Recomputing from the same source
/// with the same settings must always produce an equal view.
///
/// `Settings` carries presentation parameters that are not part of the source
/// state (formatting rules and the like); use `()` when there are none.
pub trait Projection: Sized {
    type Source;
    type Settings;

    /// Build the view from scratch.
    fn project(source: &Self::Source, settings: &Self::Settings) -> Self;
}
