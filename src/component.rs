//! Component trait defining the host's view contract.

use crate::Effect;

/// A view the [`ViewHost`](crate::ViewHost) can mount and re-render.
///
/// Implementations provide four hooks:
/// - [`mount`](Self::mount): prepare state once when the view enters the hierarchy
/// - [`on_appear`](Self::on_appear): side effects for each appearance event
/// - [`update`](Self::update): transform (Event, State) → (State, Effect)
/// - [`render`](Self::render): derive output from state
///
/// [`RemoteImageView`](crate::RemoteImageView) is the component this crate
/// ships.
pub trait Component<Event: Send + 'static, State, Output> {
    /// Prepare the state when the view is mounted.
    ///
    /// Called once per host, before the first render pass. The returned
    /// effect runs right after that pass, which makes it the place to
    /// subscribe to external state.
    fn mount(&self, state: State) -> (State, Effect<Event>);

    /// Side effects for an appearance event.
    ///
    /// The host calls this after the first render pass and again whenever
    /// the view re-appears. Render passes alone never trigger it.
    fn on_appear(&self, _state: &State) -> Effect<Event> {
        Effect::none()
    }

    /// Reduce an event to a new state and side effects.
    ///
    /// All state changes happen here. The host renders the returned state
    /// before running the returned effect.
    fn update(&self, event: Event, state: &State) -> (State, Effect<Event>);

    /// Produce the rendered output for a state.
    ///
    /// Must not fail. Anything that cannot be rendered degrades inside the
    /// component.
    fn render(&self, state: &State) -> Output;
}
