//! Declarative side effects run by the host after a render pass.

use crate::Emitter;

/// Declarative description of work to run after a render pass.
///
/// Effects are returned from [`Component::mount`](crate::Component::mount),
/// [`Component::on_appear`](crate::Component::on_appear) and
/// [`Component::update`](crate::Component::update). The host renders first
/// and runs the effect afterwards, so anything an effect emits is seen on
/// a later pass.
///
/// # Example
///
/// ```rust
/// use remote_image_view::{Effect, ViewEvent};
///
/// // Schedule a synchronization for the next pass
/// let effect = Effect::just(ViewEvent::Synchronize);
///
/// // Combine several effects
/// let effect = Effect::batch(vec![
///     Effect::just(ViewEvent::FetcherChanged),
///     Effect::just(ViewEvent::Synchronize),
/// ]);
///
/// // No side effects
/// let effect: Effect<ViewEvent> = Effect::none();
/// ```
#[allow(clippy::type_complexity)]
pub struct Effect<Event: Send>(Box<dyn Fn(&Emitter<Event>) + Send + 'static>);

impl<Event: Send + 'static> Effect<Event> {
    /// Run the effect against the host's emitter.
    pub fn execute(&self, emitter: &Emitter<Event>) {
        (self.0)(emitter);
    }

    /// Create an effect that emits a single event.
    ///
    /// The event is queued, not applied inline, which is how a component
    /// defers work to the next render pass.
    pub fn just(event: Event) -> Self
    where
        Event: Clone,
    {
        Self(Box::new(move |emitter: &Emitter<Event>| {
            emitter.emit(event.clone());
        }))
    }

    /// Create an effect from an arbitrary closure.
    ///
    /// Used for effects that touch collaborators, such as subscribing to a
    /// fetcher or asking it to fetch.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Emitter<Event>) + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Create an empty effect.
    pub fn none() -> Self {
        Self(Box::new(|_| {}))
    }

    /// Combine multiple effects into one, run in order.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        Self(Box::new(move |emitter: &Emitter<Event>| {
            for effect in &effects {
                effect.execute(emitter);
            }
        }))
    }
}
