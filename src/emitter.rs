//! Event emitter that queues view events on a host.

use flume::Sender;

/// Handle that queues events on a [`ViewHost`](crate::ViewHost).
///
/// Clone this handle to hand event producers a way back into the host.
/// [`RemoteImageView`](crate::RemoteImageView) gives one clone to its
/// fetcher so that every fetcher state change becomes a
/// [`ViewEvent::FetcherChanged`](crate::ViewEvent::FetcherChanged).
///
/// `Emitter` wraps a channel sender, so it is cheap to clone and can be
/// used from any thread. Events are still processed one at a time on the
/// thread that drives the host.
///
/// # Example
///
/// ```rust
/// use remote_image_view::{Effect, ViewEvent};
///
/// // Effects receive the host's emitter when they run.
/// let effect: Effect<ViewEvent> = Effect::from_fn(|emitter| {
///     emitter.emit(ViewEvent::FetcherChanged);
/// });
/// ```
pub struct Emitter<Event: Send>(pub(crate) Sender<Event>);

impl<Event: Send> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send> Emitter<Event> {
    /// Create a new emitter from a channel sender.
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Emit an event.
    ///
    /// Queues the event for the host. If the host has been dropped the
    /// event is discarded.
    pub fn emit(&self, event: Event) {
        self.0.send(event).ok();
    }

    /// Emit an event and report whether a host is still listening.
    ///
    /// Returns `false` once the receiving host is gone. Fetchers use this
    /// to drop observers that belong to views no longer on screen.
    pub fn try_emit(&self, event: Event) -> bool {
        self.0.send(event).is_ok()
    }

    /// Whether the receiving host has been dropped.
    pub fn is_disconnected(&self) -> bool {
        self.0.is_disconnected()
    }
}
