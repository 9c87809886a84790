//! Behavior switches for [`RemoteImageView`](crate::RemoteImageView).

/// When a fetcher change is copied into the view's local state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncTiming {
    /// Copy on the same pass that observes the change.
    #[default]
    Immediate,
    /// Schedule the copy as a follow-up event, so the change shows one
    /// render pass later.
    Deferred,
}

/// Options for a [`RemoteImageView`](crate::RemoteImageView).
///
/// ```rust
/// use remote_image_view::{SyncTiming, ViewOptions};
///
/// let options = ViewOptions::default()
///     .with_sync(SyncTiming::Deferred)
///     .clear_on_url_change(true);
///
/// assert_eq!(options.sync, SyncTiming::Deferred);
/// assert!(options.clear_on_url_change);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub sync: SyncTiming,
    /// Drop the previous image as soon as the fetcher targets a new URL,
    /// showing the placeholder until new bytes arrive. Off by default: the
    /// old image stays up until it is replaced.
    pub clear_on_url_change: bool,
}

impl ViewOptions {
    pub fn with_sync(mut self, sync: SyncTiming) -> Self {
        self.sync = sync;
        self
    }

    pub fn clear_on_url_change(mut self, clear: bool) -> Self {
        self.clear_on_url_change = clear;
        self
    }
}
