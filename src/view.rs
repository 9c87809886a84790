//! The remote image view component.

use std::sync::Arc;

use tracing::{debug, trace};
use url::Url;

use crate::{
    Component, DisplayImage, Effect, Emitter, ImageDecoder, PlatformDecoder, RemoteImageFetcher,
    SyncTiming, ViewOptions,
};

/// Events a [`RemoteImageView`] reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// The fetcher's URL or bytes changed.
    FetcherChanged,
    /// Copy the fetcher's current state into the view.
    Synchronize,
}

/// Local snapshot of the fetcher kept by a [`RemoteImageView`].
///
/// `image_data` only ever takes non-empty buffers from the fetcher, so
/// once an image has arrived it stays until a newer one replaces it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Last URL seen on the fetcher.
    pub previous_url: Option<Url>,
    /// Last non-empty bytes seen on the fetcher.
    pub image_data: Vec<u8>,
}

/// Shows an image fetched from a remote location, with a placeholder until
/// it arrives.
///
/// Whatever is shown goes through the `content` function: the decoded
/// image once one is available, the placeholder otherwise. An empty
/// buffer, bytes that fail to decode and a fetcher without a URL all look
/// the same from outside: `content(placeholder)`.
///
/// The view asks its fetcher to fetch once per appearance and re-renders
/// whenever the fetcher reports a change.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use futures::future::BoxFuture;
/// use remote_image_view::{
///     create_test_spawner, DisplayImage, ImageLoader, LoadError, ObservableFetcher,
///     RemoteImageView, TestRenderer, TestViewHost, ViewState,
/// };
/// use url::Url;
///
/// struct Offline;
///
/// impl ImageLoader for Offline {
///     fn load(&self, url: &Url) -> BoxFuture<'static, Result<Vec<u8>, LoadError>> {
///         let url = url.clone();
///         Box::pin(async move { Err::<Vec<u8>, _>(LoadError::NotFound(url)) })
///     }
/// }
///
/// let url = Url::parse("https://example.com/avatar.png").unwrap();
/// let fetcher = Arc::new(ObservableFetcher::new(Offline, create_test_spawner()).with_url(url));
/// let placeholder = DisplayImage::solid(4, 4, [200, 200, 200, 255]);
///
/// let view = RemoteImageView::new(placeholder, fetcher, |image| (image.width(), image.height()));
///
/// let renderer = TestRenderer::new();
/// let mut driver = TestViewHost::new(view, ViewState::default(), renderer.clone()).mount();
/// driver.process_events();
///
/// assert_eq!(renderer.last(), Some((4, 4)));
/// ```
pub struct RemoteImageView<F, C, D = PlatformDecoder> {
    placeholder: DisplayImage,
    fetcher: Arc<F>,
    content: C,
    decoder: D,
    options: ViewOptions,
}

impl<F, C> RemoteImageView<F, C> {
    /// Build a view from a placeholder, a shared fetcher and a content
    /// function.
    ///
    /// Nothing is validated here. A fetcher without a URL simply keeps the
    /// placeholder on screen.
    pub fn new<Output>(placeholder: DisplayImage, fetcher: Arc<F>, content: C) -> Self
    where
        C: Fn(DisplayImage) -> Output,
    {
        Self {
            placeholder,
            fetcher,
            content,
            decoder: PlatformDecoder,
            options: ViewOptions::default(),
        }
    }
}

impl<F, C, D> RemoteImageView<F, C, D> {
    /// Swap the decoder used to turn bytes into images.
    pub fn with_decoder<D2>(self, decoder: D2) -> RemoteImageView<F, C, D2> {
        RemoteImageView {
            placeholder: self.placeholder,
            fetcher: self.fetcher,
            content: self.content,
            decoder,
            options: self.options,
        }
    }

    /// Replace the view's [`ViewOptions`].
    pub fn with_options(mut self, options: ViewOptions) -> Self {
        self.options = options;
        self
    }
}

impl<F, C, D> RemoteImageView<F, C, D>
where
    F: RemoteImageFetcher,
    D: ImageDecoder,
{
    fn synchronize(&self, state: &ViewState) -> ViewState {
        let mut next = state.clone();

        let url = self.fetcher.url();
        if next.previous_url != url {
            trace!(from = ?next.previous_url, to = ?url, "remote image url changed");
            if self.options.clear_on_url_change {
                next.image_data.clear();
            }
            next.previous_url = url;
        }

        let image_data = self.fetcher.image_data();
        if !image_data.is_empty() {
            next.image_data = image_data;
        }

        next
    }

    fn decoded_image(&self, state: &ViewState) -> Option<DisplayImage> {
        if state.image_data.is_empty() {
            return None;
        }

        match self.decoder.decode(&state.image_data) {
            Ok(image) => Some(image),
            Err(error) => {
                debug!(url = ?state.previous_url, %error, "could not decode remote image");
                None
            }
        }
    }
}

impl<F, C, D, Output> Component<ViewEvent, ViewState, Output> for RemoteImageView<F, C, D>
where
    F: RemoteImageFetcher + Send + Sync + 'static,
    C: Fn(DisplayImage) -> Output,
    D: ImageDecoder,
{
    fn mount(&self, state: ViewState) -> (ViewState, Effect<ViewEvent>) {
        let fetcher = self.fetcher.clone();
        let subscribe = Effect::from_fn(move |emitter: &Emitter<ViewEvent>| {
            let emitter = emitter.clone();
            fetcher.observe(Box::new(move || emitter.try_emit(ViewEvent::FetcherChanged)));
        });

        match self.options.sync {
            // Re-synchronize once subscribed: changes between the snapshot
            // and the subscription produce no notification.
            SyncTiming::Immediate => (
                self.synchronize(&state),
                Effect::batch(vec![subscribe, Effect::just(ViewEvent::FetcherChanged)]),
            ),
            SyncTiming::Deferred => (
                state,
                Effect::batch(vec![subscribe, Effect::just(ViewEvent::Synchronize)]),
            ),
        }
    }

    fn on_appear(&self, _state: &ViewState) -> Effect<ViewEvent> {
        let fetcher = self.fetcher.clone();
        Effect::from_fn(move |_| fetcher.fetch())
    }

    fn update(&self, event: ViewEvent, state: &ViewState) -> (ViewState, Effect<ViewEvent>) {
        match (event, self.options.sync) {
            (ViewEvent::FetcherChanged, SyncTiming::Deferred) => {
                (state.clone(), Effect::just(ViewEvent::Synchronize))
            }
            (ViewEvent::FetcherChanged, SyncTiming::Immediate) | (ViewEvent::Synchronize, _) => {
                (self.synchronize(state), Effect::none())
            }
        }
    }

    fn render(&self, state: &ViewState) -> Output {
        let image = self.decoded_image(state);
        trace!(fetched = image.is_some(), "rendering remote image");

        (self.content)(image.unwrap_or_else(|| self.placeholder.clone()))
    }
}
