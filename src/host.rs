//! The host event loop that mounts and re-renders a component.

use flume::Receiver;

use crate::{Component, Emitter, Renderer};

/// The host that drives a [`Component`].
///
/// The host:
/// 1. Mounts the component via [`Component::mount`] and renders once
/// 2. Runs the mount effect, then the appearance effect from [`Component::on_appear`]
/// 3. Processes queued events through [`Component::update`]
/// 4. Renders after every event and hands the output to the [`Renderer`]
///
/// Events are queued through an [`Emitter`] that can be used from any
/// thread. They are processed one at a time, so render passes for one host
/// never overlap.
///
/// For tests with manual control, use [`TestViewHost`] with a
/// [`crate::TestRenderer`].
///
/// # Type Parameters
///
/// * `Event` - The component's event type
/// * `State` - The component's local state
/// * `Output` - What one render pass produces
/// * `View` - The component (implements [`Component`])
/// * `Render` - The output sink (implements [`Renderer`])
pub struct ViewHost<Event, State, Output, View, Render>
where
    Event: Send + 'static,
    State: Clone,
    View: Component<Event, State, Output>,
    Render: Renderer<Output>,
{
    view: View,
    renderer: Render,
    event_receiver: Receiver<Event>,
    state: State,
    emitter: Emitter<Event>,
    mounted: bool,
    _output: core::marker::PhantomData<Output>,
}

impl<Event, State, Output, View, Render> ViewHost<Event, State, Output, View, Render>
where
    Event: Send + 'static,
    State: Clone,
    View: Component<Event, State, Output>,
    Render: Renderer<Output>,
{
    /// Create a new host.
    ///
    /// Nothing is rendered until [`mount`](Self::mount) or
    /// [`run`](Self::run) is called.
    ///
    /// # Arguments
    ///
    /// * `view` - The component to host
    /// * `initial_state` - The component's state before mounting
    /// * `renderer` - Sink for each render pass
    pub fn new(view: View, initial_state: State, renderer: Render) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        ViewHost {
            view,
            renderer,
            event_receiver,
            state: initial_state,
            emitter: Emitter::new(event_sender),
            mounted: false,
            _output: core::marker::PhantomData,
        }
    }

    /// A handle for queuing events on this host.
    pub fn emitter(&self) -> Emitter<Event> {
        self.emitter.clone()
    }

    /// The component's current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Mount the component and make its first appearance.
    ///
    /// Renders the mounted state, runs the mount effect, then runs the
    /// appearance effect. Calling this again on a mounted host does nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let (state, effect) = self.view.mount(self.state.clone());
        self.state = state;

        let output = self.view.render(&self.state);
        self.renderer.render(output);

        effect.execute(&self.emitter);
        self.appear();
    }

    /// Signal an appearance event to the component.
    ///
    /// Use this when the view re-enters the hierarchy without being
    /// re-created.
    pub fn appear(&mut self) {
        let effect = self.view.on_appear(&self.state);
        effect.execute(&self.emitter);
    }

    /// Mount the component and process events until the channel closes.
    ///
    /// The host keeps its own emitter, so in practice this runs for as
    /// long as the future is polled. Drop the future to stop the loop.
    pub async fn run(&mut self) {
        self.mount();

        while let Ok(event) = self.event_receiver.recv_async().await {
            self.step(event);
        }
    }

    /// Process every event that is already queued.
    pub fn process_queued_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.step(event);
        }
    }

    fn step(&mut self, event: Event) {
        let (state, effect) = self.view.update(event, &self.state);
        self.state = state;

        let output = self.view.render(&self.state);
        self.renderer.render(output);

        effect.execute(&self.emitter);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test host driver for manual event processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Returned by [`TestViewHost::mount`]. Events queued by fetchers or effects
/// stay queued until [`process_events`](Self::process_events) is called.
pub struct TestViewDriver<Event, State, Output, View, Render>
where
    Event: Send + 'static,
    State: Clone,
    View: Component<Event, State, Output>,
    Render: Renderer<Output>,
{
    host: ViewHost<Event, State, Output, View, Render>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, State, Output, View, Render> TestViewDriver<Event, State, Output, View, Render>
where
    Event: Send + 'static,
    State: Clone,
    View: Component<Event, State, Output>,
    Render: Renderer<Output>,
{
    /// Process all queued events.
    ///
    /// Each event is one render pass. Effects run during processing may
    /// queue more events, which are processed in the same call.
    pub fn process_events(&mut self) {
        self.host.process_queued_events();
    }

    /// Signal a re-appearance of the view.
    pub fn appear(&mut self) {
        self.host.appear();
    }

    /// The component's current state.
    pub fn state(&self) -> &State {
        self.host.state()
    }

    /// A handle for queuing events on the hosted component.
    pub fn emitter(&self) -> Emitter<Event> {
        self.host.emitter()
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test host with manual event processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Unlike [`ViewHost::run`], nothing is processed automatically. Tests call
/// [`process_events`](TestViewDriver::process_events) on the returned
/// driver, which gives precise control over when render passes happen.
///
/// ```rust
/// use remote_image_view::{
///     DisplayImage, ObservableFetcher, RemoteImageView, TestRenderer, TestViewHost,
///     ViewState, create_test_spawner,
/// };
/// # use futures::future::BoxFuture;
/// # use remote_image_view::{ImageLoader, LoadError};
/// # use url::Url;
/// # struct NoLoader;
/// # impl ImageLoader for NoLoader {
/// #     fn load(&self, url: &Url) -> BoxFuture<'static, Result<Vec<u8>, LoadError>> {
/// #         let url = url.clone();
/// #         Box::pin(async move { Err::<Vec<u8>, _>(LoadError::NotFound(url)) })
/// #     }
/// # }
/// use std::sync::Arc;
///
/// let fetcher = Arc::new(ObservableFetcher::new(NoLoader, create_test_spawner()));
/// let placeholder = DisplayImage::solid(2, 2, [128, 128, 128, 255]);
/// let view = RemoteImageView::new(placeholder.clone(), fetcher, |image| image);
///
/// let renderer = TestRenderer::new();
/// let host = TestViewHost::new(view, ViewState::default(), renderer.clone());
/// let mut driver = host.mount();
/// driver.process_events();
///
/// assert_eq!(renderer.last(), Some(placeholder));
/// ```
pub struct TestViewHost<Event, State, Output, View, Render>
where
    Event: Send + 'static,
    State: Clone,
    View: Component<Event, State, Output>,
    Render: Renderer<Output>,
{
    host: ViewHost<Event, State, Output, View, Render>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, State, Output, View, Render> TestViewHost<Event, State, Output, View, Render>
where
    Event: Send + 'static,
    State: Clone,
    View: Component<Event, State, Output>,
    Render: Renderer<Output>,
{
    /// Create a new test host.
    ///
    /// # Arguments
    ///
    /// * `view` - The component to host
    /// * `initial_state` - The component's state before mounting
    /// * `renderer` - Sink for each render pass
    pub fn new(view: View, initial_state: State, renderer: Render) -> Self {
        TestViewHost {
            host: ViewHost::new(view, initial_state, renderer),
        }
    }

    /// Mount the component and return a driver for manual event processing.
    ///
    /// Renders once, runs the mount and appearance effects, and leaves any
    /// events they queued unprocessed.
    pub fn mount(mut self) -> TestViewDriver<Event, State, Output, View, Render> {
        self.host.mount();

        TestViewDriver { host: self.host }
    }
}
