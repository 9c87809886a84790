//! The fetcher contract and an observable implementation of it.

use std::sync::Arc;

use futures::future::BoxFuture;
use spin::Mutex;
use tracing::{debug, warn};
use url::Url;

use crate::{LoadError, Spawner};

/// Change observer registered with a fetcher.
///
/// Called after every observable state change. Returns `false` once
/// whoever registered it has gone away, after which the fetcher drops it.
pub type Observer = Box<dyn Fn() -> bool + Send + Sync>;

/// Source of raw image bytes for a [`RemoteImageView`](crate::RemoteImageView).
///
/// A fetcher exposes a current URL and the bytes fetched for it, and
/// notifies its observers whenever either changes. The view only reads this
/// state and asks for fetches; it never sets the URL or cancels work.
///
/// One fetcher maps to one URL at a time. Driving several views that are
/// on screen together from one fetcher is a misuse: they race over whose
/// bytes land where.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteImageFetcher {
    /// The resource currently targeted, if any.
    fn url(&self) -> Option<Url>;

    /// Bytes fetched for the current URL. Empty until they arrive.
    fn image_data(&self) -> Vec<u8>;

    /// Start retrieving the current URL.
    ///
    /// Fire-and-forget: completion is only visible through
    /// [`image_data`](Self::image_data) and the observers. Calling this
    /// repeatedly may start repeated loads.
    fn fetch(&self);

    /// Register an observer for state changes.
    fn observe(&self, observer: Observer);
}

/// Loads the bytes behind a URL.
///
/// This is the network seam of [`ObservableFetcher`]. Implement it over
/// whatever HTTP client or asset store you use.
#[cfg_attr(test, mockall::automock)]
pub trait ImageLoader {
    fn load(&self, url: &Url) -> BoxFuture<'static, Result<Vec<u8>, LoadError>>;
}

#[derive(Default)]
struct FetcherState {
    url: Option<Url>,
    image_data: Vec<u8>,
    // Bumped on every URL change so late loads for an old URL are dropped.
    generation: u64,
}

type SharedObserver = Arc<dyn Fn() -> bool + Send + Sync>;

struct Shared {
    state: Mutex<FetcherState>,
    observers: Mutex<Vec<SharedObserver>>,
}

impl Shared {
    /// Observers run without the lock held, so they may call back into the
    /// fetcher. Ones registered meanwhile are kept and notified next time.
    fn notify(&self) {
        let observers = self.observers.lock().clone();
        let gone: Vec<SharedObserver> = observers
            .into_iter()
            .filter(|observer| !observer())
            .collect();

        if !gone.is_empty() {
            self.observers
                .lock()
                .retain(|observer| !gone.iter().any(|dead| Arc::ptr_eq(observer, dead)));
        }
    }
}

/// A [`RemoteImageFetcher`] that publishes its state to observers.
///
/// Loads go through an [`ImageLoader`] and run on a [`Spawner`]. When a
/// load finishes, the bytes are stored and every observer is notified.
/// Failed loads are logged and leave the bytes untouched.
///
/// # Example
///
/// ```rust
/// use futures::future::BoxFuture;
/// use remote_image_view::{
///     create_test_spawner, ImageLoader, LoadError, ObservableFetcher, RemoteImageFetcher,
/// };
/// use url::Url;
///
/// struct Fixed(Vec<u8>);
///
/// impl ImageLoader for Fixed {
///     fn load(&self, _url: &Url) -> BoxFuture<'static, Result<Vec<u8>, LoadError>> {
///         let bytes = self.0.clone();
///         Box::pin(async move { Ok::<_, LoadError>(bytes) })
///     }
/// }
///
/// let url = Url::parse("https://example.com/cat.png").unwrap();
/// let fetcher = ObservableFetcher::new(Fixed(vec![1, 2, 3]), create_test_spawner())
///     .with_url(url);
///
/// fetcher.fetch();
/// assert_eq!(fetcher.image_data(), vec![1, 2, 3]);
/// ```
pub struct ObservableFetcher<L, S> {
    shared: Arc<Shared>,
    loader: L,
    spawner: S,
}

impl<L, S> ObservableFetcher<L, S>
where
    L: ImageLoader,
    S: Spawner,
{
    pub fn new(loader: L, spawner: S) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(FetcherState::default()),
                observers: Mutex::new(Vec::new()),
            }),
            loader,
            spawner,
        }
    }

    /// Set the initial target without notifying anyone.
    pub fn with_url(self, url: Url) -> Self {
        self.shared.state.lock().url = Some(url);
        self
    }

    /// Point the fetcher at a new resource.
    ///
    /// Clears the fetched bytes and notifies observers. Loads still in
    /// flight for the previous URL are discarded when they finish. Setting
    /// the current URL again does nothing.
    pub fn set_url(&self, url: Option<Url>) {
        {
            let mut state = self.shared.state.lock();
            if state.url == url {
                return;
            }
            debug!(from = ?state.url, to = ?url, "image fetcher retargeted");
            state.url = url;
            state.image_data.clear();
            state.generation += 1;
        }
        self.shared.notify();
    }

    /// Replace the fetched bytes directly and notify observers.
    ///
    /// For callers that obtain bytes some other way than the loader.
    pub fn publish(&self, bytes: Vec<u8>) {
        self.shared.state.lock().image_data = bytes;
        self.shared.notify();
    }

    /// Number of observers still registered.
    pub fn observer_count(&self) -> usize {
        self.shared.observers.lock().len()
    }
}

impl<L, S> RemoteImageFetcher for ObservableFetcher<L, S>
where
    L: ImageLoader,
    S: Spawner,
{
    fn url(&self) -> Option<Url> {
        self.shared.state.lock().url.clone()
    }

    fn image_data(&self) -> Vec<u8> {
        self.shared.state.lock().image_data.clone()
    }

    fn fetch(&self) {
        let (url, generation) = {
            let state = self.shared.state.lock();
            match &state.url {
                Some(url) => (url.clone(), state.generation),
                None => {
                    debug!("fetch requested without a url, skipping");
                    return;
                }
            }
        };

        debug!(%url, "fetching image");
        let load = self.loader.load(&url);
        let shared = self.shared.clone();

        self.spawner.spawn(Box::pin(async move {
            match load.await {
                Ok(bytes) => {
                    {
                        let mut state = shared.state.lock();
                        if state.generation != generation {
                            debug!(%url, "discarding image loaded for a stale url");
                            return;
                        }
                        debug!(%url, len = bytes.len(), "image loaded");
                        state.image_data = bytes;
                    }
                    shared.notify();
                }
                Err(error) => warn!(%url, %error, "image load failed"),
            }
        }));
    }

    fn observe(&self, observer: Observer) {
        self.shared.observers.lock().push(Arc::from(observer));
    }
}
