//! Spawner abstraction used by fetchers to run loads.

use core::future::Future;
use core::pin::Pin;

#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;

#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// A spawner for executing futures on an async runtime.
///
/// [`ObservableFetcher`](crate::ObservableFetcher) hands its loads to a
/// spawner, so you can use whatever runtime you want (tokio, async-std,
/// smol, etc.).
///
/// Function pointers and closures implement this trait through the blanket
/// implementation.
pub trait Spawner {
    /// Spawn a future on the async runtime.
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>);
}

/// Implement Spawner for any callable type that matches the signature.
impl<F> Spawner for F
where
    F: Fn(Pin<Box<dyn Future<Output = ()> + Send>>),
{
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>) {
        self(future)
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test spawner function that executes futures synchronously.
pub fn test_spawner_fn(fut: Pin<Box<dyn Future<Output = ()> + Send>>) {
    futures::executor::block_on(fut);
}

#[cfg(any(test, feature = "testing"))]
/// Creates a test spawner that executes futures synchronously.
///
/// A fetch started with this spawner has completed, and notified its
/// observers, by the time `fetch()` returns.
pub fn create_test_spawner() -> fn(Pin<Box<dyn Future<Output = ()> + Send>>) {
    test_spawner_fn
}

#[cfg(any(test, feature = "testing"))]
/// Test spawner that holds futures until told to run them.
///
/// Models a network that answers later. Clones share one queue, so give
/// one clone to the fetcher and keep another to call
/// [`run_pending`](Self::run_pending).
#[derive(Clone, Default)]
pub struct QueuedSpawner {
    pending: Arc<Mutex<Vec<Pin<Box<dyn Future<Output = ()> + Send>>>>>,
}

#[cfg(any(test, feature = "testing"))]
impl QueuedSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of futures waiting to run.
    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }

    /// Run every queued future to completion, in spawn order.
    ///
    /// Returns how many futures ran.
    pub fn run_pending(&self) -> usize {
        let queued: Vec<_> = self.pending.lock().drain(..).collect();
        let ran = queued.len();
        for future in queued {
            futures::executor::block_on(future);
        }
        ran
    }
}

#[cfg(any(test, feature = "testing"))]
impl Spawner for QueuedSpawner {
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>) {
        self.pending.lock().push(future);
    }
}
