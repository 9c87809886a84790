//! A remote image view with a placeholder, driven by a small
//! Model-View-Update host.
//!
//! [`RemoteImageView`] shows whatever its [`RemoteImageFetcher`] has
//! fetched, routed through a caller-supplied content function, and falls
//! back to a placeholder until decodable bytes arrive. A [`ViewHost`]
//! mounts the view, asks it to fetch when it appears and re-renders it on
//! every fetcher change.
//!
//! ## Example
//!
//! ```rust
//! use std::{future::Future, pin::Pin, sync::Arc};
//!
//! use futures::future::BoxFuture;
//! use remote_image_view::{
//!     DisplayImage, ImageLoader, LoadError, ObservableFetcher, RemoteImageView, Renderer,
//!     ViewHost, ViewState,
//! };
//! use url::Url;
//!
//! struct HttpLoader;
//!
//! impl ImageLoader for HttpLoader {
//!     fn load(&self, url: &Url) -> BoxFuture<'static, Result<Vec<u8>, LoadError>> {
//!         let url = url.clone();
//!         // Call your HTTP client here.
//!         Box::pin(async move { Err::<Vec<u8>, _>(LoadError::NotFound(url)) })
//!     }
//! }
//!
//! struct Canvas;
//!
//! impl Renderer<(u32, u32)> for Canvas {
//!     fn render(&mut self, (width, height): (u32, u32)) {
//!         println!("drawing a {width}x{height} image");
//!     }
//! }
//!
//! // Hand loads to your runtime, e.g. tokio::spawn(fut)
//! let spawner = |_fut: Pin<Box<dyn Future<Output = ()> + Send>>| {};
//!
//! let url = Url::parse("https://example.com/avatar.png").unwrap();
//! let fetcher = Arc::new(ObservableFetcher::new(HttpLoader, spawner).with_url(url));
//! let placeholder = DisplayImage::solid(32, 32, [128, 128, 128, 255]);
//!
//! let view = RemoteImageView::new(placeholder, fetcher, |image| (image.width(), image.height()));
//! let mut host = ViewHost::new(view, ViewState::default(), Canvas);
//!
//! // Drive the loop on your runtime with `host.run().await`.
//! host.mount();
//! host.process_queued_events();
//! ```

mod component;
mod effect;
mod emitter;
mod error;
mod fetcher;
mod host;
mod image;
mod options;
mod renderer;
mod spawner;
mod view;

// Public re-exports
pub use component::Component;
pub use effect::Effect;
pub use emitter::Emitter;
pub use error::{DecodeError, LoadError};
pub use fetcher::{ImageLoader, ObservableFetcher, Observer, RemoteImageFetcher};
pub use host::ViewHost;
pub use image::{DisplayImage, ImageDecoder, PlatformDecoder};
pub use options::{SyncTiming, ViewOptions};
pub use renderer::Renderer;
pub use spawner::Spawner;
pub use view::{RemoteImageView, ViewEvent, ViewState};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use host::{TestViewDriver, TestViewHost};
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use spawner::{create_test_spawner, test_spawner_fn, QueuedSpawner};
