//! Renderer abstraction receiving each render pass's output.

#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;

#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Sink for the output of every render pass.
///
/// Implement this trait to hand a component's output to your drawing layer
/// (GUI toolkit, terminal, embedded display, etc.).
///
/// [`render`](Self::render) is called on mount and again after every
/// processed event.
///
/// # Example
///
/// ```rust
/// use remote_image_view::{DisplayImage, Renderer};
///
/// struct LogRenderer;
///
/// impl Renderer<DisplayImage> for LogRenderer {
///     fn render(&mut self, image: DisplayImage) {
///         println!("{}x{}", image.width(), image.height());
///     }
/// }
/// ```
pub trait Renderer<Output> {
    /// Consume the output of one render pass.
    fn render(&mut self, output: Output);
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures every render pass for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage, so hand one clone to the host
/// and keep another for assertions.
///
/// # Example
///
/// ```rust
/// use remote_image_view::{Renderer, TestRenderer};
///
/// let renderer = TestRenderer::<u32>::new();
/// let mut sink = renderer.clone();
/// sink.render(4);
///
/// assert_eq!(renderer.count(), 1);
/// assert_eq!(renderer.last(), Some(4));
/// ```
pub struct TestRenderer<Output> {
    renders: Arc<Mutex<Vec<Output>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Output> Clone for TestRenderer<Output> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Output> Renderer<Output> for TestRenderer<Output> {
    fn render(&mut self, output: Output) {
        self.renders.lock().push(output);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Output> Default for TestRenderer<Output> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Output> TestRenderer<Output> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of render passes seen so far.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Output of the most recent render pass.
    pub fn last(&self) -> Option<Output>
    where
        Output: Clone,
    {
        self.renders.lock().last().cloned()
    }

    /// Access the captured render passes with a closure.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Output>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }
}
