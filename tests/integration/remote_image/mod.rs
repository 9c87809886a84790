use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::BoxFuture;
use image_rs::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use remote_image_view::{DisplayImage, ImageLoader, LoadError};
use url::Url;

pub(crate) const GRAY: [u8; 4] = [128, 128, 128, 255];
pub(crate) const RED: [u8; 4] = [255, 0, 0, 255];
pub(crate) const BLUE: [u8; 4] = [0, 0, 255, 255];

pub(crate) fn url(name: &str) -> Url {
    Url::parse("https://images.example.com/")
        .unwrap()
        .join(name)
        .unwrap()
}

pub(crate) fn placeholder() -> DisplayImage {
    DisplayImage::solid(2, 2, GRAY)
}

pub(crate) fn identity(image: DisplayImage) -> DisplayImage {
    image
}

pub(crate) fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(rgba)))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

pub(crate) fn jpeg_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .unwrap();
    bytes
}

/// Loader answering from a fixed table, counting every load it starts.
pub(crate) struct TableLoader {
    pub(crate) responses: HashMap<Url, Result<Vec<u8>, LoadError>>,
    pub(crate) loads: Arc<AtomicUsize>,
}

impl ImageLoader for TableLoader {
    fn load(&self, url: &Url) -> BoxFuture<'static, Result<Vec<u8>, LoadError>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let response = self
            .responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(LoadError::NotFound(url.clone())));
        Box::pin(async move { response })
    }
}
