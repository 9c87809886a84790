use thiserror::Error;
use url::Url;

/// Why a byte buffer could not be turned into a [`DisplayImage`](crate::DisplayImage).
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("image data is empty")]
    Empty,
    #[error("malformed image data")]
    Malformed(#[from] image_rs::ImageError),
}

/// Why an [`ImageLoader`](crate::ImageLoader) could not produce bytes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("no resource at {0}")]
    NotFound(Url),
    #[error("failed to load {url}: {reason}")]
    Transport { url: Url, reason: String },
}
