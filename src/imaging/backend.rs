//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the four operations every backend must
//! support: decode, dimensions, scale, and encode_jpeg.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies. Everything is statically linked into the binary.

use super::params::Quality;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Pixel dimensions of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Every backend must implement all four operations — decode, dimensions,
/// scale, and encode_jpeg — so the resize logic is backend-agnostic. The
/// decoded image itself is an associated type: the production backend holds
/// real pixel buffers, the test mock holds nothing but dimensions.
pub trait ImageBackend {
    /// In-memory decoded image, released when dropped.
    type Image;

    /// Decode the file at `path`.
    ///
    /// A missing or unopenable file surfaces as [`BackendError::Io`];
    /// corrupt image data as [`BackendError::ProcessingFailed`].
    fn decode(&self, path: &Path) -> Result<Self::Image, BackendError>;

    /// Pixel dimensions of a decoded image.
    fn dimensions(&self, image: &Self::Image) -> Dimensions;

    /// Scale a decoded image to exactly `width` × `height`.
    fn scale(
        &self,
        image: &Self::Image,
        width: u32,
        height: u32,
    ) -> Result<Self::Image, BackendError>;

    /// Encode a decoded image to `path` as JPEG, regardless of the path's
    /// extension.
    fn encode_jpeg(
        &self,
        image: &Self::Image,
        path: &Path,
        quality: Quality,
    ) -> Result<(), BackendError>;
}
