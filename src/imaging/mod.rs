//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode (JPEG)** | `image::ImageReader` |
//! | **Scale** | `image::DynamicImage::resize_exact` with Lanczos3 |
//! | **Encode → JPEG** | `image::codecs::jpeg::JpegEncoder` |
//!
//! The module is split into:
//! - **Calculations**: Pure function for the truncating dimension math (unit testable)
//! - **Parameters**: [`Quality`] for lossy encoding
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: [`resize`], combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::scaled_dimensions;
pub use operations::{ResizeError, ResizeOutcome, resize};
pub use params::Quality;
pub use rust_backend::RustBackend;
