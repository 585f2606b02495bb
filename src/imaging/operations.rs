//! The resize operation.
//!
//! Combines the dimension calculation with backend execution. The function
//! takes a validated [`ResizeRequest`] but re-checks the percentage itself:
//! it is a public entry point, and callers other than the interactive
//! collector may hand it anything.

use super::backend::{BackendError, ImageBackend};
use super::calculations::scaled_dimensions;
use super::params::Quality;
use crate::types::ResizeRequest;
use std::path::PathBuf;
use thiserror::Error;

/// Why a resize attempt was abandoned.
///
/// Both variants terminate only the current attempt, never the process.
#[derive(Error, Debug)]
pub enum ResizeError {
    /// The input path could not be opened. No output file is written.
    #[error("the file '{0}' was not found")]
    NotFound(PathBuf),
    /// Any other decode, scale, or encode failure, carrying the
    /// collaborator's own description.
    #[error("image processing failed: {0}")]
    Processing(String),
}

/// What a successful resize did.
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeOutcome {
    /// The image was scaled down and written.
    Resized {
        percentage: f64,
        width: u32,
        height: u32,
        output: PathBuf,
    },
    /// Percentage was ≥ 100: the decoded image was written unchanged.
    /// The tool never upscales, and 100% is a no-op copy rather than an
    /// error, so the success path stays uniform.
    PassThrough { output: PathBuf },
}

/// Resize the image named by `request` and write it as JPEG.
///
/// 1. Decode the input. An unopenable path is [`ResizeError::NotFound`];
///    nothing is written.
/// 2. Percentage ≥ 100 → pass-through save of the decoded image.
/// 3. Otherwise scale to the truncated target dimensions and encode.
///
/// The output is always encoded as JPEG, whatever extension the output
/// path carries. Zero-area targets (a 1-pixel-wide source at a low
/// percentage) are attempted as computed; if the codec rejects them, that
/// surfaces as [`ResizeError::Processing`] like any other failure.
pub fn resize<B: ImageBackend>(
    backend: &B,
    request: &ResizeRequest,
    quality: Quality,
) -> Result<ResizeOutcome, ResizeError> {
    let image = match backend.decode(&request.input) {
        Ok(image) => image,
        Err(BackendError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ResizeError::NotFound(request.input.clone()));
        }
        Err(e) => return Err(ResizeError::Processing(e.to_string())),
    };

    if request.percentage >= 100.0 {
        backend
            .encode_jpeg(&image, &request.output, quality)
            .map_err(|e| ResizeError::Processing(e.to_string()))?;
        return Ok(ResizeOutcome::PassThrough {
            output: request.output.clone(),
        });
    }

    let dims = backend.dimensions(&image);
    let (width, height) = scaled_dimensions((dims.width, dims.height), request.percentage);

    let scaled = backend
        .scale(&image, width, height)
        .map_err(|e| ResizeError::Processing(e.to_string()))?;
    backend
        .encode_jpeg(&scaled, &request.output, quality)
        .map_err(|e| ResizeError::Processing(e.to_string()))?;

    Ok(ResizeOutcome::Resized {
        percentage: request.percentage,
        width,
        height,
        output: request.output.clone(),
    })
}
