//! User-facing message formatting.
//!
//! Each success/error branch of the resize gets its own distinct wording.
//! Format functions are pure — no I/O, no side effects — and printing
//! happens at the edge in `main`.

use crate::imaging::{ResizeError, ResizeOutcome};

/// Format the message for a completed resize.
pub fn format_outcome(outcome: &ResizeOutcome) -> String {
    match outcome {
        ResizeOutcome::Resized {
            percentage, output, ..
        } => format!(
            "The image was resized by {}% and saved to: {}",
            percentage,
            output.display()
        ),
        ResizeOutcome::PassThrough { output } => format!(
            "The requested percentage is 100% or more; no resizing was performed. \
             The image was saved unchanged to: {}",
            output.display()
        ),
    }
}

/// Format the message for an abandoned resize attempt.
pub fn format_error(error: &ResizeError) -> String {
    match error {
        ResizeError::NotFound(path) => {
            format!("Error: the file '{}' was not found.", path.display())
        }
        ResizeError::Processing(detail) => {
            format!("An error occurred during image processing: {detail}")
        }
    }
}
