//! Shared types passed between the input collector and the resizer.

use std::path::PathBuf;

/// A validated resize request.
///
/// Constructed once — by the interactive collector or from command-line
/// arguments — and passed by reference to the resizer. Paths are accepted
/// as-is; the percentage has been checked to be strictly inside (0, 100)
/// by whichever layer built the request. The resizer still re-checks the
/// upper bound because it is a public entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeRequest {
    /// Path to the source JPEG.
    pub input: PathBuf,
    /// Destination path, expected to include the target filename.
    pub output: PathBuf,
    /// Scale percentage; 50.0 means half the original width and height.
    pub percentage: f64,
}
