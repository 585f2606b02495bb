//! # jpeg-shrink
//!
//! Shrink a JPEG image by a percentage from the command line.
//!
//! The tool collects three values — an input path, an output path, and a
//! percentage strictly between 0 and 100 — then decodes the source image,
//! scales both dimensions by `percentage / 100`, and writes the result as
//! JPEG. Percentages of 100 or more are a pass-through save: the tool never
//! upscales, so the decoded image is written unchanged instead of failing.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`prompt`] | Interactive collection of the resize request: three prompts, percentage validation loop |
//! | [`imaging`] | Image operations: backend trait, `image`-crate implementation, dimension math, the resize operation |
//! | [`output`] | User-facing message formatting — pure functions, printing happens at the edge |
//! | [`types`] | `ResizeRequest`, the immutable bundle handed from collector to resizer |
//!
//! # Design Decisions
//!
//! ## Backend Trait
//!
//! All pixel work goes through the [`imaging::ImageBackend`] trait
//! (decode, dimensions, scale, encode). The production implementation is
//! [`imaging::RustBackend`] on the pure-Rust `image` crate; tests use a
//! recording mock, so resize logic is exercised without encoding a single
//! pixel.
//!
//! ## Truncating Dimension Math
//!
//! Target dimensions are `trunc(original * percentage / 100)` — truncation,
//! not rounding. A 100×200 image at 33% becomes 33×66, never 33×67. This is
//! observable behavior and [`imaging::scaled_dimensions`] preserves it
//! exactly, including its bias toward slightly smaller outputs.
//!
//! ## Errors Are Messages, Not Aborts
//!
//! A missing input file or a codec failure terminates the resize attempt,
//! not the process. Both surface as one user-facing line
//! ([`imaging::ResizeError`]) and the program exits normally.

pub mod imaging;
pub mod output;
pub mod prompt;
pub mod types;
