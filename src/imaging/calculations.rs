//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate scaled dimensions for a percentage reduction.
///
/// Both dimensions are multiplied by `percentage / 100` and **truncated**
/// to whole pixels — `int()`-style conversion toward zero, not rounding.
/// A 100×200 image at 33% becomes 33×66 even though 200 × 0.33 is 66.0
/// and 100 × 0.333… would round up elsewhere. The truncation bias toward
/// smaller outputs is deliberate, observable behavior.
///
/// No minimum-dimension floor is enforced: a 1-pixel-wide source at a low
/// percentage truncates to width 0, and the caller attempts the scale as
/// computed.
///
/// # Examples
/// ```
/// # use jpeg_shrink::imaging::scaled_dimensions;
/// assert_eq!(scaled_dimensions((100, 200), 50.0), (50, 100));
/// assert_eq!(scaled_dimensions((100, 200), 99.0), (99, 198));
/// ```
pub fn scaled_dimensions(original: (u32, u32), percentage: f64) -> (u32, u32) {
    let (width, height) = original;
    let factor = percentage / 100.0;

    // `as u32` truncates toward zero, which is exactly the contract.
    (
        (width as f64 * factor) as u32,
        (height as f64 * factor) as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_both_dimensions() {
        assert_eq!(scaled_dimensions((100, 200), 50.0), (50, 100));
    }

    #[test]
    fn quarter_scale() {
        assert_eq!(scaled_dimensions((100, 200), 25.0), (25, 50));
    }

    #[test]
    fn near_full_scale() {
        assert_eq!(scaled_dimensions((100, 200), 99.0), (99, 198));
    }

    #[test]
    fn tenth_scale() {
        assert_eq!(scaled_dimensions((100, 200), 10.0), (10, 20));
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // 101 * 0.33 = 33.33, 101 * 0.99 = 99.99 — both truncate down
        assert_eq!(scaled_dimensions((101, 101), 33.0), (33, 33));
        assert_eq!(scaled_dimensions((101, 101), 99.0), (99, 99));
    }

    #[test]
    fn fractional_percentage() {
        // 200 * 0.755 = 151.0, 100 * 0.755 = 75.5 → 75
        assert_eq!(scaled_dimensions((100, 200), 75.5), (75, 151));
    }

    #[test]
    fn narrow_source_truncates_to_zero_width() {
        // 1 * 0.10 = 0.1 → 0; no minimum floor is applied
        assert_eq!(scaled_dimensions((1, 500), 10.0), (0, 50));
    }
}
