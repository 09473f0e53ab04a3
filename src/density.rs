//! Neighborhood density check.
//!
//! A pixel that passes the color test is only kept if enough ink pixels sit in
//! the square window around it. The window has half-width `range`, includes
//! the center pixel, and is clipped at the image border: cells outside the
//! image are skipped rather than counted as background.

use image::RgbImage;

use crate::color::is_ink;

/// Default window half-width (a 3x3 window).
pub const DEFAULT_RANGE: u32 = 1;

/// Minimum ink count a window must strictly exceed.
///
/// Computed as `range * range / 2` with integer division, so `range = 1`
/// yields 0 and a single ink cell (the center itself) is enough.
#[must_use]
pub fn density_threshold(range: u32) -> u64 {
    u64::from(range) * u64::from(range) / 2
}

/// Count ink pixels in the clipped window centered on `(x, y)`.
#[must_use]
pub fn ink_neighbors(image: &RgbImage, x: u32, y: u32, tolerance: u8, range: u32) -> u64 {
    let (width, height) = (i64::from(image.width()), i64::from(image.height()));
    let (cx, cy, r) = (i64::from(x), i64::from(y), i64::from(range));

    let y_lo = (cy - r).max(0);
    let y_hi = (cy + r).min(height - 1);
    let x_lo = (cx - r).max(0);
    let x_hi = (cx + r).min(width - 1);

    let mut count = 0u64;
    for ny in y_lo..=y_hi {
        for nx in x_lo..=x_hi {
            // Bounds were clamped above, so both coordinates fit in u32.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let px = *image.get_pixel(nx as u32, ny as u32);
            if is_ink(px, tolerance) {
                count += 1;
            }
        }
    }
    count
}

/// Returns `true` if the window around `(x, y)` holds more ink pixels than
/// [`density_threshold`] allows.
#[must_use]
pub fn has_sufficient_density(
    image: &RgbImage,
    x: u32,
    y: u32,
    tolerance: u8,
    range: u32,
) -> bool {
    ink_neighbors(image, x, y, tolerance, range) > density_threshold(range)
}
