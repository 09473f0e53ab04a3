//! Ink color classification.
//!
//! A pixel counts as ink when it lies inside a per-channel box around one of
//! the reference colors. The box test compares red, green and blue
//! independently; it is not a distance metric.

use image::Rgb;

/// Pure black reference ink.
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Pure blue reference ink.
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

/// Reference colors a pixel is matched against.
pub const INK_COLORS: [Rgb<u8>; 2] = [BLACK, BLUE];

/// Default per-channel tolerance.
///
/// Deliberately loose: at 200 almost any dark or bluish pixel passes, and the
/// density stage does the real filtering.
pub const DEFAULT_TOLERANCE: u8 = 200;

/// Returns `true` if every channel of `a` is within `tolerance` of `b`.
#[must_use]
pub fn is_similar(a: Rgb<u8>, b: Rgb<u8>, tolerance: u8) -> bool {
    a.0.iter()
        .zip(b.0.iter())
        .all(|(&ca, &cb)| ca.abs_diff(cb) <= tolerance)
}

/// Returns `true` if `px` matches black or blue under `tolerance`.
#[must_use]
pub fn is_ink(px: Rgb<u8>, tolerance: u8) -> bool {
    INK_COLORS.iter().any(|&ink| is_similar(px, ink, tolerance))
}
