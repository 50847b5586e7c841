//! Piecewise-linear contrast stretching.
//!
//! A [`StretchLut`] maps every input intensity through three linear
//! segments defined by two breakpoints `(r1, s1)` and `(r2, s2)` plus the
//! implicit anchors (0, 0) and (255, 255):
//!
//! ```text
//! output
//! 255 |                          ___/
//!     |                      ___/
//!  s2 |                     x (r2, s2)
//!     |                    /
//!     |                   /
//!  s1 |        (r1, s1) x
//!     |          ______/
//!   0 |_________/_________________________
//!     0        r1        r2            255   input
//! ```
//!
//! A narrow band `[r1, r2]` stretched over `[s1, s2]` with a steep middle
//! segment expands low-contrast detail, the typical use on washed-out
//! X-ray scans.
//!
//! Values are **truncated toward zero** during table construction (never
//! rounded); see the crate docs on rounding policies.

use medscan_core::GrayImage;

use crate::lookup::remap;
use crate::{OpsError, OpsResult};

/// Default low input breakpoint.
pub const DEFAULT_R1: u8 = 70;
/// Default output value at `r1`.
pub const DEFAULT_S1: u8 = 0;
/// Default high input breakpoint.
pub const DEFAULT_R2: u8 = 140;
/// Default output value at `r2`.
pub const DEFAULT_S2: u8 = 255;

/// Dense 256-entry lookup table for piecewise-linear contrast stretching.
///
/// Built once from the breakpoint parameters and immutable afterwards.
/// Index = input intensity, value = output intensity; application is a
/// direct table lookup with no interpolation (the table already covers all
/// 256 possible inputs).
///
/// # Example
///
/// ```rust
/// use medscan_ops::StretchLut;
///
/// let lut = StretchLut::build(70, 0, 140, 255).unwrap();
/// assert_eq!(lut.map(70), 0);
/// assert_eq!(lut.map(140), 255);
/// ```
#[derive(Debug, Clone)]
pub struct StretchLut {
    table: [u8; 256],
}

impl StretchLut {
    /// Builds the lookup table from two breakpoints.
    ///
    /// For each input intensity `r`:
    /// - `r < r1`: `trunc(r * s1 / r1)` (segment from the (0, 0) anchor);
    ///   when `r1 == 0` this branch is empty, so the degenerate slope is
    ///   never evaluated.
    /// - `r1 <= r < r2`: `trunc((s2 - s1) / (r2 - r1) * (r - r1) + s1)`.
    /// - `r >= r2`: `trunc((255 - s2) / (255 - r2) * (r - r2) + s2)`
    ///   (segment to the (255, 255) anchor); when `r2 == 255` only
    ///   `r == 255` lands here and maps to `s2` directly.
    ///
    /// With `r1 < r2` every segment interpolates between in-range
    /// endpoints, so no clamping is needed.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] unless `r1 < r2`. Equal
    /// breakpoints would make the middle slope divide by zero; out-of-order
    /// breakpoints are rejected rather than reinterpreted.
    pub fn build(r1: u8, s1: u8, r2: u8, s2: u8) -> OpsResult<Self> {
        if r1 >= r2 {
            return Err(OpsError::InvalidParameter(format!(
                "breakpoints must satisfy r1 < r2, got r1={r1}, r2={r2}"
            )));
        }

        let (r1f, s1f) = (r1 as f64, s1 as f64);
        let (r2f, s2f) = (r2 as f64, s2 as f64);

        let mut table = [0u8; 256];
        for (r, entry) in table.iter_mut().enumerate() {
            let rf = r as f64;
            let v = if r < r1 as usize {
                rf * s1f / r1f
            } else if r < r2 as usize {
                (s2f - s1f) / (r2f - r1f) * (rf - r1f) + s1f
            } else if r2 == 255 {
                s2f
            } else {
                (255.0 - s2f) / (255.0 - r2f) * (rf - r2f) + s2f
            };
            // Truncation toward zero; all segment values lie in [0, 255].
            *entry = v as u8;
        }
        Ok(Self { table })
    }

    /// Maps a single intensity through the table.
    #[inline]
    pub fn map(&self, p: u8) -> u8 {
        self.table[p as usize]
    }

    /// Returns the full 256-entry table.
    #[inline]
    pub fn table(&self) -> &[u8; 256] {
        &self.table
    }

    /// Applies the table to every pixel, returning a new image.
    #[inline]
    pub fn apply(&self, img: &GrayImage) -> GrayImage {
        remap(img, &self.table)
    }
}

/// Builds a [`StretchLut`] and applies it in one call.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] unless `r1 < r2`.
///
/// # Example
///
/// ```rust
/// use medscan_core::GrayImage;
/// use medscan_ops::stretch::contrast_stretch;
///
/// let img = GrayImage::filled(2, 2, 140);
/// let out = contrast_stretch(&img, 70, 0, 140, 255).unwrap();
/// assert_eq!(out.pixel(0, 0), Some(255));
/// ```
pub fn contrast_stretch(img: &GrayImage, r1: u8, s1: u8, r2: u8, s2: u8) -> OpsResult<GrayImage> {
    Ok(StretchLut::build(r1, s1, r2, s2)?.apply(img))
}
