//! Power-law gamma correction.
//!
//! Per pixel value `p`: normalize `r = p / 255`, compute
//! `s = gain * r^gamma`, output `round(s * 255)` clamped to [0, 255].
//!
//! `gamma < 1` brightens mid-tones (useful for under-exposed scans),
//! `gamma > 1` darkens them. This transform uses the **rounding** policy,
//! in contrast to [`crate::stretch`] which truncates.
//!
//! # Example
//!
//! ```rust
//! use medscan_core::GrayImage;
//! use medscan_ops::gamma::gamma_correct;
//!
//! let img = GrayImage::filled(4, 4, 128);
//! let out = gamma_correct(&img, 0.5, 1.0).unwrap();
//! assert_eq!(out.pixel(0, 0), Some(181));
//! ```

use medscan_core::GrayImage;

use crate::lookup::remap;
use crate::{OpsError, OpsResult};

/// Default gamma exponent.
pub const DEFAULT_GAMMA: f64 = 0.5;

/// Default gain multiplier.
pub const DEFAULT_GAIN: f64 = 1.0;

/// Gamma-corrects a single intensity value.
///
/// Output is `clamp(round(gain * (p/255)^gamma * 255), 0, 255)`. Monotonic
/// non-decreasing in `p` for `gamma > 0`, `gain > 0`; values exceeding the
/// range are clamped, never wrapped.
///
/// # Example
///
/// ```rust
/// use medscan_ops::gamma::gamma_value;
///
/// assert_eq!(gamma_value(128, 0.5, 1.0), 181);
/// assert_eq!(gamma_value(0, 0.5, 1.0), 0);
/// assert_eq!(gamma_value(255, 0.5, 1.0), 255);
/// ```
#[inline]
pub fn gamma_value(p: u8, gamma: f64, gain: f64) -> u8 {
    let r = p as f64 / 255.0;
    let s = gain * r.powf(gamma);
    (s * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Validates gamma parameters.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] unless both `gamma` and `gain`
/// are finite and strictly positive.
pub fn validate(gamma: f64, gain: f64) -> OpsResult<()> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(OpsError::InvalidParameter(format!(
            "gamma must be finite and > 0, got {gamma}"
        )));
    }
    if !gain.is_finite() || gain <= 0.0 {
        return Err(OpsError::InvalidParameter(format!(
            "gain must be finite and > 0, got {gain}"
        )));
    }
    Ok(())
}

/// Applies gamma correction to every pixel, returning a new image.
///
/// The input depends only on the 256 possible intensities, so the curve is
/// evaluated once per intensity and applied as a table lookup.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] for non-positive or non-finite
/// `gamma`/`gain`.
pub fn gamma_correct(img: &GrayImage, gamma: f64, gain: f64) -> OpsResult<GrayImage> {
    validate(gamma, gain)?;
    let mut table = [0u8; 256];
    for (p, entry) in table.iter_mut().enumerate() {
        *entry = gamma_value(p as u8, gamma, gain);
    }
    Ok(remap(img, &table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_128_gamma_half() {
        // round(1.0 * (128/255)^0.5 * 255) = 181
        let img = GrayImage::filled(4, 4, 128);
        let out = gamma_correct(&img, 0.5, 1.0).unwrap();
        assert!(out.pixels().all(|p| p == 181));
        assert_eq!(out.dimensions(), (4, 4));
    }

    #[test]
    fn test_endpoints_fixed_for_unit_gain() {
        for gamma in [0.2, 0.5, 1.0, 2.2] {
            assert_eq!(gamma_value(0, gamma, 1.0), 0);
            assert_eq!(gamma_value(255, gamma, 1.0), 255);
        }
    }

    #[test]
    fn test_monotonic() {
        for &(gamma, gain) in &[(0.5, 1.0), (2.0, 1.0), (0.8, 1.5)] {
            let mut prev = gamma_value(0, gamma, gain);
            for p in 1..=255u8 {
                let v = gamma_value(p, gamma, gain);
                assert!(v >= prev, "not monotonic at p={p} (gamma={gamma})");
                prev = v;
            }
        }
    }

    #[test]
    fn test_gain_clamps_not_wraps() {
        // gain 2.0 pushes everything above mid-gray past 1.0
        assert_eq!(gamma_value(255, 1.0, 2.0), 255);
        assert_eq!(gamma_value(200, 1.0, 2.0), 255);
    }

    #[test]
    fn test_round_trip_within_rounding_error() {
        // Expansive leg first: gamma > 1 collapses low intensities to 0
        // before the inverse leg sees them, so the law is exercised with
        // gamma < 1 forward and 1/gamma backward.
        for gamma in [0.4, 0.5, 0.8] {
            for p in 0..=255u8 {
                let fwd = gamma_value(p, gamma, 1.0);
                let back = gamma_value(fwd, 1.0 / gamma, 1.0);
                let diff = (back as i16 - p as i16).abs();
                assert!(diff <= 2, "p={p} gamma={gamma} back={back}");
            }
        }
    }

    #[test]
    fn test_quantization_within_half_step() {
        use approx::assert_abs_diff_eq;
        // Round-to-nearest keeps every table entry within half a step of
        // the continuous curve.
        for p in 0..=255u8 {
            let continuous = (p as f64 / 255.0).powf(0.5) * 255.0;
            assert_abs_diff_eq!(gamma_value(p, 0.5, 1.0) as f64, continuous, epsilon = 0.5);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let img = GrayImage::filled(1, 1, 10);
        assert!(gamma_correct(&img, 0.0, 1.0).is_err());
        assert!(gamma_correct(&img, -0.5, 1.0).is_err());
        assert!(gamma_correct(&img, f64::NAN, 1.0).is_err());
        assert!(gamma_correct(&img, 0.5, 0.0).is_err());
        assert!(gamma_correct(&img, 0.5, f64::INFINITY).is_err());
    }

    #[test]
    fn test_input_not_mutated() {
        let img = GrayImage::filled(2, 2, 64);
        let _ = gamma_correct(&img, 0.5, 1.0).unwrap();
        assert!(img.pixels().all(|p| p == 64));
    }
}
