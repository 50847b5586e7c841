//! Histogram equalization.
//!
//! Redistributes intensities so the output histogram is approximately
//! uniform: bins holding many pixels get spread apart, sparse bins get
//! compressed together.
//!
//! The mapping is built from the cumulative histogram `cum` of the input:
//!
//! ```text
//! p -> round(255 * (cum[p] - cum_min) / (total - cum_min))
//! ```
//!
//! where `cum_min` is the cumulative count at the lowest occupied bin.
//! Anchoring at `cum_min` maps the lowest occupied intensity to 0 and the
//! highest to 255, the conventional definition. The mapping is monotonic
//! non-decreasing, and on a histogram that is already uniform over all 256
//! bins it is exactly the identity.
//!
//! # Example
//!
//! ```rust
//! use medscan_core::GrayImage;
//! use medscan_ops::equalize::equalize;
//!
//! let img = GrayImage::from_raw(2, 2, vec![0, 0, 255, 255]).unwrap();
//! let out = equalize(&img);
//! assert_eq!(out.as_raw(), &[0, 0, 255, 255]);
//! ```

use medscan_core::GrayImage;
use tracing::debug;

use crate::histogram::Histogram;
use crate::lookup::remap;

/// Equalizes the intensity histogram of an image, returning a new image.
///
/// Pure function of the input grid; takes no parameters and cannot fail.
/// Degenerate inputs (empty image, or a constant image where the
/// cumulative distribution carries no information) are returned unchanged.
pub fn equalize(img: &GrayImage) -> GrayImage {
    if img.is_empty() {
        return img.clone();
    }

    let hist = Histogram::of(img);
    let cum = hist.cumulative();
    let total = hist.total();

    // Cumulative count at the lowest occupied bin.
    let cum_min = match cum.iter().find(|&&c| c > 0) {
        Some(&c) => c,
        None => return img.clone(),
    };
    if total == cum_min {
        // Single occupied bin: no distribution to flatten.
        debug!("equalize: constant image, returning input unchanged");
        return img.clone();
    }

    let denom = (total - cum_min) as f64;
    let mut table = [0u8; 256];
    for (p, entry) in table.iter_mut().enumerate() {
        let c = cum[p].saturating_sub(cum_min) as f64;
        *entry = (255.0 * c / denom).round().clamp(0.0, 255.0) as u8;
    }
    remap(img, &table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bimodal_spreads_to_extremes() {
        let img = GrayImage::from_raw(2, 2, vec![0, 0, 255, 255]).unwrap();
        let out = equalize(&img);
        // Lowest occupied bin anchors to 0, highest reaches 255.
        assert_eq!(out.pixel(0, 0), Some(0));
        assert_eq!(out.pixel(1, 1), Some(255));
    }

    #[test]
    fn test_uniform_histogram_is_identity() {
        // One pixel in every bin: a perfectly uniform distribution.
        let data: Vec<u8> = (0..=255).collect();
        let img = GrayImage::from_raw(16, 16, data.clone()).unwrap();
        let out = equalize(&img);
        assert_eq!(out.as_raw(), data.as_slice());
    }

    #[test]
    fn test_monotonic_mapping() {
        let data: Vec<u8> = (0..64).map(|i| (i * i % 200) as u8).collect();
        let img = GrayImage::from_raw(8, 8, data).unwrap();
        let out = equalize(&img);
        // Pairwise order of distinct input levels must be preserved.
        for y in 0..8 {
            for x in 0..8 {
                for y2 in 0..8 {
                    for x2 in 0..8 {
                        let (a, b) = (img.pixel(x, y).unwrap(), img.pixel(x2, y2).unwrap());
                        let (ea, eb) = (out.pixel(x, y).unwrap(), out.pixel(x2, y2).unwrap());
                        if a <= b {
                            assert!(ea <= eb, "order broken: {a}->{ea}, {b}->{eb}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_constant_image_unchanged() {
        let img = GrayImage::filled(3, 3, 42);
        assert_eq!(equalize(&img), img);
    }

    #[test]
    fn test_empty_image_unchanged() {
        let img = GrayImage::new(0, 0);
        assert_eq!(equalize(&img), img);
    }

    #[test]
    fn test_narrow_band_expands() {
        // Four distinct levels packed into [100, 103] must spread out.
        let img = GrayImage::from_raw(2, 2, vec![100, 101, 102, 103]).unwrap();
        let out = equalize(&img);
        assert_eq!(out.pixel(0, 0), Some(0));
        assert_eq!(out.pixel(1, 1), Some(255));
        let spread = out.pixels().max().unwrap() - out.pixels().min().unwrap();
        assert_eq!(spread, 255);
    }

    #[test]
    fn test_dimensions_and_purity() {
        let img = GrayImage::from_raw(4, 1, vec![10, 20, 30, 40]).unwrap();
        let out = equalize(&img);
        assert_eq!(out.dimensions(), (4, 1));
        assert_eq!(img.as_raw(), &[10, 20, 30, 40]);
    }
}
