//! 256-bin intensity histograms.
//!
//! A [`Histogram`] counts how many pixels fall in each of the 256 intensity
//! bins (bin width 1, range [0, 255] inclusive). It feeds both histogram
//! equalization and the chart rendering in `medscan-chart`.

use medscan_core::GrayImage;

/// Number of intensity bins.
pub const BINS: usize = 256;

/// Per-intensity pixel counts for an 8-bit grayscale image.
///
/// Bin `i` holds the number of pixels with intensity exactly `i`. The sum
/// of all bins equals the pixel count of the source image.
///
/// # Example
///
/// ```rust
/// use medscan_core::GrayImage;
/// use medscan_ops::Histogram;
///
/// let img = GrayImage::filled(4, 4, 128);
/// let hist = Histogram::of(&img);
/// assert_eq!(hist.count(128), 16);
/// assert_eq!(hist.total(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; BINS],
}

impl Histogram {
    /// Computes the histogram of an image.
    pub fn of(img: &GrayImage) -> Self {
        let mut counts = [0u64; BINS];
        for p in img.pixels() {
            counts[p as usize] += 1;
        }
        Self { counts }
    }

    /// Returns the count for a single intensity.
    #[inline]
    pub fn count(&self, intensity: u8) -> u64 {
        self.counts[intensity as usize]
    }

    /// Returns all 256 bin counts.
    #[inline]
    pub fn counts(&self) -> &[u64; BINS] {
        &self.counts
    }

    /// Returns the largest bin count.
    #[inline]
    pub fn max(&self) -> u64 {
        // The array is never empty, so max() always exists.
        *self.counts.iter().max().unwrap_or(&0)
    }

    /// Returns the total pixel count (sum over all bins).
    #[inline]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Returns the running cumulative sum of the bin counts.
    ///
    /// `cumulative()[i]` is the number of pixels with intensity `<= i`;
    /// the last entry equals [`total`](Self::total).
    pub fn cumulative(&self) -> [u64; BINS] {
        let mut cum = [0u64; BINS];
        let mut running = 0u64;
        for (i, &c) in self.counts.iter().enumerate() {
            running += c;
            cum[i] = running;
        }
        cum
    }
}
