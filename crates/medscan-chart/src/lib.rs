//! # medscan-chart
//!
//! Histogram bar-chart rendering for before/after inspection of intensity
//! distributions.
//!
//! Charts are drawn into a plain [`GrayImage`] raster (white background,
//! dark bars, dashed gridlines) and written as PNG. The chart title is
//! embedded as a PNG `tEXt` chunk rather than rasterized, which keeps the
//! renderer free of any font or display-backend state.
//!
//! # Example
//!
//! ```rust,ignore
//! use medscan_chart::{save_chart, ChartOptions};
//! use medscan_ops::Histogram;
//!
//! let hist = Histogram::of(&img);
//! save_chart("hists/original.png", "Original Histogram", &hist, &ChartOptions::default())?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::path::Path;

use medscan_ops::Histogram;
use thiserror::Error;
use tracing::debug;

mod render;

pub use render::{render, ChartOptions};

/// Chart rendering/writing error.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The chart file or its parent directory could not be written.
    #[error("failed to write chart: {0}")]
    Write(#[from] medscan_io::IoError),
}

/// Result type for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;

/// Renders a histogram chart and writes it as a PNG file.
///
/// Creates the parent directory if missing and produces exactly one
/// artifact per call. The title string is stored in the PNG `tEXt` chunk.
///
/// # Errors
///
/// [`ChartError::Write`] if the directory cannot be created or the encode
/// or write fails.
pub fn save_chart<P: AsRef<Path>>(
    path: P,
    title: &str,
    hist: &Histogram,
    opts: &ChartOptions,
) -> ChartResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), title, "saving histogram chart");
    medscan_io::ensure_parent_dir(path)?;
    let chart = render(hist, opts);
    medscan_io::png::write_with_title(path, &chart, title)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medscan_core::GrayImage;

    #[test]
    fn test_save_creates_parent_dir_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hists/nested/original.png");

        let hist = Histogram::of(&GrayImage::filled(8, 8, 128));
        save_chart(&path, "Original Histogram", &hist, &ChartOptions::default()).unwrap();
        assert!(path.exists());

        // Artifact decodes back as a grayscale raster of chart size.
        let chart = medscan_io::read(&path).unwrap();
        let opts = ChartOptions::default();
        assert_eq!(chart.dimensions(), (opts.width, opts.height));
    }
}
