//! CLI command implementations

pub mod combine;
pub mod equalize;
pub mod gamma;
pub mod report;
pub mod stretch;

use std::path::Path;

use anyhow::{Context, Result};
use medscan_chart::{save_chart, ChartOptions};
use medscan_core::GrayImage;
use medscan_ops::Histogram;
use tracing::info;

/// Load a grayscale image from path
pub fn load_image(path: &Path) -> Result<GrayImage> {
    medscan_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save a grayscale image to path
pub fn save_image(path: &Path, img: &GrayImage) -> Result<()> {
    medscan_io::write(path, img).with_context(|| format!("Failed to save: {}", path.display()))?;
    info!(path = %path.display(), "wrote image");
    Ok(())
}

/// Compute and save a histogram chart for an image.
pub fn save_histogram(path: &Path, title: &str, img: &GrayImage, detail: bool) -> Result<()> {
    let opts = if detail {
        ChartOptions::detail()
    } else {
        ChartOptions::default()
    };
    let hist = Histogram::of(img);
    save_chart(path, title, &hist, &opts)
        .with_context(|| format!("Failed to save histogram: {}", path.display()))?;
    info!(path = %path.display(), title, "wrote histogram chart");
    Ok(())
}

/// File stem of the input path, for naming derived artifacts.
pub fn input_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
        .to_string()
}
