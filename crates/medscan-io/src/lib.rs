//! # medscan-io
//!
//! Grayscale image I/O for medscan.
//!
//! Decodes PNG and JPEG files into a [`GrayImage`] and encodes a
//! [`GrayImage`] back out, dispatching on the file extension. Color inputs
//! are reduced to grayscale with BT.601 luma weights, matching the
//! grayscale-decode behavior the transform core expects.
//!
//! # Example
//!
//! ```rust,ignore
//! use medscan_io::{read, write};
//!
//! let img = read("scan.png")?;
//! write("out/scan_enhanced.png", &img)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::path::Path;

use medscan_core::GrayImage;
use tracing::debug;

mod error;
pub mod jpeg;
pub mod png;

pub use error::{IoError, IoResult};

/// Creates a directory and all missing parents, ignoring existing ones.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> IoResult<()> {
    std::fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Creates the parent directory of a file path, if it has one.
pub fn ensure_parent_dir<P: AsRef<Path>>(path: P) -> IoResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Reads a grayscale image, dispatching on the file extension.
///
/// # Errors
///
/// - [`IoError::Io`] if the file is missing or unreadable.
/// - [`IoError::UnsupportedFormat`] for extensions other than
///   png/jpg/jpeg.
/// - [`IoError::DecodeError`] / [`IoError::UnsupportedBitDepth`] from the
///   format decoder.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading image");
    match extension(path).as_str() {
        "png" => png::read(path),
        "jpg" | "jpeg" => jpeg::read(path),
        ext => Err(IoError::UnsupportedFormat(format!(
            "cannot read .{ext} files (supported: png, jpg, jpeg)"
        ))),
    }
}

/// Writes a grayscale image, dispatching on the file extension.
///
/// The parent directory is created if missing.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for unknown extensions, otherwise
/// whatever the format encoder reports.
pub fn write<P: AsRef<Path>>(path: P, img: &GrayImage) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "writing image");
    ensure_parent_dir(path)?;
    match extension(path).as_str() {
        "png" => png::write(path, img),
        "jpg" | "jpeg" => jpeg::write(path, img),
        ext => Err(IoError::UnsupportedFormat(format!(
            "cannot write .{ext} files (supported: png, jpg, jpeg)"
        ))),
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Reduces an RGB triple to grayscale with ITU-R BT.601 luma coefficients.
#[inline]
pub(crate) fn luma601(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}
