//! Table-driven pixel remapping.
//!
//! Every transform in this crate reduces to a dense 256-entry table: the
//! output intensity depends only on the input intensity. Building the table
//! once and remapping the buffer keeps the per-pixel work to a single index.

use medscan_core::GrayImage;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Remaps every sample of `img` through `table`, returning a new image.
#[cfg(feature = "parallel")]
pub(crate) fn remap(img: &GrayImage, table: &[u8; 256]) -> GrayImage {
    let data: Vec<u8> = img
        .as_raw()
        .par_iter()
        .map(|&p| table[p as usize])
        .collect();
    GrayImage::from_raw(img.width(), img.height(), data)
        .expect("remapped buffer has the source length")
}

/// Remaps every sample of `img` through `table`, returning a new image.
#[cfg(not(feature = "parallel"))]
pub(crate) fn remap(img: &GrayImage, table: &[u8; 256]) -> GrayImage {
    img.map(|p| table[p as usize])
}
