//! Grayscale image buffer.
//!
//! [`GrayImage`] is the single pixel container used across the workspace:
//! a 2-D grid of 8-bit intensities stored row-major, top-to-bottom.
//!
//! # Memory Layout
//!
//! ```text
//! Memory: [p p p p ...]  <- Row 0
//!         [p p p p ...]  <- Row 1
//!         ...
//! ```
//!
//! # Ownership
//!
//! Transforms in `medscan-ops` take a `&GrayImage` and return a new
//! `GrayImage` of identical dimensions; they never mutate their input.
//! Every sample is a `u8`, so the [0, 255] intensity invariant holds by
//! construction.
//!
//! # Usage
//!
//! ```rust
//! use medscan_core::GrayImage;
//!
//! let mut img = GrayImage::new(512, 512);
//! img.set_pixel(100, 100, 200).unwrap();
//! assert_eq!(img.pixel(100, 100), Some(200));
//! ```

use crate::{Error, Result};

/// Owned 8-bit grayscale image buffer.
///
/// Stores `width * height` intensity samples in row-major order.
///
/// # Example
///
/// ```rust
/// use medscan_core::GrayImage;
///
/// let img = GrayImage::filled(4, 4, 128);
/// assert_eq!(img.pixel_count(), 16);
/// assert!(img.pixels().all(|p| p == 128));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    /// Intensity samples, row-major
    data: Vec<u8>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl GrayImage {
    /// Creates a new image filled with zeros (black).
    ///
    /// # Example
    ///
    /// ```rust
    /// use medscan_core::GrayImage;
    ///
    /// let img = GrayImage::new(640, 480);
    /// assert_eq!(img.dimensions(), (640, 480));
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Creates an image filled with a single intensity value.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            data: vec![value; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Creates an image from existing intensity data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use medscan_core::GrayImage;
    ///
    /// let img = GrayImage::from_raw(2, 2, vec![0, 0, 255, 255]).unwrap();
    /// assert_eq!(img.pixel(0, 1), Some(255));
    /// ```
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} elements, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has zero pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the intensity at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Sets the intensity at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the
    /// image.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        self.data[y as usize * self.width as usize + x as usize] = value;
        Ok(())
    }

    /// Returns the raw sample buffer, row-major.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw sample buffer mutably.
    #[inline]
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image and returns the sample buffer.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Iterates over all intensity samples in row-major order.
    #[inline]
    pub fn pixels(&self) -> impl Iterator<Item = u8> + '_ {
        self.data.iter().copied()
    }

    /// Returns a new image of identical dimensions with `f` applied to
    /// every sample.
    ///
    /// This is the building block for point transforms: the input is left
    /// untouched and a fresh grid is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use medscan_core::GrayImage;
    ///
    /// let img = GrayImage::filled(2, 2, 10);
    /// let inverted = img.map(|p| 255 - p);
    /// assert_eq!(inverted.pixel(0, 0), Some(245));
    /// assert_eq!(img.pixel(0, 0), Some(10));
    /// ```
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(u8) -> u8,
    {
        Self {
            data: self.data.iter().map(|&p| f(p)).collect(),
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let img = GrayImage::new(3, 2);
        assert_eq!(img.pixel_count(), 6);
        assert!(img.pixels().all(|p| p == 0));
    }

    #[test]
    fn test_from_raw_length_check() {
        assert!(GrayImage::from_raw(2, 2, vec![1, 2, 3]).is_err());
        assert!(GrayImage::from_raw(2, 2, vec![1, 2, 3, 4]).is_ok());
    }

    #[test]
    fn test_pixel_access() {
        let mut img = GrayImage::new(4, 3);
        img.set_pixel(3, 2, 99).unwrap();
        assert_eq!(img.pixel(3, 2), Some(99));
        assert_eq!(img.pixel(4, 2), None);
        assert!(img.set_pixel(0, 3, 1).is_err());
    }

    #[test]
    fn test_row_major_order() {
        let img = GrayImage::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(img.pixel(0, 0), Some(1));
        assert_eq!(img.pixel(1, 0), Some(2));
        assert_eq!(img.pixel(0, 1), Some(3));
        assert_eq!(img.pixel(1, 1), Some(4));
    }

    #[test]
    fn test_map_does_not_mutate_input() {
        let img = GrayImage::filled(2, 2, 100);
        let out = img.map(|p| p / 2);
        assert_eq!(img.pixel(0, 0), Some(100));
        assert_eq!(out.pixel(0, 0), Some(50));
        assert_eq!(out.dimensions(), img.dimensions());
    }

    #[test]
    fn test_empty_image() {
        let img = GrayImage::new(0, 0);
        assert!(img.is_empty());
        assert_eq!(img.pixels().count(), 0);
    }
}
