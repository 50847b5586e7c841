//! JPEG format support.
//!
//! Reads baseline JPEG files into a [`GrayImage`] (RGB reduced via BT.601
//! luma, which matches how the JPEG luma plane is defined) and writes
//! grayscale JPEGs at quality 90.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use medscan_core::GrayImage;

use crate::{luma601, IoError, IoResult};

/// Default encode quality (0-100).
pub const DEFAULT_QUALITY: u8 = 90;

/// Reads a JPEG file as a grayscale image.
///
/// # Errors
///
/// [`IoError::Io`] for missing files, [`IoError::DecodeError`] for corrupt
/// data, [`IoError::UnsupportedFormat`] for CMYK files.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let file = File::open(path.as_ref())?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let data: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::L8 => pixels,
        jpeg_decoder::PixelFormat::L16 => {
            // 16-bit grayscale: keep the high byte.
            pixels.chunks(2).map(|l16| l16[0]).collect()
        }
        jpeg_decoder::PixelFormat::RGB24 => pixels
            .chunks(3)
            .map(|rgb| luma601(rgb[0], rgb[1], rgb[2]))
            .collect(),
        jpeg_decoder::PixelFormat::CMYK32 => {
            return Err(IoError::UnsupportedFormat("CMYK JPEG".into()));
        }
    };

    GrayImage::from_raw(width, height, data)
        .map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Writes a grayscale image to a JPEG file at [`DEFAULT_QUALITY`].
pub fn write<P: AsRef<Path>>(path: P, img: &GrayImage) -> IoResult<()> {
    write_with_quality(path, img, DEFAULT_QUALITY)
}

/// Writes a grayscale image to a JPEG file at the given quality (0-100).
///
/// # Errors
///
/// [`IoError::EncodeError`] if the dimensions exceed JPEG's 16-bit limit
/// or the encoder fails.
pub fn write_with_quality<P: AsRef<Path>>(path: P, img: &GrayImage, quality: u8) -> IoResult<()> {
    if img.width() > u16::MAX as u32 || img.height() > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "image {}x{} exceeds JPEG dimension limit",
            img.width(),
            img.height()
        )));
    }

    let mut buffer = Vec::new();
    let encoder = jpeg_encoder::Encoder::new(&mut buffer, quality);
    encoder
        .encode(
            img.as_raw(),
            img.width() as u16,
            img.height() as u16,
            jpeg_encoder::ColorType::Luma,
        )
        .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

    std::fs::write(path.as_ref(), &buffer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_shape_and_tone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.jpg");

        // Smooth gradient compresses almost losslessly.
        let data: Vec<u8> = (0..256).map(|i| i as u8).collect();
        let img = GrayImage::from_raw(16, 16, data).unwrap();

        write(&path, &img).unwrap();
        let loaded = read(&path).unwrap();

        assert_eq!(loaded.dimensions(), (16, 16));
        // Lossy, but nowhere near unrecognizable.
        for (a, b) in img.pixels().zip(loaded.pixels()) {
            assert!((a as i16 - b as i16).abs() <= 16, "{a} vs {b}");
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(read("nope.jpg"), Err(IoError::Io(_))));
    }

    #[test]
    fn test_oversized_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let img = GrayImage::new(u16::MAX as u32 + 1, 1);
        let err = write(dir.path().join("wide.jpg"), &img).unwrap_err();
        assert!(matches!(err, IoError::EncodeError(_)));

        // At the limit itself the guard must not trip.
        assert!(write(dir.path().join("ok.jpg"), &GrayImage::new(1, 1)).is_ok());
    }
}
