//! PNG format support.
//!
//! Reads 8-bit PNG files into a [`GrayImage`] (color inputs reduced via
//! BT.601 luma) and writes 8-bit grayscale PNGs. An optional `tEXt` chunk
//! carries a human-readable title on charts.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use medscan_core::GrayImage;

use crate::{luma601, IoError, IoResult};

/// Reads a PNG file as a grayscale image.
///
/// 8-bit grayscale data passes through untouched; 8-bit RGB/RGBA is
/// reduced with BT.601 luma (alpha ignored). 16-bit and paletted files are
/// rejected.
///
/// # Errors
///
/// [`IoError::Io`] for missing files, [`IoError::DecodeError`] for corrupt
/// data, [`IoError::UnsupportedBitDepth`] for layouts other than 8-bit
/// gray/RGB/RGBA.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width;
    let height = info.height;
    let pixels = &buf[..info.buffer_size()];

    let data: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => pixels.to_vec(),
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            pixels.chunks(2).map(|ga| ga[0]).collect()
        }
        (png::ColorType::Rgb, png::BitDepth::Eight) => pixels
            .chunks(3)
            .map(|rgb| luma601(rgb[0], rgb[1], rgb[2]))
            .collect(),
        (png::ColorType::Rgba, png::BitDepth::Eight) => pixels
            .chunks(4)
            .map(|rgba| luma601(rgba[0], rgba[1], rgba[2]))
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    GrayImage::from_raw(width, height, data)
        .map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Writes a grayscale image to an 8-bit PNG file.
pub fn write<P: AsRef<Path>>(path: P, img: &GrayImage) -> IoResult<()> {
    write_impl(path, img, None)
}

/// Writes a grayscale image to PNG with a `tEXt` title chunk.
///
/// Used for histogram charts, where the title travels with the artifact
/// instead of being rasterized into it.
pub fn write_with_title<P: AsRef<Path>>(path: P, img: &GrayImage, title: &str) -> IoResult<()> {
    write_impl(path, img, Some(title))
}

fn write_impl<P: AsRef<Path>>(path: P, img: &GrayImage, title: Option<&str>) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, img.width(), img.height());
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    if let Some(title) = title {
        encoder
            .add_text_chunk("Title".to_string(), title.to_string())
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
    }

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(img.as_raw())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");

        let data: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();
        let img = GrayImage::from_raw(8, 8, data).unwrap();

        write(&path, &img).unwrap();
        let loaded = read(&path).unwrap();
        assert_eq!(loaded, img);
    }

    #[test]
    fn test_title_chunk_roundtrip_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titled.png");

        let img = GrayImage::filled(4, 4, 33);
        write_with_title(&path, &img, "Original Histogram").unwrap();
        assert_eq!(read(&path).unwrap(), img);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(read("nope.png"), Err(IoError::Io(_))));
    }
}
