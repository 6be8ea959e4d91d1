//! Container decode/encode boundary.
//!
//! All parsing and serialization of image containers happens here; the
//! filters only ever see validated [`ColorImage`] buffers. Grayscale and
//! alpha inputs are promoted to plain RGB on decode, so the pipeline can
//! assume 3 channels throughout.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use ndarray::Array3;

use crate::error::{Error, Result};
use crate::raster::ColorImage;

/// Decode PNG, JPEG or WebP bytes into an RGB buffer.
///
/// Any parse failure, an unrecognized container, or an empty raster is
/// reported as [`Error::Decode`] before any filtering work happens.
pub fn decode(bytes: &[u8]) -> Result<ColorImage> {
    let decoded = image::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))?;
    let rgb = decoded.into_rgb8();

    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has no pixels".to_string()));
    }

    let data = Array3::from_shape_fn((height as usize, width as usize, 3), |(y, x, c)| {
        rgb.get_pixel(x as u32, y as u32)[c]
    });
    ColorImage::new(data)
}

/// Encode an RGB buffer into the given container format.
///
/// # Arguments
/// * `image` - Pixel buffer to serialize
/// * `format` - Target container; PNG, JPEG and WebP are supported
/// * `jpeg_quality` - Quality used for JPEG output (ignored otherwise)
pub fn encode(image: &ColorImage, format: ImageFormat, jpeg_quality: u8) -> Result<Vec<u8>> {
    let (height, width) = image.dim();
    let raw: Vec<u8> = image.as_array().iter().copied().collect();

    let mut bytes = Cursor::new(Vec::new());
    match format {
        ImageFormat::Png => PngEncoder::new(&mut bytes).write_image(
            &raw,
            width as u32,
            height as u32,
            ExtendedColorType::Rgb8,
        ),
        ImageFormat::Jpeg => JpegEncoder::new_with_quality(&mut bytes, jpeg_quality).write_image(
            &raw,
            width as u32,
            height as u32,
            ExtendedColorType::Rgb8,
        ),
        ImageFormat::WebP => WebPEncoder::new_lossless(&mut bytes).write_image(
            &raw,
            width as u32,
            height as u32,
            ExtendedColorType::Rgb8,
        ),
        other => {
            return Err(Error::Encode(format!(
                "unsupported output format: {:?}",
                other
            )))
        }
    }
    .map_err(|e| Error::Encode(e.to_string()))?;

    Ok(bytes.into_inner())
}

/// Resolve the container format from a file name's extension.
pub fn format_for_name(name: &str) -> Option<ImageFormat> {
    let (_, ext) = name.rsplit_once('.')?;
    ImageFormat::from_extension(ext.to_ascii_lowercase())
}

/// Render an image as a `data:image/jpeg;base64,...` URI for inline previews.
pub fn jpeg_data_uri(image: &ColorImage, jpeg_quality: u8) -> Result<String> {
    let jpeg = encode(image, ImageFormat::Jpeg, jpeg_quality)?;
    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(jpeg)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode(b"definitely not an image");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_empty_input() {
        assert!(matches!(decode(&[]), Err(Error::Decode(_))));
    }

    #[test]
    fn test_png_round_trip() {
        let img = ColorImage::new(Array3::from_shape_fn((5, 4, 3), |(y, x, c)| {
            (y * 40 + x * 9 + c * 3) as u8
        }))
        .unwrap();

        let bytes = encode(&img, ImageFormat::Png, 95).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_decode_promotes_grayscale_to_rgb() {
        let gray = image::GrayImage::from_pixel(4, 3, image::Luma([77u8]));
        let mut bytes = Cursor::new(Vec::new());
        gray.write_to(&mut bytes, ImageFormat::Png).unwrap();

        let decoded = decode(bytes.get_ref()).unwrap();
        assert_eq!(decoded.dim(), (3, 4));
        assert!(decoded.as_array().iter().all(|&v| v == 77));
    }

    #[test]
    fn test_format_for_name() {
        assert_eq!(format_for_name("photo.JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(format_for_name("mask.webp"), Some(ImageFormat::WebP));
        assert_eq!(format_for_name("archive.png"), Some(ImageFormat::Png));
        assert_eq!(format_for_name("noextension"), None);
    }

    #[test]
    fn test_jpeg_data_uri_shape() {
        let img = ColorImage::new(Array3::from_elem((4, 4, 3), 128u8)).unwrap();
        let uri = jpeg_data_uri(&img, 95).unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
        assert!(uri.len() > "data:image/jpeg;base64,".len());
    }
}
