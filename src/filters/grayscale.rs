//! Grayscale conversion filter.
//!
//! Uses ITU-R BT.601 luminosity coefficients, the set used by most
//! photo-processing toolchains for 8-bit material.

use ndarray::Array2;

use crate::raster::{ColorImage, GrayImage};

/// ITU-R BT.601 luminosity coefficients
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Convert an RGB image to single-channel grayscale (luminosity method).
///
/// # Arguments
/// * `input` - RGB image with u8 values (0-255)
///
/// # Returns
/// Luminance image with the same dimensions
pub fn rgb_to_gray(input: &ColorImage) -> GrayImage {
    let (height, width) = input.dim();
    let source = input.as_array();
    let mut output = Array2::<u8>::zeros((height, width));

    for y in 0..height {
        for x in 0..width {
            let r = source[[y, x, 0]] as f32;
            let g = source[[y, x, 1]] as f32;
            let b = source[[y, x, 2]] as f32;

            output[[y, x]] = (LUMA_R * r + LUMA_G * g + LUMA_B * b).round() as u8;
        }
    }

    GrayImage { data: output }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn single_pixel(r: u8, g: u8, b: u8) -> ColorImage {
        let mut data = Array3::<u8>::zeros((1, 1, 3));
        data[[0, 0, 0]] = r;
        data[[0, 0, 1]] = g;
        data[[0, 0, 2]] = b;
        ColorImage::new(data).unwrap()
    }

    #[test]
    fn test_gray_red() {
        let result = rgb_to_gray(&single_pixel(255, 0, 0));
        // 0.299 * 255 ≈ 76
        assert_eq!(result.as_array()[[0, 0]], 76);
    }

    #[test]
    fn test_gray_green() {
        let result = rgb_to_gray(&single_pixel(0, 255, 0));
        // 0.587 * 255 ≈ 150
        assert_eq!(result.as_array()[[0, 0]], 150);
    }

    #[test]
    fn test_gray_blue() {
        let result = rgb_to_gray(&single_pixel(0, 0, 255));
        // 0.114 * 255 ≈ 29
        assert_eq!(result.as_array()[[0, 0]], 29);
    }

    #[test]
    fn test_gray_white() {
        // 0.299 + 0.587 + 0.114 = 1.0
        let result = rgb_to_gray(&single_pixel(255, 255, 255));
        assert_eq!(result.as_array()[[0, 0]], 255);
    }

    #[test]
    fn test_gray_neutral_input_unchanged() {
        let result = rgb_to_gray(&single_pixel(93, 93, 93));
        assert_eq!(result.as_array()[[0, 0]], 93);
    }

    #[test]
    fn test_gray_mixed_color() {
        // 0.299 * 200 + 0.587 * 100 + 0.114 * 50 = 124.2
        let result = rgb_to_gray(&single_pixel(200, 100, 50));
        assert_eq!(result.as_array()[[0, 0]], 124);
    }
}
