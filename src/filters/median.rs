//! Median filter.
//!
//! Removes salt-and-pepper noise while preserving edges. The cartoon
//! pipeline runs it twice: on the grayscale image before edge extraction,
//! and on the original colors to flatten small texture into even areas.

use ndarray::{Array2, Array3, Axis};
use rayon::prelude::*;

use crate::raster::{ColorImage, GrayImage};

/// Apply a square-window median filter to an RGB image.
///
/// Each channel is filtered independently. Border pixels replicate the
/// edge so the window always holds `kernel_size * kernel_size` samples.
///
/// # Arguments
/// * `input` - Source image
/// * `kernel_size` - Window side length; expected odd (7 in the pipeline)
///
/// # Returns
/// Filtered image with the same dimensions
pub fn median_color(input: &ColorImage, kernel_size: usize) -> ColorImage {
    let (height, width) = input.dim();
    let source = input.as_array();

    let radius = (kernel_size.max(1) / 2) as isize;
    let window_size = (kernel_size.max(1)) * (kernel_size.max(1));

    let mut output = Array3::<u8>::zeros((height, width, 3));
    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            for x in 0..width {
                for c in 0..3 {
                    let mut values: Vec<u8> = Vec::with_capacity(window_size);

                    for dy in -radius..=radius {
                        let sy = (y as isize + dy).clamp(0, height as isize - 1) as usize;
                        for dx in -radius..=radius {
                            let sx = (x as isize + dx).clamp(0, width as isize - 1) as usize;
                            values.push(source[[sy, sx, c]]);
                        }
                    }

                    values.sort_unstable();
                    row[[x, c]] = values[values.len() / 2];
                }
            }
        });

    ColorImage { data: output }
}

/// Apply a square-window median filter to a grayscale image.
///
/// Same windowing and border handling as [`median_color`].
pub fn median_gray(input: &GrayImage, kernel_size: usize) -> GrayImage {
    let (height, width) = input.dim();
    let source = input.as_array();

    let radius = (kernel_size.max(1) / 2) as isize;
    let window_size = (kernel_size.max(1)) * (kernel_size.max(1));

    let mut output = Array2::<u8>::zeros((height, width));
    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            for x in 0..width {
                let mut values: Vec<u8> = Vec::with_capacity(window_size);

                for dy in -radius..=radius {
                    let sy = (y as isize + dy).clamp(0, height as isize - 1) as usize;
                    for dx in -radius..=radius {
                        let sx = (x as isize + dx).clamp(0, width as isize - 1) as usize;
                        values.push(source[[sy, sx]]);
                    }
                }

                values.sort_unstable();
                row[x] = values[values.len() / 2];
            }
        });

    GrayImage { data: output }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    #[test]
    fn test_median_gray_removes_salt() {
        let mut data = Array2::from_elem((5, 5), 128u8);
        data[[2, 2]] = 255;
        let img = GrayImage::new(data).unwrap();

        let result = median_gray(&img, 3);

        // One outlier in a 3x3 window cannot reach the median.
        assert_eq!(result.as_array()[[2, 2]], 128);
    }

    #[test]
    fn test_median_color_removes_pepper_per_channel() {
        let mut data = Array3::from_elem((5, 5, 3), 200u8);
        data[[2, 2, 1]] = 0;
        let img = ColorImage::new(data).unwrap();

        let result = median_color(&img, 3);

        assert_eq!(result.as_array()[[2, 2, 0]], 200);
        assert_eq!(result.as_array()[[2, 2, 1]], 200);
        assert_eq!(result.as_array()[[2, 2, 2]], 200);
    }

    #[test]
    fn test_median_gray_preserves_edge() {
        let data = Array2::from_shape_fn((6, 5), |(_, x)| if x < 2 { 20u8 } else { 200u8 });
        let img = GrayImage::new(data).unwrap();

        let result = median_gray(&img, 3);

        // x=1 window holds six 20s and three 200s, x=2 the reverse.
        assert_eq!(result.as_array()[[3, 1]], 20);
        assert_eq!(result.as_array()[[3, 2]], 200);
    }

    #[test]
    fn test_median_color_uniform_is_identity() {
        let img = ColorImage::new(Array3::from_elem((6, 6, 3), 77u8)).unwrap();
        let result = median_color(&img, 7);
        assert_eq!(result, img);
    }

    #[test]
    fn test_median_gray_kernel_one_is_identity() {
        let data = Array2::from_shape_fn((4, 4), |(y, x)| (y * 16 + x) as u8);
        let img = GrayImage::new(data).unwrap();
        let result = median_gray(&img, 1);
        assert_eq!(result, img);
    }
}
