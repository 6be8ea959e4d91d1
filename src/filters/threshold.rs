//! Adaptive mean thresholding.
//!
//! Binarizes a grayscale image against the local neighborhood instead of a
//! single global cutoff, which keeps edges visible under uneven lighting.
//! In the cartoon pipeline the result serves as the edge mask: 0 marks an
//! edge line, 255 lets the flattened colors through.

use ndarray::Array2;

use crate::raster::{EdgeMask, GrayImage};

/// Binarize a grayscale image against its local mean.
///
/// The per-pixel threshold is the rounded mean of the `block_size` square
/// neighborhood (border pixels replicate the edge) minus `offset`, rounded
/// up. A pixel strictly above its threshold becomes 255, otherwise 0.
/// Pixels inside a uniform region sit exactly on the mean and therefore
/// pass; pixels on the darker side of an edge fall below it.
///
/// # Arguments
/// * `input` - Grayscale image
/// * `block_size` - Neighborhood side length; expected odd (9 in the pipeline)
/// * `offset` - Constant subtracted from the neighborhood mean
///
/// # Returns
/// Binary mask with the same dimensions, values 0 or 255
pub fn adaptive_mean_threshold(input: &GrayImage, block_size: usize, offset: f32) -> EdgeMask {
    let (height, width) = input.dim();
    let source = input.as_array();

    let radius = (block_size.max(1) / 2) as isize;
    let side = 2 * radius + 1;
    let area = (side * side) as u32;
    let delta = offset.ceil() as i32;

    let mut output = Array2::<u8>::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0u32;
            for dy in -radius..=radius {
                let sy = (y as isize + dy).clamp(0, height as isize - 1) as usize;
                for dx in -radius..=radius {
                    let sx = (x as isize + dx).clamp(0, width as isize - 1) as usize;
                    sum += source[[sy, sx]] as u32;
                }
            }

            // Round the mean to the nearest integer before comparing.
            let mean = ((sum + area / 2) / area) as i32;
            if source[[y, x]] as i32 > mean - delta {
                output[[y, x]] = 255;
            }
        }
    }

    EdgeMask { data: output }
}
