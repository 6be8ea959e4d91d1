//! The cartoon effect pipeline.
//!
//! Composes the individual filters into the full effect:
//!
//! 1. Bilateral smoothing of the input
//! 2. Grayscale reduction of the smoothed image
//! 3. Median denoise of the grayscale image
//! 4. Adaptive mean threshold producing the edge mask
//! 5. Median flattening of the *original* colors
//! 6. Mask combine of steps 4 and 5
//!
//! The whole pipeline is a pure function: same input and parameters,
//! byte-identical output.

use crate::filters::{
    adaptive_mean_threshold, apply_edge_mask, bilateral_filter, median_color, median_gray,
    rgb_to_gray,
};
use crate::raster::ColorImage;

/// Parameters for the cartoon pipeline.
///
/// The defaults are the tuned values the effect ships with; changing them
/// shifts the balance between flattened color areas and edge density.
#[derive(Debug, Clone, PartialEq)]
pub struct CartoonParams {
    /// Bilateral neighborhood diameter in pixels.
    pub bilateral_diameter: u32,
    /// Bilateral color similarity sigma.
    pub bilateral_sigma_color: f32,
    /// Bilateral spatial sigma.
    pub bilateral_sigma_space: f32,
    /// Median window applied to the grayscale image before thresholding.
    pub gray_median_kernel: usize,
    /// Median window applied to the original colors.
    pub color_median_kernel: usize,
    /// Neighborhood side length for the adaptive threshold.
    pub threshold_block_size: usize,
    /// Constant subtracted from the neighborhood mean.
    pub threshold_offset: f32,
}

impl Default for CartoonParams {
    fn default() -> Self {
        CartoonParams {
            bilateral_diameter: 9,
            bilateral_sigma_color: 75.0,
            bilateral_sigma_space: 75.0,
            gray_median_kernel: 7,
            color_median_kernel: 7,
            threshold_block_size: 9,
            threshold_offset: 2.0,
        }
    }
}

/// Apply the cartoon effect to an RGB image.
///
/// # Arguments
/// * `input` - Source image
/// * `params` - Pipeline parameters, usually [`CartoonParams::default`]
///
/// # Returns
/// Stylized 3-channel image with the same dimensions as the input
pub fn cartoonize(input: &ColorImage, params: &CartoonParams) -> ColorImage {
    let (height, width) = input.dim();
    log::debug!("Cartoonizing {}x{} image", width, height);

    let smoothed = bilateral_filter(
        input,
        params.bilateral_diameter,
        params.bilateral_sigma_color,
        params.bilateral_sigma_space,
    );
    let gray = rgb_to_gray(&smoothed);
    let gray = median_gray(&gray, params.gray_median_kernel);
    let edges =
        adaptive_mean_threshold(&gray, params.threshold_block_size, params.threshold_offset);
    let flattened = median_color(input, params.color_median_kernel);

    apply_edge_mask(&flattened, &edges)
}
