//! Bilateral smoothing filter.
//!
//! Edge-preserving blur: each pixel becomes a weighted average of its
//! neighborhood, where the weight combines spatial distance with color
//! similarity. Flat regions get smoothed while strong edges survive,
//! which is what gives the cartoon pipeline its posterized color areas.

use ndarray::{Array3, Axis};
use rayon::prelude::*;

use crate::raster::ColorImage;

/// Apply bilateral smoothing to an RGB image.
///
/// The neighborhood is the disc of offsets within `diameter / 2` of the
/// center. The spatial weight is a Gaussian over the Euclidean distance,
/// the color weight a Gaussian over the L1 distance summed across all
/// three channels, and the combined weight is shared by every channel.
/// Border pixels replicate the edge.
///
/// # Arguments
/// * `input` - Source image
/// * `diameter` - Neighborhood diameter in pixels
/// * `sigma_color` - Color similarity sigma (larger mixes stronger contrasts)
/// * `sigma_space` - Spatial sigma (larger weighs distant pixels more)
///
/// # Returns
/// Smoothed image with the same dimensions
pub fn bilateral_filter(
    input: &ColorImage,
    diameter: u32,
    sigma_color: f32,
    sigma_space: f32,
) -> ColorImage {
    let (height, width) = input.dim();
    let source = input.as_array();

    let radius = (diameter.max(1) / 2) as isize;
    let sigma_color = if sigma_color > 0.0 { sigma_color } else { 1.0 };
    let sigma_space = if sigma_space > 0.0 { sigma_space } else { 1.0 };

    let gauss_color_coeff = -0.5 / (sigma_color * sigma_color);
    let gauss_space_coeff = -0.5 / (sigma_space * sigma_space);

    // Disc of neighborhood offsets with precomputed spatial weights.
    let mut offsets: Vec<(isize, isize, f32)> = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let dist_sq = (dy * dy + dx * dx) as f32;
            if dist_sq.sqrt() > radius as f32 {
                continue;
            }
            offsets.push((dy, dx, (dist_sq * gauss_space_coeff).exp()));
        }
    }

    // Color weights indexed by the L1 distance over 3 channels (0..=765).
    let color_weight: Vec<f32> = (0..256 * 3)
        .map(|k| ((k * k) as f32 * gauss_color_coeff).exp())
        .collect();

    let mut output = Array3::<u8>::zeros((height, width, 3));
    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            for x in 0..width {
                let center = [
                    source[[y, x, 0]] as i32,
                    source[[y, x, 1]] as i32,
                    source[[y, x, 2]] as i32,
                ];

                let mut sum = [0.0f32; 3];
                let mut weight_sum = 0.0f32;

                for &(dy, dx, spatial) in &offsets {
                    let sy = (y as isize + dy).clamp(0, height as isize - 1) as usize;
                    let sx = (x as isize + dx).clamp(0, width as isize - 1) as usize;

                    let diff = (source[[sy, sx, 0]] as i32 - center[0]).abs()
                        + (source[[sy, sx, 1]] as i32 - center[1]).abs()
                        + (source[[sy, sx, 2]] as i32 - center[2]).abs();

                    let weight = spatial * color_weight[diff as usize];
                    for c in 0..3 {
                        sum[c] += source[[sy, sx, c]] as f32 * weight;
                    }
                    weight_sum += weight;
                }

                // The center contributes weight 1.0, so weight_sum > 0.
                for c in 0..3 {
                    row[[x, c]] = (sum[c] / weight_sum).round() as u8;
                }
            }
        });

    ColorImage { data: output }
}
