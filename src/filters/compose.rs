//! Edge mask composition.
//!
//! The final pipeline step: the binary edge mask is replicated across all
//! three channels and combined with the flattened color image by bitwise
//! AND. Mask value 255 passes the color through, 0 paints the edge black.

use ndarray::Array3;

use crate::raster::{ColorImage, EdgeMask};

/// Combine a color image with a binary edge mask.
///
/// # Arguments
/// * `color` - Flattened color image
/// * `mask` - Edge mask of the same size
///
/// # Returns
/// Image where masked-out pixels are black and the rest are unchanged
pub fn apply_edge_mask(color: &ColorImage, mask: &EdgeMask) -> ColorImage {
    let (height, width) = color.dim();
    assert_eq!(
        (height, width),
        mask.dim(),
        "mask size must match image size"
    );

    let source = color.as_array();
    let mask = mask.as_array();
    let mut output = Array3::<u8>::zeros((height, width, 3));

    for y in 0..height {
        for x in 0..width {
            let m = mask[[y, x]];
            for c in 0..3 {
                output[[y, x, c]] = source[[y, x, c]] & m;
            }
        }
    }

    ColorImage { data: output }
}
