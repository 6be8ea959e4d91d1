//! Raster filters composed by the cartoon pipeline.
//!
//! Each filter is a pure function over the typed buffers in
//! [`crate::raster`]; its signature states which buffer type goes in and
//! which comes out:
//!
//! | Filter | Input | Output |
//! |--------|-------|--------|
//! | [`bilateral_filter`] | ColorImage | ColorImage |
//! | [`rgb_to_gray`] | ColorImage | GrayImage |
//! | [`median_color`] | ColorImage | ColorImage |
//! | [`median_gray`] | GrayImage | GrayImage |
//! | [`adaptive_mean_threshold`] | GrayImage | EdgeMask |
//! | [`apply_edge_mask`] | ColorImage + EdgeMask | ColorImage |
//!
//! ## Conventions
//!
//! - Output dimensions always equal input dimensions
//! - Windowed filters replicate the border pixel (clamp-to-edge)
//! - The row-parallel filters (bilateral, median) produce identical
//!   results to their serial equivalents

pub mod bilateral;
pub mod compose;
pub mod grayscale;
pub mod median;
pub mod threshold;

pub use bilateral::bilateral_filter;
pub use compose::apply_edge_mask;
pub use grayscale::rgb_to_gray;
pub use median::{median_color, median_gray};
pub use threshold::adaptive_mean_threshold;
