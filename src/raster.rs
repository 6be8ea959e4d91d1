//! Typed raster buffers passed between pipeline steps.
//!
//! Instead of untyped `(height, width, channels)` arrays, each intermediate
//! stage of the pipeline has its own buffer type:
//!
//! | Type | Shape | Values |
//! |------|-------|--------|
//! | [`ColorImage`] | (H, W, 3) | RGB, 0-255 |
//! | [`GrayImage`] | (H, W) | luminance, 0-255 |
//! | [`EdgeMask`] | (H, W) | 0 or 255 only |
//!
//! Filters declare which type they consume and produce, so a stage cannot
//! be handed the wrong intermediate. Constructors validate shape (and mask
//! values), so a successfully built buffer never needs re-checking.

use ndarray::{Array2, Array3};

use crate::error::{Error, Result};

/// An RGB image with 8-bit channels, stored as (height, width, 3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorImage {
    pub(crate) data: Array3<u8>,
}

impl ColorImage {
    /// Wrap an RGB buffer of shape (height, width, 3).
    ///
    /// # Arguments
    /// * `data` - Pixel array; must be non-empty with exactly 3 channels
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = data.dim();
        if channels != 3 {
            return Err(Error::Shape("color image requires exactly 3 channels"));
        }
        if height == 0 || width == 0 {
            return Err(Error::Shape("image must not be empty"));
        }
        Ok(ColorImage { data })
    }

    /// Image size as (height, width).
    pub fn dim(&self) -> (usize, usize) {
        let (height, width, _) = self.data.dim();
        (height, width)
    }

    pub fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    pub fn into_array(self) -> Array3<u8> {
        self.data
    }
}

/// A single-channel luminance image, stored as (height, width).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    pub(crate) data: Array2<u8>,
}

impl GrayImage {
    /// Wrap a luminance buffer of shape (height, width).
    pub fn new(data: Array2<u8>) -> Result<Self> {
        let (height, width) = data.dim();
        if height == 0 || width == 0 {
            return Err(Error::Shape("image must not be empty"));
        }
        Ok(GrayImage { data })
    }

    /// Image size as (height, width).
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn as_array(&self) -> &Array2<u8> {
        &self.data
    }
}

/// A binary edge mask: every value is either 0 (edge) or 255 (keep).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMask {
    pub(crate) data: Array2<u8>,
}

impl EdgeMask {
    /// Wrap a mask buffer of shape (height, width).
    ///
    /// Every value must be 0 or 255.
    pub fn new(data: Array2<u8>) -> Result<Self> {
        let (height, width) = data.dim();
        if height == 0 || width == 0 {
            return Err(Error::Shape("mask must not be empty"));
        }
        if data.iter().any(|&v| v != 0 && v != 255) {
            return Err(Error::Shape("mask values must be 0 or 255"));
        }
        Ok(EdgeMask { data })
    }

    /// Mask size as (height, width).
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn as_array(&self) -> &Array2<u8> {
        &self.data
    }
}
