//! Cartoonify
//!
//! Cartoon-style image rendering built on typed raster buffers and
//! `ndarray`, with a small service layer for validating, storing and
//! converting uploaded files.
//!
//! ## Buffer Model
//! Every processing step declares its input and output buffer type:
//! - [`ColorImage`]: (height, width, 3) - 8-bit RGB
//! - [`GrayImage`]: (height, width) - 8-bit luminance
//! - [`EdgeMask`]: (height, width) - binary, values 0 or 255
//!
//! Mixing them up is a compile error rather than a runtime surprise.
//!
//! ## Modules
//! - [`filters`]: the individual raster operations
//! - [`cartoon`]: the fixed six-step cartoon pipeline
//! - [`codec`]: decoding and encoding of PNG, JPEG and WebP payloads
//! - [`intake`]: upload validation, storage and report generation
//! - [`config`]: runtime configuration from environment and YAML

pub mod cartoon;
pub mod codec;
pub mod config;
pub mod error;
pub mod filters;
pub mod intake;
pub mod raster;

pub use cartoon::{cartoonize, CartoonParams};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use raster::{ColorImage, EdgeMask, GrayImage};
