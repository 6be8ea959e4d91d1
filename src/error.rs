//! Error type shared across the crate.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("image decode failed: {0}")]
    Decode(String),
    #[error("image encode failed: {0}")]
    Encode(String),
    #[error("file type not allowed: {0}")]
    ExtensionNotAllowed(String),
    #[error("file too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },
    #[error("invalid image shape: {0}")]
    Shape(&'static str),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
