//! Application configuration.
//!
//! Defaults can be overridden per field through environment variables
//! (`CARTOONIFY_*`) or a YAML file passed on the command line; YAML wins
//! over the environment.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Default directory for stored uploads.
const DEFAULT_UPLOAD_DIR: &str = "static/uploads";
/// Default directory for stored results.
const DEFAULT_RESULT_DIR: &str = "static/results";
/// Default upload size cap: 16 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;
/// Default quality for JPEG output and previews.
const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Runtime configuration for the cartoonify service layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where incoming originals are persisted.
    pub upload_dir: PathBuf,
    /// Where cartoon results are persisted.
    pub result_dir: PathBuf,
    /// Maximum accepted payload size in bytes, checked before decoding.
    pub max_upload_bytes: u64,
    /// Quality for JPEG results and base64 previews.
    pub jpeg_quality: u8,
    /// File name under `result_dir` shown on the home report, if any.
    pub home_image: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            upload_dir: std::env::var("CARTOONIFY_UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            result_dir: std::env::var("CARTOONIFY_RESULT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_RESULT_DIR)),
            max_upload_bytes: std::env::var("CARTOONIFY_MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            jpeg_quality: std::env::var("CARTOONIFY_JPEG_QUALITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_JPEG_QUALITY),
            home_image: std::env::var("CARTOONIFY_HOME_IMAGE").ok(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// Fields missing from the file keep their default (or environment)
    /// values.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.upload_dir, PathBuf::from("static/uploads"));
        assert_eq!(config.result_dir, PathBuf::from("static/results"));
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
        assert_eq!(config.jpeg_quality, 95);
        assert_eq!(config.home_image, None);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "jpeg_quality: 80\nupload_dir: /tmp/cartoonify-up\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.jpeg_quality, 80);
        assert_eq!(config.upload_dir, PathBuf::from("/tmp/cartoonify-up"));
        assert_eq!(config.result_dir, PathBuf::from("static/results"));
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let path = std::env::temp_dir().join("cartoonify-config-test.yaml");
        fs::write(&path, "home_image: profile2.jpg\nmax_upload_bytes: 1024\n").unwrap();

        let config = AppConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.home_image.as_deref(), Some("profile2.jpg"));
        assert_eq!(config.max_upload_bytes, 1024);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let path = std::env::temp_dir().join("cartoonify-config-bad.yaml");
        fs::write(&path, "max_upload_bytes: [not a number\n").unwrap();

        assert!(AppConfig::from_yaml_file(&path).is_err());

        fs::remove_file(&path).ok();
    }
}
