//! File intake: validation, storage and processing of uploaded images.
//!
//! This is the service layer around the pipeline. It accepts a source
//! file, checks its extension and size, persists the original, runs the
//! cartoon effect, persists the result next to it, and returns a report
//! that serializes to the JSON shape downstream consumers expect.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::Serialize;

use crate::cartoon::{cartoonize, CartoonParams};
use crate::codec;
use crate::config::AppConfig;
use crate::error::{Error, Result};

/// Check whether a file name carries an accepted image extension.
///
/// The name must contain a dot and its final extension must be one of
/// png, jpg, jpeg or webp, compared case-insensitively.
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_ascii_lowercase();
            matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "webp")
        }
        None => false,
    }
}

/// Flatten a user-supplied file name into a safe ASCII name.
///
/// Path separators are stripped, whitespace becomes underscores, and
/// anything outside ASCII letters, digits, `.`, `-` and `_` is dropped.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let mut out = String::with_capacity(base.len());
    for ch in base.chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_') {
            out.push(ch);
        } else if ch.is_whitespace() {
            out.push('_');
        }
    }

    if out.is_empty() {
        out.push_str("upload");
    }
    out
}

/// Build a collision-resistant stored name: 10 random hex characters,
/// an underscore, then the sanitized original name.
pub fn unique_name(filename: &str) -> String {
    let tag: u64 = rand::thread_rng().gen::<u64>() >> 24;
    format!("{:010x}_{}", tag, sanitize_filename(filename))
}

/// Outcome of a processed upload.
///
/// Serializes to `{"status", "original", "result", "preview"}`.
#[derive(Debug, Serialize)]
pub struct UploadReport {
    pub status: &'static str,
    /// Stored copy of the original upload.
    pub original: String,
    /// Stored cartoon result.
    pub result: String,
    /// Inline `data:image/jpeg;base64,...` preview of the result.
    pub preview: String,
}

/// Validate, store and cartoonize one uploaded image.
///
/// The size cap is enforced before any decoding work. The original is
/// persisted under `config.upload_dir` with a unique name, the result
/// under `config.result_dir` as `cartoon_<unique name>`, encoded in the
/// source's own container format.
///
/// # Arguments
/// * `source` - Path of the incoming image file
/// * `config` - Storage directories, size cap and output quality
/// * `params` - Pipeline parameters
///
/// # Returns
/// An [`UploadReport`] with both stored paths and an inline preview
pub fn process_upload(
    source: &Path,
    config: &AppConfig,
    params: &CartoonParams,
) -> Result<UploadReport> {
    let file_name = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::ExtensionNotAllowed(source.display().to_string()))?;

    if !allowed_file(file_name) {
        return Err(Error::ExtensionNotAllowed(file_name.to_string()));
    }
    let format = codec::format_for_name(file_name)
        .ok_or_else(|| Error::ExtensionNotAllowed(file_name.to_string()))?;

    let size = fs::metadata(source)?.len();
    if size > config.max_upload_bytes {
        return Err(Error::TooLarge {
            size,
            limit: config.max_upload_bytes,
        });
    }

    log::info!("Processing image: {:?}", source);
    let bytes = fs::read(source)?;

    fs::create_dir_all(&config.upload_dir)?;
    fs::create_dir_all(&config.result_dir)?;

    let stored_name = unique_name(file_name);
    let input_path = config.upload_dir.join(&stored_name);
    fs::write(&input_path, &bytes)?;

    let original = codec::decode(&bytes)?;
    let cartoon = cartoonize(&original, params);

    let output_name = format!("cartoon_{}", stored_name);
    let output_path = config.result_dir.join(&output_name);
    fs::write(&output_path, codec::encode(&cartoon, format, config.jpeg_quality)?)?;
    log::info!("Saved cartoon result to {:?}", output_path);

    let preview = codec::jpeg_data_uri(&cartoon, config.jpeg_quality)?;

    Ok(UploadReport {
        status: "success",
        original: input_path.display().to_string(),
        result: output_path.display().to_string(),
        preview,
    })
}
