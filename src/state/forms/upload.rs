//! Video file selection for the upload form

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Largest file the upload form accepts (100 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// A file chosen through the picker or dropped onto the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

/// Why a picked file was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("Please select a video file")]
    NotVideo,
    #[error("File size should be less than {}", size_limit(.limit))]
    TooLarge { size: u64, limit: u64 },
    #[error("This form does not take a file")]
    NotAccepted,
    #[error("The file can no longer be changed")]
    Locked,
}

/// Limit as the rejection message shows it, e.g. `100MB`
fn size_limit(limit: &u64) -> String {
    let label = format_file_size(*limit);
    match label.strip_suffix(" Bytes") {
        Some(count) => format!("{count} bytes"),
        None => label.replace(' ', ""),
    }
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Describe a file on disk; the MIME type comes from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        if !metadata.is_file() {
            anyhow::bail!("{} is not a file", path.display());
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, metadata.len(), mime_type_for(path)))
    }

    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with("video/")
    }

    /// Apply the picker constraints: video type first, then size
    pub fn check(&self, max_bytes: u64) -> std::result::Result<(), FileRejection> {
        if !self.is_video() {
            return Err(FileRejection::NotVideo);
        }
        if self.size > max_bytes {
            return Err(FileRejection::TooLarge {
                size: self.size,
                limit: max_bytes,
            });
        }
        Ok(())
    }
}

/// Guess a MIME type from the file extension
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "wmv" => "video/x-ms-wmv",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "ogv" => "video/ogg",
        "mpeg" | "mpg" => "video/mpeg",
        "3gp" => "video/3gpp",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        "txt" | "md" => "text/plain",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        _ => "application/octet-stream",
    }
}

/// Human-readable size, e.g. `1536` → `"1.5 KB"`
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}
