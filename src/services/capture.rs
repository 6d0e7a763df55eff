use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use futures::FutureExt;
use futures::future::BoxFuture;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};
use xcap::Monitor;

use super::error::ServiceError;
use crate::model::FileRef;

/// Image container written by the capture service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaptureFormat {
    #[default]
    Png,
    Jpg,
}

impl CaptureFormat {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            CaptureFormat::Png => "png",
            CaptureFormat::Jpg => "jpg",
        }
    }
}

/// Parameters passed to [`ScreenCapture::capture`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOptions {
    pub format: CaptureFormat,
    /// 0.0 to 1.0. Only JPEG output honours it; PNG is lossless.
    pub quality: f32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            format: CaptureFormat::Png,
            quality: 0.8,
        }
    }
}

impl CaptureOptions {
    /// Maps `quality` onto the 1..=100 scale the JPEG encoder expects.
    pub fn jpeg_quality(&self) -> u8 {
        let q = (self.quality.clamp(0.0, 1.0) * 100.0).round() as u8;
        q.max(1)
    }
}

/// Rasterizes the current screen into a local image file.
pub trait ScreenCapture: Send + Sync {
    fn capture(&self, options: CaptureOptions) -> BoxFuture<'_, Result<FileRef, ServiceError>>;
}

/// Captures the primary monitor with `xcap`.
///
/// Files are written under `directory` and never cleaned up by this crate.
#[derive(Debug, Clone)]
pub struct XcapCapture {
    directory: PathBuf,
}

impl XcapCapture {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Returns the directory screenshots are written to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl ScreenCapture for XcapCapture {
    fn capture(&self, options: CaptureOptions) -> BoxFuture<'_, Result<FileRef, ServiceError>> {
        let path = screenshot_path(&self.directory, options.format, Utc::now());
        async move {
            tokio::fs::create_dir_all(&self.directory).await?;
            let file =
                tokio::task::spawn_blocking(move || capture_primary_monitor(path, options))
                    .await??;
            tracing::info!(path = %file, "screenshot captured");
            Ok(file)
        }
        .boxed()
    }
}

/// Returns a unique-per-millisecond file path for a new screenshot.
pub fn screenshot_path(directory: &Path, format: CaptureFormat, now: DateTime<Utc>) -> PathBuf {
    let stamp = now.format("%Y%m%dT%H%M%S%3f");
    directory.join(format!("screenshot-{stamp}.{}", format.extension()))
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn capture_primary_monitor(path: PathBuf, options: CaptureOptions) -> Result<FileRef, ServiceError> {
    let monitors = Monitor::all()?;
    let monitor = monitors
        .iter()
        .find(|m| m.is_primary().unwrap_or(false))
        .or_else(|| monitors.first())
        .ok_or(ServiceError::NoMonitor)?;

    let image = DynamicImage::ImageRgba8(monitor.capture_image()?);
    write_image(&image, &path, options)?;
    Ok(FileRef::new(path))
}

/// Encodes `image` to `path` in the format and quality of `options`.
pub fn write_image(
    image: &DynamicImage,
    path: &Path,
    options: CaptureOptions,
) -> Result<(), ServiceError> {
    match options.format {
        CaptureFormat::Png => image.save_with_format(path, ImageFormat::Png)?,
        CaptureFormat::Jpg => {
            let mut writer = BufWriter::new(File::create(path)?);
            let encoder = JpegEncoder::new_with_quality(&mut writer, options.jpeg_quality());
            // JPEG has no alpha channel.
            DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?;
        }
    }
    Ok(())
}
