//! Image intake for the diagnosis flow.
//!
//! Turns local image paths into vision findings. Unreadable or
//! unanalyzable images never fail the request; they produce a
//! placeholder finding instead so the text model sees what went wrong.

use crate::services::providers::{ImageAttachment, VisionProvider};
use base64::{engine::general_purpose, Engine as _};
use std::sync::Arc;
use thiserror::Error;

/// Instruction sent to the vision model for each image.
const ISSUE_INSTRUCTION: &str = "Look at this image. Identify the main problem or issue shown. Reply in one line like: Issue is: <description>";

#[derive(Debug, Error)]
enum ImageLoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Decode(#[from] image::ImageError),
}

/// Extracts a one-line issue description from each patient image.
pub struct IssueExtractor {
    vision: Arc<dyn VisionProvider>,
}

impl IssueExtractor {
    pub fn new(vision: Arc<dyn VisionProvider>) -> Self {
        Self { vision }
    }

    /// Describe the image at `path`.
    ///
    /// Returns the model's finding, or a placeholder line naming the
    /// path and the failure when the image cannot be read or analyzed.
    pub async fn extract(&self, path: &str) -> String {
        let attachment = match load_attachment(path).await {
            Ok(attachment) => attachment,
            Err(e) => {
                tracing::warn!(path, error = %e, "Failed to load image");
                return format!("Could not load image {}: {}", path, e);
            }
        };

        match self.vision.describe(ISSUE_INSTRUCTION, &attachment).await {
            Ok(finding) => finding.trim().to_string(),
            Err(e) => {
                tracing::warn!(path, error = %e, "Failed to analyze image");
                format!("Could not analyze image {}: {}", path, e)
            }
        }
    }
}

/// Read and validate an image file, returning it base64-encoded with
/// its detected MIME type.
async fn load_attachment(path: &str) -> Result<ImageAttachment, ImageLoadError> {
    let bytes = tokio::fs::read(path).await?;

    let format = image::guess_format(&bytes)?;
    // Full decode catches truncated files that still carry a valid header.
    image::load_from_memory(&bytes)?;

    Ok(ImageAttachment {
        mime_type: format.to_mime_type().to_string(),
        data: general_purpose::STANDARD.encode(&bytes),
    })
}
