//! OCR collaborators that turn a label image into one block of text.

mod factory;
mod google_vision;
mod tesseract;

pub use factory::OcrEngineFactory;
pub use google_vision::GoogleVisionEngine;
pub use tesseract::TesseractEngine;

use crate::error::ExtractError;
use async_trait::async_trait;
use std::path::Path;

/// Unified trait for all OCR engines
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Get the engine name (e.g., "tesseract", "google_vision")
    fn engine_name(&self) -> &str;

    /// Checks that the engine is installed or reachable and reports its version.
    ///
    /// Local engines run their binary; remote engines send an empty
    /// authenticated request. Fails with [`ExtractError::OcrUnavailable`].
    async fn version(&self) -> Result<String, ExtractError>;

    /// Recognizes the image at `image_path` as a single block of text.
    ///
    /// The returned text may be empty.
    async fn recognize(&self, image_path: &Path) -> Result<String, ExtractError>;
}
