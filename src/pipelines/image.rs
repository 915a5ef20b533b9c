use crate::error::ExtractError;
use crate::extractors::ExtractOptions;
use crate::images_to_text::OcrEngine;
use crate::model::ExtractionOutcome;
use log::{debug, warn};
use std::path::Path;

/// Recognizes a label image and extracts its ingredients.
///
/// A missing image is returned as [`ExtractError::ImageNotFound`] before the
/// engine is invoked. Failures while loading or recognizing the image are
/// folded into [`ExtractionOutcome::Failed`], so callers always get an
/// outcome once the image exists.
pub async fn process(
    engine: &dyn OcrEngine,
    image_path: &Path,
    options: &ExtractOptions,
) -> Result<ExtractionOutcome, ExtractError> {
    if !image_path.exists() {
        return Err(ExtractError::ImageNotFound(image_path.to_path_buf()));
    }

    debug!(
        "Recognizing {} with {}",
        image_path.display(),
        engine.engine_name()
    );

    match engine.recognize(image_path).await {
        Ok(text) => Ok(super::text::process(&text, options)),
        Err(e) => {
            warn!("Failed to process {}: {}", image_path.display(), e);
            Ok(ExtractionOutcome::Failed {
                details: e.to_string(),
            })
        }
    }
}
