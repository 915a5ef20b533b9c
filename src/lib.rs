pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod images_to_text;
pub mod model;
pub mod pipelines;

pub use builder::{IngredientExtractor, IngredientExtractorBuilder, InputSource};
pub use config::{AppConfig, EngineKind, OcrConfig};
pub use error::ExtractError;
pub use extractors::{extract, extract_report, extract_with_options, ExtractOptions};
pub use images_to_text::{GoogleVisionEngine, OcrEngine, OcrEngineFactory, TesseractEngine};
pub use model::{ExtractionOutcome, Ingredient, IngredientReport, SectionKind, NOTHING_DETECTED};
pub use pipelines::save_report;

use std::path::Path;

/// Extracts ingredients from recognized label text.
///
/// # Example
/// ```
/// use label_ingredients::extract_from_text;
///
/// let outcome = extract_from_text("Other Ingredients: Water and Glycerin. Warnings: none");
/// assert_eq!(outcome.to_string(), "Inactive Ingredients: Water, Glycerin.");
/// ```
pub fn extract_from_text(text: &str) -> ExtractionOutcome {
    pipelines::text::process(text, &ExtractOptions::default())
}

/// Recognizes a label image with `engine` and extracts its ingredients.
///
/// # Errors
/// Returns [`ExtractError::ImageNotFound`] when `image_path` does not exist.
pub async fn extract_from_image(
    engine: &dyn OcrEngine,
    image_path: &Path,
    options: &ExtractOptions,
) -> Result<ExtractionOutcome, ExtractError> {
    pipelines::image::process(engine, image_path, options).await
}
