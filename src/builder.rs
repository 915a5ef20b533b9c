use std::path::PathBuf;

use crate::config::OcrConfig;
use crate::extractors::ExtractOptions;
use crate::images_to_text::{OcrEngine, OcrEngineFactory};
use crate::pipelines;
use crate::{ExtractError, ExtractionOutcome};

/// Represents the input source for an extraction
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Text that has already been recognized
    Text(String),
    /// Label image to run through OCR first
    Image(PathBuf),
}

/// Builder for configuring and executing an ingredient extraction
#[derive(Default)]
pub struct IngredientExtractorBuilder {
    source: Option<InputSource>,
    engine: Option<Box<dyn OcrEngine>>,
    ocr_config: Option<OcrConfig>,
    debug: bool,
}

impl IngredientExtractorBuilder {
    /// Set the input source to recognized text
    ///
    /// # Example
    /// ```
    /// use label_ingredients::IngredientExtractor;
    ///
    /// let builder = IngredientExtractor::builder()
    ///     .text("Active Ingredients: Zinc Oxide 20%. Uses: sunscreen");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Set the input source to a label image
    ///
    /// The image is recognized with the configured engine, Tesseract by default.
    ///
    /// # Example
    /// ```
    /// use label_ingredients::IngredientExtractor;
    ///
    /// let builder = IngredientExtractor::builder()
    ///     .image("/path/to/label.jpg");
    /// ```
    pub fn image(mut self, image_path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::Image(image_path.into()));
        self
    }

    /// Use an already constructed OCR engine
    pub fn engine(mut self, engine: Box<dyn OcrEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Build the OCR engine from this configuration instead of the defaults
    pub fn ocr_config(mut self, config: OcrConfig) -> Self {
        self.ocr_config = Some(config);
        self
    }

    /// Log the raw text and located sections while extracting
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Build and execute the extraction
    ///
    /// # Errors
    /// Returns `ExtractError` if:
    /// - No input source was specified
    /// - The image does not exist
    /// - The OCR engine cannot be constructed
    ///
    /// Recognition failures are reported as [`ExtractionOutcome::Failed`].
    ///
    /// # Example
    /// ```no_run
    /// # use label_ingredients::IngredientExtractor;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let outcome = IngredientExtractor::builder()
    ///     .image("label.jpg")
    ///     .build()
    ///     .await?;
    /// println!("{}", outcome);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<ExtractionOutcome, ExtractError> {
        let source = self.source.ok_or_else(|| {
            ExtractError::BuilderError(
                "No input source specified. Use .text() or .image()".to_string(),
            )
        })?;

        let options = ExtractOptions { debug: self.debug };

        match source {
            InputSource::Text(text) => Ok(pipelines::text::process(&text, &options)),
            InputSource::Image(path) => {
                let engine = match self.engine {
                    Some(engine) => engine,
                    None => OcrEngineFactory::from_config(&self.ocr_config.unwrap_or_default())?,
                };
                pipelines::image::process(engine.as_ref(), &path, &options).await
            }
        }
    }
}

/// Main entry point for the builder API
pub struct IngredientExtractor;

impl IngredientExtractor {
    /// Creates a new builder for extracting ingredients
    ///
    /// # Example
    /// ```
    /// use label_ingredients::IngredientExtractor;
    ///
    /// let builder = IngredientExtractor::builder();
    /// ```
    pub fn builder() -> IngredientExtractorBuilder {
        IngredientExtractorBuilder::default()
    }
}
