use super::{GoogleVisionEngine, OcrEngine, TesseractEngine};
use crate::config::{EngineKind, OcrConfig};
use crate::error::ExtractError;

pub struct OcrEngineFactory;

impl OcrEngineFactory {
    /// Create an engine instance from configuration
    pub fn from_config(config: &OcrConfig) -> Result<Box<dyn OcrEngine>, ExtractError> {
        match config.engine {
            EngineKind::Tesseract => Ok(Box::new(TesseractEngine::from_config(config))),
            EngineKind::GoogleVision => Ok(Box::new(GoogleVisionEngine::new(config)?)),
        }
    }

    /// Create an engine by name, using `config` for everything else
    pub fn create(name: &str, config: &OcrConfig) -> Result<Box<dyn OcrEngine>, ExtractError> {
        let engine = match name {
            "tesseract" => EngineKind::Tesseract,
            "google_vision" => EngineKind::GoogleVision,
            _ => {
                return Err(ExtractError::BuilderError(format!(
                    "Unknown OCR engine: {}",
                    name
                )))
            }
        };

        Self::from_config(&OcrConfig {
            engine,
            ..config.clone()
        })
    }

    /// List all available engine names
    pub fn available_engines() -> Vec<&'static str> {
        vec!["tesseract", "google_vision"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> OcrConfig {
        OcrConfig {
            api_key: Some("test-key".to_string()),
            ..OcrConfig::default()
        }
    }

    #[test]
    fn test_create_tesseract_engine() {
        let engine = OcrEngineFactory::create("tesseract", &create_test_config()).unwrap();
        assert_eq!(engine.engine_name(), "tesseract");
    }

    #[test]
    fn test_create_google_vision_engine() {
        let engine = OcrEngineFactory::create("google_vision", &create_test_config()).unwrap();
        assert_eq!(engine.engine_name(), "google_vision");
    }

    #[test]
    fn test_create_unknown_engine() {
        let result = OcrEngineFactory::create("easyocr", &create_test_config());
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("Unknown OCR engine"));
        }
    }

    #[test]
    fn test_default_engine_is_tesseract() {
        let engine = OcrEngineFactory::from_config(&OcrConfig::default()).unwrap();
        assert_eq!(engine.engine_name(), "tesseract");
    }

    #[test]
    fn test_available_engines() {
        let engines = OcrEngineFactory::available_engines();
        assert_eq!(engines, vec!["tesseract", "google_vision"]);
    }
}
