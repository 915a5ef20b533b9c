use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// OCR engine settings
    #[serde(default)]
    pub ocr: OcrConfig,
    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which OCR backend recognizes the label image
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// Local Tesseract binary
    #[default]
    Tesseract,
    /// Google Cloud Vision TEXT_DETECTION
    GoogleVision,
}

/// Configuration for the OCR collaborator
#[derive(Debug, Deserialize, Clone)]
pub struct OcrConfig {
    /// Engine to use
    #[serde(default)]
    pub engine: EngineKind,
    /// Path or name of the tesseract executable
    #[serde(default = "default_tesseract_cmd")]
    pub tesseract_cmd: String,
    /// Tesseract page segmentation mode (6 = single uniform block of text)
    #[serde(default = "default_page_segmentation_mode")]
    pub page_segmentation_mode: u8,
    /// Recognition language, e.g. "eng"
    pub language: Option<String>,
    /// API key for Google Vision (can also be set via GOOGLE_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the Google Vision endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            tesseract_cmd: default_tesseract_cmd(),
            page_segmentation_mode: default_page_segmentation_mode(),
            language: None,
            api_key: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for saving reports
#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// File the report is written to when no path is given
    #[serde(default = "default_output_path")]
    pub default_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_path: default_output_path(),
        }
    }
}

// Default value functions
fn default_tesseract_cmd() -> String {
    "tesseract".to_string()
}

fn default_page_segmentation_mode() -> u8 {
    6
}

fn default_base_url() -> String {
    "https://vision.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_output_path() -> String {
    "ingredients.txt".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with LABEL_INGREDIENTS__ prefix
    /// 2. label_ingredients.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: LABEL_INGREDIENTS__OCR__TESSERACT_CMD
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the precedence rules.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("label_ingredients").required(false))
        // Use double underscore for nested: LABEL_INGREDIENTS__OCR__ENGINE
        .add_source(
            Environment::with_prefix("LABEL_INGREDIENTS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
