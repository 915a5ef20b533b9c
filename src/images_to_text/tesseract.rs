use super::OcrEngine;
use crate::config::OcrConfig;
use crate::error::ExtractError;
use async_trait::async_trait;
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Output;
use tokio::process::Command;

/// Runs a local Tesseract binary
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    binary: PathBuf,
    page_segmentation_mode: u8,
    language: Option<String>,
}

impl TesseractEngine {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            page_segmentation_mode: 6,
            language: None,
        }
    }

    /// Create a Tesseract engine from configuration
    pub fn from_config(config: &OcrConfig) -> Self {
        Self {
            binary: PathBuf::from(&config.tesseract_cmd),
            page_segmentation_mode: config.page_segmentation_mode,
            language: config.language.clone(),
        }
    }

    pub fn with_page_segmentation_mode(mut self, mode: u8) -> Self {
        self.page_segmentation_mode = mode;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn recognize_args(&self, image_path: &Path) -> Vec<String> {
        let mut args = vec![
            image_path.to_string_lossy().into_owned(),
            "stdout".to_string(),
            "--psm".to_string(),
            self.page_segmentation_mode.to_string(),
        ];
        if let Some(language) = &self.language {
            args.push("-l".to_string());
            args.push(language.clone());
        }
        args
    }

    async fn run(&self, args: &[String]) -> Result<Output, ExtractError> {
        Command::new(&self.binary)
            .args(args)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => ExtractError::OcrUnavailable(
                    format!("cannot run '{}': {}", self.binary.display(), e),
                ),
                _ => ExtractError::Io(e),
            })
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    fn engine_name(&self) -> &str {
        "tesseract"
    }

    async fn version(&self) -> Result<String, ExtractError> {
        let output = self.run(&["--version".to_string()]).await?;
        if !output.status.success() {
            return Err(ExtractError::OcrUnavailable(format!(
                "'{} --version' exited with {}",
                self.binary.display(),
                output.status
            )));
        }

        // Older releases print the banner on stderr
        let banner = if output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stderr)
        } else {
            String::from_utf8_lossy(&output.stdout)
        };

        parse_version(&banner).ok_or_else(|| {
            ExtractError::OcrUnavailable(format!(
                "unrecognized version output from '{}'",
                self.binary.display()
            ))
        })
    }

    async fn recognize(&self, image_path: &Path) -> Result<String, ExtractError> {
        let args = self.recognize_args(image_path);
        debug!("Running {} {}", self.binary.display(), args.join(" "));

        let output = self.run(&args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::Recognition(stderr.trim().to_string()));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("Extracted text from image: {} characters", text.len());
        Ok(text)
    }
}

/// Pulls the version number out of `tesseract --version` output.
fn parse_version(banner: &str) -> Option<String> {
    let first_line = banner.lines().find(|line| !line.trim().is_empty())?;
    let version = first_line.trim().strip_prefix("tesseract")?.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}
