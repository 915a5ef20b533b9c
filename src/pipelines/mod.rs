pub mod image;
pub mod text;

use crate::error::ExtractError;
use crate::model::ExtractionOutcome;
use log::info;
use std::path::Path;

/// Writes the rendered outcome to `path` as UTF-8 text.
pub async fn save_report(outcome: &ExtractionOutcome, path: &Path) -> Result<(), ExtractError> {
    tokio::fs::write(path, outcome.to_string()).await?;
    info!("Ingredients saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NOTHING_DETECTED;

    #[tokio::test]
    async fn test_save_report_writes_rendered_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ingredients.txt");

        save_report(&ExtractionOutcome::NothingDetected, &path)
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), NOTHING_DETECTED);
    }
}
