use crate::extractors::{extract_report, ExtractOptions};
use crate::model::ExtractionOutcome;

/// Runs the extractor over text that has already been recognized.
pub fn process(text: &str, options: &ExtractOptions) -> ExtractionOutcome {
    ExtractionOutcome::from(extract_report(text, options))
}
