//! Turns recognized label text into ingredient lists.
//!
//! The pipeline runs in four steps: locate the section headers, slice the
//! text into sections, clean each section into names, and format the report.

pub mod cleaner;
pub mod loose;
pub mod report;
pub mod sections;

use crate::model::{IngredientReport, SectionKind};
use log::debug;

pub use self::cleaner::{clean_token, clean_tokens};
pub use self::loose::extract_loose;
pub use self::report::format_report;
pub use self::sections::{find_header, find_section_end, locate_sections, LocatedSections};

/// Options for a single extraction run
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Log the raw text and located sections at debug level
    pub debug: bool,
}

/// Extracts both ingredient lists from recognized text.
///
/// Falls back to loose extraction when no header yields a non-empty section.
/// An empty report means nothing was found on either path.
pub fn extract_report(text: &str, options: &ExtractOptions) -> IngredientReport {
    if options.debug {
        debug!("=== RAW EXTRACTED TEXT ===\n{}", text);
    }

    let mut report = IngredientReport::default();
    let located = locate_sections(text);

    if located.is_empty() {
        if options.debug {
            debug!("No ingredient sections found with headers, trying loose extraction");
        }
        if let Some((kind, joined)) = extract_loose(text) {
            if options.debug {
                debug!("Loose {:?} section: {}", kind, joined);
            }
            push_section(&mut report, kind, &joined);
        }
        return report;
    }

    for section in located.iter() {
        if options.debug {
            debug!(
                "{:?} section [{}..{}]: {}",
                section.kind, section.start, section.end, section.text
            );
        }
        push_section(&mut report, section.kind, section.text);
    }

    report
}

fn push_section(report: &mut IngredientReport, kind: SectionKind, text: &str) {
    let names = clean_tokens(text);
    match kind {
        SectionKind::Active => report.active.extend(names),
        SectionKind::Inactive => report.inactive.extend(names),
    }
}

/// Extracts ingredients and renders the report string.
pub fn extract(text: &str) -> String {
    extract_with_options(text, &ExtractOptions::default())
}

/// Same as [`extract`], with diagnostics controlled by `options`.
pub fn extract_with_options(text: &str, options: &ExtractOptions) -> String {
    format_report(&extract_report(text, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NOTHING_DETECTED;

    #[test]
    fn test_debug_flag_does_not_change_result() {
        let text = "Active Ingredients: Aspirin 325 mg. Uses: pain";
        assert_eq!(
            extract_with_options(text, &ExtractOptions { debug: true }),
            extract(text)
        );
    }

    #[test]
    fn test_sections_found_but_empty_after_cleaning() {
        assert_eq!(extract("Active ingredients: 500, 2.5%. Uses: fever"), NOTHING_DETECTED);
    }

    #[test]
    fn test_loose_path() {
        let report = extract_report("Water, Glycerin, Cetyl Alcohol", &ExtractOptions::default());
        assert!(report.active.is_empty());
        assert_eq!(report.inactive, vec!["Water", "Glycerin", "Cetyl Alcohol"]);
    }
}
