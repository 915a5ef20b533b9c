use crate::model::{IngredientSection, SectionKind};
use once_cell::sync::Lazy;
use regex::Regex;

// Headers only match at a word start so that "Inactive Ingredients" is never
// mistaken for an "active ingredients" header.
static ACTIVE_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:active|main)\s+ingredients?[\s:;.,]*").unwrap()
});

static INACTIVE_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:inactive|other|excipient)\s+ingredients?[\s:;.,]*").unwrap()
});

/// Phrases that close a list when no second header follows it
pub const END_MARKERS: [&str; 5] = ["uses", "directions", "warnings", "purpose", "keep out of reach"];

static END_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    let alternatives = END_MARKERS
        .iter()
        .map(|marker| regex::escape(marker))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives)).unwrap()
});

impl SectionKind {
    fn header_pattern(&self) -> &'static Regex {
        match self {
            SectionKind::Active => &ACTIVE_HEADER_RE,
            SectionKind::Inactive => &INACTIVE_HEADER_RE,
        }
    }
}

/// Byte range of a header match in the searched text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub kind: SectionKind,
    pub start: usize,
    pub end: usize,
}

/// Finds the first header of `kind` at or after byte offset `from`.
pub fn find_header(text: &str, kind: SectionKind, from: usize) -> Option<SectionHeader> {
    kind.header_pattern()
        .find_at(text, from)
        .map(|m| SectionHeader {
            kind,
            start: m.start(),
            end: m.end(),
        })
}

/// Offset of the earliest end marker at or after `from`, or the end of the text.
pub fn find_section_end(text: &str, from: usize) -> usize {
    END_MARKER_RE
        .find_at(text, from)
        .map(|m| m.start())
        .unwrap_or(text.len())
}

/// The sections found in one piece of recognized text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatedSections<'a> {
    pub active: Option<IngredientSection<'a>>,
    pub inactive: Option<IngredientSection<'a>>,
}

impl<'a> LocatedSections<'a> {
    pub fn is_empty(&self) -> bool {
        self.active.is_none() && self.inactive.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IngredientSection<'a>> {
        self.active.iter().chain(self.inactive.iter())
    }
}

/// Locates the active and inactive ingredient sections.
///
/// Only the first header of each kind counts. An inactive header closes the
/// active section only when it comes after the active header. A section not
/// closed by another header ends at the nearest end marker after it, or at
/// the end of the text. Sections that are blank after trimming are dropped.
pub fn locate_sections(text: &str) -> LocatedSections<'_> {
    let mut located = LocatedSections::default();

    if let Some(active) = find_header(text, SectionKind::Active, 0) {
        let active_start = active.end;
        match find_header(text, SectionKind::Inactive, active_start) {
            Some(inactive) => {
                located.active =
                    trimmed_section(text, SectionKind::Active, active_start, inactive.start);
                let end = find_section_end(text, inactive.end);
                located.inactive = trimmed_section(text, SectionKind::Inactive, inactive.end, end);
            }
            None => {
                let end = find_section_end(text, active_start);
                located.active = trimmed_section(text, SectionKind::Active, active_start, end);
            }
        }
    } else if let Some(inactive) = find_header(text, SectionKind::Inactive, 0) {
        let end = find_section_end(text, inactive.end);
        located.inactive = trimmed_section(text, SectionKind::Inactive, inactive.end, end);
    }

    located
}

fn trimmed_section(
    text: &str,
    kind: SectionKind,
    start: usize,
    end: usize,
) -> Option<IngredientSection<'_>> {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let start = start + (raw.len() - raw.trim_start().len());
    Some(IngredientSection {
        kind,
        start,
        end: start + trimmed.len(),
        text: trimmed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_patterns() {
        let text = "Drug Facts\nMAIN INGREDIENT: Menthol 5%";
        let header = find_header(text, SectionKind::Active, 0).unwrap();
        assert_eq!(&text[header.end..], "Menthol 5%");

        assert!(find_header("Excipient ingredients; lactose", SectionKind::Inactive, 0).is_some());
        assert!(find_header("Other Ingredient. talc", SectionKind::Inactive, 0).is_some());
        assert!(find_header("activeingredients", SectionKind::Active, 0).is_none());
    }

    #[test]
    fn test_inactive_header_is_not_an_active_header() {
        assert!(find_header("Inactive Ingredients: Starch", SectionKind::Active, 0).is_none());
    }

    #[test]
    fn test_earliest_end_marker_wins() {
        let text = "Zinc Oxide 20% Warnings: external use only. Directions: apply";
        assert_eq!(find_section_end(text, 0), text.find("Warnings").unwrap());
    }

    #[test]
    fn test_end_markers_are_whole_words() {
        let text = "Purposeful blend, Causes no harm";
        assert_eq!(find_section_end(text, 0), text.len());

        let text = "Avobenzone 3% Keep Out Of Reach of children";
        assert_eq!(find_section_end(text, 0), text.find("Keep").unwrap());
    }

    #[test]
    fn test_both_headers() {
        let text = "Active Ingredients: Aspirin, Caffeine.\nInactive Ingredients: Starch | Talc\nDirections: take one tablet";
        let located = locate_sections(text);

        let active = located.active.unwrap();
        assert_eq!(active.text, "Aspirin, Caffeine.");
        assert_eq!(&text[active.start..active.end], active.text);

        // The trailing Directions block closes the inactive list
        let inactive = located.inactive.unwrap();
        assert_eq!(inactive.text, "Starch | Talc");
        assert_eq!(&text[inactive.start..inactive.end], inactive.text);
    }

    #[test]
    fn test_active_only_uses_end_marker() {
        let text = "Active ingredient (in each tablet): Loratadine 10 mg\nPurpose: Antihistamine";
        let located = locate_sections(text);
        assert!(located.inactive.is_none());
        assert_eq!(
            located.active.unwrap().text,
            "(in each tablet): Loratadine 10 mg"
        );
    }

    #[test]
    fn test_inactive_before_active_is_ignored() {
        let text = "Inactive ingredients: talc. Active ingredients: Benzocaine. Uses: pain";
        let located = locate_sections(text);
        assert_eq!(located.active.unwrap().text, "Benzocaine.");
        assert!(located.inactive.is_none());
    }

    #[test]
    fn test_inactive_only() {
        let text = "Other Ingredients: Water and Glycerin. Warnings: do not swallow";
        let located = locate_sections(text);
        assert!(located.active.is_none());
        assert_eq!(located.inactive.unwrap().text, "Water and Glycerin.");
    }

    #[test]
    fn test_blank_sections_are_dropped() {
        let located = locate_sections("Active Ingredients:   \nUses: none");
        assert!(located.is_empty());
    }

    #[test]
    fn test_end_marker_inside_active_does_not_close_inactive_early() {
        let text = "Active ingredient: Loratadine. Uses: allergy. Inactive ingredients: lactose, starch. Warnings: none";
        let located = locate_sections(text);
        assert_eq!(located.active.unwrap().text, "Loratadine. Uses: allergy.");
        assert_eq!(located.inactive.unwrap().text, "lactose, starch.");
    }

    #[test]
    fn test_headers_need_a_word_start() {
        assert!(find_header("Another ingredient: talc", SectionKind::Inactive, 0).is_none());
        assert!(find_header("Domain ingredients: salt", SectionKind::Active, 0).is_none());
        assert!(locate_sections("Another ingredient: talc").is_empty());
        assert!(find_header("(other ingredients) talc", SectionKind::Inactive, 0).is_some());
    }

    #[test]
    fn test_no_headers() {
        assert!(locate_sections("Net Wt 4 oz").is_empty());
    }
}
