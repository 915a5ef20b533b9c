use crate::model::SectionKind;
use once_cell::sync::Lazy;
use regex::Regex;

static LIST_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w\s*().,-]+(?:,|\.|\band\b)[\w\s*().,-]+").unwrap()
});

static ACTIVE_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)active").unwrap());

/// Best-effort recovery for text with no usable header.
///
/// Joins every list-like run of the text with single spaces. The result is
/// treated as the active list when "active" appears anywhere in the text and
/// as the inactive list otherwise.
pub fn extract_loose(text: &str) -> Option<(SectionKind, String)> {
    let runs: Vec<&str> = LIST_RUN_RE.find_iter(text).map(|m| m.as_str()).collect();
    if runs.is_empty() {
        return None;
    }

    let kind = if ACTIVE_WORD_RE.is_match(text) {
        SectionKind::Active
    } else {
        SectionKind::Inactive
    };

    Some((kind, runs.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_has_no_runs() {
        assert_eq!(extract_loose("Net Wt 4 oz"), None);
        assert_eq!(extract_loose(""), None);
    }

    #[test]
    fn test_list_without_header_is_inactive() {
        let (kind, text) = extract_loose("Water, Glycerin, Cetyl Alcohol").unwrap();
        assert_eq!(kind, SectionKind::Inactive);
        assert_eq!(text, "Water, Glycerin, Cetyl Alcohol");
    }

    #[test]
    fn test_active_anywhere_selects_active() {
        let (kind, _) = extract_loose("Actives: Octisalate, Homosalate").unwrap();
        assert_eq!(kind, SectionKind::Active);
    }

    #[test]
    fn test_runs_are_joined_with_spaces() {
        let (_, text) = extract_loose("Salt, Sugar:Flour, Yeast").unwrap();
        assert_eq!(text, "Salt, Sugar Flour, Yeast");
    }
}
