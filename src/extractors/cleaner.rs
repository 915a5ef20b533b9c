use crate::model::Ingredient;
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;.]+|\s+and\s+|\s{2,}").unwrap());

static NUMERIC_NOISE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\s.%]+$").unwrap());

static TRAILING_PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\s+\d+\.?\d*\s*%").unwrap());

/// Header words that show up when a neighbouring section leaks into a slice
const STRAY_HEADER_WORDS: [&str; 4] = ["purpose", "uses", "directions", "warnings"];

/// Splits a section into cleaned ingredient names, keeping their order.
pub fn clean_tokens(section: &str) -> Vec<Ingredient> {
    // OCR tends to read column rules as pipes
    let normalized = section.replace('|', ",").replace('\n', " ");

    TOKEN_SEPARATOR_RE
        .split(&normalized)
        .filter_map(clean_token)
        .collect()
}

/// Cleans a single raw token, returning `None` when it is not an ingredient.
pub fn clean_token(raw: &str) -> Option<Ingredient> {
    let token = raw.trim();
    if token.chars().count() <= 1 || NUMERIC_NOISE_RE.is_match(token) {
        return None;
    }

    let lowered = token.to_lowercase();
    if STRAY_HEADER_WORDS.iter().any(|word| lowered.contains(word)) {
        return None;
    }

    let name = match TRAILING_PERCENT_RE.captures(token) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()).trim(),
        None => token,
    };

    if name.chars().any(|c| c.is_ascii_alphabetic()) {
        Some(Ingredient::new(name))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_punctuation_and_conjunction() {
        let names = clean_tokens("Aspirin, Caffeine and Salicylamide; Talc. Starch");
        assert_eq!(names, vec!["Aspirin", "Caffeine", "Salicylamide", "Talc", "Starch"]);
    }

    #[test]
    fn test_wide_gaps_split_tokens() {
        let names = clean_tokens("Titanium Dioxide    Mica");
        assert_eq!(names, vec!["Titanium Dioxide", "Mica"]);
    }

    #[test]
    fn test_pipes_and_newlines() {
        let names = clean_tokens("Starch | Talc\nSilica");
        assert_eq!(names, vec!["Starch", "Talc Silica"]);
    }

    #[test]
    fn test_numeric_noise_is_dropped() {
        assert_eq!(clean_tokens("Water, 2.5%, Glycerin"), vec!["Water", "Glycerin"]);
        assert!(clean_token("12 %").is_none());
        assert!(clean_token("x").is_none());
    }

    #[test]
    fn test_trailing_percentage_is_stripped() {
        assert_eq!(clean_token("Niacinamide 10%").unwrap(), "Niacinamide");
        assert_eq!(clean_token("Zinc Oxide 7.5 %").unwrap(), "Zinc Oxide");
    }

    #[test]
    fn test_asterisks_survive() {
        assert_eq!(
            clean_tokens("Octinoxate*, Aloe Barbadensis Leaf Juice**"),
            vec!["Octinoxate*", "Aloe Barbadensis Leaf Juice**"]
        );
    }

    #[test]
    fn test_stray_headers_are_dropped() {
        assert_eq!(
            clean_tokens("Menthol, Directions: apply to skin"),
            vec!["Menthol"]
        );
    }

    #[test]
    fn test_tokens_without_letters_are_dropped() {
        assert!(clean_token("(**)").is_none());
        assert!(clean_token("-- 4").is_none());
    }

    #[test]
    fn test_conjunction_is_case_sensitive() {
        assert_eq!(clean_tokens("Sand AND Clay"), vec!["Sand AND Clay"]);
    }
}
