use serde::Serialize;
use std::fmt;

/// Message returned when neither list yields a single ingredient
pub const NOTHING_DETECTED: &str =
    "No ingredients were detected in the image. Try adjusting the image quality or clarity.";

/// Which ingredient list a section of label text belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Active,
    Inactive,
}

impl SectionKind {
    /// Label used when rendering the report line for this kind
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Active => "Active Ingredients",
            SectionKind::Inactive => "Inactive Ingredients",
        }
    }
}

/// A slice of the recognized text holding one ingredient list.
///
/// `start..end` is a byte range into the original text, already trimmed of
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientSection<'a> {
    pub kind: SectionKind,
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

/// A cleaned ingredient name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ingredient(String);

impl Ingredient {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Ingredient(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Ingredient {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Both ingredient lists, in the order the names appeared on the label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientReport {
    pub active: Vec<Ingredient>,
    pub inactive: Vec<Ingredient>,
}

impl IngredientReport {
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.inactive.is_empty()
    }

    pub fn list(&self, kind: SectionKind) -> &[Ingredient] {
        match kind {
            SectionKind::Active => &self.active,
            SectionKind::Inactive => &self.inactive,
        }
    }
}

/// Result of running the whole pipeline on one input.
///
/// Keeps "nothing found" apart from "processing failed" so callers don't
/// have to inspect the rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    Ingredients(IngredientReport),
    NothingDetected,
    Failed { details: String },
}

impl ExtractionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ExtractionOutcome::Failed { .. })
    }

    pub fn report(&self) -> Option<&IngredientReport> {
        match self {
            ExtractionOutcome::Ingredients(report) => Some(report),
            _ => None,
        }
    }
}

impl From<IngredientReport> for ExtractionOutcome {
    fn from(report: IngredientReport) -> Self {
        if report.is_empty() {
            ExtractionOutcome::NothingDetected
        } else {
            ExtractionOutcome::Ingredients(report)
        }
    }
}

impl fmt::Display for ExtractionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionOutcome::Ingredients(report) => {
                f.write_str(&crate::extractors::report::format_report(report))
            }
            ExtractionOutcome::NothingDetected => f.write_str(NOTHING_DETECTED),
            ExtractionOutcome::Failed { details } => {
                write!(f, "Error processing image: {}", details)
            }
        }
    }
}
