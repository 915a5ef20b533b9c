use crate::model::{Ingredient, IngredientReport, SectionKind, NOTHING_DETECTED};

/// Renders the report as one labelled line per non-empty list.
pub fn format_report(report: &IngredientReport) -> String {
    let lines: Vec<String> = [SectionKind::Active, SectionKind::Inactive]
        .into_iter()
        .filter(|kind| !report.list(*kind).is_empty())
        .map(|kind| format_line(kind, report.list(kind)))
        .collect();

    if lines.is_empty() {
        NOTHING_DETECTED.to_string()
    } else {
        lines.join("\n")
    }
}

fn format_line(kind: SectionKind, names: &[Ingredient]) -> String {
    let names: Vec<&str> = names.iter().map(Ingredient::as_str).collect();
    format!("{}: {}.", kind.label(), names.join(", "))
}
