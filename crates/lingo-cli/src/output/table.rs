//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Language tag (e.g., "de", "fr-CA").
    pub language: String,
    /// Number of source keys translated.
    pub translated: usize,
    /// Source keys without a translation.
    pub missing: Vec<String>,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(source_count: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Percent", "Missing"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, source_count),
            percent(lang.translated, source_count),
            lang.missing.len().to_string(),
        ]);
    }

    table
}

fn percent(translated: usize, total: usize) -> String {
    if total == 0 {
        return "100%".to_string();
    }
    format!("{:.0}%", translated as f64 * 100.0 / total as f64)
}
