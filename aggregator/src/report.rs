//! Console table rendering for per-language survey results.

use comfy_table::presets::ASCII_FULL;
use comfy_table::{CellAlignment, Table};
use common::LanguageSummary;

const HEADER: [&str; 4] = [
    "Programming language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Renders one bordered table, titled with the board name and region,
/// one row per language in query order.
pub fn summary_table(title: &str, summaries: &[(String, LanguageSummary)]) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(HEADER.to_vec());

    for (language, summary) in summaries {
        table.add_row(vec![
            language.clone(),
            summary.found.to_string(),
            summary.processed.to_string(),
            summary.average_salary.to_string(),
        ]);
    }

    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    format!("{title}\n{table}")
}
