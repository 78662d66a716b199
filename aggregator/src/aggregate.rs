//! Walks a board's paginated search results and averages salaries.

use common::{LanguageSummary, SalaryStats};
use log::{debug, info};

use crate::clients::VacancyClient;

/// Collects every result page for one query term and folds the usable
/// salaries into a summary. The board's pagination value decides when the
/// walk ends, so both counting styles go through the same loop.
pub fn language_summary<C: VacancyClient>(client: &C, query: &str) -> crate::Result<LanguageSummary> {
    let mut stats = SalaryStats::default();
    let mut found = 0;
    let mut page = 0;

    loop {
        let batch = client.fetch_page(query, page)?;
        debug!(
            "{}: page {} returned {} vacancies for {}",
            client.board_name(),
            page,
            batch.items.len(),
            query
        );

        found = batch.found;
        for vacancy in &batch.items {
            if let Some(salary) = client.rub_salary(vacancy) {
                stats.add(salary);
            }
        }

        match batch.next.next_page(page) {
            Some(next) => page = next,
            None => break,
        }
    }

    Ok(LanguageSummary {
        found,
        processed: stats.processed(),
        average_salary: stats.average(),
    })
}

/// Surveys each language in order, keeping the query order in the output.
pub fn survey_languages<C: VacancyClient>(
    client: &C,
    languages: &[&str],
) -> crate::Result<Vec<(String, LanguageSummary)>> {
    let mut summaries = Vec::with_capacity(languages.len());
    for language in languages {
        let summary = language_summary(client, language)?;
        info!(
            "{}: {} — {} found, {} processed",
            client.board_name(),
            language,
            summary.found,
            summary.processed
        );
        summaries.push((language.to_string(), summary));
    }
    Ok(summaries)
}
