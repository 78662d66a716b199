use serde::Serialize;

/// Aggregated vacancy figures for one search term on one job board.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LanguageSummary {
    pub found: u64,
    pub processed: u32,
    pub average_salary: i64,
}

/// Collapses a vacancy's salary range into a single ruble estimate.
///
/// Boards report ranges with either bound missing, and SuperJob sends 0
/// for an unset bound, so zero and negative values count as absent.
pub fn estimate_rub_salary(lower: Option<f64>, upper: Option<f64>) -> Option<f64> {
    let lower = lower.filter(|value| *value > 0.0);
    let upper = upper.filter(|value| *value > 0.0);

    match (lower, upper) {
        (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
        (Some(lower), None) => Some(lower * 1.2),
        (None, Some(upper)) => Some(upper * 0.8),
        (None, None) => None,
    }
}

/// Running salary average over the vacancies of one search term.
#[derive(Debug, Default)]
pub struct SalaryStats {
    total: f64,
    processed: u32,
}

impl SalaryStats {
    pub fn add(&mut self, salary: f64) {
        self.total += salary;
        self.processed += 1;
    }

    pub fn processed(&self) -> u32 {
        self.processed
    }

    /// Average salary truncated to whole rubles, 0 when nothing was usable.
    pub fn average(&self) -> i64 {
        if self.processed == 0 {
            return 0;
        }
        (self.total / f64::from(self.processed)) as i64
    }
}
