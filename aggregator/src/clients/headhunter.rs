//! HeadHunter (api.hh.ru) search client.

use serde::Deserialize;

use super::{Pagination, VacancyClient, VacancyPage, PAGE_SIZE};

const SEARCH_URL: &str = "https://api.hh.ru/vacancies";
const RUB_CODE: &str = "RUR";
const USER_AGENT: &str = "salary-aggregator/0.1";

/// Search region in HeadHunter's area dictionary.
#[derive(Debug, Clone, Copy)]
pub enum Area {
    Moscow,
}

impl Area {
    pub fn to_id(&self) -> u32 {
        match self {
            Self::Moscow => 1,
        }
    }
}

pub struct HeadHunterClient {
    client: reqwest::blocking::Client,
    area: Area,
    period_days: u32,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Vacancy>,
    found: u64,
    pages: u32,
}

#[derive(Debug, Deserialize)]
pub struct Vacancy {
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

impl HeadHunterClient {
    pub fn new(area: Area, period_days: u32) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            area,
            period_days,
        })
    }
}

impl VacancyClient for HeadHunterClient {
    type Vacancy = Vacancy;

    fn board_name(&self) -> &str {
        "HeadHunter"
    }

    fn fetch_page(&self, query: &str, page: u32) -> crate::Result<VacancyPage<Vacancy>> {
        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[("text", query)])
            .query(&[
                ("page", page),
                ("per_page", PAGE_SIZE),
                ("area", self.area.to_id()),
                ("period", self.period_days),
            ])
            .query(&[("only_with_salary", true)])
            .send()?
            .error_for_status()?;

        let payload: SearchResponse = response.json()?;
        Ok(VacancyPage {
            items: payload.items,
            found: payload.found,
            next: Pagination::TotalPages(payload.pages),
        })
    }

    /// Only ruble-denominated salaries are usable; anything else is skipped
    /// even when the range itself is complete.
    fn rub_salary(&self, vacancy: &Vacancy) -> Option<f64> {
        let salary = vacancy.salary.as_ref()?;
        if salary.currency.as_deref() != Some(RUB_CODE) {
            return None;
        }
        common::estimate_rub_salary(salary.from, salary.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HeadHunterClient {
        HeadHunterClient::new(Area::Moscow, 30).expect("client should build")
    }

    fn vacancy(json: &str) -> Vacancy {
        serde_json::from_str(json).expect("vacancy should decode")
    }

    #[test]
    fn test_decodes_search_response() {
        let payload = r#"{
            "items": [
                { "salary": { "from": 100000, "to": 150000, "currency": "RUR" } },
                { "salary": null }
            ],
            "found": 230,
            "pages": 3
        }"#;

        let decoded: SearchResponse = serde_json::from_str(payload).expect("payload should decode");
        assert_eq!(decoded.items.len(), 2);
        assert_eq!(decoded.found, 230);
        assert_eq!(decoded.pages, 3);
    }

    #[test]
    fn test_rub_salary_averages_full_range() {
        let vacancy = vacancy(r#"{ "salary": { "from": 100, "to": 200, "currency": "RUR" } }"#);
        assert_eq!(client().rub_salary(&vacancy), Some(150.0));
    }

    #[test]
    fn test_rub_salary_rejects_foreign_currency() {
        let vacancy = vacancy(r#"{ "salary": { "from": 100, "to": 200, "currency": "USD" } }"#);
        assert_eq!(client().rub_salary(&vacancy), None);
    }

    #[test]
    fn test_rub_salary_rejects_missing_currency() {
        let vacancy = vacancy(r#"{ "salary": { "from": 100, "to": 200, "currency": null } }"#);
        assert_eq!(client().rub_salary(&vacancy), None);
    }

    #[test]
    fn test_rub_salary_without_salary_block() {
        let vacancy = vacancy(r#"{ "salary": null }"#);
        assert_eq!(client().rub_salary(&vacancy), None);
    }

    #[test]
    fn test_rub_salary_with_open_upper_bound() {
        let vacancy = vacancy(r#"{ "salary": { "from": 100, "to": null, "currency": "RUR" } }"#);
        assert_eq!(client().rub_salary(&vacancy), Some(120.0));
    }
}
