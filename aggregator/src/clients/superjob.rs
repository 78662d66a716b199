//! SuperJob (api.superjob.ru) search client.

use serde::Deserialize;

use super::{Pagination, VacancyClient, VacancyPage, PAGE_SIZE};

const SEARCH_URL: &str = "https://api.superjob.ru/2.0/vacancies";
const USER_AGENT: &str = "salary-aggregator/0.1";

/// Search town in SuperJob's town dictionary.
#[derive(Debug, Clone, Copy)]
pub enum Town {
    Moscow,
}

impl Town {
    pub fn to_id(&self) -> u32 {
        match self {
            Self::Moscow => 4,
        }
    }
}

/// Vacancy catalogue (job family) in SuperJob's catalogue dictionary.
#[derive(Debug, Clone, Copy)]
pub enum Catalogue {
    Programming,
}

impl Catalogue {
    pub fn to_id(&self) -> u32 {
        match self {
            Self::Programming => 33,
        }
    }
}

pub struct SuperJobClient {
    client: reqwest::blocking::Client,
    api_key: String,
    catalogue: Catalogue,
    town: Town,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    objects: Vec<Vacancy>,
    total: u64,
    more: bool,
}

/// SuperJob reports unset bounds as 0, which the salary heuristic treats
/// as absent. There is no currency field; every usable range counts.
#[derive(Debug, Deserialize)]
pub struct Vacancy {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
}

impl SuperJobClient {
    pub fn new(api_key: String, catalogue: Catalogue, town: Town) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            api_key,
            catalogue,
            town,
        })
    }
}

impl VacancyClient for SuperJobClient {
    type Vacancy = Vacancy;

    fn board_name(&self) -> &str {
        "SuperJob"
    }

    fn fetch_page(&self, query: &str, page: u32) -> crate::Result<VacancyPage<Vacancy>> {
        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[("app_key", self.api_key.as_str()), ("keyword", query)])
            .query(&[
                ("catalogues", self.catalogue.to_id()),
                ("town", self.town.to_id()),
                ("page", page),
                ("count", PAGE_SIZE),
            ])
            .send()?
            .error_for_status()?;

        let payload: SearchResponse = response.json()?;
        Ok(VacancyPage {
            items: payload.objects,
            found: payload.total,
            next: Pagination::HasMore(payload.more),
        })
    }

    fn rub_salary(&self, vacancy: &Vacancy) -> Option<f64> {
        common::estimate_rub_salary(vacancy.payment_from, vacancy.payment_to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SuperJobClient {
        SuperJobClient::new("key".to_string(), Catalogue::Programming, Town::Moscow)
            .expect("client should build")
    }

    fn vacancy(json: &str) -> Vacancy {
        serde_json::from_str(json).expect("vacancy should decode")
    }

    #[test]
    fn test_decodes_search_response() {
        let payload = r#"{
            "objects": [
                { "payment_from": 90000, "payment_to": 0 },
                { "payment_from": 0, "payment_to": 0 }
            ],
            "total": 120,
            "more": true
        }"#;

        let decoded: SearchResponse = serde_json::from_str(payload).expect("payload should decode");
        assert_eq!(decoded.objects.len(), 2);
        assert_eq!(decoded.total, 120);
        assert!(decoded.more);
    }

    #[test]
    fn test_rub_salary_averages_full_range() {
        let vacancy = vacancy(r#"{ "payment_from": 100, "payment_to": 200 }"#);
        assert_eq!(client().rub_salary(&vacancy), Some(150.0));
    }

    #[test]
    fn test_rub_salary_with_open_lower_bound() {
        let vacancy = vacancy(r#"{ "payment_from": 0, "payment_to": 200 }"#);
        assert_eq!(client().rub_salary(&vacancy), Some(160.0));
    }

    #[test]
    fn test_rub_salary_with_both_bounds_unset() {
        let vacancy = vacancy(r#"{ "payment_from": 0, "payment_to": 0 }"#);
        assert_eq!(client().rub_salary(&vacancy), None);
    }

    #[test]
    fn test_rub_salary_with_missing_fields() {
        let vacancy = vacancy(r#"{}"#);
        assert_eq!(client().rub_salary(&vacancy), None);
    }
}
