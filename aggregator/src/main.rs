//! Developer Salary Survey
//!
//! Queries HeadHunter and SuperJob for vacancies per programming language
//! and prints one average-salary table per board.

use aggregator::clients::headhunter::Area;
use aggregator::clients::superjob::{Catalogue, Town};
use aggregator::{aggregate, logger, report, Config, HeadHunterClient, SuperJobClient};
use log::info;

const LANGUAGES: [&str; 11] = [
    "Python",
    "Java",
    "JavaScript",
    "C#",
    "PHP",
    "C++",
    "Swift",
    "TypeScript",
    "Kotlin",
    "Go",
    "Ruby",
];

const SEARCH_PERIOD_DAYS: u32 = 30;

fn main() -> aggregator::Result<()> {
    logger::init();
    let config = Config::from_env()?;

    println!(
        "📊 Surveying developer salaries for {} languages...\n",
        LANGUAGES.len()
    );

    info!("Surveying HeadHunter...");
    let headhunter = HeadHunterClient::new(Area::Moscow, SEARCH_PERIOD_DAYS)?;
    let summaries = aggregate::survey_languages(&headhunter, &LANGUAGES)?;
    println!("{}", report::summary_table("HeadHunter Moscow", &summaries));

    info!("Surveying SuperJob...");
    let superjob = SuperJobClient::new(config.superjob_api_key, Catalogue::Programming, Town::Moscow)?;
    let summaries = aggregate::survey_languages(&superjob, &LANGUAGES)?;
    println!("{}", report::summary_table("SuperJob Moscow", &summaries));

    Ok(())
}
