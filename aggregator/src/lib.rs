pub mod aggregate;
pub mod clients;
pub mod config;
pub mod logger;
pub mod report;

pub use clients::{HeadHunterClient, SuperJobClient, VacancyClient};
pub use config::Config;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
