use std::env;

/// Secrets loaded once at startup and handed to the clients that need
/// them, instead of letting clients read the environment themselves.
#[derive(Debug, Clone)]
pub struct Config {
    pub superjob_api_key: String,
}

impl Config {
    /// Reads a local `.env` file when present, then the process
    /// environment.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        let superjob_api_key =
            env::var("SUPER_JOB_API_KEY").map_err(|_| "SUPER_JOB_API_KEY is not set")?;
        Ok(Self { superjob_api_key })
    }
}
