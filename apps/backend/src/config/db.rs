use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Builds a database URL from environment variables based on profile.
///
/// - `Prod`: `DATABASE_URL` is required.
/// - `Test`: `TEST_DATABASE_URL` when set, otherwise an in-memory SQLite
///   database. A Postgres test URL must name a database ending in `_test`
///   so a misconfigured environment can never point tests at prod data.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("DATABASE_URL"),
        DbProfile::Test => {
            let url = env::var("TEST_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite::memory:".to_string());
            if url.starts_with("postgres") {
                let db_name = url.rsplit('/').next().unwrap_or("");
                let db_name = db_name.split('?').next().unwrap_or("");
                if !db_name.ends_with("_test") {
                    return Err(AppError::config(format!(
                        "Test profile requires database name to end with '_test', but got: '{db_name}'"
                    )));
                }
            }
            Ok(url)
        }
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
