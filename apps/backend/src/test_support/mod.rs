//! Helpers shared by integration tests. Not part of the service surface.

pub mod app_builder;

pub use app_builder::create_test_app_builder;

use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::state::build_state;
use crate::state::app_state::AppState;

/// Build an AppState against the Test DB profile (fresh in-memory SQLite
/// by default, migrations applied).
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state().with_db(DbProfile::Test).build().await
}
