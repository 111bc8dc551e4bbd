//! DB factories for integration tests: direct ActiveModel inserts,
//! bypassing the HTTP surface under test.

use backend::entities::{consoles, games};
use backend_test_support::unique_helpers::{unique_str, unique_title};
use sea_orm::{ActiveModelTrait, ConnectionTrait, NotSet, Set};
use time::OffsetDateTime;

/// Seed a console row. Generates a unique name unless one is given.
pub async fn create_console(
    conn: &(impl ConnectionTrait + Send),
    name: Option<&str>,
) -> Result<consoles::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();

    let console = consoles::ActiveModel {
        id: NotSet, // Let database auto-generate
        name: Set(name
            .map(str::to_string)
            .unwrap_or_else(|| unique_str("console"))),
        created_at: Set(now),
        updated_at: Set(now),
    };

    console.insert(conn).await
}

/// Seed a game row belonging to the given console. Generates a unique
/// title unless one is given.
pub async fn create_game(
    conn: &(impl ConnectionTrait + Send),
    console_id: i64,
    title: Option<&str>,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();

    let game = games::ActiveModel {
        id: NotSet,
        title: Set(title
            .map(str::to_string)
            .unwrap_or_else(|| unique_title("Game"))),
        console_id: Set(console_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game.insert(conn).await
}
