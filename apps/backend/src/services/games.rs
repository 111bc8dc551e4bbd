//! Game service: validation, referential and uniqueness checks ahead of
//! writes.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::info;

use crate::adapters::games_sea::GameCreate;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::consoles;
use crate::repos::games::{self, Game, GameWithConsole};

pub async fn list_games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<GameWithConsole>, DomainError> {
    games::find_all_with_console(conn).await
}

pub async fn get_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Game, DomainError> {
    games::find_by_id(conn, id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("game {id} not found")))
}

/// Create a game with a unique, non-empty title belonging to an existing
/// console.
///
/// A `console_id` that matches no console row is a conflict, not a
/// validation failure: the body is well-formed, it just names a row that
/// isn't there.
pub async fn create_game(
    txn: &DatabaseTransaction,
    title: &str,
    console_id: i64,
) -> Result<Game, DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("game title must not be empty"));
    }

    if consoles::find_by_id(txn, console_id).await?.is_none() {
        return Err(DomainError::conflict(
            ConflictKind::MissingConsole,
            format!("console {console_id} does not exist"),
        ));
    }

    if games::find_by_title(txn, title).await?.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::UniqueTitle,
            format!("a game titled '{title}' already exists"),
        ));
    }

    let game = games::create_game(txn, GameCreate::new(title, console_id)).await?;
    info!(game_id = game.id, console_id = console_id, "game created");
    Ok(game)
}
