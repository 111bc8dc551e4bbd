//! Game repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::games_sea as games_adapter;
use crate::adapters::games_sea::GameCreate;
use crate::entities::games;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::consoles::Console;

/// Game domain model, converted from the database model when loaded
/// through repos functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub console_id: i64,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

/// A game together with the console it belongs to, as returned by listing.
#[derive(Debug, Clone, PartialEq)]
pub struct GameWithConsole {
    pub game: Game,
    pub console: Console,
}

impl From<games::Model> for Game {
    fn from(m: games::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            console_id: m.console_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// All games with their console inlined.
///
/// Every game must have a console; a dangling `console_id` means the FK
/// was bypassed and is reported as data corruption rather than silently
/// dropped from the listing.
pub async fn find_all_with_console<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<GameWithConsole>, DomainError> {
    let rows = games_adapter::find_all_with_console(conn).await?;

    rows.into_iter()
        .map(|(game, console)| {
            let console = console.ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("game {} references a missing console", game.id),
                )
            })?;
            Ok(GameWithConsole {
                game: Game::from(game),
                console: Console::from(console),
            })
        })
        .collect()
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, id).await?;
    Ok(game.map(Game::from))
}

pub async fn find_by_title<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_title(conn, title).await?;
    Ok(game.map(Game::from))
}

pub async fn create_game(txn: &DatabaseTransaction, dto: GameCreate) -> Result<Game, DomainError> {
    let game = games_adapter::create_game(txn, dto).await?;
    Ok(Game::from(game))
}
