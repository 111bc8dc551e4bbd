//! SeaORM adapter for the game repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::{consoles, games};

pub mod dto;

pub use dto::GameCreate;

// Adapter functions return DbErr; the repos layer maps to DomainError via From<DbErr>.

/// All games joined with their console, ordered by game id.
///
/// The console side is `Option` at this layer; a `None` can only happen if
/// referential integrity was violated out-of-band and is surfaced by the
/// repos layer as data corruption.
pub async fn find_all_with_console<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(games::Model, Option<consoles::Model>)>, sea_orm::DbErr> {
    games::Entity::find()
        .find_also_related(consoles::Entity)
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(id).one(conn).await
}

pub async fn find_by_title<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Title.eq(title))
        .one(conn)
        .await
}

pub async fn create_game(
    txn: &DatabaseTransaction,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        console_id: Set(dto.console_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(txn).await
}
