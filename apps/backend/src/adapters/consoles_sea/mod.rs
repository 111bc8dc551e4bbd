//! SeaORM adapter for the console repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::consoles;

pub mod dto;

pub use dto::ConsoleCreate;

// Adapter functions return DbErr; the repos layer maps to DomainError via From<DbErr>.

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<consoles::Model>, sea_orm::DbErr> {
    consoles::Entity::find()
        .order_by_asc(consoles::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<consoles::Model>, sea_orm::DbErr> {
    consoles::Entity::find_by_id(id).one(conn).await
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<consoles::Model>, sea_orm::DbErr> {
    consoles::Entity::find()
        .filter(consoles::Column::Name.eq(name))
        .one(conn)
        .await
}

pub async fn create_console(
    txn: &DatabaseTransaction,
    dto: ConsoleCreate,
) -> Result<consoles::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let console_active = consoles::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        created_at: Set(now),
        updated_at: Set(now),
    };

    console_active.insert(txn).await
}
