//! Console repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::consoles_sea as consoles_adapter;
use crate::adapters::consoles_sea::ConsoleCreate;
use crate::entities::consoles;
use crate::errors::domain::DomainError;

/// Console domain model, converted from the database model when loaded
/// through repos functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Console {
    pub id: i64,
    pub name: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<consoles::Model> for Console {
    fn from(m: consoles::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Console>, DomainError> {
    let consoles = consoles_adapter::find_all(conn).await?;
    Ok(consoles.into_iter().map(Console::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Console>, DomainError> {
    let console = consoles_adapter::find_by_id(conn, id).await?;
    Ok(console.map(Console::from))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<Console>, DomainError> {
    let console = consoles_adapter::find_by_name(conn, name).await?;
    Ok(console.map(Console::from))
}

pub async fn create_console(
    txn: &DatabaseTransaction,
    dto: ConsoleCreate,
) -> Result<Console, DomainError> {
    let console = consoles_adapter::create_console(txn, dto).await?;
    Ok(Console::from(console))
}
