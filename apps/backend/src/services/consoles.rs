//! Console service: validation and uniqueness checks ahead of writes.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::info;

use crate::adapters::consoles_sea::ConsoleCreate;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::consoles::{self, Console};

pub async fn list_consoles<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Console>, DomainError> {
    consoles::find_all(conn).await
}

pub async fn get_console<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Console, DomainError> {
    consoles::find_by_id(conn, id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Console, format!("console {id} not found"))
    })
}

/// Create a console with a unique, non-empty name.
///
/// The uniqueness check runs in the caller's transaction before the
/// insert; the schema's unique constraint is the backstop.
pub async fn create_console(
    txn: &DatabaseTransaction,
    name: &str,
) -> Result<Console, DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("console name must not be empty"));
    }

    if consoles::find_by_name(txn, name).await?.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::UniqueName,
            format!("a console named '{name}' already exists"),
        ));
    }

    let console = consoles::create_console(txn, ConsoleCreate::new(name)).await?;
    info!(console_id = console.id, "console created");
    Ok(console)
}
