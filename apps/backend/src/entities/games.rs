use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_name = "console_id")]
    pub console_id: i64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::consoles::Entity",
        from = "Column::ConsoleId",
        to = "super::consoles::Column::Id"
    )]
    Console,
}

impl Related<super::consoles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Console.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
