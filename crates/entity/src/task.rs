use sea_orm::entity::prelude::*;

/// A follow-up task pointing at an arbitrary record through the
/// `target_type`/`target_id` pair (e.g. `("company", <uuid>)`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub title: String,
    pub status: Status,
    pub due_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(indexed)]
    pub target_type: String,
    #[sea_orm(indexed)]
    pub target_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

pub const TARGET_COMPANY: &str = "company";

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[derive(Copy, Clone, Debug, EnumIter, DeriveActiveEnum, Eq, PartialEq)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
pub enum Status {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "done")]
    Done,
}

impl ActiveModelBehavior for ActiveModel {}
