use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "wholesale")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub company_id: Uuid,
    pub title: String,
    pub status: Status,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

/// Lifecycle status of a wholesale deal. Transitions are validated by
/// `api::deal_status::can_transition`; `Stopped` and `Dropped` are terminal.
#[derive(Copy, Clone, Debug, EnumIter, DeriveActiveEnum, Eq, PartialEq)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "deal_status")]
pub enum Status {
    #[sea_orm(string_value = "pre_contact")]
    PreContact,
    #[sea_orm(string_value = "contacting")]
    Contacting,
    #[sea_orm(string_value = "negotiating")]
    Negotiating,
    #[sea_orm(string_value = "agreed")]
    Agreed,
    #[sea_orm(string_value = "preparing_publish")]
    PreparingPublish,
    #[sea_orm(string_value = "publishing")]
    Publishing,
    #[sea_orm(string_value = "stopped")]
    Stopped,
    #[sea_orm(string_value = "dropped")]
    Dropped,
}

impl ActiveModelBehavior for ActiveModel {}
