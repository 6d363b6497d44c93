use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    /// Case/whitespace-folded form of `name`, maintained by the API layer.
    #[sea_orm(indexed)]
    pub normalized_name: String,
    pub status: String,
    pub tags: StringList,
    pub owner_ids: StringList,
    pub category: Option<String>,
    pub profile: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

/// JSON-backed string array column with set semantics (stable first-seen order).
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult,
)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }
}

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Contact,
    Project,
    Wholesale,
    Message,
    Summary,
    RoomLink,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Contact => Entity::has_many(super::contact::Entity).into(),
            Self::Project => Entity::has_many(super::project::Entity).into(),
            Self::Wholesale => Entity::has_many(super::wholesale::Entity).into(),
            Self::Message => Entity::has_many(super::message::Entity).into(),
            Self::Summary => Entity::has_many(super::summary::Entity).into(),
            Self::RoomLink => Entity::has_many(super::company_room_link::Entity).into(),
        }
    }
}

impl Related<super::contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contact.def()
    }
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::wholesale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wholesale.def()
    }
}

impl Related<super::message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Message.def()
    }
}

impl Related<super::summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Summary.def()
    }
}

impl Related<super::company_room_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomLink.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
