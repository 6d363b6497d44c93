use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, Enum, Error, ErrorExtensions, InputObject, Json, Object, Schema,
    SimpleObject, ID,
};
use chrono::{DateTime, Utc};
use entity::{company, contact, task, wholesale};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use serde_json::json;
use tracing::info_span;
use uuid::Uuid;

use crate::deal_status::{can_transition, label, status_str, ALL_STATUSES};
use crate::merge::{merge_companies, MergeError};
use crate::normalize::{dedup_first_seen, normalized_name};
use crate::options_cache::{OptionsCache, COMPANY_OPTIONS_KEY};
use crate::sort_key::SortKeyGenerator;

pub struct AppSchema(pub Schema<QueryRoot, MutationRoot, EmptySubscription>);

pub fn build_schema(
    db: Arc<DatabaseConnection>,
    sort_keys: Arc<SortKeyGenerator>,
    cache: Arc<OptionsCache>,
) -> AppSchema {
    let schema = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .data(sort_keys)
        .data(cache)
        .finish();
    AppSchema(schema)
}

pub struct QueryRoot;
pub struct MutationRoot;

const MAX_COMPANIES_PAGE: i32 = 200;

#[Object]
impl QueryRoot {
    async fn company(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<CompanyNode>> {
        let db = database(ctx)?;
        let company_id = parse_uuid(&id)?;
        let record = company::Entity::find_by_id(company_id)
            .one(db.as_ref())
            .await
            .map_err(db_error)?;
        Ok(record.map(CompanyNode::from))
    }

    async fn companies(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        offset: Option<i32>,
        q: Option<String>,
    ) -> async_graphql::Result<Vec<CompanyNode>> {
        let db = database(ctx)?;
        let limit = first.unwrap_or(50).clamp(1, MAX_COMPANIES_PAGE) as u64;
        let skip = offset.unwrap_or(0).max(0) as u64;
        let mut query = company::Entity::find();
        if let Some(filter) = sanitize_optional_filter(q) {
            let pattern = format!("%{}%", normalized_name(&filter));
            query = query.filter(company::Column::NormalizedName.like(pattern));
        }
        let records = query
            .order_by_asc(company::Column::NormalizedName)
            .limit(limit)
            .offset(skip)
            .all(db.as_ref())
            .await
            .map_err(db_error)?;
        Ok(records.into_iter().map(CompanyNode::from).collect())
    }

    #[graphql(name = "duplicateCompanies")]
    async fn duplicate_companies(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Vec<DuplicateGroup>> {
        let db = database(ctx)?;
        let records = company::Entity::find()
            .order_by_asc(company::Column::NormalizedName)
            .order_by_asc(company::Column::Name)
            .all(db.as_ref())
            .await
            .map_err(db_error)?;
        let mut groups: Vec<DuplicateGroup> = Vec::new();
        for record in records {
            match groups.last_mut() {
                Some(group) if group.normalized_name == record.normalized_name => {
                    group.companies.push(CompanyNode::from(record));
                }
                _ => groups.push(DuplicateGroup {
                    normalized_name: record.normalized_name.clone(),
                    companies: vec![CompanyNode::from(record)],
                }),
            }
        }
        groups.retain(|group| group.companies.len() > 1);
        Ok(groups)
    }

    async fn contacts(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "companyId")] company_id: ID,
    ) -> async_graphql::Result<Vec<ContactNode>> {
        let db = database(ctx)?;
        let company_uuid = parse_uuid(&company_id)?;
        let records = contact::Entity::find()
            .filter(contact::Column::CompanyId.eq(company_uuid))
            .order_by_asc(contact::Column::SortKey)
            .all(db.as_ref())
            .await
            .map_err(db_error)?;
        Ok(records.into_iter().map(ContactNode::from).collect())
    }

    async fn wholesales(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "companyId")] company_id: Option<ID>,
    ) -> async_graphql::Result<Vec<WholesaleNode>> {
        let db = database(ctx)?;
        let mut query = wholesale::Entity::find();
        if let Some(id) = company_id {
            query = query.filter(wholesale::Column::CompanyId.eq(parse_uuid(&id)?));
        }
        let records = query
            .order_by_asc(wholesale::Column::CreatedAt)
            .all(db.as_ref())
            .await
            .map_err(db_error)?;
        Ok(records.into_iter().map(WholesaleNode::from).collect())
    }

    #[graphql(name = "dealStatuses")]
    async fn deal_statuses(&self) -> Vec<DealStatusInfo> {
        ALL_STATUSES
            .iter()
            .map(|status| DealStatusInfo {
                status: WholesaleStatus::from(*status),
                value: status_str(*status).to_string(),
                label: label(*status).to_string(),
            })
            .collect()
    }

    #[graphql(name = "companyOptions")]
    async fn company_options(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Json<serde_json::Value>> {
        let db = database(ctx)?;
        let cache = options_cache(ctx)?;
        if let Some(cached) = cache.get(COMPANY_OPTIONS_KEY) {
            return Ok(Json(cached));
        }
        let records = company::Entity::find()
            .order_by_asc(company::Column::NormalizedName)
            .all(db.as_ref())
            .await
            .map_err(db_error)?;
        let options: Vec<serde_json::Value> = records
            .into_iter()
            .map(|record| {
                json!({
                    "id": record.id.to_string(),
                    "name": record.name,
                    "tags": record.tags.0,
                })
            })
            .collect();
        let value = serde_json::Value::Array(options);
        cache.put(COMPANY_OPTIONS_KEY, value.clone());
        Ok(Json(value))
    }
}

#[Object]
impl MutationRoot {
    #[graphql(name = "createCompany")]
    async fn create_company(
        &self,
        ctx: &Context<'_>,
        input: NewCompanyInput,
    ) -> async_graphql::Result<CompanyNode> {
        let db = database(ctx)?;
        let cache = options_cache(ctx)?;
        let name = validate_company_name(&input.name)?;
        let now: DateTimeWithTimeZone = Utc::now().into();
        let record = company::ActiveModel {
            id: Set(Uuid::new_v4()),
            normalized_name: Set(normalized_name(&name)),
            name: Set(name),
            status: Set(input.status.unwrap_or_else(|| "active".into())),
            tags: Set(company::StringList(dedup_first_seen(&input.tags))),
            owner_ids: Set(company::StringList(dedup_first_seen(&input.owner_ids))),
            category: Set(input.category),
            profile: Set(input.profile),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db.as_ref())
        .await
        .map_err(db_error)?;
        cache.invalidate(COMPANY_OPTIONS_KEY);
        Ok(record.into())
    }

    #[graphql(name = "updateCompany")]
    async fn update_company(
        &self,
        ctx: &Context<'_>,
        input: UpdateCompanyInput,
    ) -> async_graphql::Result<CompanyNode> {
        let db = database(ctx)?;
        let cache = options_cache(ctx)?;
        let company_id = parse_uuid(&input.id)?;
        let existing = company::Entity::find_by_id(company_id)
            .one(db.as_ref())
            .await
            .map_err(db_error)?
            .ok_or_else(|| error_with_code("NOT_FOUND", "Company not found"))?;
        let mut active: company::ActiveModel = existing.into();
        if let Some(name) = input.name {
            let name = validate_company_name(&name)?;
            active.normalized_name = Set(normalized_name(&name));
            active.name = Set(name);
        }
        if let Some(status) = input.status {
            active.status = Set(status);
        }
        if let Some(tags) = input.tags {
            active.tags = Set(company::StringList(dedup_first_seen(&tags)));
        }
        if let Some(owner_ids) = input.owner_ids {
            active.owner_ids = Set(company::StringList(dedup_first_seen(&owner_ids)));
        }
        if let Some(category) = input.category {
            active.category = Set(Some(category));
        }
        if let Some(profile) = input.profile {
            active.profile = Set(Some(profile));
        }
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(db.as_ref()).await.map_err(db_error)?;
        cache.invalidate(COMPANY_OPTIONS_KEY);
        Ok(updated.into())
    }

    #[graphql(name = "mergeCompanies")]
    async fn merge_companies(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "targetId")] target_id: ID,
        #[graphql(name = "sourceId")] source_id: ID,
    ) -> async_graphql::Result<CompanyNode> {
        let db = database(ctx)?;
        let sort_keys = sort_key_generator(ctx)?;
        let cache = options_cache(ctx)?;
        let target = parse_uuid(&target_id)?;
        let source = parse_uuid(&source_id)?;
        let span = info_span!(
            "crm.mergeCompanies",
            target = %target,
            source = %source
        );
        let _guard = span.enter();
        let merged = merge_companies(db.as_ref(), target, source, sort_keys.as_ref(), cache.as_ref())
            .await
            .map_err(merge_error)?;
        Ok(merged.into())
    }

    #[graphql(name = "createContact")]
    async fn create_contact(
        &self,
        ctx: &Context<'_>,
        input: NewContactInput,
    ) -> async_graphql::Result<ContactNode> {
        let db = database(ctx)?;
        let sort_keys = sort_key_generator(ctx)?;
        let company_id = parse_uuid(&input.company_id)?;
        company::Entity::find_by_id(company_id)
            .one(db.as_ref())
            .await
            .map_err(db_error)?
            .ok_or_else(|| error_with_code("NOT_FOUND", "Company not found"))?;
        let trimmed = input.name.trim();
        if trimmed.is_empty() {
            return Err(validation_error("name must not be empty"));
        }
        let now: DateTimeWithTimeZone = Utc::now().into();
        let record = contact::ActiveModel {
            id: Set(Uuid::new_v4()),
            company_id: Set(company_id),
            name: Set(trimmed.to_string()),
            email: Set(input.email),
            phone: Set(input.phone),
            sort_key: Set(sort_keys.generate()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db.as_ref())
        .await
        .map_err(db_error)?;
        Ok(record.into())
    }

    #[graphql(name = "moveWholesaleStatus")]
    async fn move_wholesale_status(
        &self,
        ctx: &Context<'_>,
        id: ID,
        status: WholesaleStatus,
    ) -> async_graphql::Result<WholesaleNode> {
        let db = database(ctx)?;
        let wholesale_id = parse_uuid(&id)?;
        let target_status: wholesale::Status = status.into();
        let span = info_span!(
            "crm.moveWholesaleStatus",
            id = %wholesale_id,
            to = status_str(target_status)
        );
        let _guard = span.enter();
        let model = move_wholesale_status_internal(db.as_ref(), wholesale_id, target_status)
            .await
            .map_err(status_move_error)?;
        Ok(model.into())
    }
}

#[derive(Debug)]
pub enum StatusMoveError {
    NotFound,
    Invalid {
        from: wholesale::Status,
        to: wholesale::Status,
    },
    Db(DbErr),
}

impl From<DbErr> for StatusMoveError {
    fn from(value: DbErr) -> Self {
        StatusMoveError::Db(value)
    }
}

fn status_move_error(err: StatusMoveError) -> Error {
    match err {
        StatusMoveError::NotFound => error_with_code("NOT_FOUND", "Wholesale not found"),
        StatusMoveError::Invalid { from, to } => error_with_code(
            "VALIDATION",
            format!(
                "Illegal status change: {} -> {}",
                status_str(from),
                status_str(to)
            ),
        ),
        StatusMoveError::Db(e) => db_error(e),
    }
}

fn merge_error(err: MergeError) -> Error {
    match err {
        MergeError::NotFound => error_with_code("NOT_FOUND", "Company not found"),
        MergeError::SameCompany => {
            validation_error("targetId and sourceId must name different companies")
        }
        MergeError::Db(e) => db_error(e),
    }
}

/// Applies the transition table before any write. A same-status request is
/// accepted and only bumps `updated_at`; an illegal one writes nothing.
pub async fn move_wholesale_status_internal(
    db: &DatabaseConnection,
    wholesale_id: Uuid,
    status: wholesale::Status,
) -> Result<wholesale::Model, StatusMoveError> {
    let txn = db.begin().await?;
    let existing = wholesale::Entity::find_by_id(wholesale_id)
        .one(&txn)
        .await?
        .ok_or(StatusMoveError::NotFound)?;

    if !can_transition(existing.status, status) {
        return Err(StatusMoveError::Invalid {
            from: existing.status,
            to: status,
        });
    }

    let now: DateTimeWithTimeZone = Utc::now().into();
    let mut active: wholesale::ActiveModel = existing.into();
    active.status = Set(status);
    active.updated_at = Set(now);
    let updated = active.update(&txn).await?;
    txn.commit().await?;
    Ok(updated)
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum WholesaleStatus {
    #[graphql(name = "PRE_CONTACT")]
    PreContact,
    #[graphql(name = "CONTACTING")]
    Contacting,
    #[graphql(name = "NEGOTIATING")]
    Negotiating,
    #[graphql(name = "AGREED")]
    Agreed,
    #[graphql(name = "PREPARING_PUBLISH")]
    PreparingPublish,
    #[graphql(name = "PUBLISHING")]
    Publishing,
    #[graphql(name = "STOPPED")]
    Stopped,
    #[graphql(name = "DROPPED")]
    Dropped,
}

impl From<wholesale::Status> for WholesaleStatus {
    fn from(value: wholesale::Status) -> Self {
        match value {
            wholesale::Status::PreContact => WholesaleStatus::PreContact,
            wholesale::Status::Contacting => WholesaleStatus::Contacting,
            wholesale::Status::Negotiating => WholesaleStatus::Negotiating,
            wholesale::Status::Agreed => WholesaleStatus::Agreed,
            wholesale::Status::PreparingPublish => WholesaleStatus::PreparingPublish,
            wholesale::Status::Publishing => WholesaleStatus::Publishing,
            wholesale::Status::Stopped => WholesaleStatus::Stopped,
            wholesale::Status::Dropped => WholesaleStatus::Dropped,
        }
    }
}

impl From<WholesaleStatus> for wholesale::Status {
    fn from(value: WholesaleStatus) -> Self {
        match value {
            WholesaleStatus::PreContact => wholesale::Status::PreContact,
            WholesaleStatus::Contacting => wholesale::Status::Contacting,
            WholesaleStatus::Negotiating => wholesale::Status::Negotiating,
            WholesaleStatus::Agreed => wholesale::Status::Agreed,
            WholesaleStatus::PreparingPublish => wholesale::Status::PreparingPublish,
            WholesaleStatus::Publishing => wholesale::Status::Publishing,
            WholesaleStatus::Stopped => wholesale::Status::Stopped,
            WholesaleStatus::Dropped => wholesale::Status::Dropped,
        }
    }
}

#[derive(InputObject, Clone)]
pub struct NewCompanyInput {
    pub name: String,
    pub status: Option<String>,
    #[graphql(default)]
    pub tags: Vec<String>,
    #[graphql(name = "ownerIds", default)]
    pub owner_ids: Vec<String>,
    pub category: Option<String>,
    pub profile: Option<String>,
}

#[derive(InputObject, Clone)]
pub struct UpdateCompanyInput {
    pub id: ID,
    pub name: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
    #[graphql(name = "ownerIds")]
    pub owner_ids: Option<Vec<String>>,
    pub category: Option<String>,
    pub profile: Option<String>,
}

#[derive(InputObject, Clone)]
pub struct NewContactInput {
    #[graphql(name = "companyId")]
    pub company_id: ID,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Company")]
pub struct CompanyNode {
    pub id: ID,
    pub name: String,
    #[graphql(name = "normalizedName")]
    pub normalized_name: String,
    pub status: String,
    pub tags: Vec<String>,
    #[graphql(name = "ownerIds")]
    pub owner_ids: Vec<String>,
    pub category: Option<String>,
    pub profile: Option<String>,
    #[graphql(name = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[graphql(name = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<company::Model> for CompanyNode {
    fn from(model: company::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            name: model.name,
            normalized_name: model.normalized_name,
            status: model.status,
            tags: model.tags.0,
            owner_ids: model.owner_ids.0,
            category: model.category,
            profile: model.profile,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Contact")]
pub struct ContactNode {
    pub id: ID,
    #[graphql(name = "companyId")]
    pub company_id: ID,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[graphql(name = "sortKey")]
    pub sort_key: String,
    #[graphql(name = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[graphql(name = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<contact::Model> for ContactNode {
    fn from(model: contact::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            company_id: ID::from(model.company_id.to_string()),
            name: model.name,
            email: model.email,
            phone: model.phone,
            sort_key: model.sort_key,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Wholesale")]
pub struct WholesaleNode {
    pub id: ID,
    #[graphql(name = "companyId")]
    pub company_id: ID,
    pub title: String,
    pub status: WholesaleStatus,
    #[graphql(name = "statusLabel")]
    pub status_label: String,
    #[graphql(name = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[graphql(name = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<wholesale::Model> for WholesaleNode {
    fn from(model: wholesale::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            company_id: ID::from(model.company_id.to_string()),
            title: model.title,
            status: model.status.into(),
            status_label: label(model.status).to_string(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct DealStatusInfo {
    pub status: WholesaleStatus,
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, SimpleObject)]
pub struct DuplicateGroup {
    #[graphql(name = "normalizedName")]
    pub normalized_name: String,
    pub companies: Vec<CompanyNode>,
}

fn database(ctx: &Context<'_>) -> async_graphql::Result<Arc<DatabaseConnection>> {
    ctx.data::<Arc<DatabaseConnection>>()
        .cloned()
        .map_err(|_| error_with_code("INTERNAL", "Missing database connection"))
}

fn sort_key_generator(ctx: &Context<'_>) -> async_graphql::Result<Arc<SortKeyGenerator>> {
    ctx.data::<Arc<SortKeyGenerator>>()
        .cloned()
        .map_err(|_| error_with_code("INTERNAL", "Missing sort key generator"))
}

fn options_cache(ctx: &Context<'_>) -> async_graphql::Result<Arc<OptionsCache>> {
    ctx.data::<Arc<OptionsCache>>()
        .cloned()
        .map_err(|_| error_with_code("INTERNAL", "Missing options cache"))
}

fn parse_uuid(id: &ID) -> async_graphql::Result<Uuid> {
    Uuid::parse_str(id.as_str()).map_err(|_| error_with_code("BAD_REQUEST", "Invalid ID"))
}

fn sanitize_optional_filter(q: Option<String>) -> Option<String> {
    q.and_then(|value| {
        let trimmed = value.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

fn validate_company_name(name: &str) -> async_graphql::Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(validation_error("name must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn validation_error(message: impl Into<String>) -> Error {
    error_with_code("VALIDATION", message)
}

fn db_error(err: DbErr) -> Error {
    error_with_code("INTERNAL", format!("Database error: {}", err))
}

fn error_with_code(code: &'static str, message: impl Into<String>) -> Error {
    Error::new(message).extend_with(|_, e| e.set("code", code))
}

#[derive(Debug, Clone)]
pub struct SeededRecords {
    pub companies: Vec<company::Model>,
    pub contacts: Vec<contact::Model>,
    pub wholesales: Vec<wholesale::Model>,
}

impl SeededRecords {
    pub fn company_named(&self, name: &str) -> Option<&company::Model> {
        self.companies.iter().find(|c| c.name == name)
    }
}

pub async fn seed_demo(
    db: &DatabaseConnection,
    sort_keys: &SortKeyGenerator,
) -> Result<SeededRecords, DbErr> {
    let seeded_at: DateTimeWithTimeZone = Utc::now().into();
    let acme = company::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("ACME Trading".into()),
        normalized_name: Set(normalized_name("ACME Trading")),
        status: Set("active".into()),
        tags: Set(company::StringList(vec!["vip".into(), "retail".into()])),
        owner_ids: Set(company::StringList(vec!["u1".into()])),
        category: Set(Some("Retail".into())),
        profile: Set(Some("Flagship retail partner.".into())),
        created_at: Set(seeded_at),
        updated_at: Set(seeded_at),
    }
    .insert(db)
    .await?;

    let northwind = company::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Northwind Foods".into()),
        normalized_name: Set(normalized_name("Northwind Foods")),
        status: Set("active".into()),
        tags: Set(company::StringList(vec!["wholesale".into()])),
        owner_ids: Set(company::StringList(vec!["u2".into()])),
        category: Set(None),
        profile: Set(None),
        created_at: Set(seeded_at),
        updated_at: Set(seeded_at),
    }
    .insert(db)
    .await?;

    let ada = contact::ActiveModel {
        id: Set(Uuid::new_v4()),
        company_id: Set(acme.id),
        name: Set("Ada Lovelace".into()),
        email: Set(Some("ada@acme.test".into())),
        phone: Set(Some("+1-555-0110".into())),
        sort_key: Set(sort_keys.generate()),
        created_at: Set(seeded_at),
        updated_at: Set(seeded_at),
    }
    .insert(db)
    .await?;

    let grace = contact::ActiveModel {
        id: Set(Uuid::new_v4()),
        company_id: Set(northwind.id),
        name: Set("Grace Hopper".into()),
        email: Set(Some("grace@northwind.test".into())),
        phone: Set(None),
        sort_key: Set(sort_keys.generate()),
        created_at: Set(seeded_at),
        updated_at: Set(seeded_at),
    }
    .insert(db)
    .await?;

    let pilot = wholesale::ActiveModel {
        id: Set(Uuid::new_v4()),
        company_id: Set(acme.id),
        title: Set("ACME Pilot Listing".into()),
        status: Set(wholesale::Status::Negotiating),
        created_at: Set(seeded_at),
        updated_at: Set(seeded_at),
    }
    .insert(db)
    .await?;

    let seasonal = wholesale::ActiveModel {
        id: Set(Uuid::new_v4()),
        company_id: Set(northwind.id),
        title: Set("Seasonal Catalog".into()),
        status: Set(wholesale::Status::PreContact),
        created_at: Set(seeded_at),
        updated_at: Set(seeded_at),
    }
    .insert(db)
    .await?;

    task::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set("Follow up on catalog samples".into()),
        status: Set(task::Status::Open),
        due_at: Set(None),
        target_type: Set(task::TARGET_COMPANY.into()),
        target_id: Set(northwind.id),
        created_at: Set(seeded_at),
        updated_at: Set(seeded_at),
    }
    .insert(db)
    .await?;

    Ok(SeededRecords {
        companies: vec![acme, northwind],
        contacts: vec![ada, grace],
        wholesales: vec![pilot, seasonal],
    })
}
