//! Company merge protocol: consolidates a source company into a target,
//! re-pointing every dependent record, inside one transaction.

use std::collections::HashSet;

use chrono::Utc;
use entity::{company, company_room_link, contact, message, project, summary, task, wholesale};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::normalize::union_first_seen;
use crate::options_cache::{OptionsCache, COMPANY_OPTIONS_KEY};
use crate::sort_key::SortKeyGenerator;

#[derive(Debug)]
pub enum MergeError {
    /// Either participant does not exist (or was consumed by a concurrent
    /// merge before this one committed).
    NotFound,
    /// Target and source are the same company.
    SameCompany,
    Db(DbErr),
}

impl From<DbErr> for MergeError {
    fn from(value: DbErr) -> Self {
        MergeError::Db(value)
    }
}

/// Merges `source_id` into `target_id` and deletes the source.
///
/// Tags and owner ids become the set union (stable first-seen order, target
/// values first); category and profile keep the target's value, falling back
/// to the source's. Contacts are re-parented in their existing sort order
/// with freshly generated keys, so they land after the target's own contacts
/// without interleaving. Projects, wholesales, messages and summaries get a
/// plain foreign-key rewrite; room links are deduplicated on `room_id`;
/// company-targeted tasks follow the surviving record.
///
/// Every write happens under one transaction. Any failure rolls the whole
/// merge back, so no dependent record can end up pointing at a deleted
/// company. The company-options cache entry is invalidated after commit.
pub async fn merge_companies(
    db: &DatabaseConnection,
    target_id: Uuid,
    source_id: Uuid,
    sort_keys: &SortKeyGenerator,
    cache: &OptionsCache,
) -> Result<company::Model, MergeError> {
    if target_id == source_id {
        return Err(MergeError::SameCompany);
    }
    // Missing participants are reported before the transaction opens.
    ensure_company_exists(db, target_id).await?;
    ensure_company_exists(db, source_id).await?;

    let txn = db.begin().await?;

    // Re-fetch under the transaction: a concurrent merge that already
    // consumed either row must fail here rather than half-apply.
    let target = company::Entity::find_by_id(target_id)
        .one(&txn)
        .await?
        .ok_or(MergeError::NotFound)?;
    let source = company::Entity::find_by_id(source_id)
        .one(&txn)
        .await?
        .ok_or(MergeError::NotFound)?;

    let merged_tags = union_first_seen(&target.tags.0, &source.tags.0);
    let merged_owner_ids = union_first_seen(&target.owner_ids.0, &source.owner_ids.0);
    let merged_category = target.category.clone().or_else(|| source.category.clone());
    let merged_profile = target.profile.clone().or_else(|| source.profile.clone());

    let now: DateTimeWithTimeZone = Utc::now().into();

    // Contacts are processed in their current sort order so the fresh keys
    // preserve their relative order, appended after the target's contacts.
    let moved_contacts = contact::Entity::find()
        .filter(contact::Column::CompanyId.eq(source_id))
        .order_by_asc(contact::Column::SortKey)
        .all(&txn)
        .await?;
    for record in moved_contacts {
        let mut active: contact::ActiveModel = record.into();
        active.company_id = Set(target_id);
        active.sort_key = Set(sort_keys.generate());
        active.updated_at = Set(now);
        active.update(&txn).await?;
    }

    project::Entity::update_many()
        .col_expr(project::Column::CompanyId, Expr::value(target_id))
        .filter(project::Column::CompanyId.eq(source_id))
        .exec(&txn)
        .await?;
    wholesale::Entity::update_many()
        .col_expr(wholesale::Column::CompanyId, Expr::value(target_id))
        .filter(wholesale::Column::CompanyId.eq(source_id))
        .exec(&txn)
        .await?;
    message::Entity::update_many()
        .col_expr(message::Column::CompanyId, Expr::value(target_id))
        .filter(message::Column::CompanyId.eq(source_id))
        .exec(&txn)
        .await?;
    summary::Entity::update_many()
        .col_expr(summary::Column::CompanyId, Expr::value(target_id))
        .filter(summary::Column::CompanyId.eq(source_id))
        .exec(&txn)
        .await?;

    // Room linkage is unique per room: drop source links the target already
    // holds, re-point the rest.
    let target_rooms: HashSet<String> = company_room_link::Entity::find()
        .filter(company_room_link::Column::CompanyId.eq(target_id))
        .all(&txn)
        .await?
        .into_iter()
        .map(|link| link.room_id)
        .collect();
    let source_links = company_room_link::Entity::find()
        .filter(company_room_link::Column::CompanyId.eq(source_id))
        .all(&txn)
        .await?;
    for link in source_links {
        if target_rooms.contains(&link.room_id) {
            company_room_link::Entity::delete_by_id(link.id)
                .exec(&txn)
                .await?;
        } else {
            let mut active: company_room_link::ActiveModel = link.into();
            active.company_id = Set(target_id);
            active.update(&txn).await?;
        }
    }

    task::Entity::update_many()
        .col_expr(task::Column::TargetId, Expr::value(target_id))
        .filter(task::Column::TargetType.eq(task::TARGET_COMPANY))
        .filter(task::Column::TargetId.eq(source_id))
        .exec(&txn)
        .await?;

    let mut active: company::ActiveModel = target.into();
    active.tags = Set(company::StringList(merged_tags));
    active.owner_ids = Set(company::StringList(merged_owner_ids));
    active.category = Set(merged_category);
    active.profile = Set(merged_profile);
    active.updated_at = Set(now);
    let merged = active.update(&txn).await?;

    // Under read-committed isolation two merges of the same source can both
    // pass the re-fetch above. The delete decides the race: the loser matches
    // zero rows and must abort instead of committing a second "success".
    let deleted = company::Entity::delete_by_id(source_id).exec(&txn).await?;
    if deleted.rows_affected != 1 {
        return Err(MergeError::NotFound);
    }

    txn.commit().await?;

    cache.invalidate(COMPANY_OPTIONS_KEY);
    tracing::info!(%target_id, %source_id, "merged companies");
    Ok(merged)
}

async fn ensure_company_exists(db: &DatabaseConnection, id: Uuid) -> Result<(), MergeError> {
    company::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or(MergeError::NotFound)
}
