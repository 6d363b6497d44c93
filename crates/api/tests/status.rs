use std::sync::Arc;

use api::options_cache::OptionsCache;
use api::schema::{build_schema, AppSchema};
use api::sort_key::SortKeyGenerator;
use async_graphql::{Request, ServerError, Value as GqlValue, Variables};
use chrono::Utc;
use entity::wholesale;
use sea_orm::{
    ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, EntityTrait, Statement,
};
use serde_json::json;
use uuid::Uuid;

struct StatusTestEnv {
    db: Arc<DatabaseConnection>,
    schema: AppSchema,
}

async fn setup() -> StatusTestEnv {
    let conn = Database::connect("sqlite::memory:").await.unwrap();
    let db = Arc::new(conn);
    for ddl in [
        r#"
        CREATE TABLE company (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            normalized_name TEXT NOT NULL,
            status TEXT NOT NULL,
            tags TEXT NOT NULL DEFAULT '[]',
            owner_ids TEXT NOT NULL DEFAULT '[]',
            category TEXT,
            profile TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE wholesale (
            id TEXT PRIMARY KEY,
            company_id TEXT NOT NULL,
            title TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pre_contact',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    ] {
        db.execute(Statement::from_string(DatabaseBackend::Sqlite, ddl))
            .await
            .unwrap();
    }
    let schema = build_schema(
        db.clone(),
        Arc::new(SortKeyGenerator::new()),
        Arc::new(OptionsCache::new()),
    );
    StatusTestEnv { db, schema }
}

async fn insert_company(db: &DatabaseConnection, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now().to_rfc3339();
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO company (id, name, normalized_name, status, tags, owner_ids, created_at, updated_at) VALUES (?, ?, ?, 'active', '[]', '[]', ?, ?)",
        vec![
            id.into(),
            name.into(),
            name.to_lowercase().into(),
            now.clone().into(),
            now.into(),
        ],
    ))
    .await
    .unwrap();
    id
}

async fn insert_wholesale(db: &DatabaseConnection, company_id: Uuid, status: &str) -> Uuid {
    let id = Uuid::new_v4();
    // Fixed past timestamp so updated_at bumps are visible as strict increases.
    let past = "2026-08-01T00:00:00+00:00";
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO wholesale (id, company_id, title, status, created_at, updated_at) VALUES (?, ?, 'Listing', ?, ?, ?)",
        vec![
            id.into(),
            company_id.into(),
            status.into(),
            past.into(),
            past.into(),
        ],
    ))
    .await
    .unwrap();
    id
}

async fn move_status(
    env: &StatusTestEnv,
    id: Uuid,
    status: &str,
) -> async_graphql::Response {
    let mutation = format!(
        r#"
        mutation Move($id: ID!) {{
            moveWholesaleStatus(id: $id, status: {status}) {{
                id
                status
                statusLabel
            }}
        }}
        "#
    );
    env.schema
        .0
        .execute(Request::new(mutation).variables(Variables::from_json(json!({
            "id": id,
        }))))
        .await
}

#[tokio::test]
async fn legal_move_persists_new_status() {
    let env = setup().await;
    let company = insert_company(env.db.as_ref(), "Acme").await;
    let wholesale_id = insert_wholesale(env.db.as_ref(), company, "negotiating").await;

    let resp = move_status(&env, wholesale_id, "AGREED").await;
    assert!(
        resp.errors.is_empty(),
        "unexpected errors: {:?}",
        resp.errors
    );
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["moveWholesaleStatus"]["status"], json!("AGREED"));
    assert_eq!(data["moveWholesaleStatus"]["statusLabel"], json!("Agreed"));

    let saved = wholesale::Entity::find_by_id(wholesale_id)
        .one(env.db.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.status, wholesale::Status::Agreed);
}

#[tokio::test]
async fn illegal_move_is_rejected_without_writes() {
    let env = setup().await;
    let company = insert_company(env.db.as_ref(), "Acme").await;
    let wholesale_id = insert_wholesale(env.db.as_ref(), company, "pre_contact").await;

    let resp = move_status(&env, wholesale_id, "PUBLISHING").await;
    assert!(has_error_code(&resp.errors, "VALIDATION"));

    let saved = wholesale::Entity::find_by_id(wholesale_id)
        .one(env.db.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.status, wholesale::Status::PreContact);
    assert_eq!(saved.updated_at.to_rfc3339(), "2026-08-01T00:00:00+00:00");
}

#[tokio::test]
async fn same_status_move_is_accepted_and_bumps_updated_at() {
    let env = setup().await;
    let company = insert_company(env.db.as_ref(), "Acme").await;
    let wholesale_id = insert_wholesale(env.db.as_ref(), company, "stopped").await;

    let resp = move_status(&env, wholesale_id, "STOPPED").await;
    assert!(
        resp.errors.is_empty(),
        "unexpected errors: {:?}",
        resp.errors
    );

    let saved = wholesale::Entity::find_by_id(wholesale_id)
        .one(env.db.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.status, wholesale::Status::Stopped);
    assert!(saved.updated_at.to_rfc3339().as_str() > "2026-08-01T00:00:00+00:00");
}

#[tokio::test]
async fn terminal_statuses_reject_every_exit() {
    let env = setup().await;
    let company = insert_company(env.db.as_ref(), "Acme").await;

    for terminal in ["stopped", "dropped"] {
        let wholesale_id = insert_wholesale(env.db.as_ref(), company, terminal).await;
        for next in ["PRE_CONTACT", "CONTACTING", "PUBLISHING", "DROPPED", "STOPPED"] {
            let from = wholesale::Entity::find_by_id(wholesale_id)
                .one(env.db.as_ref())
                .await
                .unwrap()
                .unwrap()
                .status;
            let resp = move_status(&env, wholesale_id, next).await;
            let same = next.to_lowercase() == terminal;
            if same {
                assert!(resp.errors.is_empty(), "self move should stay legal");
            } else {
                assert!(
                    has_error_code(&resp.errors, "VALIDATION"),
                    "{terminal} -> {next} should be rejected"
                );
                let after = wholesale::Entity::find_by_id(wholesale_id)
                    .one(env.db.as_ref())
                    .await
                    .unwrap()
                    .unwrap()
                    .status;
                assert_eq!(after, from);
            }
        }
    }
}

#[tokio::test]
async fn moving_a_missing_wholesale_reports_not_found() {
    let env = setup().await;
    let resp = move_status(&env, Uuid::new_v4(), "CONTACTING").await;
    assert!(has_error_code(&resp.errors, "NOT_FOUND"));
}

#[tokio::test]
async fn deal_statuses_query_lists_the_whole_pipeline() {
    let env = setup().await;
    let query = r#"
        query {
            dealStatuses {
                status
                value
                label
            }
        }
    "#;
    let resp = env.schema.0.execute(Request::new(query)).await;
    assert!(
        resp.errors.is_empty(),
        "unexpected errors: {:?}",
        resp.errors
    );
    let data = resp.data.into_json().unwrap();
    let statuses = data["dealStatuses"].as_array().unwrap();
    assert_eq!(statuses.len(), 8);
    assert_eq!(statuses[0]["value"], json!("pre_contact"));
    assert_eq!(statuses[0]["label"], json!("Pre-contact"));
    assert_eq!(statuses[7]["status"], json!("DROPPED"));

    let labels: Vec<&str> = statuses
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    let mut deduped = labels.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), labels.len());
}

fn has_error_code(errors: &[ServerError], code: &str) -> bool {
    errors.iter().any(|e| {
        matches!(
            e.extensions.as_ref().and_then(|ext| ext.get("code")),
            Some(GqlValue::String(s)) if s == code
        )
    })
}
