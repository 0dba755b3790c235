//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and raw key-value access used by every factory.

use entity::prelude::KvStore;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};
use serde_json::Value;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Writes a JSON value under `key`, replacing any existing value.
///
/// # Arguments
/// - `db` - Database connection
/// - `key` - Store key, e.g. `user:user_1`
/// - `value` - JSON record to store
pub async fn put_json(db: &DatabaseConnection, key: &str, value: &Value) -> Result<(), DbErr> {
    KvStore::insert(entity::kv_store::ActiveModel {
        key: ActiveValue::Set(key.to_string()),
        value: ActiveValue::Set(value.to_string()),
    })
    .on_conflict(
        OnConflict::column(entity::kv_store::Column::Key)
            .update_column(entity::kv_store::Column::Value)
            .to_owned(),
    )
    .exec_without_returning(db)
    .await?;

    Ok(())
}

/// Reads the JSON value stored under `key`.
///
/// # Returns
/// - `Ok(Some(Value))` - Key exists
/// - `Ok(None)` - Key is absent
/// - `Err(DbErr)` - Database error or stored value is not valid JSON
pub async fn get_json(db: &DatabaseConnection, key: &str) -> Result<Option<Value>, DbErr> {
    let Some(model) = KvStore::find_by_id(key.to_string()).one(db).await? else {
        return Ok(None);
    };

    serde_json::from_str(&model.value)
        .map(Some)
        .map_err(|e| DbErr::Custom(format!("Invalid JSON under {}: {}", key, e)))
}

/// Appends `id` to the JSON string array stored under `index_key`.
///
/// Creates the array when the key is absent.
pub async fn push_index(db: &DatabaseConnection, index_key: &str, id: &str) -> Result<(), DbErr> {
    let mut ids = match get_json(db, index_key).await? {
        Some(Value::Array(ids)) => ids,
        _ => Vec::new(),
    };
    ids.push(Value::String(id.to_string()));

    put_json(db, index_key, &Value::Array(ids)).await
}

/// Returns the ids stored in the index list under `index_key`.
pub async fn read_index(db: &DatabaseConnection, index_key: &str) -> Result<Vec<String>, DbErr> {
    let ids = match get_json(db, index_key).await? {
        Some(Value::Array(ids)) => ids
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };

    Ok(ids)
}

/// Current time in the RFC 3339 form stored in records.
pub fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}
