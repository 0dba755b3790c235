//! Generic key-value repository over the `kv_store` table.
//!
//! Values are JSON documents. Index lists are JSON arrays of ids stored under their own key.
//! Every other repository is a thin, typed layer over this one.

use std::collections::HashMap;

use entity::{kv_store, prelude::KvStore};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use serde::{de::DeserializeOwned, Serialize};

/// Repository providing typed JSON access to the key-value table.
///
/// Generic over the connection so the same code runs against the pool or inside a
/// transaction.
pub struct KvRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> KvRepository<'a, C> {
    /// Creates a new KvRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reads and decodes the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - Key exists and decoded
    /// - `Ok(None)` - Key does not exist
    /// - `Err(DbErr)` - Database error or a value that does not decode as `T`
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DbErr> {
        let Some(row) = KvStore::find_by_id(key.to_string()).one(self.db).await? else {
            return Ok(None);
        };

        decode(&row.key, &row.value).map(Some)
    }

    /// Encodes `value` and stores it under `key`, replacing any previous value.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), DbErr> {
        let json = serde_json::to_string(value)
            .map_err(|e| DbErr::Custom(format!("failed to encode value for {}: {}", key, e)))?;

        KvStore::insert(kv_store::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(json),
        })
        .on_conflict(
            OnConflict::column(kv_store::Column::Key)
                .update_column(kv_store::Column::Value)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Deletes `key`.
    ///
    /// # Returns
    /// - `Ok(true)` - Key existed and was removed
    /// - `Ok(false)` - Key did not exist
    pub async fn del(&self, key: &str) -> Result<bool, DbErr> {
        let result = KvStore::delete_by_id(key.to_string()).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, key: &str) -> Result<bool, DbErr> {
        Ok(KvStore::find_by_id(key.to_string())
            .one(self.db)
            .await?
            .is_some())
    }

    /// Reads many keys in one query.
    ///
    /// # Returns
    /// - `Ok(Vec<Option<T>>)` - One entry per requested key, in request order, `None` for
    ///   missing keys
    pub async fn mget<T: DeserializeOwned>(&self, keys: &[String]) -> Result<Vec<Option<T>>, DbErr> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let rows = KvStore::find()
            .filter(kv_store::Column::Key.is_in(keys.iter().cloned()))
            .all(self.db)
            .await?;
        let by_key: HashMap<String, String> =
            rows.into_iter().map(|row| (row.key, row.value)).collect();

        keys.iter()
            .map(|key| by_key.get(key).map(|value| decode(key, value)).transpose())
            .collect()
    }

    /// Reads every entry whose key starts with `prefix`, ordered by key.
    pub async fn get_by_prefix<T: DeserializeOwned>(
        &self,
        prefix: &str,
    ) -> Result<Vec<(String, T)>, DbErr> {
        let rows = KvStore::find()
            .filter(kv_store::Column::Key.starts_with(prefix))
            .order_by_asc(kv_store::Column::Key)
            .all(self.db)
            .await?;

        // LIKE treats `_` as a wildcard and ignores ASCII case, so recheck exactly.
        rows.into_iter()
            .filter(|row| row.key.starts_with(prefix))
            .map(|row| {
                let value = decode(&row.key, &row.value)?;
                Ok((row.key, value))
            })
            .collect()
    }

    /// Reads an index list, treating a missing key as empty.
    pub async fn get_list(&self, key: &str) -> Result<Vec<String>, DbErr> {
        Ok(self.get::<Vec<String>>(key).await?.unwrap_or_default())
    }

    /// Appends `id` to the end of an index list unless it is already present.
    ///
    /// # Returns
    /// - `Ok(true)` - Id was added
    /// - `Ok(false)` - Id was already listed
    pub async fn append_to_list(&self, key: &str, id: &str) -> Result<bool, DbErr> {
        let mut list = self.get_list(key).await?;
        if list.iter().any(|existing| existing == id) {
            return Ok(false);
        }

        list.push(id.to_string());
        self.set(key, &list).await?;
        Ok(true)
    }

    /// Inserts `id` at the front of an index list unless it is already present.
    pub async fn prepend_to_list(&self, key: &str, id: &str) -> Result<bool, DbErr> {
        let mut list = self.get_list(key).await?;
        if list.iter().any(|existing| existing == id) {
            return Ok(false);
        }

        list.insert(0, id.to_string());
        self.set(key, &list).await?;
        Ok(true)
    }

    /// Removes every occurrence of `id` from an index list.
    ///
    /// # Returns
    /// - `Ok(true)` - Id was listed and removed
    /// - `Ok(false)` - Id was not listed; the list is left untouched
    pub async fn remove_from_list(&self, key: &str, id: &str) -> Result<bool, DbErr> {
        let mut list = self.get_list(key).await?;
        let before = list.len();
        list.retain(|existing| existing != id);
        if list.len() == before {
            return Ok(false);
        }

        self.set(key, &list).await?;
        Ok(true)
    }

    /// Loads the records for the ids in an index list, skipping ids whose record is gone.
    pub async fn get_listed<T: DeserializeOwned>(
        &self,
        list_key: &str,
        record_key: impl Fn(&str) -> String,
    ) -> Result<Vec<T>, DbErr> {
        let keys: Vec<String> = self
            .get_list(list_key)
            .await?
            .iter()
            .map(|id| record_key(id))
            .collect();

        Ok(self.mget(&keys).await?.into_iter().flatten().collect())
    }
}

fn decode<T: DeserializeOwned>(key: &str, value: &str) -> Result<T, DbErr> {
    serde_json::from_str(value)
        .map_err(|e| DbErr::Custom(format!("failed to decode value for {}: {}", key, e)))
}
