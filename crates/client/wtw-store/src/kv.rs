// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Serialize, de::DeserializeOwned};
use snafu::ResultExt;
use sqlx::SqlitePool;

use crate::err::*;

/// Key-value store backed by SQLite
///
/// All values are serialized to JSON before storage
#[derive(Clone, Debug)]
pub struct KVStore {
    pool: SqlitePool,
}

impl KVStore {
    /// Create a new KV store from a SQLite pool
    pub(crate) const fn new(pool: SqlitePool) -> Self { Self { pool } }

    /// Set a key-value pair, replacing any previous value
    pub async fn set<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<()> {
        let value_json = serde_json::to_string(value).context(CodecSnafu { key })?;

        sqlx::query("INSERT OR REPLACE INTO kv_table (key, value) VALUES (?, ?)")
            .bind(key)
            .bind(value_json)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Get a value by key
    ///
    /// Returns `None` if the key does not exist
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv_table WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some((value_json,)) => {
                let value = serde_json::from_str(&value_json).context(CodecSnafu { key })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Remove a key-value pair. Removing a missing key is not an error.
    pub async fn remove(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM kv_table WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
