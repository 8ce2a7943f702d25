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

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::{config::DatabaseConfig, err::*, kv::KVStore, token::TokenStore};

/// Database store that manages the SQLite connection pool
#[derive(Clone, Debug)]
pub struct DBStore {
    pool: SqlitePool,
}

impl DBStore {
    /// Open (creating if missing) the database described by `config` and
    /// apply pending migrations.
    #[tracing::instrument(level = "trace", err)]
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(&config.db_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        tracing::trace!("Initialized DBStore with path: {}", config.db_path.display());

        Ok(Self { pool })
    }

    /// Get a KV store instance
    pub fn kv_store(&self) -> KVStore { KVStore::new(self.pool.clone()) }

    /// Get the session token store
    pub fn token_store(&self) -> TokenStore { TokenStore::new(self.kv_store()) }

    /// Get the underlying SQLite pool
    pub const fn pool(&self) -> &SqlitePool { &self.pool }
}
