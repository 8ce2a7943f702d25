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

use std::sync::Arc;

use tracing::info;
use wtw_store::DBStore;

use crate::{
    api::{Api, RestClient},
    api_action::ApiActions,
    config::AppConfig,
    store::Store,
};

/// Application state that holds the lifecycle of the client
///
/// Owns the database, the REST client (with the persisted session token
/// already attached), the central store and the actions bound to them.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config:     AppConfig,
    db:         DBStore,
    client:     RestClient,
    store:      Store,
    actions:    ApiActions,
    session_id: uuid::Uuid,
}

impl AppState {
    /// Create a new AppState with the given configuration
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or the HTTP client
    /// cannot be built
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        let db = DBStore::new(&config.database).await?;
        let tokens = db.token_store();

        let client = RestClient::new(&config.api)?;
        let token = tokens.token().await?;
        info!(resumed = token.is_some(), "session token loaded");
        client.set_token(token).await;

        let store = Store::new();
        let actions = ApiActions::new(Arc::new(client.clone()), store.clone(), tokens);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                db,
                client,
                store,
                actions,
                session_id: uuid::Uuid::new_v4(),
            }),
        })
    }

    pub fn config(&self) -> AppConfig { self.inner.config.clone() }

    pub fn db(&self) -> DBStore { self.inner.db.clone() }

    pub fn client(&self) -> &RestClient { &self.inner.client }

    pub fn store(&self) -> &Store { &self.inner.store }

    pub fn actions(&self) -> &ApiActions { &self.inner.actions }

    pub fn session_id(&self) -> uuid::Uuid { self.inner.session_id }
}
