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

//! Persisted session token.
//!
//! The backend issues an opaque token on login. It is written here so the
//! next process start can resume the session, and removed on logout.

use tracing::debug;

use crate::{err::Result, kv::KVStore};

/// Key under which the session token is stored.
pub const TOKEN_KEY: &str = "what-to-watch-token";

/// Session token persistence on top of [`KVStore`].
#[derive(Clone, Debug)]
pub struct TokenStore {
    kv: KVStore,
}

impl TokenStore {
    pub(crate) const fn new(kv: KVStore) -> Self { Self { kv } }

    /// Current token, or `None` when logged out.
    pub async fn token(&self) -> Result<Option<String>> { self.kv.get(TOKEN_KEY).await }

    /// Persist `token`, replacing any previous one.
    pub async fn save_token(&self, token: &str) -> Result<()> {
        debug!("saving session token");
        self.kv.set(TOKEN_KEY, &token).await
    }

    /// Forget the current token.
    pub async fn drop_token(&self) -> Result<()> {
        debug!("dropping session token");
        self.kv.remove(TOKEN_KEY).await
    }
}
