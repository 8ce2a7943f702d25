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

//! Shared reporting routine for failed requests.

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::StatusCode;
use tracing::{error, info, warn};

use crate::{
    api::Error,
    model::AuthorizationStatus,
    store::{Action, Store},
};

/// Logs every failure reaching an action boundary. A 401 also drops the
/// store back to [`AuthorizationStatus::NoAuth`].
#[derive(Debug)]
pub struct ErrorHandler {
    store:   Store,
    handled: AtomicU64,
}

impl ErrorHandler {
    pub const fn new(store: Store) -> Self {
        Self {
            store,
            handled: AtomicU64::new(0),
        }
    }

    pub fn handle(&self, err: &Error) {
        self.handled.fetch_add(1, Ordering::Relaxed);

        match err.status() {
            Some(StatusCode::BAD_REQUEST) => {
                warn!(message = %err.user_message(), "request rejected");
            }
            Some(StatusCode::UNAUTHORIZED) => {
                info!(message = %err.user_message(), "not authorized");
                self.store
                    .dispatch(Action::RequireAuthorization(AuthorizationStatus::NoAuth));
            }
            Some(StatusCode::NOT_FOUND) => {
                warn!(message = %err.user_message(), "not found");
            }
            _ => error!(error = %err, "request failed"),
        }
    }

    /// Number of errors reported so far.
    pub fn handled_count(&self) -> u64 { self.handled.load(Ordering::Relaxed) }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::*;
    use crate::api::err::StatusSnafu;

    fn status_error(status: StatusCode) -> Error {
        StatusSnafu {
            method: Method::GET,
            path: "/login",
            status,
            message: "",
        }
        .build()
    }

    #[test]
    fn unauthorized_resets_auth_status() {
        let store = Store::new();
        store.dispatch(Action::RequireAuthorization(AuthorizationStatus::Auth));
        let handler = ErrorHandler::new(store.clone());

        handler.handle(&status_error(StatusCode::UNAUTHORIZED));

        assert_eq!(
            store.state().user.authorization_status,
            AuthorizationStatus::NoAuth
        );
        assert_eq!(handler.handled_count(), 1);
    }

    #[test]
    fn other_failures_only_log() {
        let store = Store::new();
        let handler = ErrorHandler::new(store.clone());
        let mut rx = store.subscribe();

        handler.handle(&status_error(StatusCode::BAD_REQUEST));
        handler.handle(&status_error(StatusCode::NOT_FOUND));
        handler.handle(&status_error(StatusCode::INTERNAL_SERVER_ERROR));

        assert!(rx.try_recv().is_err());
        assert_eq!(store.state(), crate::store::State::default());
        assert_eq!(handler.handled_count(), 3);
    }
}
