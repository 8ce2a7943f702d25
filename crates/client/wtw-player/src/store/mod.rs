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

//! Central state store.
//!
//! Every update goes through [`Store::dispatch`], which applies the reducer
//! under a write lock and then notifies subscribers. One action is one atomic
//! step; there are no multi-action transactions.

mod action;
mod state;

use std::{fmt, sync::Arc};

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::debug;

pub use self::{
    action::Action,
    state::{DataProcess, State, UserProcess, reduce},
};

const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Shared handle to the store. Clones observe and update the same state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state:  RwLock<State>,
    events: broadcast::Sender<Action>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("subscribers", &self.inner.events.receiver_count())
            .finish_non_exhaustive()
    }
}

impl Default for Store {
    fn default() -> Self { Self::new() }
}

impl Store {
    pub fn new() -> Self { Self::with_state(State::default()) }

    /// Start from a preloaded state.
    pub fn with_state(state: State) -> Self {
        let (events, _) = broadcast::channel(DEFAULT_EVENT_CAPACITY);
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                events,
            }),
        }
    }

    /// Apply `action` and broadcast it to subscribers.
    ///
    /// The write guard is held across the send, so subscribers observe actions
    /// in the order the reducer applied them.
    pub fn dispatch(&self, action: Action) {
        let mut state = self.inner.state.write();
        reduce(&mut state, &action);
        debug!(action = action.as_ref(), "dispatched");
        // No subscribers is fine.
        let _ = self.inner.events.send(action);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> State { self.inner.state.read().clone() }

    /// Read a part of the state without cloning the rest.
    pub fn select<R>(&self, f: impl FnOnce(&State) -> R) -> R { f(&self.inner.state.read()) }

    /// Receive every action dispatched after this call. Slow receivers miss
    /// old actions; the state snapshot stays authoritative.
    pub fn subscribe(&self) -> broadcast::Receiver<Action> { self.inner.events.subscribe() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuthorizationStatus, fixtures::film};

    #[test]
    fn dispatch_updates_every_clone() {
        let store = Store::new();
        let other = store.clone();
        other.dispatch(Action::LoadPromoFilm(film(2)));
        assert_eq!(store.select(|s| s.data.promo_film.as_ref().map(|f| f.id)), Some(2));
    }

    #[test]
    fn subscribers_see_actions_in_dispatch_order() {
        let store = Store::new();
        let mut rx = store.subscribe();
        store.dispatch(Action::ErrorResponse(None));
        store.dispatch(Action::RequireAuthorization(AuthorizationStatus::Auth));

        assert_eq!(rx.try_recv().unwrap(), Action::ErrorResponse(None));
        assert_eq!(
            rx.try_recv().unwrap(),
            Action::RequireAuthorization(AuthorizationStatus::Auth)
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn replaying_broadcasts_reproduces_state_under_contention() {
        let store = Store::with_state(State::default());
        let mut rx = store.subscribe();

        let threads: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..3 {
                        store.dispatch(Action::ErrorResponse(Some(format!("{t}-{i}"))));
                        store.dispatch(Action::SentFavoriteFilmFlag((t + i) % 2 == 0));
                    }
                })
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }

        let mut replayed = State::default();
        while let Ok(action) = rx.try_recv() {
            reduce(&mut replayed, &action);
        }
        assert_eq!(replayed, store.state());
    }

    #[test]
    fn preloaded_state_is_kept() {
        let mut preloaded = State::default();
        preloaded.data.films = vec![film(4), film(5)];
        preloaded.user.authorization_status = AuthorizationStatus::Auth;

        let store = Store::with_state(preloaded.clone());
        assert_eq!(store.state(), preloaded);
        store.dispatch(Action::LoadFilms(vec![film(6)]));
        assert_eq!(store.select(|s| s.data.films.len()), 1);
        assert_eq!(
            store.state().user.authorization_status,
            AuthorizationStatus::Auth
        );
    }

    #[tokio::test]
    async fn concurrent_dispatches_all_apply() {
        let store = Store::new();
        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.dispatch(Action::SentCommentFlag(i % 2 == 0));
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }
        assert!(store.state().data.is_comment_sent.is_some());
    }
}
