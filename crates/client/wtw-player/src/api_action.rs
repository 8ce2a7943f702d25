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

//! Asynchronous actions: one backend call each, with the outcome dispatched
//! into the store.
//!
//! Actions never return errors. Failures go through the shared
//! [`ErrorHandler`] and, for some actions, become a failure event in the
//! store. There are no retries and no ordering between concurrent actions.

use std::sync::Arc;

use tracing::{info, instrument, warn};
use wtw_store::TokenStore;

use crate::{
    api::Api,
    error_handle::ErrorHandler,
    model::{AuthData, AuthorizationStatus, CommentData, FavoriteFilmData, FilmId},
    store::{Action, Store},
};

/// Bundles everything an action needs. Cheap to clone, so each action can be
/// spawned as its own task.
#[derive(Clone)]
pub struct ApiActions {
    inner: Arc<ApiActionsInner>,
}

struct ApiActionsInner {
    api:    Arc<dyn Api>,
    store:  Store,
    tokens: TokenStore,
    errors: ErrorHandler,
}

impl std::fmt::Debug for ApiActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiActions")
            .field("store", &self.inner.store)
            .field("errors", &self.inner.errors)
            .finish_non_exhaustive()
    }
}

impl ApiActions {
    pub fn new(api: Arc<dyn Api>, store: Store, tokens: TokenStore) -> Self {
        Self {
            inner: Arc::new(ApiActionsInner {
                api,
                errors: ErrorHandler::new(store.clone()),
                store,
                tokens,
            }),
        }
    }

    pub fn store(&self) -> &Store { &self.inner.store }

    pub fn error_handler(&self) -> &ErrorHandler { &self.inner.errors }

    fn dispatch(&self, action: Action) { self.inner.store.dispatch(action); }

    #[instrument(skip(self))]
    pub async fn fetch_films(&self) {
        match self.inner.api.films().await {
            Ok(films) => self.dispatch(Action::LoadFilms(films)),
            Err(e) => self.inner.errors.handle(&e),
        }
    }

    #[instrument(skip(self))]
    pub async fn fetch_promo_film(&self) {
        match self.inner.api.promo_film().await {
            Ok(film) => self.dispatch(Action::LoadPromoFilm(film)),
            Err(e) => self.inner.errors.handle(&e),
        }
    }

    #[instrument(skip(self))]
    pub async fn check_authorization(&self) {
        match self.inner.api.check_authorization().await {
            Ok(()) => self.dispatch(Action::RequireAuthorization(AuthorizationStatus::Auth)),
            Err(e) => self.inner.errors.handle(&e),
        }
    }

    /// On success the token is persisted and attached to later requests.
    #[instrument(skip(self, auth), fields(login = %auth.login))]
    pub async fn login(&self, auth: AuthData) {
        match self.inner.api.login(&auth).await {
            Ok(user) => {
                if let Err(e) = self.inner.tokens.save_token(&user.token).await {
                    warn!(error = %e, "session token not persisted; it lasts until exit");
                }
                self.inner.api.set_token(Some(user.token)).await;
                info!(email = %user.email, "logged in");
                self.dispatch(Action::RequireAuthorization(AuthorizationStatus::Auth));
            }
            Err(e) => {
                self.inner.errors.handle(&e);
                self.dispatch(Action::RequireAuthorization(AuthorizationStatus::NoAuth));
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn logout(&self) {
        match self.inner.api.logout().await {
            Ok(()) => {
                if let Err(e) = self.inner.tokens.drop_token().await {
                    warn!(error = %e, "failed to drop persisted session token");
                }
                self.inner.api.set_token(None).await;
                self.dispatch(Action::RequireAuthorization(AuthorizationStatus::NoAuth));
            }
            Err(e) => self.inner.errors.handle(&e),
        }
    }

    #[instrument(skip(self))]
    pub async fn fetch_selected_film(&self, id: FilmId) {
        self.dispatch(Action::ErrorResponse(None));
        match self.inner.api.film(id).await {
            Ok(film) => self.dispatch(Action::LoadSelectedFilm(film)),
            Err(e) => {
                self.inner.errors.handle(&e);
                self.dispatch(Action::ErrorResponse(Some(e.user_message())));
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn fetch_similar_films(&self, id: FilmId) {
        match self.inner.api.similar_films(id).await {
            Ok(films) => self.dispatch(Action::LoadSimilarFilms(films)),
            Err(e) => self.inner.errors.handle(&e),
        }
    }

    #[instrument(skip(self))]
    pub async fn fetch_selected_film_comments(&self, id: FilmId) {
        match self.inner.api.comments(id).await {
            Ok(comments) => self.dispatch(Action::LoadSelectedFilmComments(comments)),
            Err(e) => self.inner.errors.handle(&e),
        }
    }

    #[instrument(skip(self, data), fields(id = data.id, rating = data.rating))]
    pub async fn post_selected_film_comment(&self, data: CommentData) {
        match self.inner.api.post_comment(&data).await {
            Ok(()) => self.dispatch(Action::SentCommentFlag(true)),
            Err(e) => {
                self.inner.errors.handle(&e);
                self.dispatch(Action::SentCommentFlag(false));
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn fetch_favorite_films_list(&self) {
        match self.inner.api.favorite_films().await {
            Ok(films) => self.dispatch(Action::LoadFavoriteFilmsList(films)),
            Err(e) => self.inner.errors.handle(&e),
        }
    }

    #[instrument(skip(self))]
    pub async fn post_favorite_film(&self, data: FavoriteFilmData) {
        match self.inner.api.post_favorite(&data).await {
            Ok(()) => self.dispatch(Action::SentFavoriteFilmFlag(true)),
            Err(e) => {
                self.inner.errors.handle(&e);
                self.dispatch(Action::SentFavoriteFilmFlag(false));
            }
        }
    }
}
