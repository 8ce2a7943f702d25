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

//! Access to the What to Watch REST backend.
//!
//! [`Api`] is the seam the action layer talks to; [`client::RestClient`] is
//! the reqwest implementation used at runtime.

pub mod client;
pub mod err;
pub mod routes;

#[cfg(test)]
pub(crate) mod stub;

use async_trait::async_trait;

pub use self::{client::RestClient, err::Error};
use self::err::Result;
use crate::model::{AuthData, CommentData, Comments, FavoriteFilmData, Film, FilmId, Films, UserData};

/// One method per backend endpoint.
#[async_trait]
pub trait Api: Send + Sync {
    /// `GET /films`
    async fn films(&self) -> Result<Films>;

    /// `GET /promo`
    async fn promo_film(&self) -> Result<Film>;

    /// `GET /login`: succeeds only while the attached token is valid.
    async fn check_authorization(&self) -> Result<()>;

    /// `POST /login`
    async fn login(&self, auth: &AuthData) -> Result<UserData>;

    /// `DELETE /logout`
    async fn logout(&self) -> Result<()>;

    /// `GET /films/{id}`
    async fn film(&self, id: FilmId) -> Result<Film>;

    /// `GET /films/{id}/similar`
    async fn similar_films(&self, id: FilmId) -> Result<Films>;

    /// `GET /comments/{id}`
    async fn comments(&self, id: FilmId) -> Result<Comments>;

    /// `POST /comments/{id}`
    async fn post_comment(&self, data: &CommentData) -> Result<()>;

    /// `GET /favorite`
    async fn favorite_films(&self) -> Result<Films>;

    /// `POST /favorite/{id}/{status}`
    async fn post_favorite(&self, data: &FavoriteFilmData) -> Result<()>;

    /// Replace the token attached to subsequent requests.
    async fn set_token(&self, token: Option<String>);
}
