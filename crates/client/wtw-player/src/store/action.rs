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

use serde::Serialize;

use crate::model::{AuthorizationStatus, Comments, Film, Films};

/// A discrete update to the central store.
///
/// The static name of each variant (`action.as_ref()`) follows the
/// `slice/event` convention and is what shows up in logs.
#[derive(Debug, Clone, PartialEq, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    #[strum(serialize = "data/loadFilms")]
    LoadFilms(Films),
    #[strum(serialize = "data/loadPromoFilm")]
    LoadPromoFilm(Film),
    #[strum(serialize = "data/loadSelectedFilm")]
    LoadSelectedFilm(Film),
    #[strum(serialize = "data/loadSimilarFilms")]
    LoadSimilarFilms(Films),
    #[strum(serialize = "data/loadSelectedFilmComments")]
    LoadSelectedFilmComments(Comments),
    #[strum(serialize = "data/loadFavoriteFilmsList")]
    LoadFavoriteFilmsList(Films),
    #[strum(serialize = "data/sentCommentFlag")]
    SentCommentFlag(bool),
    #[strum(serialize = "data/sentFavoriteFilmFlag")]
    SentFavoriteFilmFlag(bool),
    /// `None` clears a previous error.
    #[strum(serialize = "data/getErrorResponse")]
    ErrorResponse(Option<String>),
    #[strum(serialize = "user/requireAuthorization")]
    RequireAuthorization(AuthorizationStatus),
}
