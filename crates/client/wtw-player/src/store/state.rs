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

use crate::{
    model::{AuthorizationStatus, Comments, Film, Films},
    store::action::Action,
};

/// Remote data mirrored from the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataProcess {
    pub films:                  Films,
    /// Set once the film list has arrived at least once.
    pub is_data_loaded:         bool,
    pub promo_film:             Option<Film>,
    pub selected_film:          Option<Film>,
    pub similar_films:          Films,
    pub selected_film_comments: Comments,
    pub favorite_films:         Films,
    /// Outcome of the last comment submission; `None` before the first one.
    pub is_comment_sent:        Option<bool>,
    /// Outcome of the last favorite toggle; `None` before the first one.
    pub is_favorite_film_sent:  Option<bool>,
    pub error_response:         Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserProcess {
    pub authorization_status: AuthorizationStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct State {
    pub data: DataProcess,
    pub user: UserProcess,
}

/// Apply one action. Entities are replaced, never merged.
pub fn reduce(state: &mut State, action: &Action) {
    let data = &mut state.data;
    match action {
        Action::LoadFilms(films) => {
            data.films.clone_from(films);
            data.is_data_loaded = true;
        }
        Action::LoadPromoFilm(film) => data.promo_film = Some(film.clone()),
        Action::LoadSelectedFilm(film) => data.selected_film = Some(film.clone()),
        Action::LoadSimilarFilms(films) => data.similar_films.clone_from(films),
        Action::LoadSelectedFilmComments(comments) => {
            data.selected_film_comments.clone_from(comments);
        }
        Action::LoadFavoriteFilmsList(films) => data.favorite_films.clone_from(films),
        Action::SentCommentFlag(sent) => data.is_comment_sent = Some(*sent),
        Action::SentFavoriteFilmFlag(sent) => data.is_favorite_film_sent = Some(*sent),
        Action::ErrorResponse(message) => data.error_response.clone_from(message),
        Action::RequireAuthorization(status) => state.user.authorization_status = *status,
    }
}
