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

//! Backend paths, relative to the configured base URL.

use crate::model::{FavoriteStatus, FilmId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::IntoStaticStr, strum_macros::EnumIter)]
pub enum ApiRoute {
    #[strum(serialize = "/films")]
    Films,
    #[strum(serialize = "/promo")]
    PromoFilm,
    #[strum(serialize = "/login")]
    Login,
    #[strum(serialize = "/logout")]
    Logout,
    #[strum(serialize = "/similar")]
    Similar,
    #[strum(serialize = "/comments")]
    Comments,
    #[strum(serialize = "/favorite")]
    Favorite,
}

impl ApiRoute {
    pub fn path(self) -> &'static str { self.into() }
}

/// `/films/{id}`
pub fn film(id: FilmId) -> String { format!("{}/{id}", ApiRoute::Films.path()) }

/// `/films/{id}/similar`
pub fn similar_films(id: FilmId) -> String {
    format!("{}{}", film(id), ApiRoute::Similar.path())
}

/// `/comments/{id}`
pub fn comments(id: FilmId) -> String { format!("{}/{id}", ApiRoute::Comments.path()) }

/// `/favorite/{id}/{status}`
pub fn favorite(id: FilmId, status: FavoriteStatus) -> String {
    format!("{}/{id}/{}", ApiRoute::Favorite.path(), u8::from(status))
}
