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

//! Wire types exchanged with the What to Watch backend.
//!
//! Everything here is replaced wholesale on each fetch; the client never
//! edits a film or comment in place.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

pub type FilmId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id:                 FilmId,
    pub name:               String,
    pub poster_image:       String,
    pub preview_image:      String,
    pub background_image:   String,
    pub background_color:   String,
    pub video_link:         String,
    pub preview_video_link: String,
    pub description:        String,
    pub rating:             f32,
    pub scores_count:       u32,
    pub director:           String,
    pub starring:           Vec<String>,
    /// Minutes.
    pub run_time:           u32,
    pub genre:              String,
    pub released:           u16,
    pub is_favorite:        bool,
}

pub type Films = Vec<Film>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub id:   u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id:      u32,
    pub user:    CommentAuthor,
    pub rating:  u8,
    pub comment: String,
    pub date:    jiff::Timestamp,
}

pub type Comments = Vec<Comment>;

/// Credentials typed in by the user.
#[derive(Debug, Clone, bon::Builder)]
#[builder(on(String, into))]
pub struct AuthData {
    pub login:    String,
    pub password: String,
}

/// Body of `POST /login`.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email:    &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a AuthData> for LoginRequest<'a> {
    fn from(auth: &'a AuthData) -> Self {
        Self {
            email:    &auth.login,
            password: &auth.password,
        }
    }
}

/// Answer to a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id:         u32,
    pub email:      String,
    pub name:       String,
    pub avatar_url: String,
    pub token:      String,
}

/// A review to post for film `id`.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(on(String, into))]
pub struct CommentData {
    pub id:      FilmId,
    pub comment: String,
    pub rating:  u8,
}

/// Body of `POST /comments/{id}`.
#[derive(Debug, Serialize)]
pub(crate) struct CommentRequest<'a> {
    pub comment: &'a str,
    pub rating:  u8,
}

impl<'a> From<&'a CommentData> for CommentRequest<'a> {
    fn from(data: &'a CommentData) -> Self {
        Self {
            comment: &data.comment,
            rating:  data.rating,
        }
    }
}

/// Path segment of `POST /favorite/{id}/{status}`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum FavoriteStatus {
    Remove = 0,
    Add = 1,
}

impl From<bool> for FavoriteStatus {
    fn from(add: bool) -> Self { if add { Self::Add } else { Self::Remove } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteFilmData {
    pub id:              FilmId,
    pub favorite_status: FavoriteStatus,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationStatus {
    Auth,
    NoAuth,
    #[default]
    Unknown,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn film(id: FilmId) -> Film {
        Film {
            id,
            name: format!("Film {id}"),
            poster_image: format!("https://example.com/poster/{id}.jpg"),
            preview_image: format!("https://example.com/preview/{id}.jpg"),
            background_image: format!("https://example.com/bg/{id}.jpg"),
            background_color: "#A6B7AC".to_string(),
            video_link: format!("https://example.com/video/{id}.mp4"),
            preview_video_link: format!("https://example.com/preview/{id}.mp4"),
            description: "A film.".to_string(),
            rating: 8.1,
            scores_count: 240,
            director: "Wes Anderson".to_string(),
            starring: vec!["Bill Murray".to_string(), "Edward Norton".to_string()],
            run_time: 99,
            genre: "Comedy".to_string(),
            released: 2014,
            is_favorite: false,
        }
    }

    pub fn comment(id: u32) -> Comment {
        Comment {
            id,
            user: CommentAuthor {
                id:   4,
                name: "Kate Muir".to_string(),
            },
            rating: 8,
            comment: "Discerning travellers and Wes Anderson fans will luxuriate.".to_string(),
            date: "2019-05-08T14:13:56.569Z".parse().unwrap(),
        }
    }
}
