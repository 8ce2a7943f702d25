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

//! Scripted [`Api`] for unit tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::{Method, StatusCode};

use crate::{
    api::{
        Api,
        err::{Error, Result, StatusSnafu},
    },
    model::{AuthData, CommentData, Comments, FavoriteFilmData, Film, FilmId, Films, UserData},
};

/// A canned answer for one call.
pub enum Reply {
    Films(Films),
    Film(Film),
    Comments(Comments),
    User(UserData),
    Empty,
    Fail(StatusCode, &'static str),
}

/// Answers calls from a queue and records what was asked.
#[derive(Default)]
pub struct StubApi {
    replies: Mutex<VecDeque<Reply>>,
    calls:   Mutex<Vec<String>>,
    token:   Mutex<Option<String>>,
}

impl StubApi {
    pub fn with(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> { self.calls.lock().clone() }

    pub fn token(&self) -> Option<String> { self.token.lock().clone() }

    fn next(&self, method: Method, path: String) -> Result<Reply> {
        self.calls.lock().push(format!("{method} {path}"));
        match self.replies.lock().pop_front() {
            Some(Reply::Fail(status, message)) => StatusSnafu {
                method,
                path,
                status,
                message,
            }
            .fail(),
            Some(reply) => Ok(reply),
            None => panic!("unexpected call {method} {path}"),
        }
    }
}

fn mismatch(what: &str) -> Error {
    StatusSnafu {
        method:  Method::GET,
        path:    what,
        status:  StatusCode::IM_A_TEAPOT,
        message: "stub reply has the wrong shape",
    }
    .build()
}

#[async_trait]
impl Api for StubApi {
    async fn films(&self) -> Result<Films> {
        match self.next(Method::GET, "/films".into())? {
            Reply::Films(films) => Ok(films),
            _ => Err(mismatch("films")),
        }
    }

    async fn promo_film(&self) -> Result<Film> {
        match self.next(Method::GET, "/promo".into())? {
            Reply::Film(film) => Ok(film),
            _ => Err(mismatch("promo")),
        }
    }

    async fn check_authorization(&self) -> Result<()> {
        self.next(Method::GET, "/login".into()).map(|_| ())
    }

    async fn login(&self, _auth: &AuthData) -> Result<UserData> {
        match self.next(Method::POST, "/login".into())? {
            Reply::User(user) => Ok(user),
            _ => Err(mismatch("login")),
        }
    }

    async fn logout(&self) -> Result<()> { self.next(Method::DELETE, "/logout".into()).map(|_| ()) }

    async fn film(&self, id: FilmId) -> Result<Film> {
        match self.next(Method::GET, format!("/films/{id}"))? {
            Reply::Film(film) => Ok(film),
            _ => Err(mismatch("film")),
        }
    }

    async fn similar_films(&self, id: FilmId) -> Result<Films> {
        match self.next(Method::GET, format!("/films/{id}/similar"))? {
            Reply::Films(films) => Ok(films),
            _ => Err(mismatch("similar")),
        }
    }

    async fn comments(&self, id: FilmId) -> Result<Comments> {
        match self.next(Method::GET, format!("/comments/{id}"))? {
            Reply::Comments(comments) => Ok(comments),
            _ => Err(mismatch("comments")),
        }
    }

    async fn post_comment(&self, data: &CommentData) -> Result<()> {
        self.next(Method::POST, format!("/comments/{}", data.id))
            .map(|_| ())
    }

    async fn favorite_films(&self) -> Result<Films> {
        match self.next(Method::GET, "/favorite".into())? {
            Reply::Films(films) => Ok(films),
            _ => Err(mismatch("favorite")),
        }
    }

    async fn post_favorite(&self, data: &FavoriteFilmData) -> Result<()> {
        self.next(
            Method::POST,
            format!("/favorite/{}/{}", data.id, u8::from(data.favorite_status)),
        )
        .map(|_| ())
    }

    async fn set_token(&self, token: Option<String>) { *self.token.lock() = token; }
}
