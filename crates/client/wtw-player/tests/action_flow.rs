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

//! Drives the public action API against an in-memory backend.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::{Method, StatusCode};
use tempfile::TempDir;
use wtw_player::{
    Api, ApiActions, Store,
    api::err::{Result, StatusSnafu},
    model::{
        AuthData, AuthorizationStatus, CommentData, Comments, FavoriteFilmData, FavoriteStatus,
        Film, FilmId, Films, UserData,
    },
};
use wtw_store::{DBStore, DatabaseConfig};

/// Backend that accepts one password and keeps favorites in memory.
#[derive(Default)]
struct MemoryBackend {
    films:     Films,
    favorites: Mutex<Vec<FilmId>>,
    token:     Mutex<Option<String>>,
    offline:   AtomicBool,
}

impl MemoryBackend {
    fn fail<T>(&self, method: Method, path: &str, status: StatusCode) -> Result<T> {
        StatusSnafu {
            method,
            path,
            status,
            message: status.canonical_reason().unwrap_or_default(),
        }
        .fail()
    }

    fn authorized(&self) -> bool { self.token.lock().as_deref() == Some("secret-token") }
}

#[async_trait]
impl Api for MemoryBackend {
    async fn films(&self) -> Result<Films> {
        if self.offline.load(Ordering::SeqCst) {
            return self.fail(Method::GET, "/films", StatusCode::SERVICE_UNAVAILABLE);
        }
        Ok(self.films.clone())
    }

    async fn promo_film(&self) -> Result<Film> { Ok(self.films[0].clone()) }

    async fn check_authorization(&self) -> Result<()> {
        if self.authorized() {
            Ok(())
        } else {
            self.fail(Method::GET, "/login", StatusCode::UNAUTHORIZED)
        }
    }

    async fn login(&self, auth: &AuthData) -> Result<UserData> {
        if auth.password != "pa55word" {
            return self.fail(Method::POST, "/login", StatusCode::BAD_REQUEST);
        }
        Ok(UserData {
            id:         1,
            email:      auth.login.clone(),
            name:       "viewer".to_string(),
            avatar_url: "img/1.png".to_string(),
            token:      "secret-token".to_string(),
        })
    }

    async fn logout(&self) -> Result<()> { Ok(()) }

    async fn film(&self, id: FilmId) -> Result<Film> {
        match self.films.iter().find(|f| f.id == id) {
            Some(film) => Ok(film.clone()),
            None => self.fail(Method::GET, &format!("/films/{id}"), StatusCode::NOT_FOUND),
        }
    }

    async fn similar_films(&self, id: FilmId) -> Result<Films> {
        Ok(self.films.iter().filter(|f| f.id != id).cloned().collect())
    }

    async fn comments(&self, _id: FilmId) -> Result<Comments> { Ok(Vec::new()) }

    async fn post_comment(&self, data: &CommentData) -> Result<()> {
        if self.authorized() {
            Ok(())
        } else {
            self.fail(
                Method::POST,
                &format!("/comments/{}", data.id),
                StatusCode::UNAUTHORIZED,
            )
        }
    }

    async fn favorite_films(&self) -> Result<Films> {
        let favorites = self.favorites.lock().clone();
        Ok(self
            .films
            .iter()
            .filter(|f| favorites.contains(&f.id))
            .cloned()
            .collect())
    }

    async fn post_favorite(&self, data: &FavoriteFilmData) -> Result<()> {
        if !self.authorized() {
            return self.fail(Method::POST, "/favorite", StatusCode::UNAUTHORIZED);
        }
        let mut favorites = self.favorites.lock();
        favorites.retain(|id| *id != data.id);
        if data.favorite_status == FavoriteStatus::Add {
            favorites.push(data.id);
        }
        Ok(())
    }

    async fn set_token(&self, token: Option<String>) { *self.token.lock() = token; }
}

fn film(id: FilmId) -> Film {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": format!("Film {id}"),
        "posterImage": "poster.jpg",
        "previewImage": "preview.jpg",
        "backgroundImage": "bg.jpg",
        "backgroundColor": "#000000",
        "videoLink": "video.mp4",
        "previewVideoLink": format!("preview-{id}.mp4"),
        "description": "",
        "rating": 5.5,
        "scoresCount": 10,
        "director": "Someone",
        "starring": [],
        "runTime": 90,
        "genre": "Drama",
        "released": 2001,
        "isFavorite": false
    }))
    .unwrap()
}

async fn setup(dir: &TempDir) -> (ApiActions, Arc<MemoryBackend>) {
    let db = DBStore::new(
        &DatabaseConfig::builder()
            .db_path(dir.path().join("flow.db"))
            .build(),
    )
    .await
    .unwrap();
    let backend = Arc::new(MemoryBackend {
        films: vec![film(1), film(2), film(3)],
        ..Default::default()
    });
    let actions = ApiActions::new(backend.clone(), Store::new(), db.token_store());
    (actions, backend)
}

#[tokio::test]
async fn browse_login_and_favorite() {
    let dir = TempDir::new().unwrap();
    let (actions, backend) = setup(&dir).await;
    let store = actions.store().clone();

    actions.check_authorization().await;
    assert_eq!(
        store.state().user.authorization_status,
        AuthorizationStatus::NoAuth
    );

    tokio::join!(actions.fetch_films(), actions.fetch_promo_film());
    let state = store.state();
    assert_eq!(state.data.films.len(), 3);
    assert_eq!(state.data.promo_film.map(|f| f.id), Some(1));

    actions
        .post_favorite_film(FavoriteFilmData {
            id:              2,
            favorite_status: FavoriteStatus::Add,
        })
        .await;
    assert_eq!(store.state().data.is_favorite_film_sent, Some(false));

    actions
        .login(
            AuthData::builder()
                .login("viewer@example.com")
                .password("pa55word")
                .build(),
        )
        .await;
    assert_eq!(
        store.state().user.authorization_status,
        AuthorizationStatus::Auth
    );
    assert!(backend.authorized());

    actions
        .post_favorite_film(FavoriteFilmData {
            id:              2,
            favorite_status: FavoriteStatus::Add,
        })
        .await;
    actions.fetch_favorite_films_list().await;
    let state = store.state();
    assert_eq!(state.data.is_favorite_film_sent, Some(true));
    assert_eq!(
        state
            .data
            .favorite_films
            .iter()
            .map(|f| f.id)
            .collect::<Vec<_>>(),
        vec![2]
    );

    actions
        .post_selected_film_comment(
            CommentData::builder()
                .id(2)
                .comment("Worth a second watch.")
                .rating(8)
                .build(),
        )
        .await;
    assert_eq!(store.state().data.is_comment_sent, Some(true));

    actions.logout().await;
    assert_eq!(
        store.state().user.authorization_status,
        AuthorizationStatus::NoAuth
    );
    assert!(!backend.authorized());
}

#[tokio::test]
async fn film_page_with_missing_film() {
    let dir = TempDir::new().unwrap();
    let (actions, _backend) = setup(&dir).await;
    let mut events = actions.store().subscribe();

    actions.fetch_selected_film(42).await;
    actions.fetch_selected_film(3).await;
    actions.fetch_similar_films(3).await;

    let state = actions.store().state();
    assert_eq!(state.data.error_response, None);
    assert_eq!(state.data.selected_film.map(|f| f.id), Some(3));
    assert_eq!(
        state
            .data
            .similar_films
            .iter()
            .map(|f| f.id)
            .collect::<Vec<_>>(),
        vec![1, 2]
    );

    let names: Vec<String> = std::iter::from_fn(|| events.try_recv().ok())
        .map(|action| action.as_ref().to_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "data/getErrorResponse",
            "data/getErrorResponse",
            "data/getErrorResponse",
            "data/loadSelectedFilm",
            "data/loadSimilarFilms",
        ]
    );
}

#[tokio::test]
async fn offline_backend_leaves_state_untouched() {
    let dir = TempDir::new().unwrap();
    let (actions, backend) = setup(&dir).await;
    backend.offline.store(true, Ordering::SeqCst);
    let mut events = actions.store().subscribe();

    actions.fetch_films().await;

    assert!(!actions.store().state().data.is_data_loaded);
    assert_eq!(actions.error_handler().handled_count(), 1);
    assert!(matches!(
        events.try_recv(),
        Err(tokio::sync::broadcast::error::TryRecvError::Empty)
    ));
}
