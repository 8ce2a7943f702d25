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

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Method, RequestBuilder, Response};
use serde::{Deserialize, de::DeserializeOwned};
use snafu::ResultExt;
use tracing::{info, instrument};

use crate::{
    api::{
        Api,
        err::{BuildClientSnafu, DecodeSnafu, Result, StatusSnafu, TransportSnafu},
        routes::{self, ApiRoute},
    },
    config::ApiConfig,
    model::{
        AuthData, CommentData, CommentRequest, Comments, FavoriteFilmData, Film, FilmId, Films,
        LoginRequest, UserData,
    },
};

/// Shape of the backend's error responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// reqwest-backed [`Api`]. Cheap to clone; clones share the token.
#[derive(Clone)]
pub struct RestClient {
    inner: Arc<RestClientInner>,
}

struct RestClientInner {
    http:         reqwest::Client,
    base_url:     String,
    token_header: String,
    token:        RwLock<Option<String>>,
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.inner.base_url)
            .field("has_token", &self.inner.token.read().is_some())
            .finish()
    }
}

impl RestClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context(BuildClientSnafu)?;

        info!(base_url = %config.base_url, "Creating REST client");

        Ok(Self {
            inner: Arc::new(RestClientInner {
                http,
                base_url: config.base_url.trim_end_matches('/').to_owned(),
                token_header: config.token_header.clone(),
                token: RwLock::new(None),
            }),
        })
    }

    pub fn base_url(&self) -> &str { &self.inner.base_url }

    /// Token currently attached to requests.
    pub fn token(&self) -> Option<String> { self.inner.token.read().clone() }

    pub(crate) fn url(&self, path: &str) -> String { format!("{}{path}", self.inner.base_url) }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.inner.http.request(method, self.url(path));
        match self.inner.token.read().as_deref() {
            Some(token) => builder.header(self.inner.token_header.as_str(), token),
            None => builder,
        }
    }

    /// Send `request` and turn any non-2xx answer into [`Error::Status`].
    ///
    /// [`Error::Status`]: crate::api::err::Error::Status
    async fn execute(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.context(TransportSnafu {
            method: method.clone(),
            path,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body).map_or(body, |b| b.error);
        StatusSnafu {
            method,
            path,
            status,
            message,
        }
        .fail()
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .execute(Method::GET, path, self.request(Method::GET, path))
            .await?;
        response.json().await.context(DecodeSnafu { path })
    }
}

#[async_trait]
impl Api for RestClient {
    #[instrument(skip(self), err(Display))]
    async fn films(&self) -> Result<Films> { self.get_json(ApiRoute::Films.path()).await }

    #[instrument(skip(self), err(Display))]
    async fn promo_film(&self) -> Result<Film> { self.get_json(ApiRoute::PromoFilm.path()).await }

    #[instrument(skip(self), err(Display))]
    async fn check_authorization(&self) -> Result<()> {
        let path = ApiRoute::Login.path();
        self.execute(Method::GET, path, self.request(Method::GET, path))
            .await?;
        Ok(())
    }

    #[instrument(skip(self, auth), fields(login = %auth.login), err(Display))]
    async fn login(&self, auth: &AuthData) -> Result<UserData> {
        let path = ApiRoute::Login.path();
        let request = self
            .request(Method::POST, path)
            .json(&LoginRequest::from(auth));
        let response = self.execute(Method::POST, path, request).await?;
        response.json().await.context(DecodeSnafu { path })
    }

    #[instrument(skip(self), err(Display))]
    async fn logout(&self) -> Result<()> {
        let path = ApiRoute::Logout.path();
        self.execute(Method::DELETE, path, self.request(Method::DELETE, path))
            .await?;
        Ok(())
    }

    #[instrument(skip(self), err(Display))]
    async fn film(&self, id: FilmId) -> Result<Film> { self.get_json(&routes::film(id)).await }

    #[instrument(skip(self), err(Display))]
    async fn similar_films(&self, id: FilmId) -> Result<Films> {
        self.get_json(&routes::similar_films(id)).await
    }

    #[instrument(skip(self), err(Display))]
    async fn comments(&self, id: FilmId) -> Result<Comments> {
        self.get_json(&routes::comments(id)).await
    }

    #[instrument(skip(self, data), fields(id = data.id, rating = data.rating), err(Display))]
    async fn post_comment(&self, data: &CommentData) -> Result<()> {
        let path = routes::comments(data.id);
        let request = self
            .request(Method::POST, &path)
            .json(&CommentRequest::from(data));
        self.execute(Method::POST, &path, request).await?;
        Ok(())
    }

    #[instrument(skip(self), err(Display))]
    async fn favorite_films(&self) -> Result<Films> {
        self.get_json(ApiRoute::Favorite.path()).await
    }

    #[instrument(skip(self), err(Display))]
    async fn post_favorite(&self, data: &FavoriteFilmData) -> Result<()> {
        let path = routes::favorite(data.id, data.favorite_status);
        self.execute(Method::POST, &path, self.request(Method::POST, &path))
            .await?;
        Ok(())
    }

    async fn set_token(&self, token: Option<String>) { *self.inner.token.write() = token; }
}
