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

use std::time::Duration;

use smart_default::SmartDefault;
use wtw_store::DatabaseConfig;

pub const DEFAULT_BASE_URL: &str = "https://8.react.pages.academy/wtw";
pub const DEFAULT_TOKEN_HEADER: &str = "X-Token";

/// Application configuration
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct AppConfig {
    /// Local database holding the session token
    #[builder(default)]
    pub database: DatabaseConfig,
    /// Backend connection
    #[builder(default)]
    pub api:      ApiConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, SmartDefault, bon::Builder)]
#[builder(on(String, into))]
pub struct ApiConfig {
    /// Base URL every route is appended to
    #[default(_code = "DEFAULT_BASE_URL.to_owned()")]
    #[builder(default = DEFAULT_BASE_URL.to_owned())]
    pub base_url: String,

    /// Per-request timeout (default: 5 seconds)
    #[default(_code = "Duration::from_secs(5)")]
    #[builder(default = Duration::from_secs(5))]
    pub timeout: Duration,

    /// Header carrying the session token
    #[default(_code = "DEFAULT_TOKEN_HEADER.to_owned()")]
    #[builder(default = DEFAULT_TOKEN_HEADER.to_owned())]
    pub token_header: String,
}
