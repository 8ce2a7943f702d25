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

//! What to Watch client core.
//!
//! The crate wires a REST backend into a central store: each function on
//! [`ApiActions`] makes one request and dispatches the outcome as an
//! [`Action`]. [`PreviewPlayer`] handles the muted hover previews shown on
//! film cards.

pub mod api;
pub mod api_action;
pub mod app_state;
pub mod config;
pub mod error_handle;
pub mod model;
pub mod preview;
pub mod store;

pub use api::{Api, RestClient};
pub use api_action::ApiActions;
pub use app_state::AppState;
pub use config::{ApiConfig, AppConfig};
pub use error_handle::ErrorHandler;
pub use preview::{HeadlessMedia, MediaHandle, PreviewPlayer, PreviewSource, START_CURRENT_TIME};
pub use store::{Action, State, Store};
