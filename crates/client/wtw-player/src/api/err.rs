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

use reqwest::StatusCode;
use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to build HTTP client"))]
    BuildClient {
        source: reqwest::Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },
    #[snafu(display("Request {method} {path} failed"))]
    Transport {
        method: reqwest::Method,
        path:   String,
        source: reqwest::Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },
    #[snafu(display("{method} {path} returned {status}: {message}"))]
    Status {
        method:  reqwest::Method,
        path:    String,
        status:  StatusCode,
        message: String,
        #[snafu(implicit)]
        loc:     snafu::Location,
    },
    #[snafu(display("Failed to decode response of {path}"))]
    Decode {
        path:   String,
        source: reqwest::Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },
}

impl Error {
    /// HTTP status of the response, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for showing to a user: the backend's own explanation
    /// when it gave one, the error display otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}
