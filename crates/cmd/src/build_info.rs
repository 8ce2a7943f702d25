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
use shadow_rs::shadow;

shadow!(build);

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

const DIRTY_SUFFIX: &str = if build::GIT_CLEAN { "" } else { "-dirty" };

/// `PKG_VERSION` for release builds (`WTW_RELEASE` set at compile time),
/// otherwise suffixed with `-unofficial` and the commit when known.
#[allow(clippy::const_is_empty)]
pub const FULL_VERSION: &str = {
    if option_env!("WTW_RELEASE").is_some() {
        build::PKG_VERSION
    } else if build::SHORT_COMMIT.is_empty() {
        shadow_rs::formatcp!("{}-unofficial", build::PKG_VERSION)
    } else {
        shadow_rs::formatcp!(
            "{}-unofficial+{}{}",
            build::PKG_VERSION,
            build::SHORT_COMMIT,
            DIRTY_SUFFIX
        )
    }
};

/// What `wtw version` reports.
#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub version:      &'static str,
    pub branch:       &'static str,
    pub commit:       &'static str,
    pub build_time:   &'static str,
    pub rust_version: &'static str,
}

pub const BUILD_INFO: BuildInfo = BuildInfo {
    version:      FULL_VERSION,
    branch:       build::BRANCH,
    commit:       build::SHORT_COMMIT,
    build_time:   build::BUILD_TIME,
    rust_version: build::RUST_VERSION,
};
