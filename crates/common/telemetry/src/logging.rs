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

use std::{
    env,
    io::IsTerminal,
    str::FromStr,
    sync::{Arc, Mutex, Once},
};

use bon::Builder;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, de};
use smart_default::SmartDefault;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, filter, layer::SubscriberExt, registry::LookupSpan,
};

/// Deserializes a string value, using `Default::default()` if the string is
/// empty.
///
/// Configuration files often carry `log_format = ""`; both a missing value and
/// an empty string fall back to the default format.
pub fn empty_string_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        Ok(T::default())
    } else {
        T::deserialize(de::value::StrDeserializer::new(&s)).map_err(|e: de::value::Error| {
            de::Error::custom(format!("invalid value, expect empty string, err: {e}"))
        })
    }
}

/// The default directory name for log files when file logging is enabled.
pub const DEFAULT_LOGGING_DIR: &str = "logs";

/// Default log level filter when neither `LoggingOptions::level` nor
/// `RUST_LOG` is set.
const DEFAULT_LOG_TARGETS: &str = "info";

/// Configuration options for the logging system.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, SmartDefault, Builder)]
#[serde(default)]
#[builder(on(String, into))]
pub struct LoggingOptions {
    /// Directory for rotated log files. Empty means stdout only.
    #[default = ""]
    #[builder(default)]
    pub dir: String,

    /// Level filter, e.g. `"info"` or `"debug,hyper=warn"`. Falls back to
    /// `RUST_LOG`, then `info`.
    pub level: Option<String>,

    /// Output format for every layer.
    #[serde(default, deserialize_with = "empty_string_as_default")]
    #[builder(default)]
    pub log_format: LogFormat,

    /// Maximum number of rotated files kept per log stream (hourly rotation,
    /// so the default keeps 30 days).
    #[default = 720]
    #[builder(default = 720)]
    pub max_log_files: usize,

    /// Whether to also write to stdout.
    #[default = true]
    #[builder(default = true)]
    pub append_stdout: bool,
}

/// Available log output formats.
#[derive(
    Clone, Debug, Copy, PartialEq, Eq, Serialize, Deserialize, Default, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per event, with span context.
    Json,

    /// Human-readable text.
    #[default]
    Text,
}

/// Initialize logging for unit tests.
///
/// Writes to `UNITTEST_LOG_DIR` (default `/tmp/__unittest_logs`) at
/// `UNITTEST_LOG_LEVEL`. Safe to call from every test; only the first call
/// installs the subscriber.
pub fn init_default_ut_logging() {
    static START: Once = Once::new();

    START.call_once(|| {
        let mut g = GLOBAL_UT_LOG_GUARD
            .as_ref()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let dir =
            env::var("UNITTEST_LOG_DIR").unwrap_or_else(|_| "/tmp/__unittest_logs".to_string());

        let level = env::var("UNITTEST_LOG_LEVEL").unwrap_or_else(|_| {
            "debug,hyper=warn,reqwest=warn,sqlx=warn,h2=info,rustls=info".to_string()
        });
        let opts = LoggingOptions {
            dir: dir.clone(),
            level: Some(level),
            append_stdout: false,
            ..Default::default()
        };
        *g = Some(init_global_logging("unittest", &opts));

        tracing::info!("logs dir = {}", dir);
    });
}

/// Check a level filter the way [`init_global_logging`] parses it, so bad
/// user input can be rejected before logging is installed.
pub fn parse_level(level: &str) -> Result<String, <filter::Targets as FromStr>::Err> {
    level.parse::<filter::Targets>()?;
    Ok(level.to_owned())
}

static GLOBAL_UT_LOG_GUARD: Lazy<Arc<Mutex<Option<Vec<WorkerGuard>>>>> =
    Lazy::new(|| Arc::new(Mutex::new(None)));

/// Initialize the global tracing subscriber.
///
/// Layers installed depending on `opts`:
///
/// - stdout (if `append_stdout`)
/// - `<dir>/<app_name>.*` with hourly rotation (if `dir` is set)
/// - `<dir>/<app_name>-err.*` holding only errors (if `dir` is set)
///
/// Only the first call has any effect. Panics if the log directory cannot be
/// created or the level string does not parse.
pub fn init_global_logging(app_name: &str, opts: &LoggingOptions) -> Vec<WorkerGuard> {
    static START: Once = Once::new();
    let mut guards = vec![];

    START.call_once(|| {
        // Another logger may already be installed by a host process.
        let _ = LogTracer::init();

        let stdout_logging_layer = if opts.append_stdout {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
            guards.push(guard);

            if opts.log_format == LogFormat::Json {
                Some(
                    tracing_subscriber::fmt::Layer::new()
                        .json()
                        .with_writer(writer)
                        .with_ansi(std::io::stdout().is_terminal())
                        .with_current_span(true)
                        .with_span_list(true)
                        .boxed(),
                )
            } else {
                Some(
                    tracing_subscriber::fmt::Layer::new()
                        .with_writer(writer)
                        .with_ansi(std::io::stdout().is_terminal())
                        .boxed(),
                )
            }
        } else {
            None
        };

        let file_logging_layer = if opts.dir.is_empty() {
            None
        } else {
            let (writer, guard) =
                tracing_appender::non_blocking(rolling_appender(opts, app_name.to_string()));
            guards.push(guard);
            Some(file_layer(opts.log_format, writer))
        };

        let err_file_logging_layer = if opts.dir.is_empty() {
            None
        } else {
            let (writer, guard) =
                tracing_appender::non_blocking(rolling_appender(opts, format!("{app_name}-err")));
            guards.push(guard);
            Some(
                file_layer(opts.log_format, writer)
                    .with_filter(filter::LevelFilter::ERROR)
                    .boxed(),
            )
        };

        let filter = opts
            .level
            .as_deref()
            .or(env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
            .unwrap_or(DEFAULT_LOG_TARGETS)
            .parse::<filter::Targets>()
            .expect("error parsing log level string");

        let subscriber = Registry::default()
            .with(filter)
            .with(stdout_logging_layer)
            .with(file_logging_layer)
            .with(err_file_logging_layer);

        tracing::subscriber::set_global_default(subscriber)
            .expect("error setting global tracing subscriber");
    });

    guards
}

fn rolling_appender(opts: &LoggingOptions, prefix: String) -> RollingFileAppender {
    RollingFileAppender::builder()
        .rotation(Rotation::HOURLY)
        .filename_prefix(prefix)
        .max_log_files(opts.max_log_files)
        .build(&opts.dir)
        .unwrap_or_else(|e| {
            panic!(
                "initializing rolling file appender at {} failed: {}",
                &opts.dir, e
            )
        })
}

fn file_layer<S>(
    format: LogFormat,
    writer: tracing_appender::non_blocking::NonBlocking,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    if format == LogFormat::Json {
        tracing_subscriber::fmt::Layer::new()
            .json()
            .with_writer(writer)
            .with_ansi(false)
            .with_current_span(true)
            .with_span_list(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::Layer::new()
            .with_writer(writer)
            .with_ansi(false)
            .boxed()
    }
}
