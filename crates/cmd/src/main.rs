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

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use snafu::{ResultExt, Whatever, whatever};
use wtw_common_telemetry::{logging, panic_hook};
use wtw_player::{
    ApiConfig, AppConfig, AppState, HeadlessMedia, PreviewPlayer,
    model::{AuthData, CommentData, FavoriteFilmData, FavoriteStatus, FilmId},
};
use wtw_store::DatabaseConfig;

mod build_info;

#[derive(Debug, Parser)]
#[clap(
name = "wtw",
about = "What to Watch command-line client",
author = build_info::AUTHOR,
version = build_info::FULL_VERSION)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    commands: Commands,
}

#[derive(Debug, Clone, Args)]
struct GlobalArgs {
    /// Backend base URL
    #[arg(long, env = "WTW_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, env = "WTW_TIMEOUT_MS", global = true)]
    timeout_ms: Option<u64>,

    /// SQLite file holding the session token
    #[arg(long, env = "WTW_DB", global = true)]
    db: Option<PathBuf>,

    /// Write rotated log files to this directory
    #[arg(long, env = "WTW_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "info,wtw_player=trace"
    #[arg(long, env = "WTW_LOG", global = true, value_parser = logging::parse_level)]
    log_level: Option<String>,
}

impl GlobalArgs {
    fn app_config(&self) -> AppConfig {
        let mut api = ApiConfig::default();
        if let Some(base_url) = &self.base_url {
            api.base_url.clone_from(base_url);
        }
        if let Some(ms) = self.timeout_ms {
            api.timeout = Duration::from_millis(ms);
        }

        let mut database = DatabaseConfig::default();
        if let Some(db) = &self.db {
            database.db_path.clone_from(db);
        }

        AppConfig::builder().api(api).database(database).build()
    }

    fn logging_options(&self) -> logging::LoggingOptions {
        logging::LoggingOptions {
            dir: self
                .log_dir
                .as_ref()
                .map(|d| d.to_string_lossy().into_owned())
                .unwrap_or_default(),
            level: Some(self.log_level.clone().unwrap_or_else(|| "warn".to_string())),
            // stdout carries command output
            append_stdout: false,
            ..Default::default()
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print build information
    Version,
    #[command(flatten)]
    Client(ClientCommands),
}

/// Commands that talk to the backend.
#[derive(Debug, Subcommand)]
enum ClientCommands {
    /// List all films
    Films,
    /// Show the promo film
    Promo,
    /// Show one film (clears any previous error first)
    Film(FilmArgs),
    /// List films similar to a film
    Similar(FilmArgs),
    /// List reviews of a film
    Comments(FilmArgs),
    /// Post a review
    Comment(CommentArgs),
    /// List favorite films (requires login)
    Favorites,
    /// Add or remove a favorite (requires login)
    Favorite(FavoriteArgs),
    /// Log in and persist the session token
    Login(LoginArgs),
    /// Log out and drop the session token
    Logout,
    /// Check whether the stored token is still accepted
    Status,
    /// Simulate a hover preview of a film card
    Preview(PreviewArgs),
}

#[derive(Debug, Clone, Args)]
struct FilmArgs {
    id: FilmId,
}

#[derive(Debug, Clone, Args)]
#[command(long_about = r"

Post a review for a film.
Examples:

wtw comment 3 --rating 8 --text 'Discerning travellers will luxuriate.'

")]
struct CommentArgs {
    id:     FilmId,
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    rating: u8,
    #[arg(long)]
    text:   String,
}

#[derive(Debug, Clone, Args)]
struct FavoriteArgs {
    id:     FilmId,
    /// Add to favorites (the default)
    #[arg(long, conflicts_with = "remove")]
    add:    bool,
    /// Remove from favorites
    #[arg(long)]
    remove: bool,
}

#[derive(Debug, Clone, Args)]
struct LoginArgs {
    #[arg(long)]
    email:    String,
    #[arg(long, env = "WTW_PASSWORD")]
    password: String,
}

#[derive(Debug, Clone, Args)]
struct PreviewArgs {
    id:      FilmId,
    /// How long the card stays hovered, in seconds
    #[arg(long, default_value_t = 3)]
    seconds: u64,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Whatever> {
    let out = serde_json::to_string_pretty(value).whatever_context("Failed to encode output")?;
    println!("{out}");
    Ok(())
}

#[derive(Serialize)]
struct PreviewReport {
    phase:    &'static str,
    playing:  bool,
    position: f64,
    loads:    u32,
    clip:     Option<String>,
}

impl PreviewReport {
    fn of(phase: &'static str, media: &HeadlessMedia) -> Self {
        Self {
            phase,
            playing: media.is_playing(),
            position: media.position().as_secs_f64(),
            loads: media.loads(),
            clip: media.source().map(|s| s.preview_video_link.clone()),
        }
    }
}

async fn run(commands: ClientCommands, state: &AppState) -> Result<(), Whatever> {
    let actions = state.actions();
    let store = state.store();

    match commands {
        ClientCommands::Films => {
            actions.fetch_films().await;
            print_json(&store.state().data.films)?;
        }
        ClientCommands::Promo => {
            actions.fetch_promo_film().await;
            print_json(&store.state().data.promo_film)?;
        }
        ClientCommands::Film(args) => {
            actions.fetch_selected_film(args.id).await;
            let data = store.state().data;
            if let Some(message) = data.error_response {
                whatever!("Film {} unavailable: {message}", args.id);
            }
            print_json(&data.selected_film)?;
        }
        ClientCommands::Similar(args) => {
            actions.fetch_similar_films(args.id).await;
            print_json(&store.state().data.similar_films)?;
        }
        ClientCommands::Comments(args) => {
            actions.fetch_selected_film_comments(args.id).await;
            print_json(&store.state().data.selected_film_comments)?;
        }
        ClientCommands::Comment(args) => {
            actions
                .post_selected_film_comment(
                    CommentData::builder()
                        .id(args.id)
                        .comment(args.text)
                        .rating(args.rating)
                        .build(),
                )
                .await;
            print_json(&store.state().data.is_comment_sent)?;
        }
        ClientCommands::Favorites => {
            actions.fetch_favorite_films_list().await;
            print_json(&store.state().data.favorite_films)?;
        }
        ClientCommands::Favorite(args) => {
            actions
                .post_favorite_film(FavoriteFilmData {
                    id:              args.id,
                    favorite_status: FavoriteStatus::from(args.add || !args.remove),
                })
                .await;
            print_json(&store.state().data.is_favorite_film_sent)?;
        }
        ClientCommands::Login(args) => {
            actions
                .login(
                    AuthData::builder()
                        .login(args.email)
                        .password(args.password)
                        .build(),
                )
                .await;
            print_json(&store.state().user)?;
        }
        ClientCommands::Logout => {
            actions.logout().await;
            print_json(&store.state().user)?;
        }
        ClientCommands::Status => {
            actions.check_authorization().await;
            print_json(&store.state().user)?;
        }
        ClientCommands::Preview(args) => {
            actions.fetch_selected_film(args.id).await;
            let Some(film) = store.state().data.selected_film else {
                whatever!("Film {} unavailable", args.id);
            };

            let mut player = PreviewPlayer::with_media(HeadlessMedia::new());
            let mut report = Vec::with_capacity(3);
            let mut record = |phase, player: &PreviewPlayer<HeadlessMedia>| {
                if let Some(media) = player.media() {
                    report.push(PreviewReport::of(phase, media));
                }
            };

            player.update(false, &film);
            record("idle", &player);

            player.update(true, &film);
            if let Some(media) = player.media_mut() {
                media.advance(Duration::from_secs(args.seconds));
            }
            record("hovered", &player);

            player.update(false, &film);
            record("left", &player);

            print_json(&report)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Whatever> {
    let cli = Cli::parse();

    let _guards = logging::init_global_logging("wtw", &cli.global.logging_options());
    panic_hook::set_panic_hook();
    tracing::info!("starting wtw {}", build_info::FULL_VERSION);

    let commands = match cli.commands {
        Commands::Version => return print_json(&build_info::BUILD_INFO),
        Commands::Client(commands) => commands,
    };

    let state = match AppState::new(cli.global.app_config()).await {
        Ok(state) => state,
        Err(e) => whatever!("Failed to initialize client: {e:#}"),
    };
    tracing::debug!(session = %state.session_id(), "client ready");

    run(commands, &state).await
}
