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

//! Muted preview playback for film cards.
//!
//! [`PreviewPlayer`] drives a [`MediaHandle`] from a single "should play"
//! signal. Playing resumes from the current position; stopping pauses,
//! rewinds to [`START_CURRENT_TIME`] and reloads so the poster shows again.

use std::time::Duration;

use tracing::trace;

use crate::model::Film;

/// Position a stopped preview rewinds to.
pub const START_CURRENT_TIME: Duration = Duration::ZERO;

/// What a preview element shows: the poster while idle, the clip while
/// playing. Previews are always muted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSource {
    pub poster_image:       String,
    pub preview_video_link: String,
    pub muted:              bool,
}

impl From<&Film> for PreviewSource {
    fn from(film: &Film) -> Self {
        Self {
            poster_image:       film.poster_image.clone(),
            preview_video_link: film.preview_video_link.clone(),
            muted:              true,
        }
    }
}

/// A media element the player can control. Failures stay inside the
/// implementation.
pub trait MediaHandle {
    fn set_source(&mut self, source: &PreviewSource);
    fn play(&mut self);
    fn pause(&mut self);
    fn set_current_time(&mut self, position: Duration);
    fn load(&mut self);
}

/// Keeps one media element in line with the `is_playing` signal.
#[derive(Debug)]
pub struct PreviewPlayer<M> {
    media:       Option<M>,
    source:      Option<PreviewSource>,
    /// Signal and clip URL of the last evaluation.
    last_inputs: Option<(bool, String)>,
}

impl<M> Default for PreviewPlayer<M> {
    fn default() -> Self {
        Self {
            media:       None,
            source:      None,
            last_inputs: None,
        }
    }
}

impl<M: MediaHandle> PreviewPlayer<M> {
    pub fn new() -> Self { Self::default() }

    pub fn with_media(media: M) -> Self {
        let mut player = Self::new();
        player.attach(media);
        player
    }

    /// Mount a media element. The next [`update`](Self::update) always
    /// evaluates against it.
    pub fn attach(&mut self, media: M) {
        self.media = Some(media);
        self.source = None;
        self.last_inputs = None;
    }

    /// Unmount the media element, handing it back.
    pub fn detach(&mut self) -> Option<M> {
        self.source = None;
        self.last_inputs = None;
        self.media.take()
    }

    pub const fn media(&self) -> Option<&M> { self.media.as_ref() }

    pub const fn media_mut(&mut self) -> Option<&mut M> { self.media.as_mut() }

    /// Re-evaluate playback for `film`.
    ///
    /// Does nothing while no element is attached, and nothing when neither
    /// `is_playing` nor the film's preview URL changed since the last call.
    pub fn update(&mut self, is_playing: bool, film: &Film) {
        let Some(media) = self.media.as_mut() else {
            return;
        };

        let source = PreviewSource::from(film);
        if self.source.as_ref() != Some(&source) {
            media.set_source(&source);
            self.source = Some(source);
        }

        let inputs = (is_playing, film.preview_video_link.clone());
        if self.last_inputs.as_ref() == Some(&inputs) {
            return;
        }
        self.last_inputs = Some(inputs);

        trace!(film = film.id, is_playing, "preview playback changed");
        if is_playing {
            media.play();
            return;
        }

        media.pause();
        media.set_current_time(START_CURRENT_TIME);
        media.load();
    }
}

/// In-process [`MediaHandle`] that only tracks element state. Useful where
/// no real decoder is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessMedia {
    source:   Option<PreviewSource>,
    playing:  bool,
    position: Duration,
    loads:    u32,
}

impl HeadlessMedia {
    pub fn new() -> Self { Self::default() }

    pub const fn source(&self) -> Option<&PreviewSource> { self.source.as_ref() }

    pub const fn is_playing(&self) -> bool { self.playing }

    pub const fn position(&self) -> Duration { self.position }

    /// How many times the buffer was reloaded.
    pub const fn loads(&self) -> u32 { self.loads }

    /// Let `elapsed` of wall time pass; moves the position only while playing.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.playing {
            self.position += elapsed;
        }
    }
}

impl MediaHandle for HeadlessMedia {
    fn set_source(&mut self, source: &PreviewSource) {
        let same_clip = self
            .source
            .as_ref()
            .is_some_and(|current| current.preview_video_link == source.preview_video_link);
        self.source = Some(source.clone());
        // Only a new clip drops the buffer; poster and mute changes keep playing.
        if !same_clip {
            self.playing = false;
            self.position = Duration::ZERO;
        }
    }

    fn play(&mut self) {
        if self.source.is_some() {
            self.playing = true;
        }
    }

    fn pause(&mut self) { self.playing = false; }

    fn set_current_time(&mut self, position: Duration) { self.position = position; }

    fn load(&mut self) {
        self.loads += 1;
        self.playing = false;
        self.position = Duration::ZERO;
    }
}
