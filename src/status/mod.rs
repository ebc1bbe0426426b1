//! Status Module
//!
//! Cached server status and the version-gated attributes built on it.
//!
//! ## Responsibilities
//! - Hold the last `status` reply as a flat key → value map
//! - Gate each attribute on the server's protocol version
//! - Serve getters from the cache, with no round trip
//! - Write through setters and echo the written value into the cache
//!
//! Setters trust the local echo and never re-read the server, so a server
//! that clamps a value silently leaves the cache out of step until the next
//! [`Client::refresh_status`](crate::Client::refresh_status).

mod attribute;
mod access;

pub use attribute::{
    lookup, AttributeSpec, PlayState, ATTRIBUTES, AUDIO, BITRATE, CONSUME, CROSSFADE, ELAPSED,
    ERROR, MIX_RAMP_DB, MIX_RAMP_DELAY, NEXT_SONG, NEXT_SONG_ID, PLAYLIST, PLAYLIST_LENGTH,
    RANDOM, REPEAT, SINGLE, SONG, SONG_ID, STATE, TIME, UPDATING_DB, VOLUME,
};

use std::collections::HashMap;

/// Last known server status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    fields: HashMap<String, String>,
}

impl StatusSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from the data lines of a `status` reply
    pub fn from_lines(lines: Vec<(String, String)>) -> Self {
        Self {
            fields: lines.into_iter().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
