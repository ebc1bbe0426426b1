//! Attribute registry
//!
//! Static table of the status fields a client can read, and write where the
//! server offers a command for it.

use std::fmt;
use std::str::FromStr;

use crate::error::MpdError;
use crate::protocol::ProtocolVersion;

/// Available on every server
const ANY: ProtocolVersion = ProtocolVersion::new(0, 0, 0);

/// Registration of one status attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    /// Friendly name (`playlist_length`)
    pub name: &'static str,

    /// Key in the `status` reply (`playlistlength`)
    pub key: &'static str,

    /// Command that writes the attribute; `None` for read-only attributes
    pub set_command: Option<&'static str>,

    /// Oldest protocol version exposing the attribute
    pub min_version: ProtocolVersion,
}

impl AttributeSpec {
    const fn read_only(name: &'static str, key: &'static str) -> Self {
        Self {
            name,
            key,
            set_command: None,
            min_version: ANY,
        }
    }

    const fn writable(name: &'static str, key: &'static str, set_command: &'static str) -> Self {
        Self {
            name,
            key,
            set_command: Some(set_command),
            min_version: ANY,
        }
    }

    const fn since(self, version: ProtocolVersion) -> Self {
        Self {
            min_version: version,
            ..self
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.set_command.is_none()
    }
}

pub const VOLUME: AttributeSpec = AttributeSpec::writable("volume", "volume", "setvol");
pub const REPEAT: AttributeSpec = AttributeSpec::writable("repeat", "repeat", "repeat");
pub const RANDOM: AttributeSpec = AttributeSpec::writable("random", "random", "random");
pub const SINGLE: AttributeSpec =
    AttributeSpec::writable("single", "single", "single").since(ProtocolVersion::new(0, 15, 0));
pub const CONSUME: AttributeSpec =
    AttributeSpec::writable("consume", "consume", "consume").since(ProtocolVersion::new(0, 15, 0));
pub const PLAYLIST: AttributeSpec = AttributeSpec::read_only("playlist", "playlist");
pub const PLAYLIST_LENGTH: AttributeSpec =
    AttributeSpec::read_only("playlist_length", "playlistlength");
pub const STATE: AttributeSpec = AttributeSpec::read_only("state", "state");
pub const SONG: AttributeSpec = AttributeSpec::read_only("song", "song");
pub const SONG_ID: AttributeSpec = AttributeSpec::read_only("song_id", "songid");
pub const NEXT_SONG: AttributeSpec = AttributeSpec::read_only("next_song", "nextsong");
pub const NEXT_SONG_ID: AttributeSpec = AttributeSpec::read_only("next_song_id", "nextsongid");
pub const TIME: AttributeSpec = AttributeSpec::read_only("time", "time");
pub const ELAPSED: AttributeSpec =
    AttributeSpec::read_only("elapsed", "elapsed").since(ProtocolVersion::new(0, 16, 0));
pub const BITRATE: AttributeSpec = AttributeSpec::read_only("bitrate", "bitrate");
pub const CROSSFADE: AttributeSpec = AttributeSpec::writable("crossfade", "xfade", "crossfade");
pub const MIX_RAMP_DB: AttributeSpec =
    AttributeSpec::writable("mix_ramp_db", "mixrampdb", "mixrampdb");
pub const MIX_RAMP_DELAY: AttributeSpec =
    AttributeSpec::writable("mix_ramp_delay", "mixrampdelay", "mixrampdelay");
pub const AUDIO: AttributeSpec = AttributeSpec::read_only("audio", "audio");
pub const UPDATING_DB: AttributeSpec = AttributeSpec::read_only("updating_db", "updating_db");
pub const ERROR: AttributeSpec = AttributeSpec::read_only("error", "error");

/// Every registered attribute
pub static ATTRIBUTES: &[AttributeSpec] = &[
    VOLUME,
    REPEAT,
    RANDOM,
    SINGLE,
    CONSUME,
    PLAYLIST,
    PLAYLIST_LENGTH,
    STATE,
    SONG,
    SONG_ID,
    NEXT_SONG,
    NEXT_SONG_ID,
    TIME,
    ELAPSED,
    BITRATE,
    CROSSFADE,
    MIX_RAMP_DB,
    MIX_RAMP_DELAY,
    AUDIO,
    UPDATING_DB,
    ERROR,
];

/// Find an attribute by friendly name
pub fn lookup(name: &str) -> Option<&'static AttributeSpec> {
    ATTRIBUTES.iter().find(|spec| spec.name == name)
}

/// Playback state reported in `state:`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Play,
    Pause,
    Stop,
}

impl FromStr for PlayState {
    type Err = MpdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play" => Ok(PlayState::Play),
            "pause" => Ok(PlayState::Pause),
            "stop" => Ok(PlayState::Stop),
            other => Err(MpdError::InvalidValue {
                attribute: STATE.name.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayState::Play => "play",
            PlayState::Pause => "pause",
            PlayState::Stop => "stop",
        })
    }
}
