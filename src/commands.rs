//! Command registry
//!
//! Maps friendly command names to wire names. Arguments are not validated
//! here; they go straight to the encoder, and the reply shape comes from the
//! generic record grouping.

use std::borrow::Cow;

/// One registered command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Friendly name (`current_song`)
    pub name: &'static str,

    /// Wire name when it is not simply `name` without underscores
    pub wire: Option<&'static str>,
}

impl CommandSpec {
    const fn new(name: &'static str) -> Self {
        Self { name, wire: None }
    }

    const fn wired(name: &'static str, wire: &'static str) -> Self {
        Self {
            name,
            wire: Some(wire),
        }
    }

    /// Name sent on the wire (`current_song` → `currentsong`)
    pub fn wire_name(&self) -> Cow<'static, str> {
        match self.wire {
            Some(wire) => Cow::Borrowed(wire),
            None if self.name.contains('_') => Cow::Owned(self.name.replace('_', "")),
            None => Cow::Borrowed(self.name),
        }
    }
}

/// Every registered command
pub static COMMANDS: &[CommandSpec] = &[
    // Status
    CommandSpec::new("clear_error"),
    CommandSpec::new("current_song"),
    CommandSpec::new("stats"),
    // Playback
    CommandSpec::new("next"),
    CommandSpec::new("pause"),
    CommandSpec::new("play"),
    CommandSpec::new("play_id"),
    CommandSpec::wired("prev", "previous"),
    CommandSpec::new("previous"),
    CommandSpec::new("seek"),
    CommandSpec::new("seek_id"),
    CommandSpec::new("stop"),
    // Current playlist
    CommandSpec::new("add"),
    CommandSpec::new("add_id"),
    CommandSpec::new("clear"),
    CommandSpec::new("delete"),
    CommandSpec::new("delete_id"),
    CommandSpec::new("move"),
    CommandSpec::new("move_id"),
    CommandSpec::new("playlist_find"),
    CommandSpec::new("playlist_id"),
    CommandSpec::new("playlist_info"),
    CommandSpec::new("playlist_search"),
    CommandSpec::new("pl_changes"),
    CommandSpec::new("pl_changes_pos_id"),
    CommandSpec::new("shuffle"),
    CommandSpec::new("swap"),
    CommandSpec::new("swap_id"),
    // Stored playlists
    CommandSpec::new("list_playlist"),
    CommandSpec::new("list_playlist_info"),
    CommandSpec::new("list_playlists"),
    CommandSpec::new("load"),
    CommandSpec::new("playlist_add"),
    CommandSpec::new("playlist_clear"),
    CommandSpec::new("playlist_delete"),
    CommandSpec::new("playlist_move"),
    CommandSpec::new("rename"),
    CommandSpec::wired("remove_playlist", "rm"),
    CommandSpec::new("save"),
    // Database
    CommandSpec::new("count"),
    CommandSpec::new("find"),
    CommandSpec::new("find_add"),
    CommandSpec::new("list"),
    CommandSpec::new("list_all"),
    CommandSpec::new("list_all_info"),
    CommandSpec::new("ls_info"),
    CommandSpec::new("rescan"),
    CommandSpec::new("search"),
    CommandSpec::new("update"),
    CommandSpec::wired("update_db", "update"),
    // Stickers
    CommandSpec::new("sticker"),
    // Outputs
    CommandSpec::new("disable_output"),
    CommandSpec::new("enable_output"),
    CommandSpec::new("outputs"),
    // Reflection
    CommandSpec::new("commands"),
    CommandSpec::new("decoders"),
    CommandSpec::new("not_commands"),
    CommandSpec::new("tag_types"),
    CommandSpec::new("url_handlers"),
    // Client to client
    CommandSpec::new("channels"),
    CommandSpec::new("read_messages"),
    CommandSpec::new("send_message"),
    CommandSpec::new("subscribe"),
    CommandSpec::new("unsubscribe"),
    // Connection
    CommandSpec::new("ping"),
];

/// Find a command by friendly name
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}
