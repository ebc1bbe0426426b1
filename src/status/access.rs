//! Attribute access
//!
//! One generic getter and one generic setter driven by [`AttributeSpec`],
//! plus typed conveniences for the common fields.

use std::str::FromStr;

use super::attribute::{
    lookup, AttributeSpec, PlayState, CONSUME, CROSSFADE, ELAPSED, RANDOM, REPEAT, SINGLE, STATE,
    VOLUME,
};
use crate::client::Client;
use crate::error::{MpdError, Result};

impl Client {
    fn check_version(&self, spec: &AttributeSpec) -> Result<()> {
        let actual = self.protocol_version().unwrap_or_default();
        if actual < spec.min_version {
            return Err(MpdError::Version {
                attribute: spec.name.to_string(),
                required: spec.min_version,
                actual,
            });
        }
        Ok(())
    }

    // =========================================================================
    // Generic Access
    // =========================================================================

    /// Read an attribute from the cached snapshot
    ///
    /// `Ok(None)` means the server did not report the field (e.g. `song`
    /// while stopped).
    pub fn get(&self, spec: &AttributeSpec) -> Result<Option<&str>> {
        self.check_version(spec)?;
        Ok(self.status.get(spec.key))
    }

    /// Write an attribute
    ///
    /// Version and writability are checked before anything is sent. On
    /// success the snapshot is patched with `value` and the patched value is
    /// returned; on `ACK` the snapshot is untouched and `Ok(None)` comes back.
    pub fn set(&mut self, spec: &AttributeSpec, value: &str) -> Result<Option<String>> {
        let command = spec
            .set_command
            .ok_or_else(|| MpdError::ReadOnly(spec.name.to_string()))?;
        self.check_version(spec)?;

        let response = self.send(command, &[value])?;
        if self.settle(response).is_none() {
            return Ok(None);
        }

        self.status.insert(spec.key, value);
        Ok(self.get(spec)?.map(str::to_string))
    }

    /// [`get`](Client::get) by friendly name
    pub fn attribute(&self, name: &str) -> Result<Option<&str>> {
        let spec = lookup(name).ok_or_else(|| MpdError::UnknownAttribute(name.to_string()))?;
        self.get(spec)
    }

    /// [`set`](Client::set) by friendly name
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<Option<String>> {
        let spec = lookup(name).ok_or_else(|| MpdError::UnknownAttribute(name.to_string()))?;
        self.set(spec, value)
    }

    /// Read an attribute and parse it
    pub fn get_parsed<T: FromStr>(&self, spec: &AttributeSpec) -> Result<Option<T>> {
        self.get(spec)?
            .map(|raw| {
                raw.parse().map_err(|_| MpdError::InvalidValue {
                    attribute: spec.name.to_string(),
                    value: raw.to_string(),
                })
            })
            .transpose()
    }

    fn get_flag(&self, spec: &AttributeSpec) -> Result<Option<bool>> {
        Ok(self.get_parsed::<u8>(spec)?.map(|v| v != 0))
    }

    fn set_flag(&mut self, spec: &AttributeSpec, on: bool) -> Result<Option<bool>> {
        let value = if on { "1" } else { "0" };
        Ok(self.set(spec, value)?.map(|v| v != "0"))
    }

    // =========================================================================
    // Typed Access
    // =========================================================================

    /// Mixer volume; `-1` when the server has no mixer
    pub fn volume(&self) -> Result<Option<i32>> {
        self.get_parsed(&VOLUME)
    }

    pub fn set_volume(&mut self, volume: u8) -> Result<Option<i32>> {
        match self.set(&VOLUME, &volume.to_string())? {
            Some(_) => self.volume(),
            None => Ok(None),
        }
    }

    pub fn repeat(&self) -> Result<Option<bool>> {
        self.get_flag(&REPEAT)
    }

    pub fn set_repeat(&mut self, on: bool) -> Result<Option<bool>> {
        self.set_flag(&REPEAT, on)
    }

    pub fn random(&self) -> Result<Option<bool>> {
        self.get_flag(&RANDOM)
    }

    pub fn set_random(&mut self, on: bool) -> Result<Option<bool>> {
        self.set_flag(&RANDOM, on)
    }

    pub fn single(&self) -> Result<Option<bool>> {
        self.get_flag(&SINGLE)
    }

    pub fn set_single(&mut self, on: bool) -> Result<Option<bool>> {
        self.set_flag(&SINGLE, on)
    }

    pub fn consume(&self) -> Result<Option<bool>> {
        self.get_flag(&CONSUME)
    }

    pub fn set_consume(&mut self, on: bool) -> Result<Option<bool>> {
        self.set_flag(&CONSUME, on)
    }

    /// Crossfade in seconds
    pub fn crossfade(&self) -> Result<Option<u32>> {
        self.get_parsed(&CROSSFADE)
    }

    pub fn set_crossfade(&mut self, seconds: u32) -> Result<Option<u32>> {
        match self.set(&CROSSFADE, &seconds.to_string())? {
            Some(_) => self.crossfade(),
            None => Ok(None),
        }
    }

    pub fn state(&self) -> Result<Option<PlayState>> {
        self.get_parsed(&STATE)
    }

    /// Position in the current song, in seconds
    pub fn elapsed(&self) -> Result<Option<f64>> {
        self.get_parsed(&ELAPSED)
    }

    /// Replay gain mode, optionally setting it first
    ///
    /// Not backed by the snapshot: the mode is always read back with a
    /// `replay_gain_status` round trip. A rejected set stays in
    /// [`last_error`](Client::last_error) and the current mode is still
    /// returned.
    pub fn replay_gain_mode(&mut self, mode: Option<&str>) -> Result<Option<String>> {
        let rejected = match mode {
            Some(mode) => {
                let response = self.send("replay_gain_mode", &[mode])?;
                self.settle(response);
                self.last_error.take()
            }
            None => None,
        };

        let response = self.send("replay_gain_status", &[])?;
        let lines = self.settle(response);
        if let Some(ack) = rejected {
            // A failing query reports its own ACK instead
            self.last_error.get_or_insert(ack);
        }

        Ok(lines.and_then(|lines| {
            lines
                .into_iter()
                .find(|(key, _)| key == "replay_gain_mode")
                .map(|(_, value)| value)
        }))
    }
}
