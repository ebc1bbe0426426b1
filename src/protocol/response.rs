//! Response definitions
//!
//! Classification of inbound lines and the result of one round trip.

use std::fmt;
use std::str::FromStr;

use crate::error::{MpdError, Result};
use super::record::Reply;

/// Greeting prefix sent by the server on connect
const GREETING_PREFIX: &str = "OK MPD ";

/// Success terminator
const OK_LINE: &str = "OK";

/// Error terminator prefix
const ACK_PREFIX: &str = "ACK ";

// =============================================================================
// Protocol Version
// =============================================================================

/// Server protocol version (`major.minor.patch`) announced in the greeting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ProtocolVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for ProtocolVersion {
    type Err = MpdError;

    /// Missing trailing components default to 0 (`"0.16"` is `0.16.0`).
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = [0u32; 3];

        // An empty string yields one empty part, which fails to parse
        for (i, part) in s.trim().split('.').enumerate() {
            if i >= parts.len() {
                return Err(MpdError::Handshake(format!("Invalid protocol version '{}'", s)));
            }
            parts[i] = part.parse().map_err(|_| {
                MpdError::Handshake(format!("Invalid protocol version '{}'", s))
            })?;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

/// Parse the server greeting line (`OK MPD 0.16.0`)
pub fn parse_greeting(line: &str) -> Result<ProtocolVersion> {
    let line = line.trim_end_matches(['\n', '\r']);
    let version = line.strip_prefix(GREETING_PREFIX).ok_or_else(|| {
        MpdError::Handshake(format!("Unexpected greeting: {:?}", line))
    })?;
    version.parse()
}

// =============================================================================
// ACK
// =============================================================================

/// Error terminator: `ACK [code@index] {command} message`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    /// Server error code
    pub code: u32,

    /// Position of the failing command in a command list (0 outside lists)
    pub index: u32,

    /// Command the server was executing
    pub command: String,

    /// Human-readable message, verbatim
    pub message: String,
}

impl Ack {
    /// Parse everything after the `ACK ` prefix
    ///
    /// A body that does not follow the usual anatomy is kept whole as the
    /// message, with code and index 0.
    fn parse(body: &str) -> Self {
        Self::parse_structured(body).unwrap_or_else(|| Ack {
            code: 0,
            index: 0,
            command: String::new(),
            message: body.to_string(),
        })
    }

    fn parse_structured(body: &str) -> Option<Self> {
        let rest = body.strip_prefix('[')?;
        let (position, rest) = rest.split_once(']')?;
        let (code, index) = position.split_once('@')?;
        let code = code.parse().ok()?;
        let index = index.parse().ok()?;

        let rest = rest.trim_start().strip_prefix('{')?;
        let (command, message) = rest.split_once('}')?;

        Some(Ack {
            code,
            index,
            command: command.to_string(),
            message: message.trim_start().to_string(),
        })
    }
}

impl fmt::Display for Ack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.command.is_empty() {
            write!(f, "[{}@{}] {}", self.code, self.index, self.message)
        } else {
            write!(f, "[{}@{}] {{{}}} {}", self.code, self.index, self.command, self.message)
        }
    }
}

// =============================================================================
// Line Classification
// =============================================================================

/// One inbound line, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `OK` terminator
    Ok,

    /// `ACK ...` terminator
    Ack(Ack),

    /// `key: value` data line
    Data { key: String, value: String },
}

impl Line {
    /// Classify a raw line (trailing newline optional)
    ///
    /// Terminators are recognised before any colon splitting, so an `ACK`
    /// whose message contains `: ` is never read as data.
    pub fn classify(raw: &str) -> Self {
        let line = raw.trim_end_matches(['\n', '\r']);

        if line == OK_LINE {
            return Line::Ok;
        }
        if let Some(body) = line.strip_prefix(ACK_PREFIX) {
            return Line::Ack(Ack::parse(body));
        }

        let (key, value) = match line.split_once(": ") {
            Some(pair) => pair,
            None => match line.split_once(':') {
                Some((key, value)) => (key, value.trim_start()),
                None => (line, ""),
            },
        };

        Line::Data {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether the line ends a response
    pub fn is_terminator(&self) -> bool {
        !matches!(self, Line::Data { .. })
    }
}

// =============================================================================
// Response
// =============================================================================

/// How a response ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminal {
    Ok,
    Ack(Ack),
}

/// Result of one round trip: the terminator plus every data line before it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Success or error terminator
    pub terminal: Terminal,

    /// Data lines in arrival order
    pub lines: Vec<(String, String)>,
}

impl Response {
    /// Create a successful response
    pub fn ok(lines: Vec<(String, String)>) -> Self {
        Self {
            terminal: Terminal::Ok,
            lines,
        }
    }

    /// Create an error response
    pub fn ack(ack: Ack, lines: Vec<(String, String)>) -> Self {
        Self {
            terminal: Terminal::Ack(ack),
            lines,
        }
    }

    /// Whether the server answered `OK`
    pub fn is_ok(&self) -> bool {
        matches!(self.terminal, Terminal::Ok)
    }

    /// The ACK, if the server answered with one
    pub fn ack_ref(&self) -> Option<&Ack> {
        match &self.terminal {
            Terminal::Ok => None,
            Terminal::Ack(ack) => Some(ack),
        }
    }

    /// Data lines on `OK`, or `MpdError::Protocol` on `ACK`
    pub fn into_result(self) -> Result<Vec<(String, String)>> {
        match self.terminal {
            Terminal::Ok => Ok(self.lines),
            Terminal::Ack(ack) => Err(MpdError::Protocol(ack)),
        }
    }

    /// Group the data lines into records (see [`Reply`])
    ///
    /// Returns `MpdError::Protocol` if the response was an `ACK`.
    pub fn into_reply(self) -> Result<Reply> {
        self.into_result().map(|lines| Reply::from_lines(&lines))
    }
}
