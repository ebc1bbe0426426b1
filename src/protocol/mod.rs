//! Protocol Module
//!
//! Defines the MPD line-oriented text protocol.
//!
//! ## Greeting (server → client, first line)
//! ```text
//! OK MPD <major>.<minor>.<patch>
//! ```
//!
//! ## Request Format
//! ```text
//! <command>[ <arg>]*\n
//! ```
//! Arguments containing whitespace or `"` are wrapped in double quotes with
//! inner quotes backslash-escaped.
//!
//! ## Response Format
//! ```text
//! ┌──────────────────────────────┐
//! │ key: value                   │  zero or more data lines
//! │ key: value                   │
//! ├──────────────────────────────┤
//! │ OK                           │  success terminator
//! │   or                         │
//! │ ACK [code@index] {cmd} msg   │  error terminator
//! └──────────────────────────────┘
//! ```
//!
//! Data lines are grouped into records: a key repeating within the record
//! being built starts the next record.

mod command;
mod response;
mod record;
mod codec;

pub use command::{encode_command, quote_argument, tokenize_line};
pub use response::{parse_greeting, Ack, Line, ProtocolVersion, Response, Terminal};
pub use record::{group_records, Item, Record, Reply};
pub use codec::{read_greeting, read_response, write_command};
