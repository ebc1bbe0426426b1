//! # mpdlink
//!
//! A synchronous client for the Music Player Daemon (MPD) text protocol:
//! - Exact command quoting
//! - Response termination and `ACK` classification
//! - Record grouping of flat `key: value` replies
//! - Transparent reconnect before the next command after a dropped socket
//! - Cached, version-gated status attributes
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │          Caller (attribute accessors / named commands)      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Status    │          │  Command    │
//!   │ (snapshot)  │          │  Registry   │
//!   └──────┬──────┘          └──────┬──────┘
//!          └────────────┬───────────┘
//!                       ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Client (request/response)                    │
//! │        encode → ensure connected → write → read → group      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌──────────────┐
//!               │  Connection  │
//!               │ (TCP / Unix) │
//!               └──────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> mpdlink::Result<()> {
//! let mut client = mpdlink::Client::open("localhost:6600")?;
//! client.set_volume(80)?;
//! assert_eq!(client.volume()?, Some(80));
//!
//! let song = client.call("current_song", &[])?.into_record();
//! if let Some(song) = song {
//!     println!("{}", song.get("Title").unwrap_or("?"));
//! }
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;
pub mod status;
pub mod commands;
pub mod shared;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MpdError, Result};
pub use config::{Config, Endpoint};
pub use client::Client;
pub use protocol::{Ack, Item, ProtocolVersion, Record, Reply, Response};
pub use status::{AttributeSpec, PlayState, StatusSnapshot};
pub use shared::SharedClient;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of mpdlink
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
