//! Error types for mpdlink
//!
//! Provides a unified error type for all client operations.

use thiserror::Error;

use crate::protocol::{Ack, ProtocolVersion};

/// Result type alias using MpdError
pub type Result<T> = std::result::Result<T, MpdError>;

/// Unified error type for mpdlink operations
#[derive(Debug, Error)]
pub enum MpdError {
    // -------------------------------------------------------------------------
    // Connection Lifecycle Errors
    // -------------------------------------------------------------------------
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Handshake error: {0}")]
    Handshake(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(Ack),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // -------------------------------------------------------------------------
    // Attribute Errors
    // -------------------------------------------------------------------------
    #[error("Attribute '{attribute}' requires protocol {required}, server speaks {actual}")]
    Version {
        attribute: String,
        required: ProtocolVersion,
        actual: ProtocolVersion,
    },

    #[error("Attribute '{0}' is read-only")]
    ReadOnly(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Attribute '{attribute}' has unparsable value '{value}'")]
    InvalidValue { attribute: String, value: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MpdError {
    /// Whether this error should abort the caller's current operation.
    ///
    /// Server `ACK` replies are the only non-fatal kind: the command failed
    /// but the connection is still usable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, MpdError::Protocol(_))
    }
}
