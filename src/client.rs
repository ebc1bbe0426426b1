//! Client Module
//!
//! The synchronous request/response engine that coordinates all components.
//!
//! ## Responsibilities
//! - Encode commands and run one round trip at a time
//! - Reconnect (handshake + status refresh) before a command when needed
//! - Turn `ACK` replies into reported, non-fatal failures
//! - Own the cached status snapshot
//!
//! ## Reconnect behaviour
//! A server that silently drops the connection is only noticed when a
//! command's read fails. That command returns `MpdError::Transport`; the
//! next one reconnects transparently and succeeds. Nothing retries the
//! failed command, since MPD closes idle clients deliberately and the caller
//! decides whether a replay is safe.
//!
//! ## Concurrency
//! A `Client` is not synchronized. Share one between threads through
//! [`SharedClient`](crate::SharedClient) or give each thread its own.

use crate::commands;
use crate::config::Config;
use crate::error::{MpdError, Result};
use crate::network::Connection;
use crate::protocol::{encode_command, Ack, ProtocolVersion, Reply, Response, Terminal};
use crate::status::StatusSnapshot;

/// A connected MPD client
#[derive(Debug)]
pub struct Client {
    /// Socket owner
    pub(crate) connection: Connection,

    /// Last `status` reply, patched by setters
    pub(crate) status: StatusSnapshot,

    /// Most recent ACK reported by `command`/`call`/setters
    pub(crate) last_error: Option<Ack>,
}

impl Client {
    /// Connect and handshake with the server described by `config`
    ///
    /// Any failure here (unreachable server, bad greeting, rejected
    /// password) is returned; there is no client without a first successful
    /// handshake.
    pub fn connect(config: Config) -> Result<Self> {
        let mut client = Self {
            connection: Connection::new(&config),
            status: StatusSnapshot::new(),
            last_error: None,
        };
        client.ensure_connected()?;
        Ok(client)
    }

    /// Connect using an `[password@]host[:port]` address
    pub fn open(address: &str) -> Result<Self> {
        Self::connect(Config::from_address(address)?)
    }

    // =========================================================================
    // Connection Lifecycle
    // =========================================================================

    /// Handshake again if the socket is gone
    ///
    /// A fresh handshake is followed by a status refresh so that attribute
    /// getters never read a snapshot from a previous session.
    pub fn ensure_connected(&mut self) -> Result<()> {
        if self.connection.is_connected() {
            return Ok(());
        }

        self.connection.handshake()?;
        self.refresh_status()
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// Protocol version announced by the server in its greeting
    pub fn protocol_version(&self) -> Option<ProtocolVersion> {
        self.connection.version()
    }

    /// Drop the socket locally; the next command reconnects
    pub fn disconnect(&mut self) {
        self.connection.disconnect();
    }

    /// Ask the server to close the connection, then drop the socket
    ///
    /// The server does not answer `close`, so no response is read.
    pub fn close(&mut self) {
        self.connection.close();
    }

    // =========================================================================
    // Round Trips
    // =========================================================================

    /// Send one command and return its raw response
    ///
    /// Steps:
    /// 1. Encode the command line
    /// 2. Reconnect if needed
    /// 3. Write the line, read until `OK` or `ACK`
    ///
    /// `ACK` comes back as `Ok(response)` with `Terminal::Ack`; only
    /// connection-level failures are `Err`.
    pub fn send(&mut self, command: &str, args: &[&str]) -> Result<Response> {
        let line = encode_command(command, args);
        self.ensure_connected()?;
        tracing::debug!(command, args = args.len(), "Sending command");
        self.connection.round_trip(&line)
    }

    /// Send one command and group its reply
    ///
    /// An `ACK` is logged, kept in [`last_error`](Client::last_error) and
    /// yields `Reply::Empty`.
    pub fn command(&mut self, command: &str, args: &[&str]) -> Result<Reply> {
        let response = self.send(command, args)?;
        Ok(self
            .settle(response)
            .map(|lines| Reply::from_lines(&lines))
            .unwrap_or(Reply::Empty))
    }

    /// Run a registered command by its friendly name (`current_song`, ...)
    pub fn call(&mut self, name: &str, args: &[&str]) -> Result<Reply> {
        let spec =
            commands::lookup(name).ok_or_else(|| MpdError::UnknownCommand(name.to_string()))?;
        let wire = spec.wire_name();
        self.command(&wire, args)
    }

    /// Block until one of `subsystems` (any, if empty) changes
    ///
    /// Returns the changed subsystem names. There is no way to cancel the
    /// wait other than a read timeout in [`Config`].
    pub fn idle(&mut self, subsystems: &[&str]) -> Result<Vec<String>> {
        Ok(self.command("idle", subsystems)?.into_values())
    }

    /// Round trip with no payload, useful to keep a connection alive
    pub fn ping(&mut self) -> Result<()> {
        self.command("ping", &[]).map(|_| ())
    }

    /// Most recent reported `ACK`, cleared by the next successful command
    pub fn last_error(&self) -> Option<&Ack> {
        self.last_error.as_ref()
    }

    /// Record the outcome of a round trip; `None` for an `ACK`
    pub(crate) fn settle(&mut self, response: Response) -> Option<Vec<(String, String)>> {
        match response.terminal {
            Terminal::Ok => {
                self.last_error = None;
                Some(response.lines)
            }
            Terminal::Ack(ack) => {
                tracing::warn!("Command failed: {}", ack);
                self.last_error = Some(ack);
                None
            }
        }
    }

    // =========================================================================
    // Status Snapshot
    // =========================================================================

    /// Cached status from the last refresh
    pub fn status(&self) -> &StatusSnapshot {
        &self.status
    }

    /// Re-read `status` and replace the cached snapshot
    ///
    /// On `ACK` the previous snapshot is kept and the error is reported.
    pub fn refresh_status(&mut self) -> Result<()> {
        let response = self.send("status", &[])?;
        if let Some(lines) = self.settle(response) {
            self.status = StatusSnapshot::from_lines(lines);
        }
        Ok(())
    }
}
