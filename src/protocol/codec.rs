//! Protocol codec
//!
//! Stream-based helpers for writing command lines and reading responses.
//!
//! ## Framing
//! ```text
//! client: play 3\n
//! server: OK\n
//!
//! client: status\n
//! server: volume: 50\n
//!         state: play\n
//!         OK\n
//! ```
//!
//! A response is complete only once its terminator (`OK` or `ACK ...`) has
//! been read. Running out of input first is a transport failure.

use std::io::{self, BufRead, Write};

use crate::error::{MpdError, Result};
use super::response::{parse_greeting, Line, ProtocolVersion, Response};

/// Read one line, treating end-of-stream as an error
fn read_line<R: BufRead>(reader: &mut R, buf: &mut String) -> io::Result<()> {
    buf.clear();
    if reader.read_line(buf)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "connection closed by server",
        ));
    }
    Ok(())
}

/// Read and parse the greeting line
///
/// A missing greeting is a handshake failure, not a transport one: the
/// socket opened but the peer is not speaking the protocol.
pub fn read_greeting<R: BufRead>(reader: &mut R) -> Result<ProtocolVersion> {
    let mut line = String::new();
    read_line(reader, &mut line)
        .map_err(|e| MpdError::Handshake(format!("No greeting received: {}", e)))?;
    tracing::trace!("<< {}", line.trim_end());
    parse_greeting(&line)
}

/// Read lines until a terminator, collecting data lines on the way
///
/// Blocks until the terminator arrives or the read fails.
pub fn read_response<R: BufRead>(reader: &mut R) -> Result<Response> {
    let mut lines = Vec::new();
    let mut buf = String::new();

    loop {
        read_line(reader, &mut buf)?;
        tracing::trace!("<< {}", buf.trim_end());

        match Line::classify(&buf) {
            Line::Ok => return Ok(Response::ok(lines)),
            Line::Ack(ack) => return Ok(Response::ack(ack, lines)),
            Line::Data { key, value } => lines.push((key, value)),
        }
    }
}

/// Write an encoded command line and flush it
pub fn write_command<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    if line.starts_with("password ") {
        tracing::trace!(">> password ******");
    } else {
        tracing::trace!(">> {}", line.trim_end());
    }
    writer.write_all(line.as_bytes())?;
    writer.flush()?;
    Ok(())
}
