//! Connection Manager
//!
//! Owns the socket to the server, performs the handshake and runs single
//! request/response round trips.

use std::io::{self, BufReader, BufWriter, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
#[cfg(unix)]
use std::os::unix::net::UnixStream;
use std::path::Path;
use std::time::Duration;

use crate::config::{Config, Endpoint};
use crate::error::{MpdError, Result};
use crate::protocol::{
    encode_command, read_greeting, read_response, write_command, ProtocolVersion, Response,
    Terminal,
};

/// TCP or local stream
#[derive(Debug)]
enum Socket {
    Tcp(TcpStream),
    #[cfg(unix)]
    Unix(UnixStream),
}

impl Socket {
    fn try_clone(&self) -> io::Result<Self> {
        match self {
            Socket::Tcp(s) => s.try_clone().map(Socket::Tcp),
            #[cfg(unix)]
            Socket::Unix(s) => s.try_clone().map(Socket::Unix),
        }
    }

    fn set_timeouts(&self, read: Option<Duration>, write: Option<Duration>) -> io::Result<()> {
        match self {
            Socket::Tcp(s) => {
                s.set_read_timeout(read)?;
                s.set_write_timeout(write)
            }
            #[cfg(unix)]
            Socket::Unix(s) => {
                s.set_read_timeout(read)?;
                s.set_write_timeout(write)
            }
        }
    }
}

impl Read for Socket {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Socket::Tcp(s) => s.read(buf),
            #[cfg(unix)]
            Socket::Unix(s) => s.read(buf),
        }
    }
}

impl Write for Socket {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Socket::Tcp(s) => s.write(buf),
            #[cfg(unix)]
            Socket::Unix(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Socket::Tcp(s) => s.flush(),
            #[cfg(unix)]
            Socket::Unix(s) => s.flush(),
        }
    }
}

/// Buffered read/write halves of one live socket
#[derive(Debug)]
struct Stream {
    reader: BufReader<Socket>,
    writer: BufWriter<Socket>,
}

impl Stream {
    fn new(socket: Socket) -> io::Result<Self> {
        let read_half = socket.try_clone()?;
        Ok(Self {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(socket),
        })
    }

    fn round_trip(&mut self, line: &str) -> Result<Response> {
        write_command(&mut self.writer, line)?;
        read_response(&mut self.reader)
    }
}

fn millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

/// Connection to one MPD server
///
/// The socket is absent until [`handshake`](Connection::handshake) succeeds,
/// and is dropped again whenever a round trip hits a transport failure. The
/// failed command reports the error; only the next handshake brings the
/// socket back.
#[derive(Debug)]
pub struct Connection {
    /// Where to connect
    endpoint: Endpoint,

    /// Password sent after the greeting
    password: Option<String>,

    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    write_timeout: Option<Duration>,

    /// Live socket, `None` while disconnected
    stream: Option<Stream>,

    /// Version from the most recent greeting
    version: Option<ProtocolVersion>,
}

impl Connection {
    /// Create a disconnected connection for `config`
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            password: config.password.clone(),
            connect_timeout: millis(config.connect_timeout_ms),
            read_timeout: millis(config.read_timeout_ms),
            write_timeout: millis(config.write_timeout_ms),
            stream: None,
            version: None,
        }
    }

    /// Whether a socket is currently held
    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// Protocol version from the last successful greeting
    pub fn version(&self) -> Option<ProtocolVersion> {
        self.version
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Open a fresh socket, read the greeting and authenticate
    ///
    /// Any previously held socket is dropped first.
    pub fn handshake(&mut self) -> Result<ProtocolVersion> {
        self.stream = None;

        tracing::debug!("Connecting to {}", self.endpoint);
        let socket = self.open_socket().map_err(|e| {
            MpdError::Connection(format!("Cannot connect to {}: {}", self.endpoint, e))
        })?;
        socket.set_timeouts(self.read_timeout, self.write_timeout)?;
        let mut stream = Stream::new(socket)?;

        let version = read_greeting(&mut stream.reader)?;
        tracing::info!("Connected to {} (protocol {})", self.endpoint, version);

        if let Some(password) = &self.password {
            let line = encode_command("password", &[password.as_str()]);
            match stream.round_trip(&line)?.terminal {
                Terminal::Ok => tracing::debug!("Password accepted"),
                Terminal::Ack(ack) => return Err(MpdError::Auth(ack.message)),
            }
        }

        self.version = Some(version);
        self.stream = Some(stream);
        Ok(version)
    }

    /// Write one encoded line and read its full response
    ///
    /// A transport failure drops the socket so that the next command goes
    /// through a fresh handshake. There is no retry here: MPD closes idle
    /// connections on purpose, and the command that discovers it fails.
    pub fn round_trip(&mut self, line: &str) -> Result<Response> {
        let stream = self.stream.as_mut().ok_or_else(|| {
            MpdError::Transport(io::Error::new(io::ErrorKind::NotConnected, "not connected"))
        })?;

        match stream.round_trip(line) {
            Err(e @ MpdError::Transport(_)) => {
                tracing::warn!("Lost connection to {}: {}", self.endpoint, e);
                self.stream = None;
                Err(e)
            }
            other => other,
        }
    }

    /// Drop the socket without telling the server
    pub fn disconnect(&mut self) {
        if self.stream.take().is_some() {
            tracing::debug!("Disconnected from {}", self.endpoint);
        }
    }

    /// Send `close` (which the server never answers) and drop the socket
    pub fn close(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            let line = encode_command("close", &[]);
            if let Err(e) = write_command(&mut stream.writer, &line) {
                tracing::debug!("Ignoring error while closing {}: {}", self.endpoint, e);
            }
            tracing::debug!("Closed connection to {}", self.endpoint);
        }
    }

    fn open_socket(&self) -> io::Result<Socket> {
        match &self.endpoint {
            Endpoint::Tcp { host, port } => {
                let stream = self.connect_tcp(host, *port)?;
                // Commands are single short lines; don't let Nagle hold them back
                stream.set_nodelay(true)?;
                Ok(Socket::Tcp(stream))
            }
            Endpoint::Local(path) => Self::connect_local(path),
        }
    }

    fn connect_tcp(&self, host: &str, port: u16) -> io::Result<TcpStream> {
        let Some(timeout) = self.connect_timeout else {
            return TcpStream::connect((host, port));
        };

        let mut last_error = None;
        for addr in (host, port).to_socket_addrs()? {
            match TcpStream::connect_timeout(&addr, timeout) {
                Ok(stream) => return Ok(stream),
                Err(e) => last_error = Some(e),
            }
        }
        Err(last_error.unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "host resolved to no addresses")
        }))
    }

    #[cfg(unix)]
    fn connect_local(path: &Path) -> io::Result<Socket> {
        UnixStream::connect(path).map(Socket::Unix)
    }

    #[cfg(not(unix))]
    fn connect_local(path: &Path) -> io::Result<Socket> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("local sockets are not supported here: {}", path.display()),
        ))
    }
}
