use std::io::ErrorKind;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use sbp_transport::{SbpStream, TcpAcceptor, TransportError};
use sbp_wire::{CodecConfig, FrameCodec, Payload};
use tracing::{debug, info};

use crate::error::{Result, SessionError};

/// How this end of the session was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Accepted the single inbound connection.
    Listener,
    /// Actively connected outward.
    Connector,
}

/// Configuration applied when a session is established.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Frame codec settings (payload size cap).
    pub codec: CodecConfig,
    /// Socket read timeout. `None` means `receive` blocks indefinitely.
    pub read_timeout: Option<Duration>,
    /// Socket write timeout.
    pub write_timeout: Option<Duration>,
}

/// One SBP conversation with one peer.
///
/// Both connection roles yield this same type; the role only records how the
/// stream came to exist. The session owns the socket: it is released when the
/// session is closed or dropped, on every exit path. Sharing a session across
/// threads requires external synchronization — one session models exactly one
/// logical conversation.
///
/// Lifecycle is `Connected → Closed`, with no reconnect: retrying a session
/// means creating a new instance.
pub struct Session {
    codec: FrameCodec<SbpStream>,
    role: Role,
    peer: SocketAddr,
    closed: bool,
}

impl Session {
    /// Bind `addr`, block until the single peer connects, and wrap the
    /// resulting stream.
    pub fn listen_once(addr: impl ToSocketAddrs) -> Result<Self> {
        Self::listen_once_with_config(addr, SessionConfig::default())
    }

    /// `listen_once` with explicit configuration.
    pub fn listen_once_with_config(
        addr: impl ToSocketAddrs,
        config: SessionConfig,
    ) -> Result<Self> {
        let acceptor = TcpAcceptor::bind(addr)?;
        Self::accept_on(acceptor, config)
    }

    /// Accept the single peer on an already-bound acceptor.
    ///
    /// The two-step form of [`listen_once`](Self::listen_once), for callers
    /// that need the bound address (e.g. an ephemeral port) before blocking.
    pub fn accept_on(acceptor: TcpAcceptor, config: SessionConfig) -> Result<Self> {
        let stream = acceptor.accept_once()?;
        Self::from_stream(stream, Role::Listener, config)
    }

    /// Actively connect outward to a listening peer.
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        Self::connect_with_config(addr, SessionConfig::default())
    }

    /// `connect` with explicit configuration.
    pub fn connect_with_config(addr: impl ToSocketAddrs, config: SessionConfig) -> Result<Self> {
        let stream = sbp_transport::connect(addr)?;
        Self::from_stream(stream, Role::Connector, config)
    }

    fn from_stream(stream: SbpStream, role: Role, config: SessionConfig) -> Result<Self> {
        stream.set_read_timeout(config.read_timeout)?;
        stream.set_write_timeout(config.write_timeout)?;
        let peer = stream.peer_addr()?;

        info!(%peer, ?role, "session established");

        Ok(Self {
            codec: FrameCodec::with_config(stream, config.codec),
            role,
            peer,
            closed: false,
        })
    }

    /// Send one value as a complete frame (blocking).
    pub fn send(&mut self, payload: &Payload) -> Result<()> {
        if self.closed {
            return Err(SessionError::Closed);
        }
        Ok(self.codec.send(payload)?)
    }

    /// Receive the next complete frame (blocking).
    ///
    /// A peer that closed the stream surfaces as
    /// [`WireError::ConnectionClosed`](sbp_wire::WireError::ConnectionClosed).
    pub fn receive(&mut self) -> Result<Payload> {
        if self.closed {
            return Err(SessionError::Closed);
        }
        Ok(self.codec.receive()?)
    }

    /// Shut down both directions of the stream. Idempotent.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        match self.codec.get_ref().shutdown() {
            Ok(()) => {}
            // Peer may have torn the connection down first.
            Err(TransportError::Io(err)) if err.kind() == ErrorKind::NotConnected => {}
            Err(err) => return Err(err.into()),
        }
        debug!(peer = %self.peer, "session closed");
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// This end's connection role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Address of the connected peer.
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("role", &self.role)
            .field("peer", &self.peer)
            .field("closed", &self.closed)
            .finish()
    }
}
