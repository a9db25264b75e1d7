use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};

use tracing::{debug, info};

use crate::error::{Result, TransportError};
use crate::stream::SbpStream;

/// Accepts exactly one inbound SBP connection.
///
/// Binding and accepting are split so callers can learn the bound address
/// (e.g. an ephemeral port) before the peer connects. `accept_once` consumes
/// the acceptor: one acceptor = one session, and no further connections are
/// ever accepted by the same instance.
pub struct TcpAcceptor {
    listener: TcpListener,
    local: SocketAddr,
}

impl TcpAcceptor {
    /// Bind to `addr` and listen with a backlog of one.
    pub fn bind(addr: impl ToSocketAddrs) -> Result<Self> {
        let addr = resolve(addr)?;
        let listener = TcpListener::bind(addr).map_err(|e| TransportError::Bind {
            addr,
            source: e,
        })?;

        // std's bind installs its own larger backlog; SBP admits exactly one
        // pending peer per acceptor.
        #[cfg(unix)]
        {
            use std::os::fd::AsRawFd;

            // SAFETY: the fd is an open listening socket owned by `listener`.
            let rc = unsafe { libc::listen(listener.as_raw_fd(), 1) };
            if rc != 0 {
                return Err(TransportError::Bind {
                    addr,
                    source: std::io::Error::last_os_error(),
                });
            }
        }

        let local = listener
            .local_addr()
            .map_err(|e| TransportError::Bind { addr, source: e })?;

        info!(%local, "listening for one peer");

        Ok(Self { listener, local })
    }

    /// The address this acceptor is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local
    }

    /// Block until the single peer connects, then release the listener.
    pub fn accept_once(self) -> Result<SbpStream> {
        let (stream, peer) = self.listener.accept().map_err(TransportError::Accept)?;
        debug!(%peer, "accepted peer");
        Ok(SbpStream::from_tcp(stream))
    }
}

/// Actively connect outward to a listening SBP peer.
pub fn connect(addr: impl ToSocketAddrs) -> Result<SbpStream> {
    let addr = resolve(addr)?;
    let stream = TcpStream::connect(addr).map_err(|e| TransportError::Connect {
        addr,
        source: e,
    })?;
    debug!(%addr, "connected");
    Ok(SbpStream::from_tcp(stream))
}

fn resolve(addr: impl ToSocketAddrs) -> Result<SocketAddr> {
    addr.to_socket_addrs()?
        .next()
        .ok_or(TransportError::AddrNotResolved)
}
