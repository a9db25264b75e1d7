use std::net::SocketAddr;

/// Errors that can occur while establishing or using an SBP transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to bind or listen on the given address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// Failed to connect outward: peer unreachable or refusing.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// Failed to accept the inbound connection.
    #[error("failed to accept connection: {0}")]
    Accept(std::io::Error),

    /// The given address resolved to no usable socket address.
    #[error("address resolved to no socket address")]
    AddrNotResolved,

    /// An I/O error occurred on the transport stream.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;
