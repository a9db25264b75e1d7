/// Errors that can occur on an SBP session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Failed to establish or operate the underlying transport.
    #[error("transport error: {0}")]
    Transport(#[from] sbp_transport::TransportError),

    /// Frame-level failure while sending or receiving.
    #[error("wire error: {0}")]
    Wire(#[from] sbp_wire::WireError),

    /// The peer did not complete the readiness handshake.
    #[error("handshake failed: {message}")]
    Handshake { message: String },

    /// The session was already closed explicitly.
    #[error("session is closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, SessionError>;
