use crate::kind::Kind;

/// Errors that can occur while framing or deframing SBP messages.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The outgoing value cannot be represented on the wire.
    #[error("unsupported value: {0}")]
    UnsupportedType(String),

    /// A received header carries a kind code outside the fixed table.
    #[error("invalid kind code {0}")]
    InvalidKindCode(i32),

    /// A received header carries a negative payload length.
    #[error("negative payload length {0}")]
    NegativeLength(i64),

    /// A received header's byte length is not a multiple of the element size.
    #[error("payload length {n_bytes} is not a multiple of {element_size} ({kind} elements)")]
    UnalignedLength {
        n_bytes: i64,
        element_size: usize,
        kind: Kind,
    },

    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: u64, max: usize },

    /// The peer closed the stream before a complete frame was exchanged.
    #[error("connection closed")]
    ConnectionClosed,

    /// An I/O error occurred while reading or writing frames.
    #[error("wire I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WireError {
    /// Whether this error reports a malformed header (a protocol violation
    /// rather than a transport or caller problem).
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            WireError::InvalidKindCode(_)
                | WireError::NegativeLength(_)
                | WireError::UnalignedLength { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, WireError>;
