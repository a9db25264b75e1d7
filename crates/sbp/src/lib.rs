//! Simple Binary Protocol (SBP).
//!
//! A length-prefixed, type-tagged binary framing format for exchanging typed
//! payloads (text or flat numeric sequences) between a controlling process
//! and a remote numeric-simulation engine over a single TCP connection.
//!
//! This crate re-exports the three layers:
//! - [`wire`]: kind table, typed payloads, 12-byte header, frame codec
//! - [`transport`]: single-accept listener and outbound connector
//! - [`session`]: one-peer sessions and the readiness handshake

pub use sbp_session as session;
pub use sbp_transport as transport;
pub use sbp_wire as wire;

pub use sbp_session::{Greeting, Role, Session, SessionConfig, SessionError, READY_SENTINEL};
pub use sbp_transport::{SbpStream, TcpAcceptor, TransportError};
pub use sbp_wire::{
    CodecConfig, FrameCodec, Kind, Payload, TypeDescriptor, WireError, HEADER_SIZE,
};
