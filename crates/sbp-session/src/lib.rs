//! One-peer SBP sessions.
//!
//! A [`Session`] is one logical conversation over one TCP connection,
//! established either by waiting for the single inbound peer
//! ([`Session::listen_once`]) or by connecting outward
//! ([`Session::connect`]). Both roles yield the same type, which owns the
//! frame codec and the socket.

pub mod error;
pub mod handshake;
pub mod session;

pub use error::{Result, SessionError};
pub use handshake::{
    announce, await_ready, expect_ready, signal_ready, Greeting, READY_SENTINEL,
};
pub use session::{Role, Session, SessionConfig};
