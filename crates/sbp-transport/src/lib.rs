//! TCP transport for SBP.
//!
//! Two connection roles establish the same duplex byte stream:
//! - [`TcpAcceptor`]: bind, then block for exactly one inbound peer
//! - [`connect`]: actively connect outward
//!
//! Everything above this layer operates on the [`SbpStream`] type returned
//! by both roles.

pub mod error;
pub mod stream;
pub mod tcp;

pub use error::{Result, TransportError};
pub use stream::SbpStream;
pub use tcp::{connect, TcpAcceptor};
