//! SBP wire layer: kind table, typed payloads and the blocking frame codec.
//!
//! Every SBP frame is a 12-byte header followed by the raw payload:
//! - a 4-byte little-endian signed kind code
//! - an 8-byte little-endian signed payload length in bytes
//!
//! Payloads are text/raw bytes or flat numeric sequences, always in
//! little-endian wire order regardless of host byte order. The codec
//! reassembles partial reads and writes internally; callers only ever see
//! complete frames.

pub mod codec;
pub mod error;
pub mod kind;
pub mod payload;

pub use codec::{CodecConfig, FrameCodec, DEFAULT_MAX_PAYLOAD};
pub use error::{Result, WireError};
pub use kind::{Kind, TypeDescriptor, HEADER_SIZE};
pub use payload::Payload;
