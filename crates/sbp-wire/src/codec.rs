use std::io::{ErrorKind, Read, Write};

use bytes::{Bytes, BytesMut};
use tracing::debug;

use crate::error::{Result, WireError};
use crate::kind::{TypeDescriptor, HEADER_SIZE};
use crate::payload::Payload;

/// Default maximum payload size: 1 GiB.
///
/// The length field is a signed 64-bit integer; without a cap a corrupt or
/// hostile header could request an unbounded allocation.
pub const DEFAULT_MAX_PAYLOAD: usize = 1024 * 1024 * 1024;

/// Configuration for the frame codec.
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Maximum payload size in bytes, applied to both directions.
    pub max_payload_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
        }
    }
}

/// Sends and receives complete SBP frames over one duplex byte stream.
///
/// Partial reads and writes are reassembled internally; a call either fully
/// succeeds or fails with one error, never a partially decoded value. Both
/// `send` and `receive` block; one codec models one logical conversation and
/// is not internally synchronized.
pub struct FrameCodec<T> {
    stream: T,
    config: CodecConfig,
}

impl<T: Read + Write> FrameCodec<T> {
    /// Create a codec with default configuration.
    pub fn new(stream: T) -> Self {
        Self::with_config(stream, CodecConfig::default())
    }

    /// Create a codec with explicit configuration.
    pub fn with_config(stream: T, config: CodecConfig) -> Self {
        Self { stream, config }
    }

    /// Encode and send one value as a complete frame (blocking).
    ///
    /// Header and payload are delivered in full before this returns, retrying
    /// across partial writes. A stream that stops accepting bytes surfaces as
    /// [`WireError::ConnectionClosed`].
    pub fn send(&mut self, payload: &Payload) -> Result<()> {
        let descriptor = payload.descriptor();
        let n_bytes = descriptor.n_bytes();
        if n_bytes > self.config.max_payload_size as u64 {
            return Err(WireError::PayloadTooLarge {
                size: n_bytes,
                max: self.config.max_payload_size,
            });
        }

        let header = descriptor.encode()?;
        let mut frame = BytesMut::with_capacity(HEADER_SIZE + n_bytes as usize);
        frame.extend_from_slice(&header);
        frame.extend_from_slice(&payload.to_wire());

        debug!(
            kind = %descriptor.kind,
            n_items = descriptor.n_items,
            n_bytes,
            "sending frame"
        );

        self.write_full(&frame)?;
        self.flush()
    }

    /// Receive one complete frame and decode it (blocking).
    ///
    /// Reads exactly 12 header bytes, then exactly the declared payload
    /// length, reassembling fragmented deliveries. A peer that closes the
    /// stream, cleanly before the header or mid-frame, surfaces as
    /// [`WireError::ConnectionClosed`].
    pub fn receive(&mut self) -> Result<Payload> {
        let mut header = [0u8; HEADER_SIZE];
        self.read_full(&mut header)?;

        let descriptor = TypeDescriptor::parse(&header)?;
        let n_bytes = descriptor.n_bytes();
        if n_bytes > self.config.max_payload_size as u64 {
            return Err(WireError::PayloadTooLarge {
                size: n_bytes,
                max: self.config.max_payload_size,
            });
        }

        let mut raw = vec![0u8; n_bytes as usize];
        self.read_full(&mut raw)?;

        debug!(
            kind = %descriptor.kind,
            n_items = descriptor.n_items,
            n_bytes,
            "received frame"
        );

        Ok(Payload::from_wire(descriptor.kind, Bytes::from(raw)))
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.stream
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.stream
    }

    /// Consume the codec and return the inner stream.
    pub fn into_inner(self) -> T {
        self.stream
    }

    /// Current codec configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn read_full(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0usize;
        while filled < buf.len() {
            match self.stream.read(&mut buf[filled..]) {
                Ok(0) => return Err(WireError::ConnectionClosed),
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(WireError::Io(err)),
            }
        }
        Ok(())
    }

    fn write_full(&mut self, buf: &[u8]) -> Result<()> {
        let mut offset = 0usize;
        while offset < buf.len() {
            match self.stream.write(&buf[offset..]) {
                Ok(0) => return Err(WireError::ConnectionClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) if err.kind() == ErrorKind::BrokenPipe => {
                    return Err(WireError::ConnectionClosed)
                }
                Err(err) => return Err(WireError::Io(err)),
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        loop {
            match self.stream.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) if err.kind() == ErrorKind::BrokenPipe => {
                    return Err(WireError::ConnectionClosed)
                }
                Err(err) => return Err(WireError::Io(err)),
            }
        }
    }
}
