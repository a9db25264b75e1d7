use std::fmt;

use crate::error::{Result, WireError};

/// Frame header: kind code (4) + payload byte length (8) = 12 bytes.
pub const HEADER_SIZE: usize = 12;

/// Element type of an SBP payload.
///
/// Codes 0 and 1 share their element width but are distinct semantic tags:
/// downstream command layers distinguish raw-byte framing from text framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Kind code 0: 1-byte raw unit.
    Byte,
    /// Kind code 1: 1-byte text unit.
    Char,
    /// Kind code 2: 4-byte signed integer.
    Int32,
    /// Kind code 3: 8-byte IEEE float.
    Float64,
}

impl Kind {
    /// Wire kind code.
    pub const fn code(self) -> i32 {
        match self {
            Kind::Byte => 0,
            Kind::Char => 1,
            Kind::Int32 => 2,
            Kind::Float64 => 3,
        }
    }

    /// Fixed element size in bytes.
    pub const fn element_size(self) -> usize {
        match self {
            Kind::Byte | Kind::Char => 1,
            Kind::Int32 => 4,
            Kind::Float64 => 8,
        }
    }

    /// Look up a kind by its wire code.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Kind::Byte),
            1 => Ok(Kind::Char),
            2 => Ok(Kind::Int32),
            3 => Ok(Kind::Float64),
            other => Err(WireError::InvalidKindCode(other)),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Byte => "byte",
            Kind::Char => "char",
            Kind::Int32 => "int32",
            Kind::Float64 => "float64",
        };
        f.write_str(name)
    }
}

/// Wire metadata for one frame: element kind and item count.
///
/// Constructed fresh per message, either from an outgoing [`Payload`]'s shape
/// or from a received header, and discarded once the message completes.
///
/// [`Payload`]: crate::payload::Payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub kind: Kind,
    pub n_items: u64,
}

impl TypeDescriptor {
    pub fn new(kind: Kind, n_items: u64) -> Self {
        Self { kind, n_items }
    }

    /// Total payload length in bytes.
    pub fn n_bytes(&self) -> u64 {
        self.n_items * self.kind.element_size() as u64
    }

    /// Encode the 12-byte header for this descriptor.
    ///
    /// Always yields exactly [`HEADER_SIZE`] bytes, including for zero-length
    /// payloads. Fails only if the byte length does not fit the signed 64-bit
    /// length field.
    pub fn encode(&self) -> Result<[u8; HEADER_SIZE]> {
        let n_bytes = i64::try_from(self.n_bytes()).map_err(|_| {
            WireError::UnsupportedType(format!(
                "payload of {} bytes exceeds the signed 64-bit length field",
                self.n_bytes()
            ))
        })?;

        let mut header = [0u8; HEADER_SIZE];
        header[..4].copy_from_slice(&self.kind.code().to_le_bytes());
        header[4..].copy_from_slice(&n_bytes.to_le_bytes());
        Ok(header)
    }

    /// Parse a received 12-byte header.
    ///
    /// Validates the kind code against the fixed table and requires the byte
    /// length to be non-negative and an exact multiple of the element size.
    pub fn parse(header: &[u8; HEADER_SIZE]) -> Result<Self> {
        let code = i32::from_le_bytes(header[..4].try_into().unwrap());
        let kind = Kind::from_code(code)?;

        let n_bytes = i64::from_le_bytes(header[4..].try_into().unwrap());
        if n_bytes < 0 {
            return Err(WireError::NegativeLength(n_bytes));
        }

        let element_size = kind.element_size();
        if n_bytes as u64 % element_size as u64 != 0 {
            return Err(WireError::UnalignedLength {
                n_bytes,
                element_size,
                kind,
            });
        }

        Ok(Self {
            kind,
            n_items: n_bytes as u64 / element_size as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_roundtrip() {
        for kind in [Kind::Byte, Kind::Char, Kind::Int32, Kind::Float64] {
            assert_eq!(Kind::from_code(kind.code()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_code_rejected() {
        let err = Kind::from_code(99).unwrap_err();
        assert!(matches!(err, WireError::InvalidKindCode(99)));
        assert!(err.is_protocol());

        assert!(Kind::from_code(-1).is_err());
        assert!(Kind::from_code(4).is_err());
    }

    #[test]
    fn element_sizes_match_table() {
        assert_eq!(Kind::Byte.element_size(), 1);
        assert_eq!(Kind::Char.element_size(), 1);
        assert_eq!(Kind::Int32.element_size(), 4);
        assert_eq!(Kind::Float64.element_size(), 8);
    }

    #[test]
    fn header_is_always_twelve_bytes() {
        let empty = TypeDescriptor::new(Kind::Char, 0);
        assert_eq!(empty.encode().unwrap().len(), HEADER_SIZE);

        let big = TypeDescriptor::new(Kind::Float64, 1_000_000);
        assert_eq!(big.encode().unwrap().len(), HEADER_SIZE);
    }

    #[test]
    fn encode_parse_roundtrip() {
        let descriptor = TypeDescriptor::new(Kind::Int32, 10);
        let header = descriptor.encode().unwrap();
        let parsed = TypeDescriptor::parse(&header).unwrap();
        assert_eq!(parsed, descriptor);
        assert_eq!(parsed.n_bytes(), 40);
    }

    #[test]
    fn header_layout_is_little_endian() {
        let header = TypeDescriptor::new(Kind::Int32, 10).encode().unwrap();
        assert_eq!(&header[..4], &[2, 0, 0, 0]);
        assert_eq!(&header[4..], &[40, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let mut header = [0u8; HEADER_SIZE];
        header[..4].copy_from_slice(&99i32.to_le_bytes());
        let err = TypeDescriptor::parse(&header).unwrap_err();
        assert!(matches!(err, WireError::InvalidKindCode(99)));
    }

    #[test]
    fn parse_rejects_unaligned_length() {
        let mut header = [0u8; HEADER_SIZE];
        header[..4].copy_from_slice(&Kind::Int32.code().to_le_bytes());
        header[4..].copy_from_slice(&7i64.to_le_bytes());
        let err = TypeDescriptor::parse(&header).unwrap_err();
        assert!(matches!(
            err,
            WireError::UnalignedLength {
                n_bytes: 7,
                element_size: 4,
                ..
            }
        ));
        assert!(err.is_protocol());
    }

    #[test]
    fn parse_rejects_negative_length() {
        let mut header = [0u8; HEADER_SIZE];
        header[..4].copy_from_slice(&Kind::Byte.code().to_le_bytes());
        header[4..].copy_from_slice(&(-8i64).to_le_bytes());
        let err = TypeDescriptor::parse(&header).unwrap_err();
        assert!(matches!(err, WireError::NegativeLength(-8)));
    }
}
