use bytes::{BufMut, Bytes, BytesMut};

use crate::kind::{Kind, TypeDescriptor};

/// A typed SBP value: text/raw bytes or a flat numeric sequence.
///
/// This is the tagged union behind every frame. Each variant is backed by an
/// owned buffer and converted to/from little-endian wire order explicitly at
/// the codec boundary, independent of host byte order. Multi-dimensional
/// shapes are not representable; reshaping a received flat sequence is a
/// caller concern.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Kind 0: opaque raw bytes.
    Bytes(Bytes),
    /// Kind 1: text bytes. Content is not required to be UTF-8 on the wire.
    Text(Bytes),
    /// Kind 2: flat sequence of 4-byte signed integers.
    Int32(Vec<i32>),
    /// Kind 3: flat sequence of 8-byte IEEE floats.
    Float64(Vec<f64>),
}

impl Payload {
    /// Wire kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Payload::Bytes(_) => Kind::Byte,
            Payload::Text(_) => Kind::Char,
            Payload::Int32(_) => Kind::Int32,
            Payload::Float64(_) => Kind::Float64,
        }
    }

    /// Number of elements (bytes for kinds 0 and 1).
    pub fn n_items(&self) -> u64 {
        match self {
            Payload::Bytes(b) | Payload::Text(b) => b.len() as u64,
            Payload::Int32(v) => v.len() as u64,
            Payload::Float64(v) => v.len() as u64,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.n_items() == 0
    }

    /// Wire metadata for this value.
    pub fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new(self.kind(), self.n_items())
    }

    /// Serialize the payload body in wire (little-endian) order.
    pub fn to_wire(&self) -> Bytes {
        match self {
            Payload::Bytes(b) | Payload::Text(b) => b.clone(),
            Payload::Int32(v) => {
                let mut buf = BytesMut::with_capacity(v.len() * 4);
                for item in v {
                    buf.put_i32_le(*item);
                }
                buf.freeze()
            }
            Payload::Float64(v) => {
                let mut buf = BytesMut::with_capacity(v.len() * 8);
                for item in v {
                    buf.put_f64_le(*item);
                }
                buf.freeze()
            }
        }
    }

    /// Deserialize a payload body received off the wire.
    ///
    /// `raw.len()` must be a multiple of the kind's element size; the codec
    /// guarantees this by validating the header before reading the body.
    pub fn from_wire(kind: Kind, raw: Bytes) -> Self {
        debug_assert_eq!(raw.len() % kind.element_size(), 0);
        match kind {
            Kind::Byte => Payload::Bytes(raw),
            Kind::Char => Payload::Text(raw),
            Kind::Int32 => Payload::Int32(
                raw.chunks_exact(4)
                    .map(|c| i32::from_le_bytes(c.try_into().unwrap()))
                    .collect(),
            ),
            Kind::Float64 => Payload::Float64(
                raw.chunks_exact(8)
                    .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
                    .collect(),
            ),
        }
    }

    /// Text bytes, if this is a text payload.
    pub fn as_text(&self) -> Option<&[u8]> {
        match self {
            Payload::Text(b) => Some(b.as_ref()),
            _ => None,
        }
    }

    /// Text content as UTF-8, if this is a text payload holding valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_text().and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn as_i32s(&self) -> Option<&[i32]> {
        match self {
            Payload::Int32(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_f64s(&self) -> Option<&[f64]> {
        match self {
            Payload::Float64(v) => Some(v.as_slice()),
            _ => None,
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(Bytes::copy_from_slice(text.as_bytes()))
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(Bytes::from(text.into_bytes()))
    }
}

impl From<Vec<u8>> for Payload {
    fn from(raw: Vec<u8>) -> Self {
        Payload::Bytes(Bytes::from(raw))
    }
}

impl From<Vec<i32>> for Payload {
    fn from(items: Vec<i32>) -> Self {
        Payload::Int32(items)
    }
}

impl From<Vec<f64>> for Payload {
    fn from(items: Vec<f64>) -> Self {
        Payload::Float64(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_from_text() {
        let payload = Payload::from("* READY");
        let descriptor = payload.descriptor();
        assert_eq!(descriptor.kind, Kind::Char);
        assert_eq!(descriptor.n_items, 7);
        assert_eq!(descriptor.n_bytes(), 7);
    }

    #[test]
    fn descriptor_from_int_sequence() {
        let payload = Payload::from((0..10).collect::<Vec<i32>>());
        let descriptor = payload.descriptor();
        assert_eq!(descriptor.kind, Kind::Int32);
        assert_eq!(descriptor.n_items, 10);
        assert_eq!(descriptor.n_bytes(), 40);
    }

    #[test]
    fn wire_roundtrip_every_kind() {
        let cases = vec![
            Payload::from(Vec::<u8>::from(&b"\x00\xff\x7f"[..])),
            Payload::from(""),
            Payload::from("* READY"),
            Payload::from((0..10).collect::<Vec<i32>>()),
            Payload::from(vec![-1.5f64, 0.0, 3.25e-7, 6.022e23]),
        ];

        for payload in cases {
            let raw = payload.to_wire();
            assert_eq!(raw.len() as u64, payload.descriptor().n_bytes());
            let decoded = Payload::from_wire(payload.kind(), raw);
            assert_eq!(decoded, payload);
        }
    }

    #[test]
    fn int_wire_bytes_are_little_endian() {
        let payload = Payload::from(vec![1i32, 256]);
        assert_eq!(payload.to_wire().as_ref(), &[1, 0, 0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn float_wire_bytes_are_little_endian() {
        let payload = Payload::from(vec![1.0f64]);
        assert_eq!(payload.to_wire().as_ref(), &1.0f64.to_le_bytes());
    }

    #[test]
    fn byte_and_text_kinds_stay_distinct() {
        let raw = Bytes::from_static(b"abc");
        assert_eq!(Payload::Bytes(raw.clone()).kind().code(), 0);
        assert_eq!(Payload::Text(raw.clone()).kind().code(), 1);
        assert_ne!(Payload::Bytes(raw.clone()), Payload::Text(raw));
    }

    #[test]
    fn accessors() {
        let text = Payload::from("hello");
        assert_eq!(text.as_str(), Some("hello"));
        assert_eq!(text.as_text(), Some(b"hello".as_ref()));
        assert!(text.as_i32s().is_none());

        let ints = Payload::from(vec![7i32]);
        assert_eq!(ints.as_i32s(), Some(&[7i32][..]));
        assert!(ints.as_str().is_none());

        let non_utf8 = Payload::Text(Bytes::from_static(&[0xff, 0xfe]));
        assert!(non_utf8.as_str().is_none());
        assert_eq!(non_utf8.as_text().map(<[u8]>::len), Some(2));
    }
}
