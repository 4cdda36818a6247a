//! Five-byte frame header codec.
//!
//! Byte 0 packs the payload length (low nibble), two reserved bits, the
//! request flag (bit 6), and the extended-identifier flag (bit 7). Bytes 1–4
//! hold the packed [`ProtocolId`] in little-endian order.

use thiserror::Error;

use super::{FRAME_PAYLOAD_LEN, HEADER_LEN, ProtocolId};

const PAYLOAD_LEN_MASK: u8 = 0x0F;
const REQUEST_BIT: u8 = 0x40;
const EXTENDED_BIT: u8 = 0x80;

/// Errors raised while decoding wire bytes into frame structures.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// Fewer bytes were supplied than a header occupies.
    #[error("header needs {HEADER_LEN} bytes, got {len}")]
    HeaderTooShort { len: usize },
    /// The declared payload length exceeds the frame data field.
    ///
    /// The four-bit field can encode values up to 15; anything above
    /// [`FRAME_PAYLOAD_LEN`] cannot belong to a well-formed frame.
    #[error("declared payload length {len} exceeds the {FRAME_PAYLOAD_LEN} byte frame limit")]
    PayloadLength { len: u8 },
}

/// Decoded frame header: declared payload length, flag bits, and identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHeader {
    payload_len: u8,
    request: bool,
    extended: bool,
    id: ProtocolId,
}

impl FrameHeader {
    /// Construct a header for a frame carrying `payload_len` data bytes.
    ///
    /// The request and extended flags are cleared; the sender of the
    /// original format never sets them.
    ///
    /// # Panics
    ///
    /// Panics if `payload_len` exceeds [`FRAME_PAYLOAD_LEN`].
    #[must_use]
    pub fn new(id: ProtocolId, payload_len: usize) -> Self {
        assert!(
            payload_len <= FRAME_PAYLOAD_LEN,
            "frame payload length out of range"
        );
        #[expect(
            clippy::cast_possible_truncation,
            reason = "asserted to fit the 4-bit field"
        )]
        let payload_len = payload_len as u8;
        Self {
            payload_len,
            request: false,
            extended: false,
            id,
        }
    }

    /// Number of payload bytes that follow this header on the wire.
    #[must_use]
    pub const fn payload_len(&self) -> usize { self.payload_len as usize }

    /// Whether the request flag is set.
    #[must_use]
    pub const fn request(&self) -> bool { self.request }

    /// Whether the extended-identifier flag is set.
    #[must_use]
    pub const fn extended(&self) -> bool { self.extended }

    /// The frame's protocol identifier.
    #[must_use]
    pub const fn id(&self) -> ProtocolId { self.id }

    /// Encode the header into its five-byte wire form.
    #[must_use]
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0_u8; HEADER_LEN];
        bytes[0] = self.payload_len & PAYLOAD_LEN_MASK;
        if self.request {
            bytes[0] |= REQUEST_BIT;
        }
        if self.extended {
            bytes[0] |= EXTENDED_BIT;
        }
        bytes[1..].copy_from_slice(&self.id.pack().to_le_bytes());
        bytes
    }

    /// Decode a header from the first [`HEADER_LEN`] bytes of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::HeaderTooShort`] when fewer than five bytes are
    /// supplied, or [`WireError::PayloadLength`] when the declared payload
    /// length cannot fit a frame's data field.
    pub fn decode(bytes: &[u8]) -> Result<Self, WireError> {
        let Some(raw) = bytes.first_chunk::<HEADER_LEN>() else {
            return Err(WireError::HeaderTooShort { len: bytes.len() });
        };
        let payload_len = raw[0] & PAYLOAD_LEN_MASK;
        if payload_len as usize > FRAME_PAYLOAD_LEN {
            return Err(WireError::PayloadLength { len: payload_len });
        }
        let word = u32::from_le_bytes([raw[1], raw[2], raw[3], raw[4]]);
        Ok(Self {
            payload_len,
            request: raw[0] & REQUEST_BIT != 0,
            extended: raw[0] & EXTENDED_BIT != 0,
            id: ProtocolId::unpack(word),
        })
    }
}
