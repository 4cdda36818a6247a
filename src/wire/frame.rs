//! Complete wire frame: header plus inline payload storage.

use bytes::BytesMut;

use super::{FRAME_PAYLOAD_LEN, FrameHeader, ProtocolId, WireError};

/// Smallest transmittable unit: a [`FrameHeader`] and up to eight payload
/// bytes.
///
/// Payload storage is inline; the valid prefix is given by the header's
/// declared length, so a `Frame` never allocates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    header: FrameHeader,
    payload: [u8; FRAME_PAYLOAD_LEN],
}

impl Frame {
    /// Build a frame carrying `payload` under identifier `id`.
    ///
    /// # Panics
    ///
    /// Panics if `payload` exceeds [`FRAME_PAYLOAD_LEN`] bytes.
    #[must_use]
    pub fn new(id: ProtocolId, payload: &[u8]) -> Self {
        let header = FrameHeader::new(id, payload.len());
        let mut storage = [0_u8; FRAME_PAYLOAD_LEN];
        storage[..payload.len()].copy_from_slice(payload);
        Self {
            header,
            payload: storage,
        }
    }

    /// Rebuild a frame from a decoded header and its payload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::PayloadLength`] when `payload` does not match
    /// the header's declared length.
    pub fn from_parts(header: FrameHeader, payload: &[u8]) -> Result<Self, WireError> {
        if payload.len() != header.payload_len() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "mismatched lengths above 255 still identify the fault"
            )]
            return Err(WireError::PayloadLength {
                len: payload.len() as u8,
            });
        }
        let mut storage = [0_u8; FRAME_PAYLOAD_LEN];
        storage[..payload.len()].copy_from_slice(payload);
        Ok(Self {
            header,
            payload: storage,
        })
    }

    /// The frame header.
    #[must_use]
    pub const fn header(&self) -> FrameHeader { self.header }

    /// The frame's protocol identifier.
    #[must_use]
    pub const fn id(&self) -> ProtocolId { self.header.id() }

    /// The valid payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] { &self.payload[..self.header.payload_len()] }

    /// Total wire size of this frame in bytes (header plus payload).
    #[must_use]
    pub const fn wire_len(&self) -> usize {
        super::HEADER_LEN + self.header.payload_len()
    }

    /// Encode the frame, appending its wire bytes to `dst`.
    pub fn encode(&self, dst: &mut BytesMut) {
        dst.extend_from_slice(&self.header.encode());
        dst.extend_from_slice(self.payload());
    }
}
