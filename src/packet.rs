//! Logical packet type carried by the fragmentation layer.

use thiserror::Error;

use crate::wire::{MAX_PACKET_LEN, ProtocolId};

/// Error returned when a packet payload exceeds [`MAX_PACKET_LEN`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("packet payload of {len} bytes exceeds the {MAX_PACKET_LEN} byte limit")]
pub struct PacketTooLarge {
    len: usize,
}

impl PacketTooLarge {
    /// The rejected payload length.
    #[must_use]
    pub const fn payload_len(&self) -> usize { self.len }
}

/// Application-level message: an identifier and up to 256 payload bytes.
///
/// The identifier's `parameter` byte is application metadata and travels in
/// the END frame's trailer, untouched by the per-frame sequencing overload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packet {
    id: ProtocolId,
    payload: Vec<u8>,
}

impl Packet {
    /// Build a packet from an identifier and payload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PacketTooLarge`] when `payload` exceeds [`MAX_PACKET_LEN`]
    /// bytes; the END trailer's frame-count byte cannot account for more.
    pub fn new(id: ProtocolId, payload: Vec<u8>) -> Result<Self, PacketTooLarge> {
        if payload.len() > MAX_PACKET_LEN {
            return Err(PacketTooLarge { len: payload.len() });
        }
        Ok(Self { id, payload })
    }

    /// The packet identifier.
    #[must_use]
    pub const fn id(&self) -> ProtocolId { self.id }

    /// Borrow the payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] { self.payload.as_slice() }

    /// Consume the packet, returning the owned payload bytes.
    #[must_use]
    pub fn into_payload(self) -> Vec<u8> { self.payload }

    pub(crate) fn from_assembled(id: ProtocolId, payload: Vec<u8>) -> Self {
        debug_assert!(payload.len() <= MAX_PACKET_LEN);
        Self { id, payload }
    }
}
