//! Wire-level data model for CAN-compatible protocol frames.
//!
//! This module defines the byte layout shared by both ends of the link: the
//! packed protocol identifier, the five-byte frame header, and the frame
//! itself with its zero-to-eight byte payload. Everything here is pure
//! layout; encoding and decoding are lossless and deterministic, and no
//! protocol state lives at this level.

pub mod address;
pub mod frame;
pub mod header;
pub mod id;

pub use address::{AddressRange, FunctionId, NodeAddress};
pub use frame::Frame;
pub use header::{FrameHeader, WireError};
pub use id::ProtocolId;

/// Maximum payload bytes carried by a single frame (CAN data field size).
pub const FRAME_PAYLOAD_LEN: usize = 8;

/// Maximum payload bytes carried by a logical packet.
///
/// Raising this above 256 would require widening the frame-count byte in the
/// END trailer.
pub const MAX_PACKET_LEN: usize = 256;

/// Encoded size of a [`FrameHeader`] in bytes.
pub const HEADER_LEN: usize = 5;

/// `parameter` sentinel marking the frame that opens a packet.
pub const PARAM_START: u8 = 0xFB;

/// `parameter` sentinel marking the frame that closes a packet.
pub const PARAM_END: u8 = 0xFE;

#[cfg(test)]
mod tests;
