//! Errors classified by the receive-side state machine.

use thiserror::Error;

use crate::wire::{MAX_PACKET_LEN, NodeAddress, WireError};

/// Errors reported by a single receive poll.
///
/// All of these are scoped to one frame or one reassembly slot; they never
/// disturb other slots or the table. Non-error poll results (`NoData`,
/// `InProgress`) travel in [`PollOutcome`](super::PollOutcome) instead.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ReceiveError {
    /// The frame is addressed to another node and was discarded untouched.
    ///
    /// Expected in shared-medium use; nothing about the local state changed.
    #[error("frame addressed to {destination}, local address is {local}")]
    InvalidAddress {
        destination: NodeAddress,
        local: NodeAddress,
    },
    /// Every reassembly slot is already mid-assembly.
    ///
    /// Transient backpressure: resolves when another packet completes, or
    /// calls for a larger slot capacity.
    #[error("no free reassembly slot (capacity {capacity})")]
    NoFreeSlot { capacity: usize },
    /// The frame or packet stream violates the wire format.
    ///
    /// Aborts only the affected slot, which returns to idle.
    #[error("invalid packet format: {0}")]
    InvalidFormat(#[from] FormatError),
    /// The assembled payload does not match the sender's checksum.
    ///
    /// Aborts only the affected slot, which returns to idle.
    #[error("packet checksum mismatch: sender reported {reported:#04x}, computed {computed:#04x}")]
    InvalidCrc { reported: u8, computed: u8 },
}

/// Format violations detected while assembling a packet.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The frame header itself was malformed.
    #[error("malformed frame: {0}")]
    Frame(#[from] WireError),
    /// An END frame arrived with no packet in progress for its stream.
    #[error("end frame without a packet in progress")]
    UnexpectedEnd,
    /// The END frame's payload is shorter than its three-byte trailer.
    #[error("end frame carries {len} bytes, trailer needs 3")]
    TruncatedTrailer { len: usize },
    /// The sender's data-frame count disagrees with what was assembled.
    #[error("data frame count mismatch: sender reported {reported}, assembled {assembled}")]
    FrameCountMismatch { reported: u8, assembled: u8 },
    /// Appending the frame would push the packet past [`MAX_PACKET_LEN`].
    #[error(
        "payload would exceed {MAX_PACKET_LEN} bytes ({accumulated} assembled + {incoming} incoming)"
    )]
    PayloadOverflow { accumulated: usize, incoming: usize },
}
