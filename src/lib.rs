//! Public API for the `canlink` library.
//!
//! `canlink` fragments logical packets (up to 256 payload bytes plus an
//! identifier) into CAN-compatible frames of at most 8 payload bytes, and
//! reassembles received frames back into packets with address filtering,
//! frame-count accounting, and an 8-bit running checksum. Several packets,
//! demultiplexed by their function identifier, may be mid-reassembly
//! concurrently within a fixed slot pool.
//!
//! The protocol is fire-and-forget: corruption is detected locally and the
//! affected assembly discarded, but nothing is retransmitted or
//! acknowledged.
//!
//! # Example
//!
//! ```
//! use canlink::{
//!     FunctionId,
//!     Link,
//!     NodeAddress,
//!     Packet,
//!     PollOutcome,
//!     ProtocolId,
//!     transport::Loopback,
//! };
//!
//! let mut link = Link::new(Loopback::new());
//! let id = ProtocolId::new(
//!     FunctionId::new(0x43),
//!     NodeAddress::new(0x01),
//!     NodeAddress::new(0x02),
//!     0x12,
//! );
//! let packet = Packet::new(id, (0_u8..50).collect())?;
//! link.send_packet(&packet)?;
//!
//! // Poll until the loopback stream yields the reassembled packet.
//! loop {
//!     match link.poll_receive(NodeAddress::new(0x02))? {
//!         PollOutcome::Complete(received) => {
//!             assert_eq!(received, packet);
//!             break;
//!         }
//!         PollOutcome::InProgress => {}
//!         PollOutcome::NoData => panic!("loopback ran dry"),
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod checksum;
pub mod fragment;
pub mod link;
pub mod packet;
pub mod reassembly;
pub mod transport;
pub mod wire;

pub use checksum::{Checksum8, crc8};
pub use fragment::{Fragmenter, SendError};
pub use link::{Link, LinkConfig};
pub use packet::{Packet, PacketTooLarge};
pub use reassembly::{FormatError, PollOutcome, Reassembler, ReceiveError, SlotTable};
pub use transport::{FrameTransport, TransportError};
pub use wire::{
    FRAME_PAYLOAD_LEN,
    Frame,
    FrameHeader,
    FunctionId,
    HEADER_LEN,
    MAX_PACKET_LEN,
    NodeAddress,
    ProtocolId,
    WireError,
};
