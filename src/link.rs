//! Owning endpoint pairing the fragmenter and reassembler over one
//! transport.
//!
//! [`Link`] is configured once with the transport and never re-bound; the
//! type system makes the original design's "reject initialization with a
//! missing function" check unrepresentable. The send path and the receive
//! path share nothing but the transport: sending never touches the slot
//! table.

use std::num::NonZeroUsize;

use crate::{
    checksum::{Checksum8, crc8},
    fragment::{Fragmenter, SendError},
    packet::Packet,
    reassembly::{PollOutcome, Reassembler, ReceiveError, SlotTable},
    transport::FrameTransport,
    wire::NodeAddress,
};

/// Settings bounding a link's reassembly resources and integrity checking.
#[derive(Clone, Copy, Debug)]
pub struct LinkConfig {
    /// Number of packets that may be mid-reassembly concurrently.
    pub slot_capacity: NonZeroUsize,
    /// Running checksum folded over payload bytes; both peers must agree.
    pub checksum: Checksum8,
}

impl LinkConfig {
    /// Default concurrent reassembly capacity.
    pub const DEFAULT_SLOT_CAPACITY: NonZeroUsize = NonZeroUsize::new(2).expect("2 is non-zero");
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            slot_capacity: Self::DEFAULT_SLOT_CAPACITY,
            checksum: crc8,
        }
    }
}

/// One end of the link: fragmentation, reassembly, and the transport they
/// share.
#[derive(Debug)]
pub struct Link<T: FrameTransport> {
    transport: T,
    fragmenter: Fragmenter,
    reassembler: Reassembler,
}

impl<T: FrameTransport> Link<T> {
    /// Create a link over `transport` with the default configuration.
    #[must_use]
    pub fn new(transport: T) -> Self { Self::with_config(transport, LinkConfig::default()) }

    /// Create a link over `transport` with an explicit configuration.
    #[must_use]
    pub fn with_config(transport: T, config: LinkConfig) -> Self {
        Self {
            transport,
            fragmenter: Fragmenter::new(config.checksum),
            reassembler: Reassembler::new(SlotTable::new(config.slot_capacity), config.checksum),
        }
    }

    /// Fragment `packet` and transmit its frames.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] when any frame transmission fails; a failed
    /// transmission aborts the whole send.
    pub fn send_packet(&mut self, packet: &Packet) -> Result<(), SendError> {
        self.fragmenter.send_packet(&mut self.transport, packet)
    }

    /// Read and process at most one frame addressed to `local`.
    ///
    /// See [`Reassembler::poll_receive`] for outcome and error semantics.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiveError`] when a frame is misaddressed, no slot is
    /// free, or a stream fails validation.
    pub fn poll_receive(&mut self, local: NodeAddress) -> Result<PollOutcome, ReceiveError> {
        self.reassembler.poll_receive(&mut self.transport, local)
    }

    /// The reassembler driving this link's receive side.
    #[must_use]
    pub const fn reassembler(&self) -> &Reassembler { &self.reassembler }

    /// Borrow the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T { &self.transport }

    /// Mutably borrow the underlying transport.
    pub const fn transport_mut(&mut self) -> &mut T { &mut self.transport }

    /// Consume the link, returning the transport.
    #[must_use]
    pub fn into_transport(self) -> T { self.transport }
}
