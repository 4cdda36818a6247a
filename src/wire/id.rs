//! Packed protocol identifier shared by frames and packets.
//!
//! The identifier groups the routing fields (source, destination, function)
//! with a one-byte `parameter`. On the wire it occupies a 32-bit
//! little-endian word laid out for CAN extended-identifier compatibility:
//!
//! ```text
//! bits  0..=7   parameter
//! bits  8..=14  source address
//! bits 15..=21  destination address
//! bits 22..=28  function identifier
//! bits 29..=31  reserved (zero)
//! ```
//!
//! Counting the parameter byte the identifier carries 29 bits of meaning,
//! which is where the original format's "29-bit extended identifier" note
//! comes from; the three 7-bit routing fields alone account for only 21 of
//! them. Consumers of the format should rely on the bit positions above,
//! not on either bit-count shorthand.

use super::address::{FunctionId, NodeAddress};

const SOURCE_SHIFT: u32 = 8;
const DESTINATION_SHIFT: u32 = 15;
const FUNCTION_SHIFT: u32 = 22;
const FIELD_MASK: u32 = 0x7F;

/// Routing and metadata fields identifying a frame or packet.
///
/// The `parameter` byte is application-defined packet metadata. During
/// transmission the fragmentation layer overloads it on individual frames
/// (boundary sentinels and data-frame sequence numbers); that overload never
/// escapes the fragmenter/reassembler pair, so holders of a `ProtocolId`
/// always see the packet's true metadata byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProtocolId {
    /// Application-defined metadata byte.
    pub parameter: u8,
    /// Address of the sending node.
    pub source: NodeAddress,
    /// Address of the receiving node, used for inbound filtering.
    pub destination: NodeAddress,
    /// Logical packet stream this identifier belongs to.
    pub function: FunctionId,
}

impl ProtocolId {
    /// Construct an identifier from its fields.
    #[must_use]
    pub const fn new(
        function: FunctionId,
        source: NodeAddress,
        destination: NodeAddress,
        parameter: u8,
    ) -> Self {
        Self {
            parameter,
            source,
            destination,
            function,
        }
    }

    /// Return a copy with a different `parameter` byte.
    ///
    /// The fragmentation layer uses this to stamp sentinels and sequence
    /// numbers onto outgoing frames without mutating the packet identifier.
    #[must_use]
    pub const fn with_parameter(self, parameter: u8) -> Self {
        Self { parameter, ..self }
    }

    /// Pack the identifier into its 32-bit wire representation.
    #[must_use]
    pub fn pack(self) -> u32 {
        u32::from(self.parameter)
            | (u32::from(self.source.get()) << SOURCE_SHIFT)
            | (u32::from(self.destination.get()) << DESTINATION_SHIFT)
            | (u32::from(self.function.get()) << FUNCTION_SHIFT)
    }

    /// Unpack an identifier from its 32-bit wire representation.
    ///
    /// The three reserved high bits are ignored; each field is masked to its
    /// seven-bit width, so any `u32` produces a valid identifier.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "fields are masked to 7 or 8 bits before narrowing"
    )]
    pub fn unpack(word: u32) -> Self {
        Self {
            parameter: (word & 0xFF) as u8,
            source: NodeAddress::new(((word >> SOURCE_SHIFT) & FIELD_MASK) as u8),
            destination: NodeAddress::new(((word >> DESTINATION_SHIFT) & FIELD_MASK) as u8),
            function: FunctionId::new(((word >> FUNCTION_SHIFT) & FIELD_MASK) as u8),
        }
    }
}
