//! Outbound helper that splits packets into START, data, and END frames.
//!
//! [`Fragmenter`] turns one [`Packet`] into a frame sequence: a START frame
//! announcing the stream, `ceil(len / 8)` data frames carrying the payload
//! in order, and an END frame whose three-byte trailer lets the receiver
//! validate the assembly. The running checksum folds over the payload chunk
//! by chunk in emission order.
//!
//! The data frames reuse the identifier's `parameter` field as a sequence
//! number, displacing the packet's metadata byte; the END trailer restores
//! it. That overload is a wire-compatibility constraint and stays inside
//! this module and the reassembler.

use bytes::BytesMut;
use log::{debug, trace};

use super::SendError;
use crate::{
    checksum::Checksum8,
    packet::Packet,
    transport::FrameTransport,
    wire::{FRAME_PAYLOAD_LEN, Frame, PARAM_END, PARAM_START},
};

/// Splits outgoing packets into transport frames.
#[derive(Debug)]
pub struct Fragmenter {
    checksum: Checksum8,
}

impl Fragmenter {
    /// Create a fragmenter using `checksum` for END-trailer integrity.
    #[must_use]
    pub const fn new(checksum: Checksum8) -> Self { Self { checksum } }

    /// Fragment `packet` and transmit every frame over `transport`.
    ///
    /// The send path never touches reassembly state, so it may run
    /// concurrently with polling on the receive side.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] when any frame transmission fails. A failed
    /// transmission aborts the whole send.
    pub fn send_packet<T: FrameTransport>(
        &self,
        transport: &mut T,
        packet: &Packet,
    ) -> Result<(), SendError> {
        let payload = packet.payload();
        let id = packet.id();
        debug!(
            "sending packet (function {}, {} -> {}, parameter {:#04x}, {} bytes)",
            id.function,
            id.source,
            id.destination,
            id.parameter,
            payload.len(),
        );

        self.transmit_frame(transport, Frame::new(id.with_parameter(PARAM_START), &[]))?;

        let mut crc = 0_u8;
        let mut frame_count = 0_u8;
        for (sequence, chunk) in payload.chunks(FRAME_PAYLOAD_LEN).enumerate() {
            crc = (self.checksum)(crc, chunk);
            #[expect(
                clippy::cast_possible_truncation,
                reason = "at most 32 data frames for a 256 byte payload"
            )]
            let sequence = sequence as u8;
            self.transmit_frame(transport, Frame::new(id.with_parameter(sequence), chunk))?;
            frame_count = sequence + 1;
        }

        let trailer = [frame_count, crc, id.parameter];
        self.transmit_frame(transport, Frame::new(id.with_parameter(PARAM_END), &trailer))?;

        Ok(())
    }

    fn transmit_frame<T: FrameTransport>(
        &self,
        transport: &mut T,
        frame: Frame,
    ) -> Result<(), SendError> {
        let mut wire = BytesMut::with_capacity(frame.wire_len());
        frame.encode(&mut wire);
        trace!(
            "transmitting frame (parameter {:#04x}, {} payload bytes)",
            frame.id().parameter,
            frame.payload().len(),
        );
        transport.transmit(&wire)?;
        Ok(())
    }
}
