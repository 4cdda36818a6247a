//! Transport seam between the protocol engine and the physical link.
//!
//! The engine only ever needs two operations: push a frame's bytes out, and
//! pull an exact number of buffered bytes in. [`FrameTransport`] captures
//! that contract; [`Loopback`] provides the in-memory FIFO used by tests and
//! demos to exercise the protocol without hardware.

use std::collections::VecDeque;

use thiserror::Error;

/// Errors surfaced by a [`FrameTransport`] implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Fewer bytes are buffered than the read requested.
    ///
    /// This is the ordinary "nothing yet" outcome of a non-blocking read,
    /// not a link fault.
    #[error("fewer bytes buffered than requested")]
    WouldBlock,
    /// The underlying link failed.
    #[error("transport I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Bidirectional byte channel with FIFO, byte-exact semantics.
///
/// `receive_exact` must be non-blocking: when fewer than `buf.len()` bytes
/// are currently buffered it fails immediately (normally with
/// [`TransportError::WouldBlock`]) and consumes nothing. Implementations are
/// expected to deliver bytes in transmission order.
pub trait FrameTransport {
    /// Transmit `bytes` over the link.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the link rejects the write.
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Fill `buf` with exactly `buf.len()` buffered bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::WouldBlock`] when not enough bytes are
    /// buffered, or another [`TransportError`] on link failure. Either way
    /// no bytes may be consumed.
    fn receive_exact(&mut self, buf: &mut [u8]) -> Result<(), TransportError>;
}

/// In-memory FIFO transport that echoes transmitted bytes back to the
/// receive side.
///
/// Debug/demo scaffolding mirroring a single shared bus: everything sent is
/// available for reception in order. Tests use [`corrupt_byte`] and
/// [`Loopback::drain`] to model transmission faults.
///
/// [`corrupt_byte`]: Loopback::corrupt_byte
#[derive(Debug, Default)]
pub struct Loopback {
    queue: VecDeque<u8>,
}

impl Loopback {
    /// Create an empty loopback queue.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Number of bytes currently buffered.
    #[must_use]
    pub fn buffered(&self) -> usize { self.queue.len() }

    /// Flip one bit of the byte at `index` in the buffered stream.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn corrupt_byte(&mut self, index: usize, mask: u8) {
        let byte = self
            .queue
            .get_mut(index)
            .unwrap_or_else(|| panic!("no buffered byte at index {index}"));
        *byte ^= mask;
    }

    /// Discard all buffered bytes.
    pub fn drain(&mut self) { self.queue.clear(); }
}

impl FrameTransport for Loopback {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.queue.extend(bytes);
        Ok(())
    }

    fn receive_exact(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
        if self.queue.len() < buf.len() {
            return Err(TransportError::WouldBlock);
        }
        for slot in buf.iter_mut() {
            *slot = self.queue.pop_front().unwrap_or_default();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameTransport, Loopback, TransportError};

    #[test]
    fn loopback_preserves_fifo_order() {
        let mut transport = Loopback::new();
        transport.transmit(&[1, 2, 3]).expect("transmit succeeds");
        transport.transmit(&[4, 5]).expect("transmit succeeds");

        let mut buf = [0_u8; 5];
        transport
            .receive_exact(&mut buf)
            .expect("all bytes buffered");
        assert_eq!(buf, [1, 2, 3, 4, 5]);
        assert_eq!(transport.buffered(), 0);
    }

    #[test]
    fn short_read_would_block_and_consumes_nothing() {
        let mut transport = Loopback::new();
        transport.transmit(&[1, 2]).expect("transmit succeeds");

        let mut buf = [0_u8; 3];
        let err = transport
            .receive_exact(&mut buf)
            .expect_err("only two bytes buffered");
        assert!(matches!(err, TransportError::WouldBlock));
        assert_eq!(transport.buffered(), 2);
    }

    #[test]
    fn corrupt_byte_flips_requested_bit() {
        let mut transport = Loopback::new();
        transport.transmit(&[0xF0]).expect("transmit succeeds");
        transport.corrupt_byte(0, 0x01);

        let mut buf = [0_u8; 1];
        transport.receive_exact(&mut buf).expect("byte buffered");
        assert_eq!(buf[0], 0xF1);
    }
}
