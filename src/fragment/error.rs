//! Errors produced while fragmenting and transmitting a packet.

use thiserror::Error;

use crate::transport::TransportError;

/// Error aborting a packet send.
///
/// A send is all-or-nothing: the first failed frame transmission abandons
/// the whole packet with no retry, leaving the receiver to discard the
/// partial stream via its END-frame validation. Oversized payloads cannot
/// reach the fragmenter because [`Packet::new`](crate::Packet::new) bounds
/// them at construction.
#[derive(Debug, Error)]
#[error("transport rejected a frame: {0}")]
pub struct SendError(#[from] pub TransportError);
