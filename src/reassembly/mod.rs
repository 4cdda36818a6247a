//! Receive-side state machine reassembling frames into packets.
//!
//! One [`Reassembler`] owns a fixed pool of reassembly slots and consumes a
//! single frame per poll, so the caller stays in control of scheduling. The
//! slot table is the only shared mutable state in the crate; every
//! resolution-plus-mutation against it happens under one scoped lock
//! acquisition.

pub mod error;
pub mod reassembler;
pub mod slot;

pub use error::{FormatError, ReceiveError};
pub use reassembler::{PollOutcome, Reassembler};
pub use slot::SlotTable;
