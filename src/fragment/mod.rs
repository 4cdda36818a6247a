//! Send-side fragmentation of packets into wire frames.

pub mod error;
pub mod fragmenter;

pub use error::SendError;
pub use fragmenter::Fragmenter;
