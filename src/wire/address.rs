//! Seven-bit address and function-identifier newtypes.
//!
//! The identifier word reserves seven bits each for the source address,
//! destination address, and function identifier. These wrappers keep the
//! range invariant at construction time so the packing code never has to
//! mask or re-validate.

use derive_more::Display;
use thiserror::Error;

/// Upper bound (inclusive) for seven-bit identifier fields.
pub const MAX_FIELD_VALUE: u8 = 0x7F;

/// Error returned when a seven-bit field is constructed out of range.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("{field} {value:#04x} exceeds the 7-bit maximum {MAX_FIELD_VALUE:#04x}")]
pub struct AddressRange {
    field: &'static str,
    value: u8,
}

impl AddressRange {
    /// The out-of-range value that was rejected.
    #[must_use]
    pub const fn value(&self) -> u8 { self.value }
}

/// Seven-bit node address (0–127) used for source and destination fields.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash)]
#[display("{_0:#04x}")]
pub struct NodeAddress(u8);

impl NodeAddress {
    /// Create a new address.
    ///
    /// # Panics
    ///
    /// Panics if `value` exceeds 127.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value <= MAX_FIELD_VALUE, "node address out of 7-bit range");
        Self(value)
    }

    /// Fallible constructor validating the seven-bit range.
    ///
    /// # Errors
    ///
    /// Returns [`AddressRange`] if `value` exceeds 127.
    pub const fn try_new(value: u8) -> Result<Self, AddressRange> {
        if value > MAX_FIELD_VALUE {
            return Err(AddressRange {
                field: "node address",
                value,
            });
        }
        Ok(Self(value))
    }

    /// Return the raw address value.
    #[must_use]
    pub const fn get(self) -> u8 { self.0 }
}

/// Seven-bit function identifier naming the logical packet stream a frame
/// belongs to.
///
/// Frames carrying the same function identifier are demultiplexed into the
/// same reassembly slot; distinct identifiers may assemble concurrently.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash)]
#[display("{_0:#04x}")]
pub struct FunctionId(u8);

impl FunctionId {
    /// Create a new function identifier.
    ///
    /// # Panics
    ///
    /// Panics if `value` exceeds 127.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(
            value <= MAX_FIELD_VALUE,
            "function id out of 7-bit range"
        );
        Self(value)
    }

    /// Fallible constructor validating the seven-bit range.
    ///
    /// # Errors
    ///
    /// Returns [`AddressRange`] if `value` exceeds 127.
    pub const fn try_new(value: u8) -> Result<Self, AddressRange> {
        if value > MAX_FIELD_VALUE {
            return Err(AddressRange {
                field: "function id",
                value,
            });
        }
        Ok(Self(value))
    }

    /// Return the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u8 { self.0 }
}
