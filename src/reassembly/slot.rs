//! Fixed-capacity pool of reassembly slots.
//!
//! Each slot is one concurrent reassembly context, keyed by the function
//! identifier of the packet it is collecting. The pool is an arena with a
//! linear scan: lowest index wins, an existing assembly is always found
//! before a free slot is claimed, so at most one slot ever assembles a
//! given function identifier.

use std::{
    num::NonZeroUsize,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::{
    packet::Packet,
    wire::{FunctionId, MAX_PACKET_LEN, ProtocolId},
};

/// Assembly lifecycle of a single slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SlotState {
    /// The slot holds no packet and may be claimed by the next START frame.
    Idle,
    /// The slot is accumulating data frames for its function identifier.
    Assembling,
}

/// One reassembly context: state tag, identifier, and accumulated payload.
#[derive(Debug)]
pub(crate) struct Slot {
    state: SlotState,
    id: ProtocolId,
    buffer: Vec<u8>,
}

impl Slot {
    fn new() -> Self {
        Self {
            state: SlotState::Idle,
            id: ProtocolId::default(),
            buffer: Vec::with_capacity(MAX_PACKET_LEN),
        }
    }

    pub(crate) fn is_assembling(&self) -> bool { self.state == SlotState::Assembling }

    pub(crate) fn function(&self) -> FunctionId { self.id.function }

    /// Accumulated payload length so far.
    pub(crate) fn len(&self) -> usize { self.buffer.len() }

    pub(crate) fn buffer(&self) -> &[u8] { self.buffer.as_slice() }

    /// Claim the slot for a fresh assembly, discarding any previous content.
    ///
    /// The identifier's parameter byte is zeroed; the packet's true
    /// metadata only becomes known from the END trailer.
    pub(crate) fn begin(&mut self, id: ProtocolId) {
        self.state = SlotState::Assembling;
        self.buffer.clear();
        self.id = id.with_parameter(0);
    }

    pub(crate) fn append(&mut self, bytes: &[u8]) {
        debug_assert!(self.is_assembling());
        debug_assert!(self.buffer.len() + bytes.len() <= MAX_PACKET_LEN);
        self.buffer.extend_from_slice(bytes);
    }

    /// Discard the partial assembly and return the slot to idle.
    pub(crate) fn abort(&mut self) {
        self.state = SlotState::Idle;
        self.buffer.clear();
    }

    /// Complete the assembly, yielding the packet and freeing the slot.
    pub(crate) fn finish(&mut self, parameter: u8) -> Packet {
        self.state = SlotState::Idle;
        let payload = std::mem::take(&mut self.buffer);
        Packet::from_assembled(self.id.with_parameter(parameter), payload)
    }
}

/// Fixed pool of reassembly slots guarded by a single mutex.
///
/// The lock lives inside the table so every resolution-plus-mutation is one
/// scoped acquisition, released on every exit path and never held across a
/// transport call. Capacity bounds how many packets may be mid-reassembly at
/// once; a slot whose END frame never arrives stays claimed indefinitely,
/// permanently consuming capacity — the protocol defines no timeout, so
/// callers that care must recover at a higher layer.
#[derive(Debug)]
pub struct SlotTable {
    capacity: NonZeroUsize,
    slots: Mutex<Vec<Slot>>,
}

impl SlotTable {
    /// Create a table with `capacity` slots, all idle.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        let slots = (0..capacity.get()).map(|_| Slot::new()).collect();
        Self {
            capacity,
            slots: Mutex::new(slots),
        }
    }

    /// Number of slots in the pool.
    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity.get() }

    /// Number of slots currently mid-assembly.
    #[must_use]
    pub fn assembling(&self) -> usize {
        self.lock().iter().filter(|slot| slot.is_assembling()).count()
    }

    /// Whether a packet for `function` is currently being assembled.
    #[must_use]
    pub fn is_assembling(&self, function: FunctionId) -> bool {
        self.lock()
            .iter()
            .any(|slot| slot.is_assembling() && slot.function() == function)
    }

    /// Resolve the slot for `function` and run `op` on it under the lock.
    ///
    /// First pass looks for an assembly already in progress for `function`;
    /// second pass claims the first idle slot. Returns `None` when every
    /// slot is busy with another stream.
    pub(crate) fn resolve_and<R>(
        &self,
        function: FunctionId,
        op: impl FnOnce(&mut Slot) -> R,
    ) -> Option<R> {
        let mut slots = self.lock();
        let index = slots
            .iter()
            .position(|slot| slot.is_assembling() && slot.function() == function)
            .or_else(|| slots.iter().position(|slot| !slot.is_assembling()))?;
        Some(op(&mut slots[index]))
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Slot>> {
        // A panic mid-mutation can only leave a slot with a stale partial
        // buffer, which the next START or abort clears; recover the guard.
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
