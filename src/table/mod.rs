//! Internal hash-table machinery: slots, the backing array, and probing.
//!
//! Nothing in this module is public API. The layering is strict:
//!
//! - [`slot`] owns the slot states and the backing array; it is the only
//!   code that indexes storage directly.
//! - [`probe`] turns a key hash and a capacity into the deterministic
//!   sequence of candidate slot indices used by every lookup.
//!
//! The set core in [`crate::set`] drives both; the functional layer never
//! reaches down here.

pub(crate) mod probe;
pub(crate) mod slot;

pub(crate) use probe::{ProbeSequence, compute_hash};
pub(crate) use slot::{Slot, SlotStore};
