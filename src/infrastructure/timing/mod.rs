//! Debounce timers and request sequencing

mod debounce;
mod sequence;

pub use debounce::{DebouncePolicy, Debouncer};
pub use sequence::{KeyedSequencer, Ticket};
