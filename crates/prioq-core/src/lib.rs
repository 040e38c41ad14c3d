#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub mod queue;
pub mod util;

pub use error::QueueError;
pub use queue::{Entry, PriorityQueue, DEFAULT_CAPACITY};
