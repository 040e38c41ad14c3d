//! Priority queue implementations.
//!
//! This module contains a fixed-capacity priority queue backed by a binary heap
//! stored in one contiguous buffer.
//!
//! # Requirements for a valid priority queue
//!
//! A priority queue has a number of invariants that must be upheld by its
//! implementation. [`PriorityQueue`] upholds every one of them.
//!
//! <h4 id="rank"><a href=#rank>The rank of an entry</a></h4>
//!
//! Every entry carries a [`Priority`] supplied by the caller and a
//! [`Sequence`] number assigned by the queue when the entry is enqueued.
//! An entry **ranks below** another entry if
//!
//! > **its priority is smaller, or the priorities are equal and its sequence number is larger.**
//!
//! In other words, larger priorities are served first, and entries with the
//! same priority are served in the order they were enqueued. This is stricter
//! than [`BinaryHeap`] in the standard library, which makes no promise about the
//! order of equal elements.
//!
//! ### Sequence numbers
//!
//! The first entry enqueued into a queue is given the sequence number `1`, and
//! every later entry is given the next one. Sequence numbers are never reused,
//! even after the entry that owned one has been dequeued.
//!
//! ### Capacity
//!
//! A queue never holds more than its capacity. Enqueueing into a full queue and
//! dequeueing from an empty queue both return a [`QueueError`] and leave the
//! queue untouched.
//!
//! [`BinaryHeap`]: alloc::collections::BinaryHeap
//! [`QueueError`]: crate::error::QueueError

pub mod binary;
pub mod entry;

pub use binary::{Drain, Iter, PriorityQueue, DEFAULT_CAPACITY};
pub use entry::{Entry, Priority, Sequence};
