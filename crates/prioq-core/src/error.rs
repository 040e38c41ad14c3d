//! Errors returned by the priority queue.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An error returned when an operation's precondition does not hold.
///
/// A call that returns one of these leaves the queue exactly
/// as it was before the call.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueError {
    /// An entry was enqueued while the queue already held `capacity` entries.
    CapacityExceeded { capacity: usize },
    /// An entry was dequeued while the queue was empty.
    EmptyQueue,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "priority queue is full (capacity {})", capacity)
            }
            Self::EmptyQueue => f.write_str("priority queue is empty"),
        }
    }
}

impl core::error::Error for QueueError {}
