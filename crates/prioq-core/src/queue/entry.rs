//! The entries stored inside a priority queue.

use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The priority of an entry. Larger values are served first.
pub type Priority = u32;

/// The insertion counter of an entry.
pub type Sequence = u64;

/// A value stored in a [`PriorityQueue`], together with its
/// [`Priority`] and [`Sequence`] number.
///
/// Entries are only created by [`PriorityQueue::enqueue`].
///
/// [`PriorityQueue`]: super::PriorityQueue
/// [`PriorityQueue::enqueue`]: super::PriorityQueue::enqueue
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<T> {
    value: T,
    priority: Priority,
    sequence: Sequence,
}

impl<T> Entry<T> {
    pub(crate) const fn new(value: T, priority: Priority, sequence: Sequence) -> Self {
        Self {
            value,
            priority,
            sequence,
        }
    }

    /// Returns a reference to the value of the entry.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the priority the entry was enqueued with.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the sequence number the queue assigned to the entry.
    pub fn sequence(&self) -> Sequence {
        self.sequence
    }

    /// Consumes the entry, returning its value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Compares the [rank] of two entries.
    ///
    /// Returns [`Ordering::Greater`] if `self` would be dequeued before `other`.
    /// Two entries only compare [`Equal`] if they share a sequence number,
    /// which never happens for two entries of the same queue.
    ///
    /// # Examples
    /// ```
    /// # use core::cmp::Ordering;
    /// # use prioq_core::PriorityQueue;
    /// let mut queue: PriorityQueue<&str> = PriorityQueue::new();
    /// queue.enqueue("bird", 40).unwrap();
    /// queue.enqueue("chicken", 40).unwrap();
    ///
    /// let entries: Vec<_> = queue.iter().collect();
    /// let (bird, chicken) = (entries[0], entries[1]);
    /// assert_eq!(bird.rank_cmp(chicken), Ordering::Greater);
    /// assert!(chicken.ranks_below(bird));
    /// ```
    ///
    /// [rank]: super#rank
    /// [`Equal`]: Ordering::Equal
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            // an earlier sequence number ranks higher
            .then_with(|| other.sequence.cmp(&self.sequence))
    }

    /// Returns `true` if `self` would be dequeued after `other`.
    pub fn ranks_below(&self, other: &Self) -> bool {
        self.rank_cmp(other) == Ordering::Less
    }

    pub(crate) fn into_pair(self) -> (Sequence, T) {
        (self.sequence, self.value)
    }
}
