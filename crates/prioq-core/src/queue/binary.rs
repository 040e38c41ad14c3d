//! A priority queue implemented as a binary heap.

use alloc::vec::Vec;
use core::{iter::FusedIterator, slice};

use log::{debug, trace};

use super::entry::{Entry, Priority, Sequence};
use crate::{
    error::QueueError,
    util::{left, parent, right},
};

/// The capacity of a [`PriorityQueue`] when none is specified.
pub const DEFAULT_CAPACITY: usize = 100;

/// A priority queue implemented as a binary heap over a fixed-capacity buffer.
///
/// The queue can hold at most `N` entries. The buffer for all of them is
/// allocated once when the queue is created and is never grown.
///
/// See the [module level documentation](super) for the order entries are dequeued in.
#[derive(Debug)]
pub struct PriorityQueue<T, const N: usize = DEFAULT_CAPACITY> {
    // entries[0..len] always form a valid heap
    entries: Vec<Entry<T>>,
    // the most recently assigned sequence number
    sequence: Sequence,
}

impl<T, const N: usize> PriorityQueue<T, N> {
    /// Creates a new, empty priority queue.
    ///
    /// # Examples
    /// ```
    /// # use prioq_core::PriorityQueue;
    /// let mut queue: PriorityQueue<u32> = PriorityQueue::new();
    ///
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.capacity(), 100);
    /// assert!(queue.dequeue().is_err());
    /// ```
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(N),
            sequence: 0,
        }
    }

    /// Adds a `value` to the queue with the specified `priority`.
    ///
    /// The entry is assigned the next [sequence number], which
    /// decides its place among entries with the same priority.
    ///
    /// # Errors
    /// Returns [`QueueError::CapacityExceeded`] if the queue already holds
    /// [`capacity`] entries. The queue is left unchanged and `value` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use prioq_core::{PriorityQueue, QueueError};
    /// let mut queue = PriorityQueue::<&str, 2>::new();
    ///
    /// queue.enqueue("dog", 50).unwrap();
    /// queue.enqueue("cat", 30).unwrap();
    /// assert_eq!(
    ///     queue.enqueue("bird", 40),
    ///     Err(QueueError::CapacityExceeded { capacity: 2 }),
    /// );
    /// assert_eq!(queue.size(), 2);
    /// ```
    ///
    /// [sequence number]: super#sequence-numbers
    /// [`capacity`]: PriorityQueue::capacity
    pub fn enqueue(&mut self, value: T, priority: Priority) -> Result<(), QueueError> {
        if self.is_full() {
            debug!(
                "rejected entry with priority {}: queue is at capacity {}",
                priority, N
            );
            return Err(QueueError::CapacityExceeded { capacity: N });
        }

        self.sequence += 1;
        self.entries
            .push(Entry::new(value, priority, self.sequence));
        self.push_up(self.entries.len() - 1);

        trace!(
            "enqueued #{} with priority {} ({} entries)",
            self.sequence,
            priority,
            self.entries.len()
        );
        Ok(())
    }

    /// Removes the highest ranked entry from the queue and returns its value.
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if there is nothing to dequeue.
    ///
    /// # Examples
    /// ```
    /// # use prioq_core::{PriorityQueue, QueueError};
    /// let mut queue: PriorityQueue<&str> = PriorityQueue::new();
    ///
    /// queue.enqueue("cat", 30).unwrap();
    /// queue.enqueue("bird", 40).unwrap();
    /// queue.enqueue("duck", 40).unwrap();
    ///
    /// assert_eq!(queue.dequeue(), Ok("bird"));
    /// assert_eq!(queue.dequeue(), Ok("duck"));
    /// assert_eq!(queue.dequeue(), Ok("cat"));
    /// assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
    /// ```
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.dequeue_entry().map(Entry::into_value)
    }

    /// Returns the number of entries in the queue.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns the maximum number of entries the queue can hold.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if another [`enqueue`] would fail.
    ///
    /// [`enqueue`]: PriorityQueue::enqueue
    pub fn is_full(&self) -> bool {
        self.entries.len() >= N
    }

    /// Returns the sequence number the next successful [`enqueue`] will assign.
    ///
    /// # Examples
    /// ```
    /// # use prioq_core::PriorityQueue;
    /// let mut queue: PriorityQueue<char> = PriorityQueue::new();
    /// assert_eq!(queue.next_sequence(), 1);
    ///
    /// queue.enqueue('a', 0).unwrap();
    /// queue.dequeue().unwrap();
    /// // sequence numbers are never reused
    /// assert_eq!(queue.next_sequence(), 2);
    /// ```
    ///
    /// [`enqueue`]: PriorityQueue::enqueue
    pub fn next_sequence(&self) -> Sequence {
        self.sequence + 1
    }

    /// Returns the entry that the next [`dequeue`] would remove,
    /// or [`None`] if the queue is empty.
    ///
    /// # Examples
    /// ```
    /// # use prioq_core::PriorityQueue;
    /// let mut queue: PriorityQueue<&str> = PriorityQueue::new();
    /// assert!(queue.peek().is_none());
    ///
    /// queue.enqueue("dog", 50).unwrap();
    /// queue.enqueue("turtle", 60).unwrap();
    ///
    /// let top = queue.peek().unwrap();
    /// assert_eq!(*top.value(), "turtle");
    /// assert_eq!(top.sequence(), 2);
    /// ```
    ///
    /// [`dequeue`]: PriorityQueue::dequeue
    pub fn peek(&self) -> Option<&Entry<T>> {
        self.entries.first()
    }

    /// Returns an iterator over the entries of the queue.
    ///
    /// The entries are visited in the order they are laid out in the heap,
    /// which is **not** the order they would be dequeued in.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns a snapshot of the queue as `(sequence, value)` pairs.
    ///
    /// Like [`iter`], the pairs are in heap order rather than priority order.
    ///
    /// # Examples
    /// ```
    /// # use prioq_core::PriorityQueue;
    /// let mut queue: PriorityQueue<&str> = PriorityQueue::new();
    /// queue.enqueue("dog", 50).unwrap();
    /// queue.enqueue("cat", 30).unwrap();
    /// queue.enqueue("turtle", 60).unwrap();
    ///
    /// let mut list = queue.list();
    /// assert_eq!(list.len(), queue.size());
    ///
    /// list.sort();
    /// assert_eq!(list, [(1, "dog"), (2, "cat"), (3, "turtle")]);
    /// ```
    ///
    /// [`iter`]: PriorityQueue::iter
    pub fn list(&self) -> Vec<(Sequence, T)>
    where
        T: Clone,
    {
        self.iter().cloned().map(Entry::into_pair).collect()
    }

    /// Dequeues entries in priority order through an iterator.
    ///
    /// Entries the iterator does not yield stay in the queue
    /// after the iterator is dropped.
    ///
    /// # Examples
    /// ```
    /// # use prioq_core::PriorityQueue;
    /// let mut queue: PriorityQueue<&str> = PriorityQueue::new();
    /// queue.enqueue("cat", 30).unwrap();
    /// queue.enqueue("dog", 50).unwrap();
    /// queue.enqueue("bird", 40).unwrap();
    ///
    /// let first: Vec<_> = queue.drain().take(2).map(|e| e.into_value()).collect();
    /// assert_eq!(first, ["dog", "bird"]);
    /// assert_eq!(queue.size(), 1);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T, N> {
        Drain { queue: self }
    }

    fn dequeue_entry(&mut self) -> Result<Entry<T>, QueueError> {
        if self.entries.is_empty() {
            debug!("rejected dequeue: queue is empty");
            return Err(QueueError::EmptyQueue);
        }

        // the last entry takes the place of the root
        let top = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.push_down(0);
        }

        trace!(
            "dequeued #{} with priority {} ({} entries)",
            top.sequence(),
            top.priority(),
            self.entries.len()
        );
        Ok(top)
    }

    // Moves the entry at `idx` toward the root
    // until its parent no longer ranks below it.
    fn push_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let p = parent(idx);
            if !self.entries[p].ranks_below(&self.entries[idx]) {
                break;
            }
            self.entries.swap(p, idx);
            idx = p;
        }
    }

    // Moves the entry at `idx` toward the leaves
    // until none of its children rank above it.
    fn push_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let mut max = idx;
            for child in [left(idx), right(idx)] {
                if child < len && self.entries[max].ranks_below(&self.entries[child]) {
                    max = child;
                }
            }
            if max == idx {
                break;
            }
            self.entries.swap(idx, max);
            idx = max;
        }
    }
}

impl<T, const N: usize> Default for PriorityQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for PriorityQueue<T, N> {
    fn clone(&self) -> Self {
        // Vec::clone would only reserve `len` slots
        let mut entries = Vec::with_capacity(N);
        entries.extend_from_slice(&self.entries);
        Self {
            entries,
            sequence: self.sequence,
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a PriorityQueue<T, N> {
    type Item = &'a Entry<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the entries of a [`PriorityQueue<T, N>`] in heap order.
///
/// This `struct` is created by [`PriorityQueue::iter`]. See its documentation for more.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An iterator that dequeues the entries of a [`PriorityQueue<T, N>`]
/// from the highest ranked to the lowest.
///
/// This `struct` is created by [`PriorityQueue::drain`]. See its documentation for more.
#[derive(Debug)]
pub struct Drain<'a, T, const N: usize> {
    queue: &'a mut PriorityQueue<T, N>,
}

impl<'a, T, const N: usize> Iterator for Drain<'a, T, N> {
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue_entry().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.size();
        (len, Some(len))
    }
}

impl<'a, T, const N: usize> ExactSizeIterator for Drain<'a, T, N> {}
impl<'a, T, const N: usize> FusedIterator for Drain<'a, T, N> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    impl<T, const N: usize> PriorityQueue<T, N> {
        fn is_heap(&self) -> bool {
            (1..self.entries.len())
                .all(|idx| !self.entries[parent(idx)].ranks_below(&self.entries[idx]))
        }
    }

    #[test]
    fn heap_property_holds_after_every_operation() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut queue = PriorityQueue::<u32, 64>::new();

        for step in 0..5_000u32 {
            if rng.gen_bool(0.55) {
                let _ = queue.enqueue(step, rng.gen_range(0..8));
            } else {
                let _ = queue.dequeue();
            }
            assert!(queue.is_heap(), "heap property broken at step {}", step);
            assert!(queue.size() <= queue.capacity());
        }
    }

    #[test]
    fn matches_a_sorted_model() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut queue = PriorityQueue::<usize, 32>::new();
        // (priority, sequence, value) of every live entry
        let mut model: Vec<(Priority, Sequence, usize)> = Vec::new();

        for step in 0..2_000 {
            if rng.gen_bool(0.5) {
                let priority = rng.gen_range(0..5);
                let sequence = queue.next_sequence();
                match queue.enqueue(step, priority) {
                    Ok(()) => model.push((priority, sequence, step)),
                    Err(e) => {
                        assert_eq!(e, QueueError::CapacityExceeded { capacity: 32 });
                        assert_eq!(model.len(), 32);
                    }
                }
            } else {
                // highest priority first, then lowest sequence
                let expected = model
                    .iter()
                    .enumerate()
                    .max_by(|(_, a), (_, b)| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
                    .map(|(idx, _)| idx);
                match expected {
                    Some(idx) => assert_eq!(queue.dequeue(), Ok(model.remove(idx).2)),
                    None => assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue)),
                }
            }
            assert_eq!(queue.size(), model.len());
        }
    }

    #[test]
    fn sequence_numbers_increase_across_dequeues() {
        let mut queue: PriorityQueue<()> = PriorityQueue::new();
        let mut last = 0;
        for round in 0..50 {
            for _ in 0..(round % 4 + 1) {
                queue.enqueue((), round).unwrap();
            }
            let max = queue.iter().map(Entry::sequence).max().unwrap();
            assert!(max > last);
            last = max;
            while queue.size() > round as usize % 3 {
                queue.dequeue().unwrap();
            }
        }
        assert_eq!(queue.next_sequence(), last + 1);
    }

    #[test]
    fn failed_operations_leave_the_queue_untouched() {
        let mut queue = PriorityQueue::<&str, 3>::new();
        assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
        assert_eq!(queue.next_sequence(), 1);

        for (value, priority) in [("a", 1), ("b", 3), ("c", 2)] {
            queue.enqueue(value, priority).unwrap();
        }
        let before = queue.list();
        assert!(queue.is_full());
        assert_eq!(
            queue.enqueue("d", 9),
            Err(QueueError::CapacityExceeded { capacity: 3 })
        );
        assert_eq!(queue.list(), before);
        assert_eq!(queue.next_sequence(), 4);
    }

    #[test]
    fn zero_capacity_queue_rejects_everything() {
        let mut queue = PriorityQueue::<u8, 0>::new();
        assert!(queue.is_full());
        assert_eq!(
            queue.enqueue(1, 1),
            Err(QueueError::CapacityExceeded { capacity: 0 })
        );
        assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn clone_keeps_the_full_buffer() {
        let mut queue = PriorityQueue::<u8, 16>::new();
        queue.enqueue(1, 1).unwrap();
        let copy = queue.clone();
        assert!(copy.entries.capacity() >= 16);
        assert_eq!(copy.list(), queue.list());
        assert_eq!(copy.next_sequence(), queue.next_sequence());
    }

    #[test]
    fn dropped_drain_keeps_remaining_entries() {
        let mut queue: PriorityQueue<u8> = PriorityQueue::new();
        for v in 0..10 {
            queue.enqueue(v, u32::from(v)).unwrap();
        }
        {
            let mut drain = queue.drain();
            assert_eq!(drain.len(), 10);
            assert_eq!(drain.next().map(Entry::into_value), Some(9));
        }
        assert_eq!(queue.size(), 9);
        assert!(queue.is_heap());
        assert_eq!(queue.peek().map(|e| *e.value()), Some(8));
    }
}
