// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Intake Queue
//!
//! The FIFO buffer of arrived packages awaiting bin assignment. Arrival
//! order is the only ordering guarantee; priorities play no role until the
//! loading search. Dequeuing from an empty queue yields `None`, a normal
//! signal rather than an error.

use gantry_model::ids::PackageId;
use std::collections::VecDeque;

/// FIFO queue of packages waiting for a storage bin.
///
/// The queue holds ledger identifiers only; package attributes live in the
/// controller's ledger. Push and pop are O(1) amortized.
#[derive(Debug, Clone, Default)]
pub struct IntakeQueue {
    entries: VecDeque<PackageId>,
}

impl IntakeQueue {
    /// Creates an empty intake queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Creates an empty queue with space for `capacity` packages.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a package at the back of the queue.
    #[inline]
    pub fn enqueue(&mut self, package: PackageId) {
        self.entries.push_back(package);
    }

    /// Removes and returns the package at the front of the queue.
    #[inline]
    pub fn dequeue(&mut self) -> Option<PackageId> {
        self.entries.pop_front()
    }

    /// Returns the number of waiting packages.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no package is waiting.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the waiting packages from front to back.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = PackageId> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_preserves_arrival_order() {
        let mut queue = IntakeQueue::new();
        queue.enqueue(PackageId::new(2));
        queue.enqueue(PackageId::new(0));
        queue.enqueue(PackageId::new(1));

        assert_eq!(queue.dequeue(), Some(PackageId::new(2)));
        assert_eq!(queue.dequeue(), Some(PackageId::new(0)));
        assert_eq!(queue.dequeue(), Some(PackageId::new(1)));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_empty_queue_yields_none() {
        let mut queue = IntakeQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_len_tracks_enqueue_and_dequeue() {
        let mut queue = IntakeQueue::preallocated(4);
        assert_eq!(queue.len(), 0);
        queue.enqueue(PackageId::new(0));
        queue.enqueue(PackageId::new(1));
        assert_eq!(queue.len(), 2);
        queue.dequeue();
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_iter_front_to_back() {
        let mut queue = IntakeQueue::new();
        queue.enqueue(PackageId::new(3));
        queue.enqueue(PackageId::new(1));
        let order: Vec<_> = queue.iter().collect();
        assert_eq!(order, vec![PackageId::new(3), PackageId::new(1)]);
    }
}
