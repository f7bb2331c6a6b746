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

//! # Loading History
//!
//! The LIFO record of load commits for the currently staged truck. Each
//! committed load pushes one [`LoadEvent`]; a rollback pops the most recent
//! one and reverses it. The history is exclusively owned by the controller
//! while a truck is staged and cleared when the truck departs.
//!
//! Popping from an empty history yields `None`; the controller maps that to
//! its `NothingToRollback` signal.

use gantry_model::event::LoadEvent;

/// LIFO stack of load events for the staged truck.
#[derive(Debug, Clone)]
pub struct LoadingHistory<T> {
    events: Vec<LoadEvent<T>>,
}

impl<T> Default for LoadingHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LoadingHistory<T> {
    /// Creates an empty loading history.
    #[inline]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Creates an empty history with space for `capacity` events.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    /// Pushes a committed load event on top of the history.
    #[inline]
    pub fn push(&mut self, event: LoadEvent<T>) {
        self.events.push(event);
    }

    /// Removes and returns the most recent load event.
    #[inline]
    pub fn pop(&mut self) -> Option<LoadEvent<T>> {
        self.events.pop()
    }

    /// Returns the most recent load event without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&LoadEvent<T>> {
        self.events.last()
    }

    /// Discards all events. Corresponds to the truck departing.
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the number of staged load events.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no load is staged.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over the staged events from oldest to most recent.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &LoadEvent<T>> {
        self.events.iter()
    }
}
