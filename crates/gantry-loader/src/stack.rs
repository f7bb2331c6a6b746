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

#![allow(dead_code)]

use crate::decision::LoadDecision;
use gantry_core::num::ops::saturating_arithmetic::SaturatingAddVal;

/// A frame-structured LIFO stack of pending load decisions.
///
/// `SearchStack` stores all enqueued `LoadDecision`s linearly and uses a
/// `frames` index stack to mark decision-level boundaries. Popping a frame
/// truncates the `entries` slice back to the recorded start index.
///
/// Each level of the loading search branches on one candidate and enqueues at
/// most two decisions (exclude, then include), so `entries` never holds more
/// than two entries per frame.
#[derive(Clone, Debug)]
pub struct SearchStack {
    /// The linear stack of pending decisions.
    entries: Vec<LoadDecision>,
    /// A stack of indices pointing to `entries`.
    /// `frames[i]` stores the index in `entries` where depth `i` began.
    frames: Vec<usize>,
}

impl Default for SearchStack {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStack {
    /// Creates a new, empty `SearchStack`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Creates a preallocated `SearchStack` for the given candidate count.
    #[inline]
    pub fn preallocated(num_candidates: usize) -> Self {
        let entry_capacity = num_candidates.saturating_mul(2);
        let frame_capacity = num_candidates.saturating_add_val(1);

        Self {
            entries: Vec::with_capacity(entry_capacity),
            frames: Vec::with_capacity(frame_capacity),
        }
    }

    /// Ensures the stack has capacity for the given candidate count.
    #[inline]
    pub fn ensure_capacity(&mut self, num_candidates: usize) {
        let entry_capacity = num_candidates.saturating_mul(2);
        let frame_capacity = num_candidates.saturating_add_val(1);

        if self.entries.capacity() < entry_capacity {
            self.entries
                .reserve(entry_capacity - self.entries.capacity());
        }

        if self.frames.capacity() < frame_capacity {
            self.frames.reserve(frame_capacity - self.frames.capacity());
        }
    }

    /// Returns the number of entries (decisions) in the stack.
    #[inline]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// Returns the current search depth (number of frames).
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if there are no frames tracked (search exhausted).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Pushes a new frame onto the stack.
    /// This marks the start of a new decision level.
    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(self.entries.len());
    }

    /// Pops the current frame, truncating `entries` back to the
    /// start index recorded for this depth.
    #[inline]
    pub fn pop_frame(&mut self) -> Option<()> {
        let start = self.frames.pop()?;
        if self.entries.len() > start {
            self.entries.truncate(start);
        }
        Some(())
    }

    /// Pushes a single decision entry onto the stack.
    #[inline]
    pub fn push(&mut self, decision: LoadDecision) {
        self.entries.push(decision);
    }

    /// Extends the stack with multiple decision entries.
    #[inline]
    pub fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = LoadDecision>,
    {
        self.entries.extend(iter);
    }

    /// Pops the next decision (LIFO) from the stack.
    #[inline]
    pub fn pop(&mut self) -> Option<LoadDecision> {
        self.entries.pop()
    }

    /// Clears all entries and frames, but keeps allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.frames.clear();
    }

    /// Returns the current frame's start index in `entries`, if any.
    #[inline]
    pub fn current_level_start(&self) -> Option<usize> {
        self.frames.last().copied()
    }

    /// Returns `true` if the current level has no remaining decisions.
    #[inline]
    pub fn is_current_level_empty(&self) -> bool {
        match self.current_level_start() {
            Some(start) => self.entries.len() == start,
            None => true,
        }
    }

    /// Returns a slice of all decisions in the current frame.
    #[inline]
    pub fn current_frame_entries(&self) -> &[LoadDecision] {
        match self.frames.last() {
            Some(&start) => &self.entries[start..],
            None => &[],
        }
    }

    /// Returns the total allocated memory in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        let entries_size = self.entries.capacity() * core::mem::size_of::<LoadDecision>();
        let frames_size = self.frames.capacity() * core::mem::size_of::<usize>();
        entries_size + frames_size
    }
}

impl std::fmt::Display for SearchStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchStack(entries: {}, frames: {})",
            self.entries.len(),
            self.frames.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::CandidateIndex;

    fn include(position: usize) -> LoadDecision {
        LoadDecision::Include(CandidateIndex::new(position))
    }

    fn exclude(position: usize) -> LoadDecision {
        LoadDecision::Exclude(CandidateIndex::new(position))
    }

    #[test]
    fn test_new_and_preallocated_basic_props() {
        let s = SearchStack::new();
        assert_eq!(s.num_entries(), 0);
        assert_eq!(s.depth(), 0);
        assert!(s.is_empty());
        assert!(s.is_current_level_empty());
        assert_eq!(s.current_level_start(), None);
        assert_eq!(s.current_frame_entries(), &[]);

        let s2 = SearchStack::preallocated(5);
        assert_eq!(s2.num_entries(), 0);
        assert!(s2.is_empty());
        assert!(s2.allocated_memory_bytes() > 0);

        let disp = format!("{}", s);
        assert!(disp.contains("SearchStack(entries: 0, frames: 0)"));
    }

    #[test]
    fn test_ensure_capacity_grows_but_is_idempotent_when_large_enough() {
        let mut s = SearchStack::preallocated(2);
        let ecap0 = s.entries.capacity();
        let fcap0 = s.frames.capacity();

        s.ensure_capacity(7);
        let ecap1 = s.entries.capacity();
        let fcap1 = s.frames.capacity();
        assert!(ecap1 >= ecap0);
        assert!(fcap1 >= fcap0);

        // Request smaller capacity: should be idempotent
        s.ensure_capacity(1);
        assert_eq!(s.entries.capacity(), ecap1);
        assert_eq!(s.frames.capacity(), fcap1);
    }

    #[test]
    fn test_push_frame_and_depth_tracking() {
        let mut s = SearchStack::new();
        assert!(s.is_empty());
        s.push_frame();
        assert_eq!(s.depth(), 1);
        assert!(!s.is_empty());
        assert!(s.is_current_level_empty());
        assert_eq!(s.current_level_start(), Some(0));

        s.push_frame();
        assert_eq!(s.depth(), 2);
        assert!(s.is_current_level_empty());
        assert_eq!(s.current_level_start(), Some(0)); // still 0, no decisions yet
    }

    #[test]
    fn test_push_extend_pop_entries_across_frames() {
        let mut s = SearchStack::new();

        s.push_frame();
        s.extend([exclude(0), include(0)]);
        assert_eq!(s.num_entries(), 2);
        assert!(!s.is_current_level_empty());
        assert_eq!(s.current_frame_entries(), &[exclude(0), include(0)]);

        // The include branch is explored first (LIFO).
        assert_eq!(s.pop(), Some(include(0)));

        s.push_frame();
        s.extend([exclude(1), include(1)]);
        assert_eq!(s.num_entries(), 3);
        assert_eq!(s.current_frame_entries(), &[exclude(1), include(1)]);
        assert_eq!(s.pop(), Some(include(1)));
        assert_eq!(s.pop(), Some(exclude(1)));
        assert!(s.is_current_level_empty());
    }

    #[test]
    fn test_pop_frame_truncates_pending_entries() {
        let mut s = SearchStack::new();
        s.push_frame();
        s.push(exclude(0));
        s.push_frame();
        s.push(exclude(1));
        s.push(include(1));
        assert_eq!(s.num_entries(), 3);

        assert_eq!(s.pop_frame(), Some(()));
        assert_eq!(s.depth(), 1);
        assert_eq!(s.num_entries(), 1);
        assert_eq!(s.current_frame_entries(), &[exclude(0)]);

        assert_eq!(s.pop_frame(), Some(()));
        assert!(s.is_empty());
        assert_eq!(s.num_entries(), 0);
        assert_eq!(s.pop_frame(), None);
    }

    #[test]
    fn test_reset_clears_but_keeps_capacity() {
        let mut s = SearchStack::preallocated(4);
        s.push_frame();
        s.push(exclude(0));
        let bytes_before = s.allocated_memory_bytes();

        s.reset();
        assert!(s.is_empty());
        assert_eq!(s.num_entries(), 0);
        assert_eq!(s.allocated_memory_bytes(), bytes_before);
    }
}
