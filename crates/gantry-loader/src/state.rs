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

//! Search state management for the truck loading search.
//!
//! This module provides `SearchState`, a compact, mutable container tracking
//! the partial selection along the current search path.
//!
//! Key responsibilities:
//! - Maintain the inclusion status of each candidate position.
//! - Track the running `total_load` of the partial selection.
//! - Maintain the `num_decided` cursor, which equals the current path depth
//!   into the exploration order.
//!
//! Invariants (debug-checked):
//! - `num_selected <= num_decided <= num_candidates`
//! - Decisions are applied and retracted strictly in exploration order, so
//!   the position of every mutation equals the current cursor.

use fixedbitset::FixedBitSet;
use gantry_core::num::{
    constants::Zero,
    ops::checked_arithmetic::{CheckedAddVal, CheckedSubVal},
};

/// A compact, mutable container holding the partial selection of the truck
/// loading search.
///
/// The state tracks:
/// - `selected`: bitset indicating whether a candidate position is loaded.
/// - `total_load`: the summed size of the selected candidates.
/// - `num_decided`: how many positions of the exploration order have been
///   decided on the current path (the path depth).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState<T> {
    selected: FixedBitSet,
    total_load: T,
    num_candidates: usize,
    num_selected: usize,
    num_decided: usize,
}

impl<T> SearchState<T> {
    /// Creates a new `SearchState` over the given number of candidates.
    /// The initial state has nothing selected and a total load of zero.
    #[inline]
    pub fn new(num_candidates: usize) -> Self
    where
        T: Zero,
    {
        Self {
            selected: FixedBitSet::with_capacity(num_candidates),
            total_load: T::ZERO,
            num_candidates,
            num_selected: 0,
            num_decided: 0,
        }
    }

    /// Returns the number of candidates in the exploration order.
    #[inline]
    pub fn num_candidates(&self) -> usize {
        self.num_candidates
    }

    /// Returns the number of candidates currently selected.
    #[inline]
    pub fn num_selected(&self) -> usize {
        self.num_selected
    }

    /// Returns the number of positions decided on the current path.
    #[inline]
    pub fn num_decided(&self) -> usize {
        self.num_decided
    }

    /// Returns `true` if the candidate at `position` is selected.
    #[inline]
    pub fn is_selected(&self, position: usize) -> bool {
        debug_assert!(
            position < self.num_candidates,
            "called `SearchState::is_selected` with an out-of-bounds position: the position is {} but the candidate count is {}",
            position,
            self.num_candidates
        );
        self.selected.contains(position)
    }

    /// Returns the selection bitset over candidate positions.
    #[inline]
    pub fn selection(&self) -> &FixedBitSet {
        &self.selected
    }
}

impl<T> SearchState<T>
where
    T: Copy,
{
    /// Returns the summed size of the selected candidates.
    #[inline]
    pub fn total_load(&self) -> T {
        self.total_load
    }
}

impl<T> SearchState<T>
where
    T: Copy + Zero + CheckedAddVal + CheckedSubVal + std::ops::Add<Output = T> + std::ops::Sub<Output = T>,
{
    /// Selects the candidate at `position`, adding `amount` to the load.
    ///
    /// The caller must have verified that the addition stays within the
    /// truck capacity; the arithmetic itself is debug-checked only.
    #[inline]
    pub fn include(&mut self, position: usize, amount: T) {
        debug_assert!(
            position == self.num_decided,
            "called `SearchState::include` out of order: the position is {} but the cursor is {}",
            position,
            self.num_decided
        );
        debug_assert!(
            position < self.num_candidates,
            "called `SearchState::include` with an out-of-bounds position: the position is {} but the candidate count is {}",
            position,
            self.num_candidates
        );
        debug_assert!(
            !self.selected.contains(position),
            "called `SearchState::include` on an already selected position: {}",
            position
        );
        debug_assert!(
            self.total_load.checked_add_val(amount).is_some(),
            "called `SearchState::include` with an amount that overflows the total load"
        );

        self.total_load = self.total_load + amount;
        self.selected.insert(position);
        self.num_selected += 1;
        self.num_decided += 1;
    }

    /// Skips the candidate at `position` without changing the load.
    #[inline]
    pub fn exclude(&mut self, position: usize) {
        debug_assert!(
            position == self.num_decided,
            "called `SearchState::exclude` out of order: the position is {} but the cursor is {}",
            position,
            self.num_decided
        );
        debug_assert!(
            position < self.num_candidates,
            "called `SearchState::exclude` with an out-of-bounds position: the position is {} but the candidate count is {}",
            position,
            self.num_candidates
        );

        self.num_decided += 1;
    }

    /// Undoes an [`SearchState::include`] of the candidate at `position`.
    #[inline]
    pub fn retract_include(&mut self, position: usize, amount: T) {
        debug_assert!(
            self.num_decided == position + 1,
            "called `SearchState::retract_include` out of order: the position is {} but the cursor is {}",
            position,
            self.num_decided
        );
        debug_assert!(
            self.selected.contains(position),
            "called `SearchState::retract_include` on a position that is not selected: {}",
            position
        );
        debug_assert!(
            self.total_load.checked_sub_val(amount).is_some(),
            "called `SearchState::retract_include` with an amount that underflows the total load"
        );

        self.total_load = self.total_load - amount;
        self.selected.set(position, false);
        self.num_selected -= 1;
        self.num_decided -= 1;
    }

    /// Undoes an [`SearchState::exclude`] of the candidate at `position`.
    #[inline]
    pub fn retract_exclude(&mut self, position: usize) {
        debug_assert!(
            self.num_decided == position + 1,
            "called `SearchState::retract_exclude` out of order: the position is {} but the cursor is {}",
            position,
            self.num_decided
        );
        debug_assert!(
            !self.selected.contains(position),
            "called `SearchState::retract_exclude` on a selected position: {}",
            position
        );

        self.num_decided -= 1;
    }

    /// Clears the selection and resets the load and cursor to zero, keeping
    /// the candidate count.
    #[inline]
    pub fn reset(&mut self) {
        self.selected.clear();
        self.total_load = T::ZERO;
        self.num_selected = 0;
        self.num_decided = 0;
    }
}

impl<T> std::fmt::Display for SearchState<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "State(load: {}, selected: {}/{}, decided: {})",
            self.total_load, self.num_selected, self.num_candidates, self.num_decided
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_new_state_is_empty() {
        let state: SearchState<IntegerType> = SearchState::new(4);
        assert_eq!(state.num_candidates(), 4);
        assert_eq!(state.num_selected(), 0);
        assert_eq!(state.num_decided(), 0);
        assert_eq!(state.total_load(), 0);
        assert!(!state.is_selected(0));
    }

    #[test]
    fn test_include_and_exclude_advance_cursor() {
        let mut state: SearchState<IntegerType> = SearchState::new(3);
        state.include(0, 8);
        assert_eq!(state.total_load(), 8);
        assert_eq!(state.num_selected(), 1);
        assert_eq!(state.num_decided(), 1);
        assert!(state.is_selected(0));

        state.exclude(1);
        assert_eq!(state.total_load(), 8);
        assert_eq!(state.num_selected(), 1);
        assert_eq!(state.num_decided(), 2);
        assert!(!state.is_selected(1));

        state.include(2, 3);
        assert_eq!(state.total_load(), 11);
        assert_eq!(state.num_selected(), 2);
        assert_eq!(state.num_decided(), 3);
    }

    #[test]
    fn test_retract_restores_previous_state() {
        let mut state: SearchState<IntegerType> = SearchState::new(2);
        state.include(0, 5);
        state.exclude(1);

        state.retract_exclude(1);
        assert_eq!(state.num_decided(), 1);

        state.retract_include(0, 5);
        assert_eq!(state.num_decided(), 0);
        assert_eq!(state.num_selected(), 0);
        assert_eq!(state.total_load(), 0);
        assert!(!state.is_selected(0));
    }

    #[test]
    fn test_selection_bitset_tracks_positions() {
        let mut state: SearchState<IntegerType> = SearchState::new(3);
        state.include(0, 1);
        state.exclude(1);
        state.include(2, 2);
        let positions: Vec<usize> = state.selection().ones().collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state: SearchState<IntegerType> = SearchState::new(2);
        state.include(0, 7);
        state.reset();
        assert_eq!(state.num_candidates(), 2);
        assert_eq!(state.num_selected(), 0);
        assert_eq!(state.num_decided(), 0);
        assert_eq!(state.total_load(), 0);
    }

    #[test]
    fn test_display_format() {
        let mut state: SearchState<IntegerType> = SearchState::new(3);
        state.include(0, 12);
        let rendered = format!("{}", state);
        assert!(rendered.contains("State(load: 12"));
        assert!(rendered.contains("selected: 1/3"));
    }
}
