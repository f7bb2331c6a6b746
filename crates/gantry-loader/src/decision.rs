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

//! # Branching Decisions
//!
//! The binary decision taken at each level of the truck loading search:
//! either include the candidate at a given position in the exploration order,
//! or exclude it. Each search level branches on exactly one candidate, so a
//! path from the root encodes a partial selection.

use crate::candidate::CandidateIndex;

/// A single branching decision on the candidate at a given position in the
/// sorted exploration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LoadDecision {
    /// Load the candidate at this position onto the truck.
    Include(CandidateIndex),
    /// Leave the candidate at this position behind.
    Exclude(CandidateIndex),
}

impl LoadDecision {
    /// Returns the position in the exploration order this decision is about.
    #[inline(always)]
    pub fn position(&self) -> CandidateIndex {
        match self {
            LoadDecision::Include(position) => *position,
            LoadDecision::Exclude(position) => *position,
        }
    }

    /// Returns `true` if this decision loads the candidate.
    #[inline(always)]
    pub fn is_include(&self) -> bool {
        matches!(self, LoadDecision::Include(_))
    }
}

impl std::fmt::Display for LoadDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadDecision::Include(position) => write!(f, "Include({})", position),
            LoadDecision::Exclude(position) => write!(f, "Exclude({})", position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_and_kind() {
        let include = LoadDecision::Include(CandidateIndex::new(3));
        let exclude = LoadDecision::Exclude(CandidateIndex::new(3));
        assert_eq!(include.position(), CandidateIndex::new(3));
        assert_eq!(exclude.position(), CandidateIndex::new(3));
        assert!(include.is_include());
        assert!(!exclude.is_include());
    }

    #[test]
    fn test_display_format() {
        let include = LoadDecision::Include(CandidateIndex::new(0));
        let exclude = LoadDecision::Exclude(CandidateIndex::new(7));
        assert_eq!(format!("{}", include), "Include(Candidate(0))");
        assert_eq!(format!("{}", exclude), "Exclude(Candidate(7))");
    }
}
