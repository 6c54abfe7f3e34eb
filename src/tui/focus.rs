//! Shared shape of the per-tool interaction state machines.
//!
//! Every tool page has a fixed cyclic list of focusable fields and a few
//! cyclic or bounded values adjusted with left/right.

use crate::types::{DistanceMetric, HashAlgorithm, UuidVersion};

/// Direction of a left/right adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Step `index` one place around a ring of `n` slots.
///
/// Always lands in `0..n`. `n == 0` returns 0.
pub fn advance_index(index: usize, n: usize, forward: bool) -> usize {
    if n == 0 {
        return 0;
    }
    let step: isize = if forward { 1 } else { -1 };
    // rem_euclid keeps the result non-negative when stepping back from 0.
    (index as isize + step).rem_euclid(n as isize) as usize
}

/// Step a bounded counter; a no-op at either bound.
pub fn step_bounded(value: u8, min: u8, max: u8, direction: Direction) -> u8 {
    match direction {
        Direction::Left if value > min => value - 1,
        Direction::Right if value < max => value + 1,
        _ => value.clamp(min, max),
    }
}

/// A closed set of values that wraps around when stepped.
pub trait Cyclic: Copy + PartialEq + 'static {
    /// All values in ring order.
    const ALL: &'static [Self];

    fn position(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    fn cycle(self, forward: bool) -> Self {
        Self::ALL[advance_index(self.position(), Self::ALL.len(), forward)]
    }

    fn cycle_toward(self, direction: Direction) -> Self {
        self.cycle(direction == Direction::Right)
    }
}

impl Cyclic for HashAlgorithm {
    const ALL: &'static [Self] = &HashAlgorithm::ALL;
}

impl Cyclic for DistanceMetric {
    const ALL: &'static [Self] = &DistanceMetric::ALL;
}

impl Cyclic for UuidVersion {
    const ALL: &'static [Self] = &UuidVersion::ALL;
}

// ============================================================================
// TESTS
// ============================================================================
