use std::hash::Hash;

use strum::VariantArray;

use crate::location::Location;

/// A single move between neighbouring cells.
///
/// [`SquareStep`] is the only implementation; paths through a grid may only move along its variants.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result is not bounds-checked.
    fn attempt_from(&self, location: Location) -> Location;

    /// The step leading from `from` to `to`, if the two are neighbours.
    fn direction_to(from: Location, to: Location) -> Option<Self> {
        Self::VARIANTS.iter()
            .find(|step| step.attempt_from(from) == to)
            .copied()
    }

    /// Whether a single step joins `a` and `b`.
    fn adjacent(a: Location, b: Location) -> bool {
        Self::direction_to(a, b).is_some()
    }
}

/// The four orthogonal moves on a rectangular grid. Diagonals are not steps.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Step for SquareStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }
}
