use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::location::Location;
use crate::shape::{SquareStep, Step};

/// A self-avoiding walk through a grid: no location repeats, and each location is one [`SquareStep`] from the last.
///
/// Paths are never shrunk in place. [`Self::extended`] produces a longer copy, so a shorter path stays valid for backtracking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    locations: Vec<Location>,
}

impl Path {
    /// Whether `next` may be appended while keeping the path self-avoiding and connected.
    ///
    /// Any location may start an empty path.
    pub fn admits(&self, next: Location) -> bool {
        if self.locations.contains(&next) {
            return false;
        }

        match self.locations.last() {
            None => true,
            Some(last) => SquareStep::adjacent(*last, next),
        }
    }

    /// A copy of this path with `next` appended. Callers check [`Self::admits`] first.
    pub fn extended(&self, next: Location) -> Self {
        let mut locations = Vec::with_capacity(self.locations.len() + 1);
        locations.extend_from_slice(&self.locations);
        locations.push(next);

        Self { locations }
    }

    /// The number of locations visited.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether no location has been visited yet.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The locations visited, in order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The moves taken between consecutive locations.
    pub fn steps(&self) -> Vec<SquareStep> {
        self.locations.iter()
            .tuple_windows()
            .filter_map(|(from, to)| SquareStep::direction_to(*from, *to))
            .collect_vec()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.locations.iter()
            .map(|Location(x, y)| format!("({x}, {y})"))
            .join(" -> "))
    }
}
