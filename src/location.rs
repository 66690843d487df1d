use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
/// A width or height of a [`Grid`](crate::Grid); grids are never zero-sized.
pub type Dimension = NonZero<usize>;

/// A location `(x, y)` on a grid. The top left corner is `Location(0, 0)`, `x` counts columns and `y` counts rows.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// `ndarray` indices are `(row, column)`.
    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.1, self.0)
    }

    // wraps instead of underflowing; stepping off the top or left lands far out of bounds
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
