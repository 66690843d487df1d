use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;

use crate::location::{Dimension, Location};

/// An immutable, rectangular grid of characters.
///
/// Grids should be built with a [`GridBuilder`](crate::builder::GridBuilder) or [`Grid::from_rows`], which reject ragged or empty input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    // height x width, row-major
    pub(crate) cells: Array2<char>,
    // width, height
    pub(crate) dims: (Dimension, Dimension),
}

impl Grid {
    /// The `(width, height)` of this grid.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// The character at `location`, or `None` if it is out of bounds.
    pub fn get(&self, location: Location) -> Option<char> {
        self.cells.get(location.as_index()).copied()
    }

    /// Every location carrying `letter`, scanning rows top to bottom and each row left to right.
    pub fn locations_of(&self, letter: char) -> Vec<Location> {
        self.cells.indexed_iter()
            .filter(|(_, cell)| **cell == letter)
            .map(|(index, _)| Location::from(index))
            .collect_vec()
    }

    /// The characters of row `y`, left to right.
    pub fn row(&self, y: usize) -> Option<String> {
        (y < self.dims.1.get()).then(|| self.cells.row(y).iter().collect())
    }

    /// The characters of column `x`, top to bottom.
    pub fn column(&self, x: usize) -> Option<String> {
        (x < self.dims.0.get()).then(|| self.cells.column(x).iter().collect())
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }

        Ok(())
    }
}
