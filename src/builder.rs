use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;

use crate::grid::Grid;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuilderInvalidReason {
    /// No rows were given, or the first row was empty.
    #[error("grid has no cells")]
    EmptyGrid,
    /// A row's length differs from the first row's; grids must be rectangular.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
}

/// A builder for [`Grid`]s, fed one row of characters at a time.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug, Default)]
pub struct GridBuilder {
    rows: Vec<Vec<char>>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl GridBuilder {
    /// Construct an empty builder. It is not buildable until at least one row is pushed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for [`Self::new`] followed by [`Self::push_row`] for each of `rows`.
    pub fn with_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::new();
        for row in rows {
            builder.push_row(row.as_ref());
        }

        builder
    }

    /// Append a row below those already pushed. Each `char` of `row` becomes one cell.
    ///
    /// May cause the builder to enter an [`EmptyGrid`](BuilderInvalidReason::EmptyGrid) invalid state if this is the first row and it is empty,
    /// or a [`RaggedRow`](BuilderInvalidReason::RaggedRow) invalid state if its width differs from the first row's.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn push_row(&mut self, row: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let cells = row.chars().collect_vec();
        match self.rows.first() {
            None if cells.is_empty() => {
                self.invalid_reasons.push(BuilderInvalidReason::EmptyGrid);
                return self;
            }
            Some(first) if first.len() != cells.len() => {
                self.invalid_reasons.push(BuilderInvalidReason::RaggedRow {
                    row: self.rows.len(),
                    expected: first.len(),
                    found: cells.len(),
                });
                return self;
            }
            _ => {}
        }

        self.rows.push(cells);
        self
    }

    /// Remove the most recently pushed row.
    ///
    /// If the builder is in an invalid state or no rows are present, this function does nothing.
    pub fn pop_row(&mut self) -> &mut Self {
        if self.invalid_reasons.is_empty() {
            self.rows.pop();
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen while pushing rows.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    /// A builder with no rows is still considered valid here; [`Self::build`] rejects it.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Grid`].
    /// If the builder is invalid for any reason, or holds no rows, a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Grid, Vec<BuilderInvalidReason>> {
        if let Some(reasons) = self.is_valid() {
            return Err(reasons.clone());
        }

        let width = self.rows.first().map_or(0, Vec::len);
        let dims = match (NonZero::new(width), NonZero::new(self.rows.len())) {
            (Some(width), Some(height)) => (width, height),
            _ => return Err(vec![BuilderInvalidReason::EmptyGrid]),
        };

        Ok(Grid {
            cells: Array2::from_shape_fn((dims.1.get(), dims.0.get()), |(y, x)| self.rows[y][x]),
            dims,
        })
    }
}

impl Grid {
    /// Build a grid directly from its rows, failing on the first problem found.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, BuilderInvalidReason>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        GridBuilder::with_rows(rows)
            .build()
            .map_err(|reasons| reasons.first().copied().unwrap_or(BuilderInvalidReason::EmptyGrid))
    }
}
