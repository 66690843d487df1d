#![warn(missing_docs)]

//! # `snaking`
//!
//! Two small search problems: tracing a word through a letter grid as a "snake", and enumerating the orderings of a sequence.
//!
//! ## Snaking through a grid
//! Begin by building a [`Grid`] using a [`GridBuilder`] or [`Grid::from_rows`], which reject empty and ragged input.
//! Then ask [`path_exists`], or build a [`PathSearcher`] to find the [`Path`] itself.
//!
//! A word is found if its letters can be visited in order by moving one cell up, down, left, or right at a time, never revisiting a cell.
//! Diagonal moves are not allowed, and letters are compared exactly, so case matters.
//!
//! ```
//! use snaking::{path_exists, Grid};
//!
//! let grid = Grid::from_rows(["ANGULAR", "REDNCAE", "RFIDTCL", "AGNEGSA", "YTIRTSP"]).unwrap();
//! assert!(path_exists(&grid, "REACT"));
//! assert!(!path_exists(&grid, "FUNCTION"));
//! ```
//!
//! ## Permutations
//! [`permutations`] returns an iterator over all `n!` orderings of its input, computing each only when asked.
//! Successive orderings differ by one transposition, so no more than the current ordering and a counter per symbol is held at once.
//!
//! ```
//! use snaking::string_permutations;
//!
//! assert_eq!(string_permutations("ab").collect::<Vec<_>>(), ["ab", "ba"]);
//! ```
//!
//! # Internals
//! The grid search is a plain depth-first backtracking search.
//! Before searching, each letter of the target is mapped to the grid locations holding it, so the search only ever branches over matching cells.
//! The search keeps an explicit stack of frames, each owning the path chosen so far and a cursor into its candidate list, so backtracking is just popping a frame.

pub use builder::{BuilderInvalidReason, GridBuilder};
pub use grid::Grid;
pub use location::{Dimension, Location};
pub use path::Path;
pub use permutations::{permutation_count, permutations, string_permutations, Permutations};
pub use searcher::{path_exists, PathSearcher, SearchFailure};

pub mod builder;
pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod path;
pub(crate) mod permutations;
pub(crate) mod searcher;
pub mod shape;
