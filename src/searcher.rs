use std::sync::atomic::{AtomicBool, Ordering};

use itertools::Itertools;
use log::{debug, trace};

use crate::grid::Grid;
use crate::location::Location;
use crate::path::Path;

/// Reasons a [`PathSearcher`] may stop without an answer.
///
/// Not finding a path is not a failure; it is reported as `Ok(None)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchFailure {
    /// The cancellation flag was raised before the search finished.
    #[error("search cancelled")]
    Cancelled,
}

// one level of the depth-first search; the position in the target is `path.len()`
struct Frame {
    path: Path,
    // next candidate to try at this position
    cursor: usize,
}

/// Depth-first backtracking search for a target string traced through a [`Grid`] as a [`Path`].
///
/// A searcher borrows its grid and may be reused for any number of targets.
///
/// # Search order
/// For each character of the target, the locations carrying it are listed in row-major order.
/// The first character may start anywhere it occurs; each later character must sit one step from the previous one and off the path so far.
/// Candidates are tried in listed order and the first complete path wins, so results are deterministic.
///
/// Rather than mutating one path and undoing moves, each level of the search owns its own [`Path`] on an explicit stack.
pub struct PathSearcher<'a> {
    grid: &'a Grid,
}

impl<'a> From<&'a Grid> for PathSearcher<'a> {
    fn from(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl PathSearcher<'_> {
    /// Whether `target` can be traced through the grid. The empty target always can.
    pub fn exists(&self, target: &str) -> bool {
        self.find(target).is_some()
    }

    /// Find the first path spelling `target`, or `None` if there is no such path.
    ///
    /// The empty target yields the empty path.
    pub fn find(&self, target: &str) -> Option<Path> {
        // the flag never goes up, so cancellation is impossible
        self.find_cancellable(target, &AtomicBool::new(false)).unwrap_or(None)
    }

    /// As [`Self::find`], but checks `cancel` before trying each candidate and gives up with [`SearchFailure::Cancelled`] once it is set.
    pub fn find_cancellable(&self, target: &str, cancel: &AtomicBool) -> Result<Option<Path>, SearchFailure> {
        let candidates = target.chars()
            .map(|letter| self.grid.locations_of(letter))
            .collect_vec();
        debug!("searching for {target:?} with {} candidate(s) per position", candidates.iter().map(Vec::len).join("/"));

        if candidates.iter().any(Vec::is_empty) {
            debug!("{target:?} uses a letter missing from the grid");
            return Ok(None);
        }

        let mut stack = vec![Frame { path: Path::default(), cursor: 0 }];

        while let Some(frame) = stack.last_mut() {
            let position = frame.path.len();
            if position == candidates.len() {
                debug!("found {target:?} at {}", frame.path);
                return Ok(stack.pop().map(|frame| frame.path));
            }

            if cancel.load(Ordering::Relaxed) {
                debug!("search for {target:?} cancelled at depth {position}");
                return Err(SearchFailure::Cancelled);
            }

            let remaining: &[Location] = &candidates[position][frame.cursor..];
            match remaining.iter().position(|location| frame.path.admits(*location)) {
                Some(offset) => {
                    let next = remaining[offset];
                    frame.cursor += offset + 1;
                    trace!("position {position}: trying {next:?}");
                    let path = frame.path.extended(next);
                    stack.push(Frame { path, cursor: 0 });
                }
                None => {
                    trace!("position {position}: exhausted, backtracking");
                    stack.pop();
                }
            }
        }

        debug!("{target:?} not found");
        Ok(None)
    }
}

/// Whether `target` can be traced through `grid` as a self-avoiding path of orthogonal steps.
///
/// Shorthand for [`PathSearcher::exists`].
pub fn path_exists(grid: &Grid, target: &str) -> bool {
    PathSearcher::from(grid).exists(target)
}
