use std::iter::FusedIterator;

use itertools::Itertools;
use log::debug;

/// The number of orderings of `n` symbols, `n!`, or `None` if it overflows a [`usize`].
pub fn permutation_count(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

/// A lazy enumeration of every ordering of a sequence of symbols, produced by [`permutations`].
///
/// # Generation
/// The input itself comes first. Each later ordering differs from the one before by a single transposition, chosen by a counter per position:
/// scanning from position 0, the first position `i` whose counter is below `i` swaps `(0, i)` if `i` is even or `(counter[i], i)` if odd,
/// then its counter is bumped and the scan restarts at 0; positions passed over have their counters reset.
/// The scan running off the end means all `n!` orderings have been produced.
///
/// Symbols are opaque; repeated symbols are not detected, so they produce repeated orderings.
#[derive(Clone, Debug)]
pub struct Permutations<T> {
    working: Vec<T>,
    counters: Vec<usize>,
    index: usize,
    started: bool,
    remaining: Option<usize>,
}

impl<T: Clone> Permutations<T> {
    fn new(working: Vec<T>) -> Self {
        let remaining = permutation_count(working.len());
        debug!("enumerating permutations of {} symbol(s)", working.len());

        Self {
            counters: vec![0; working.len()],
            working,
            index: 0,
            started: false,
            remaining,
        }
    }

    fn emit(&mut self) -> Vec<T> {
        self.remaining = self.remaining.map(|n| n.saturating_sub(1));
        self.working.clone()
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.emit());
        }

        while self.index < self.working.len() {
            let i = self.index;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.working.swap(0, i);
                } else {
                    self.working.swap(self.counters[i], i);
                }

                self.counters[i] += 1;
                self.index = 0;
                return Some(self.emit());
            }

            self.counters[i] = 0;
            self.index += 1;
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}

/// Lazily enumerate every ordering of `symbols`, `n!` in total, each distinct ordering once when the symbols are distinct.
///
/// Nothing beyond the current ordering is computed until asked for; call again to start over.
/// An empty input yields one empty ordering.
pub fn permutations<I>(symbols: I) -> Permutations<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Permutations::new(symbols.into_iter().collect_vec())
}

/// [`permutations`] over the `char`s of `symbols`, reassembled into strings.
pub fn string_permutations(symbols: &str) -> impl Iterator<Item = String> {
    permutations(symbols.chars()).map(String::from_iter)
}
