//! Comparison-counted linear and binary search, plus random probe
//! selection.
//!
//! Both searchers report how many elements they inspected so the driver
//! can contrast O(n) scanning with O(log n) bisection over the same sorted
//! catalog.

use rand::Rng;
use std::cmp::Ordering;

/// Result of a single search: where the needle was found (if at all) and
/// how many elements were inspected along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Index of the first match found, or `None` when absent.
    pub index: Option<usize>,
    /// Number of elements inspected.
    pub comparisons: u64,
}

/// Scans front to back, counting one comparison per probed element.
///
/// Works on unsorted data. Stops at the first match.
///
/// # Examples
///
/// ```
/// use catalist::search::linear_search;
///
/// let items = ["wand", "ring", "cloak"];
/// let outcome = linear_search(&items, &"ring");
/// assert_eq!(outcome.index, Some(1));
/// assert_eq!(outcome.comparisons, 2);
/// ```
pub fn linear_search<T: PartialEq>(items: &[T], needle: &T) -> SearchOutcome {
    let mut comparisons = 0;

    for (i, item) in items.iter().enumerate() {
        comparisons += 1;
        if item == needle {
            return SearchOutcome {
                index: Some(i),
                comparisons,
            };
        }
    }

    SearchOutcome {
        index: None,
        comparisons,
    }
}

/// Bisects a sorted slice, counting one comparison per probed midpoint.
///
/// `items` must be sorted ascending; otherwise the result is unspecified.
/// When duplicates exist, any matching index may be returned.
pub fn binary_search<T: Ord>(items: &[T], needle: &T) -> SearchOutcome {
    let mut comparisons = 0;
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        comparisons += 1;
        match items[mid].cmp(needle) {
            Ordering::Equal => {
                return SearchOutcome {
                    index: Some(mid),
                    comparisons,
                };
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    SearchOutcome {
        index: None,
        comparisons,
    }
}

/// Draws `count` items uniformly with replacement.
///
/// Used to pick the random probe set for the search report. Returns an
/// empty vector when `items` is empty.
pub fn sample<'a, T, R: Rng + ?Sized>(items: &'a [T], count: usize, rng: &mut R) -> Vec<&'a T> {
    if items.is_empty() {
        return Vec::new();
    }

    (0..count)
        .map(|_| &items[rng.random_range(0..items.len())])
        .collect()
}
