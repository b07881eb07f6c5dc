//! # Catalist
//!
//! `catalist` analyzes line-oriented text catalogs: it detects palindromic
//! lines with explicit stack/queue containers, ranks four classic sorting
//! algorithms by the number of element comparisons they perform, probes the
//! sorted catalog with comparison-counted linear and binary search, and
//! shuffles with a Fisher–Yates pass driven by a caller-supplied random
//! number generator.
//!
//! A small graph toolkit is included for command-style graph files: it
//! builds insertion-ordered adjacency structures, renders adjacency
//! matrices, and computes single-source shortest paths with Bellman–Ford,
//! including negative-cycle detection.
//!
//! ## Key Features
//!
//! - **Comparison counting**: Every sorter and searcher reports exactly how
//!   many element-vs-element ordering tests it performed, making empirical
//!   complexity visible (selection sort always costs `n(n-1)/2`, insertion
//!   sort costs `n-1` on sorted input, and so on).
//! - **Independent passes**: Each algorithm sorts its own copy of the input,
//!   so counts are never cross-contaminated between runs.
//! - **Deterministic shuffling**: [`shuffle::fisher_yates`] takes any
//!   [`rand::Rng`], so tests and reproducible runs can seed a
//!   [`rand::rngs::StdRng`] while the CLI defaults to OS entropy.
//! - **Guarded containers**: [`containers::Stack`] and [`containers::Queue`]
//!   signal empty-container access with `None` instead of panicking.
//!
//! ## Usage
//!
//! ### Counting sort comparisons
//!
//! ```rust
//! use catalist::selection_sort;
//!
//! let mut data = vec!["banana", "apple", "cherry"];
//! let comparisons = selection_sort(&mut data);
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry"]);
//! assert_eq!(comparisons, 3); // n(n-1)/2 for n = 3
//! ```
//!
//! ### Running the whole suite
//!
//! ```rust
//! use catalist::Algorithm;
//!
//! let items = vec!["Wand", "Amulet", "Ring"];
//! for algorithm in Algorithm::ALL {
//!     let mut copy = items.clone();
//!     let comparisons = algorithm.run(&mut copy);
//!     assert_eq!(copy, vec!["Amulet", "Ring", "Wand"]);
//!     assert!(comparisons > 0);
//! }
//! ```
//!
//! ### Palindrome detection
//!
//! ```rust
//! use catalist::is_palindrome;
//!
//! assert!(is_palindrome("Never odd or even"));
//! assert!(!is_palindrome("magic wand"));
//! ```

pub mod catalog;
pub mod containers;
pub mod graph;
pub mod palindrome;
pub mod search;
pub mod shuffle;
pub mod sort;

pub use palindrome::is_palindrome;
pub use sort::{Algorithm, insertion_sort, merge_sort, quick_sort, selection_sort};

pub mod prelude {
    pub use crate::containers::{Queue, Stack};
    pub use crate::palindrome::is_palindrome;
    pub use crate::search::{SearchOutcome, binary_search, linear_search};
    pub use crate::shuffle::{capitalize_first, fisher_yates};
    pub use crate::sort::{Algorithm, insertion_sort, merge_sort, quick_sort, selection_sort};
}
