//! Fisher–Yates shuffling and first-letter capitalization.
//!
//! The shuffle takes the random number generator as an argument instead of
//! seeding one internally, so callers choose between OS entropy and a
//! fixed seed. Tests and reproducible CLI runs use a seeded
//! [`rand::rngs::StdRng`].

use rand::Rng;

/// Permutes `items` uniformly in place.
///
/// Walks from the last index down to 1 and swaps each position with a
/// uniformly drawn earlier-or-equal one. Given a perfect random source,
/// every permutation is equally likely.
///
/// # Examples
///
/// ```
/// use catalist::shuffle::fisher_yates;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut items = vec![1, 2, 3, 4, 5];
/// let mut rng = StdRng::seed_from_u64(42);
/// fisher_yates(&mut items, &mut rng);
///
/// let mut restored = items.clone();
/// restored.sort();
/// assert_eq!(restored, vec![1, 2, 3, 4, 5]); // same multiset, new order
/// ```
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Uppercases the first character of every non-empty line.
///
/// Characters without an uppercase form (digits, punctuation) are left
/// alone. Multi-character uppercase expansions are handled by rebuilding
/// the line char-wise.
pub fn capitalize_first(lines: &mut [String]) {
    for line in lines.iter_mut() {
        let mut chars = line.chars();
        if let Some(first) = chars.next() {
            if first.is_lowercase() {
                *line = first.to_uppercase().chain(chars).collect();
            }
        }
    }
}
