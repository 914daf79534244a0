//! Array utilities: weight sums, repeated-value arrays, and random
//! permutations for node visit orders.

use rand::Rng;

/// Sum of all values in `values`.
pub fn calc_sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Sum of `values[begin..end]`.
pub fn calc_sum_range(values: &[f64], begin: usize, end: usize) -> f64 {
    values[begin..end].iter().sum()
}

/// A vector of `n` copies of `value`.
pub fn repeat(value: f64, n: usize) -> Vec<f64> {
    vec![value; n]
}

/// Generates a random permutation of the integers `0, ..., n - 1`.
///
/// Randomizing node visit order this way is a correctness-relevant
/// requirement for unbiased local-search behavior in clustering heuristics.
pub fn generate_random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..n).collect();
    permute_randomly(&mut permutation, rng);
    permutation
}

/// Randomly permutes `elements` in place.
///
/// Each position is swapped with an independently, uniformly chosen
/// position.
pub fn permute_randomly<R: Rng + ?Sized>(elements: &mut [usize], rng: &mut R) {
    for i in 0..elements.len() {
        let j = rng.gen_range(0..elements.len());
        elements.swap(i, j);
    }
}
