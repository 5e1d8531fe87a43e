//! Host-facing entry operations
//!
//! The two operations exposed to embedders: factor a matrix in place, and
//! solve against an existing factorization. Both fix the leading dimension
//! at `n` (tight rows, no padding); callers needing padded storage use
//! [`gauss_factor`](crate::gauss::gauss_factor) and
//! [`solve_factored`](crate::substitute::solve_factored) directly.

use crate::gauss::gauss_factor;
use crate::substitute::solve_factored;
use num_traits::Float;

/// Factor the `n`×`n` matrix held in `a_re`/`a_im` (length `n * n`, tight
/// row-major) in place into its combined L/U form.
///
/// Must run once before any [`solve`] against the same matrix buffers, and
/// again whenever the coefficient matrix changes.
pub fn factor<T: Float>(n: usize, a_re: &mut [T], a_im: &mut [T]) {
    log::debug!("factoring {}x{} complex system in place", n, n);
    gauss_factor(n, a_re, a_im, n);
}

/// Solve `A·x = b` against a matrix previously factored by [`factor`],
/// overwriting `b_re`/`b_im` (length `n`) with the solution.
///
/// Solving against an unfactored matrix produces mathematically meaningless
/// output with no diagnostic.
pub fn solve<T: Float>(n: usize, a_re: &[T], a_im: &[T], b_re: &mut [T], b_im: &mut [T]) {
    log::debug!("solving factored {}x{} complex system", n, n);
    solve_factored(n, a_re, a_im, n, b_re, b_im);
}
