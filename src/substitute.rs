//! Triangular solves against the factored matrix
//!
//! Once [`gauss_factor`](crate::gauss::gauss_factor) has overwritten a matrix
//! with its combined L/U factors, a right-hand side is solved by forward
//! substitution against the implicit unit-lower factor followed by backward
//! substitution against the upper factor. Both passes mutate the caller's
//! vector buffer in place, so the O(n³) factorization amortizes across any
//! number of right-hand sides at O(n²) each.

use crate::complex;
use crate::gauss::GaussError;
use num_traits::Float;

/// Forward substitution `L·y = b` against the unit-lower factor.
///
/// Overwrites `b_re`/`b_im` (length `n`) with `y`. The unit diagonal of L is
/// implicit and never read; only entries strictly below the diagonal of the
/// factored matrix are referenced.
pub fn solve_lower<T: Float>(
    n: usize,
    a_re: &[T],
    a_im: &[T],
    ld: usize,
    b_re: &mut [T],
    b_im: &mut [T],
) {
    debug_assert!(ld >= n, "leading dimension must be >= n");
    debug_assert!(b_re.len() >= n && b_im.len() >= n);

    for i in 0..n {
        let mut x_re = b_re[i];
        let mut x_im = b_im[i];
        for j in 0..i {
            let (p_re, p_im) = complex::mul(a_re[i * ld + j], a_im[i * ld + j], b_re[j], b_im[j]);
            x_re = x_re - p_re;
            x_im = x_im - p_im;
        }
        b_re[i] = x_re;
        b_im[i] = x_im;
    }
}

/// Backward substitution `U·x = y` against the upper factor.
///
/// Overwrites `b_re`/`b_im` (length `n`) with `x`, dividing each remainder by
/// the corresponding U diagonal entry. A zero diagonal entry yields NaN/Inf,
/// unreported; see [`solve_factored_checked`] for the reporting variant.
pub fn solve_upper<T: Float>(
    n: usize,
    a_re: &[T],
    a_im: &[T],
    ld: usize,
    b_re: &mut [T],
    b_im: &mut [T],
) {
    debug_assert!(ld >= n, "leading dimension must be >= n");
    debug_assert!(b_re.len() >= n && b_im.len() >= n);

    for i in (0..n).rev() {
        let mut x_re = b_re[i];
        let mut x_im = b_im[i];
        for j in (i + 1)..n {
            let (p_re, p_im) = complex::mul(a_re[i * ld + j], a_im[i * ld + j], b_re[j], b_im[j]);
            x_re = x_re - p_re;
            x_im = x_im - p_im;
        }
        let (s_re, s_im) = complex::div(x_re, x_im, a_re[i * ld + i], a_im[i * ld + i]);
        b_re[i] = s_re;
        b_im[i] = s_im;
    }
}

/// Solve `(L·U)·x = b` against a factored matrix, overwriting `b` with `x`.
///
/// The vector buffer transitions from holding `b` to `y` to `x` with no
/// intermediate allocation.
pub fn solve_factored<T: Float>(
    n: usize,
    a_re: &[T],
    a_im: &[T],
    ld: usize,
    b_re: &mut [T],
    b_im: &mut [T],
) {
    solve_lower(n, a_re, a_im, ld, b_re, b_im);
    solve_upper(n, a_re, a_im, ld, b_re, b_im);
}

/// Like [`solve_factored`], but fails fast if the upper factor carries an
/// exactly-zero diagonal entry.
///
/// The diagonal is scanned before the vector is touched, so a failed call
/// leaves `b` unchanged. On success the result is bit-identical to the
/// unchecked path.
pub fn solve_factored_checked<T: Float>(
    n: usize,
    a_re: &[T],
    a_im: &[T],
    ld: usize,
    b_re: &mut [T],
    b_im: &mut [T],
) -> Result<(), GaussError> {
    debug_assert!(ld >= n, "leading dimension must be >= n");

    for i in 0..n {
        let d_re = a_re[i * ld + i];
        let d_im = a_im[i * ld + i];
        if d_re * d_re + d_im * d_im == T::zero() {
            log::warn!("zero diagonal entry at row {} of the upper factor (n = {})", i, n);
            return Err(GaussError::ZeroDiagonal { row: i });
        }
    }
    solve_factored(n, a_re, a_im, ld, b_re, b_im);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_lower_ignores_diagonal_and_upper() {
        // L = [[1, 0], [2, 1]] in factored storage; diagonal and upper
        // entries are filled with garbage to prove they are never read
        let a_re = vec![9.0, 9.0, 2.0, 9.0];
        let a_im = vec![9.0, 9.0, 0.0, 9.0];
        let mut b_re = vec![1.0, 5.0];
        let mut b_im = vec![0.0, 0.0];

        solve_lower(2, &a_re, &a_im, 2, &mut b_re, &mut b_im);

        assert_relative_eq!(b_re[0], 1.0);
        assert_relative_eq!(b_re[1], 3.0); // 5 - 2*1
        assert_relative_eq!(b_im[1], 0.0);
    }

    #[test]
    fn test_solve_upper() {
        // U = [[2, 1], [·, 4]]
        let a_re = vec![2.0, 1.0, 7.0, 4.0];
        let a_im = vec![0.0; 4];
        let mut b_re = vec![3.0, 8.0];
        let mut b_im = vec![0.0; 2];

        solve_upper(2, &a_re, &a_im, 2, &mut b_re, &mut b_im);

        // x1 = 8/4 = 2, x0 = (3 - 1*2)/2 = 0.5
        assert_relative_eq!(b_re[1], 2.0);
        assert_relative_eq!(b_re[0], 0.5);
    }

    #[test]
    fn test_solve_factored_full_system() {
        // A = [[2, 1], [4, 5]], b = [3, 6] => x = [1.5, 0]
        let mut a_re = vec![2.0, 1.0, 4.0, 5.0];
        let mut a_im = vec![0.0; 4];
        crate::gauss::gauss_factor(2, &mut a_re, &mut a_im, 2);

        let mut b_re = vec![3.0, 6.0];
        let mut b_im = vec![0.0; 2];
        solve_factored(2, &a_re, &a_im, 2, &mut b_re, &mut b_im);

        assert_relative_eq!(b_re[0], 1.5, epsilon = 1e-12);
        assert_relative_eq!(b_re[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_checked_solve_zero_diagonal_leaves_rhs() {
        // Factored storage with U11 = 0
        let a_re = vec![1.0, 1.0, 0.5, 0.0];
        let a_im = vec![0.0; 4];
        let mut b_re = vec![1.0, 2.0];
        let mut b_im = vec![3.0, 4.0];

        let result = solve_factored_checked(2, &a_re, &a_im, 2, &mut b_re, &mut b_im);

        assert_eq!(result, Err(GaussError::ZeroDiagonal { row: 1 }));
        assert_eq!(b_re, vec![1.0, 2.0]);
        assert_eq!(b_im, vec![3.0, 4.0]);
    }
}
