//! In-place unpivoted LU factorization
//!
//! Eliminates a dense complex matrix stored as split real/imaginary buffers,
//! overwriting it with its combined factors: multipliers of the unit-lower
//! factor L strictly below the diagonal, the upper factor U on and above it.
//! No separate L or U storage is ever materialized.
//!
//! No row interchanges are performed. This keeps the elimination order
//! deterministic and the storage layout fixed, at the cost of requiring
//! every pivot to be non-zero — diagonally dominant systems (FEM
//! stiffness/mass assemblies and the like) satisfy this throughout.

use crate::complex;
use num_traits::Float;
use thiserror::Error;

/// Errors reported by the checked factorization and solve variants.
///
/// The unchecked entry points never construct these; they let IEEE NaN/Inf
/// propagate instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaussError {
    #[error("zero pivot at elimination step {step}")]
    ZeroPivot { step: usize },
    #[error("zero diagonal entry at row {row} of the upper factor")]
    ZeroDiagonal { row: usize },
}

/// Factor an `n`×`n` complex matrix in place, `A = L·U`, without pivoting.
///
/// `a_re`/`a_im` hold the real and imaginary parts row-major with leading
/// dimension `ld`; entry (i, j) lives at offset `i * ld + j` in each buffer.
/// On return the strictly lower triangle holds the multipliers of L (its
/// unit diagonal is implicit) and the upper triangle holds U.
///
/// The caller must guarantee `ld >= n`, buffers of length at least `ld * n`,
/// and non-zero pivots throughout the elimination; a zero pivot silently
/// fills the remaining entries with NaN/Inf. Use [`gauss_factor_checked`]
/// to have that condition reported instead.
pub fn gauss_factor<T: Float>(n: usize, a_re: &mut [T], a_im: &mut [T], ld: usize) {
    debug_assert!(ld >= n, "leading dimension must be >= n");
    debug_assert!(a_re.len() >= ld * n && a_im.len() >= ld * n);

    for k in 0..n {
        let akk_re = a_re[k * ld + k];
        let akk_im = a_im[k * ld + k];
        eliminate(n, a_re, a_im, ld, k, akk_re, akk_im);
    }
}

/// Like [`gauss_factor`], but fails fast on an exactly-zero pivot instead of
/// dividing by it.
///
/// On success the factored buffers are bit-identical to what the unchecked
/// path produces. Only an exactly-zero-magnitude pivot is rejected; small
/// pivots still pass through and lose accuracy, as the unpivoted scheme
/// dictates.
pub fn gauss_factor_checked<T: Float>(
    n: usize,
    a_re: &mut [T],
    a_im: &mut [T],
    ld: usize,
) -> Result<(), GaussError> {
    debug_assert!(ld >= n, "leading dimension must be >= n");
    debug_assert!(a_re.len() >= ld * n && a_im.len() >= ld * n);

    for k in 0..n {
        let akk_re = a_re[k * ld + k];
        let akk_im = a_im[k * ld + k];
        if akk_re * akk_re + akk_im * akk_im == T::zero() {
            log::warn!("zero pivot at elimination step {} (n = {})", k, n);
            return Err(GaussError::ZeroPivot { step: k });
        }
        eliminate(n, a_re, a_im, ld, k, akk_re, akk_im);
    }
    Ok(())
}

/// One elimination step: divide column `k` below the pivot to form the L
/// multipliers, then multiply-subtract across the trailing submatrix.
fn eliminate<T: Float>(
    n: usize,
    a_re: &mut [T],
    a_im: &mut [T],
    ld: usize,
    k: usize,
    akk_re: T,
    akk_im: T,
) {
    for i in (k + 1)..n {
        let (m_re, m_im) = complex::div(a_re[i * ld + k], a_im[i * ld + k], akk_re, akk_im);
        a_re[i * ld + k] = m_re;
        a_im[i * ld + k] = m_im;
        for j in (k + 1)..n {
            let (p_re, p_im) = complex::mul(m_re, m_im, a_re[k * ld + j], a_im[k * ld + j]);
            a_re[i * ld + j] = a_re[i * ld + j] - p_re;
            a_im[i * ld + j] = a_im[i * ld + j] - p_im;
        }
    }
}
