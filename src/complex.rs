//! Complex scalar primitives over split real/imaginary components
//!
//! A complex value is carried as two independent scalars rather than an
//! aggregate type, so matrices and vectors can keep their real and imaginary
//! parts in separate contiguous buffers.

use num_traits::Float;

/// Complex multiply: `(ar + i·ai) · (br + i·bi)`.
#[inline]
pub fn mul<T: Float>(ar: T, ai: T, br: T, bi: T) -> (T, T) {
    (ar * br - ai * bi, ar * bi + ai * br)
}

/// Complex divide: `(ar + i·ai) / (br + i·bi)`.
///
/// A zero-magnitude divisor yields infinity/NaN per IEEE semantics; the
/// division is not guarded.
#[inline]
pub fn div<T: Float>(ar: T, ai: T, br: T, bi: T) -> (T, T) {
    let d = br * br + bi * bi;
    ((ar * br + ai * bi) / d, (ai * br - ar * bi) / d)
}
