//! Dense helper operations over SoA buffers
//!
//! Mat-vec product and vector norm over split real/imaginary buffers, the
//! support routines callers need to form residuals `b − A·x` after a solve.

use crate::complex;
use num_traits::Float;

/// Dense mat-vec `y = A·x` over SoA buffers.
///
/// `a_re`/`a_im` hold the `n`×`n` matrix row-major with leading dimension
/// `ld`; `x` and `y` are length-`n` vectors. `y` is overwritten.
pub fn matvec<T: Float>(
    n: usize,
    a_re: &[T],
    a_im: &[T],
    ld: usize,
    x_re: &[T],
    x_im: &[T],
    y_re: &mut [T],
    y_im: &mut [T],
) {
    assert!(ld >= n, "leading dimension must be >= n");
    assert!(x_re.len() >= n && x_im.len() >= n);
    assert!(y_re.len() >= n && y_im.len() >= n);

    for i in 0..n {
        let mut s_re = T::zero();
        let mut s_im = T::zero();
        for j in 0..n {
            let (p_re, p_im) = complex::mul(a_re[i * ld + j], a_im[i * ld + j], x_re[j], x_im[j]);
            s_re = s_re + p_re;
            s_im = s_im + p_im;
        }
        y_re[i] = s_re;
        y_im[i] = s_im;
    }
}

/// Euclidean norm of an SoA complex vector: `sqrt(Σ |x_i|²)`.
pub fn vector_norm<T: Float>(x_re: &[T], x_im: &[T]) -> T {
    assert_eq!(
        x_re.len(),
        x_im.len(),
        "component buffers must have matching length"
    );
    let mut sum = T::zero();
    for (&re, &im) in x_re.iter().zip(x_im.iter()) {
        sum = sum + re * re + im * im;
    }
    sum.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matvec_identity() {
        let n = 3;
        let mut a_re = vec![0.0; n * n];
        let a_im = vec![0.0; n * n];
        for i in 0..n {
            a_re[i * n + i] = 1.0;
        }
        let x_re = vec![1.0, 2.0, 3.0];
        let x_im = vec![-1.0, 0.5, 0.0];
        let mut y_re = vec![0.0; n];
        let mut y_im = vec![0.0; n];

        matvec(n, &a_re, &a_im, n, &x_re, &x_im, &mut y_re, &mut y_im);

        assert_eq!(y_re, x_re);
        assert_eq!(y_im, x_im);
    }

    #[test]
    fn test_matvec_complex_2x2() {
        // A = [[i, 2], [1, 0]], x = [1+i, 3i]
        // y0 = i(1+i) + 2·3i = -1 + 7i, y1 = 1+i
        let a_re = vec![0.0, 2.0, 1.0, 0.0];
        let a_im = vec![1.0, 0.0, 0.0, 0.0];
        let x_re = vec![1.0, 0.0];
        let x_im = vec![1.0, 3.0];
        let mut y_re = vec![0.0; 2];
        let mut y_im = vec![0.0; 2];

        matvec(2, &a_re, &a_im, 2, &x_re, &x_im, &mut y_re, &mut y_im);

        assert_relative_eq!(y_re[0], -1.0);
        assert_relative_eq!(y_im[0], 7.0);
        assert_relative_eq!(y_re[1], 1.0);
        assert_relative_eq!(y_im[1], 1.0);
    }

    #[test]
    fn test_vector_norm() {
        assert_relative_eq!(vector_norm(&[3.0], &[4.0]), 5.0);
        assert_relative_eq!(vector_norm(&[1.0, 2.0], &[2.0, 4.0]), 5.0);
    }
}
