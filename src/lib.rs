//! Dense complex linear solver using unpivoted Gauss elimination
//!
//! Solves `A·x = b` for dense complex matrices held in structure-of-arrays
//! (SoA) layout: real and imaginary components live in separate parallel
//! buffers rather than interleaved pairs, so a host runtime handing the
//! kernel a flat memory region can call straight in. Every routine mutates
//! caller-owned buffers in place; nothing is allocated or copied.
//!
//! # Features
//!
//! - **In-place LU factorization**: unpivoted Gauss elimination storing both
//!   factors in the input buffer
//! - **Amortized solves**: factor once at O(n³), then solve any number of
//!   right-hand sides at O(n²) each
//! - **Leading-dimension support**: row padding via `ld >= n` in the inner
//!   routines; the entry operations fix `ld = n`
//! - **Opt-in zero-pivot detection**: `_checked` variants report singular
//!   systems through [`GaussError`] without touching the default fast path
//! - **Generic scalars**: `f64` and `f32` via `num_traits::Float`
//!
//! # Example
//!
//! ```
//! use gauss_soa::{factor, solve};
//!
//! // [[2, 0], [0, 1+i]] · x = [2, 1+i]  =>  x = [1, 1]
//! let mut a_re: Vec<f64> = vec![2.0, 0.0, 0.0, 1.0];
//! let mut a_im = vec![0.0, 0.0, 0.0, 1.0];
//! let mut b_re = vec![2.0, 1.0];
//! let mut b_im = vec![0.0, 1.0];
//!
//! factor(2, &mut a_re, &mut a_im);
//! solve(2, &a_re, &a_im, &mut b_re, &mut b_im);
//!
//! assert!((b_re[0] - 1.0).abs() < 1e-12 && b_im[0].abs() < 1e-12);
//! assert!((b_re[1] - 1.0).abs() < 1e-12 && b_im[1].abs() < 1e-12);
//! ```
//!
//! No pivoting is ever performed: every pivot encountered during elimination
//! must be non-zero (diagonally dominant systems guarantee this), otherwise
//! NaN/Inf propagates silently through the remaining entries.

pub mod complex;
pub mod entry;
pub mod gauss;
pub mod matvec;
pub mod substitute;

// Re-export the main API
pub use entry::{factor, solve};
pub use gauss::{GaussError, gauss_factor, gauss_factor_checked};
pub use substitute::{solve_factored, solve_factored_checked, solve_lower, solve_upper};
