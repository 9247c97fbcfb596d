//! # lanewise-ops
//!
//! Checked elementwise `f32` vector addition on 128-bit SIMD lanes.
//!
//! Operands are processed four lanes at a time with unaligned loads and
//! stores, and the `n % 4` tail goes through a scalar loop. Results are the
//! same as `a[i] + b[i]` in a plain loop, special values included.
//!
//! Shape errors (`len(a) != len(b)`, or a caller buffer of the wrong length)
//! are reported as [`KernelError::InvalidArgument`] before any element is
//! read or written.
//!
//! ```
//! use lanewise_ops::add_vectors;
//!
//! let a = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let b = [10.0, 20.0, 30.0, 40.0, 50.0];
//! assert_eq!(add_vectors(&a, &b).unwrap(), vec![11.0, 22.0, 33.0, 44.0, 55.0]);
//! ```
//!
//! ## Backends
//!
//! The backend is fixed per build and target; see
//! [`lanewise_core::compute`]. [`add_vectors_with`] runs a specific one.

pub mod add;

pub use add::{add_assign, add_vectors, add_vectors_into, add_vectors_with};

// Re-export core types for convenience
pub use lanewise_core::{Backend, KernelError, Result, F32_LANES};
