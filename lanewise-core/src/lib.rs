//! # Lanewise Core
//!
//! SIMD lane primitives for the lanewise crates.
//!
//! This crate provides:
//! - **SIMD primitives**: elementwise `f32` addition on 128-bit registers
//!   (4 lanes), with a scalar loop for the tail.
//! - **Backend detection**: which lane implementation runs on this target
//!   (SSE2, NEON, portable blocks or scalar), cached after first use.
//! - **Aligned buffers**: `f32` storage at a chosen offset from a 64-byte
//!   boundary, for exercising unaligned loads and stores.
//! - **Deterministic PRNG** for reproducible test and benchmark data.
//!
//! Length checking with proper errors lives one level up, in `lanewise-ops`.
//! The primitives here assert their preconditions.

// Numeric kernels use index loops on paired slices where iterators hurt readability.
#![allow(clippy::needless_range_loop)]
#![cfg_attr(feature = "portable_simd", feature(portable_simd))]

pub mod aligned;
pub mod compute;
pub mod error;
pub mod rng;
pub mod scalar;
pub mod simd;

// Portable backend: std::simd (nightly) or fixed [f32; 4] blocks on stable
#[cfg(feature = "portable_simd")]
#[path = "portable_std_simd.rs"]
pub mod portable;
#[cfg(not(feature = "portable_simd"))]
pub mod portable;

pub use aligned::AlignedBuf;
pub use compute::{Backend, ComputeCaps};
pub use error::{KernelError, Result};
pub use rng::SplitMix64;
pub use simd::{F32_LANES, VECTOR_BYTES};
