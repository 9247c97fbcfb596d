//! 128-bit SIMD primitives: f32x4 elementwise addition.
//!
//! Every backend runs the same two phases:
//!
//! 1. **Vector blocks**: `n / F32_LANES` blocks, one wide add per block.
//! 2. **Scalar tail**: the last `n % F32_LANES` elements via [`crate::scalar`].
//!
//! Loads and stores use the unaligned instruction forms (`movups`, `ld1`), so
//! the caller's allocation alignment never matters. Results are identical to
//! the scalar loop: a wide add performs the same IEEE-754 single-precision
//! addition in every lane.
//!
//! Output must not alias the operands. Safe callers cannot express that; the
//! in-place form is [`add_assign_f32`], where each lane reads index `i` before
//! writing index `i`.

use crate::compute::{self, Backend};
use crate::{portable, scalar};

// ============================================================================
// Lane counts
// ============================================================================

/// f32 lanes per 128-bit register (128 / 32 = 4).
pub const F32_LANES: usize = 4;
/// Register width in bytes.
pub const VECTOR_BYTES: usize = 16;

/// Number of leading elements covered by full vector blocks.
#[inline(always)]
pub const fn vector_prefix(len: usize) -> usize {
    len - len % F32_LANES
}

// ============================================================================
// Dispatch
// ============================================================================

/// SIMD f32 add on the detected backend: out[i] = a[i] + b[i]
#[inline]
pub fn add_f32(a: &[f32], b: &[f32], out: &mut [f32]) {
    add_f32_on(compute::detect().backend, a, b, out);
}

/// SIMD f32 in-place add on the detected backend: acc[i] += b[i]
#[inline]
pub fn add_assign_f32(acc: &mut [f32], b: &[f32]) {
    add_assign_f32_on(compute::detect().backend, acc, b);
}

/// f32 add on an explicit backend.
///
/// # Panics
///
/// Panics if the lengths differ or `backend` cannot run on this target.
pub fn add_f32_on(backend: Backend, a: &[f32], b: &[f32], out: &mut [f32]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(a.len(), out.len());
    assert!(backend.is_available(), "{backend} backend not available");

    match backend {
        Backend::Scalar => scalar::add_f32(a, b, out),
        Backend::Portable => portable::add_f32(a, b, out),
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        // SAFETY: SSE2 availability asserted above; lengths checked above.
        Backend::Sse2 => unsafe { sse2::add_f32(a, b, out) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: NEON is mandatory on aarch64; lengths checked above.
        Backend::Neon => unsafe { neon::add_f32(a, b, out) },
        _ => unreachable!("{backend} reported available without an implementation"),
    }
}

/// f32 in-place add on an explicit backend.
///
/// # Panics
///
/// Panics if the lengths differ or `backend` cannot run on this target.
pub fn add_assign_f32_on(backend: Backend, acc: &mut [f32], b: &[f32]) {
    assert_eq!(acc.len(), b.len());
    assert!(backend.is_available(), "{backend} backend not available");

    match backend {
        Backend::Scalar => scalar::add_assign_f32(acc, b),
        Backend::Portable => portable::add_assign_f32(acc, b),
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        // SAFETY: SSE2 availability asserted above; lengths checked above.
        Backend::Sse2 => unsafe { sse2::add_assign_f32(acc, b) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: NEON is mandatory on aarch64; lengths checked above.
        Backend::Neon => unsafe { neon::add_assign_f32(acc, b) },
        _ => unreachable!("{backend} reported available without an implementation"),
    }
}

// ============================================================================
// SSE2 (x86 / x86_64)
// ============================================================================

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod sse2 {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::*;
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::*;

    use super::{vector_prefix, F32_LANES};
    use crate::scalar;

    /// SSE2 add, 4 f32 per `addps`.
    ///
    /// # Safety
    ///
    /// SSE2 must be available and all three slices must have equal length.
    #[target_feature(enable = "sse2")]
    pub unsafe fn add_f32(a: &[f32], b: &[f32], out: &mut [f32]) {
        let n = a.len();
        let chunks = n / F32_LANES;
        let pa = a.as_ptr();
        let pb = b.as_ptr();
        let po = out.as_mut_ptr();

        for i in 0..chunks {
            let base = i * F32_LANES;
            let va = _mm_loadu_ps(pa.add(base));
            let vb = _mm_loadu_ps(pb.add(base));
            _mm_storeu_ps(po.add(base), _mm_add_ps(va, vb));
        }

        let tail = vector_prefix(n);
        scalar::add_f32(&a[tail..], &b[tail..], &mut out[tail..]);
    }

    /// SSE2 in-place add.
    ///
    /// # Safety
    ///
    /// SSE2 must be available and both slices must have equal length.
    #[target_feature(enable = "sse2")]
    pub unsafe fn add_assign_f32(acc: &mut [f32], b: &[f32]) {
        let n = acc.len();
        let chunks = n / F32_LANES;
        let pacc = acc.as_mut_ptr();
        let pb = b.as_ptr();

        for i in 0..chunks {
            let base = i * F32_LANES;
            let va = _mm_loadu_ps(pacc.add(base));
            let vb = _mm_loadu_ps(pb.add(base));
            _mm_storeu_ps(pacc.add(base), _mm_add_ps(va, vb));
        }

        let tail = vector_prefix(n);
        scalar::add_assign_f32(&mut acc[tail..], &b[tail..]);
    }
}

// ============================================================================
// NEON (aarch64)
// ============================================================================

#[cfg(target_arch = "aarch64")]
mod neon {
    use std::arch::aarch64::*;

    use super::{vector_prefix, F32_LANES};
    use crate::scalar;

    /// NEON add, 4 f32 per `fadd v.4s`.
    ///
    /// # Safety
    ///
    /// All three slices must have equal length.
    #[target_feature(enable = "neon")]
    pub unsafe fn add_f32(a: &[f32], b: &[f32], out: &mut [f32]) {
        let n = a.len();
        let chunks = n / F32_LANES;
        let pa = a.as_ptr();
        let pb = b.as_ptr();
        let po = out.as_mut_ptr();

        for i in 0..chunks {
            let base = i * F32_LANES;
            let va = vld1q_f32(pa.add(base));
            let vb = vld1q_f32(pb.add(base));
            vst1q_f32(po.add(base), vaddq_f32(va, vb));
        }

        let tail = vector_prefix(n);
        scalar::add_f32(&a[tail..], &b[tail..], &mut out[tail..]);
    }

    /// NEON in-place add.
    ///
    /// # Safety
    ///
    /// Both slices must have equal length.
    #[target_feature(enable = "neon")]
    pub unsafe fn add_assign_f32(acc: &mut [f32], b: &[f32]) {
        let n = acc.len();
        let chunks = n / F32_LANES;
        let pacc = acc.as_mut_ptr();
        let pb = b.as_ptr();

        for i in 0..chunks {
            let base = i * F32_LANES;
            let va = vld1q_f32(pacc.add(base));
            let vb = vld1q_f32(pb.add(base));
            vst1q_f32(pacc.add(base), vaddq_f32(va, vb));
        }

        let tail = vector_prefix(n);
        scalar::add_assign_f32(&mut acc[tail..], &b[tail..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available_backends() -> Vec<Backend> {
        Backend::ALL
            .iter()
            .copied()
            .filter(|b| b.is_available())
            .collect()
    }

    fn reference(a: &[f32], b: &[f32]) -> Vec<f32> {
        a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
    }

    #[test]
    fn test_vector_prefix() {
        assert_eq!(vector_prefix(0), 0);
        assert_eq!(vector_prefix(3), 0);
        assert_eq!(vector_prefix(4), 4);
        assert_eq!(vector_prefix(5), 4);
        assert_eq!(vector_prefix(101), 100);
    }

    #[test]
    fn test_lane_constants() {
        assert_eq!(F32_LANES * std::mem::size_of::<f32>(), VECTOR_BYTES);
    }

    #[test]
    fn test_add_f32_all_backends() {
        let a: Vec<f32> = (0..37).map(|i| i as f32 * 0.5).collect();
        let b: Vec<f32> = (0..37).map(|i| 100.0 - i as f32).collect();
        let expected = reference(&a, &b);
        for backend in available_backends() {
            let mut out = vec![0.0f32; a.len()];
            add_f32_on(backend, &a, &b, &mut out);
            assert_eq!(out, expected, "backend {backend}");
        }
    }

    #[test]
    fn test_add_assign_f32_all_backends() {
        let b: Vec<f32> = (0..13).map(|i| i as f32).collect();
        for backend in available_backends() {
            let mut acc = vec![1.0f32; 13];
            add_assign_f32_on(backend, &mut acc, &b);
            let expected: Vec<f32> = b.iter().map(|x| x + 1.0).collect();
            assert_eq!(acc, expected, "backend {backend}");
        }
    }

    #[test]
    fn test_tail_only() {
        // Fewer elements than one register: vector phase never runs.
        let a = [1.0f32, 2.0, 3.0];
        let b = [4.0f32, 5.0, 6.0];
        let mut out = [0.0f32; 3];
        add_f32(&a, &b, &mut out);
        assert_eq!(out, [5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_tail_is_written() {
        // Sentinel in the tail slot must be overwritten by the scalar loop.
        let a = [1.0f32; 5];
        let b = [2.0f32; 5];
        let mut out = [f32::NAN; 5];
        add_f32(&a, &b, &mut out);
        assert_eq!(out, [3.0; 5]);
    }

    #[test]
    fn test_unaligned_subslices() {
        let a: Vec<f32> = (0..40).map(|i| i as f32).collect();
        let b: Vec<f32> = (0..40).map(|i| (i * 3) as f32).collect();
        for backend in available_backends() {
            for off in 0..F32_LANES {
                let (sa, sb) = (&a[off..off + 33], &b[off..off + 33]);
                let mut out = vec![0.0f32; 34];
                add_f32_on(backend, sa, sb, &mut out[1..]);
                assert_eq!(&out[1..], reference(sa, sb).as_slice());
                assert_eq!(out[0], 0.0);
            }
        }
    }

    #[test]
    fn test_special_values() {
        let a = [f32::INFINITY, -0.0, f32::MAX, f32::MIN_POSITIVE, 1.0];
        let b = [f32::NEG_INFINITY, -0.0, f32::MAX, -f32::MIN_POSITIVE, f32::NAN];
        for backend in available_backends() {
            let mut out = [0.0f32; 5];
            add_f32_on(backend, &a, &b, &mut out);
            assert!(out[0].is_nan());
            assert_eq!(out[1].to_bits(), (-0.0f32).to_bits());
            assert_eq!(out[2], f32::INFINITY);
            assert_eq!(out[3].to_bits(), 0.0f32.to_bits());
            assert!(out[4].is_nan());
        }
    }

    #[test]
    #[should_panic]
    fn test_add_f32_length_mismatch_panics() {
        let mut out = [0.0f32; 4];
        add_f32(&[1.0; 4], &[1.0; 3], &mut out);
    }
}
