//! Portable backend on `std::simd` (nightly): f32x4.
//!
//! Selected with `--features portable_simd`. Same API surface as
//! `portable.rs`. `Simd::from_slice` and `copy_to_slice` are unaligned
//! accesses, so caller alignment does not matter.

use std::simd::f32x4;

use crate::scalar;
use crate::simd::{vector_prefix, F32_LANES};

/// SIMD f32 add using f32x4: out[i] = a[i] + b[i]
#[inline]
pub fn add_f32(a: &[f32], b: &[f32], out: &mut [f32]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(a.len(), out.len());
    let len = a.len();
    let chunks = len / F32_LANES;

    for i in 0..chunks {
        let base = i * F32_LANES;
        let av = f32x4::from_slice(&a[base..]);
        let bv = f32x4::from_slice(&b[base..]);
        (av + bv).copy_to_slice(&mut out[base..base + F32_LANES]);
    }

    let body = vector_prefix(len);
    scalar::add_f32(&a[body..], &b[body..], &mut out[body..]);
}

/// SIMD f32 in-place add using f32x4: acc[i] += b[i]
#[inline]
pub fn add_assign_f32(acc: &mut [f32], b: &[f32]) {
    assert_eq!(acc.len(), b.len());
    let len = acc.len();
    let chunks = len / F32_LANES;

    for i in 0..chunks {
        let base = i * F32_LANES;
        let mut av = f32x4::from_slice(&acc[base..]);
        av += f32x4::from_slice(&b[base..]);
        av.copy_to_slice(&mut acc[base..base + F32_LANES]);
    }

    let body = vector_prefix(len);
    scalar::add_assign_f32(&mut acc[body..], &b[body..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_f32() {
        let a = vec![1.0f32, 2.0, 3.0, 4.0, 5.0];
        let b = vec![10.0f32, 20.0, 30.0, 40.0, 50.0];
        let mut out = vec![0.0f32; 5];
        add_f32(&a, &b, &mut out);
        assert_eq!(out, vec![11.0, 22.0, 33.0, 44.0, 55.0]);
    }

    #[test]
    fn test_add_assign_f32() {
        let mut acc = vec![1.0f32; 9];
        add_assign_f32(&mut acc, &[2.0; 9]);
        assert_eq!(acc, vec![3.0; 9]);
    }
}
