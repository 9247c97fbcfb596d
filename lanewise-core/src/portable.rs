//! Portable backend on stable Rust: fixed `[f32; 4]` blocks.
//!
//! The block loop has the exact shape of a 4-lane register add, which LLVM
//! lowers to one vector add per block on any target with 128-bit registers.
//! Block loads go through `chunks_exact`, so no alignment is assumed.

use crate::scalar;
use crate::simd::{vector_prefix, F32_LANES};

/// Block-shaped f32 add: out[i] = a[i] + b[i]
#[inline]
pub fn add_f32(a: &[f32], b: &[f32], out: &mut [f32]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(a.len(), out.len());
    let body = vector_prefix(a.len());

    for ((o, x), y) in out[..body]
        .chunks_exact_mut(F32_LANES)
        .zip(a[..body].chunks_exact(F32_LANES))
        .zip(b[..body].chunks_exact(F32_LANES))
    {
        let block: [f32; F32_LANES] = std::array::from_fn(|lane| x[lane] + y[lane]);
        o.copy_from_slice(&block);
    }

    scalar::add_f32(&a[body..], &b[body..], &mut out[body..]);
}

/// Block-shaped f32 in-place add: acc[i] += b[i]
#[inline]
pub fn add_assign_f32(acc: &mut [f32], b: &[f32]) {
    assert_eq!(acc.len(), b.len());
    let body = vector_prefix(acc.len());

    for (o, y) in acc[..body]
        .chunks_exact_mut(F32_LANES)
        .zip(b[..body].chunks_exact(F32_LANES))
    {
        let block: [f32; F32_LANES] = std::array::from_fn(|lane| o[lane] + y[lane]);
        o.copy_from_slice(&block);
    }

    scalar::add_assign_f32(&mut acc[body..], &b[body..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_f32_blocks_and_tail() {
        let a: Vec<f32> = (0..11).map(|i| i as f32).collect();
        let b: Vec<f32> = (0..11).map(|i| (i * 10) as f32).collect();
        let mut out = vec![0.0f32; 11];
        add_f32(&a, &b, &mut out);
        let expected: Vec<f32> = (0..11).map(|i| (i * 11) as f32).collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_add_assign_f32() {
        let mut acc = vec![0.25f32; 6];
        add_assign_f32(&mut acc, &[1.0; 6]);
        assert_eq!(acc, vec![1.25; 6]);
    }
}
