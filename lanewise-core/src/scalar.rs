//! Scalar reference loop.
//!
//! Used on its own by the `Scalar` backend and as the remainder loop after
//! every vector block phase.

/// Scalar f32 add: out[i] = a[i] + b[i]
#[inline]
pub fn add_f32(a: &[f32], b: &[f32], out: &mut [f32]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(a.len(), out.len());
    for i in 0..a.len() {
        out[i] = a[i] + b[i];
    }
}

/// Scalar f32 in-place add: acc[i] += b[i]
#[inline]
pub fn add_assign_f32(acc: &mut [f32], b: &[f32]) {
    assert_eq!(acc.len(), b.len());
    for i in 0..acc.len() {
        acc[i] += b[i];
    }
}
