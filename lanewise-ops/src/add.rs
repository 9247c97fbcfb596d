//! Elementwise addition: result[i] = a[i] + b[i].
//!
//! All entry points validate shapes first and only then touch memory, so a
//! rejected call never leaves a partially written buffer behind.

use lanewise_core::compute;
use lanewise_core::simd;
use lanewise_core::{Backend, KernelError, Result};

#[inline]
fn check_operands(a: &[f32], b: &[f32]) -> Result<()> {
    if a.len() != b.len() {
        log::debug!("add rejected: operand lengths {} and {}", a.len(), b.len());
        return Err(KernelError::length_mismatch(a.len(), b.len()));
    }
    Ok(())
}

#[inline]
fn check_output(expected: usize, out: &[f32]) -> Result<()> {
    if out.len() != expected {
        log::debug!("add rejected: output length {} for {} operands", out.len(), expected);
        return Err(KernelError::output_length(expected, out.len()));
    }
    Ok(())
}

/// Add two vectors into a new allocation.
///
/// Empty operands return an empty `Vec` without allocating.
///
/// # Errors
///
/// [`KernelError::InvalidArgument`] if `a.len() != b.len()`.
pub fn add_vectors(a: &[f32], b: &[f32]) -> Result<Vec<f32>> {
    add_vectors_with(compute::detect().backend, a, b)
}

/// Add two vectors on a specific backend.
///
/// # Errors
///
/// [`KernelError::BackendUnavailable`] if `backend` cannot run here, or
/// [`KernelError::InvalidArgument`] if `a.len() != b.len()`.
pub fn add_vectors_with(backend: Backend, a: &[f32], b: &[f32]) -> Result<Vec<f32>> {
    if !backend.is_available() {
        return Err(KernelError::backend_unavailable(backend));
    }
    check_operands(a, b)?;
    if a.is_empty() {
        return Ok(Vec::new());
    }

    log::trace!("add_vectors: n={} backend={}", a.len(), backend);
    let mut out = vec![0.0f32; a.len()];
    simd::add_f32_on(backend, a, b, &mut out);
    Ok(out)
}

/// Add two vectors into caller-provided storage.
///
/// `out` must not alias `a` or `b`; the borrow checker already rules that out
/// for safe callers. Use [`add_assign`] to accumulate in place.
///
/// # Errors
///
/// [`KernelError::InvalidArgument`] if `a.len() != b.len()` or
/// `out.len() != a.len()`. `out` is left untouched in that case.
pub fn add_vectors_into(a: &[f32], b: &[f32], out: &mut [f32]) -> Result<()> {
    check_operands(a, b)?;
    check_output(a.len(), out)?;
    if a.is_empty() {
        return Ok(());
    }

    log::trace!("add_vectors_into: n={}", a.len());
    simd::add_f32(a, b, out);
    Ok(())
}

/// In-place addition: acc[i] += b[i].
///
/// # Errors
///
/// [`KernelError::InvalidArgument`] if `acc.len() != b.len()`. `acc` is left
/// untouched in that case.
pub fn add_assign(acc: &mut [f32], b: &[f32]) -> Result<()> {
    check_operands(acc, b)?;
    if acc.is_empty() {
        return Ok(());
    }

    log::trace!("add_assign: n={}", acc.len());
    simd::add_assign_f32(acc, b);
    Ok(())
}
