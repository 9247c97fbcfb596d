//! Error types for lanewise kernels.

use thiserror::Error;

use crate::compute::Backend;

/// Errors reported by the checked kernel entry points.
///
/// Numeric outcomes (infinities, NaN, subnormals) are never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// Caller passed operands or an output buffer of the wrong shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested backend cannot run on this target.
    #[error("backend unavailable: {0} is not supported on this target")]
    BackendUnavailable(Backend),
}

impl KernelError {
    /// Operand lengths differ.
    #[must_use]
    pub fn length_mismatch(a: usize, b: usize) -> Self {
        Self::InvalidArgument(format!("operand lengths differ: {a} != {b}"))
    }

    /// Caller-provided output does not match the operand length.
    #[must_use]
    pub fn output_length(expected: usize, actual: usize) -> Self {
        Self::InvalidArgument(format!(
            "output length {actual} does not match operand length {expected}"
        ))
    }

    /// Creates a backend unavailable error.
    #[must_use]
    pub const fn backend_unavailable(backend: Backend) -> Self {
        Self::BackendUnavailable(backend)
    }

    /// True for caller bugs in argument shape.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result type for kernel operations.
pub type Result<T> = std::result::Result<T, KernelError>;
