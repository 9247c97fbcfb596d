// bindings/python/src/functions.rs
use lanewise_core::{compute, KernelError};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

const SAMPLE_A: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const SAMPLE_B: [f32; 5] = [10.0, 20.0, 30.0, 40.0, 50.0];

fn to_py_err(e: KernelError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Elementwise sum of two equal-length float sequences.
///
/// Raises ValueError if the lengths differ.
#[pyfunction]
pub fn add_vectors(py: Python<'_>, a: Vec<f32>, b: Vec<f32>) -> PyResult<Vec<f32>> {
    py.allow_threads(|| lanewise_ops::add_vectors(&a, &b))
        .map_err(to_py_err)
}

/// Name of the SIMD backend the kernel dispatches to.
#[pyfunction]
pub fn simd_backend() -> &'static str {
    compute::detect().backend.name()
}

/// Add the built-in sample vectors once, print and return the sum.
#[pyfunction]
pub fn run() -> PyResult<Vec<f32>> {
    let sum = lanewise_ops::add_vectors(&SAMPLE_A, &SAMPLE_B).map_err(to_py_err)?;
    println!("{:?} + {:?} = {:?}", SAMPLE_A, SAMPLE_B, sum);
    Ok(sum)
}
