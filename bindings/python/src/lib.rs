// bindings/python/src/lib.rs

#![allow(non_local_definitions)]

use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

mod functions;

use functions::*;

#[pymodule]
fn _lanewise(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(add_vectors, m)?)?;
    m.add_function(wrap_pyfunction!(simd_backend, m)?)?;
    m.add_function(wrap_pyfunction!(run, m)?)?;
    m.add("F32_LANES", lanewise_core::F32_LANES)?;
    Ok(())
}
