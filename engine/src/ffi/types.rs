//! Conversion helpers for the FFI boundary

use pyo3::prelude::*;

use crate::error::IsaacError;

/// Map an engine error onto a Python exception
///
/// Every engine error is caused by a bad argument or bad input data, so all
/// of them surface as `ValueError`.
pub fn to_py_err(err: IsaacError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}
