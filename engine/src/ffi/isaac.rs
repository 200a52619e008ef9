//! PyO3 wrapper for the ISAAC generator

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use super::types::to_py_err;
use crate::rng::{Generator, GeneratorSnapshot};

/// Python wrapper for the Rust ISAAC generator
///
/// # Example (from Python)
///
/// ```python
/// from isaac_engine_rs import Isaac
///
/// rng = Isaac(b"some seed")
/// word = rng.rand()
/// token = rng.random_string(16)
/// pin = rng.random_string(6, b"0123456789")
/// ```
#[pyclass(name = "Isaac")]
pub struct PyIsaac {
    inner: Generator,
}

#[pymethods]
impl PyIsaac {
    /// Seed a new generator from a byte string
    ///
    /// Only the first 1024 bytes are used. An empty seed is allowed.
    #[new]
    fn new(seed: &[u8]) -> Self {
        PyIsaac {
            inner: Generator::new(seed),
        }
    }

    /// Generate 32-bit pseudo-random value
    fn rand(&mut self) -> u32 {
        self.inner.next_word()
    }

    /// Generate string of random bytes
    ///
    /// With `allowable_characters`, each byte is picked from that set
    /// instead.
    ///
    /// # Errors
    ///
    /// Raises ValueError if `n` is negative or the character set is empty.
    #[pyo3(signature = (n, allowable_characters = None))]
    fn random_string<'py>(
        &mut self,
        py: Python<'py>,
        n: i64,
        allowable_characters: Option<Vec<u8>>,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = match allowable_characters {
            Some(alphabet) => self.inner.next_chars(n, &alphabet),
            None => self.inner.next_bytes(n),
        }
        .map_err(to_py_err)?;

        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Return a value consisting of the specified number of pseudo-random bits
    ///
    /// # Errors
    ///
    /// Raises ValueError if `bits` is above 128.
    fn getrandbits(&mut self, bits: u32) -> PyResult<u128> {
        self.inner.next_bits(bits).map_err(to_py_err)
    }

    /// Unread words in the current block
    fn remaining(&self) -> usize {
        self.inner.remaining()
    }

    /// Serialize full generator state to JSON
    fn snapshot(&self) -> PyResult<String> {
        self.inner.snapshot().to_json().map_err(to_py_err)
    }

    /// Rebuild a generator from `snapshot()` output
    ///
    /// # Errors
    ///
    /// Raises ValueError if the JSON is malformed or fails validation.
    #[staticmethod]
    fn restore(json: &str) -> PyResult<Self> {
        let snapshot = GeneratorSnapshot::from_json(json).map_err(to_py_err)?;
        let inner = Generator::restore(&snapshot).map_err(to_py_err)?;
        Ok(PyIsaac { inner })
    }

    fn __repr__(&self) -> String {
        format!("Isaac(remaining={})", self.inner.remaining())
    }
}
