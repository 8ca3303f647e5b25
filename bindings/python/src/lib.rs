//! Python bindings for closest.
//!
//! Provides Python access to the closest Rust library via PyO3.
//!
//! Point sets are 2-D numpy arrays shaped `(dimensions, count)`: one point per
//! column. Both arrays must be `float64` or both `float32`; matching runs in
//! that precision.

#![deny(missing_docs)]

use numpy::{Element, PyArray1, PyReadonlyArray2};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

use ::closest::internals::api::{ClosestError, IndexBase, MatchFloat, MatchResult};
use ::closest::prelude::{Batch, Closest};

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a ClosestError to a PyErr
fn to_py_error(e: ClosestError) -> PyErr {
    match e {
        ClosestError::TypeMismatch { .. } => PyTypeError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

/// Describe an argument for type errors
fn describe(obj: &Bound<'_, PyAny>) -> String {
    match (obj.getattr("dtype"), obj.getattr("ndim")) {
        (Ok(dtype), Ok(ndim)) => format!("{ndim}-D {dtype}"),
        _ => "a non-array object".to_string(),
    }
}

/// Run the batch matcher on two array views
fn run<T: MatchFloat + Element>(
    py: Python<'_>,
    a: &PyReadonlyArray2<'_, T>,
    b: &PyReadonlyArray2<'_, T>,
    return_distances: bool,
    early_exit: bool,
    parallel: bool,
) -> PyResult<MatchResult<T>> {
    let matcher = Closest::<T>::new()
        .return_distances(return_distances)
        .early_exit(early_exit)
        .adapter(Batch)
        .parallel(parallel)
        .build()
        .map_err(to_py_error)?;

    let (a, b) = (a.as_array(), b.as_array());
    py.allow_threads(|| matcher.fit(&a, &b))
        .map_err(to_py_error)
}

// ============================================================================
// Python Classes
// ============================================================================

enum Distances {
    Double(Vec<f64>),
    Single(Vec<f32>),
}

/// Result from closest-point matching.
#[pyclass(name = "MatchResult")]
pub struct PyMatchResult {
    indices: Vec<i64>,
    distances: Option<Distances>,
}

impl PyMatchResult {
    fn new<T: MatchFloat>(
        result: MatchResult<T>,
        base: IndexBase,
        wrap: fn(Vec<T>) -> Distances,
    ) -> Self {
        Self {
            indices: result
                .indices_with_base(base)
                .into_iter()
                .map(|j| j as i64)
                .collect(),
            distances: result.distances.map(wrap),
        }
    }
}

#[pymethods]
impl PyMatchResult {
    /// Column of the closest target point for each source point
    #[getter]
    fn indices<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i64>> {
        PyArray1::from_vec(py, self.indices.clone())
    }

    /// Squared distances in the input dtype (if requested)
    #[getter]
    fn distances<'py>(&self, py: Python<'py>) -> Option<Bound<'py, PyAny>> {
        self.distances.as_ref().map(|d| match d {
            Distances::Double(v) => PyArray1::from_vec(py, v.clone()).into_any(),
            Distances::Single(v) => PyArray1::from_vec(py, v.clone()).into_any(),
        })
    }

    fn __len__(&self) -> usize {
        self.indices.len()
    }

    fn __repr__(&self) -> String {
        let dtype = match self.distances {
            Some(Distances::Double(_)) => "float64",
            Some(Distances::Single(_)) => "float32",
            None => "none",
        };
        format!("MatchResult(n={}, distances={})", self.indices.len(), dtype)
    }
}

// ============================================================================
// Python Functions
// ============================================================================

/// Match every column of `a` to its closest column of `b`.
///
/// Parameters
/// ----------
/// a : ndarray
///     Source points, shape (dimensions, n_source), float64 or float32.
/// b : ndarray
///     Target points, shape (dimensions, n_target), same dtype as `a`.
/// return_distances : bool, optional
///     Also return squared Euclidean distances (default: False).
/// one_based : bool, optional
///     Report indices counting from 1 instead of 0 (default: False).
/// early_exit : bool, optional
///     Abandon a candidate once its partial sum exceeds the best so far.
///     Never changes the result (default: False).
/// parallel : bool, optional
///     Match source points on multiple threads (default: False).
///
/// Returns
/// -------
/// MatchResult
///     `indices` (int64) and, if requested, `distances` (input dtype).
///
/// Raises
/// ------
/// TypeError
///     If the arrays are not both float64 or both float32 2-D arrays.
/// ValueError
///     If row counts differ or `b` has no columns.
#[pyfunction]
#[pyo3(signature = (
    a, b,
    return_distances=false,
    one_based=false,
    early_exit=false,
    parallel=false
))]
fn closest<'py>(
    py: Python<'py>,
    a: &Bound<'py, PyAny>,
    b: &Bound<'py, PyAny>,
    return_distances: bool,
    one_based: bool,
    early_exit: bool,
    parallel: bool,
) -> PyResult<PyMatchResult> {
    let base = if one_based {
        IndexBase::One
    } else {
        IndexBase::Zero
    };

    if let (Ok(a64), Ok(b64)) = (
        a.extract::<PyReadonlyArray2<'py, f64>>(),
        b.extract::<PyReadonlyArray2<'py, f64>>(),
    ) {
        let result = run(py, &a64, &b64, return_distances, early_exit, parallel)?;
        return Ok(PyMatchResult::new(result, base, Distances::Double));
    }

    if let (Ok(a32), Ok(b32)) = (
        a.extract::<PyReadonlyArray2<'py, f32>>(),
        b.extract::<PyReadonlyArray2<'py, f32>>(),
    ) {
        let result = run(py, &a32, &b32, return_distances, early_exit, parallel)?;
        return Ok(PyMatchResult::new(result, base, Distances::Single));
    }

    Err(PyTypeError::new_err(format!(
        "closest requires two 2-D arrays that are both float64 or both float32, got {} and {}",
        describe(a),
        describe(b)
    )))
}

// ============================================================================
// Module Registration
// ============================================================================

/// closest_py: exhaustive closest-point matching for Python.
#[pymodule]
fn closest_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatchResult>()?;
    m.add_function(wrap_pyfunction!(crate::closest, m)?)?;
    Ok(())
}
