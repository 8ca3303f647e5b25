//! Host boundary for dynamically typed numeric environments.
//!
//! ## Purpose
//!
//! Numerical hosts hand over arrays whose element type is only known at
//! run time, along with a count of requested outputs. This module models
//! that call: it checks the argument list, dispatches to the typed matcher
//! in the matching precision and packs the results back into host arrays.
//!
//! ## Design notes
//!
//! * **Same-type outputs**: Index and distance outputs are `1 x NA` arrays
//!   in the element type of the inputs.
//! * **1-based indices**: Host outputs count target columns from one.
//! * **No coercion**: Unsupported or mismatched element types are rejected.
//!
//! ## Invariants
//!
//! * Checks run in order: input count, output count, row count, element
//!   type, then the typed matcher's own checks.
//! * No output is produced unless every check passes.

// External dependencies
use log::debug;

// Internal dependencies
use crate::engine::executor::{ClosestExecutor, MatchConfig};
use crate::input::PointSet;
use crate::primitives::element::{ElementType, MatchFloat};
use crate::primitives::errors::ClosestError;
use crate::primitives::index::IndexBase;

/// Inputs the host routine takes: source and target.
pub const HOST_INPUTS: usize = 2;

/// Most outputs the host routine produces: indices and distances.
pub const HOST_MAX_OUTPUTS: usize = 2;

// ============================================================================
// Host Arrays
// ============================================================================

/// Dense column-major `rows x cols` matrix owned by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct HostMatrix<T: MatchFloat> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: MatchFloat> HostMatrix<T> {
    /// Wrap `data` as a `rows x cols` column-major matrix.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ClosestError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(ClosestError::ShapeMismatch {
                len: data.len(),
                dimensions: rows,
                count: cols,
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Single-row matrix holding `data`.
    pub fn row(data: Vec<T>) -> Self {
        Self {
            rows: 1,
            cols: data.len(),
            data,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Column-major elements.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Unwrap into the column-major element buffer.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    fn as_point_set(&self) -> Result<PointSet<'_, T>, ClosestError> {
        PointSet::new(&self.data, self.rows, self.cols)
    }
}

/// A host array of any element class.
#[derive(Debug, Clone, PartialEq)]
pub enum HostArray {
    /// Double-precision array.
    Double(HostMatrix<f64>),
    /// Single-precision array.
    Single(HostMatrix<f32>),
    /// Array of a class the matcher does not support (integers, logicals, ...).
    Unsupported {
        /// Host class name.
        class: String,
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },
}

impl HostArray {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        match self {
            HostArray::Double(m) => m.rows(),
            HostArray::Single(m) => m.rows(),
            HostArray::Unsupported { rows, .. } => *rows,
        }
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        match self {
            HostArray::Double(m) => m.cols(),
            HostArray::Single(m) => m.cols(),
            HostArray::Unsupported { cols, .. } => *cols,
        }
    }

    /// Supported element type, if any.
    pub fn element_type(&self) -> Option<ElementType> {
        match self {
            HostArray::Double(_) => Some(ElementType::Double),
            HostArray::Single(_) => Some(ElementType::Single),
            HostArray::Unsupported { .. } => None,
        }
    }

    /// Host class name.
    pub fn class_name(&self) -> &str {
        match self {
            HostArray::Double(_) => ElementType::Double.name(),
            HostArray::Single(_) => ElementType::Single.name(),
            HostArray::Unsupported { class, .. } => class.as_str(),
        }
    }
}

impl From<HostMatrix<f64>> for HostArray {
    fn from(m: HostMatrix<f64>) -> Self {
        HostArray::Double(m)
    }
}

impl From<HostMatrix<f32>> for HostArray {
    fn from(m: HostMatrix<f32>) -> Self {
        HostArray::Single(m)
    }
}

// ============================================================================
// Host Entry Point
// ============================================================================

/// Run the matcher the way a numerical host invokes it.
///
/// `inputs` must be exactly `[source, target]`. `nargout` is the number of
/// outputs the caller asked for: `0` or `1` returns the index row, `2` also
/// returns the distance row.
pub fn closest_host(inputs: &[HostArray], nargout: usize) -> Result<Vec<HostArray>, ClosestError> {
    if inputs.len() != HOST_INPUTS {
        return Err(ClosestError::ArgumentCount {
            role: "input",
            expected: "2",
            got: inputs.len(),
        });
    }
    if nargout > HOST_MAX_OUTPUTS {
        return Err(ClosestError::ArgumentCount {
            role: "output",
            expected: "at most 2",
            got: nargout,
        });
    }

    let (source, target) = (&inputs[0], &inputs[1]);

    if source.rows() != target.rows() {
        return Err(ClosestError::DimensionMismatch {
            source_dims: source.rows(),
            target_dims: target.rows(),
        });
    }

    let return_distances = nargout == HOST_MAX_OUTPUTS;
    debug!(
        "host call: {} {}x{} against {} {}x{}, {} output(s)",
        source.class_name(),
        source.rows(),
        source.cols(),
        target.class_name(),
        target.rows(),
        target.cols(),
        nargout.max(1)
    );

    match (source, target) {
        (HostArray::Double(a), HostArray::Double(b)) => {
            let outputs = match_typed(a, b, return_distances)?;
            Ok(outputs.into_iter().map(HostArray::Double).collect())
        }
        (HostArray::Single(a), HostArray::Single(b)) => {
            let outputs = match_typed(a, b, return_distances)?;
            Ok(outputs.into_iter().map(HostArray::Single).collect())
        }
        _ => Err(ClosestError::TypeMismatch {
            source_type: source.class_name().to_string(),
            target_type: target.class_name().to_string(),
        }),
    }
}

fn match_typed<T: MatchFloat>(
    source: &HostMatrix<T>,
    target: &HostMatrix<T>,
    return_distances: bool,
) -> Result<Vec<HostMatrix<T>>, ClosestError> {
    let config = MatchConfig {
        return_distances,
        ..MatchConfig::default()
    };
    let result = ClosestExecutor::run(&source.as_point_set()?, &target.as_point_set()?, &config)?;

    let indices = result
        .indices_with_base(IndexBase::One)
        .into_iter()
        .map(T::from_index)
        .collect();

    let mut outputs = vec![HostMatrix::row(indices)];
    if let Some(distances) = result.distances {
        outputs.push(HostMatrix::row(distances));
    }
    Ok(outputs)
}
