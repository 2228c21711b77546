// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! # Weight Matrix Builder
//!
//! A connectivity pattern can be declared as a single value, a per-neuron
//! vector, or a full matrix. The shorthand forms are resolved once at
//! construction into a full `Array2<f32>`:
//!
//! - **Diagonal rule** (input and excitatory pathways): scalar `w` broadcasts
//!   along the main diagonal; a vector supplies the diagonal entries. "Each
//!   neuron excites only itself."
//! - **Lateral rule** (inhibitory pathway): scalar `w` fills every
//!   off-diagonal cell, zero diagonal (`w * (J - I)`); a vector `w` puts
//!   `w[j]` in every off-diagonal cell of column `j`. "Each neuron inhibits
//!   every other neuron."
//! - A full matrix of the declared shape passes through unchanged; any other
//!   shape is a configuration error.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use wtanet_neural::{ConfigurationError, Result};

/// Polymorphic weight specification, resolved once into a full matrix.
///
/// Serde-untagged so configuration files write the natural form directly:
/// `5`, `[1.0, 2.0, 3.0]`, or `[[0.0, 1.0], [1.0, 0.0]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightSpec {
    Scalar(f32),
    Vector(Vec<f32>),
    Matrix(Vec<Vec<f32>>),
}

impl Default for WeightSpec {
    fn default() -> Self {
        Self::Scalar(0.0)
    }
}

impl From<f32> for WeightSpec {
    fn from(w: f32) -> Self {
        Self::Scalar(w)
    }
}

impl From<Vec<f32>> for WeightSpec {
    fn from(w: Vec<f32>) -> Self {
        Self::Vector(w)
    }
}

impl From<Array2<f32>> for WeightSpec {
    fn from(w: Array2<f32>) -> Self {
        Self::Matrix(w.rows().into_iter().map(|r| r.to_vec()).collect())
    }
}

impl WeightSpec {
    /// Resolve under the diagonal rule into a `shape.0 × shape.1` matrix.
    ///
    /// Scalar and vector shorthands fill the main diagonal (length
    /// `min(rows, cols)`); a full matrix must match `shape` exactly.
    pub fn into_diagonal(self, shape: (usize, usize)) -> Result<Array2<f32>> {
        let diag_len = shape.0.min(shape.1);
        match self {
            Self::Scalar(w) => {
                let mut m = Array2::zeros(shape);
                for i in 0..diag_len {
                    m[(i, i)] = w;
                }
                Ok(m)
            }
            Self::Vector(w) => {
                if w.len() != diag_len {
                    return Err(ConfigurationError::WeightLengthMismatch {
                        expected: diag_len,
                        actual: w.len(),
                    }
                    .into());
                }
                let mut m = Array2::zeros(shape);
                for (i, &wi) in w.iter().enumerate() {
                    m[(i, i)] = wi;
                }
                Ok(m)
            }
            Self::Matrix(rows) => matrix_from_rows(rows, shape),
        }
    }

    /// Resolve under the lateral rule into a `size × size` matrix with a
    /// zero diagonal.
    ///
    /// Scalar `w` yields `w * (J - I)`; a vector puts `w[j]` in every
    /// off-diagonal cell of column `j`. A full matrix must be `size × size`.
    pub fn into_lateral(self, size: usize) -> Result<Array2<f32>> {
        match self {
            Self::Scalar(w) => {
                let mut m = Array2::from_elem((size, size), w);
                for i in 0..size {
                    m[(i, i)] = 0.0;
                }
                Ok(m)
            }
            Self::Vector(w) => {
                if w.len() != size {
                    return Err(ConfigurationError::WeightLengthMismatch {
                        expected: size,
                        actual: w.len(),
                    }
                    .into());
                }
                let mut m = Array2::zeros((size, size));
                for i in 0..size {
                    for j in 0..size {
                        if i != j {
                            m[(i, j)] = w[j];
                        }
                    }
                }
                Ok(m)
            }
            Self::Matrix(rows) => matrix_from_rows(rows, (size, size)),
        }
    }
}

/// Build an `Array2` from row vectors, enforcing the declared shape.
fn matrix_from_rows(rows: Vec<Vec<f32>>, shape: (usize, usize)) -> Result<Array2<f32>> {
    let actual_rows = rows.len();
    let actual_cols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|r| r.len() != actual_cols) {
        return Err(ConfigurationError::RaggedWeightMatrix.into());
    }
    if (actual_rows, actual_cols) != shape {
        return Err(ConfigurationError::WeightShapeMismatch {
            expected: shape,
            actual: (actual_rows, actual_cols),
        }
        .into());
    }
    let flat: Vec<f32> = rows.into_iter().flatten().collect();
    // Shape is consistent with flat.len() by the checks above.
    Ok(Array2::from_shape_vec(shape, flat).expect("row/col counts already validated"))
}
