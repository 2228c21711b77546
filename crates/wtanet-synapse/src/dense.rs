// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! # Dense Synaptic Pathway
//!
//! A weighted linear mapping from an incoming spike vector to a current
//! contribution: `current = weights · quantize(spikes)`. Propagation is the
//! hot path of every timestep, so it is a plain row-major pass over the
//! matrix with contributions accumulated in `f32` and rounded into the
//! integer currents the population consumes.

use ndarray::{Array2, ArrayView2, ArrayViewMut2};
use tracing::trace;
use wtanet_neural::{check_message_bits, quantize_spike, ConfigurationError, Result};

/// Dense all-to-all synaptic pathway with an owned weight matrix.
///
/// The matrix shape is fixed for the pathway's lifetime; weight values are
/// mutable through [`DensePathway::weights_mut`].
#[derive(Debug, Clone)]
pub struct DensePathway {
    weights: Array2<f32>,
    num_message_bits: u8,
}

impl DensePathway {
    /// Wrap a resolved weight matrix into a pathway.
    pub fn new(weights: Array2<f32>, num_message_bits: u8) -> Result<Self> {
        check_message_bits(num_message_bits)?;
        Ok(Self {
            weights,
            num_message_bits,
        })
    }

    /// Output width (number of target neurons).
    pub fn out_width(&self) -> usize {
        self.weights.nrows()
    }

    /// Input width (spike vector length this pathway consumes).
    pub fn in_width(&self) -> usize {
        self.weights.ncols()
    }

    /// Compute the current contribution for one spike vector.
    ///
    /// Incoming spikes are quantized to this pathway's message width first;
    /// already-quantized spikes pass through unchanged. Pure: the only
    /// effect is the returned current vector.
    pub fn propagate(&self, spikes: &[i32]) -> Result<Vec<i32>> {
        if spikes.len() != self.in_width() {
            return Err(ConfigurationError::SpikeLengthMismatch {
                expected: self.in_width(),
                actual: spikes.len(),
            }
            .into());
        }

        let quantized: Vec<i32> = spikes
            .iter()
            .map(|&s| quantize_spike(s, self.num_message_bits))
            .collect();

        let mut current = vec![0i32; self.out_width()];
        for (i, row) in self.weights.rows().into_iter().enumerate() {
            let mut acc = 0.0f32;
            for (w, &s) in row.iter().zip(&quantized) {
                if s != 0 {
                    acc += w * s as f32;
                }
            }
            // Round half away from zero; `as` saturates at the i32 bounds.
            current[i] = acc.round() as i32;
        }

        trace!(
            target: "wtanet-synapse",
            active = quantized.iter().filter(|&&s| s != 0).count(),
            out_width = self.out_width(),
            "propagated spike vector"
        );
        Ok(current)
    }

    pub fn num_message_bits(&self) -> u8 {
        self.num_message_bits
    }

    pub fn set_num_message_bits(&mut self, num_message_bits: u8) -> Result<()> {
        check_message_bits(num_message_bits)?;
        self.num_message_bits = num_message_bits;
        Ok(())
    }

    /// Read-only view of the weight matrix.
    pub fn weights(&self) -> ArrayView2<'_, f32> {
        self.weights.view()
    }

    /// Mutable view of the weight matrix. The view keeps the shape fixed
    /// while letting callers rewrite connectivity between steps.
    pub fn weights_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        self.weights.view_mut()
    }
}
