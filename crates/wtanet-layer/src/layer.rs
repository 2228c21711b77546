// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! # Winner-Take-All layer
//!
//! Wiring per timestep, in this fixed order:
//!
//! ```text
//! s_in ──► [inp pathway] ──┐
//!                          ├──► a_in ──► [LIF population] ──► s_out
//! s_out[t-1] ─► [exc] ─────┤                                    │
//! s_out[t-1] ─► [inh] ─────┘                                    │
//!        ▲                                                      │
//!        └──────────────── retained for step t+1 ───────────────┘
//! ```
//!
//! The feedback pathways always consume the PREVIOUS step's output; using
//! the same-step output would be acausal. The ordering is the behavioral
//! contract, not an implementation detail.

use ndarray::{ArrayView2, ArrayViewMut2};
use tracing::{debug, trace};
use wtanet_neural::{LifPopulation, Result};
use wtanet_synapse::DensePathway;

use crate::config::WtaLayerConfig;

/// A Winner-Take-All layer of LIF neurons.
///
/// Owns the three connectivity matrices and the population state. External
/// collaborators read and write that state through the lender-style
/// accessors below; writes are visible on the very next [`WtaLayer::step`]
/// with no buffering.
///
/// `step` takes `&mut self`, so when a layer is shared across threads the
/// borrow rules make the whole step a critical section for free.
/// Independent layers can be stepped in parallel.
#[derive(Debug, Clone)]
pub struct WtaLayer {
    shape: (usize, usize),
    inp: DensePathway,
    exc: DensePathway,
    inh: DensePathway,
    population: LifPopulation,
    /// Output of the previous step, the source for this step's feedback.
    s_prev: Vec<i32>,
    timestep: u64,
}

impl WtaLayer {
    /// Build a layer from a configuration.
    ///
    /// Resolves the three weight specifications into full matrices (input
    /// `N_out × N_in`, excitatory and inhibitory `N_out × N_out`) and
    /// validates every parameter. See [`WtaLayerConfig`] for defaults.
    pub fn new(config: WtaLayerConfig) -> Result<Self> {
        config.validate()?;
        let (n_out, n_in) = config.shape;

        let inp_weights = config.inp_weights.into_diagonal((n_out, n_in))?;
        let exc_weights = config.exc_weights.into_diagonal((n_out, n_out))?;
        let inh_weights = config.inh_weights.into_lateral(n_out)?;

        // Feedback pathways consume the population's already-quantized
        // output, so they share the input pathway's message width and their
        // re-quantization is a no-op.
        let bits = config.num_message_bits;
        let layer = Self {
            shape: config.shape,
            inp: DensePathway::new(inp_weights, bits)?,
            exc: DensePathway::new(exc_weights, bits)?,
            inh: DensePathway::new(inh_weights, bits)?,
            population: LifPopulation::new(n_out, config.du, config.dv, config.vth, bits)?,
            s_prev: vec![0; n_out],
            timestep: 0,
        };

        debug!(
            target: "wtanet-layer",
            n_out,
            n_in,
            du = config.du,
            dv = config.dv,
            vth = config.vth,
            num_message_bits = bits,
            "constructed WTA layer"
        );
        Ok(layer)
    }

    /// Layer dimensions `(N_out, N_in)`.
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Number of neurons in the population.
    pub fn num_neurons(&self) -> usize {
        self.shape.0
    }

    /// Advance the layer by one global timestep.
    ///
    /// Order of operations: input pathway on `s_in`, then both feedback
    /// pathways on the previous step's output, then one population update
    /// on the summed current. Returns this step's spike vector, which is
    /// also retained as the feedback source for the next step.
    pub fn step(&mut self, s_in: &[i32]) -> Result<Vec<i32>> {
        let mut a_in = self.inp.propagate(s_in)?;
        let a_exc = self.exc.propagate(&self.s_prev)?;
        let a_inh = self.inh.propagate(&self.s_prev)?;
        for i in 0..a_in.len() {
            a_in[i] = a_in[i].saturating_add(a_exc[i]).saturating_add(a_inh[i]);
        }

        let s_out = self.population.advance(&a_in)?;
        self.s_prev.copy_from_slice(&s_out);
        self.timestep += 1;

        trace!(
            target: "wtanet-layer",
            timestep = self.timestep,
            fired = s_out.iter().filter(|&&s| s != 0).count(),
            "stepped WTA layer"
        );
        Ok(s_out)
    }

    /// Timesteps executed since construction or the last reset.
    pub fn timestep(&self) -> u64 {
        self.timestep
    }

    /// Zero the population state and the retained feedback spikes; weights
    /// and parameters are kept.
    pub fn reset(&mut self) {
        self.population.reset();
        self.s_prev.fill(0);
        self.timestep = 0;
    }

    // --- aliased state ------------------------------------------------------

    pub fn u(&self) -> &[i32] {
        self.population.u()
    }

    pub fn u_mut(&mut self) -> &mut [i32] {
        self.population.u_mut()
    }

    pub fn v(&self) -> &[i32] {
        self.population.v()
    }

    pub fn v_mut(&mut self) -> &mut [i32] {
        self.population.v_mut()
    }

    pub fn du(&self) -> u16 {
        self.population.du()
    }

    pub fn set_du(&mut self, du: u16) -> Result<()> {
        self.population.set_du(du)
    }

    pub fn dv(&self) -> u16 {
        self.population.dv()
    }

    pub fn set_dv(&mut self, dv: u16) -> Result<()> {
        self.population.set_dv(dv)
    }

    pub fn vth(&self) -> i32 {
        self.population.vth()
    }

    pub fn set_vth(&mut self, vth: i32) {
        self.population.set_vth(vth)
    }

    pub fn num_message_bits(&self) -> u8 {
        self.inp.num_message_bits()
    }

    /// Change the spike message width for the input pathway and the
    /// population's output alike.
    pub fn set_num_message_bits(&mut self, num_message_bits: u8) -> Result<()> {
        self.inp.set_num_message_bits(num_message_bits)?;
        self.exc.set_num_message_bits(num_message_bits)?;
        self.inh.set_num_message_bits(num_message_bits)?;
        self.population.set_num_message_bits(num_message_bits)
    }

    pub fn inp_weights(&self) -> ArrayView2<'_, f32> {
        self.inp.weights()
    }

    pub fn inp_weights_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        self.inp.weights_mut()
    }

    pub fn exc_weights(&self) -> ArrayView2<'_, f32> {
        self.exc.weights()
    }

    pub fn exc_weights_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        self.exc.weights_mut()
    }

    pub fn inh_weights(&self) -> ArrayView2<'_, f32> {
        self.inh.weights()
    }

    pub fn inh_weights_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        self.inh.weights_mut()
    }
}
