// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! # LIF Neuron Population
//!
//! A population of leaky-integrate-and-fire neurons advanced one discrete
//! timestep at a time. State lives in dense parallel arrays (`u`, `v`) so
//! the hot loop is a straight sequential pass with no pointer chasing.
//!
//! The population exposes lender-style accessors over its state: callers
//! mutate `u`/`v` and the scalar parameters through `&mut` views of the
//! owned arrays, so an external write is visible on the very next step.

use crate::dynamics::{check_current_decay, check_voltage_decay, update_neuron_lif};
use crate::error::{ConfigurationError, Result};
use crate::spikes::{check_message_bits, quantize_spike};

/// Population of LIF neurons with fixed-point dynamics.
///
/// Invariant: `u.len() == v.len() == size` for the lifetime of the value;
/// `du` and `dv` stay inside `[0, 4096)`.
#[derive(Debug, Clone)]
pub struct LifPopulation {
    u: Vec<i32>,
    v: Vec<i32>,
    du: u16,
    dv: u16,
    vth: i32,
    num_message_bits: u8,
}

impl LifPopulation {
    /// Create a population of `size` neurons with `u = v = 0`.
    ///
    /// Fails with a configuration error for an empty population or an
    /// unsupported message width, and with a numeric-range error when a
    /// decay constant falls outside `[0, 4096)`.
    pub fn new(size: usize, du: u16, dv: u16, vth: i32, num_message_bits: u8) -> Result<Self> {
        if size == 0 {
            return Err(ConfigurationError::InvalidShape { rows: size, cols: size }.into());
        }
        check_current_decay(du)?;
        check_voltage_decay(dv)?;
        check_message_bits(num_message_bits)?;

        Ok(Self {
            u: vec![0; size],
            v: vec![0; size],
            du,
            dv,
            vth,
            num_message_bits,
        })
    }

    /// Number of neurons.
    pub fn len(&self) -> usize {
        self.u.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    /// Advance the whole population by one timestep.
    ///
    /// `a_in` is the summed synaptic current arriving this step, one entry
    /// per neuron. Returns the spike vector: `1` per spiking neuron for
    /// binary messages, or the quantized pre-reset voltage for graded ones.
    pub fn advance(&mut self, a_in: &[i32]) -> Result<Vec<i32>> {
        if a_in.len() != self.u.len() {
            return Err(ConfigurationError::SpikeLengthMismatch {
                expected: self.u.len(),
                actual: a_in.len(),
            }
            .into());
        }

        let mut s_out = vec![0i32; self.u.len()];
        for (i, &a) in a_in.iter().enumerate() {
            if let Some(crossing) =
                update_neuron_lif(&mut self.u[i], &mut self.v[i], self.du, self.dv, self.vth, a)
            {
                s_out[i] = if self.num_message_bits <= 1 {
                    1
                } else {
                    quantize_spike(crossing, self.num_message_bits)
                };
            }
        }
        Ok(s_out)
    }

    /// Zero all currents and voltages, keeping the parameters.
    pub fn reset(&mut self) {
        self.u.fill(0);
        self.v.fill(0);
    }

    // --- aliased state ------------------------------------------------------

    pub fn u(&self) -> &[i32] {
        &self.u
    }

    pub fn u_mut(&mut self) -> &mut [i32] {
        &mut self.u
    }

    pub fn v(&self) -> &[i32] {
        &self.v
    }

    pub fn v_mut(&mut self) -> &mut [i32] {
        &mut self.v
    }

    pub fn du(&self) -> u16 {
        self.du
    }

    pub fn set_du(&mut self, du: u16) -> Result<()> {
        check_current_decay(du)?;
        self.du = du;
        Ok(())
    }

    pub fn dv(&self) -> u16 {
        self.dv
    }

    pub fn set_dv(&mut self, dv: u16) -> Result<()> {
        check_voltage_decay(dv)?;
        self.dv = dv;
        Ok(())
    }

    pub fn vth(&self) -> i32 {
        self.vth
    }

    pub fn set_vth(&mut self, vth: i32) {
        self.vth = vth;
    }

    pub fn num_message_bits(&self) -> u8 {
        self.num_message_bits
    }

    pub fn set_num_message_bits(&mut self, num_message_bits: u8) -> Result<()> {
        check_message_bits(num_message_bits)?;
        self.num_message_bits = num_message_bits;
        Ok(())
    }
}
