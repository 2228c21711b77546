// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! # LIF Neural Computation (Platform-Agnostic)
//!
//! Core neuron-population machinery for the WTA layer:
//! - **Dynamics**: Loihi-style 12-bit fixed-point decay and per-neuron LIF updates
//! - **Population**: owned per-neuron current/voltage state advanced one step at a time
//! - **Spikes**: binary and graded spike quantization
//! - **Errors**: configuration and numeric-range error types shared by all crates
//!
//! All computation is pure integer arithmetic so that runs are bit-stable
//! across platforms.

pub mod dynamics;
pub mod error;
pub mod population;
pub mod spikes;

// Re-export everything for convenience
pub use dynamics::{
    check_current_decay, check_voltage_decay, decay, update_neuron_lif, DECAY_UNITY,
};
pub use error::{ConfigurationError, NumericRangeError, Result, WtaError};
pub use population::LifPopulation;
pub use spikes::{check_message_bits, quantize_spike, quantize_spikes, MAX_MESSAGE_BITS};
