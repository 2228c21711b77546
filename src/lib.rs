// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! # wtanet — Winner-Take-All layer of LIF neurons
//!
//! A population of leaky-integrate-and-fire neurons coupled by
//! self-excitatory and lateral-inhibitory pathways: the neuron with the
//! strongest input suppresses the others and wins. Dynamics use the Loihi
//! 12-bit fixed-point convention, so runs are bit-stable across platforms.
//!
//! ## Quick Start
//!
//! ```
//! use wtanet::{WtaLayer, WtaLayerConfig};
//!
//! let config = WtaLayerConfig {
//!     shape: (5, 5),
//!     inp_weights: vec![1.0, 1.0, 3.0, 1.0, 1.0].into(), // neuron 2 favored
//!     vth: 10,
//!     ..Default::default()
//! };
//! let mut layer = WtaLayer::new(config).unwrap();
//!
//! let mut last = Vec::new();
//! for _ in 0..20 {
//!     last = layer.step(&[1, 1, 1, 1, 1]).unwrap();
//! }
//! // Competition has settled: only neuron 2 still spikes.
//! assert_eq!(last.iter().filter(|&&s| s != 0).count(), 1);
//! ```
//!
//! ## Crates
//!
//! - [`neural`]: LIF population dynamics, fixed-point decay, spike
//!   quantization, error types
//! - [`synapse`]: weight-specification normalization and dense pathways
//! - [`layer`]: the WTA layer itself, configuration, and the step runner

pub use wtanet_layer as layer;
pub use wtanet_neural as neural;
pub use wtanet_synapse as synapse;

// Weight matrices are ndarray arrays; re-export so downstream users build
// them without pinning their own copy of the crate.
pub use ndarray;

// Re-export the primary surface at the crate root.
pub use wtanet_layer::{ConfigLoadError, RunSummary, WtaLayer, WtaLayerConfig, WtaRunner};
pub use wtanet_neural::{
    decay, quantize_spike, ConfigurationError, LifPopulation, NumericRangeError, Result, WtaError,
};
pub use wtanet_synapse::{DensePathway, WeightSpec};
