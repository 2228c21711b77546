// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! # WTA Layer
//!
//! Composition of the wtanet engine crates into a Winner-Take-All layer:
//! an input pathway feeds a LIF population whose spike output is routed back
//! through self-excitatory and lateral-inhibitory pathways with a one-step
//! delay. A neuron that spikes reinforces itself and suppresses the rest,
//! so a small input advantage compounds until one neuron dominates.
//!
//! - [`WtaLayerConfig`]: serde-backed construction parameters (TOML-loadable)
//! - [`WtaLayer`]: the layer itself, advanced one timestep per [`WtaLayer::step`]
//! - [`WtaRunner`]: drives a layer over a spike train and keeps run statistics

pub mod config;
pub mod layer;
pub mod runner;

pub use config::{ConfigLoadError, WtaLayerConfig};
pub use layer::WtaLayer;
pub use runner::{RunSummary, WtaRunner};
