// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! # Synaptic Connectivity (Weights + Pathways)
//!
//! Connectivity machinery for the WTA layer:
//! - **Weight**: polymorphic weight specifications (scalar | vector | matrix)
//!   normalized once into full connectivity matrices
//! - **Dense**: a weighted linear mapping from a spike vector to a current
//!   contribution, with optional graded-spike quantization on the way in
//!
//! ## Design Principles
//! - Normalization happens once at construction, never per step
//! - Propagation is pure: no state mutation beyond the returned currents

pub mod dense;
pub mod weight;

pub use dense::DensePathway;
pub use weight::WeightSpec;
