// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! Five neurons compete; neuron 2 gets the strongest input and wins.
//!
//! Run with: cargo run -p wtanet-layer --example wta_competition

use wtanet_layer::{WtaLayer, WtaLayerConfig, WtaRunner};

fn main() {
    let config = WtaLayerConfig {
        shape: (5, 5),
        // Diagonal input weights: neuron 2 receives 3 per input spike,
        // everyone else receives 1.
        inp_weights: vec![1.0, 1.0, 3.0, 1.0, 1.0].into(),
        exc_weights: 5.0.into(),
        inh_weights: (-5.0).into(),
        vth: 10,
        ..Default::default()
    };
    let layer = WtaLayer::new(config).expect("valid config");
    let mut runner = WtaRunner::new(layer);

    println!("step  spikes           v");
    for t in 0..30 {
        let s_out = runner.step(&[1, 1, 1, 1, 1]).expect("matching input width");
        println!("{t:>4}  {s_out:?}  {:?}", runner.layer().v());
    }

    let summary = runner.summary();
    println!("\nspike counts: {:?}", summary.spike_counts);
    match runner.winner() {
        Some(i) => println!("winner: neuron {i}"),
        None => println!("competition has not settled"),
    }
}
