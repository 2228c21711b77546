// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! End-to-end behavior of the WTA layer: competition dynamics, degenerate
//! single-neuron form, causal feedback timing, graded spikes, and
//! config-driven construction.

use wtanet::{LifPopulation, WeightSpec, WtaLayer, WtaLayerConfig, WtaRunner};

fn competition_config() -> WtaLayerConfig {
    WtaLayerConfig {
        shape: (5, 5),
        // Neuron 2 receives a strictly larger sustained input current.
        inp_weights: WeightSpec::Vector(vec![1.0, 1.0, 3.0, 1.0, 1.0]),
        exc_weights: WeightSpec::Scalar(5.0),
        inh_weights: WeightSpec::Scalar(-5.0),
        vth: 10,
        ..Default::default()
    }
}

#[test]
fn test_winner_take_all_convergence() {
    let mut runner = WtaRunner::new(WtaLayer::new(competition_config()).unwrap());

    for _ in 0..30 {
        runner.step(&[1, 1, 1, 1, 1]).unwrap();
    }

    let counts = runner.spike_counts();
    // Exactly one neuron ever wins: the one with the strongest input.
    for (i, &c) in counts.iter().enumerate() {
        if i == 2 {
            assert!(c >= 10, "winner must keep spiking, got {c} spikes");
        } else {
            assert_eq!(c, 0, "neuron {i} must be suppressed");
        }
    }
    // The losers' voltages settle at or below zero under lateral inhibition.
    for (i, &v) in runner.layer().v().iter().enumerate() {
        if i != 2 {
            assert!(v <= 0, "suppressed neuron {i} ended at v = {v}");
        }
    }
    assert_eq!(runner.winner(), Some(2));
}

#[test]
fn test_single_neuron_layer_reduces_to_lif_unit() {
    // With N = 1 the inhibitory matrix degenerates to all-zero and the
    // excitatory matrix to a 1x1 self-loop. The layer must then match a
    // standalone LIF unit fed the same input plus its own delayed spike.
    let exc = 5.0;
    let config = WtaLayerConfig {
        shape: (1, 1),
        inp_weights: WeightSpec::Scalar(1.0),
        exc_weights: WeightSpec::Scalar(exc),
        vth: 10,
        ..Default::default()
    };
    let mut layer = WtaLayer::new(config).unwrap();
    assert_eq!(layer.inh_weights()[(0, 0)], 0.0);

    let mut unit = LifPopulation::new(1, 4095, 0, 10, 1).unwrap();
    let mut prev_spike = 0i32;

    let train = [1, 0, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1];
    for &s_in in &train {
        let layer_out = layer.step(&[s_in]).unwrap();

        let a_in = s_in + (exc as i32) * prev_spike;
        let unit_out = unit.advance(&[a_in]).unwrap();
        prev_spike = unit_out[0];

        assert_eq!(layer_out, unit_out);
        assert_eq!(layer.u(), unit.u());
        assert_eq!(layer.v(), unit.v());
    }
}

#[test]
fn test_feedback_cannot_act_within_the_same_step() {
    // vth = 1 and a strong self-loop: if feedback were same-step, the first
    // input spike would inject the excitatory weight immediately.
    let config = WtaLayerConfig {
        shape: (1, 1),
        inp_weights: WeightSpec::Scalar(1.0),
        exc_weights: WeightSpec::Scalar(50.0),
        vth: 1,
        ..Default::default()
    };
    let mut layer = WtaLayer::new(config).unwrap();

    let s = layer.step(&[1]).unwrap();
    assert_eq!(s, vec![1]);
    assert_eq!(layer.u(), &[1], "same-step current must exclude feedback");

    // One step later the self-excitation arrives, with no input at all.
    let s = layer.step(&[0]).unwrap();
    assert_eq!(layer.u(), &[50]);
    assert_eq!(s, vec![1]);
}

#[test]
fn test_binary_spikes_stay_binary() {
    let mut layer = WtaLayer::new(competition_config()).unwrap();
    for _ in 0..20 {
        // Graded input values collapse to unit spikes at 1 message bit.
        let s_out = layer.step(&[9, 9, 9, 9, 9]).unwrap();
        assert!(s_out.iter().all(|&s| s == 0 || s == 1));
    }
}

#[test]
fn test_graded_spikes_confined_to_representable_levels() {
    let bits = 4u8; // signed range [-8, 7]
    let config = WtaLayerConfig {
        shape: (2, 2),
        inp_weights: WeightSpec::Scalar(1.0),
        exc_weights: WeightSpec::Scalar(0.0),
        inh_weights: WeightSpec::Scalar(0.0),
        vth: 1,
        num_message_bits: bits,
        ..Default::default()
    };
    let mut layer = WtaLayer::new(config).unwrap();

    for &inputs in &[[100, 2], [3, -50], [7, 0]] {
        let s_out = layer.step(&inputs).unwrap();
        for &s in &s_out {
            assert!((-8..=7).contains(&s), "graded spike {s} out of range");
        }
    }
}

#[test]
fn test_layer_built_from_toml_config() {
    let config = WtaLayerConfig::from_toml_str(
        r#"
        shape = [3, 3]
        inp_weights = 1
        exc_weights = 5
        inh_weights = -5
        vth = 3
        "#,
    )
    .unwrap();
    let mut layer = WtaLayer::new(config).unwrap();

    // Three equal inputs: vth = 3 is crossed on the third step by everyone,
    // then mutual inhibition takes over.
    let mut fired_any = false;
    for _ in 0..3 {
        fired_any = layer.step(&[1, 1, 1]).unwrap().iter().any(|&s| s != 0);
    }
    assert!(fired_any);
}

#[test]
fn test_aliased_state_is_live() {
    let mut layer = WtaLayer::new(competition_config()).unwrap();

    // Parameter writes take effect on the very next step.
    layer.set_vth(1);
    assert_eq!(layer.vth(), 1);
    let s = layer.step(&[1, 1, 1, 1, 1]).unwrap();
    assert_eq!(s, vec![1, 1, 1, 1, 1]);

    // Weight writes through the mutable view are equally live.
    layer.reset();
    layer.set_vth(10);
    layer.inp_weights_mut()[(0, 0)] = 20.0;
    let s = layer.step(&[1, 0, 0, 0, 0]).unwrap();
    assert_eq!(s, vec![1, 0, 0, 0, 0]);
}
