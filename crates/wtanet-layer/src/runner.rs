// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! Step runner: drives a layer over an input spike train and keeps
//! per-neuron and per-step statistics, so callers can ask "who won?"
//! without re-deriving it from raw spike vectors.

use tracing::debug;
use wtanet_neural::Result;

use crate::layer::WtaLayer;

/// Aggregated statistics for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Timesteps executed.
    pub steps: u64,
    /// Spike events across all neurons and steps.
    pub total_spikes: u64,
    /// Spike events per neuron.
    pub spike_counts: Vec<u64>,
    /// Number of neurons that fired on each step.
    pub fired_per_step: Vec<usize>,
}

/// Drives a [`WtaLayer`] and accumulates run statistics.
pub struct WtaRunner {
    layer: WtaLayer,
    spike_counts: Vec<u64>,
    fired_per_step: Vec<usize>,
    total_spikes: u64,
    /// Indices of the neurons active on the most recent step.
    last_active: Vec<usize>,
}

impl WtaRunner {
    pub fn new(layer: WtaLayer) -> Self {
        let n = layer.num_neurons();
        Self {
            layer,
            spike_counts: vec![0; n],
            fired_per_step: Vec::new(),
            total_spikes: 0,
            last_active: Vec::new(),
        }
    }

    pub fn layer(&self) -> &WtaLayer {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut WtaLayer {
        &mut self.layer
    }

    /// Step the layer once and record the outcome.
    pub fn step(&mut self, s_in: &[i32]) -> Result<Vec<i32>> {
        let s_out = self.layer.step(s_in)?;

        self.last_active.clear();
        for (i, &s) in s_out.iter().enumerate() {
            if s != 0 {
                self.spike_counts[i] += 1;
                self.total_spikes += 1;
                self.last_active.push(i);
            }
        }
        self.fired_per_step.push(self.last_active.len());
        Ok(s_out)
    }

    /// Step the layer over a whole spike train, returning the outputs.
    pub fn run(&mut self, inputs: &[Vec<i32>]) -> Result<Vec<Vec<i32>>> {
        let mut outputs = Vec::with_capacity(inputs.len());
        for s_in in inputs {
            outputs.push(self.step(s_in)?);
        }
        debug!(
            target: "wtanet-layer",
            steps = inputs.len(),
            total_spikes = self.total_spikes,
            "run complete"
        );
        Ok(outputs)
    }

    /// The winning neuron, if the competition has settled: the single
    /// neuron active on the most recent spiking step.
    pub fn winner(&self) -> Option<usize> {
        match self.last_active.as_slice() {
            &[sole] => Some(sole),
            _ => None,
        }
    }

    /// Spike events per neuron so far.
    pub fn spike_counts(&self) -> &[u64] {
        &self.spike_counts
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            steps: self.layer.timestep(),
            total_spikes: self.total_spikes,
            spike_counts: self.spike_counts.clone(),
            fired_per_step: self.fired_per_step.clone(),
        }
    }

    /// Reset the layer and all statistics.
    pub fn reset(&mut self) {
        self.layer.reset();
        self.spike_counts.fill(0);
        self.fired_per_step.clear();
        self.total_spikes = 0;
        self.last_active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WtaLayerConfig;
    use wtanet_synapse::WeightSpec;

    fn runner() -> WtaRunner {
        let config = WtaLayerConfig {
            shape: (3, 3),
            inp_weights: WeightSpec::Vector(vec![1.0, 4.0, 1.0]),
            ..Default::default()
        };
        WtaRunner::new(WtaLayer::new(config).unwrap())
    }

    #[test]
    fn test_runner_accumulates_counts() {
        let mut runner = runner();
        let inputs = vec![vec![1, 1, 1]; 10];
        let outputs = runner.run(&inputs).unwrap();
        assert_eq!(outputs.len(), 10);

        let summary = runner.summary();
        assert_eq!(summary.steps, 10);
        assert_eq!(
            summary.total_spikes,
            summary.spike_counts.iter().sum::<u64>()
        );
        assert_eq!(summary.fired_per_step.len(), 10);
        // Neuron 1 gets 4 per step and must dominate.
        assert!(summary.spike_counts[1] > summary.spike_counts[0]);
        assert!(summary.spike_counts[1] > summary.spike_counts[2]);
    }

    #[test]
    fn test_winner_settles_on_strongest_input() {
        let mut runner = runner();
        let mut winner = None;
        for _ in 0..20 {
            runner.step(&[1, 1, 1]).unwrap();
            if let Some(w) = runner.winner() {
                winner = Some(w);
            }
        }
        assert_eq!(winner, Some(1));
    }

    #[test]
    fn test_reset_clears_statistics() {
        let mut runner = runner();
        runner.run(&vec![vec![1, 1, 1]; 5]).unwrap();
        runner.reset();
        assert_eq!(runner.summary().total_spikes, 0);
        assert_eq!(runner.summary().steps, 0);
        assert_eq!(runner.spike_counts(), &[0, 0, 0]);
    }
}
