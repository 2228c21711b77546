// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! Layer configuration.
//!
//! Every field has a default, so a config file (or struct literal) only
//! names what it overrides. Validation is a separate pass from parsing:
//! a parsed config may still be rejected for out-of-range values.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use wtanet_neural::{
    check_current_decay, check_message_bits, check_voltage_decay, ConfigurationError, Result,
    WtaError,
};
use wtanet_synapse::WeightSpec;

/// Construction parameters for a [`crate::WtaLayer`].
///
/// `shape` is `(N_out, N_in)`: `N_out` neurons in the population, fed by
/// spike vectors of width `N_in`. Weight fields accept scalar, vector, or
/// full-matrix shorthand (see [`WeightSpec`]).
///
/// # Example
/// ```
/// use wtanet_layer::WtaLayerConfig;
///
/// let config = WtaLayerConfig {
///     shape: (5, 5),
///     vth: 10,
///     exc_weights: 5.0.into(),
///     inh_weights: (-5.0).into(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WtaLayerConfig {
    /// Layer dimensions `(N_out, N_in)`.
    pub shape: (usize, usize),
    /// Weights for the input pathway (diagonal rule). Default 0: external
    /// input disconnected until configured.
    pub inp_weights: WeightSpec,
    /// Weights for the self-excitatory pathway (diagonal rule).
    pub exc_weights: WeightSpec,
    /// Weights for the lateral-inhibitory pathway (zero-diagonal rule).
    /// Must be negative to inhibit.
    pub inh_weights: WeightSpec,
    /// Current decay constant, fixed-point `[0, 4096)`.
    pub du: u16,
    /// Voltage decay constant, fixed-point `[0, 4096)`.
    pub dv: u16,
    /// Spike threshold.
    pub vth: i32,
    /// Spike message width in bits; 1 forces binary spikes, more enables
    /// graded spikes.
    pub num_message_bits: u8,
}

impl Default for WtaLayerConfig {
    fn default() -> Self {
        Self {
            shape: (1, 1),
            inp_weights: WeightSpec::Scalar(0.0),
            exc_weights: WeightSpec::Scalar(5.0),
            inh_weights: WeightSpec::Scalar(-5.0),
            du: 4095,
            dv: 0,
            vth: 10,
            num_message_bits: 1,
        }
    }
}

impl WtaLayerConfig {
    /// Config with the given shape and all other fields at their defaults.
    pub fn with_shape(n_out: usize, n_in: usize) -> Self {
        Self {
            shape: (n_out, n_in),
            ..Default::default()
        }
    }

    /// Check ranges that parsing cannot: positive shape, fixed-point decay
    /// domain, supported message width. Weight shapes are checked against
    /// `shape` when the matrices are resolved at layer construction.
    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.shape;
        if rows == 0 || cols == 0 {
            return Err(ConfigurationError::InvalidShape { rows, cols }.into());
        }
        check_current_decay(self.du)?;
        check_voltage_decay(self.dv)?;
        check_message_bits(self.num_message_bits)?;
        Ok(())
    }

    /// Parse a config from TOML text. Parsing does not validate; call
    /// [`WtaLayerConfig::validate`] (layer construction does so itself).
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, ConfigLoadError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigLoadError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Failures while loading a config from disk or text.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] WtaError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = WtaLayerConfig::default();
        assert_eq!(config.shape, (1, 1));
        assert_eq!(config.inp_weights, WeightSpec::Scalar(0.0));
        assert_eq!(config.exc_weights, WeightSpec::Scalar(5.0));
        assert_eq!(config.inh_weights, WeightSpec::Scalar(-5.0));
        assert_eq!(config.du, 4095);
        assert_eq!(config.dv, 0);
        assert_eq!(config.vth, 10);
        assert_eq!(config.num_message_bits, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = WtaLayerConfig::with_shape(0, 5);
        assert!(config.validate().is_err());
        config.shape = (5, 5);
        config.du = 4096;
        assert!(config.validate().is_err());
        config.du = 4095;
        config.num_message_bits = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let text = r#"
            shape = [5, 5]
            vth = 10
            exc_weights = 5
            inh_weights = -5
            inp_weights = [1.0, 1.0, 3.0, 1.0, 1.0]
        "#;
        let config = WtaLayerConfig::from_toml_str(text).unwrap();
        assert_eq!(config.shape, (5, 5));
        assert_eq!(config.exc_weights, WeightSpec::Scalar(5.0));
        assert_eq!(
            config.inp_weights,
            WeightSpec::Vector(vec![1.0, 1.0, 3.0, 1.0, 1.0])
        );
        // Unnamed fields keep their defaults.
        assert_eq!(config.du, 4095);
    }

    #[test]
    fn test_toml_matrix_weights() {
        let text = r#"
            shape = [2, 2]
            inh_weights = [[0.0, -3.0], [-3.0, 0.0]]
        "#;
        let config = WtaLayerConfig::from_toml_str(text).unwrap();
        assert_eq!(
            config.inh_weights,
            WeightSpec::Matrix(vec![vec![0.0, -3.0], vec![-3.0, 0.0]])
        );
    }

    #[test]
    fn test_json_config_parses_too() {
        let config: WtaLayerConfig =
            serde_json::from_str(r#"{"shape": [3, 3], "exc_weights": [[1.0,0.0,0.0],[0.0,1.0,0.0],[0.0,0.0,1.0]]}"#)
                .unwrap();
        assert_eq!(config.shape, (3, 3));
    }
}
