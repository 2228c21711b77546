// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! Error types shared by the wtanet crates.
//!
//! Two failure families exist: configuration errors (shapes and widths that
//! cannot be reconciled at construction) and numeric-range errors (values
//! outside the fixed-point domain). Steady-state stepping never fails for
//! numeric reasons; accumulation clamps deterministically at the `i32` bounds.

use thiserror::Error;

/// Construction-time validation failures: mismatched shapes, bad widths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("layer shape ({rows}, {cols}) must have positive dimensions")]
    InvalidShape { rows: usize, cols: usize },

    #[error("weight matrix shape mismatch: expected {expected:?}, got {actual:?}")]
    WeightShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("weight vector length mismatch: expected {expected}, got {actual}")]
    WeightLengthMismatch { expected: usize, actual: usize },

    #[error("weight matrix rows have unequal lengths")]
    RaggedWeightMatrix,

    #[error("spike vector length mismatch: expected {expected}, got {actual}")]
    SpikeLengthMismatch { expected: usize, actual: usize },

    #[error("num_message_bits must be in 1..={max}, got {actual}", max = crate::spikes::MAX_MESSAGE_BITS)]
    MessageBitsOutOfRange { actual: u8 },
}

/// Values outside the Loihi 12-bit fixed-point domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericRangeError {
    #[error("current decay {0} outside fixed-point domain [0, 4096)")]
    CurrentDecayOutOfRange(u16),

    #[error("voltage decay {0} outside fixed-point domain [0, 4096)")]
    VoltageDecayOutOfRange(u16),
}

/// Umbrella error for all wtanet crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WtaError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    NumericRange(#[from] NumericRangeError),
}

pub type Result<T> = core::result::Result<T, WtaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigurationError::WeightShapeMismatch {
            expected: (5, 5),
            actual: (3, 5),
        };
        assert_eq!(
            err.to_string(),
            "weight matrix shape mismatch: expected (5, 5), got (3, 5)"
        );

        let err = NumericRangeError::CurrentDecayOutOfRange(4096);
        assert!(err.to_string().contains("4096"));
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: WtaError = NumericRangeError::VoltageDecayOutOfRange(5000).into();
        assert!(matches!(err, WtaError::NumericRange(_)));
    }
}
