// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! Spike quantization.
//!
//! Spike messages carry `num_message_bits` bits. One bit gives binary spikes
//! in `{0, 1}`; wider messages carry graded payloads confined to the signed
//! `k`-bit range `[-2^(k-1), 2^(k-1) - 1]`, i.e. the `2^k` representable
//! quantization levels.

use crate::error::{ConfigurationError, Result};

/// Widest supported spike message. Loihi graded spike payloads are 24-bit.
pub const MAX_MESSAGE_BITS: u8 = 24;

/// Validate a spike message width.
#[inline]
pub fn check_message_bits(num_message_bits: u8) -> Result<()> {
    if num_message_bits == 0 || num_message_bits > MAX_MESSAGE_BITS {
        return Err(ConfigurationError::MessageBitsOutOfRange {
            actual: num_message_bits,
        }
        .into());
    }
    Ok(())
}

/// Quantize one spike value to `num_message_bits` bits.
///
/// With 1 bit any nonzero value becomes a unit spike; with `k > 1` bits the
/// value is clamped to the signed `k`-bit range.
///
/// # Example
/// ```
/// use wtanet_neural::quantize_spike;
///
/// assert_eq!(quantize_spike(37, 1), 1);
/// assert_eq!(quantize_spike(37, 4), 7);   // clamped to [-8, 7]
/// assert_eq!(quantize_spike(-37, 4), -8);
/// assert_eq!(quantize_spike(5, 8), 5);    // already representable
/// ```
#[inline]
pub fn quantize_spike(value: i32, num_message_bits: u8) -> i32 {
    debug_assert!(num_message_bits >= 1 && num_message_bits <= MAX_MESSAGE_BITS);
    if num_message_bits <= 1 {
        i32::from(value != 0)
    } else {
        let half = 1i32 << (num_message_bits - 1);
        value.clamp(-half, half - 1)
    }
}

/// Quantize a spike vector in place.
#[inline]
pub fn quantize_spikes(spikes: &mut [i32], num_message_bits: u8) {
    for s in spikes.iter_mut() {
        *s = quantize_spike(*s, num_message_bits);
    }
}
