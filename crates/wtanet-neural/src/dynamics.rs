// Copyright 2026 The wtanet authors
// SPDX-License-Identifier: Apache-2.0

//! Fixed-point LIF dynamics.
//!
//! Pure functions for computing current/voltage updates under the Loihi
//! 12-bit fixed-point convention: a decay constant `d` in `[0, 4096)`
//! retains the fraction `(4096 - d) / 4096` of the state per step.
//!
//! ```text
//! u[t] = decay(u[t-1], du) + a_in[t]
//! v[t] = decay(v[t-1], dv) + u[t]
//! spike iff v[t] >= vth, then v[t] -= vth   (subtractive reset)
//! ```
//!
//! All arithmetic is integer-only so results are bit-identical across
//! platforms. Accumulation saturates at the `i32` bounds instead of wrapping.

use crate::error::{NumericRangeError, Result};

/// Fixed-point unity: a decay constant of 0 retains `4096/4096` of the state.
pub const DECAY_UNITY: i32 = 1 << 12;

/// Validate a decay constant against the fixed-point domain `[0, 4096)`.
#[inline]
pub fn check_current_decay(du: u16) -> Result<()> {
    if i32::from(du) >= DECAY_UNITY {
        return Err(NumericRangeError::CurrentDecayOutOfRange(du).into());
    }
    Ok(())
}

/// Validate a voltage decay constant against the fixed-point domain `[0, 4096)`.
#[inline]
pub fn check_voltage_decay(dv: u16) -> Result<()> {
    if i32::from(dv) >= DECAY_UNITY {
        return Err(NumericRangeError::VoltageDecayOutOfRange(dv).into());
    }
    Ok(())
}

/// Apply one step of fixed-point leak: `floor(value * (4096 - constant) / 4096)`.
///
/// The arithmetic shift floors for negative values as well, so a negative
/// state decays toward zero from below without ever crossing it in one step.
///
/// # Example
/// ```
/// use wtanet_neural::decay;
///
/// assert_eq!(decay(4096, 0), 4096);     // no decay
/// assert_eq!(decay(4096, 2048), 2048);  // half retained
/// assert_eq!(decay(100, 4095), 0);      // near-total decay
/// ```
#[inline]
pub fn decay(value: i32, constant: u16) -> i32 {
    debug_assert!(i32::from(constant) < DECAY_UNITY);
    let retained = i64::from(DECAY_UNITY - i32::from(constant));
    ((i64::from(value) * retained) >> 12) as i32
}

/// Advance a single LIF neuron by one timestep.
///
/// Updates current and voltage in place and checks the threshold. On a
/// spike the voltage is reset subtractively (`v -= vth`) so residual
/// supra-threshold charge carries into the next step; the current is
/// unaffected by spiking.
///
/// Returns the pre-reset voltage when the neuron spiked, `None` otherwise.
#[inline]
pub fn update_neuron_lif(
    u: &mut i32,
    v: &mut i32,
    du: u16,
    dv: u16,
    vth: i32,
    a_in: i32,
) -> Option<i32> {
    *u = decay(*u, du).saturating_add(a_in);
    *v = decay(*v, dv).saturating_add(*u);

    if *v >= vth {
        let crossing = *v;
        *v = crossing.saturating_sub(vth);
        Some(crossing)
    } else {
        None
    }
}
