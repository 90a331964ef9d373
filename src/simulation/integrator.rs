//! Fixed-step time integrator for the system.
//!
//! A single semi-implicit Euler scheme: velocities are kicked from the
//! pre-step position snapshot, then positions drift using the already
//! updated velocities. The two phases must not interleave per body, or the
//! outcome would depend on insertion order.

use super::error::SimulationError;
use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one step of size `params.h0`.
///
/// Phase 1 accumulates accelerations for every body from the unmutated
/// positions and kicks `v += dt * a` on the non-fixed ones. Phase 2 drifts
/// `x += dt * v`; fixed bodies skip both phases but still exerted gravity
/// during phase 1. `sys.t` advances by one full step.
pub fn euler_integrator(
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
) -> Result<(), SimulationError> {
    let n = sys.bodies.len();
    if n == 0 {
        // no bodies, nothing to do
        return Ok(());
    }

    let dt = params.h0;

    // a[i] holds the total acceleration of body i at the current time,
    // computed before any state mutation.
    let mut accel = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut accel)?;

    // Kick: v_n+1 = v_n + dt * a_n (non-fixed bodies only)
    for (b, a) in sys.bodies.iter_mut().zip(accel.iter()) {
        if !b.fixed {
            b.v += dt * *a;
        }
    }

    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.advance(dt);
    }

    sys.t += dt;
    Ok(())
}
