//! Force / acceleration contributors for the simulation.
//!
//! Defines the acceleration trait and the direct pairwise Newtonian
//! gravity term. Coincident bodies are a hard error here, not a softened
//! case: the force is mathematically undefined at zero separation.

use std::fmt;

use crate::simulation::error::SimulationError;
use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms.
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term.
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`.
    /// `out[i]` is set to the sum of contributions from all terms.
    pub fn accumulate_accels(
        &self,
        t: f64,
        sys: &System,
        out: &mut [NVec2],
    ) -> Result<(), SimulationError> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out)?;
        }
        Ok(())
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

// Boxed trait objects have no Debug of their own; the term count is the
// useful part anyway.
impl fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccelSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

/// Trait for acceleration sources operating on [`System`].
/// Implementations add their contribution into `out[i]` for each body.
pub trait Acceleration {
    fn acceleration(
        &self,
        t: f64,
        sys: &System,
        out: &mut [NVec2],
    ) -> Result<(), SimulationError>;
}

/// Direct pairwise Newtonian gravity, O(n^2) per evaluation.
///
/// Accelerations are accumulated for every body, fixed ones included; the
/// integrator decides whose velocity actually changes. Exact zero
/// separation fails with [`SimulationError::DegenerateConfiguration`]
/// rather than silently producing NaN.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant (1.0 in the classic scenario)
}

impl Acceleration for NewtonianGravity {
    fn acceleration(
        &self,
        _t: f64,
        sys: &System,
        out: &mut [NVec2],
    ) -> Result<(), SimulationError> {
        let n = sys.bodies.len();
        if n == 0 {
            return Ok(());
        }

        // Loop over each unordered pair (i, j) with i < j and apply the
        // equal-and-opposite contributions in one pass. The summation order
        // differs from a per-ordered-pair walk only in floating-point
        // rounding.
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x; // position of body i
            let mi = bi.m; // mass of body i

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Displacement from i to j: i is pulled along +r, j along -r.
                let r = bj.x - xi;
                let r2 = r.dot(&r);

                if r2 == 0.0 {
                    return Err(SimulationError::DegenerateConfiguration {
                        first: i,
                        second: j,
                    });
                }

                // a_i = G * m_j * r / |r|^3, i.e. the unit vector toward j
                // scaled by G * m_j / |r|^2.
                let inv_r = r2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = self.g * inv_r3;

                // Newton's third law: equal and opposite.
                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
        Ok(())
    }
}
