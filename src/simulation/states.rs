//! Core state types for the simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body` with position, velocity, mass and render hints
//! - `System` holding the ordered list of bodies and the current time `t`
//!
//! A body marked `fixed` (the sun) never moves but still exerts gravity.

use nalgebra::Vector2;

use crate::simulation::error::SimulationError;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // marker radius (render hint only)
    pub color: String, // marker color (render hint only)
    pub fixed: bool, // true = never integrated (the sun)
}

impl Body {
    /// Create a body, rejecting non-positive mass up front since the
    /// acceleration computation divides by it.
    pub fn new(
        x: NVec2,
        v: NVec2,
        m: f64,
        radius: f64,
        color: String,
        fixed: bool,
    ) -> Result<Self, SimulationError> {
        if m <= 0.0 {
            return Err(SimulationError::NonPositiveMass { mass: m });
        }
        Ok(Self {
            x,
            v,
            m,
            radius,
            color,
            fixed,
        })
    }

    /// Drift the body by one step: `x += dt * v`.
    /// Fixed bodies stay exactly where they are.
    pub fn advance(&mut self, dt: f64) {
        if self.fixed {
            return;
        }
        self.x += dt * self.v;
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, insertion order
    pub t: f64, // time
}

impl System {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            t: 0.0,
        }
    }

    /// Append a body. Insertion order is the iteration order everywhere.
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
