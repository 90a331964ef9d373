//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, frame count, physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   h0: 1.0                 # fixed step size (dT)
//!   frames: 100             # total frames to simulate
//!   g: 1.0                  # gravitational constant
//!   size: 1000.0            # world extent hint for renderers
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1000.0
//!     radius: 20.0
//!     color: "yellow"
//!     fixed: true
//!   - x: [ 600.0, 250.0 ]
//!     v: [ -10.0, 0.0 ]
//!     m: 10.0
//!
//! # Optional: run independent sub-simulations over subsets of the body
//! # list (indices into `bodies`). Omitted = one system with all bodies.
//! panels:
//!   - [ 0, 1 ]
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation; validation (positive masses, positive step, panel
//! indices in range) happens at build time, not here.

use serde::Deserialize;

fn default_h0() -> f64 {
    1.0
}

fn default_frames() -> u32 {
    100
}

fn default_g() -> f64 {
    1.0
}

fn default_size() -> f64 {
    1000.0
}

fn default_radius() -> f64 {
    10.0
}

fn default_color() -> String {
    "black".to_string()
}

/// Global numerical and physical parameters for a scenario.
/// Defaults reproduce the classic sun-and-planets run.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_h0")]
    pub h0: f64, // fixed step size (dT)
    #[serde(default = "default_frames")]
    pub frames: u32, // total frames to simulate
    #[serde(default = "default_g")]
    pub g: f64, // gravitational constant
    #[serde(default = "default_size")]
    pub size: f64, // world extent hint for renderers
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            h0: default_h0(),
            frames: default_frames(),
            g: default_g(),
            size: default_size(),
        }
    }
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position
    pub v: [f64; 2], // initial velocity
    pub m: f64,      // mass, must be positive
    #[serde(default = "default_radius")]
    pub radius: f64, // marker radius, render hint only
    #[serde(default = "default_color")]
    pub color: String, // marker color, render hint only
    #[serde(default)]
    pub fixed: bool, // true = body never moves (the sun)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // step size, frame count, constants
    pub bodies: Vec<BodyConfig>, // initial state of every body
    #[serde(default)]
    pub panels: Option<Vec<Vec<usize>>>, // body subsets for independent sub-simulations
}
