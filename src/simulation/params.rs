//! Numerical and physical parameters for the simulation.
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size and total frame count,
//! - the gravitational constant,
//! - the world half-extent hint used by renderers to pin their axes.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // step size (dT)
    pub frames: u32, // total frames to simulate
    pub g: f64, // gravitational constant
    pub size: f64, // world extent (render hint, axes span +-size/2)
}
