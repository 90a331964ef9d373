//! Failure conditions of the physics core.
//!
//! Every variant is terminal for the run: the state is deterministic, so a
//! failed step cannot be resumed without external correction.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Two distinct bodies occupy the exact same position, making the
    /// gravitational force undefined (division by zero distance).
    DegenerateConfiguration { first: usize, second: usize },
    /// A body was configured with `mass <= 0`.
    NonPositiveMass { mass: f64 },
    /// The time step must be strictly positive.
    InvalidTimeStep { h0: f64 },
    /// A panel referenced a body index outside the configured body list.
    BadPanelIndex { panel: usize, index: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateConfiguration { first, second } => write!(
                f,
                "bodies {first} and {second} are at the same position, gravity is undefined"
            ),
            Self::NonPositiveMass { mass } => {
                write!(f, "body mass must be positive, got {mass}")
            }
            Self::InvalidTimeStep { h0 } => {
                write!(f, "time step must be positive, got {h0}")
            }
            Self::BadPanelIndex { panel, index } => {
                write!(f, "panel {panel} references unknown body index {index}")
            }
        }
    }
}

impl Error for SimulationError {}
