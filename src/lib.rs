pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::error::SimulationError;
pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::render::{run, LogRenderer, Renderer};

pub use benchmark::benchmark::{bench_gravity, bench_step};
