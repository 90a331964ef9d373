//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - one `System` per panel, bodies at t = 0
//! - the active force set (`AccelSet`)
//!
//! This factory is the only place simulation state comes from; nothing is
//! instantiated at module load. All validation the config layer defers
//! (positive masses, positive step, panel indices) happens here.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::error::SimulationError;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// A fully-initialized runtime scenario.
///
/// `systems` holds one entry per panel. Without a panel section in the
/// config there is exactly one system containing every body. Panels are
/// independent sub-simulations: each gets its own copy of the bodies it
/// references, so stepping one never affects another.
#[derive(Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub systems: Vec<System>,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimulationError> {
        let p_cfg = cfg.parameters;
        if p_cfg.h0 <= 0.0 {
            return Err(SimulationError::InvalidTimeStep { h0: p_cfg.h0 });
        }
        let parameters = Parameters {
            h0: p_cfg.h0,
            frames: p_cfg.frames,
            g: p_cfg.g,
            size: p_cfg.size,
        };

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors.
        // `Body::new` rejects non-positive masses.
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                Body::new(
                    NVec2::new(bc.x[0], bc.x[1]),
                    NVec2::new(bc.v[0], bc.v[1]),
                    bc.m,
                    bc.radius,
                    bc.color.clone(),
                    bc.fixed,
                )
            })
            .collect::<Result<Vec<Body>, SimulationError>>()?;

        // Panels: each panel becomes its own system with copies of the
        // referenced bodies. A shared fixed body (the sun) never mutates,
        // so per-panel copies behave identically to sharing it.
        let systems = match cfg.panels {
            Some(panels) => {
                let mut systems = Vec::with_capacity(panels.len());
                for (p, panel) in panels.iter().enumerate() {
                    let mut system = System::new();
                    for &index in panel {
                        let body = bodies.get(index).ok_or(
                            SimulationError::BadPanelIndex { panel: p, index },
                        )?;
                        system.add_body(body.clone());
                    }
                    systems.push(system);
                }
                systems
            }
            None => {
                let mut system = System::new();
                for body in bodies {
                    system.add_body(body);
                }
                vec![system]
            }
        };

        // Forces: construct an AccelSet and register Newtonian gravity.
        let forces = AccelSet::new().with(NewtonianGravity { g: parameters.g });

        Ok(Self {
            parameters,
            systems,
            forces,
        })
    }
}
