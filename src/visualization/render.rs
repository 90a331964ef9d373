//! Renderer seam and the frame-loop driver.
//!
//! The core does not draw. After every step it hands the renderer read
//! access to the panel systems; each body carries `radius` and `color`
//! hints so a drawing collaborator can place markers without knowing any
//! physics. [`LogRenderer`] is the trivial collaborator used by the CLI.

use log::{debug, info};

use crate::simulation::error::SimulationError;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::System;

/// Drawing collaborator driven once per frame, after all panels stepped.
pub trait Renderer {
    fn render(&mut self, frame: u32, systems: &[System]);
}

/// Renderer that logs body positions instead of drawing them.
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, frame: u32, systems: &[System]) {
        for (panel, sys) in systems.iter().enumerate() {
            for (i, b) in sys.bodies.iter().enumerate() {
                debug!(
                    "frame {frame} panel {panel} body {i}: x = ({:.3}, {:.3})",
                    b.x.x, b.x.y
                );
            }
        }
    }
}

/// Run the scenario to completion: step every panel system once per frame,
/// then render. Stops at the first failed step; state is always
/// well-formed at frame boundaries, so stopping early is safe.
pub fn run<R: Renderer>(
    scenario: &mut Scenario,
    renderer: &mut R,
) -> Result<(), SimulationError> {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        parameters,
        systems,
        forces,
    } = scenario;

    info!(
        "run: {} panel(s), {} frames, dt = {}",
        systems.len(),
        parameters.frames,
        parameters.h0
    );

    for frame in 0..parameters.frames {
        for sys in systems.iter_mut() {
            euler_integrator(sys, forces, parameters)?;
        }
        renderer.render(frame, systems);
    }

    info!("run: finished at t = {}", systems.first().map_or(0.0, |s| s.t));
    Ok(())
}
